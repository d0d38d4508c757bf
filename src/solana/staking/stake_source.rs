use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use solana_account_decoder::UiAccountEncoding;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_client::rpc_filter::{Memcmp, RpcFilterType};
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;

use crate::entity::{AppError, NftMetadata, StakeRecord};
use crate::solana::staking::accounts::{StakeAccount, STAKE_MINT_OFFSET};
use crate::utils::parse_pubkey;

/// Source of on-chain stake entries for a single mint.
#[async_trait]
pub trait StakeSource: Send + Sync {
    async fn stakes_by_mint(&self, mint: &str) -> Result<Vec<StakeRecord>>;
}

/// Stake source backed by the staking program's accounts on mainnet.
pub struct ChainStakeSource {
    solana_client: Arc<RpcClient>,
    http_client: Client,
    program_id: Pubkey,
}

impl ChainStakeSource {
    pub fn new(solana_client: Arc<RpcClient>, program_id: &str) -> Result<Self> {
        Ok(Self {
            solana_client,
            http_client: Client::new(),
            program_id: parse_pubkey(program_id)?,
        })
    }

    /// Resolves the off-chain JSON a stake account points at.
    async fn fetch_metadata(&self, uri: &str) -> Result<NftMetadata> {
        debug!("Fetching token metadata from {}", uri);

        let response = self
            .http_client
            .get(uri)
            .send()
            .await
            .map_err(|e| AppError::Metadata(format!("{}: {}", uri, e)))?;

        if !response.status().is_success() {
            return Err(anyhow!(AppError::Metadata(format!(
                "{}: HTTP {}",
                uri,
                response.status()
            ))));
        }

        let metadata: NftMetadata = response
            .json()
            .await
            .map_err(|e| AppError::MalformedPayload(format!("token metadata: {}", e)))?;

        Ok(metadata)
    }
}

#[async_trait]
impl StakeSource for ChainStakeSource {
    async fn stakes_by_mint(&self, mint: &str) -> Result<Vec<StakeRecord>> {
        let mint_pubkey = parse_pubkey(mint)?;

        let config = RpcProgramAccountsConfig {
            filters: Some(vec![RpcFilterType::Memcmp(Memcmp::new_base58_encoded(
                STAKE_MINT_OFFSET,
                mint_pubkey.as_ref(),
            ))]),
            account_config: RpcAccountInfoConfig {
                encoding: Some(UiAccountEncoding::Base64),
                ..Default::default()
            },
            ..Default::default()
        };

        let accounts = self
            .solana_client
            .get_program_accounts_with_config(&self.program_id, config)
            .await
            .map_err(|e| AppError::Rpc(format!("get_program_accounts for {}: {}", mint, e)))?;

        info!("Mint {} has {} stake entries", mint, accounts.len());

        let mut records = Vec::with_capacity(accounts.len());

        for (_, account) in accounts {
            let stake = StakeAccount::unpack(&account.data)?;
            let metadata = self.fetch_metadata(&stake.metadata_uri).await?;

            records.push(StakeRecord {
                mint: mint.to_string(),
                name: metadata.name,
                image: metadata.image,
                withdrawn: stake.withdrawn,
                harvested: stake.harvested,
                bonus_redeemed: stake.bonus_redeemed,
            });
        }

        Ok(records)
    }
}
