use anyhow::Result;
use solana_client::nonblocking::rpc_client::RpcClient;
use std::sync::Arc;

use crate::config::Config;
use crate::solana::staking::stake_source::ChainStakeSource;
use crate::solana::StakeSource;
use crate::tensor::listing_service::TensorListingService;
use crate::tensor::ListingService;

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    solana_client: Arc<RpcClient>,

    listing_service: Arc<dyn ListingService + Send + Sync>,
    stake_source: Arc<dyn StakeSource + Send + Sync>,

    config: Config,
}

impl ServiceContainer {
    /// Create a new service container with essential dependencies
    pub fn new(config: Config, solana_client: Arc<RpcClient>) -> Result<Self> {
        let listing_service = Arc::new(TensorListingService::new(config.clone()))
            as Arc<dyn ListingService + Send + Sync>;

        let stake_source = Arc::new(ChainStakeSource::new(
            solana_client.clone(),
            &config.staking_program_id,
        )?) as Arc<dyn StakeSource + Send + Sync>;

        Ok(Self {
            solana_client,
            listing_service,
            stake_source,
            config,
        })
    }

    // Accessor methods

    pub fn solana_client(&self) -> Arc<RpcClient> {
        self.solana_client.clone()
    }

    pub fn listing_service(&self) -> Arc<dyn ListingService + Send + Sync> {
        self.listing_service.clone()
    }

    pub fn stake_source(&self) -> Arc<dyn StakeSource + Send + Sync> {
        self.stake_source.clone()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
