use anyhow::{Context, Result};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Tensor GraphQL endpoint
    pub graphql_url: String,

    /// Tensor API key, sent in the x-tensor-api-key header
    pub tensor_api_key: String,

    /// Collection slug queried for active listings
    pub collection_slug: String,

    /// Solana RPC endpoint (the URL carries the API key)
    pub rpc_url: String,

    /// Staking program that owns the per-mint stake accounts
    pub staking_program_id: String,

    /// Base URL for marketplace buy links, the mint is appended
    pub marketplace_item_url: String,

    /// Address the HTTP server binds to
    pub bind_addr: String,
}

impl Config {
    /// Creates the configuration from environment variables. The two API
    /// keys are required, everything else has a default.
    pub fn from_env() -> Result<Self> {
        let tensor_api_key = env::var("TENSOR_API_KEY")
            .context("TENSOR_API_KEY must be set in environment variables")?;

        let helius_api_key = env::var("HELIUS_API_KEY")
            .context("HELIUS_API_KEY must be set in environment variables")?;

        let rpc_url = env::var("SOLANA_RPC_URL").unwrap_or_else(|_| {
            format!(
                "https://mainnet.helius-rpc.com/?api-key={}",
                helius_api_key
            )
        });

        Ok(Self {
            graphql_url: env::var("TENSOR_GRAPHQL_URL")
                .unwrap_or_else(|_| "https://api.tensor.so/graphql".to_string()),
            tensor_api_key,
            collection_slug: env::var("COLLECTION_SLUG")
                .unwrap_or_else(|_| "shadowy_super_coder_dao".to_string()),
            rpc_url,
            staking_program_id: env::var("SSC_STAKING_PROGRAM_ID")
                .unwrap_or_else(|_| "SHDWyBxihqiCj6YekG2GUr7wqKLeLAMK1gHZck9pL6y".to_string()),
            marketplace_item_url: env::var("MARKETPLACE_ITEM_URL")
                .unwrap_or_else(|_| "https://www.tensor.trade/item".to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
        })
    }
}
