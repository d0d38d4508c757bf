use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::entity::{AppError, Listing};
use crate::tensor::models::{GraphQlRequest, GraphQlResponse, ACTIVE_LISTINGS_QUERY};

/// How long a fetched listings response is reused before the marketplace
/// is asked again.
pub const LISTINGS_REVALIDATE: Duration = Duration::from_secs(360);

/// Source of the collection's active listings, cheapest first.
#[async_trait]
pub trait ListingService: Send + Sync {
    async fn active_listings(&self) -> Result<Vec<Listing>>;
}

struct CachedListings {
    fetched_at: Instant,
    listings: Vec<Listing>,
}

/// Listing source backed by the Tensor GraphQL API.
pub struct TensorListingService {
    http_client: Client,
    config: Config,
    cache: Arc<Mutex<Option<CachedListings>>>,
}

impl TensorListingService {
    pub fn new(config: Config) -> Self {
        Self {
            http_client: Client::new(),
            config,
            cache: Arc::new(Mutex::new(None)),
        }
    }

    /// Issues the GraphQL query and flattens the response into listings.
    async fn fetch_listings(&self) -> Result<Vec<Listing>> {
        info!(
            "Fetching active listings for collection {}",
            self.config.collection_slug
        );

        let request = GraphQlRequest {
            query: ACTIVE_LISTINGS_QUERY,
            variables: json!({ "slug": self.config.collection_slug }),
        };

        let response = self
            .http_client
            .post(&self.config.graphql_url)
            .header("x-tensor-api-key", &self.config.tensor_api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Marketplace(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow!(AppError::Marketplace(format!(
                "{}: {}",
                status, error_text
            ))));
        }

        let body: GraphQlResponse = response
            .json()
            .await
            .map_err(|e| AppError::MalformedPayload(format!("listings response: {}", e)))?;

        if let Some(errors) = body.errors {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(anyhow!(AppError::Marketplace(messages.join("; "))));
        }

        let data = body
            .data
            .ok_or_else(|| AppError::MalformedPayload("missing data field".to_string()))?;

        let listings: Vec<Listing> = data
            .active_listings_v2
            .txs
            .into_iter()
            .map(|tx| Listing {
                mint: tx.mint.onchain_id,
                gross_amount_lamports: tx.tx.gross_amount,
            })
            .collect();

        info!("Received {} active listings", listings.len());

        Ok(listings)
    }
}

#[async_trait]
impl ListingService for TensorListingService {
    async fn active_listings(&self) -> Result<Vec<Listing>> {
        // Serve the cached response while it is still fresh
        {
            let cache = self.cache.lock().unwrap();
            if let Some(cached) = cache.as_ref() {
                if cached.fetched_at.elapsed() < LISTINGS_REVALIDATE {
                    debug!("Serving {} listings from cache", cached.listings.len());
                    return Ok(cached.listings.clone());
                }
            }
        }

        let listings = self.fetch_listings().await?;

        {
            let mut cache = self.cache.lock().unwrap();
            *cache = Some(CachedListings {
                fetched_at: Instant::now(),
                listings: listings.clone(),
            });
        }

        Ok(listings)
    }
}
