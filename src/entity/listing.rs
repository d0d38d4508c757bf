use serde::{Deserialize, Serialize};

/// One active sale offer returned by the marketplace, ordered by price
/// ascending upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub mint: String,               // On-chain token identifier
    pub gross_amount_lamports: u64, // Sale price in lamports
}
