use serde::{Deserialize, Serialize};

/// One staking entry for a mint. A mint may have several historical
/// entries; all of them are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeRecord {
    pub mint: String,        // Token identifier the entry belongs to
    pub name: String,        // Display name from the token metadata
    pub image: String,       // Image URL from the token metadata
    pub withdrawn: u64,      // Lifetime withdrawn rewards, base units
    pub harvested: u64,      // Lifetime harvested rewards, base units
    pub bonus_redeemed: bool,
}

/// Off-chain token metadata referenced by a stake account.
#[derive(Debug, Clone, Deserialize)]
pub struct NftMetadata {
    pub name: String,
    pub image: String,
}
