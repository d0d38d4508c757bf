use anyhow::{anyhow, Result};
use borsh::{BorshDeserialize, BorshSerialize};

/// Byte offset of the mint field inside a stake account, used for the
/// program-account memcmp filter: 8-byte discriminator + 32-byte staker.
pub const STAKE_MINT_OFFSET: usize = 8 + 32;

/// On-chain layout of one stake entry, after the discriminator.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct StakeAccount {
    pub staker: [u8; 32],
    pub mint: [u8; 32],
    pub withdrawn: u64,      // Lifetime withdrawn rewards, base units
    pub harvested: u64,      // Lifetime harvested rewards, base units
    pub bonus_redeemed: bool,
    pub metadata_uri: String, // Off-chain JSON with name and image
}

impl StakeAccount {
    /// Decodes raw account data, skipping the 8-byte discriminator.
    /// Trailing padding after the layout is tolerated.
    pub fn unpack(data: &[u8]) -> Result<Self> {
        if data.len() < 8 {
            return Err(anyhow!("Stake account data too short: {} bytes", data.len()));
        }

        let mut rest = &data[8..];
        StakeAccount::deserialize(&mut rest)
            .map_err(|e| anyhow!("Failed to decode stake account: {}", e))
    }
}
