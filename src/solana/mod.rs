pub mod client;
pub mod staking;

pub use client::create_solana_client;
pub use staking::{ChainStakeSource, StakeAccount, StakeSource};
