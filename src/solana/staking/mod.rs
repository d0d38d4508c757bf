pub mod accounts;
pub mod stake_source;

pub use accounts::{StakeAccount, STAKE_MINT_OFFSET};
pub use stake_source::{ChainStakeSource, StakeSource};
