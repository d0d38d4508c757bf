pub mod config;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod router;
pub mod solana;
pub mod tensor;
pub mod utils;
pub mod view;

// Re-export commonly used items
pub use config::Config;
pub use di::*;
pub use entity::*;
pub use router::create_router;
pub use solana::create_solana_client;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
