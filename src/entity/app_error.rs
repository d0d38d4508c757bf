#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Marketplace API error: {0}")]
    Marketplace(String),

    #[error("Solana RPC error: {0}")]
    Rpc(String),

    #[error("Metadata fetch error: {0}")]
    Metadata(String),

    #[error("Malformed upstream payload: {0}")]
    MalformedPayload(String),
}
