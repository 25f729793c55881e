//! Error types for metadata provider operations

/// Errors that can occur when using metadata providers
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Douban error: {0}")]
    Douban(#[from] douban::DoubanError),
}
