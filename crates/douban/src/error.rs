#[derive(Debug, thiserror::Error)]
pub enum DoubanError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status_code}: {message}")]
    Api { status_code: u16, message: String },

    #[error("Failed to parse page: {0}")]
    Parse(String),
}
