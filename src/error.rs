use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Stripe API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[cfg(feature = "stripe")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
