/// Errors from the non-extraction parts of the crate.
///
/// Feature extraction itself is total and never produces one of these.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[cfg(feature = "serde")]
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid scorer config: {0}")]
    InvalidConfig(String),

    #[error("timestamp out of range: {0} ms")]
    Timestamp(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
