/// Errors from the marketplace API transport.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request was superseded or timed out. Expected during normal
    /// operation; never surfaced to the user and never logged as a failure.
    #[error("request cancelled")]
    Cancelled,

    /// Transport-level failure (offline, DNS, non-2xx status).
    #[error("network error: {0}")]
    Network(String),

    /// The response arrived but could not be understood.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
