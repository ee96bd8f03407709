//! Error types for adapter lookup and normalization.

/// Result type alias for mailroute operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Mailroute error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No adapter is registered under the requested name.
    #[error("Unknown adapter: {0}")]
    UnknownAdapter(String),

    /// An adapter with the same name is already registered.
    #[error("Adapter already registered: {0}")]
    DuplicateAdapter(String),

    /// The inbound payload could not be normalized.
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps an adapter-specific error as a malformed payload.
    pub fn malformed(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::MalformedPayload(Box::new(err))
    }

    /// Returns true if the payload itself was at fault.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedPayload(_))
    }
}
