//! Error types for SendGrid payload normalization.

/// Result type alias for SendGrid normalization.
pub type Result<T> = std::result::Result<T, Error>;

/// Malformed-payload errors.
///
/// Every variant aborts the whole normalization call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A JSON side-channel field could not be parsed.
    #[error("Invalid JSON in {field}: {source}")]
    InvalidJson {
        /// Offending field name.
        field: &'static str,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The declared attachment count names a field that is absent.
    #[error("Missing attachment field: {key}")]
    MissingAttachment {
        /// Positional field name (e.g. `attachment2`).
        key: String,
    },

    /// A positional attachment field held text instead of a file.
    #[error("Attachment field is not a file upload: {key}")]
    NotAnUpload {
        /// Positional field name.
        key: String,
    },
}

impl Error {
    /// Payload field this error relates to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidJson { field, .. } => field,
            Self::MissingAttachment { key } | Self::NotAnUpload { key } => key,
        }
    }
}

impl From<Error> for mailroute::Error {
    fn from(err: Error) -> Self {
        Self::malformed(err)
    }
}
