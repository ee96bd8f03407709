//! Uploaded file parts.

use bytes::Bytes;
use std::io::Cursor;

/// A file part received with the webhook.
///
/// The transport has already materialized the content; this type only carries it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    original_filename: String,
    content_type: Option<String>,
    content: Bytes,
}

impl UploadedFile {
    /// Creates an upload with the filename given by the client.
    #[must_use]
    pub fn new(original_filename: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            original_filename: original_filename.into(),
            content_type: None,
            content: content.into(),
        }
    }

    /// Sets the declared MIME type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Filename as submitted.
    #[must_use]
    pub fn original_filename(&self) -> &str {
        &self.original_filename
    }

    /// Replaces the filename.
    pub fn set_original_filename(&mut self, filename: impl Into<String>) {
        self.original_filename = filename.into();
    }

    /// Declared MIME type, if any.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Raw content.
    #[must_use]
    pub const fn content(&self) -> &Bytes {
        &self.content
    }

    /// Content length in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.content.len()
    }

    /// Returns a reader over the content.
    #[must_use]
    pub fn reader(&self) -> Cursor<Bytes> {
        Cursor::new(self.content.clone())
    }
}
