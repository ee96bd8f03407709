//! Provider-independent normalized payload.

use crate::payload::{Payload, Value};
use crate::upload::UploadedFile;
use bytes::Bytes;
use std::io::Cursor;

/// An inbound attachment with its resolved metadata.
///
/// Attachments carrying a content identifier are referenced from the message
/// body (inline images and the like). The rest are plain file attachments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    file: UploadedFile,
    content_id: Option<String>,
}

impl Attachment {
    /// Wraps an upload, applying a filename override and content identifier.
    ///
    /// A filename override replaces the upload's own filename. Empty strings are
    /// treated as absent.
    #[must_use]
    pub fn new(mut file: UploadedFile, filename: Option<String>, content_id: Option<String>) -> Self {
        if let Some(filename) = filename.filter(|f| !f.is_empty()) {
            file.set_original_filename(filename);
        }
        Self {
            file,
            content_id: content_id.filter(|c| !c.is_empty()),
        }
    }

    /// Resolved filename.
    #[must_use]
    pub fn filename(&self) -> &str {
        self.file.original_filename()
    }

    /// Content identifier, if referenced from the body.
    #[must_use]
    pub fn content_id(&self) -> Option<&str> {
        self.content_id.as_deref()
    }

    /// Returns true if the attachment carries a content identifier.
    #[must_use]
    pub const fn is_embedded(&self) -> bool {
        self.content_id.is_some()
    }

    /// Underlying upload.
    #[must_use]
    pub const fn file(&self) -> &UploadedFile {
        &self.file
    }

    /// Raw content.
    #[must_use]
    pub const fn content(&self) -> &Bytes {
        self.file.content()
    }

    /// Returns a reader over the content.
    #[must_use]
    pub fn reader(&self) -> Cursor<Bytes> {
        self.file.reader()
    }

    /// Unwraps the underlying upload.
    #[must_use]
    pub fn into_file(self) -> UploadedFile {
        self.file
    }
}

/// Canonical inbound email, ready for routing.
///
/// `to`, `cc` and `bcc` are always lists, possibly empty. Every field the adapter
/// did not consume is kept in [`NormalizedPayload::fields`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedPayload {
    /// Visible recipients, verbatim address tokens.
    pub to: Vec<String>,
    /// Carbon-copy recipients, verbatim address tokens.
    pub cc: Vec<String>,
    /// Blind-copy recipients recovered from the delivery envelope.
    pub bcc: Vec<String>,
    /// All attachments in their positional order.
    pub attachments: Vec<Attachment>,
    /// Passthrough fields.
    pub fields: Payload,
}

impl NormalizedPayload {
    /// Attachments without a content identifier, in order.
    pub fn included_attachments(&self) -> impl Iterator<Item = &Attachment> {
        self.attachments.iter().filter(|a| !a.is_embedded())
    }

    /// Attachments with a content identifier, in order.
    pub fn embedded_attachments(&self) -> impl Iterator<Item = &Attachment> {
        self.attachments.iter().filter(|a| a.is_embedded())
    }

    /// Gets a passthrough field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Gets a passthrough text field.
    #[must_use]
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.fields.get_text(name)
    }

    /// Passthrough fields.
    #[must_use]
    pub const fn fields(&self) -> &Payload {
        &self.fields
    }

    /// Splits into recipients, attachments and passthrough fields.
    #[must_use]
    pub fn into_parts(self) -> (Recipients, Vec<Attachment>, Payload) {
        (
            Recipients {
                to: self.to,
                cc: self.cc,
                bcc: self.bcc,
            },
            self.attachments,
            self.fields,
        )
    }
}

/// Recipient lists split out of a [`NormalizedPayload`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipients {
    /// Visible recipients.
    pub to: Vec<String>,
    /// Carbon-copy recipients.
    pub cc: Vec<String>,
    /// Blind-copy recipients.
    pub bcc: Vec<String>,
}
