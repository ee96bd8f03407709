//! Attachment extraction.
//!
//! SendGrid posts each file as its own positional field (`attachment1`,
//! `attachment2`, ...) and announces how many there are in `attachments`.
//! Filenames and content identifiers arrive separately in the `attachment-info`
//! JSON object, keyed by the same positional names.

use crate::config::MissingAttachment;
use crate::error::{Error, Result};
use mailroute::{Attachment, Payload, Value};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{trace, warn};

/// Field holding the attachment count.
pub const COUNT_FIELD: &str = "attachments";

/// Field holding per-attachment metadata JSON.
pub const INFO_FIELD: &str = "attachment-info";

/// Metadata for one attachment from `attachment-info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AttachmentMeta {
    /// Filename to present instead of the uploaded part's own name.
    #[serde(default)]
    pub filename: Option<String>,
    /// Content identifier for inline references.
    #[serde(default, rename = "content-id")]
    pub content_id: Option<String>,
}

/// Parsed `attachment-info`, keyed by positional field name.
#[derive(Debug, Clone, Default)]
pub struct AttachmentInfo {
    entries: HashMap<String, AttachmentMeta>,
}

impl AttachmentInfo {
    /// Removes `attachment-info` from the payload and parses it.
    ///
    /// An absent field parses as an empty object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidJson`] if the field is not a JSON object of
    /// metadata objects.
    pub fn take_from(payload: &mut Payload) -> Result<Self> {
        let Some(raw) = payload.take_text(INFO_FIELD) else {
            return Ok(Self::default());
        };
        Self::parse(&raw)
    }

    /// Parses an `attachment-info` document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidJson`] on malformed input.
    pub fn parse(raw: &str) -> Result<Self> {
        let entries = serde_json::from_str(raw).map_err(|source| Error::InvalidJson {
            field: INFO_FIELD,
            source,
        })?;
        Ok(Self { entries })
    }

    /// Metadata for the zero-based attachment `index`, empty if none was sent.
    #[must_use]
    pub fn metadata_for(&self, index: usize) -> AttachmentMeta {
        self.entries
            .get(&field_name(index))
            .cloned()
            .unwrap_or_default()
    }
}

/// Positional field name for the zero-based `index`.
#[must_use]
pub fn field_name(index: usize) -> String {
    format!("attachment{}", index + 1)
}

/// Reads an attachment count the lenient way: optional leading whitespace and
/// sign, then as many digits as are present. Anything else counts as zero.
#[must_use]
pub fn parse_count(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return 0;
    };
    let raw = raw.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    if negative {
        return 0;
    }
    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_usize, |count, digit| {
            count.saturating_mul(10).saturating_add(usize::from(digit - b'0'))
        })
}

/// Pulls every declared attachment out of the payload, in positional order.
///
/// Removes `attachments`, `attachment-info` and each `attachmentN` field.
///
/// # Errors
///
/// Returns an error if `attachment-info` is malformed, if a positional field
/// holds text, or if one is absent under [`MissingAttachment::Reject`].
pub fn extract_attachments(
    payload: &mut Payload,
    missing: MissingAttachment,
) -> Result<Vec<Attachment>> {
    let count = match payload.remove(COUNT_FIELD) {
        Some(Value::Text(raw)) => parse_count(Some(raw.as_str())),
        _ => 0,
    };
    let info = AttachmentInfo::take_from(payload)?;

    // The count is caller-supplied; never size anything from it directly
    let mut attachments = Vec::with_capacity(count.min(payload.len()));
    for index in 0..count {
        let key = field_name(index);
        let file = match payload.remove(&key) {
            Some(Value::Upload(file)) => file,
            Some(Value::Text(_)) => return Err(Error::NotAnUpload { key }),
            Some(Value::Null) | None => match missing {
                MissingAttachment::Reject => return Err(Error::MissingAttachment { key }),
                MissingAttachment::Skip => {
                    warn!(field = %key, count, "declared attachment missing, skipping");
                    if !has_later_attachment(payload, index) {
                        break;
                    }
                    continue;
                }
            },
        };

        let meta = info.metadata_for(index);
        trace!(
            field = %key,
            filename = ?meta.filename,
            content_id = ?meta.content_id,
            "extracted attachment"
        );
        attachments.push(Attachment::new(file, meta.filename, meta.content_id));
    }

    Ok(attachments)
}

/// Returns true if any `attachmentN` field past zero-based `index` remains.
fn has_later_attachment(payload: &Payload, index: usize) -> bool {
    payload.keys().any(|key| {
        key.strip_prefix("attachment")
            .and_then(|n| n.parse::<usize>().ok())
            .is_some_and(|n| n > index + 1)
    })
}
