//! # mailroute-sendgrid
//!
//! [SendGrid Inbound Parse] adapter for `mailroute`.
//!
//! SendGrid posts inbound mail as a flat multipart form. This crate turns that
//! form into a [`mailroute::NormalizedPayload`]:
//!
//! - **Recipients**: `to` and `cc` split into address tokens, keeping display
//!   names that contain commas intact
//! - **Bcc**: recovered from the delivery `envelope` by subtracting visible
//!   recipients
//! - **Attachments**: `attachment1..N` collected in order, renamed and tagged with
//!   content identifiers from `attachment-info`
//!
//! [SendGrid Inbound Parse]: https://www.twilio.com/docs/sendgrid/for-developers/parsing-email/setting-up-the-inbound-parse-webhook
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailroute::{Payload, UploadedFile};
//!
//! let mut payload = Payload::new();
//! payload.insert_text("to", r#""Acme, Inc" <hi@example.com>, bob@example.com"#);
//! payload.insert_text("envelope", r#"{"to":["hi@example.com","eve@example.com"]}"#);
//! payload.insert_text("attachments", "1");
//! payload.insert_upload("attachment1", UploadedFile::new("logo.png", png_bytes));
//! payload.insert_text("attachment-info", r#"{"attachment1":{"filename":"logo.png","content-id":"logo"}}"#);
//!
//! let normalized = mailroute_sendgrid::normalize_params(payload)?;
//! assert_eq!(normalized.bcc, vec!["eve@example.com"]);
//! assert_eq!(normalized.embedded_attachments().count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod address;
pub mod attachment;
pub mod bcc;
mod config;
mod error;
mod normalize;

pub use config::{BccMatching, Config, ConfigBuilder, MissingAttachment};
pub use error::{Error, Result};
pub use normalize::{ADAPTER_NAME, SendgridAdapter, normalize_params};

/// Registers a default-configured [`SendgridAdapter`] under `"sendgrid"`.
///
/// # Errors
///
/// Returns [`mailroute::Error::DuplicateAdapter`] if the name is already taken.
pub fn register(registry: &mut mailroute::AdapterRegistry) -> mailroute::Result<()> {
    registry.register(SendgridAdapter::default())
}
