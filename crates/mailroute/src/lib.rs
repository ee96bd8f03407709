//! # mailroute
//!
//! Payload model and adapter registry for inbound email webhooks.
//!
//! Email-receiving providers deliver inbound mail to an HTTP endpoint as a flat,
//! string-keyed form payload. Each provider encodes recipients and attachments
//! differently. A provider [`Adapter`] turns that raw [`Payload`] into a
//! [`NormalizedPayload`] that downstream routing code can consume without knowing
//! which provider sent it.
//!
//! ## Features
//!
//! - **Payload model**: [`Payload`] of [`Value`]s, with uploads as [`UploadedFile`]
//! - **Normalized output**: recipient lists and an ordered [`Attachment`] collection
//! - **Registry**: look adapters up by provider name with [`AdapterRegistry`]
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailroute::{AdapterRegistry, Payload};
//!
//! let mut registry = AdapterRegistry::new();
//! mailroute_sendgrid::register(&mut registry)?;
//!
//! let mut payload = Payload::new();
//! payload.insert_text("to", "hi@example.com");
//! payload.insert_text("text", "hello");
//!
//! let normalized = registry.normalize("sendgrid", payload)?;
//! assert_eq!(normalized.to, vec!["hi@example.com"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod adapter;
mod error;
mod normalized;
mod payload;
mod upload;

pub use adapter::{Adapter, AdapterRegistry};
pub use error::{Error, Result};
pub use normalized::{Attachment, NormalizedPayload, Recipients};
pub use payload::{Payload, Value};
pub use upload::UploadedFile;
