//! SendGrid Inbound Parse normalization.

use crate::address::parse_address_list;
use crate::attachment::extract_attachments;
use crate::bcc::{ENVELOPE_FIELD, resolve_bcc};
use crate::config::Config;
use crate::error::Result;
use mailroute::{Adapter, NormalizedPayload, Payload};
use tracing::debug;

/// Registry name of the adapter.
pub const ADAPTER_NAME: &str = "sendgrid";

/// Output keys replaced by normalized values; stale input copies are dropped.
const REPLACED_FIELDS: [&str; 3] = ["bcc", "included_attachments", "embedded_attachments"];

/// Normalizes SendGrid Inbound Parse webhook payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SendgridAdapter {
    config: Config,
}

impl SendgridAdapter {
    /// Creates an adapter with the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Normalizes a raw payload.
    ///
    /// `to` and `cc` become token lists, `bcc` is recovered from `envelope`, and
    /// the positional attachment fields become [`NormalizedPayload::attachments`].
    /// All other fields pass through untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if `envelope` or `attachment-info` is malformed, or if a
    /// declared attachment is missing or not a file.
    pub fn normalize_params(&self, mut payload: Payload) -> Result<NormalizedPayload> {
        let to = parse_address_list(payload.take_text("to").as_deref());
        let cc = parse_address_list(payload.take_text("cc").as_deref());
        let bcc = resolve_bcc(
            payload.get_text(ENVELOPE_FIELD),
            &to,
            &cc,
            self.config.bcc_matching,
        )?;

        let attachments = extract_attachments(&mut payload, self.config.missing_attachment)?;

        for field in REPLACED_FIELDS {
            payload.remove(field);
        }

        debug!(
            to = to.len(),
            cc = cc.len(),
            bcc = bcc.len(),
            attachments = attachments.len(),
            "normalized sendgrid payload"
        );

        Ok(NormalizedPayload {
            to,
            cc,
            bcc,
            attachments,
            fields: payload,
        })
    }
}

impl Adapter for SendgridAdapter {
    fn name(&self) -> &'static str {
        ADAPTER_NAME
    }

    fn normalize(&self, payload: Payload) -> mailroute::Result<NormalizedPayload> {
        self.normalize_params(payload).map_err(Into::into)
    }
}

/// Normalizes a payload with the default configuration.
///
/// # Errors
///
/// See [`SendgridAdapter::normalize_params`].
pub fn normalize_params(payload: Payload) -> Result<NormalizedPayload> {
    SendgridAdapter::default().normalize_params(payload)
}
