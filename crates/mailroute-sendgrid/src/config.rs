//! Normalizer configuration.

use serde::Deserialize;

/// How envelope recipients are compared against `to`/`cc` when deriving bcc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BccMatching {
    /// Reduce both sides to the bare address before comparing.
    #[default]
    Symmetric,
    /// Compare raw envelope entries against bare `to`/`cc` addresses.
    ///
    /// An envelope entry carrying a display name never matches and stays in bcc.
    Verbatim,
}

/// What to do when the declared attachment count names an absent field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingAttachment {
    /// Fail the call with [`crate::Error::MissingAttachment`].
    #[default]
    Reject,
    /// Leave the slot out and log a warning.
    Skip,
}

/// SendGrid normalizer configuration.
///
/// Deserializes from a host settings file; omitted keys take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bcc comparison mode.
    pub bcc_matching: BccMatching,
    /// Missing attachment handling.
    pub missing_attachment: MissingAttachment,
}

impl Config {
    /// Creates a configuration builder.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for [`Config`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Sets the bcc comparison mode.
    #[must_use]
    pub const fn bcc_matching(mut self, matching: BccMatching) -> Self {
        self.config.bcc_matching = matching;
        self
    }

    /// Sets missing attachment handling.
    #[must_use]
    pub const fn missing_attachment(mut self, policy: MissingAttachment) -> Self {
        self.config.missing_attachment = policy;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub const fn build(self) -> Config {
        self.config
    }
}
