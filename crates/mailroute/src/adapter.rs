//! Provider adapters and the name-keyed registry.

use crate::error::{Error, Result};
use crate::normalized::NormalizedPayload;
use crate::payload::Payload;
use std::collections::BTreeMap;
use tracing::debug;

/// Converts one provider's webhook payload into a [`NormalizedPayload`].
pub trait Adapter: Send + Sync {
    /// Provider name used for registry lookup (e.g. `"sendgrid"`).
    fn name(&self) -> &'static str;

    /// Normalizes a raw payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedPayload`] if the payload cannot be interpreted.
    fn normalize(&self, payload: Payload) -> Result<NormalizedPayload>;
}

/// Registry of adapters, keyed by provider name.
#[derive(Default)]
pub struct AdapterRegistry {
    adapters: BTreeMap<&'static str, Box<dyn Adapter>>,
}

impl AdapterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an adapter under its own name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateAdapter`] if the name is taken.
    pub fn register(&mut self, adapter: impl Adapter + 'static) -> Result<()> {
        let name = adapter.name();
        if self.adapters.contains_key(name) {
            return Err(Error::DuplicateAdapter(name.to_string()));
        }
        debug!(adapter = name, "registered inbound adapter");
        self.adapters.insert(name, Box::new(adapter));
        Ok(())
    }

    /// Looks up an adapter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Adapter> {
        self.adapters.get(name).map(|adapter| &**adapter)
    }

    /// Normalizes a payload with the named adapter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAdapter`] if nothing is registered under `name`,
    /// or the adapter's own error.
    pub fn normalize(&self, name: &str, payload: Payload) -> Result<NormalizedPayload> {
        self.get(name)
            .ok_or_else(|| Error::UnknownAdapter(name.to_string()))?
            .normalize(payload)
    }

    /// Registered adapter names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.adapters.keys().copied()
    }
}

impl std::fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("adapters", &self.adapters.keys().collect::<Vec<_>>())
            .finish()
    }
}
