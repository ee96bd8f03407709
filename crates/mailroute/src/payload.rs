//! Raw inbound webhook payload.

use crate::upload::UploadedFile;
use std::collections::BTreeMap;

/// A single form field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Plain text field.
    Text(String),
    /// Uploaded file part.
    Upload(UploadedFile),
    /// Field submitted without a value.
    Null,
}

impl Value {
    /// Returns the text content, if this is a text field.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Returns the upload, if this is a file field.
    #[must_use]
    pub const fn as_upload(&self) -> Option<&UploadedFile> {
        match self {
            Self::Upload(file) => Some(file),
            _ => None,
        }
    }

    /// Returns true for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<UploadedFile> for Value {
    fn from(file: UploadedFile) -> Self {
        Self::Upload(file)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// String-keyed collection of form fields as delivered by the provider.
///
/// Keys are case-sensitive. Inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    fields: BTreeMap<String, Value>,
}

impl Payload {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Sets a text field.
    pub fn insert_text(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.fields.insert(name.into(), Value::Text(text.into()));
    }

    /// Sets a file field.
    pub fn insert_upload(&mut self, name: impl Into<String>, file: UploadedFile) {
        self.fields.insert(name.into(), Value::Upload(file));
    }

    /// Gets a field value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Gets a text field. Null, absent and file fields all yield `None`.
    #[must_use]
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_text)
    }

    /// Removes a field, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name)
    }

    /// Removes a field and returns it if it held text.
    ///
    /// The field is removed whatever its kind.
    pub fn take_text(&mut self, name: &str) -> Option<String> {
        match self.fields.remove(name)? {
            Value::Text(text) => Some(text),
            Value::Upload(_) | Value::Null => None,
        }
    }

    /// Removes a field and returns it if it held a file.
    ///
    /// The field is removed whatever its kind.
    pub fn take_upload(&mut self, name: &str) -> Option<UploadedFile> {
        match self.fields.remove(name)? {
            Value::Upload(file) => Some(file),
            Value::Text(_) | Value::Null => None,
        }
    }

    /// Returns true if the field is present (including null fields).
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over field names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates over fields in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Self::new();
        payload.extend(iter);
        payload
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Payload {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl IntoIterator for Payload {
    type Item = (String, Value);
    type IntoIter = std::collections::btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
