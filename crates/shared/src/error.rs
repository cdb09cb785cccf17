use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::AddressField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown address field: {0}")]
pub struct UnknownFieldError(pub String);

/// Per-field validation failures. Empty means the record passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<AddressField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: AddressField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: AddressField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: AddressField) -> bool {
        self.0.contains_key(&field)
    }

    /// Drops the entry for `field`, returning whether one was present.
    pub fn clear_field(&mut self, field: AddressField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Entries in form order.
    pub fn iter(&self) -> impl Iterator<Item = (AddressField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}
