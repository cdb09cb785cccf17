use shared::AddressRecord;
use tracing::{debug, warn};

use crate::{KeyValueStore, StorageError};

/// Storage key holding the last valid submission.
pub const SHIPPING_ADDRESS_KEY: &str = "shippingAddress";

/// Where the form controller reads and writes its record.
pub trait AddressPersistence {
    /// The persisted record, or `None` when nothing usable is stored.
    /// Unreadable or unparsable data counts as nothing stored.
    fn load(&self) -> Option<AddressRecord>;
    fn save(&mut self, record: &AddressRecord) -> Result<(), StorageError>;
    fn remove(&mut self) -> Result<(), StorageError>;
}

/// Persists the record as JSON under [`SHIPPING_ADDRESS_KEY`].
#[derive(Debug, Clone)]
pub struct AddressStore<S> {
    store: S,
}

impl<S: KeyValueStore> AddressStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: KeyValueStore> AddressPersistence for AddressStore<S> {
    fn load(&self) -> Option<AddressRecord> {
        let raw = match self.store.get(SHIPPING_ADDRESS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!(error = %err, "failed to read saved address; treating as absent");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(error = %err, "saved address is malformed; treating as absent");
                None
            }
        }
    }

    fn save(&mut self, record: &AddressRecord) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(record)?;
        self.store.set(SHIPPING_ADDRESS_KEY, &serialized)?;
        debug!(bytes = serialized.len(), "saved address");
        Ok(())
    }

    fn remove(&mut self) -> Result<(), StorageError> {
        self.store.remove(SHIPPING_ADDRESS_KEY)
    }
}
