//! Local key-value persistence for the shipping address form.
//!
//! [`KeyValueStore`] is the synchronous string store (in memory or a JSON file
//! on disk). [`AddressStore`] layers the address record on top of it under a
//! single fixed key.

mod address;
mod error;
mod file;
mod memory;

pub use address::{AddressPersistence, AddressStore, SHIPPING_ADDRESS_KEY};
pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Synchronous string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Bytes an entry set occupies for quota accounting.
fn used_bytes<'a>(entries: impl IntoIterator<Item = (&'a String, &'a String)>) -> usize {
    entries
        .into_iter()
        .map(|(key, value)| key.len() + value.len())
        .sum()
}

fn check_quota(
    quota_bytes: Option<usize>,
    current: usize,
    replaced: usize,
    key: &str,
    value: &str,
) -> Result<(), StorageError> {
    let Some(limit) = quota_bytes else {
        return Ok(());
    };
    let required = current - replaced + key.len() + value.len();
    if required > limit {
        return Err(StorageError::QuotaExceeded { required, limit });
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
