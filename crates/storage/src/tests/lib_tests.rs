use super::*;

use shared::AddressRecord;

fn sample_record() -> AddressRecord {
    AddressRecord {
        full_name: "Jane Doe".to_string(),
        phone: "9876543210".to_string(),
        street: "12, Lake View Road".to_string(),
        city: "Chennai".to_string(),
        state: "Tamil Nadu".to_string(),
        pincode: "600001".to_string(),
    }
}

struct UnreadableStore;

impl KeyValueStore for UnreadableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Io {
            path: "storage.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        })
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[test]
fn memory_store_sets_gets_and_removes() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("k").expect("get"), None);

    store.set("k", "v1").expect("set");
    store.set("k", "v2").expect("overwrite");
    assert_eq!(store.get("k").expect("get").as_deref(), Some("v2"));
    assert_eq!(store.len(), 1);

    store.remove("k").expect("remove");
    store.remove("k").expect("remove missing key");
    assert!(store.is_empty());
}

#[test]
fn memory_store_rejects_writes_over_quota() {
    let mut store = MemoryStore::new().with_quota(10);
    store.set("ab", "12345678").expect("exactly at limit");

    let err = store.set("c", "d").expect_err("over limit");
    assert!(matches!(
        err,
        StorageError::QuotaExceeded {
            required: 12,
            limit: 10
        }
    ));
    assert_eq!(store.get("c").expect("get"), None);
}

#[test]
fn quota_accounts_for_overwritten_value() {
    let mut store = MemoryStore::new().with_quota(10);
    store.set("ab", "12345678").expect("fill");
    store.set("ab", "87654321").expect("same size replacement fits");
    assert_eq!(store.get("ab").expect("get").as_deref(), Some("87654321"));
}

#[test]
fn address_store_round_trips_record() {
    let mut adapter = AddressStore::new(MemoryStore::new());
    assert_eq!(adapter.load(), None);

    let record = sample_record();
    adapter.save(&record).expect("save");
    assert_eq!(adapter.load(), Some(record));
    assert!(adapter.store().contains_key(SHIPPING_ADDRESS_KEY));
}

#[test]
fn address_store_treats_malformed_json_as_absent() {
    let mut store = MemoryStore::new();
    store
        .set(SHIPPING_ADDRESS_KEY, "{not json")
        .expect("seed garbage");
    let adapter = AddressStore::new(store);
    assert_eq!(adapter.load(), None);
}

#[test]
fn address_store_treats_read_failure_as_absent() {
    let adapter = AddressStore::new(UnreadableStore);
    assert_eq!(adapter.load(), None);
}

#[test]
fn address_store_treats_incomplete_record_as_absent() {
    let mut store = MemoryStore::new();
    store
        .set(SHIPPING_ADDRESS_KEY, r#"{"fullName":"Jane Doe"}"#)
        .expect("seed partial record");
    let adapter = AddressStore::new(store);
    assert_eq!(adapter.load(), None);
}

#[test]
fn address_store_surfaces_quota_failure_and_keeps_previous_value() {
    let mut adapter = AddressStore::new(MemoryStore::new().with_quota(40));
    let err = adapter.save(&sample_record()).expect_err("record exceeds quota");
    assert!(matches!(err, StorageError::QuotaExceeded { .. }));
    assert_eq!(adapter.load(), None);
}

#[test]
fn address_store_remove_deletes_key() {
    let mut adapter = AddressStore::new(MemoryStore::new());
    adapter.save(&sample_record()).expect("save");
    adapter.remove().expect("remove");
    assert_eq!(adapter.load(), None);
    assert!(!adapter.store().contains_key(SHIPPING_ADDRESS_KEY));
}
