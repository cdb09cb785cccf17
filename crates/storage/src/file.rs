use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{check_quota, used_bytes, KeyValueStore, StorageError};

/// Store backed by a single JSON object file mapping keys to string values.
///
/// The file is created on first write. Writes go to a sibling temp file that
/// is then renamed over the original, so a crash never leaves half a file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    quota_bytes: Option<usize>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            quota_bytes: None,
        }
    }

    pub fn with_quota(mut self, quota_bytes: usize) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(StorageError::io(&self.path, err)),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                // Replaced wholesale by the next successful write.
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "storage file is corrupt; reading as empty"
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| StorageError::io(parent, err))?;
        }

        let serialized = serde_json::to_string_pretty(entries)?;
        let tmp_path = temp_sibling(&self.path);
        fs::write(&tmp_path, serialized).map_err(|err| StorageError::io(&tmp_path, err))?;
        fs::rename(&tmp_path, &self.path).map_err(|err| {
            let _ = fs::remove_file(&tmp_path);
            StorageError::io(&self.path, err)
        })?;

        debug!(path = %self.path.display(), entries = entries.len(), "wrote storage file");
        Ok(())
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "storage.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        let replaced = entries
            .get_key_value(key)
            .map(|(k, v)| k.len() + v.len())
            .unwrap_or(0);
        check_quota(self.quota_bytes, used_bytes(&entries), replaced, key, value)?;

        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}
