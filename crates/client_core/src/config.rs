use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use storage::{AddressStore, FileStore};
use tracing::warn;

use crate::status::StatusTimings;

pub const SETTINGS_FILE: &str = "shipping_address.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub storage_path: PathBuf,
    pub quota_bytes: Option<usize>,
    pub save_status_ms: u64,
    pub clear_status_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            quota_bytes: None,
            save_status_ms: 3000,
            clear_status_ms: 2000,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    storage_path: Option<PathBuf>,
    quota_bytes: Option<usize>,
    save_status_ms: Option<u64>,
    clear_status_ms: Option<u64>,
}

impl Settings {
    pub fn status_timings(&self) -> StatusTimings {
        StatusTimings {
            saved: Duration::from_millis(self.save_status_ms),
            cleared: Duration::from_millis(self.clear_status_ms),
        }
    }

    /// File-backed address store at the configured location.
    pub fn address_store(&self) -> AddressStore<FileStore> {
        let store = FileStore::new(&self.storage_path);
        let store = match self.quota_bytes {
            Some(quota) => store.with_quota(quota),
            None => store,
        };
        AddressStore::new(store)
    }

    fn apply_file(&mut self, raw: &str) {
        let file_cfg = match toml::from_str::<FileSettings>(raw) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!(error = %err, "ignoring unreadable settings file");
                return;
            }
        };
        if let Some(v) = file_cfg.storage_path {
            self.storage_path = v;
        }
        if let Some(v) = file_cfg.quota_bytes {
            self.quota_bytes = Some(v);
        }
        if let Some(v) = file_cfg.save_status_ms {
            self.save_status_ms = v;
        }
        if let Some(v) = file_cfg.clear_status_ms {
            self.clear_status_ms = v;
        }
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("APP__STORAGE_PATH").filter(|v| !v.trim().is_empty()) {
            self.storage_path = PathBuf::from(v);
        }
        if let Some(v) = parse_env(&var, "APP__QUOTA_BYTES") {
            self.quota_bytes = Some(v);
        }
        if let Some(v) = parse_env(&var, "APP__SAVE_STATUS_MS") {
            self.save_status_ms = v;
        }
        if let Some(v) = parse_env(&var, "APP__CLEAR_STATUS_MS") {
            self.clear_status_ms = v;
        }
    }
}

fn parse_env<T: std::str::FromStr>(var: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = var(name)?;
    match raw.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!(setting = name, value = %raw, "ignoring non-numeric setting");
            None
        }
    }
}

fn default_storage_path() -> PathBuf {
    match dirs::data_local_dir() {
        Some(base) => base.join("shipping_address").join("storage.json"),
        None => PathBuf::from("./data/storage.json"),
    }
}

/// Defaults, then `shipping_address.toml` in the working directory, then
/// `APP__*` environment variables.
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    settings_file: &Path,
    var: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();
    if let Ok(raw) = fs::read_to_string(settings_file) {
        settings.apply_file(&raw);
    }
    settings.apply_env(var);
    settings
}
