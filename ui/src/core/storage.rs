//! Local persistence for small string preferences.
//!
//! Web builds use `window.localStorage`. Native builds keep a flat JSON object
//! in `<config_dir>/preferences.json`, or hold values in memory for the
//! session when the platform reports no config directory.

use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preferences file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process store; backs `PreferenceStore` when there is no config directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Platform preference store (localStorage on web, JSON file on native).
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    #[cfg(not(target_arch = "wasm32"))]
    path: Option<std::path::PathBuf>,
    #[cfg(not(target_arch = "wasm32"))]
    session: MemoryStore,
}

impl PreferenceStore {
    #[cfg(target_arch = "wasm32")]
    pub fn open() -> Self {
        Self {}
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn open() -> Self {
        let path = directories::ProjectDirs::from("com", "QualityDash", "QualityDash")
            .map(|dirs| dirs.config_dir().join("preferences.json"));
        if path.is_none() {
            tracing::warn!("no config directory available; preferences kept for this session only");
        }
        Self {
            path,
            session: MemoryStore::new(),
        }
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    pub fn at(path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            session: MemoryStore::new(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or_else(|| StorageError::Unavailable("window unavailable".into()))?
        .local_storage()
        .map_err(|_| StorageError::Unavailable("localStorage access denied".into()))?
        .ok_or_else(|| StorageError::Unavailable("localStorage missing".into()))
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable(format!("failed reading `{key}`")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Unavailable(format!("failed writing `{key}`")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore {
    fn read_all(&self, path: &std::path::Path) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.path.as_deref() {
            Some(path) => Ok(self.read_all(path)?.remove(key)),
            None => self.session.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let Some(path) = self.path.as_deref() else {
            return self.session.set(key, value);
        };
        // A corrupt file is replaced rather than blocking every later write.
        let mut values = self.read_all(path).unwrap_or_default();
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&values)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
