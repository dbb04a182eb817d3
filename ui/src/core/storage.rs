//! Local persistence for user preferences (theme, language).
//!
//! Backends:
//! - Web/WASM: `window.localStorage`
//! - Desktop: a small JSON map in the platform config directory
//! - Memory: session-only map, also used as the overlay inside [`Preferences`]
//!
//! Nothing here is allowed to break the page: [`Preferences`] swallows backend
//! failures (logging them) and keeps the value for the rest of the session.

use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage contents unreadable: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Raw key/value backend. Implementations may fail; callers go through [`Preferences`].
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{PreferenceStore, StorageError};

    /// `window.localStorage`. Private browsing and quota errors surface as
    /// [`StorageError::Unavailable`].
    #[derive(Debug, Default)]
    pub struct BrowserStore;

    impl BrowserStore {
        fn storage(&self) -> Result<web_sys::Storage, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("window unavailable".into()))?;
            window
                .local_storage()
                .map_err(|err| StorageError::Unavailable(format!("{err:?}")))?
                .ok_or_else(|| StorageError::Unavailable("localStorage missing".into()))
        }
    }

    impl PreferenceStore for BrowserStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage()?
                .get_item(key)
                .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage()?
                .set_item(key, value)
                .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.storage()?
                .remove_item(key)
                .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::PathBuf;

    use super::{PreferenceStore, StorageError};

    /// JSON object on disk, rewritten on every change (last writer wins).
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `preferences.json` inside the platform config directory.
        pub fn in_config_dir() -> Result<Self, StorageError> {
            let dirs = directories::ProjectDirs::from("com", "FoodChain", "FoodChain")
                .ok_or_else(|| StorageError::Unavailable("no home directory".into()))?;
            Ok(Self::new(dirs.config_dir().join("preferences.json")))
        }

        fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
            match fs::read_to_string(&self.path) {
                Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
                Ok(raw) => Ok(serde_json::from_str(&raw)?),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(err) => Err(err.into()),
            }
        }

        fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&self.path, serde_json::to_vec_pretty(values)?)?;
            Ok(())
        }
    }

    impl PreferenceStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.read_all()?.get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut values = self.read_all()?;
            values.insert(key.to_string(), value.to_string());
            self.write_all(&values)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            let mut values = self.read_all()?;
            if values.remove(key).is_some() {
                self.write_all(&values)?;
            }
            Ok(())
        }
    }
}

/// Failure-tolerant preference access.
///
/// Reads and writes never fail: backend errors are logged and the value is
/// kept in a session overlay instead, so the feature keeps working until the
/// page (or app) is closed.
pub struct Preferences {
    backend: Box<dyn PreferenceStore>,
    session: MemoryStore,
}

impl Preferences {
    pub fn new(backend: Box<dyn PreferenceStore>) -> Self {
        Self {
            backend,
            session: MemoryStore::default(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::default()))
    }

    /// Browser storage on the web, the config-directory file on desktop.
    pub fn platform_default() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(Box::new(BrowserStore))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            match FileStore::in_config_dir() {
                Ok(store) => Self::new(Box::new(store)),
                Err(err) => {
                    tracing::warn!("[storage] {err}; preferences are session-only");
                    Self::in_memory()
                }
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let session = self.session.get(key).ok().flatten();
        match self.backend.get(key) {
            Ok(value) => value.or(session),
            Err(err) => {
                tracing::warn!("[storage] get {key} unavailable: {err}");
                session
            }
        }
    }

    pub fn set(&self, key: &str, value: &str) {
        match self.backend.set(key, value) {
            Ok(()) => {
                let _ = self.session.remove(key);
            }
            Err(err) => {
                tracing::warn!("[storage] set {key} unavailable: {err}");
                let _ = self.session.set(key, value);
            }
        }
    }

    pub fn remove(&self, key: &str) {
        let _ = self.session.remove(key);
        if let Err(err) = self.backend.remove(key) {
            tracing::warn!("[storage] remove {key} unavailable: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend that refuses every operation, like a locked-down private window.
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("denied".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota".into()))
        }
        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("denied".into()))
        }
    }

    #[test]
    fn memory_round_trip_and_remove() {
        let prefs = Preferences::in_memory();
        assert_eq!(prefs.get("theme"), None);
        prefs.set("theme", "dark");
        assert_eq!(prefs.get("theme").as_deref(), Some("dark"));
        prefs.remove("theme");
        assert_eq!(prefs.get("theme"), None);
    }

    #[test]
    fn broken_backend_degrades_to_session() {
        let prefs = Preferences::new(Box::new(BrokenStore));
        assert_eq!(prefs.get("language"), None);
        prefs.set("language", "es");
        assert_eq!(prefs.get("language").as_deref(), Some("es"));
        prefs.remove("language");
        assert_eq!(prefs.get("language"), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let first = Preferences::new(Box::new(FileStore::new(&path)));
        first.set("theme", "light");
        first.set("language", "es");

        let second = Preferences::new(Box::new(FileStore::new(&path)));
        assert_eq!(second.get("theme").as_deref(), Some("light"));
        assert_eq!(second.get("language").as_deref(), Some("es"));

        second.remove("theme");
        assert_eq!(first.get("theme"), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn corrupt_file_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.get("theme"),
            Err(StorageError::Serialization(_))
        ));

        let prefs = Preferences::new(Box::new(store));
        assert_eq!(prefs.get("theme"), None);
    }
}
