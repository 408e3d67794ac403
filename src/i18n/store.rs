//! Preference persistence for the selected language.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Key under which the selected language is stored.
pub const LANGUAGE_KEY: &str = "lang";

/// A small key/value store that survives restarts.
pub trait PreferenceStore {
    /// Read a stored value.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for Box<P> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Process-local store, used for previews and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a language preference.
    pub fn with_language(code: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(LANGUAGE_KEY.to_string(), code.into());
        Self { values }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a JSON object in a file.
///
/// The file is read once when opened and rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// An unparseable file is also treated as empty; the next `set`
    /// overwrites it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            if contents.trim().is_empty() {
                BTreeMap::new()
            } else {
                match serde_json::from_str(&contents) {
                    Ok(values) => values,
                    Err(e) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %e,
                            "Ignoring unreadable preferences file"
                        );
                        BTreeMap::new()
                    }
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryPreferenceStore::new();
        assert_eq!(store.get(LANGUAGE_KEY), None);
        store.set(LANGUAGE_KEY, "fr").expect("set");
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("fr"));
        let seeded = MemoryPreferenceStore::with_language("ar");
        assert_eq!(seeded.get(LANGUAGE_KEY).as_deref(), Some("ar"));
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("preferences.json");

        let mut store = FilePreferenceStore::open(&path).expect("open missing file");
        assert_eq!(store.get(LANGUAGE_KEY), None);
        store.set(LANGUAGE_KEY, "ar").expect("persist");

        let reopened = FilePreferenceStore::open(&path).expect("reopen");
        assert_eq!(reopened.get(LANGUAGE_KEY).as_deref(), Some("ar"));
    }

    #[test]
    fn test_file_store_recovers_from_garbage() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json").expect("write");

        let mut store = FilePreferenceStore::open(&path).expect("garbage is not fatal");
        assert_eq!(store.get(LANGUAGE_KEY), None);

        store.set(LANGUAGE_KEY, "fr").expect("rewrite");
        let reopened = FilePreferenceStore::open(&path).expect("reopen");
        assert_eq!(reopened.get(LANGUAGE_KEY).as_deref(), Some("fr"));
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn PreferenceStore> = Box::new(MemoryPreferenceStore::new());
        store.set(LANGUAGE_KEY, "en").expect("set");
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("en"));
    }
}
