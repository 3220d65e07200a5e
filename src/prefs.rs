//! Local key-value preference storage.
//!
//! Preferences are best-effort: a store that cannot be read yields defaults and
//! a store that cannot be written only logs a warning.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::history::{HISTORY_CAPACITY, SearchHistory, SearchHistoryEntry};
use crate::theme::ThemePreference;

pub const THEME_KEY: &str = "theme";
pub const HISTORY_KEY: &str = "searchHistory";

/// File name of the JSON store inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to access preferences at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("preferences at {path} are not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// String key-value storage for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Preferences kept in a single JSON object on disk.
#[derive(Debug, Clone)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
}

impl JsonFilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/preferences.json`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(PREFERENCES_FILE))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(PreferenceError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&contents).map_err(|source| PreferenceError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        let io_err = |source: io::Error| PreferenceError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(values).map_err(|source| PreferenceError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(io_err)
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut values = self.read_all().unwrap_or_default();
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }
}

/// Non-persistent store, used when no data directory is available and in
/// tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Typed, infallible access to the preferences the app persists.
pub struct Preferences {
    store: Box<dyn PreferenceStore>,
}

impl Preferences {
    pub fn new(store: impl PreferenceStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryPreferenceStore::new())
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "failed to read preference");
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            warn!(key, error = %err, "failed to save preference");
        }
    }

    /// Stored theme, or dark when nothing valid is stored.
    #[must_use]
    pub fn theme(&self) -> ThemePreference {
        self.read(THEME_KEY)
            .map(|value| ThemePreference::parse_or_default(&value))
            .unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: ThemePreference) {
        self.write(THEME_KEY, theme.as_str());
    }

    /// Stored search log, or an empty one when missing or unreadable.
    #[must_use]
    pub fn history(&self) -> SearchHistory {
        let Some(raw) = self.read(HISTORY_KEY) else {
            return SearchHistory::new();
        };
        match serde_json::from_str::<Vec<SearchHistoryEntry>>(&raw) {
            Ok(entries) => SearchHistory::from_entries(entries),
            Err(err) => {
                warn!(error = %err, "ignoring unreadable search history");
                SearchHistory::new()
            }
        }
    }

    pub fn set_history(&mut self, history: &SearchHistory) {
        let entries: Vec<_> = history.entries().take(HISTORY_CAPACITY).collect();
        match serde_json::to_string(&entries) {
            Ok(json) => self.write(HISTORY_KEY, &json),
            Err(err) => warn!(error = %err, "failed to encode search history"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
            Err(PreferenceError::Io {
                path: PathBuf::from("/unavailable"),
                source: io::Error::other("denied"),
            })
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::Io {
                path: PathBuf::from("/unavailable"),
                source: io::Error::other("denied"),
            })
        }
    }

    #[test]
    fn theme_defaults_to_dark() {
        let prefs = Preferences::in_memory();
        assert_eq!(prefs.theme(), ThemePreference::Dark);
    }

    #[test]
    fn toggled_theme_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = Preferences::new(JsonFilePreferenceStore::in_dir(dir.path()));
        prefs.set_theme(prefs.theme().toggled());

        let store = JsonFilePreferenceStore::in_dir(dir.path());
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(Preferences::new(store).theme(), ThemePreference::Light);
    }

    #[test]
    fn unknown_stored_theme_reads_as_dark() {
        let mut store = MemoryPreferenceStore::new();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(Preferences::new(store).theme(), ThemePreference::Dark);
    }

    #[test]
    fn history_round_trips_through_json_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = Preferences::new(JsonFilePreferenceStore::in_dir(dir.path()));
        let mut history = SearchHistory::new();
        history.record_at("went", 1, 42);
        prefs.set_history(&history);

        let raw = fs::read_to_string(dir.path().join(PREFERENCES_FILE)).unwrap();
        assert!(raw.contains("searchHistory"));
        assert_eq!(prefs.history(), history);
    }

    #[test]
    fn corrupt_file_falls_back_and_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PREFERENCES_FILE), "not json").unwrap();
        let mut prefs = Preferences::new(JsonFilePreferenceStore::in_dir(dir.path()));
        assert_eq!(prefs.theme(), ThemePreference::Dark);
        assert!(prefs.history().is_empty());

        prefs.set_theme(ThemePreference::Light);
        assert_eq!(prefs.theme(), ThemePreference::Light);
    }

    #[test]
    fn store_failures_are_swallowed() {
        let mut prefs = Preferences::new(FailingStore);
        prefs.set_theme(ThemePreference::Light);
        prefs.set_history(&SearchHistory::new());
        assert_eq!(prefs.theme(), ThemePreference::Dark);
        assert!(prefs.history().is_empty());
    }
}
