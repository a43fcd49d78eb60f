//! Plain JSON file store.

use super::{read_if_exists, write_atomic, HistoryStore, PersistenceError};
use crate::core::History;
use std::path::{Path, PathBuf};

/// File name used when no path is configured.
pub const DEFAULT_HISTORY_FILE: &str = "history.json";

/// Stores the history as a pretty-printed JSON array of symbol names:
///
/// ```json
/// [
///   "stone",
///   "paper"
/// ]
/// ```
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_FILE)
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> Result<History, PersistenceError> {
        match read_if_exists(&self.path)? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| PersistenceError::DeserializationFailed(e.to_string())),
            None => Ok(History::new()),
        }
    }

    fn save(&self, history: &History) -> Result<(), PersistenceError> {
        let json = serde_json::to_vec_pretty(history)
            .map_err(|e| PersistenceError::SerializationFailed(e.to_string()))?;
        write_atomic(&self.path, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join(DEFAULT_HISTORY_FILE));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join(DEFAULT_HISTORY_FILE));
        let history = History::from_symbols(vec![
            Symbol::Paper,
            Symbol::Stone,
            Symbol::Paper,
            Symbol::Scissor,
        ]);

        store.save(&history).unwrap();

        assert_eq!(store.load().unwrap(), history);
    }

    #[test]
    fn file_is_pretty_printed_name_array() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join(DEFAULT_HISTORY_FILE));
        store
            .save(&History::from_symbols(vec![Symbol::Stone, Symbol::Paper]))
            .unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "[\n  \"stone\",\n  \"paper\"\n]");
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_HISTORY_FILE);
        fs::write(&path, "not json").unwrap();

        let result = JsonFileStore::new(&path).load();
        assert!(matches!(
            result,
            Err(PersistenceError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn unknown_symbol_in_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_HISTORY_FILE);
        fs::write(&path, r#"["stone", "rock"]"#).unwrap();

        assert!(JsonFileStore::new(&path).load().is_err());
    }

    #[test]
    fn default_path_is_history_json() {
        assert_eq!(JsonFileStore::default().path(), Path::new("history.json"));
    }
}
