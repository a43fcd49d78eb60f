//! Storage backends for the observation history.
//!
//! The engine only talks to the [`HistoryStore`] trait, so the storage
//! mechanism is a strategy chosen at construction time:
//!
//! - [`MemoryStore`]: shared in-process copy, handy for tests
//! - [`JsonFileStore`]: pretty-printed JSON array of symbol names
//! - [`CheckpointStore`]: versioned checkpoint in JSON or binary form
//! - [`NullStore`]: keeps nothing
//!
//! File-backed stores write to a temporary sibling and rename it over the
//! target so a crash mid-write never leaves a truncated history behind.

use crate::core::History;
use std::fs;
use std::path::Path;
use std::sync::Arc;

pub mod checkpoint;
pub mod error;
mod json_file;
mod memory;

pub use checkpoint::{CheckpointFormat, CheckpointStore, HistoryCheckpoint, CHECKPOINT_VERSION};
pub use error::PersistenceError;
pub use json_file::{JsonFileStore, DEFAULT_HISTORY_FILE};
pub use memory::{MemoryStore, NullStore};

/// Load/save collaborator for the engine.
///
/// `load` is called once when an engine is built and `save` after every
/// successful mutation. The engine logs and swallows errors from both.
pub trait HistoryStore: Send + Sync {
    /// Read the persisted history. A store with nothing saved yet returns
    /// an empty history rather than an error.
    fn load(&self) -> Result<History, PersistenceError>;

    /// Replace the persisted history with `history`.
    fn save(&self, history: &History) -> Result<(), PersistenceError>;
}

impl<P: HistoryStore + ?Sized> HistoryStore for Arc<P> {
    fn load(&self) -> Result<History, PersistenceError> {
        (**self).load()
    }

    fn save(&self, history: &History) -> Result<(), PersistenceError> {
        (**self).save(history)
    }
}

impl<P: HistoryStore + ?Sized> HistoryStore for Box<P> {
    fn load(&self) -> Result<History, PersistenceError> {
        (**self).load()
    }

    fn save(&self, history: &History) -> Result<(), PersistenceError> {
        (**self).save(history)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> PersistenceError {
    PersistenceError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Read `path`, mapping a missing file to `None`.
pub(crate) fn read_if_exists(path: &Path) -> Result<Option<Vec<u8>>, PersistenceError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(io_error(path, e)),
    }
}

/// Write `bytes` to a temporary sibling of `path`, then rename it into place.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    fs::write(temp_path, bytes).map_err(|e| io_error(temp_path, e))?;
    fs::rename(temp_path, path).map_err(|e| io_error(path, e))?;
    Ok(())
}
