//! Versioned history checkpoints.
//!
//! A checkpoint wraps the observation sequence with a format version, a
//! unique id and the time it was taken. Checkpoints can be encoded as JSON
//! for readability or with bincode for compactness.

use super::{read_if_exists, write_atomic, HistoryStore, PersistenceError};
use crate::core::History;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryCheckpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Observations, oldest first
    pub observations: History,
}

impl HistoryCheckpoint {
    /// Capture `history` with a fresh id and the current time.
    pub fn new(history: &History) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            observations: history.clone(),
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>, PersistenceError> {
        serde_json::to_vec_pretty(self)
            .map_err(|e| PersistenceError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, PersistenceError> {
        let checkpoint: Self = serde_json::from_slice(bytes)
            .map_err(|e| PersistenceError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, PersistenceError> {
        bincode::serialize(self).map_err(|e| PersistenceError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, PersistenceError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| PersistenceError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    fn validate(&self) -> Result<(), PersistenceError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }
}

/// Encoding used by a [`CheckpointStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckpointFormat {
    Json,
    Binary,
}

impl CheckpointFormat {
    fn encode(&self, checkpoint: &HistoryCheckpoint) -> Result<Vec<u8>, PersistenceError> {
        match self {
            Self::Json => checkpoint.to_json(),
            Self::Binary => checkpoint.to_binary(),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<HistoryCheckpoint, PersistenceError> {
        match self {
            Self::Json => HistoryCheckpoint::from_json(bytes),
            Self::Binary => HistoryCheckpoint::from_binary(bytes),
        }
    }
}

/// File store that writes a fresh checkpoint on every save.
#[derive(Clone, Debug)]
pub struct CheckpointStore {
    path: PathBuf,
    format: CheckpointFormat,
}

impl CheckpointStore {
    pub fn new(path: impl Into<PathBuf>, format: CheckpointFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> CheckpointFormat {
        self.format
    }

    /// Read the full checkpoint, `None` if nothing has been saved yet.
    pub fn load_checkpoint(&self) -> Result<Option<HistoryCheckpoint>, PersistenceError> {
        read_if_exists(&self.path)?
            .map(|bytes| self.format.decode(&bytes))
            .transpose()
    }
}

impl HistoryStore for CheckpointStore {
    fn load(&self) -> Result<History, PersistenceError> {
        Ok(self
            .load_checkpoint()?
            .map(|checkpoint| checkpoint.observations)
            .unwrap_or_default())
    }

    fn save(&self, history: &History) -> Result<(), PersistenceError> {
        let bytes = self.format.encode(&HistoryCheckpoint::new(history))?;
        write_atomic(&self.path, &bytes)
    }
}
