use crate::task::Task;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Error type for TaskStore operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Represents a read or write failure on the task file.
    #[error("Failed to access task file: {0}")]
    Io(#[from] std::io::Error),
    /// Represents a serialization failure while writing the task file.
    #[error("Failed to write tasks as JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persists the full task collection as pretty-printed JSON in a single
/// file.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted collection.
    ///
    /// A missing file is the normal first-run state and loads as an empty
    /// collection. A file that exists but cannot be parsed is discarded
    /// with a warning and also loads as empty; only the parse counts as
    /// corruption, so an unreadable file still surfaces as an I/O error.
    pub fn load(&self) -> Result<Vec<Task>, StoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        match serde_json::from_str(&contents) {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                warn!(
                    "Task file {} is corrupted, starting fresh: {}",
                    self.path.display(),
                    err
                );
                Ok(Vec::new())
            }
        }
    }

    /// Overwrites the persisted file with the full collection. There is no
    /// partial or append mode.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(file, tasks)?;
        Ok(())
    }
}
