use super::files::{atomic_write, data_file};
use crate::domain::Todo;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures while locating, reading, or writing the data file. Each of
/// them ends the session; a missing data file is handled before this
/// point and is not an error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not locate a cache directory for the data file")]
    DataDir,

    #[error("could not create {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("could not serialize todos: {source}")]
    Serialize { source: serde_json::Error },

    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Load the saved list from the data file. A file that does not exist
/// yet is a first run and yields an empty list.
pub fn load_todos() -> Result<Vec<Todo>, StoreError> {
    load_from(&data_file()?)
}

/// Write the whole list to the data file
pub fn save_todos(todos: &[Todo]) -> Result<(), StoreError> {
    save_to(&data_file()?, todos)
}

fn load_from(path: &Path) -> Result<Vec<Todo>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn save_to(path: &Path, todos: &[Todo]) -> Result<(), StoreError> {
    let json =
        serde_json::to_string(todos).map_err(|source| StoreError::Serialize { source })?;
    atomic_write(path, &json)
}
