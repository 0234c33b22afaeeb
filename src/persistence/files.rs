use super::store::StoreError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Directory name under the per-user cache location
const APP_DIR: &str = "rodo";

/// Data file name inside the app directory
const DATA_FILE: &str = "data.json";

/// Get the app's data directory, creating it on demand
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let cache = dirs::cache_dir().ok_or(StoreError::DataDir)?;
    let dir = cache.join(APP_DIR);
    fs::create_dir_all(&dir).map_err(|source| StoreError::CreateDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// Get the path to the data file
pub fn data_file() -> Result<PathBuf, StoreError> {
    Ok(data_dir()?.join(DATA_FILE))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write(path: &Path, content: &str) -> Result<(), StoreError> {
    try_atomic_write(path, content).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn try_atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Create the temp file next to the target so the rename stays on
    // one filesystem
    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path)?;
    Ok(())
}
