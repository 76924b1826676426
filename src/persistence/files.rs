use super::error::PersistenceError;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Create each file if it does not exist yet. Existing files are untouched.
pub fn touch_files<P: AsRef<Path>>(paths: &[P]) -> Result<(), PersistenceError> {
    for path in paths {
        let path = path.as_ref();
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| PersistenceError::io(path, e))?;
    }
    Ok(())
}

/// Read file content, return empty string if file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String, PersistenceError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path).map_err(|e| PersistenceError::io(path, e))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    // A bare file name has an empty parent
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let io_err = |e| PersistenceError::io(path, e);

    // Create temp file in the same directory so the rename stays on one filesystem
    let mut temp_file = NamedTempFile::new_in(dir).map_err(io_err)?;

    temp_file.write_all(content.as_bytes()).map_err(io_err)?;
    temp_file.as_file().sync_all().map_err(io_err)?;

    temp_file
        .persist(path)
        .map_err(|e| PersistenceError::io(path, e.error))?;

    Ok(())
}
