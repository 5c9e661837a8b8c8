//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};

/// Open a file for reading, or None if it is missing, not a regular file,
/// or cannot be opened
pub fn open_existing<P: AsRef<Path>>(path: P) -> Option<File> {
    let path = path.as_ref();
    if !path.is_file() {
        return None;
    }
    File::open(path).ok()
}

/// Sibling path used while a write is in progress
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write a file atomically (write to temp, then rename)
///
/// The closure receives a buffered writer over the temp file. The target is
/// only replaced once the closure succeeded and the data is synced to disk.
pub fn write_atomic<P, F>(path: P, write: F) -> LedgerResult<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> LedgerResult<()>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path).map_err(|e| {
        LedgerError::Io(format!(
            "Could not open {} for writing: {}",
            temp_path.display(),
            e
        ))
    })?;

    let mut writer = BufWriter::new(file);
    let result = write(&mut writer)
        .and_then(|_| {
            writer
                .flush()
                .map_err(|e| LedgerError::Io(format!("Failed to flush data: {}", e)))
        })
        .and_then(|_| {
            writer
                .get_ref()
                .sync_all()
                .map_err(|e| LedgerError::Io(format!("Failed to sync data: {}", e)))
        });

    if let Err(err) = result {
        drop(writer);
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    drop(writer);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        LedgerError::Io(format!(
            "Could not replace {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}
