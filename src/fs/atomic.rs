//! Atomic file writes.
//!
//! All writes follow the same pattern: write to a temporary file in the
//! target directory, fsync it, then rename it over the target. On POSIX the
//! rename is atomic when source and target share a filesystem; on other
//! platforms an existing target is removed first, which narrows but does not
//! close the replacement window.
//!
//! On crash a temporary file named `.{filename}.tmp` may remain in the
//! target directory.

use crate::error::{PromptgenError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file.
///
/// The parent directory is created when missing. The target file is never
/// observable in a partial state.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            PromptgenError::UserError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;
    replace_file(&temp_path, path)
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Temporary file path in the same directory as the target.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| PromptgenError::UserError("invalid file path".to_string()))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

/// Write content to a file and sync it to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        PromptgenError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            PromptgenError::UserError(format!("failed to write temporary file: {}", e))
        })
}

#[cfg(unix)]
fn replace_file(source: &Path, target: &Path) -> Result<()> {
    // rename(2) atomically replaces an existing destination
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        PromptgenError::UserError(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        ))
    })?;

    // Sync the directory entry as well
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

#[cfg(not(unix))]
fn replace_file(source: &Path, target: &Path) -> Result<()> {
    if target.exists() {
        fs::remove_file(target).map_err(|e| {
            let _ = fs::remove_file(source);
            PromptgenError::UserError(format!(
                "failed to remove existing '{}': {}",
                target.display(),
                e
            ))
        })?;
    }

    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        PromptgenError::UserError(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        ))
    })
}
