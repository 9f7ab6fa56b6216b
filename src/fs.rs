//! File system utilities.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes content to a file atomically using a temp file and rename.
///
/// A pre-existing file at `file_path` is either left untouched or fully
/// replaced, never truncated halfway. The temp file lives next to the target
/// so the rename stays on one filesystem.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or renamed. The temp
/// file is removed on failure.
pub fn atomic_write(file_path: &Path, content: &str) -> Result<()> {
    let temp_path = temp_path_for(file_path);

    let result = fs::write(&temp_path, content)
        .and_then(|()| fs::rename(&temp_path, file_path))
        .with_context(|| format!("Failed to write output file: {}", file_path.display()));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

fn temp_path_for(file_path: &Path) -> PathBuf {
    let parent = match file_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = file_path.file_name().unwrap_or_default().to_string_lossy();
    parent.join(format!(".{file_name}.{}.tmp", std::process::id()))
}
