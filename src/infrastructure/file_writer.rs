// src/infrastructure/file_writer.rs
use std::path::Path;

use anyhow::{Context, Result};

/// Write a UTF-8 text artifact, creating parent directories as needed.
pub fn write_artifact(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))
}
