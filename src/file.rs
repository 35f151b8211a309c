//! Whole-buffer file I/O for the CLI.
//!
//! The core codec works entirely in memory (see [`crate::codec`]); this
//! module is the thin file-system layer on top, matching the reference
//! tool's read-entire-file-then-process-then-write-entire-file shape.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads `path` fully into memory.
pub fn read_whole(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Writes `data` to `path`, creating or truncating it.
pub fn write_whole(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))
}

/// `true` if `path` names a regular file (not a directory, symlink to a
/// directory, device, etc.), mirroring the reference CLI's `S_ISREG` guard.
pub fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
