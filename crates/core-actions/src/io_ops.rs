//! File IO helpers for the dispatcher and the startup path.
//!
//! Synchronous and minimal: one read, one write, errors propagated as
//! `anyhow::Error` so callers can fold them into a status message. No retry
//! logic; a failed write leaves the previous file content in whatever state
//! the OS left it and the session dirty flag untouched.

use anyhow::{Context, Result};
use core_text::LineBuffer;
use std::path::Path;

/// Read `path` into a line buffer, stripping line terminators.
pub fn load_file(path: &Path) -> Result<LineBuffer> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let buffer = LineBuffer::from_content(&content)?;
    tracing::info!(target: "io", path = %path.display(), lines = buffer.line_count(), "loaded");
    Ok(buffer)
}

/// Serialize `buffer` to `path`, joining lines with `\n`.
pub fn write_file(path: &Path, buffer: &LineBuffer) -> Result<()> {
    let content = buffer.lines().join("\n");
    std::fs::write(path, content.as_bytes())
        .with_context(|| format!("could not write {}", path.display()))?;
    Ok(())
}
