//! Tessif data directory helpers.

use anyhow::{anyhow, Result};
use std::path::PathBuf;

/// Get the tessif data directory (defaults to ~/.tessif).
///
/// Resolve this once at startup and hand it to
/// [`CalliopeAdapter::new`](crate::CalliopeAdapter::new); the adapter never
/// consults process-wide state on its own.
pub fn tessif_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| anyhow!("Cannot determine home directory"))
        .map(|h| h.join(".tessif"))
}

/// Ensure the tessif data directory exists, returning it.
pub fn ensure_tessif_dir() -> Result<PathBuf> {
    let root = tessif_dir()?;
    std::fs::create_dir_all(&root)?;
    Ok(root)
}
