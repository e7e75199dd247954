//! Utility functions for xtask commands

use anyhow::{Result, bail};
use std::path::PathBuf;

/// Environment variable pointing at a content directory.
const DATA_DIR_ENV: &str = "BOT_DATA_DIR";

/// Content directory: the explicit argument, then `BOT_DATA_DIR`, then the
/// sample data shipped with `bot-content`.
pub fn data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let dir = explicit
        .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../bot/content/data"));

    if !dir.is_dir() {
        bail!(
            "Content directory not found: {}\n\nHint: pass --data-dir or set {DATA_DIR_ENV}",
            dir.display()
        );
    }
    Ok(dir)
}
