//! Content loaders for reading bot data from files.
//!
//! Loaders parse RON/TOML into row types, then convert rows into `bot-core`
//! values. Parsing errors fail the whole file; conversion errors only skip
//! the offending row.

pub mod config;
pub mod factory;
pub mod legacy;
pub mod rotations;
pub mod rows;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use legacy::{LegacyDocument, LegacyLoader, LegacySpecRow};
pub use rotations::{LoadReport, RotationLoader};
pub use rows::{EntryRow, RequirementRow, RotationDocument, RowError, SpecRow};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
