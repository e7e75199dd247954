//! Content factory resolving every bot data file from one directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use bot_core::{BotConfig, SpecKey};
use tracing::warn;

use crate::loaders::{
    ConfigLoader, LegacyLoader, LoadResult, RotationDocument, RotationLoader, SpecRow,
};

/// Content factory that loads all bot content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── bots.toml
/// ├── rotations.ron
/// └── legacy_rotations.ron   (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "bots.toml";
    pub const ROTATIONS_FILE: &'static str = "rotations.ron";
    pub const LEGACY_ROTATIONS_FILE: &'static str = "legacy_rotations.ron";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load configuration from `bots.toml`, with environment overrides.
    pub fn load_config(&self) -> LoadResult<BotConfig> {
        ConfigLoader::load_with_env(&self.config_path())
    }

    /// Load the rotation document, merging in the legacy one when present.
    ///
    /// Specs defined in both files keep the normalized definition; the legacy
    /// row and its slots are ignored.
    pub fn load_rotations(&self) -> LoadResult<RotationDocument> {
        let mut document = RotationLoader::read_document(&self.rotations_path())?;
        let legacy_path = self.legacy_rotations_path();
        if legacy_path.exists() {
            let legacy = LegacyLoader::read_document(&legacy_path)?;
            let defined: HashSet<SpecKey> = document.specs.iter().map(SpecRow::key).collect();
            for spec in legacy.specs {
                if defined.contains(&spec.key()) {
                    warn!(spec = %spec.key(), "legacy spec shadowed by normalized definition");
                    continue;
                }
                document.specs.push(spec);
            }
            document.entries.extend(
                legacy
                    .entries
                    .into_iter()
                    .filter(|entry| !defined.contains(&entry.key())),
            );
        }
        Ok(document)
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(Self::CONFIG_FILE)
    }

    pub fn rotations_path(&self) -> PathBuf {
        self.data_dir.join(Self::ROTATIONS_FILE)
    }

    pub fn legacy_rotations_path(&self) -> PathBuf {
        self.data_dir.join(Self::LEGACY_ROTATIONS_FILE)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(factory.rotations_path(), Path::new("/tmp/data/rotations.ron"));
        assert_eq!(factory.config_path(), Path::new("/tmp/data/bots.toml"));
    }
}
