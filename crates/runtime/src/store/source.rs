use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use bot_content::{ContentFactory, LegacyLoader, LoadResult, RotationDocument, RotationLoader};

/// Where rotation documents come from.
pub trait RotationSource: Send + Sync {
    /// Human-readable origin for log lines.
    fn describe(&self) -> String;

    /// Reads the full document. Called on every reload.
    fn fetch(&self) -> LoadResult<RotationDocument>;
}

/// Document layout of a file source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FileLayout {
    Normalized,
    Legacy,
    DataDir,
}

/// Reads a RON file (or a whole content directory) on every reload.
#[derive(Clone, Debug)]
pub struct FileRotationSource {
    path: PathBuf,
    layout: FileLayout,
}

impl FileRotationSource {
    /// Normalized, one-row-per-rule document.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            layout: FileLayout::Normalized,
        }
    }

    /// Legacy one-row-per-spec document.
    pub fn legacy(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            layout: FileLayout::Legacy,
        }
    }

    /// Content directory: `rotations.ron` plus optional `legacy_rotations.ron`.
    pub fn data_dir(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            layout: FileLayout::DataDir,
        }
    }
}

impl RotationSource for FileRotationSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> LoadResult<RotationDocument> {
        match self.layout {
            FileLayout::Normalized => RotationLoader::read_document(&self.path),
            FileLayout::Legacy => LegacyLoader::read_document(&self.path),
            FileLayout::DataDir => ContentFactory::new(&self.path).load_rotations(),
        }
    }
}

/// Source backed by a document held in memory; clones share the document.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRotationSource {
    document: Arc<RwLock<RotationDocument>>,
}

impl InMemoryRotationSource {
    pub fn new(document: RotationDocument) -> Self {
        Self {
            document: Arc::new(RwLock::new(document)),
        }
    }

    /// Replaces the document served by the next fetch.
    pub fn replace(&self, document: RotationDocument) {
        match self.document.write() {
            Ok(mut guard) => *guard = document,
            Err(poisoned) => *poisoned.into_inner() = document,
        }
    }
}

impl RotationSource for InMemoryRotationSource {
    fn describe(&self) -> String {
        "in-memory rotations".to_string()
    }

    fn fetch(&self) -> LoadResult<RotationDocument> {
        let guard = self
            .document
            .read()
            .map_err(|_| anyhow::anyhow!("in-memory rotation document lock was poisoned"))?;
        Ok(guard.clone())
    }
}
