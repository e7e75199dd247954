//! Hot-reloadable rotation storage.
//!
//! [`RotationStore`] publishes an immutable [`RotationTable`] behind an `Arc`.
//! A reload builds a complete new table from a [`RotationSource`] and swaps
//! the pointer; readers holding a [`RotationRef`] keep the table they started
//! with until they drop it.

mod error;
mod source;

pub use error::StoreError;
pub use source::{FileRotationSource, InMemoryRotationSource, RotationSource};

use std::ops::Deref;
use std::sync::{Arc, RwLock};

use bot_content::{LoadReport, RotationLoader};
use bot_core::{RotationTable, SpecKey, SpecRotation};
use tracing::{info, warn};

pub type Result<T> = std::result::Result<T, StoreError>;

pub struct RotationStore {
    source: Box<dyn RotationSource>,
    table: RwLock<Arc<RotationTable>>,
}

impl RotationStore {
    /// Store with an empty table; call [`RotationStore::load`] to fill it.
    pub fn new(source: impl RotationSource + 'static) -> Self {
        Self::from_boxed(Box::new(source))
    }

    pub fn from_boxed(source: Box<dyn RotationSource>) -> Self {
        Self {
            source,
            table: RwLock::new(Arc::new(RotationTable::default())),
        }
    }

    /// Rebuilds the table from the source and publishes it.
    ///
    /// When the source cannot be read at all the published table is left
    /// untouched. Individual bad rows are skipped and counted in the report.
    pub fn load(&self) -> Result<LoadReport> {
        let document = self.source.fetch().map_err(|error| {
            warn!(source = %self.source.describe(), "rotation reload failed: {error:#}");
            StoreError::Source(error)
        })?;

        let (table, report) = RotationLoader::build(&document);
        if report.specs == 0 {
            warn!(source = %self.source.describe(), "rotation source defines no specs; bots will only auto-attack");
        }

        let mut guard = self.table.write().map_err(|_| StoreError::LockPoisoned)?;
        *guard = Arc::new(table);
        info!(
            source = %self.source.describe(),
            specs = report.specs,
            entries = report.entries,
            skipped = report.skipped,
            "rotations loaded"
        );
        Ok(report)
    }

    /// The currently published table.
    pub fn snapshot(&self) -> Result<Arc<RotationTable>> {
        let guard = self.table.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(Arc::clone(&guard))
    }

    /// Rotation for `key`, pinned to the current table.
    ///
    /// `None` when the spec has no rotation (the bot only auto-attacks) or the
    /// store lock is poisoned.
    pub fn get(&self, key: SpecKey) -> Option<RotationRef> {
        let table = self.snapshot().ok()?;
        let index = table.index_of(key)?;
        Some(RotationRef { table, index })
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }
}

/// A spec rotation kept alive by its table snapshot.
#[derive(Clone, Debug)]
pub struct RotationRef {
    table: Arc<RotationTable>,
    index: usize,
}

impl RotationRef {
    pub fn table(&self) -> &RotationTable {
        &self.table
    }
}

impl Deref for RotationRef {
    type Target = SpecRotation;

    fn deref(&self) -> &SpecRotation {
        // The index was taken from this very table.
        &self.table.specs()[self.index]
    }
}
