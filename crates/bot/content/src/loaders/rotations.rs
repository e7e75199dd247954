//! Rotation document loader.

use std::path::Path;

use bot_core::{RotationTable, RotationTableBuilder};
use tracing::{info, warn};

use crate::loaders::{LoadResult, RotationDocument, RowError, read_file};

/// Counts gathered while building a table from a document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Specs in the resulting table.
    pub specs: usize,
    /// Rules in the resulting table.
    pub entries: usize,
    /// Requirements in the resulting table.
    pub requirements: usize,
    /// Rows of any kind left out because they could not be converted.
    pub skipped: usize,
    /// Entry rows turned off with `enabled: false`.
    pub disabled: usize,
}

/// Loader for normalized rotation documents (one row per rule).
pub struct RotationLoader;

impl RotationLoader {
    /// Load and build a table from a RON document.
    pub fn load(path: &Path) -> LoadResult<(RotationTable, LoadReport)> {
        let document = Self::read_document(path)?;
        Ok(Self::build(&document))
    }

    pub fn read_document(path: &Path) -> LoadResult<RotationDocument> {
        let content = read_file(path)?;
        Self::parse_ron(&content)
    }

    pub fn parse_ron(content: &str) -> LoadResult<RotationDocument> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rotation RON: {}", e))
    }

    /// Builds a table, skipping every row that does not convert.
    ///
    /// Never fails: a document full of bad rows yields an empty table.
    pub fn build(document: &RotationDocument) -> (RotationTable, LoadReport) {
        let mut builder = RotationTableBuilder::new();
        let mut report = LoadReport::default();

        for row in &document.specs {
            match row
                .to_spec()
                .and_then(|spec| builder.insert_spec(spec).map_err(RowError::from))
            {
                Ok(()) => report.specs += 1,
                Err(error) => {
                    warn!(spec = %row.key(), name = %row.name, %error, "skipping spec row");
                    report.skipped += 1;
                }
            }
        }

        for row in &document.entries {
            if !row.enabled {
                report.disabled += 1;
                continue;
            }
            match row
                .to_rule()
                .and_then(|rule| builder.add_rule(row.key(), rule).map_err(RowError::from))
            {
                Ok(()) => report.entries += 1,
                Err(error) => {
                    warn!(
                        spec = %row.key(),
                        action = row.action,
                        %error,
                        "skipping rotation entry"
                    );
                    report.skipped += 1;
                }
            }
        }

        for row in &document.requirements {
            match row.to_requirement() {
                Ok(requirement) => {
                    builder.add_requirement(requirement);
                    report.requirements += 1;
                }
                Err(error) => {
                    warn!(action = row.action, %error, "skipping action requirement");
                    report.skipped += 1;
                }
            }
        }

        let table = builder.build();
        info!(
            specs = report.specs,
            entries = report.entries,
            skipped = report.skipped,
            "built rotation table"
        );
        (table, report)
    }
}
