//! Legacy rotation documents: one row per spec, fixed action slots.
//!
//! Every bucket holds up to [`LEGACY_SLOTS`] action ids, `0` marking an empty
//! slot. Rows convert into the normalized layout with the implicit targets
//! the slot layout always had, so both formats build the same table.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::loaders::{EntryRow, LoadResult, RotationDocument, SpecRow, read_file};

/// Slots per bucket.
pub const LEGACY_SLOTS: usize = 5;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyDocument {
    pub specs: Vec<LegacySpecRow>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacySpecRow {
    pub class_id: u8,
    pub spec_index: u8,
    pub name: String,
    pub role: String,
    pub preferred_range: f32,
    pub description: String,
    pub buffs: Vec<u32>,
    pub defensives: Vec<u32>,
    pub dots: Vec<u32>,
    pub hots: Vec<u32>,
    pub abilities: Vec<u32>,
    pub mobility: Vec<u32>,
}

impl LegacySpecRow {
    /// `(category, implicit target, slots)` per bucket, in waterfall order.
    fn buckets(&self) -> [(&'static str, &'static str, &[u32]); 6] {
        [
            ("maintenance", "self", self.buffs.as_slice()),
            ("defensive", "self", self.defensives.as_slice()),
            ("dot", "enemy", self.dots.as_slice()),
            ("hot", "ally_lowest_health", self.hots.as_slice()),
            ("core", "enemy", self.abilities.as_slice()),
            ("mobility", "self", self.mobility.as_slice()),
        ]
    }

    fn spec_row(&self) -> SpecRow {
        SpecRow {
            class_id: self.class_id,
            spec_index: self.spec_index,
            name: self.name.clone(),
            role: self.role.clone(),
            preferred_range: self.preferred_range,
            description: self.description.clone(),
        }
    }

    fn entry_rows(&self) -> Vec<EntryRow> {
        let mut entries = Vec::new();
        for (category, target, slots) in self.buckets() {
            if slots.len() > LEGACY_SLOTS {
                warn!(
                    class = self.class_id,
                    spec = self.spec_index,
                    category,
                    count = slots.len(),
                    "legacy bucket has more than {LEGACY_SLOTS} slots, extra ignored"
                );
            }
            for (slot, action) in slots.iter().take(LEGACY_SLOTS).enumerate() {
                if *action == 0 {
                    continue;
                }
                entries.push(EntryRow {
                    class_id: self.class_id,
                    spec_index: self.spec_index,
                    category: category.to_string(),
                    priority: slot as u16 + 1,
                    action: *action,
                    name: String::new(),
                    target: target.to_string(),
                    condition: "none".to_string(),
                    value: 0,
                    enabled: true,
                });
            }
        }
        entries
    }
}

impl LegacyDocument {
    /// Converts to the normalized layout.
    pub fn into_document(self) -> RotationDocument {
        let mut document = RotationDocument::default();
        for row in &self.specs {
            document.specs.push(row.spec_row());
            document.entries.extend(row.entry_rows());
        }
        document
    }
}

/// Loader for legacy slot-layout RON files.
pub struct LegacyLoader;

impl LegacyLoader {
    pub fn read_document(path: &Path) -> LoadResult<RotationDocument> {
        let content = read_file(path)?;
        Self::parse_ron(&content)
    }

    pub fn parse_ron(content: &str) -> LoadResult<RotationDocument> {
        let legacy: LegacyDocument = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse legacy rotation RON: {}", e))?;
        Ok(legacy.into_document())
    }
}
