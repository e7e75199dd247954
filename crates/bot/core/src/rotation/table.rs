use std::collections::HashMap;

use thiserror::Error;

use crate::rotation::{ActionRequirement, RequirementTable, Rule, RuleCategory, SpecRotation};
use crate::types::SpecKey;

/// Problems found while assembling a [`RotationTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("{0} is defined more than once")]
    DuplicateSpec(SpecKey),

    #[error("rule for {0} has no matching spec")]
    UnknownSpec(SpecKey),

    #[error("{category} rules are engine-provided and cannot be scripted ({key})")]
    UnscriptedCategory { key: SpecKey, category: RuleCategory },
}

/// Immutable set of rotations, one per class/spec.
///
/// Specs live in a dense vector addressed through a key index, so a reload
/// swaps one value and lookups stay a hash probe plus an offset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RotationTable {
    specs: Vec<SpecRotation>,
    index: HashMap<SpecKey, usize>,
    requirements: RequirementTable,
}

impl RotationTable {
    pub fn builder() -> RotationTableBuilder {
        RotationTableBuilder::default()
    }

    /// Rotation for `key`. `None` means the bot only auto-attacks.
    pub fn get(&self, key: SpecKey) -> Option<&SpecRotation> {
        self.index_of(key).map(|index| &self.specs[index])
    }

    pub fn index_of(&self, key: SpecKey) -> Option<usize> {
        self.index.get(&key).copied()
    }

    pub fn spec_at(&self, index: usize) -> Option<&SpecRotation> {
        self.specs.get(index)
    }

    /// Number of specs.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Number of rules across every spec.
    pub fn entry_count(&self) -> usize {
        self.specs.iter().map(SpecRotation::rule_count).sum()
    }

    /// Specs in insertion order.
    pub fn specs(&self) -> &[SpecRotation] {
        &self.specs
    }

    pub fn requirements(&self) -> &RequirementTable {
        &self.requirements
    }
}

/// Collects specs and rules, then freezes them into a [`RotationTable`].
#[derive(Debug, Default)]
pub struct RotationTableBuilder {
    specs: Vec<SpecRotation>,
    index: HashMap<SpecKey, usize>,
    requirements: RequirementTable,
}

impl RotationTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a spec. The first definition of a key wins.
    pub fn insert_spec(&mut self, spec: SpecRotation) -> Result<(), TableError> {
        if self.index.contains_key(&spec.key) {
            return Err(TableError::DuplicateSpec(spec.key));
        }
        self.index.insert(spec.key, self.specs.len());
        self.specs.push(spec);
        Ok(())
    }

    /// Appends a rule to an already registered spec.
    pub fn add_rule(&mut self, key: SpecKey, rule: Rule) -> Result<(), TableError> {
        if !rule.category.is_scripted() {
            return Err(TableError::UnscriptedCategory {
                key,
                category: rule.category,
            });
        }
        let index = *self.index.get(&key).ok_or(TableError::UnknownSpec(key))?;
        self.specs[index].push(rule);
        Ok(())
    }

    pub fn has_spec(&self, key: SpecKey) -> bool {
        self.index.contains_key(&key)
    }

    pub fn add_requirement(&mut self, requirement: ActionRequirement) {
        self.requirements.insert(requirement);
    }

    /// Sorts every bucket by priority and freezes the table.
    pub fn build(mut self) -> RotationTable {
        for spec in &mut self.specs {
            spec.sort_rules();
        }
        RotationTable {
            specs: self.specs,
            index: self.index,
            requirements: self.requirements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::TargetKind;
    use crate::types::{ActionId, Role};

    const WARLOCK: SpecKey = SpecKey::new(9, 0);

    fn builder() -> RotationTableBuilder {
        let mut builder = RotationTable::builder();
        builder
            .insert_spec(SpecRotation::new(WARLOCK, "Affliction", Role::RangedDps))
            .unwrap();
        builder
    }

    #[test]
    fn rules_are_bucketed_and_sorted() {
        let mut builder = builder();
        builder
            .add_rule(WARLOCK, Rule::new(ActionId(3), RuleCategory::Core, 20, TargetKind::Enemy))
            .unwrap();
        builder
            .add_rule(WARLOCK, Rule::new(ActionId(1), RuleCategory::Dot, 10, TargetKind::Enemy))
            .unwrap();
        builder
            .add_rule(WARLOCK, Rule::new(ActionId(2), RuleCategory::Core, 10, TargetKind::Enemy))
            .unwrap();
        builder
            .add_rule(WARLOCK, Rule::new(ActionId(4), RuleCategory::Core, 10, TargetKind::Enemy))
            .unwrap();

        let table = builder.build();
        let spec = table.get(WARLOCK).unwrap();
        let core: Vec<_> = spec.rules(RuleCategory::Core).iter().map(|r| r.action).collect();
        assert_eq!(core, vec![ActionId(2), ActionId(4), ActionId(3)]);
        assert_eq!(spec.rules(RuleCategory::Dot).len(), 1);
        assert_eq!(table.entry_count(), 4);
    }

    #[test]
    fn duplicate_spec_keeps_first() {
        let mut builder = builder();
        let err = builder
            .insert_spec(SpecRotation::new(WARLOCK, "Other", Role::Tank))
            .unwrap_err();
        assert_eq!(err, TableError::DuplicateSpec(WARLOCK));

        let table = builder.build();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(WARLOCK).unwrap().display_name, "Affliction");
    }

    #[test]
    fn rejects_orphan_and_meta_rules() {
        let mut builder = builder();
        let orphan = SpecKey::new(2, 0);
        assert_eq!(
            builder.add_rule(orphan, Rule::new(ActionId(1), RuleCategory::Core, 1, TargetKind::Enemy)),
            Err(TableError::UnknownSpec(orphan))
        );
        assert!(matches!(
            builder.add_rule(WARLOCK, Rule::new(ActionId(1), RuleCategory::Meta, 1, TargetKind::Caster)),
            Err(TableError::UnscriptedCategory { .. })
        ));
    }

    #[test]
    fn missing_spec_is_none() {
        let table = builder().build();
        assert!(table.get(SpecKey::new(9, 2)).is_none());
    }
}
