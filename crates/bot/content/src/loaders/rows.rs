//! Row types of a rotation document and their conversion to core types.

use std::str::FromStr;

use bot_core::{
    ActionId, ActionRequirement, ConditionKind, ItemId, ItemRequirement, Role, Rule, RuleCategory,
    SpecKey, SpecRotation, TableError, TargetKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a single row was left out of a table.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("unknown {field} '{value}'")]
    UnknownValue { field: &'static str, value: String },

    #[error("action id 0 is not a valid action")]
    MissingAction,

    #[error("preferred range {0} is negative")]
    NegativeRange(f32),

    #[error(transparent)]
    Table(#[from] TableError),
}

/// Normalized rotation document: spec metadata, one row per rule, and
/// optional per-action requirements.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationDocument {
    pub specs: Vec<SpecRow>,
    pub entries: Vec<EntryRow>,
    pub requirements: Vec<RequirementRow>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpecRow {
    pub class_id: u8,
    pub spec_index: u8,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub preferred_range: f32,
    #[serde(default)]
    pub description: String,
}

impl SpecRow {
    pub fn key(&self) -> SpecKey {
        SpecKey::new(self.class_id, self.spec_index)
    }

    pub fn to_spec(&self) -> Result<SpecRotation, RowError> {
        let role = parse::<Role>("role", &self.role)?;
        if self.preferred_range < 0.0 {
            return Err(RowError::NegativeRange(self.preferred_range));
        }
        Ok(SpecRotation::new(self.key(), self.name.clone(), role)
            .with_description(self.description.clone())
            .with_preferred_range(self.preferred_range))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntryRow {
    pub class_id: u8,
    pub spec_index: u8,
    pub category: String,
    pub priority: u16,
    pub action: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_target")]
    pub target: String,
    #[serde(default = "default_condition")]
    pub condition: String,
    #[serde(default)]
    pub value: i32,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl EntryRow {
    pub fn key(&self) -> SpecKey {
        SpecKey::new(self.class_id, self.spec_index)
    }

    pub fn to_rule(&self) -> Result<Rule, RowError> {
        if self.action == 0 {
            return Err(RowError::MissingAction);
        }
        let category = parse::<RuleCategory>("category", &self.category)?;
        let target = parse::<TargetKind>("target", &self.target)?;
        let condition = parse::<ConditionKind>("condition", &self.condition)?;

        Ok(
            Rule::new(ActionId(self.action), category, self.priority, target)
                .with_condition(condition, self.value)
                .named(self.name.clone()),
        )
    }
}

/// Extra prerequisite of one action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RequirementRow {
    pub action: u32,
    #[serde(default)]
    pub talent_tree: Option<u32>,
    #[serde(default)]
    pub item: Option<u32>,
    #[serde(default = "default_item_count")]
    pub item_count: u32,
    #[serde(default)]
    pub min_resource_pct: Option<f32>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl RequirementRow {
    pub fn to_requirement(&self) -> Result<ActionRequirement, RowError> {
        if self.action == 0 {
            return Err(RowError::MissingAction);
        }
        let mut requirement = ActionRequirement::new(ActionId(self.action));
        requirement.talent_tree = self.talent_tree;
        requirement.item = self.item.map(|item| ItemRequirement {
            item: ItemId(item),
            min_count: self.item_count,
        });
        requirement.min_resource_pct = self.min_resource_pct;
        requirement.roles = self
            .roles
            .iter()
            .map(|role| parse::<Role>("role", role))
            .collect::<Result<_, _>>()?;
        Ok(requirement)
    }
}

fn parse<T: FromStr>(field: &'static str, value: &str) -> Result<T, RowError> {
    value.trim().parse().map_err(|_| RowError::UnknownValue {
        field,
        value: value.to_string(),
    })
}

fn default_target() -> String {
    "enemy".to_string()
}

fn default_condition() -> String {
    "none".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_item_count() -> u32 {
    1
}
