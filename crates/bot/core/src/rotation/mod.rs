//! Rotation data model.
//!
//! A rotation is the ordered list of rules one class/spec follows, bucketed by
//! [`RuleCategory`]. Tables are built wholesale by [`RotationTableBuilder`] and
//! never mutated afterwards; reloading means building a new table.
mod category;
mod condition;
mod requirement;
mod rule;
mod spec;
mod table;
mod target;

pub use category::RuleCategory;
pub use condition::{ConditionKind, MELEE_RANGE, evaluate};
pub use requirement::{ActionRequirement, ItemRequirement, RequirementTable};
pub use rule::Rule;
pub use spec::SpecRotation;
pub use table::{RotationTable, RotationTableBuilder, TableError};
pub use target::TargetKind;
