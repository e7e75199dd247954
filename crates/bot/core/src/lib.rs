//! Decision core for companion bots.
//!
//! `bot-core` defines the rotation data model (categories, rules, per-spec
//! tables), the capability traits the host engine implements ([`env`]), and
//! the pure decision logic that turns a rotation plus live world state into at
//! most one action per tick ([`engine`]). Nothing in this crate performs I/O or
//! keeps global state; the runtime crate owns storage, registries and timing.
pub mod config;
pub mod eligibility;
pub mod engine;
pub mod env;
pub mod formation;
pub mod rotation;
pub mod targeting;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use config::{BotConfig, CombatConfig, MovementConfig};
pub use eligibility::can_use;
pub use engine::{
    BotTurn, CastQueue, Decision, ScanMode, TurnOutcome, TurnPlan, plan_turn, run_turn, scan,
};
pub use env::{
    Actor, ExecuteError, MetaAction, MetaEffect, MetaSource, World, WorldCommands, WorldView,
};
pub use formation::{FormationRow, FormationSlot, assign_slots, slot_point};
pub use rotation::{
    ActionRequirement, ConditionKind, ItemRequirement, MELEE_RANGE, RequirementTable, RotationTable,
    RotationTableBuilder, Rule, RuleCategory, SpecRotation, TableError, TargetKind,
};
pub use targeting::{NoRoles, RoleLookup, TargetResolver};
pub use types::{
    ActionId, ActorId, AuraId, ClassId, ItemId, Position, ResourceKind, Role, SpecKey, ZoneId,
};
