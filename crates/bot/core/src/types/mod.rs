//! Identifiers and small value types shared by every layer.
mod common;
mod role;

pub use common::{ActionId, ActorId, AuraId, ClassId, ItemId, Position, SpecKey, ZoneId};
pub use role::{ResourceKind, Role};
