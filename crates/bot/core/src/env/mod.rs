//! Capability traits implemented by the host engine.
//!
//! The decision core never sees the engine's object graph. It reads live state
//! through [`Actor`] (one character) and [`WorldView`] (lookups and groups), and
//! it acts only through [`WorldCommands`]. A [`World`] is anything providing
//! both, which is what the tick driver needs.
mod actor;
mod error;
mod world;

pub use actor::Actor;
pub use error::ExecuteError;
pub use world::{MetaAction, MetaEffect, MetaSource, World, WorldCommands, WorldView};
