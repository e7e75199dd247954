//! Runtime for companion bots.
//!
//! This crate owns everything stateful around the pure decision core: the
//! hot-reloadable rotation store, the registry of live bots, spawn and
//! teardown workflows, the follow/pursuit policy, autoplay for controllers,
//! and the tick driver that ties them together. Hosts embed [`BotRuntime`]
//! and call [`BotRuntime::update`] from their heartbeat.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`store`] publishes rotation tables and swaps them on reload
//! - [`registry`] and [`lifecycle`] track bots from spawn to teardown
//! - [`movement`] and [`driver`] run each bot once per tick
//! - [`selfbot`] drives a controller's own character
//! - [`admin`] and [`roles`] back the administrative commands
pub mod admin;
pub mod driver;
pub mod error;
pub mod lifecycle;
pub mod movement;
pub mod registry;
pub mod roles;
pub mod runtime;
pub mod selfbot;
pub mod store;

pub use driver::{BotOutcome, TickEntry, TickPlan, TickReport, TickTimer, run_tick};
pub use error::{AdminError, Result, RuntimeError};
pub use lifecycle::{
    BotHost, DismissReport, SpawnTicket, StepResult, TeardownError, TeardownStep, dismiss,
};
pub use registry::{BotRecord, BotRegistry, MovementState};
pub use roles::{detect_role, detect_spec, detect_spec_index};
pub use runtime::{BotRuntime, BotRuntimeBuilder};
pub use selfbot::{SelfBotState, SelfBots};
pub use store::{
    FileRotationSource, InMemoryRotationSource, RotationRef, RotationSource, RotationStore,
    StoreError,
};
