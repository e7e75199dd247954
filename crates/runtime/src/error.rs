//! Error types surfaced by the bot runtime.
//!
//! Per-tick evaluation never returns errors; these cover the administrative
//! and lifecycle entry points, where the caller needs a readable reason.

use bot_core::{ActorId, SpecKey};
use thiserror::Error;

pub use crate::store::StoreError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("controller {0} is not online")]
    ControllerOffline(ActorId),

    #[error("controller {0} went away before the bot finished loading")]
    ControllerGone(ActorId),

    #[error("{0} is already a bot")]
    AlreadyBot(ActorId),

    #[error("{0} cannot be its own bot")]
    OwnCharacter(ActorId),

    #[error("controller {controller} already has {max} bots")]
    TooManyBots { controller: ActorId, max: usize },

    #[error("actor {0} is not available")]
    ActorUnavailable(ActorId),

    #[error("autoplay is disabled")]
    SelfBotDisabled,

    #[error("{0} already runs on autoplay")]
    SelfBotActive(ActorId),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Admin(#[from] AdminError),
}

/// Failures of the administrative surface, phrased for the person asking.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("no rotation for {0}")]
    RotationNotFound(SpecKey),

    #[error("no bot named '{name}' under controller {controller}")]
    BotNotFound { controller: ActorId, name: String },

    #[error("'{0}' is not a role (tank, healer, melee_dps, ranged_dps)")]
    UnknownRole(String),
}
