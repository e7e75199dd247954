use thiserror::Error;

use crate::types::{ActionId, ActorId};

/// Reasons the host engine refused to perform an action.
///
/// A rejection abandons the bot's decision for the current tick; the next
/// tick re-evaluates from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecuteError {
    #[error("caster {0} is not available")]
    CasterUnavailable(ActorId),

    #[error("target {0} is not available")]
    TargetUnavailable(ActorId),

    #[error("action {action} rejected: {reason}")]
    Rejected { action: ActionId, reason: String },
}
