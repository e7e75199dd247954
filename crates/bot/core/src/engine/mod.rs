//! Per-tick decision pipeline.
//!
//! [`scan`] walks the rotation's categories in priority order and returns the
//! first eligible action. [`plan_turn`] wraps it with the cast queue: while a
//! bot is busy the next decision is prepared, and when it becomes free the
//! prepared one is tried first. [`run_turn`] executes the plan, at most once.
mod context;
mod queue;
mod turn;
mod waterfall;

pub use context::{BotTurn, Decision, ScanMode};
pub use queue::CastQueue;
pub use turn::{TurnOutcome, TurnPlan, plan_turn, run_turn};
pub use waterfall::scan;
