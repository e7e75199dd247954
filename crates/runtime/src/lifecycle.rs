//! Bot spawn checks and teardown.
//!
//! Spawning is two-phase: [`request_spawn`] validates the controller before
//! the host starts loading the character, and [`complete_spawn`] registers it
//! once loaded, re-checking everything that may have changed meanwhile.
//!
//! Dismissing a bot walks a fixed sequence of host operations. Every step
//! runs even when an earlier one failed, and failures are reported once per
//! dismissal.

use bot_core::{ActorId, RotationTable, WorldView};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::error::{Result, RuntimeError};
use crate::registry::{BotRecord, BotRegistry};
use crate::roles::{detect_role, detect_spec_index};

/// A validated spawn waiting for the host to load the character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnTicket {
    pub controller: ActorId,
    pub actor: ActorId,
}

/// Checks that `controller` may take `actor` as a new bot.
pub fn request_spawn(
    world: &dyn WorldView,
    registry: &BotRegistry,
    max_bots: usize,
    controller: ActorId,
    actor: ActorId,
) -> Result<SpawnTicket> {
    let online = world
        .actor(controller)
        .is_some_and(|owner| owner.is_in_world());
    if !online {
        error!(%controller, %actor, "spawn rejected: controller offline");
        return Err(RuntimeError::ControllerOffline(controller));
    }
    check_capacity(registry, max_bots, controller, actor)?;
    Ok(SpawnTicket { controller, actor })
}

/// Registers the loaded character behind `ticket`.
///
/// Reports [`RuntimeError::ControllerGone`] when the controller logged out
/// while the character was loading; the host then discards the character.
pub fn complete_spawn<'r>(
    world: &dyn WorldView,
    registry: &'r mut BotRegistry,
    table: &RotationTable,
    max_bots: usize,
    ticket: SpawnTicket,
) -> Result<&'r BotRecord> {
    let SpawnTicket { controller, actor } = ticket;

    let online = world
        .actor(controller)
        .is_some_and(|owner| owner.is_in_world());
    if !online {
        warn!(%controller, %actor, "controller left before the bot finished loading");
        return Err(RuntimeError::ControllerGone(controller));
    }
    check_capacity(registry, max_bots, controller, actor)?;

    let Some(character) = world.actor(actor) else {
        error!(%controller, %actor, "spawn failed: character not loaded");
        return Err(RuntimeError::ActorUnavailable(actor));
    };
    let role = detect_role(character, table);
    let record = BotRecord::new(
        controller,
        actor,
        character.name(),
        character.class_id(),
        detect_spec_index(character),
        role,
    );
    info!(
        %controller,
        bot = %actor,
        name = %record.name,
        spec = %record.spec_key(),
        %role,
        "bot joined"
    );
    registry.register(record)?;
    registry
        .find(controller, actor)
        .ok_or(RuntimeError::ActorUnavailable(actor))
}

fn check_capacity(
    registry: &BotRegistry,
    max_bots: usize,
    controller: ActorId,
    actor: ActorId,
) -> Result<()> {
    if actor == controller {
        error!(%controller, "spawn rejected: controller cannot be its own bot");
        return Err(RuntimeError::OwnCharacter(actor));
    }
    if registry.is_bot(actor) {
        error!(%controller, %actor, "spawn rejected: already a bot");
        return Err(RuntimeError::AlreadyBot(actor));
    }
    if registry.count(controller) >= max_bots {
        error!(%controller, %actor, max_bots, "spawn rejected: bot limit reached");
        return Err(RuntimeError::TooManyBots {
            controller,
            max: max_bots,
        });
    }
    Ok(())
}

/// Outcome of a single teardown step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeardownError {
    /// The piece this step removes was already gone. Not a failure.
    #[error("{0} was already detached")]
    AlreadyGone(ActorId),

    #[error("{0}")]
    Failed(String),
}

pub type StepResult = std::result::Result<(), TeardownError>;

/// Engine operations needed to take a bot out of the game.
pub trait BotHost {
    fn leave_group(&mut self, bot: ActorId) -> StepResult;

    /// Save the character.
    fn persist(&mut self, bot: ActorId) -> StepResult;

    fn mark_offline(&mut self, bot: ActorId) -> StepResult;

    /// Sever the link between the character and its (fake) session.
    fn detach_session(&mut self, bot: ActorId) -> StepResult;

    /// Stop casting, moving and fighting.
    fn halt(&mut self, bot: ActorId) -> StepResult;

    fn remove_from_world(&mut self, bot: ActorId) -> StepResult;

    fn remove_from_lookup(&mut self, bot: ActorId) -> StepResult;

    /// Free whatever the host allocated for the bot.
    fn release(&mut self, bot: ActorId) -> StepResult;
}

/// Teardown steps in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum TeardownStep {
    LeaveGroup,
    Persist,
    MarkOffline,
    DetachSession,
    Halt,
    RemoveFromWorld,
    RemoveFromLookup,
    Release,
}

impl TeardownStep {
    pub const ALL: [TeardownStep; 8] = [
        TeardownStep::LeaveGroup,
        TeardownStep::Persist,
        TeardownStep::MarkOffline,
        TeardownStep::DetachSession,
        TeardownStep::Halt,
        TeardownStep::RemoveFromWorld,
        TeardownStep::RemoveFromLookup,
        TeardownStep::Release,
    ];

    pub fn run(self, host: &mut dyn BotHost, bot: ActorId) -> StepResult {
        match self {
            TeardownStep::LeaveGroup => host.leave_group(bot),
            TeardownStep::Persist => host.persist(bot),
            TeardownStep::MarkOffline => host.mark_offline(bot),
            TeardownStep::DetachSession => host.detach_session(bot),
            TeardownStep::Halt => host.halt(bot),
            TeardownStep::RemoveFromWorld => host.remove_from_world(bot),
            TeardownStep::RemoveFromLookup => host.remove_from_lookup(bot),
            TeardownStep::Release => host.release(bot),
        }
    }
}

/// Steps that failed while dismissing one bot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DismissReport {
    pub bot: Option<ActorId>,
    pub failed: Vec<(TeardownStep, TeardownError)>,
}

impl DismissReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs every teardown step for `bot`, in order.
pub fn dismiss(host: &mut dyn BotHost, bot: ActorId) -> DismissReport {
    let mut report = DismissReport {
        bot: Some(bot),
        failed: Vec::new(),
    };

    for step in TeardownStep::ALL {
        match step.run(host, bot) {
            Ok(()) => {}
            Err(TeardownError::AlreadyGone(_)) => {
                debug!(%bot, %step, "teardown step found nothing to do");
            }
            Err(error) => report.failed.push((step, error)),
        }
    }

    if !report.is_clean() {
        let steps: Vec<String> = report
            .failed
            .iter()
            .map(|(step, error)| format!("{step}: {error}"))
            .collect();
        warn!(%bot, failures = %steps.join("; "), "bot teardown incomplete");
    }
    report
}
