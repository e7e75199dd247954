use crate::env::{Actor, ExecuteError};
use crate::types::{ActionId, ActorId, Position};

/// Lookups the decision core performs against the host engine.
pub trait WorldView {
    /// Live view of an actor, `None` once it left the engine's lookup tables.
    fn actor(&self, id: ActorId) -> Option<&dyn Actor>;

    /// Members of the actor's group, the actor included. Empty without a group.
    fn group_members(&self, id: ActorId) -> Vec<ActorId>;

    /// On-use effects the engine grants outside the rotation (trinkets, racials).
    fn meta_actions(&self, _id: ActorId) -> Vec<MetaAction> {
        Vec::new()
    }
}

/// Commands the decision core and movement policy issue.
pub trait WorldCommands {
    fn execute(
        &mut self,
        caster: ActorId,
        target: ActorId,
        action: ActionId,
    ) -> Result<(), ExecuteError>;

    /// Path to a point.
    fn move_to(&mut self, actor: ActorId, point: Position);

    /// Instant relocation, used when pathing would get stuck.
    fn relocate(&mut self, actor: ActorId, point: Position);

    /// Start attacking and chasing `target`, staying `standoff` units away.
    fn pursue(&mut self, actor: ActorId, target: ActorId, standoff: f32);

    fn stop_movement(&mut self, actor: ActorId);

    /// Drop the current victim and leave combat state.
    fn stop_combat(&mut self, actor: ActorId);
}

/// Full engine surface needed by the tick driver.
pub trait World: WorldView + WorldCommands {}

impl<T: WorldView + WorldCommands + ?Sized> World for T {}

/// Where an engine-provided effect comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetaSource {
    /// On-use item effect; usable as long as it is off cooldown.
    Trinket,
    /// Racial ability; the actor must also know it.
    Racial,
}

/// What an engine-provided effect does, which decides its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetaEffect {
    /// Cast on the actor itself.
    Beneficial,
    /// Cast on the current enemy.
    Harmful,
    /// Only frees the actor from crowd control; never used by the waterfall.
    BreaksIncapacitation,
}

/// One engine-provided "free" action evaluated in the Meta category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetaAction {
    pub action: ActionId,
    pub source: MetaSource,
    pub effect: MetaEffect,
}

impl MetaAction {
    pub const fn new(action: ActionId, source: MetaSource, effect: MetaEffect) -> Self {
        Self {
            action,
            source,
            effect,
        }
    }
}
