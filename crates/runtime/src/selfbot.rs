//! Autoplay: a controller hands its own character to the waterfall.

use std::collections::BTreeMap;

use bot_core::{
    ActorId, BotConfig, BotTurn, CastQueue, NoRoles, Role, RotationTable, ScanMode, SpecKey,
    TurnOutcome, World, WorldView, run_turn,
};
use tracing::{debug, info};

use crate::error::{Result, RuntimeError};
use crate::movement::{hostile, selfbot_standoff};
use crate::roles::{detect_role, detect_spec};

/// Autoplay state of one controller.
#[derive(Clone, Debug, PartialEq)]
pub struct SelfBotState {
    pub actor: ActorId,
    pub spec: SpecKey,
    pub role: Role,
    pub queue: CastQueue,
    pub in_combat: bool,
    /// Enemy pursued since engaging.
    pub target: Option<ActorId>,
}

#[derive(Debug, Default)]
pub struct SelfBots {
    states: BTreeMap<ActorId, SelfBotState>,
}

impl SelfBots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `actor` on autoplay, detecting its spec and role.
    pub fn enable(
        &mut self,
        world: &dyn WorldView,
        table: &RotationTable,
        actor: ActorId,
    ) -> Result<&SelfBotState> {
        if self.states.contains_key(&actor) {
            return Err(RuntimeError::SelfBotActive(actor));
        }
        let character = world
            .actor(actor)
            .filter(|character| character.is_in_world())
            .ok_or(RuntimeError::ActorUnavailable(actor))?;

        let state = SelfBotState {
            actor,
            spec: detect_spec(character),
            role: detect_role(character, table),
            queue: CastQueue::new(),
            in_combat: false,
            target: None,
        };
        info!(%actor, spec = %state.spec, role = %state.role, "autoplay enabled");
        Ok(self.states.entry(actor).or_insert(state))
    }

    /// Takes `actor` off autoplay. False when it was not on it.
    pub fn disable(&mut self, actor: ActorId) -> bool {
        let removed = self.states.remove(&actor).is_some();
        if removed {
            info!(%actor, "autoplay disabled");
        }
        removed
    }

    pub fn get(&self, actor: ActorId) -> Option<&SelfBotState> {
        self.states.get(&actor)
    }

    pub fn is_active(&self, actor: ActorId) -> bool {
        self.states.contains_key(&actor)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Runs one autoplay tick for every enabled character.
    ///
    /// Characters the engine no longer knows are dropped. Characters out of
    /// the world or dead are left alone until they come back.
    pub fn tick<W: World>(
        &mut self,
        world: &mut W,
        table: &RotationTable,
        config: &BotConfig,
    ) -> Vec<(ActorId, TurnOutcome)> {
        let mut outcomes = Vec::new();
        let mut vanished = Vec::new();

        for state in self.states.values_mut() {
            let Some(character) = world.actor(state.actor) else {
                vanished.push(state.actor);
                continue;
            };
            if !character.is_valid_target() {
                continue;
            }
            let enemy = hostile(&*world, character.current_enemy())
                .or_else(|| hostile(&*world, character.attacker()));

            let Some(enemy) = enemy else {
                if state.in_combat {
                    leave_combat(world, state);
                }
                continue;
            };

            let rotation = table.get(state.spec);
            if !state.in_combat || state.target != Some(enemy) {
                let preferred = rotation.map_or(0.0, |rotation| rotation.preferred_range);
                let standoff = selfbot_standoff(state.role, preferred, &config.movement);
                world.pursue(state.actor, enemy, standoff);
                debug!(actor = %state.actor, %enemy, standoff, "autoplay engaging");
                state.in_combat = true;
                state.target = Some(enemy);
            }

            let Some(rotation) = rotation else {
                outcomes.push((state.actor, TurnOutcome::Idle));
                continue;
            };
            let turn = BotTurn {
                caster: state.actor,
                controller: state.actor,
                enemy: Some(enemy),
                rotation,
                role: state.role,
                requirements: table.requirements(),
                roles: &NoRoles,
                config: &config.combat,
                mode: ScanMode::Combat,
            };
            let outcome = run_turn(world, &turn, &mut state.queue);
            outcomes.push((state.actor, outcome));
        }

        for actor in vanished {
            self.states.remove(&actor);
            debug!(%actor, "autoplay character vanished");
        }
        outcomes
    }
}

fn leave_combat<W: World>(world: &mut W, state: &mut SelfBotState) {
    state.queue.clear();
    world.stop_combat(state.actor);
    world.stop_movement(state.actor);
    state.in_combat = false;
    state.target = None;
    debug!(actor = %state.actor, "autoplay left combat");
}
