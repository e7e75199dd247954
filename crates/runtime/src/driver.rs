//! Per-tick evaluation of every registered bot.
//!
//! A tick starts from a [`TickPlan`]: one rotation table snapshot plus the
//! ids of every bot in registry order. Each entry is re-resolved against the
//! registry right before it runs, so bots dismissed mid-tick are skipped and
//! their queued actions die with their records.

use std::sync::Arc;

use bot_core::{
    Actor, ActorId, BotConfig, BotTurn, RotationTable, ScanMode, TurnOutcome, World, WorldView,
    assign_slots, run_turn,
};
use tracing::{debug, trace};

use crate::movement::update_movement;
use crate::registry::BotRegistry;

/// Accumulates host frame deltas into fixed-interval bot updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickTimer {
    interval_ms: u32,
    elapsed_ms: u32,
}

impl TickTimer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0,
        }
    }

    /// Adds `delta_ms`; true when an update is due, which resets the count.
    pub fn advance(&mut self, delta_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        if self.elapsed_ms < self.interval_ms {
            return false;
        }
        self.elapsed_ms = 0;
        true
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn set_interval(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms;
    }
}

/// One bot scheduled for evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickEntry {
    pub controller: ActorId,
    pub actor: ActorId,
}

/// Snapshot taken at the start of a tick.
#[derive(Clone, Debug)]
pub struct TickPlan {
    table: Arc<RotationTable>,
    entries: Vec<TickEntry>,
}

impl TickPlan {
    pub fn table(&self) -> &RotationTable {
        &self.table
    }

    pub fn entries(&self) -> &[TickEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What happened to one bot during a tick.
#[derive(Clone, Debug, PartialEq)]
pub struct BotOutcome {
    pub controller: ActorId,
    pub actor: ActorId,
    pub outcome: TurnOutcome,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub outcomes: Vec<BotOutcome>,
    /// Entries whose bot was gone by the time its turn came.
    pub skipped: usize,
}

impl TickReport {
    pub fn outcome_of(&self, actor: ActorId) -> Option<&TurnOutcome> {
        self.outcomes
            .iter()
            .find(|entry| entry.actor == actor)
            .map(|entry| &entry.outcome)
    }

    pub fn evaluated(&self) -> Vec<ActorId> {
        self.outcomes.iter().map(|entry| entry.actor).collect()
    }

    pub(crate) fn record(&mut self, entry: TickEntry, outcome: Option<TurnOutcome>) {
        match outcome {
            Some(outcome) => self.outcomes.push(BotOutcome {
                controller: entry.controller,
                actor: entry.actor,
                outcome,
            }),
            None => self.skipped += 1,
        }
    }
}

/// Assigns formation slots and snapshots the bots to evaluate.
pub fn begin_tick(registry: &mut BotRegistry, table: Arc<RotationTable>) -> TickPlan {
    let controllers: Vec<ActorId> = registry.controllers().collect();
    for controller in controllers {
        let Some(bots) = registry.bots_of_mut(controller) else {
            continue;
        };
        let roles: Vec<_> = bots.iter().map(|record| record.role).collect();
        for (record, slot) in bots.iter_mut().zip(assign_slots(&roles)) {
            record.slot = Some(slot);
        }
    }

    let entries = registry
        .snapshot_ids()
        .into_iter()
        .map(|(controller, actor)| TickEntry { controller, actor })
        .collect();
    TickPlan { table, entries }
}

/// Moves and runs one bot's turn.
///
/// Returns `None` when the bot was dismissed since the plan was taken. A bot
/// whose controller is missing or out of the world idles and keeps its queue.
pub fn evaluate_bot<W: World>(
    world: &mut W,
    registry: &mut BotRegistry,
    table: &RotationTable,
    config: &BotConfig,
    entry: TickEntry,
) -> Option<TurnOutcome> {
    let Some(record) = registry.find_mut(entry.controller, entry.actor) else {
        debug!(bot = %entry.actor, "bot dismissed before its turn");
        return None;
    };
    let controller_present = world
        .actor(entry.controller)
        .is_some_and(|controller| controller.is_in_world());
    if !controller_present {
        trace!(bot = %entry.actor, controller = %entry.controller, "controller not in world");
        return Some(TurnOutcome::Idle);
    }

    let rotation = table.get(record.spec_key());
    let preferred_range = rotation.map_or(0.0, |rotation| rotation.preferred_range);
    update_movement(world, record, preferred_range, &config.movement);

    let Some(rotation) = rotation else {
        // No rotation for this spec: pursuit alone keeps it auto-attacking.
        trace!(bot = %entry.actor, spec = %record.spec_key(), "no rotation");
        return Some(TurnOutcome::Idle);
    };

    let mode = if record.in_combat {
        ScanMode::Combat
    } else {
        ScanMode::OutOfCombat
    };
    let enemy = if record.in_combat {
        record.pursuing
    } else {
        None
    };
    let role = record.role;
    let mut queue = std::mem::take(&mut record.queue);

    let turn = BotTurn {
        caster: entry.actor,
        controller: entry.controller,
        enemy,
        rotation,
        role,
        requirements: table.requirements(),
        roles: &*registry,
        config: &config.combat,
        mode,
    };
    let outcome = run_turn(world, &turn, &mut queue);

    if let Some(record) = registry.find_mut(entry.controller, entry.actor) {
        record.queue = queue;
    }
    debug!(bot = %entry.actor, ?mode, ?outcome, "bot turn");
    Some(outcome)
}

/// Runs a whole tick for every registered bot.
pub fn run_tick<W: World>(
    world: &mut W,
    registry: &mut BotRegistry,
    table: Arc<RotationTable>,
    config: &BotConfig,
) -> TickReport {
    let plan = begin_tick(registry, table);
    let mut report = TickReport::default();
    for entry in plan.entries() {
        let outcome = evaluate_bot(world, registry, plan.table(), config, *entry);
        report.record(*entry, outcome);
    }
    report
}
