//! Registry of live bots, keyed by controller.
//!
//! Controllers are iterated in id order and each controller's bots in
//! registration order, which is the order ticks evaluate them in.

use std::collections::{BTreeMap, HashMap};

use bot_core::{
    ActorId, CastQueue, ClassId, FormationSlot, Position, Role, RoleLookup, SpecKey,
};

use crate::error::{Result, RuntimeError};

/// Where a bot is in the follow / fight cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum MovementState {
    /// Holding its formation slot behind the controller.
    #[default]
    Following,
    /// Pursuing the controller's enemy.
    InCombat,
    /// Walking to a newly computed slot.
    Repositioning,
}

/// One bot under one controller.
#[derive(Clone, Debug)]
pub struct BotRecord {
    pub actor: ActorId,
    pub controller: ActorId,
    pub name: String,
    pub class_id: ClassId,
    pub spec_index: u8,
    pub role: Role,
    pub in_combat: bool,
    pub following: bool,
    /// Decision prepared while the bot was busy acting.
    pub queue: CastQueue,
    pub movement: MovementState,
    pub slot: Option<FormationSlot>,
    /// Last point the bot was sent to while following.
    pub slot_point: Option<Position>,
    /// Enemy currently pursued.
    pub pursuing: Option<ActorId>,
}

impl BotRecord {
    pub fn new(
        controller: ActorId,
        actor: ActorId,
        name: impl Into<String>,
        class_id: ClassId,
        spec_index: u8,
        role: Role,
    ) -> Self {
        Self {
            actor,
            controller,
            name: name.into(),
            class_id,
            spec_index,
            role,
            in_combat: false,
            following: true,
            queue: CastQueue::new(),
            movement: MovementState::Following,
            slot: None,
            slot_point: None,
            pursuing: None,
        }
    }

    pub fn spec_key(&self) -> SpecKey {
        SpecKey {
            class: self.class_id,
            spec_index: self.spec_index,
        }
    }
}

#[derive(Debug, Default)]
pub struct BotRegistry {
    bots: BTreeMap<ActorId, Vec<BotRecord>>,
    owners: HashMap<ActorId, ActorId>,
}

impl BotRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a bot. An actor can only ever belong to one controller.
    pub fn register(&mut self, record: BotRecord) -> Result<()> {
        if self.owners.contains_key(&record.actor) {
            return Err(RuntimeError::AlreadyBot(record.actor));
        }
        self.owners.insert(record.actor, record.controller);
        self.bots.entry(record.controller).or_default().push(record);
        Ok(())
    }

    pub fn unregister(&mut self, controller: ActorId, actor: ActorId) -> Option<BotRecord> {
        let bots = self.bots.get_mut(&controller)?;
        let index = bots.iter().position(|record| record.actor == actor)?;
        let record = bots.remove(index);
        if bots.is_empty() {
            self.bots.remove(&controller);
        }
        self.owners.remove(&actor);
        Some(record)
    }

    /// Removes every bot of `controller` and hands the records back for
    /// teardown. Calling it again returns an empty list.
    pub fn unregister_all(&mut self, controller: ActorId) -> Vec<BotRecord> {
        let removed = self.bots.remove(&controller).unwrap_or_default();
        for record in &removed {
            self.owners.remove(&record.actor);
        }
        removed
    }

    pub fn find(&self, controller: ActorId, actor: ActorId) -> Option<&BotRecord> {
        self.bots_of(controller)
            .iter()
            .find(|record| record.actor == actor)
    }

    pub fn find_mut(&mut self, controller: ActorId, actor: ActorId) -> Option<&mut BotRecord> {
        self.bots
            .get_mut(&controller)?
            .iter_mut()
            .find(|record| record.actor == actor)
    }

    /// Case-insensitive lookup by character name.
    pub fn find_by_name(&self, controller: ActorId, name: &str) -> Option<&BotRecord> {
        self.bots_of(controller)
            .iter()
            .find(|record| record.name.eq_ignore_ascii_case(name))
    }

    pub fn find_by_actor(&self, actor: ActorId) -> Option<&BotRecord> {
        let controller = self.controller_of(actor)?;
        self.find(controller, actor)
    }

    pub fn controller_of(&self, actor: ActorId) -> Option<ActorId> {
        self.owners.get(&actor).copied()
    }

    pub fn is_bot(&self, actor: ActorId) -> bool {
        self.owners.contains_key(&actor)
    }

    /// Bots of `controller` in registration order.
    pub fn bots_of(&self, controller: ActorId) -> &[BotRecord] {
        self.bots.get(&controller).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn bots_of_mut(&mut self, controller: ActorId) -> Option<&mut Vec<BotRecord>> {
        self.bots.get_mut(&controller)
    }

    pub fn count(&self, controller: ActorId) -> usize {
        self.bots_of(controller).len()
    }

    /// Total number of bots.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn controllers(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.bots.keys().copied()
    }

    pub fn for_each_controller(&self, mut f: impl FnMut(ActorId, &[BotRecord])) {
        for (controller, bots) in &self.bots {
            f(*controller, bots);
        }
    }

    /// `(controller, actor)` of every bot, in evaluation order.
    pub fn snapshot_ids(&self) -> Vec<(ActorId, ActorId)> {
        self.bots
            .iter()
            .flat_map(|(controller, bots)| bots.iter().map(|record| (*controller, record.actor)))
            .collect()
    }
}

impl RoleLookup for BotRegistry {
    fn role_of(&self, actor: ActorId) -> Option<Role> {
        self.find_by_actor(actor).map(|record| record.role)
    }
}
