//! In-memory host engine for tests.
//!
//! [`MockWorld`] stores [`MockActor`]s by id, knows simple groups, and records
//! every command it receives so tests can assert on what the bots did.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::env::{Actor, ExecuteError, MetaAction, WorldCommands, WorldView};
use crate::types::{
    ActionId, ActorId, AuraId, ClassId, ItemId, Position, ResourceKind, Role, ZoneId,
};

/// Plain-data actor. Every field is public so tests can poke state directly.
#[derive(Clone, Debug)]
pub struct MockActor {
    pub id: ActorId,
    pub name: String,
    pub class: ClassId,
    pub health: f32,
    pub resources: HashMap<ResourceKind, f32>,
    pub primary_resource: ResourceKind,
    pub auras: BTreeSet<AuraId>,
    pub position: Position,
    pub facing: f32,
    pub zone: ZoneId,
    pub alive: bool,
    pub in_world: bool,
    pub player: bool,
    pub in_combat: bool,
    pub known: BTreeSet<ActionId>,
    pub cooldowns: BTreeSet<ActionId>,
    pub acting: bool,
    pub enemy: Option<ActorId>,
    pub attacker: Option<ActorId>,
    pub pet: Option<ActorId>,
    pub talent_tree: Option<u32>,
    pub talent_index: u8,
    pub spec_hint: Option<Role>,
    pub items: BTreeMap<ItemId, u32>,
}

impl MockActor {
    /// Healthy, full-mana, non-player actor at the origin of zone 0.
    pub fn new(id: ActorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            class: ClassId(1),
            health: 100.0,
            resources: HashMap::from([(ResourceKind::Mana, 100.0)]),
            primary_resource: ResourceKind::Mana,
            auras: BTreeSet::new(),
            position: Position::ORIGIN,
            facing: 0.0,
            zone: ZoneId::default(),
            alive: true,
            in_world: true,
            player: false,
            in_combat: false,
            known: BTreeSet::new(),
            cooldowns: BTreeSet::new(),
            acting: false,
            enemy: None,
            attacker: None,
            pet: None,
            talent_tree: None,
            talent_index: 0,
            spec_hint: None,
            items: BTreeMap::new(),
        }
    }

    pub fn with_class(mut self, class: u8) -> Self {
        self.class = ClassId(class);
        self
    }

    pub fn with_health(mut self, health: f32) -> Self {
        self.health = health;
        self
    }

    pub fn with_mana(self, mana: f32) -> Self {
        self.with_resource(ResourceKind::Mana, mana)
    }

    pub fn with_resource(mut self, kind: ResourceKind, value: f32) -> Self {
        self.resources.insert(kind, value);
        self
    }

    pub fn with_aura(mut self, aura: AuraId) -> Self {
        self.auras.insert(aura);
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_facing(mut self, facing: f32) -> Self {
        self.facing = facing;
        self
    }

    pub fn in_zone(mut self, zone: ZoneId) -> Self {
        self.zone = zone;
        self
    }

    pub fn alive(mut self, alive: bool) -> Self {
        self.alive = alive;
        self
    }

    pub fn as_player(mut self) -> Self {
        self.player = true;
        self
    }

    pub fn in_combat(mut self, in_combat: bool) -> Self {
        self.in_combat = in_combat;
        self
    }

    pub fn knowing(mut self, actions: &[ActionId]) -> Self {
        self.known.extend(actions.iter().copied());
        self
    }

    pub fn cooling_down(mut self, actions: &[ActionId]) -> Self {
        self.cooldowns.extend(actions.iter().copied());
        self
    }

    pub fn acting(mut self, acting: bool) -> Self {
        self.acting = acting;
        self
    }

    /// Sets the current enemy and enters combat.
    pub fn fighting(mut self, enemy: ActorId) -> Self {
        self.enemy = Some(enemy);
        self.in_combat = true;
        self
    }

    pub fn with_pet(mut self, pet: ActorId) -> Self {
        self.pet = Some(pet);
        self
    }

    pub fn with_talent_tree(mut self, tree: u32) -> Self {
        self.talent_tree = Some(tree);
        self
    }

    pub fn with_talent_index(mut self, index: u8) -> Self {
        self.talent_index = index;
        self
    }

    pub fn with_spec_hint(mut self, role: Role) -> Self {
        self.spec_hint = Some(role);
        self
    }

    pub fn with_item(mut self, item: ItemId, count: u32) -> Self {
        self.items.insert(item, count);
        self
    }
}

impl Actor for MockActor {
    fn id(&self) -> ActorId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn class_id(&self) -> ClassId {
        self.class
    }

    fn health_percent(&self) -> f32 {
        self.health
    }

    fn resource_percent(&self, kind: ResourceKind) -> f32 {
        self.resources.get(&kind).copied().unwrap_or(0.0)
    }

    fn primary_resource(&self) -> ResourceKind {
        self.primary_resource
    }

    fn has_aura(&self, aura: AuraId) -> bool {
        self.auras.contains(&aura)
    }

    fn position(&self) -> Position {
        self.position
    }

    fn facing(&self) -> f32 {
        self.facing
    }

    fn zone(&self) -> ZoneId {
        self.zone
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn is_in_world(&self) -> bool {
        self.in_world
    }

    fn is_player(&self) -> bool {
        self.player
    }

    fn is_in_combat(&self) -> bool {
        self.in_combat
    }

    fn knows_action(&self, action: ActionId) -> bool {
        self.known.contains(&action)
    }

    fn action_on_cooldown(&self, action: ActionId) -> bool {
        self.cooldowns.contains(&action)
    }

    fn is_currently_acting(&self) -> bool {
        self.acting
    }

    fn current_enemy(&self) -> Option<ActorId> {
        self.enemy
    }

    fn attacker(&self) -> Option<ActorId> {
        self.attacker
    }

    fn pet(&self) -> Option<ActorId> {
        self.pet
    }

    fn talent_tree(&self) -> Option<u32> {
        self.talent_tree
    }

    fn primary_talent_index(&self) -> u8 {
        self.talent_index
    }

    fn spec_hint(&self) -> Option<Role> {
        self.spec_hint
    }

    fn item_count(&self, item: ItemId) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }
}

/// Command received by a [`MockWorld`], in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub enum MockCommand {
    Execute {
        caster: ActorId,
        target: ActorId,
        action: ActionId,
    },
    MoveTo {
        actor: ActorId,
        point: Position,
    },
    Relocate {
        actor: ActorId,
        point: Position,
    },
    Pursue {
        actor: ActorId,
        target: ActorId,
        standoff: f32,
    },
    StopMovement(ActorId),
    StopCombat(ActorId),
}

/// Fake host engine.
#[derive(Clone, Debug, Default)]
pub struct MockWorld {
    actors: BTreeMap<ActorId, MockActor>,
    groups: Vec<Vec<ActorId>>,
    meta: HashMap<ActorId, Vec<MetaAction>>,
    rejected: BTreeSet<ActionId>,
    commands: Vec<MockCommand>,
}

impl MockWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, actor: MockActor) {
        self.actors.insert(actor.id, actor);
    }

    pub fn remove(&mut self, id: ActorId) -> Option<MockActor> {
        self.actors.remove(&id)
    }

    pub fn get(&self, id: ActorId) -> Option<&MockActor> {
        self.actors.get(&id)
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut MockActor> {
        self.actors.get_mut(&id)
    }

    /// Puts `members` in one group, replacing any group they were in.
    pub fn group(&mut self, members: &[ActorId]) {
        for group in &mut self.groups {
            group.retain(|id| !members.contains(id));
        }
        self.groups.retain(|group| !group.is_empty());
        self.groups.push(members.to_vec());
    }

    pub fn leave_group(&mut self, id: ActorId) {
        for group in &mut self.groups {
            group.retain(|member| *member != id);
        }
    }

    pub fn set_meta_actions(&mut self, id: ActorId, actions: Vec<MetaAction>) {
        self.meta.insert(id, actions);
    }

    /// Makes every future `execute` of `action` fail.
    pub fn reject(&mut self, action: ActionId) {
        self.rejected.insert(action);
    }

    pub fn commands(&self) -> &[MockCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// `(caster, target, action)` of every execute attempt.
    pub fn executions(&self) -> Vec<(ActorId, ActorId, ActionId)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                MockCommand::Execute {
                    caster,
                    target,
                    action,
                } => Some((*caster, *target, *action)),
                _ => None,
            })
            .collect()
    }

    pub fn executions_by(&self, caster: ActorId) -> Vec<(ActorId, ActionId)> {
        self.executions()
            .into_iter()
            .filter(|(who, _, _)| *who == caster)
            .map(|(_, target, action)| (target, action))
            .collect()
    }
}

impl WorldView for MockWorld {
    fn actor(&self, id: ActorId) -> Option<&dyn Actor> {
        self.actors.get(&id).map(|actor| actor as &dyn Actor)
    }

    fn group_members(&self, id: ActorId) -> Vec<ActorId> {
        self.groups
            .iter()
            .find(|group| group.contains(&id))
            .cloned()
            .unwrap_or_default()
    }

    fn meta_actions(&self, id: ActorId) -> Vec<MetaAction> {
        self.meta.get(&id).cloned().unwrap_or_default()
    }
}

impl WorldCommands for MockWorld {
    fn execute(
        &mut self,
        caster: ActorId,
        target: ActorId,
        action: ActionId,
    ) -> Result<(), ExecuteError> {
        self.commands.push(MockCommand::Execute {
            caster,
            target,
            action,
        });
        if !self.actors.contains_key(&caster) {
            return Err(ExecuteError::CasterUnavailable(caster));
        }
        if !self.actors.contains_key(&target) {
            return Err(ExecuteError::TargetUnavailable(target));
        }
        if self.rejected.contains(&action) {
            return Err(ExecuteError::Rejected {
                action,
                reason: "rejected by test world".into(),
            });
        }
        Ok(())
    }

    fn move_to(&mut self, actor: ActorId, point: Position) {
        self.commands.push(MockCommand::MoveTo { actor, point });
    }

    fn relocate(&mut self, actor: ActorId, point: Position) {
        self.commands.push(MockCommand::Relocate { actor, point });
        if let Some(mock) = self.actors.get_mut(&actor) {
            mock.position = point;
        }
    }

    fn pursue(&mut self, actor: ActorId, target: ActorId, standoff: f32) {
        self.commands.push(MockCommand::Pursue {
            actor,
            target,
            standoff,
        });
    }

    fn stop_movement(&mut self, actor: ActorId) {
        self.commands.push(MockCommand::StopMovement(actor));
    }

    fn stop_combat(&mut self, actor: ActorId) {
        self.commands.push(MockCommand::StopCombat(actor));
        if let Some(mock) = self.actors.get_mut(&actor) {
            mock.enemy = None;
            mock.in_combat = false;
        }
    }
}
