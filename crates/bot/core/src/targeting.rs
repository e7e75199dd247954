//! Resolution of a rule's [`TargetKind`] to a live actor.

use crate::env::{Actor, WorldView};
use crate::rotation::TargetKind;
use crate::types::{ActorId, Role};

/// Source of the roles assigned to bots, used to find the group's tank.
pub trait RoleLookup {
    /// Role of `actor` when it is a bot, `None` for anyone else.
    fn role_of(&self, actor: ActorId) -> Option<Role>;
}

/// Lookup that knows no bots; the tank always falls back to the controller.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRoles;

impl RoleLookup for NoRoles {
    fn role_of(&self, _actor: ActorId) -> Option<Role> {
        None
    }
}

/// Resolves targets from one caster's point of view.
pub struct TargetResolver<'a> {
    world: &'a dyn WorldView,
    caster: &'a dyn Actor,
    controller: ActorId,
    enemy: Option<ActorId>,
    roles: &'a dyn RoleLookup,
}

impl<'a> TargetResolver<'a> {
    pub fn new(
        world: &'a dyn WorldView,
        caster: &'a dyn Actor,
        controller: ActorId,
        enemy: Option<ActorId>,
        roles: &'a dyn RoleLookup,
    ) -> Self {
        Self {
            world,
            caster,
            controller,
            enemy,
            roles,
        }
    }

    pub fn resolve(&self, kind: TargetKind) -> Option<&'a dyn Actor> {
        match kind {
            TargetKind::Caster => Some(self.caster),
            TargetKind::Enemy => self.enemy(),
            TargetKind::AllyLowestHealth => self.lowest_health_ally(),
            TargetKind::AllyTank => self.tank(),
            TargetKind::Pet => self
                .caster
                .pet()
                .and_then(|pet| self.world.actor(pet))
                .or(Some(self.caster)),
        }
    }

    /// The current enemy as-is; validity is the eligibility check's job.
    pub fn enemy(&self) -> Option<&'a dyn Actor> {
        self.enemy.and_then(|id| self.world.actor(id))
    }

    /// Living group member in the caster's zone with the lowest health%.
    ///
    /// The first member found wins ties. `None` when the caster has no group.
    pub fn lowest_health_ally(&self) -> Option<&'a dyn Actor> {
        let zone = self.caster.zone();
        let mut lowest: Option<&'a dyn Actor> = None;
        for id in self.world.group_members(self.caster.id()) {
            let Some(member) = self.world.actor(id) else {
                continue;
            };
            if !member.is_valid_target() || member.zone() != zone {
                continue;
            }
            if lowest.is_none_or(|current| member.health_percent() < current.health_percent()) {
                lowest = Some(member);
            }
        }
        lowest
    }

    /// First living group member whose bot role is Tank, else the controller.
    pub fn tank(&self) -> Option<&'a dyn Actor> {
        self.world
            .group_members(self.caster.id())
            .into_iter()
            .filter(|id| self.roles.role_of(*id) == Some(Role::Tank))
            .filter_map(|id| self.world.actor(id))
            .find(|member| member.is_valid_target())
            .or_else(|| self.world.actor(self.controller))
    }
}
