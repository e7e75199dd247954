use std::collections::HashMap;

use crate::env::Actor;
use crate::types::{ActionId, ItemId, Role};

/// Consumable an action spends, e.g. a reagent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRequirement {
    pub item: ItemId,
    pub min_count: u32,
}

/// Per-action prerequisite beyond "known and off cooldown".
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionRequirement {
    pub action: ActionId,
    /// Talent tree the actor must have active.
    pub talent_tree: Option<u32>,
    pub item: Option<ItemRequirement>,
    /// Minimum primary resource percentage (inclusive).
    pub min_resource_pct: Option<f32>,
    /// Roles allowed to use the action; empty allows all.
    pub roles: Vec<Role>,
}

impl ActionRequirement {
    pub fn new(action: ActionId) -> Self {
        Self {
            action,
            talent_tree: None,
            item: None,
            min_resource_pct: None,
            roles: Vec::new(),
        }
    }

    pub fn is_met(&self, actor: &dyn Actor, role: Role) -> bool {
        let tree_ok = self
            .talent_tree
            .is_none_or(|tree| actor.talent_tree() == Some(tree));
        let item_ok = self
            .item
            .is_none_or(|req| actor.item_count(req.item) >= req.min_count);
        let resource_ok = self
            .min_resource_pct
            .is_none_or(|min| actor.resource_percent(actor.primary_resource()) >= min);

        tree_ok && item_ok && resource_ok && (self.roles.is_empty() || self.roles.contains(&role))
    }
}

/// Requirements indexed by action id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequirementTable {
    entries: HashMap<ActionId, ActionRequirement>,
}

impl RequirementTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the requirement of `requirement.action`.
    pub fn insert(&mut self, requirement: ActionRequirement) -> Option<ActionRequirement> {
        self.entries.insert(requirement.action, requirement)
    }

    pub fn get(&self, action: ActionId) -> Option<&ActionRequirement> {
        self.entries.get(&action)
    }

    /// True when `action` has no requirement or its requirement is met.
    pub fn allows(&self, action: ActionId, actor: &dyn Actor, role: Role) -> bool {
        self.get(action).is_none_or(|req| req.is_met(actor, role))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockActor;
    use crate::types::ActorId;

    #[test]
    fn talent_and_reagent_requirements() {
        let mut req = ActionRequirement::new(ActionId(47827));
        req.talent_tree = Some(301);
        req.item = Some(ItemRequirement {
            item: ItemId(6265),
            min_count: 1,
        });

        let bare = MockActor::new(ActorId(1), "Bot");
        assert!(!req.is_met(&bare, Role::RangedDps));

        let specced = MockActor::new(ActorId(1), "Bot").with_talent_tree(301);
        assert!(!req.is_met(&specced, Role::RangedDps));

        let ready = specced.with_item(ItemId(6265), 3);
        assert!(req.is_met(&ready, Role::RangedDps));
    }

    #[test]
    fn minimum_resource_is_inclusive() {
        let mut req = ActionRequirement::new(ActionId(47241));
        req.min_resource_pct = Some(80.0);
        assert!(req.is_met(&MockActor::new(ActorId(1), "Bot").with_mana(80.0), Role::MeleeDps));
        assert!(!req.is_met(&MockActor::new(ActorId(1), "Bot").with_mana(79.9), Role::MeleeDps));
    }

    #[test]
    fn role_restriction() {
        let mut table = RequirementTable::new();
        let mut req = ActionRequirement::new(ActionId(25780));
        req.roles = vec![Role::Tank];
        table.insert(req);

        let bot = MockActor::new(ActorId(1), "Bot");
        assert!(table.allows(ActionId(25780), &bot, Role::Tank));
        assert!(!table.allows(ActionId(25780), &bot, Role::Healer));
        assert!(table.allows(ActionId(1), &bot, Role::Healer));
    }
}
