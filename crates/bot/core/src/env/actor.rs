use crate::types::{ActionId, ActorId, AuraId, ClassId, ItemId, Position, ResourceKind, Role, ZoneId};

/// Read-only view of one character as the host engine currently sees it.
///
/// Percentages are in the 0–100 range. Implementations must answer every
/// query without side effects; the waterfall calls them speculatively, both
/// when planning and when filling the cast queue.
pub trait Actor {
    fn id(&self) -> ActorId;

    /// Character name, used for lookup by name and log lines.
    fn name(&self) -> &str;

    fn class_id(&self) -> ClassId;

    fn health_percent(&self) -> f32;

    fn resource_percent(&self, kind: ResourceKind) -> f32;

    /// Power type this actor's rotation spends (mana for casters, rage for warriors...).
    fn primary_resource(&self) -> ResourceKind {
        ResourceKind::Mana
    }

    fn has_aura(&self, aura: AuraId) -> bool;

    fn position(&self) -> Position;

    /// Orientation in radians, used to lay formations out behind a controller.
    fn facing(&self) -> f32 {
        0.0
    }

    fn zone(&self) -> ZoneId;

    fn is_alive(&self) -> bool;

    fn is_in_world(&self) -> bool;

    /// Player characters are never picked as automatic enemies.
    fn is_player(&self) -> bool;

    fn is_in_combat(&self) -> bool;

    fn knows_action(&self, action: ActionId) -> bool;

    fn action_on_cooldown(&self, action: ActionId) -> bool;

    /// True while casting or channeling; the waterfall never interrupts it.
    fn is_currently_acting(&self) -> bool;

    /// Current victim, falling back to the selected unit.
    fn current_enemy(&self) -> Option<ActorId>;

    /// Something actively attacking this actor, if any.
    fn attacker(&self) -> Option<ActorId> {
        None
    }

    fn pet(&self) -> Option<ActorId> {
        None
    }

    /// Identifier of the active talent tree, if the engine tracks one.
    fn talent_tree(&self) -> Option<u32> {
        None
    }

    /// Index of the talent tree with the most points (0, 1 or 2).
    fn primary_talent_index(&self) -> u8 {
        0
    }

    /// Role suggested by the actor's talents, when the engine can tell.
    fn spec_hint(&self) -> Option<Role> {
        None
    }

    fn item_count(&self, _item: ItemId) -> u32 {
        0
    }

    /// Alive and placed in the world: the minimum for being a target.
    fn is_valid_target(&self) -> bool {
        self.is_alive() && self.is_in_world()
    }
}
