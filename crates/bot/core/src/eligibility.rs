//! Side-effect free "can this action be used right now" check.

use crate::env::Actor;
use crate::rotation::RequirementTable;
use crate::types::{ActionId, Role};

/// True when `caster` may use `action` on `target` this instant.
///
/// Fails when the action is unknown or cooling down, when the target is
/// missing, dead or out of the world, or when the action's entry in
/// `requirements` is not met.
pub fn can_use(
    caster: &dyn Actor,
    target: Option<&dyn Actor>,
    action: ActionId,
    role: Role,
    requirements: &RequirementTable,
) -> bool {
    if !caster.knows_action(action) || caster.action_on_cooldown(action) {
        return false;
    }
    if !target.is_some_and(|target| target.is_valid_target()) {
        return false;
    }
    requirements.allows(action, caster, role)
}
