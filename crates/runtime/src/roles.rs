//! Spec and role detection for characters entering bot control.

use bot_core::{Actor, ClassId, Role, RotationTable, SpecKey};

/// Classes whose whole kit is cast from range.
const RANGED_CLASSES: [ClassId; 3] = [ClassId(5), ClassId(8), ClassId(9)];

/// Talent tree the actor invested most in.
pub fn detect_spec_index(actor: &dyn Actor) -> u8 {
    actor.primary_talent_index()
}

pub fn detect_spec(actor: &dyn Actor) -> SpecKey {
    SpecKey {
        class: actor.class_id(),
        spec_index: detect_spec_index(actor),
    }
}

/// Role of `actor`: the rotation's declared role, then the engine's talent
/// hint, then a guess from the class.
pub fn detect_role(actor: &dyn Actor, table: &RotationTable) -> Role {
    if let Some(rotation) = table.get(detect_spec(actor)) {
        return rotation.role;
    }
    actor
        .spec_hint()
        .unwrap_or_else(|| class_fallback(actor.class_id()))
}

fn class_fallback(class: ClassId) -> Role {
    if RANGED_CLASSES.contains(&class) {
        Role::RangedDps
    } else {
        Role::MeleeDps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bot_core::mock::MockActor;
    use bot_core::{ActorId, SpecRotation};

    fn table() -> RotationTable {
        let mut builder = RotationTable::builder();
        builder
            .insert_spec(SpecRotation::new(SpecKey::new(2, 1), "Protection", Role::Tank))
            .unwrap();
        builder.build()
    }

    #[test]
    fn rotation_role_wins() {
        let paladin = MockActor::new(ActorId(1), "Tank")
            .with_class(2)
            .with_talent_index(1)
            .with_spec_hint(Role::Healer);
        assert_eq!(detect_role(&paladin, &table()), Role::Tank);
    }

    #[test]
    fn hint_then_class_fallback() {
        let hinted = MockActor::new(ActorId(1), "Holy")
            .with_class(2)
            .with_spec_hint(Role::Healer);
        assert_eq!(detect_role(&hinted, &table()), Role::Healer);

        let mage = MockActor::new(ActorId(2), "Mage").with_class(8);
        assert_eq!(detect_role(&mage, &table()), Role::RangedDps);

        let rogue = MockActor::new(ActorId(3), "Rogue").with_class(4);
        assert_eq!(detect_role(&rogue, &table()), Role::MeleeDps);
    }

    #[test]
    fn spec_follows_primary_tree() {
        let warlock = MockActor::new(ActorId(1), "Lock")
            .with_class(9)
            .with_talent_index(2);
        assert_eq!(detect_spec(&warlock), SpecKey::new(9, 2));
    }
}
