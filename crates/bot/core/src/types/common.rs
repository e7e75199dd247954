use std::fmt;

/// Identifier of any character known to the host engine (bot, controller, enemy).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of an ability or spell an actor can attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionId(pub u32);

impl ActionId {
    /// Aura applied by this action.
    ///
    /// Buffs, DoTs and HoTs leave an aura that shares the action's identifier,
    /// which is what the "already active" checks look for.
    #[inline]
    pub const fn aura(self) -> AuraId {
        AuraId(self.0)
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an aura (buff or debuff) present on an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuraId(pub u32);

/// Identifier of an inventory item (used for consumable prerequisites).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

/// Character class identifier as used by the host engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassId(pub u8);

/// Map / zone identifier. Actors in different zones never target each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneId(pub u32);

/// Lookup key of a rotation: one class plus one talent specialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpecKey {
    pub class: ClassId,
    pub spec_index: u8,
}

impl SpecKey {
    pub const fn new(class: u8, spec_index: u8) -> Self {
        Self {
            class: ClassId(class),
            spec_index,
        }
    }
}

impl fmt::Display for SpecKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {} spec {}", self.class.0, self.spec_index)
    }
}

/// World-space position. Ranges are measured on the ground plane only.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Planar (x/y) distance, ignoring height.
    pub fn planar_distance(&self, other: &Position) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point `behind` units opposite to `facing` and `lateral` units to its left.
    ///
    /// `facing` is in radians, measured from the +x axis.
    pub fn offset(&self, facing: f32, behind: f32, lateral: f32) -> Position {
        let (sin, cos) = facing.sin_cos();
        Position {
            x: self.x - cos * behind - sin * lateral,
            y: self.y - sin * behind + cos * lateral,
            z: self.z,
        }
    }
}
