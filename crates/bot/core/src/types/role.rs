/// Combat role of a bot.
///
/// Role drives how the Core category picks its target (healers heal, everyone
/// else hits the enemy), the default combat standoff and the formation row.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    /// Holds threat, stands in front.
    Tank,
    /// Keeps the group alive.
    Healer,
    /// Sticks to the enemy in melee range.
    #[default]
    MeleeDps,
    /// Keeps its distance and casts.
    RangedDps,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Tank, Role::Healer, Role::MeleeDps, Role::RangedDps];

    /// Human-readable label for chat replies and inspection output.
    pub const fn label(self) -> &'static str {
        match self {
            Role::Tank => "Tank",
            Role::Healer => "Healer",
            Role::MeleeDps => "Melee DPS",
            Role::RangedDps => "Ranged DPS",
        }
    }

    /// Melee roles close to contact range when engaging.
    pub const fn is_melee(self) -> bool {
        matches!(self, Role::Tank | Role::MeleeDps)
    }
}

/// Power type an actor spends on actions.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResourceKind {
    #[default]
    Mana,
    Rage,
    Energy,
    RunicPower,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_parses_snake_case_and_ignores_case() {
        assert_eq!(Role::from_str("ranged_dps").unwrap(), Role::RangedDps);
        assert_eq!(Role::from_str("Healer").unwrap(), Role::Healer);
        assert!(Role::from_str("bard").is_err());
    }

    #[test]
    fn melee_roles() {
        assert!(Role::Tank.is_melee());
        assert!(Role::MeleeDps.is_melee());
        assert!(!Role::Healer.is_melee());
        assert!(!Role::RangedDps.is_melee());
    }
}
