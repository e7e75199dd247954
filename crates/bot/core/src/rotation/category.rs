/// Purpose bucket of a rule. Declaration order is evaluation order.
///
/// Data files may use the legacy bucket names as aliases: `buff` and `buffs`
/// for Maintenance, `rotation` and `abilities` for Core, `utility` for
/// Mobility.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RuleCategory {
    /// Engine-provided on-use effects (trinkets, racials). Never scripted.
    Meta = 0,
    /// Keep buffs rolling.
    #[strum(to_string = "maintenance", serialize = "buff", serialize = "buffs")]
    Maintenance = 1,
    /// Emergency self-preservation.
    #[strum(to_string = "defensive", serialize = "defensives")]
    Defensive = 2,
    /// Damage over time on the enemy.
    #[strum(to_string = "dot", serialize = "dots")]
    Dot = 3,
    /// Healing over time on the lowest ally.
    #[strum(to_string = "hot", serialize = "hots")]
    Hot = 4,
    /// The damage or healing rotation proper.
    #[strum(to_string = "core", serialize = "rotation", serialize = "abilities")]
    Core = 5,
    /// Gap closers and utility.
    #[strum(to_string = "mobility", serialize = "utility")]
    Mobility = 6,
}

impl RuleCategory {
    pub const COUNT: usize = 7;

    /// Every category in evaluation order.
    pub const ALL: [RuleCategory; Self::COUNT] = [
        RuleCategory::Meta,
        RuleCategory::Maintenance,
        RuleCategory::Defensive,
        RuleCategory::Dot,
        RuleCategory::Hot,
        RuleCategory::Core,
        RuleCategory::Mobility,
    ];

    /// Position in the evaluation order (0 runs first).
    #[inline]
    pub const fn order(self) -> usize {
        self as usize
    }

    /// Whether rotation data may contain rules for this category.
    pub const fn is_scripted(self) -> bool {
        !matches!(self, RuleCategory::Meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn all_is_in_priority_order() {
        for (index, category) in RuleCategory::ALL.iter().enumerate() {
            assert_eq!(category.order(), index);
        }
    }

    #[test]
    fn legacy_bucket_names_are_accepted() {
        assert_eq!(RuleCategory::from_str("rotation").unwrap(), RuleCategory::Core);
        assert_eq!(RuleCategory::from_str("utility").unwrap(), RuleCategory::Mobility);
        assert_eq!(RuleCategory::from_str("buffs").unwrap(), RuleCategory::Maintenance);
        assert_eq!(RuleCategory::from_str("DOT").unwrap(), RuleCategory::Dot);
        assert!(RuleCategory::from_str("burst").is_err());
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(RuleCategory::Core.to_string(), "core");
        assert_eq!(RuleCategory::Maintenance.to_string(), "maintenance");
    }
}
