/// Who a rule's action is aimed at.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum TargetKind {
    /// The acting bot itself (`self` in data files).
    #[strum(to_string = "self", serialize = "caster")]
    Caster,
    /// The bot's current enemy.
    Enemy,
    /// Living group member in the same zone with the lowest health%.
    #[strum(to_string = "ally_lowest_health", serialize = "friendly_lowest_hp")]
    AllyLowestHealth,
    /// Group member whose bot role is Tank, else the controller.
    #[strum(to_string = "ally_tank", serialize = "friendly_tank")]
    AllyTank,
    /// The bot's pet, else the bot itself.
    Pet,
}
