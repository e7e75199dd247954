use crate::env::Actor;
use crate::types::AuraId;

/// Planar distance under which two actors are considered in melee contact.
pub const MELEE_RANGE: f32 = 5.0;

/// Gate a rule must pass before its action is considered.
///
/// Every kind is paired with the rule's signed `condition_value`: a percentage
/// for the health/resource kinds, an aura id for the aura kinds, ignored by
/// the rest.
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
pub enum ConditionKind {
    /// Always passes.
    #[default]
    None,
    HealthBelow,
    HealthAbove,
    #[strum(to_string = "resource_below", serialize = "mana_below")]
    ResourceBelow,
    #[strum(to_string = "resource_above", serialize = "mana_above")]
    ResourceAbove,
    TargetHealthBelow,
    TargetHealthAbove,
    #[strum(to_string = "self_has_aura", serialize = "has_aura")]
    SelfHasAura,
    #[strum(to_string = "self_missing_aura", serialize = "missing_aura")]
    SelfMissingAura,
    TargetHasAura,
    TargetMissingAura,
    InMeleeRange,
    NotInMeleeRange,
}

impl ConditionKind {
    /// Whether the condition reads the resolved target rather than the actor.
    pub const fn needs_target(self) -> bool {
        matches!(
            self,
            ConditionKind::TargetHealthBelow
                | ConditionKind::TargetHealthAbove
                | ConditionKind::TargetHasAura
                | ConditionKind::TargetMissingAura
                | ConditionKind::InMeleeRange
                | ConditionKind::NotInMeleeRange
        )
    }
}

/// Evaluates one condition against live state.
///
/// Comparisons are strict. A condition that needs a target fails when there
/// is none, and an aura condition fails when `value` is not a valid aura id.
pub fn evaluate(
    kind: ConditionKind,
    value: i32,
    actor: &dyn Actor,
    target: Option<&dyn Actor>,
) -> bool {
    let threshold = value as f32;
    match kind {
        ConditionKind::None => true,
        ConditionKind::HealthBelow => actor.health_percent() < threshold,
        ConditionKind::HealthAbove => actor.health_percent() > threshold,
        ConditionKind::ResourceBelow => {
            actor.resource_percent(actor.primary_resource()) < threshold
        }
        ConditionKind::ResourceAbove => {
            actor.resource_percent(actor.primary_resource()) > threshold
        }
        ConditionKind::SelfHasAura => aura(value).is_some_and(|aura| actor.has_aura(aura)),
        ConditionKind::SelfMissingAura => aura(value).is_some_and(|aura| !actor.has_aura(aura)),
        ConditionKind::TargetHealthBelow => {
            target.is_some_and(|target| target.health_percent() < threshold)
        }
        ConditionKind::TargetHealthAbove => {
            target.is_some_and(|target| target.health_percent() > threshold)
        }
        ConditionKind::TargetHasAura => match (target, aura(value)) {
            (Some(target), Some(aura)) => target.has_aura(aura),
            _ => false,
        },
        ConditionKind::TargetMissingAura => match (target, aura(value)) {
            (Some(target), Some(aura)) => !target.has_aura(aura),
            _ => false,
        },
        ConditionKind::InMeleeRange => target.is_some_and(|target| {
            actor.position().planar_distance(&target.position()) <= MELEE_RANGE
        }),
        ConditionKind::NotInMeleeRange => target.is_some_and(|target| {
            actor.position().planar_distance(&target.position()) > MELEE_RANGE
        }),
    }
}

fn aura(value: i32) -> Option<AuraId> {
    u32::try_from(value).ok().map(AuraId)
}
