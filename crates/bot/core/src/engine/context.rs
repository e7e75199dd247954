use crate::config::CombatConfig;
use crate::rotation::{RequirementTable, RuleCategory, SpecRotation};
use crate::targeting::RoleLookup;
use crate::types::{ActionId, ActorId, Role};

/// Which categories a scan may fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScanMode {
    /// Every category in priority order.
    #[default]
    Combat,
    /// Maintenance only: keep buffs up between fights.
    OutOfCombat,
}

impl ScanMode {
    pub fn categories(self) -> &'static [RuleCategory] {
        match self {
            ScanMode::Combat => &RuleCategory::ALL,
            ScanMode::OutOfCombat => &[RuleCategory::Maintenance],
        }
    }
}

/// Everything one bot's evaluation needs, borrowed for the duration of a tick.
#[derive(Clone, Copy)]
pub struct BotTurn<'a> {
    pub caster: ActorId,
    /// Owner of the bot; the tank fallback.
    pub controller: ActorId,
    pub enemy: Option<ActorId>,
    pub rotation: &'a SpecRotation,
    pub role: Role,
    pub requirements: &'a RequirementTable,
    pub roles: &'a dyn RoleLookup,
    pub config: &'a CombatConfig,
    pub mode: ScanMode,
}

/// An action chosen for execution together with its resolved target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub action: ActionId,
    pub target: ActorId,
    pub category: RuleCategory,
}
