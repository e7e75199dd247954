/// Tunable parameters for the bot subsystem.
///
/// Every field has a default matching the shipped behavior, so a partial
/// configuration file only needs to mention what it overrides.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BotConfig {
    /// Milliseconds between two bot evaluations.
    pub tick_interval_ms: u32,
    /// Maximum number of bots one controller may own at once.
    pub max_bots_per_controller: usize,
    /// Whether controllers may hand their own character to the waterfall.
    pub selfbot_enabled: bool,
    pub combat: CombatConfig,
    pub movement: MovementConfig,
}

impl BotConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TICK_INTERVAL_MS: u32 = 1000;
    pub const DEFAULT_MAX_BOTS_PER_CONTROLLER: usize = 4;

    pub fn new() -> Self {
        Self {
            tick_interval_ms: Self::DEFAULT_TICK_INTERVAL_MS,
            max_bots_per_controller: Self::DEFAULT_MAX_BOTS_PER_CONTROLLER,
            selfbot_enabled: true,
            combat: CombatConfig::default(),
            movement: MovementConfig::default(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Thresholds consulted by the waterfall's category policies.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Defensive category only runs while health% is strictly below this.
    pub defensive_health_pct: f32,
    /// Healers skip their Core category while the lowest ally is at or above this.
    pub heal_threshold_pct: f32,
    /// Mobility category runs once the enemy is farther than preferred range plus this.
    pub mobility_slack: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            defensive_health_pct: 35.0,
            heal_threshold_pct: 90.0,
            mobility_slack: 5.0,
        }
    }
}

/// Distances used by the follow / formation / pursuit policy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementConfig {
    /// Distance between the controller and the front formation row.
    pub follow_distance: f32,
    /// Beyond this planar distance a bot is relocated instead of pathing.
    pub max_follow_distance: f32,
    /// Pursuit standoff for melee roles without a preferred range.
    pub melee_chase_distance: f32,
    /// Pursuit standoff for ranged roles without a preferred range.
    pub ranged_chase_distance: f32,
    /// Pursuit standoff for a melee controller in autoplay mode.
    pub selfbot_melee_chase_distance: f32,
    /// Depth between two formation rows.
    pub row_spacing: f32,
    /// Side-by-side spacing inside a row.
    pub lateral_spacing: f32,
    /// A slot is recomputed only when it drifted farther than this.
    pub slot_tolerance: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            follow_distance: 4.0,
            max_follow_distance: 40.0,
            melee_chase_distance: 5.0,
            ranged_chase_distance: 25.0,
            selfbot_melee_chase_distance: 0.5,
            row_spacing: 2.5,
            lateral_spacing: 2.0,
            slot_tolerance: 1.5,
        }
    }
}
