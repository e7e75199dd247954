//! Bot subsystem configuration loader.

use std::env;
use std::path::Path;

use bot_core::BotConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`BotConfig`] from TOML files and the environment.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> LoadResult<BotConfig> {
        let content = read_file(path)?;
        Self::parse_toml(&content)
    }

    pub fn parse_toml(content: &str) -> LoadResult<BotConfig> {
        let config: BotConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }

    /// Load from `path` and apply process environment overrides.
    pub fn load_with_env(path: &Path) -> LoadResult<BotConfig> {
        Ok(Self::apply_env(Self::load(path)?))
    }

    /// Apply overrides from process environment variables.
    ///
    /// Environment variables:
    /// - `BOT_MAX_PER_CONTROLLER` - Bots one controller may own (min 1)
    /// - `BOT_TICK_INTERVAL_MS` - Milliseconds between evaluations (min 1)
    /// - `BOT_SELFBOT_ENABLED` - Allow controllers to autoplay themselves
    pub fn apply_env(config: BotConfig) -> BotConfig {
        Self::apply_overrides(config, |key| env::var(key).ok())
    }

    /// Same as [`ConfigLoader::apply_env`] with an explicit variable source.
    pub fn apply_overrides(
        mut config: BotConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> BotConfig {
        if let Some(max) = read_var::<usize>(&lookup, "BOT_MAX_PER_CONTROLLER") {
            config.max_bots_per_controller = max.max(1);
        }
        if let Some(interval) = read_var::<u32>(&lookup, "BOT_TICK_INTERVAL_MS") {
            config.tick_interval_ms = interval.max(1);
        }
        if let Some(enabled) = read_bool(&lookup, "BOT_SELFBOT_ENABLED") {
            config.selfbot_enabled = enabled;
        }
        config
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn read_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<bool> {
    match lookup(key)?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = ConfigLoader::parse_toml(
            r#"
            max_bots_per_controller = 2

            [combat]
            heal_threshold_pct = 80.0
            "#,
        )
        .unwrap();
        assert_eq!(config.max_bots_per_controller, 2);
        assert_eq!(config.combat.heal_threshold_pct, 80.0);
        assert_eq!(config.combat.defensive_health_pct, 35.0);
        assert_eq!(config.tick_interval_ms, BotConfig::DEFAULT_TICK_INTERVAL_MS);
    }

    #[test]
    fn environment_overrides() {
        let vars = HashMap::from([
            ("BOT_MAX_PER_CONTROLLER", "0"),
            ("BOT_TICK_INTERVAL_MS", "250"),
            ("BOT_SELFBOT_ENABLED", "off"),
        ]);
        let config = ConfigLoader::apply_overrides(BotConfig::default(), |key| {
            vars.get(key).map(|value| value.to_string())
        });
        assert_eq!(config.max_bots_per_controller, 1);
        assert_eq!(config.tick_interval_ms, 250);
        assert!(!config.selfbot_enabled);
    }

    #[test]
    fn unparsable_override_is_ignored() {
        let config = ConfigLoader::apply_overrides(BotConfig::default(), |key| {
            (key == "BOT_TICK_INTERVAL_MS").then(|| "soon".to_string())
        });
        assert_eq!(config.tick_interval_ms, 1000);
    }
}
