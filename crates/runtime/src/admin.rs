//! Administrative surface: inspection, listing and role overrides.
//!
//! Replies are plain text meant to be relayed to whoever asked.

use std::str::FromStr;

use bot_core::{ActorId, ConditionKind, Role, RotationTable, RuleCategory, SpecKey};
use tracing::info;

use crate::error::AdminError;
use crate::registry::BotRegistry;

/// Human-readable dump of one spec's rotation, grouped by category.
pub fn describe_rotation(table: &RotationTable, key: SpecKey) -> Result<String, AdminError> {
    let rotation = table.get(key).ok_or(AdminError::RotationNotFound(key))?;

    let mut lines = vec![
        format!("{} ({key})", rotation.display_name),
        format!(
            "role: {}, preferred range: {}",
            rotation.role.label(),
            rotation.preferred_range
        ),
    ];
    if !rotation.description.is_empty() {
        lines.push(rotation.description.clone());
    }

    for category in RuleCategory::ALL {
        let rules = rotation.rules(category);
        if rules.is_empty() {
            continue;
        }
        lines.push(format!("[{category}]"));
        for rule in rules {
            let mut line = format!(
                "  {:>3}  {} ({}) -> {}",
                rule.priority,
                rule.label(),
                rule.action,
                rule.target
            );
            if rule.condition != ConditionKind::None {
                line.push_str(&format!(" if {} {}", rule.condition, rule.condition_value));
            }
            lines.push(line);
        }
    }
    Ok(lines.join("\n"))
}

/// One line per bot of `controller`: name, role, spec and state.
pub fn list_bots(registry: &BotRegistry, controller: ActorId) -> Vec<String> {
    registry
        .bots_of(controller)
        .iter()
        .map(|record| {
            let state = if record.in_combat {
                "in combat"
            } else if record.following {
                "following"
            } else {
                "idle"
            };
            format!(
                "{} - {} ({}) - {}",
                record.name,
                record.role.label(),
                record.spec_key(),
                state
            )
        })
        .collect()
}

/// Overrides the role of the bot called `name`.
pub fn set_role(
    registry: &mut BotRegistry,
    controller: ActorId,
    name: &str,
    role: &str,
) -> Result<Role, AdminError> {
    let role = Role::from_str(role.trim()).map_err(|_| AdminError::UnknownRole(role.to_string()))?;
    let actor = registry
        .find_by_name(controller, name)
        .map(|record| record.actor)
        .ok_or_else(|| AdminError::BotNotFound {
            controller,
            name: name.to_string(),
        })?;
    if let Some(record) = registry.find_mut(controller, actor) {
        record.role = role;
        // Queued decisions were planned for the old role.
        record.queue.clear();
    }
    info!(%controller, bot = %actor, %role, "bot role changed");
    Ok(role)
}
