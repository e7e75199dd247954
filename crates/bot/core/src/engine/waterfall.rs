use crate::eligibility::can_use;
use crate::engine::{BotTurn, Decision};
use crate::env::{Actor, MetaEffect, MetaSource, WorldView};
use crate::rotation::{Rule, RuleCategory, TargetKind, evaluate};
use crate::targeting::TargetResolver;
use crate::types::Role;

/// Walks the turn's categories in priority order and returns the first
/// eligible action. Pure: nothing is executed.
pub fn scan(world: &dyn WorldView, turn: &BotTurn<'_>) -> Option<Decision> {
    let caster = world.actor(turn.caster)?;
    let pass = Pass {
        world,
        turn,
        caster,
        resolver: TargetResolver::new(world, caster, turn.controller, turn.enemy, turn.roles),
    };

    turn.mode
        .categories()
        .iter()
        .find_map(|category| pass.category(*category))
}

struct Pass<'w, 't> {
    world: &'w dyn WorldView,
    turn: &'t BotTurn<'t>,
    caster: &'w dyn Actor,
    resolver: TargetResolver<'w>,
}

impl<'w> Pass<'w, '_> {
    fn category(&self, category: RuleCategory) -> Option<Decision> {
        let rules = self.turn.rotation.rules(category);
        match category {
            RuleCategory::Meta => self.meta(),
            RuleCategory::Maintenance => rules.iter().find_map(|rule| {
                let target = self.resolver.resolve(rule.target);
                if target.is_some_and(|target| target.has_aura(rule.action.aura())) {
                    return None;
                }
                self.try_rule(rule, target)
            }),
            RuleCategory::Defensive => {
                if self.caster.health_percent() >= self.turn.config.defensive_health_pct {
                    return None;
                }
                rules
                    .iter()
                    .find_map(|rule| self.try_rule(rule, self.resolver.resolve(rule.target)))
            }
            RuleCategory::Dot => rules.iter().find_map(|rule| {
                let target = self.resolver.resolve(rule.target);
                if rule.target == TargetKind::Enemy
                    && target.is_some_and(|enemy| enemy.has_aura(rule.action.aura()))
                {
                    return None;
                }
                self.try_rule(rule, target)
            }),
            RuleCategory::Hot => {
                if rules.is_empty() {
                    return None;
                }
                let ally = self.resolver.lowest_health_ally()?;
                rules.iter().find_map(|rule| {
                    if ally.has_aura(rule.action.aura()) {
                        return None;
                    }
                    self.try_rule(rule, Some(ally))
                })
            }
            RuleCategory::Core => self.core(rules),
            RuleCategory::Mobility => {
                if rules.is_empty() {
                    return None;
                }
                let enemy = self.resolver.enemy()?;
                let distance = self.caster.position().planar_distance(&enemy.position());
                let reach = self.turn.rotation.preferred_range + self.turn.config.mobility_slack;
                if distance <= reach {
                    return None;
                }
                rules
                    .iter()
                    .find_map(|rule| self.try_rule(rule, self.resolver.resolve(rule.target)))
            }
        }
    }

    /// Engine-provided trinkets and racials.
    fn meta(&self) -> Option<Decision> {
        self.world
            .meta_actions(self.caster.id())
            .into_iter()
            .find_map(|meta| {
                if meta.effect == MetaEffect::BreaksIncapacitation
                    || self.caster.action_on_cooldown(meta.action)
                    || (meta.source == MetaSource::Racial && !self.caster.knows_action(meta.action))
                {
                    return None;
                }
                // Harmful effects need a live enemy; without one they are skipped.
                let target = match meta.effect {
                    MetaEffect::Harmful => self
                        .resolver
                        .enemy()
                        .filter(|enemy| enemy.is_valid_target())?,
                    _ => self.caster,
                };
                Some(Decision {
                    action: meta.action,
                    target: target.id(),
                    category: RuleCategory::Meta,
                })
            })
    }

    /// Healers heal the lowest ally, everyone else hits the enemy. Rules aimed
    /// at the caster or its pet keep their own target.
    fn core(&self, rules: &[Rule]) -> Option<Decision> {
        if rules.is_empty() {
            return None;
        }
        let primary = if self.turn.role == Role::Healer {
            let ally = self.resolver.lowest_health_ally()?;
            if ally.health_percent() >= self.turn.config.heal_threshold_pct {
                return None;
            }
            ally
        } else {
            self.resolver.enemy()?
        };

        rules.iter().find_map(|rule| {
            let target = match rule.target {
                TargetKind::Caster | TargetKind::Pet => self.resolver.resolve(rule.target),
                _ => Some(primary),
            };
            self.try_rule(rule, target)
        })
    }

    fn try_rule(&self, rule: &Rule, target: Option<&'w dyn Actor>) -> Option<Decision> {
        if !evaluate(rule.condition, rule.condition_value, self.caster, target) {
            return None;
        }
        if !can_use(
            self.caster,
            target,
            rule.action,
            self.turn.role,
            self.turn.requirements,
        ) {
            return None;
        }
        target.map(|target| Decision {
            action: rule.action,
            target: target.id(),
            category: rule.category,
        })
    }
}
