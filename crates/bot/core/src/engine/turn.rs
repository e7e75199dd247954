use tracing::debug;

use crate::eligibility::can_use;
use crate::engine::{BotTurn, CastQueue, Decision, scan};
use crate::env::{Actor, ExecuteError, World, WorldView};
use crate::rotation::RuleCategory;

/// What a bot should do this tick, before anything is executed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnPlan {
    /// Still casting. Carries the decision newly queued for later, if any.
    Busy(Option<Decision>),
    Execute { decision: Decision, from_queue: bool },
    Idle,
    /// The caster is gone or dead.
    Unavailable,
}

/// Result of one bot's turn.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnOutcome {
    Acted(Decision),
    ActedFromQueue(Decision),
    /// Busy casting; the decision was queued for when it finishes.
    Queued(Decision),
    Busy,
    /// The engine refused the action. Not retried this tick.
    Rejected(Decision, ExecuteError),
    Idle,
    Unavailable,
}

impl TurnOutcome {
    /// Whether an `execute` command was issued.
    pub fn attempted(&self) -> bool {
        matches!(
            self,
            TurnOutcome::Acted(_) | TurnOutcome::ActedFromQueue(_) | TurnOutcome::Rejected(..)
        )
    }
}

/// Decides the bot's turn without executing anything.
///
/// A busy caster only fills an empty queue. A free caster first retries the
/// queued decision, discarding it when its target or action is no longer
/// usable, then falls back to a fresh scan.
pub fn plan_turn(world: &dyn WorldView, turn: &BotTurn<'_>, queue: &mut CastQueue) -> TurnPlan {
    let Some(caster) = world.actor(turn.caster) else {
        return TurnPlan::Unavailable;
    };
    if !caster.is_valid_target() {
        return TurnPlan::Unavailable;
    }

    if caster.is_currently_acting() {
        if !queue.is_empty() {
            return TurnPlan::Busy(None);
        }
        let next = scan(world, turn).filter(|decision| queue.offer(*decision));
        return TurnPlan::Busy(next);
    }

    if let Some(queued) = queue.take() {
        if still_usable(world, caster, turn, &queued) {
            return TurnPlan::Execute {
                decision: queued,
                from_queue: true,
            };
        }
        debug!(
            caster = %turn.caster,
            action = %queued.action,
            target = %queued.target,
            "discarding stale queued action"
        );
    }

    match scan(world, turn) {
        Some(decision) => TurnPlan::Execute {
            decision,
            from_queue: false,
        },
        None => TurnPlan::Idle,
    }
}

/// Plans the turn and performs at most one `execute`.
pub fn run_turn<W: World>(world: &mut W, turn: &BotTurn<'_>, queue: &mut CastQueue) -> TurnOutcome {
    let (decision, from_queue) = match plan_turn(&*world, turn, queue) {
        TurnPlan::Busy(Some(queued)) => return TurnOutcome::Queued(queued),
        TurnPlan::Busy(None) => return TurnOutcome::Busy,
        TurnPlan::Idle => return TurnOutcome::Idle,
        TurnPlan::Unavailable => return TurnOutcome::Unavailable,
        TurnPlan::Execute {
            decision,
            from_queue,
        } => (decision, from_queue),
    };

    match world.execute(turn.caster, decision.target, decision.action) {
        Ok(()) => {
            debug!(
                caster = %turn.caster,
                action = %decision.action,
                target = %decision.target,
                category = %decision.category,
                from_queue,
                "bot acted"
            );
            if from_queue {
                TurnOutcome::ActedFromQueue(decision)
            } else {
                TurnOutcome::Acted(decision)
            }
        }
        Err(error) => {
            debug!(caster = %turn.caster, %error, "action rejected");
            TurnOutcome::Rejected(decision, error)
        }
    }
}

fn still_usable(
    world: &dyn WorldView,
    caster: &dyn Actor,
    turn: &BotTurn<'_>,
    queued: &Decision,
) -> bool {
    let target = world.actor(queued.target);
    if queued.category == RuleCategory::Meta {
        return !caster.action_on_cooldown(queued.action)
            && target.is_some_and(|target| target.is_valid_target());
    }
    can_use(caster, target, queued.action, turn.role, turn.requirements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CombatConfig;
    use crate::engine::ScanMode;
    use crate::mock::{MockActor, MockWorld};
    use crate::rotation::{RotationTable, Rule, SpecRotation, TargetKind};
    use crate::targeting::NoRoles;
    use crate::types::{ActionId, ActorId, Role, SpecKey};

    const OWNER: ActorId = ActorId(1);
    const BOT: ActorId = ActorId(2);
    const ENEMY: ActorId = ActorId(9);
    const KEY: SpecKey = SpecKey::new(9, 0);
    const ARMOR: ActionId = ActionId(47893);
    const CORRUPTION: ActionId = ActionId(47813);
    const BOLT: ActionId = ActionId(47809);

    fn table() -> RotationTable {
        let mut builder = RotationTable::builder();
        builder
            .insert_spec(SpecRotation::new(KEY, "Affliction", Role::RangedDps))
            .unwrap();
        builder
            .add_rule(KEY, Rule::new(ARMOR, RuleCategory::Maintenance, 1, TargetKind::Caster))
            .unwrap();
        builder
            .add_rule(KEY, Rule::new(CORRUPTION, RuleCategory::Dot, 1, TargetKind::Enemy))
            .unwrap();
        builder
            .add_rule(KEY, Rule::new(BOLT, RuleCategory::Core, 1, TargetKind::Enemy))
            .unwrap();
        builder.build()
    }

    fn world() -> MockWorld {
        let mut world = MockWorld::new();
        world.insert(MockActor::new(OWNER, "Owner"));
        world.insert(
            MockActor::new(BOT, "Bot")
                .knowing(&[ARMOR, CORRUPTION, BOLT])
                .with_aura(ARMOR.aura())
                .fighting(ENEMY),
        );
        world.insert(MockActor::new(ENEMY, "Boar"));
        world
    }

    fn take_turn(world: &mut MockWorld, table: &RotationTable, queue: &mut CastQueue) -> TurnOutcome {
        let config = CombatConfig::default();
        let turn = BotTurn {
            caster: BOT,
            controller: OWNER,
            enemy: Some(ENEMY),
            rotation: table.get(KEY).unwrap(),
            role: Role::RangedDps,
            requirements: table.requirements(),
            roles: &NoRoles,
            config: &config,
            mode: ScanMode::Combat,
        };
        run_turn(world, &turn, queue)
    }

    #[test]
    fn busy_caster_queues_then_fires_queue_first() {
        let mut world = world();
        let table = table();
        let mut queue = CastQueue::new();

        world.actor_mut(BOT).unwrap().acting = true;
        let outcome = take_turn(&mut world, &table, &mut queue);
        assert!(matches!(outcome, TurnOutcome::Queued(d) if d.action == CORRUPTION));
        assert!(world.executions().is_empty());

        // Armor dropped meanwhile: Maintenance would now win a fresh scan.
        world.actor_mut(BOT).unwrap().acting = false;
        world.actor_mut(BOT).unwrap().auras.clear();
        let outcome = take_turn(&mut world, &table, &mut queue);
        assert!(matches!(outcome, TurnOutcome::ActedFromQueue(d) if d.action == CORRUPTION));
        assert_eq!(world.executions_by(BOT), vec![(ENEMY, CORRUPTION)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn busy_caster_never_overwrites_queue() {
        let mut world = world();
        let table = table();
        let mut queue = CastQueue::new();
        world.actor_mut(BOT).unwrap().acting = true;

        take_turn(&mut world, &table, &mut queue);
        world.actor_mut(ENEMY).unwrap().auras.insert(CORRUPTION.aura());
        assert_eq!(take_turn(&mut world, &table, &mut queue), TurnOutcome::Busy);
        assert_eq!(queue.peek().map(|d| d.action), Some(CORRUPTION));
    }

    #[test]
    fn stale_queue_entry_is_discarded() {
        let mut world = world();
        let table = table();
        let mut queue = CastQueue::new();
        world.actor_mut(BOT).unwrap().acting = true;
        take_turn(&mut world, &table, &mut queue);

        world.actor_mut(BOT).unwrap().acting = false;
        world.actor_mut(ENEMY).unwrap().alive = false;
        let outcome = take_turn(&mut world, &table, &mut queue);
        // Fresh scan finds nothing usable on a dead enemy.
        assert_eq!(outcome, TurnOutcome::Idle);
        assert!(world.executions().is_empty());
        assert!(queue.is_empty());
    }

    #[test]
    fn rejection_is_not_retried() {
        let mut world = world();
        world.reject(CORRUPTION);
        let table = table();
        let mut queue = CastQueue::new();

        let outcome = take_turn(&mut world, &table, &mut queue);
        assert!(matches!(outcome, TurnOutcome::Rejected(d, _) if d.action == CORRUPTION));
        assert!(outcome.attempted());
        assert_eq!(world.executions().len(), 1);
    }

    #[test]
    fn dead_caster_is_unavailable() {
        let mut world = world();
        world.actor_mut(BOT).unwrap().alive = false;
        let table = table();
        let mut queue = CastQueue::new();
        assert_eq!(take_turn(&mut world, &table, &mut queue), TurnOutcome::Unavailable);
    }
}
