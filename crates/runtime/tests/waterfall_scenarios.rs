//! Waterfall behavior observed through full runtime ticks.

mod common;

use bot_core::mock::MockActor;
use bot_core::{ActionId, ActorId, AuraId, BotConfig, Decision, RuleCategory, TurnOutcome};
use bot_runtime::{RuntimeError, TeardownStep};
use common::{MOB, OWNER, RecordingHost, runtime_with, runtime_with_config, world_in_combat};

const AFFLICTION: &str = r#"(
    specs: [
        (class_id: 9, spec_index: 0, name: "Affliction", role: "ranged_dps", preferred_range: 30.0),
    ],
    entries: [
        (class_id: 9, spec_index: 0, category: "defensive", priority: 1, action: 47891, name: "Shadow Ward", target: "self"),
        (class_id: 9, spec_index: 0, category: "dot", priority: 1, action: 47813, name: "Corruption", target: "enemy"),
        (class_id: 9, spec_index: 0, category: "core", priority: 1, action: 47809, name: "Shadow Bolt", target: "enemy"),
    ],
)"#;

const HOLY: &str = r#"(
    specs: [
        (class_id: 2, spec_index: 0, name: "Holy", role: "healer", preferred_range: 30.0),
    ],
    entries: [
        (class_id: 2, spec_index: 0, category: "hot", priority: 1, action: 53601, name: "Sacred Shield",
         target: "ally_lowest_health", condition: "target_missing_aura", value: 53601),
        (class_id: 2, spec_index: 0, category: "core", priority: 1, action: 48782, name: "Holy Light",
         target: "ally_lowest_health"),
    ],
)"#;

const PROTECTION: &str = r#"(
    specs: [
        (class_id: 2, spec_index: 1, name: "Protection", role: "tank"),
    ],
    entries: [
        (class_id: 2, spec_index: 1, category: "maintenance", priority: 1, action: 25780, name: "Righteous Fury", target: "self"),
        (class_id: 2, spec_index: 1, category: "maintenance", priority: 2, action: 48942, name: "Devotion Aura", target: "self"),
        (class_id: 2, spec_index: 1, category: "defensive", priority: 1, action: 498, name: "Divine Protection", target: "self"),
        (class_id: 2, spec_index: 1, category: "core", priority: 1, action: 53595, name: "Hammer of the Righteous", target: "enemy"),
    ],
)"#;

const SHADOW_WARD: ActionId = ActionId(47891);
const CORRUPTION: ActionId = ActionId(47813);
const SHADOW_BOLT: ActionId = ActionId(47809);

fn warlock(id: u64) -> MockActor {
    MockActor::new(ActorId(id), format!("Lock{id}"))
        .with_class(9)
        .knowing(&[SHADOW_WARD, CORRUPTION, SHADOW_BOLT])
}

fn paladin(id: u64, spec_index: u8, actions: &[u32]) -> MockActor {
    let actions: Vec<ActionId> = actions.iter().copied().map(ActionId).collect();
    MockActor::new(ActorId(id), format!("Pally{id}"))
        .with_class(2)
        .with_talent_index(spec_index)
        .knowing(&actions)
}

/// A decision queued while casting runs on the next free tick, ahead of a
/// Defensive that became eligible in the meantime.
#[test]
fn queued_action_runs_before_fresh_scan() {
    let bot = ActorId(10);
    let (mut runtime, _) = runtime_with(AFFLICTION);
    let mut world = world_in_combat();
    world.insert(warlock(10).acting(true));
    world.actor_mut(MOB).unwrap().auras.insert(AuraId(47813));
    runtime.spawn(&world, OWNER, bot).expect("spawn");

    // Tick 1: casting, so Shadow Bolt is queued (Corruption is already up).
    let queued = Decision {
        action: SHADOW_BOLT,
        target: MOB,
        category: RuleCategory::Core,
    };
    let report = runtime.tick(&mut world);
    assert_eq!(report.outcome_of(bot), Some(&TurnOutcome::Queued(queued)));
    assert!(world.executions_by(bot).is_empty());

    // Tick 2: free, low on health, Corruption fell off. The queue still wins.
    {
        let me = world.actor_mut(bot).unwrap();
        me.acting = false;
        me.health = 20.0;
    }
    world.actor_mut(MOB).unwrap().auras.clear();
    let report = runtime.tick(&mut world);
    assert_eq!(report.outcome_of(bot), Some(&TurnOutcome::ActedFromQueue(queued)));
    assert_eq!(world.executions_by(bot), vec![(MOB, SHADOW_BOLT)]);

    // Tick 3: back to a normal scan, Defensive first.
    runtime.tick(&mut world);
    assert_eq!(world.executions_by(bot).last(), Some(&(bot, SHADOW_WARD)));
}

/// Healer with a wounded ally and an empty Dot bucket: the Hot rule lands on
/// the ally before any Core heal.
#[test]
fn healer_prefers_hot_on_lowest_ally() {
    let bot = ActorId(10);
    let ally = ActorId(20);
    let (mut runtime, _) = runtime_with(HOLY);
    let mut world = world_in_combat();
    world.insert(paladin(10, 0, &[53601, 48782]));
    world.insert(MockActor::new(ally, "Squishy").as_player().with_health(40.0));
    world.group(&[OWNER, bot, ally]);
    runtime.spawn(&world, OWNER, bot).expect("spawn");

    runtime.tick(&mut world);
    assert_eq!(world.executions_by(bot), vec![(ally, ActionId(53601))]);

    // Shield is up now, so the next tick falls through to Core.
    world.actor_mut(ally).unwrap().auras.insert(AuraId(53601));
    runtime.tick(&mut world);
    assert_eq!(world.executions_by(bot)[1], (ally, ActionId(48782)));
}

#[test]
fn tank_at_half_health_skips_defensive() {
    let bot = ActorId(10);
    let (mut runtime, _) = runtime_with(PROTECTION);
    let mut world = world_in_combat();
    world.insert(paladin(10, 1, &[498, 53595]).with_health(50.0));
    runtime.spawn(&world, OWNER, bot).expect("spawn");

    let report = runtime.tick(&mut world);
    assert!(matches!(report.outcome_of(bot), Some(TurnOutcome::Acted(_))));
    assert_eq!(world.executions_by(bot), vec![(MOB, ActionId(53595))]);
}

#[test]
fn defensive_threshold_is_strict() {
    let bot = ActorId(10);
    let (mut runtime, _) = runtime_with(PROTECTION);
    let mut world = world_in_combat();
    world.insert(paladin(10, 1, &[498, 53595]).with_health(35.0));
    runtime.spawn(&world, OWNER, bot).expect("spawn");

    runtime.tick(&mut world);
    assert_eq!(world.executions_by(bot), vec![(MOB, ActionId(53595))]);

    world.actor_mut(bot).unwrap().health = 34.999;
    runtime.tick(&mut world);
    assert_eq!(world.executions_by(bot)[1], (bot, ActionId(498)));
}

/// Out of combat only Maintenance runs, and a buff already up is passed over.
#[test]
fn idle_bot_refreshes_missing_buff_only() {
    let bot = ActorId(10);
    let (mut runtime, _) = runtime_with(PROTECTION);
    let mut world = bot_core::mock::MockWorld::new();
    world.insert(MockActor::new(OWNER, "Owner").as_player());
    world.insert(paladin(10, 1, &[25780, 48942, 498, 53595]).with_aura(AuraId(25780)));
    runtime.spawn(&world, OWNER, bot).expect("spawn");

    runtime.tick(&mut world);
    assert_eq!(world.executions_by(bot), vec![(bot, ActionId(48942))]);

    world.actor_mut(bot).unwrap().auras.insert(AuraId(48942));
    let report = runtime.tick(&mut world);
    assert_eq!(report.outcome_of(bot), Some(&TurnOutcome::Idle));
    assert_eq!(world.executions_by(bot).len(), 1);
}

/// Dismissing the third of five bots mid-tick: the others still run once,
/// the dismissed one never executes its queued action.
#[test]
fn dismissal_mid_tick_skips_the_bot() {
    let config = BotConfig {
        max_bots_per_controller: 5,
        ..BotConfig::default()
    };
    let (mut runtime, _) = runtime_with_config(AFFLICTION, config);
    let mut world = world_in_combat();
    for id in 11..=15 {
        world.insert(warlock(id).acting(id == 13));
        runtime.spawn(&world, OWNER, ActorId(id)).expect("spawn");
    }
    world.actor_mut(MOB).unwrap().auras.insert(AuraId(47813));

    let report = runtime.tick(&mut world);
    for id in [11, 12, 14, 15] {
        assert_eq!(world.executions_by(ActorId(id)).len(), 1, "bot {id}");
    }
    assert!(matches!(report.outcome_of(ActorId(13)), Some(TurnOutcome::Queued(_))));

    world.actor_mut(ActorId(13)).unwrap().acting = false;
    let mut host = RecordingHost::default();
    let plan = runtime.begin_tick();
    let mut evaluated = Vec::new();
    for entry in plan.entries() {
        if entry.actor == ActorId(13) {
            runtime
                .dismiss(&mut host, OWNER, ActorId(13))
                .expect("bot 13 registered");
        }
        if runtime.evaluate(&mut world, &plan, *entry).is_some() {
            evaluated.push(entry.actor);
        }
    }

    assert_eq!(evaluated, vec![ActorId(11), ActorId(12), ActorId(14), ActorId(15)]);
    assert!(world.executions_by(ActorId(13)).is_empty());
    assert_eq!(host.steps_for(ActorId(13)), TeardownStep::ALL.to_vec());
    for id in [11, 12, 14, 15] {
        assert_eq!(world.executions_by(ActorId(id)).len(), 2, "bot {id}");
    }
}

#[test]
fn engine_rejection_is_not_retried() {
    let bot = ActorId(10);
    let (mut runtime, _) = runtime_with(AFFLICTION);
    let mut world = world_in_combat();
    world.insert(warlock(10));
    world.actor_mut(MOB).unwrap().auras.insert(AuraId(47813));
    world.reject(SHADOW_BOLT);
    runtime.spawn(&world, OWNER, bot).expect("spawn");

    let report = runtime.tick(&mut world);
    assert!(matches!(report.outcome_of(bot), Some(TurnOutcome::Rejected(..))));
    assert_eq!(world.executions_by(bot).len(), 1);
}

#[test]
fn heartbeat_ticks_on_interval() {
    let (mut runtime, _) = runtime_with(AFFLICTION);
    let mut world = world_in_combat();

    assert!(runtime.update(&mut world, 600).is_none());
    assert!(runtime.update(&mut world, 400).is_some());
    assert!(runtime.update(&mut world, 999).is_none());
}

/// Autoplay runs the waterfall on the controller's own character.
#[test]
fn selfbot_plays_the_controller() {
    let (mut runtime, _) = runtime_with(AFFLICTION);
    let mut world = bot_core::mock::MockWorld::new();
    world.insert(warlock(OWNER.0).as_player().fighting(MOB));
    world.insert(MockActor::new(MOB, "Ogre").with_aura(AuraId(47813)));

    runtime.enable_selfbot(&world, OWNER).expect("autoplay");
    runtime.tick(&mut world);
    assert_eq!(world.executions_by(OWNER), vec![(MOB, SHADOW_BOLT)]);

    // Target dies: autoplay leaves combat and stops.
    world.actor_mut(MOB).unwrap().alive = false;
    runtime.tick(&mut world);
    assert_eq!(world.executions_by(OWNER).len(), 1);
    assert!(!runtime.selfbots().get(OWNER).unwrap().in_combat);
}

#[test]
fn selfbot_respects_config_switch() {
    let config = BotConfig {
        selfbot_enabled: false,
        ..BotConfig::default()
    };
    let (mut runtime, _) = runtime_with_config(AFFLICTION, config);
    let world = world_in_combat();
    assert!(matches!(
        runtime.enable_selfbot(&world, OWNER),
        Err(RuntimeError::SelfBotDisabled)
    ));
}
