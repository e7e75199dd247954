//! Spawn limits, teardown order and controller logout.

mod common;

use bot_core::mock::{MockActor, MockWorld};
use bot_core::{ActorId, Role};
use bot_runtime::{RuntimeError, TeardownStep};
use common::{OWNER, RecordingHost, runtime_with};

const ROTATIONS: &str = r#"(
    specs: [
        (class_id: 2, spec_index: 1, name: "Protection", role: "tank"),
    ],
)"#;

fn world_with_bots(ids: &[u64]) -> MockWorld {
    let mut world = MockWorld::new();
    world.insert(MockActor::new(OWNER, "Owner").as_player());
    for id in ids {
        world.insert(MockActor::new(ActorId(*id), format!("Bot{id}")).with_class(2));
    }
    world
}

#[test]
fn fifth_bot_is_refused() {
    let (mut runtime, _) = runtime_with(ROTATIONS);
    let world = world_with_bots(&[10, 11, 12, 13, 14]);
    for id in 10..14 {
        runtime.spawn(&world, OWNER, ActorId(id)).expect("within limit");
    }

    let refused = runtime.spawn(&world, OWNER, ActorId(14));
    assert!(matches!(
        refused,
        Err(RuntimeError::TooManyBots { max: 4, .. })
    ));
    assert_eq!(runtime.registry().count(OWNER), 4);
}

#[test]
fn bot_cannot_serve_two_controllers() {
    let (mut runtime, _) = runtime_with(ROTATIONS);
    let mut world = world_with_bots(&[10]);
    world.insert(MockActor::new(ActorId(2), "Other").as_player());
    runtime.spawn(&world, OWNER, ActorId(10)).expect("spawn");

    assert!(matches!(
        runtime.spawn(&world, ActorId(2), ActorId(10)),
        Err(RuntimeError::AlreadyBot(_))
    ));
}

#[test]
fn controller_cannot_spawn_itself() {
    let (mut runtime, _) = runtime_with(ROTATIONS);
    let world = world_with_bots(&[]);

    assert!(matches!(
        runtime.spawn(&world, OWNER, OWNER),
        Err(RuntimeError::OwnCharacter(OWNER))
    ));
    assert!(runtime.registry().is_empty());
}

#[test]
fn autoplayed_character_cannot_become_a_bot() {
    let (mut runtime, _) = runtime_with(ROTATIONS);
    let mut world = world_with_bots(&[]);
    world.insert(MockActor::new(ActorId(2), "Alt").as_player().with_class(2));
    runtime.enable_selfbot(&world, ActorId(2)).expect("autoplay on");

    assert!(matches!(
        runtime.spawn(&world, OWNER, ActorId(2)),
        Err(RuntimeError::SelfBotActive(ActorId(2)))
    ));
    assert!(!runtime.registry().is_bot(ActorId(2)));
}

#[test]
fn autoplay_started_during_load_blocks_completion() {
    let (mut runtime, _) = runtime_with(ROTATIONS);
    let mut world = world_with_bots(&[]);
    world.insert(MockActor::new(ActorId(2), "Alt").as_player().with_class(2));
    let ticket = runtime
        .request_spawn(&world, OWNER, ActorId(2))
        .expect("not on autoplay yet");

    runtime.enable_selfbot(&world, ActorId(2)).expect("autoplay on");
    assert!(matches!(
        runtime.complete_spawn(&world, ticket),
        Err(RuntimeError::SelfBotActive(ActorId(2)))
    ));
    assert!(runtime.registry().is_empty());
}

#[test]
fn controller_leaving_during_load_is_reported() {
    let (mut runtime, _) = runtime_with(ROTATIONS);
    let mut world = world_with_bots(&[10]);
    let ticket = runtime
        .request_spawn(&world, OWNER, ActorId(10))
        .expect("controller online");

    world.remove(OWNER);
    assert!(matches!(
        runtime.complete_spawn(&world, ticket),
        Err(RuntimeError::ControllerGone(OWNER))
    ));
    assert!(runtime.registry().is_empty());
}

#[test]
fn spawn_detects_rotation_role() {
    let (mut runtime, _) = runtime_with(ROTATIONS);
    let mut world = world_with_bots(&[]);
    world.insert(
        MockActor::new(ActorId(10), "Shieldy")
            .with_class(2)
            .with_talent_index(1),
    );

    let record = runtime.spawn(&world, OWNER, ActorId(10)).expect("spawn");
    assert_eq!(record.role, Role::Tank);
    assert_eq!(
        runtime.list_bots(OWNER),
        vec!["Shieldy - Tank (class 2 spec 1) - following"]
    );
}

#[test]
fn logout_tears_down_every_bot_in_order() {
    let (mut runtime, _) = runtime_with(ROTATIONS);
    let world = world_with_bots(&[10, 11]);
    runtime.spawn(&world, OWNER, ActorId(10)).expect("spawn");
    runtime.spawn(&world, OWNER, ActorId(11)).expect("spawn");

    let mut host = RecordingHost::default();
    let reports = runtime.controller_logout(&mut host, OWNER);
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|report| report.is_clean()));
    assert_eq!(host.steps_for(ActorId(10)), TeardownStep::ALL.to_vec());
    assert_eq!(host.steps_for(ActorId(11)), TeardownStep::ALL.to_vec());

    // Second logout finds nothing left to free.
    assert!(runtime.controller_logout(&mut host, OWNER).is_empty());
    assert_eq!(host.steps.len(), 16);
}

#[test]
fn failing_step_does_not_abort_teardown() {
    let (mut runtime, _) = runtime_with(ROTATIONS);
    let world = world_with_bots(&[10]);
    runtime.spawn(&world, OWNER, ActorId(10)).expect("spawn");

    let mut host = RecordingHost {
        failing: Some(TeardownStep::Persist),
        ..Default::default()
    };
    let report = runtime
        .dismiss(&mut host, OWNER, ActorId(10))
        .expect("registered");
    assert_eq!(report.failed.len(), 1);
    assert_eq!(host.steps_for(ActorId(10)).len(), 8);

    // Already gone: nothing to tear down twice.
    assert!(runtime.dismiss(&mut host, OWNER, ActorId(10)).is_none());
}

#[test]
fn set_role_moves_bot_in_formation() {
    let (mut runtime, _) = runtime_with(ROTATIONS);
    let mut world = world_with_bots(&[10]);
    runtime.spawn(&world, OWNER, ActorId(10)).expect("spawn");

    runtime.tick(&mut world);
    let before = runtime.registry().find(OWNER, ActorId(10)).unwrap().slot;

    runtime.set_role(OWNER, "bot10", "healer").expect("known bot");
    runtime.tick(&mut world);
    let after = runtime.registry().find(OWNER, ActorId(10)).unwrap().slot;

    assert_ne!(before.map(|slot| slot.row), after.map(|slot| slot.row));
}
