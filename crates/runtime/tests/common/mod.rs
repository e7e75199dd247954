//! Shared fixtures for the runtime integration tests.
#![allow(dead_code)]

use bot_content::RotationLoader;
use bot_core::mock::{MockActor, MockWorld};
use bot_core::{ActorId, BotConfig};
use bot_runtime::{
    BotHost, BotRuntime, InMemoryRotationSource, StepResult, TeardownError, TeardownStep,
};

pub const OWNER: ActorId = ActorId(1);
pub const MOB: ActorId = ActorId(900);

/// Runtime serving `ron` from memory, plus the source for later reloads.
pub fn runtime_with(ron: &str) -> (BotRuntime, InMemoryRotationSource) {
    runtime_with_config(ron, BotConfig::default())
}

pub fn runtime_with_config(ron: &str, config: BotConfig) -> (BotRuntime, InMemoryRotationSource) {
    let document = RotationLoader::parse_ron(ron).expect("test rotations parse");
    let source = InMemoryRotationSource::new(document);
    let runtime = BotRuntime::builder()
        .config(config)
        .source(source.clone())
        .build()
        .expect("runtime builds");
    (runtime, source)
}

/// Controller fighting a hostile mob.
pub fn world_in_combat() -> MockWorld {
    let mut world = MockWorld::new();
    world.insert(MockActor::new(OWNER, "Owner").as_player().fighting(MOB));
    world.insert(MockActor::new(MOB, "Ogre"));
    world
}

/// Host that records every teardown step it is asked to run.
#[derive(Default)]
pub struct RecordingHost {
    pub steps: Vec<(ActorId, TeardownStep)>,
    pub failing: Option<TeardownStep>,
}

impl RecordingHost {
    fn step(&mut self, bot: ActorId, step: TeardownStep) -> StepResult {
        self.steps.push((bot, step));
        if self.failing == Some(step) {
            return Err(TeardownError::Failed(format!("{step} refused")));
        }
        Ok(())
    }

    pub fn steps_for(&self, bot: ActorId) -> Vec<TeardownStep> {
        self.steps
            .iter()
            .filter(|(who, _)| *who == bot)
            .map(|(_, step)| *step)
            .collect()
    }
}

impl BotHost for RecordingHost {
    fn leave_group(&mut self, bot: ActorId) -> StepResult {
        self.step(bot, TeardownStep::LeaveGroup)
    }

    fn persist(&mut self, bot: ActorId) -> StepResult {
        self.step(bot, TeardownStep::Persist)
    }

    fn mark_offline(&mut self, bot: ActorId) -> StepResult {
        self.step(bot, TeardownStep::MarkOffline)
    }

    fn detach_session(&mut self, bot: ActorId) -> StepResult {
        self.step(bot, TeardownStep::DetachSession)
    }

    fn halt(&mut self, bot: ActorId) -> StepResult {
        self.step(bot, TeardownStep::Halt)
    }

    fn remove_from_world(&mut self, bot: ActorId) -> StepResult {
        self.step(bot, TeardownStep::RemoveFromWorld)
    }

    fn remove_from_lookup(&mut self, bot: ActorId) -> StepResult {
        self.step(bot, TeardownStep::RemoveFromLookup)
    }

    fn release(&mut self, bot: ActorId) -> StepResult {
        self.step(bot, TeardownStep::Release)
    }
}
