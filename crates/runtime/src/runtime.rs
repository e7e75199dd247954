//! High-level bot runtime.
//!
//! [`BotRuntime`] owns the rotation store, the bot registry and autoplay
//! state, and exposes the entry points the host engine calls: the heartbeat
//! update, spawn and dismissal, and the administrative commands.

use std::sync::Arc;

use bot_core::{
    ActorId, BotConfig, ClassId, Role, RotationTable, SpecKey, TurnOutcome, World, WorldView,
};
use bot_content::RotationDocument;
use tracing::{info, warn};

use crate::admin;
use crate::driver::{
    TickEntry, TickPlan, TickReport, TickTimer, begin_tick, evaluate_bot, run_tick,
};
use crate::error::{Result, RuntimeError};
use crate::lifecycle::{BotHost, DismissReport, SpawnTicket, complete_spawn, dismiss, request_spawn};
use crate::registry::{BotRecord, BotRegistry};
use crate::selfbot::{SelfBotState, SelfBots};
use crate::store::{InMemoryRotationSource, RotationSource, RotationStore};

pub struct BotRuntime {
    config: BotConfig,
    store: RotationStore,
    registry: BotRegistry,
    selfbots: SelfBots,
    timer: TickTimer,
}

impl BotRuntime {
    pub fn builder() -> BotRuntimeBuilder {
        BotRuntimeBuilder::new()
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn store(&self) -> &RotationStore {
        &self.store
    }

    pub fn registry(&self) -> &BotRegistry {
        &self.registry
    }

    pub fn selfbots(&self) -> &SelfBots {
        &self.selfbots
    }

    // ===== heartbeat =====

    /// Feeds one host frame. Runs a tick once the configured interval elapsed.
    pub fn update<W: World>(&mut self, world: &mut W, delta_ms: u32) -> Option<TickReport> {
        if !self.timer.advance(delta_ms) {
            return None;
        }
        Some(self.tick(world))
    }

    /// Evaluates every bot and every autoplay character once.
    pub fn tick<W: World>(&mut self, world: &mut W) -> TickReport {
        let table = self.table_snapshot();
        let report = run_tick(world, &mut self.registry, Arc::clone(&table), &self.config);
        self.tick_selfbots(world, &table);
        report
    }

    /// First half of a tick: slot assignment and the list of bots to run.
    ///
    /// Hosts that interleave other work with bot evaluation call this, then
    /// [`BotRuntime::evaluate`] per entry.
    pub fn begin_tick(&mut self) -> TickPlan {
        let table = self.table_snapshot();
        begin_tick(&mut self.registry, table)
    }

    fn table_snapshot(&self) -> Arc<RotationTable> {
        self.store.snapshot().unwrap_or_else(|error| {
            warn!("rotation table unavailable for this tick: {error}");
            Arc::new(RotationTable::default())
        })
    }

    /// Runs one planned entry. `None` when that bot was dismissed meanwhile.
    pub fn evaluate<W: World>(
        &mut self,
        world: &mut W,
        plan: &TickPlan,
        entry: TickEntry,
    ) -> Option<TurnOutcome> {
        evaluate_bot(world, &mut self.registry, plan.table(), &self.config, entry)
    }

    fn tick_selfbots<W: World>(&mut self, world: &mut W, table: &RotationTable) {
        if !self.config.selfbot_enabled || self.selfbots.is_empty() {
            return;
        }
        self.selfbots.tick(world, table, &self.config);
    }

    // ===== lifecycle =====

    /// Validates a spawn before the host loads the character.
    pub fn request_spawn(
        &self,
        world: &dyn WorldView,
        controller: ActorId,
        actor: ActorId,
    ) -> Result<SpawnTicket> {
        self.check_not_autoplayed(actor)?;
        request_spawn(
            world,
            &self.registry,
            self.config.max_bots_per_controller,
            controller,
            actor,
        )
    }

    /// Registers a character the host finished loading.
    pub fn complete_spawn(&mut self, world: &dyn WorldView, ticket: SpawnTicket) -> Result<&BotRecord> {
        self.check_not_autoplayed(ticket.actor)?;
        let table = self.store.snapshot()?;
        complete_spawn(
            world,
            &mut self.registry,
            &table,
            self.config.max_bots_per_controller,
            ticket,
        )
    }

    /// Request and completion in one go, for characters already loaded.
    pub fn spawn(
        &mut self,
        world: &dyn WorldView,
        controller: ActorId,
        actor: ActorId,
    ) -> Result<&BotRecord> {
        let ticket = self.request_spawn(world, controller, actor)?;
        self.complete_spawn(world, ticket)
    }

    fn check_not_autoplayed(&self, actor: ActorId) -> Result<()> {
        if self.selfbots.is_active(actor) {
            warn!(%actor, "spawn rejected: character runs on autoplay");
            return Err(RuntimeError::SelfBotActive(actor));
        }
        Ok(())
    }

    /// Unregisters and tears down one bot. `None` when it was not registered.
    pub fn dismiss(
        &mut self,
        host: &mut dyn BotHost,
        controller: ActorId,
        actor: ActorId,
    ) -> Option<DismissReport> {
        let record = self.registry.unregister(controller, actor)?;
        info!(%controller, bot = %record.actor, name = %record.name, "bot dismissed");
        Some(dismiss(host, record.actor))
    }

    /// Tears down every bot of `controller`.
    pub fn dismiss_all(&mut self, host: &mut dyn BotHost, controller: ActorId) -> Vec<DismissReport> {
        let removed = self.registry.unregister_all(controller);
        if !removed.is_empty() {
            info!(%controller, count = removed.len(), "dismissing all bots");
        }
        removed
            .into_iter()
            .map(|record| dismiss(&mut *host, record.actor))
            .collect()
    }

    /// Controller logout: its bots go with it, and autoplay stops.
    pub fn controller_logout(
        &mut self,
        host: &mut dyn BotHost,
        controller: ActorId,
    ) -> Vec<DismissReport> {
        self.selfbots.disable(controller);
        self.dismiss_all(host, controller)
    }

    // ===== autoplay =====

    pub fn enable_selfbot(&mut self, world: &dyn WorldView, actor: ActorId) -> Result<&SelfBotState> {
        if !self.config.selfbot_enabled {
            return Err(RuntimeError::SelfBotDisabled);
        }
        if self.registry.is_bot(actor) {
            return Err(RuntimeError::AlreadyBot(actor));
        }
        let table = self.store.snapshot()?;
        self.selfbots.enable(world, &table, actor)
    }

    pub fn disable_selfbot(&mut self, actor: ActorId) -> bool {
        self.selfbots.disable(actor)
    }

    // ===== administration =====

    /// Reloads rotations from the configured source. Returns the spec count.
    pub fn reload_rotations(&self) -> Result<usize> {
        let report = self.store.load()?;
        Ok(report.specs)
    }

    pub fn describe_rotation(&self, class: ClassId, spec_index: u8) -> Result<String> {
        let table = self.store.snapshot()?;
        let text = admin::describe_rotation(&table, SpecKey { class, spec_index })?;
        Ok(text)
    }

    pub fn set_role(&mut self, controller: ActorId, name: &str, role: &str) -> Result<Role> {
        Ok(admin::set_role(&mut self.registry, controller, name, role)?)
    }

    pub fn list_bots(&self, controller: ActorId) -> Vec<String> {
        admin::list_bots(&self.registry, controller)
    }
}

/// Builder for [`BotRuntime`].
pub struct BotRuntimeBuilder {
    config: BotConfig,
    source: Option<Box<dyn RotationSource>>,
}

impl BotRuntimeBuilder {
    fn new() -> Self {
        Self {
            config: BotConfig::default(),
            source: None,
        }
    }

    /// Override bot configuration
    pub fn config(mut self, config: BotConfig) -> Self {
        self.config = config;
        self
    }

    /// Where rotations are loaded from. Without one the runtime starts empty
    /// and every bot only auto-attacks.
    pub fn source(mut self, source: impl RotationSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Builds the runtime and performs the initial rotation load.
    pub fn build(self) -> Result<BotRuntime> {
        let store = match self.source {
            Some(source) => RotationStore::from_boxed(source),
            None => RotationStore::new(InMemoryRotationSource::new(RotationDocument::default())),
        };
        store.load()?;

        info!(
            tick_interval_ms = self.config.tick_interval_ms,
            max_bots = self.config.max_bots_per_controller,
            selfbot = self.config.selfbot_enabled,
            "bot runtime ready"
        );
        Ok(BotRuntime {
            timer: TickTimer::new(self.config.tick_interval_ms),
            config: self.config,
            store,
            registry: BotRegistry::new(),
            selfbots: SelfBots::new(),
        })
    }
}

impl Default for BotRuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
