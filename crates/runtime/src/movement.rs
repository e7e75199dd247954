//! Follow, formation and pursuit policy for registered bots.
//!
//! A bot follows its controller in formation until the controller engages a
//! hostile non-player enemy, then pursues that enemy at its combat standoff.
//! When the controller leaves combat the bot drops its target and falls back
//! into its slot.

use bot_core::{
    Actor, ActorId, MovementConfig, Position, Role, World, WorldView, ZoneId, slot_point,
};
use tracing::debug;

use crate::registry::{BotRecord, MovementState};

/// Distance a bot keeps from its enemy while pursuing.
///
/// A positive preferred range from the rotation wins; otherwise melee roles
/// close in and everyone else stands off at ranged distance.
pub fn standoff(role: Role, preferred_range: f32, config: &MovementConfig) -> f32 {
    chase_distance(role, preferred_range, config.melee_chase_distance, config)
}

/// Like [`standoff`], but a melee controller on autoplay closes in further.
pub fn selfbot_standoff(role: Role, preferred_range: f32, config: &MovementConfig) -> f32 {
    chase_distance(role, preferred_range, config.selfbot_melee_chase_distance, config)
}

fn chase_distance(role: Role, preferred_range: f32, melee: f32, config: &MovementConfig) -> f32 {
    if preferred_range > 0.0 {
        preferred_range
    } else if role.is_melee() {
        melee
    } else {
        config.ranged_chase_distance
    }
}

/// Enemy worth fighting: alive, in the world and not a player.
pub fn hostile(world: &dyn WorldView, id: Option<ActorId>) -> Option<ActorId> {
    let enemy = world.actor(id?)?;
    (enemy.is_valid_target() && !enemy.is_player()).then(|| enemy.id())
}

/// Enemy the controller is fighting, if the bot should join in.
pub fn controller_target(world: &dyn WorldView, controller: &dyn Actor) -> Option<ActorId> {
    if !controller.is_in_combat() {
        return None;
    }
    hostile(world, controller.current_enemy())
}

#[derive(Clone, Copy)]
struct Anchor {
    position: Position,
    facing: f32,
    zone: ZoneId,
}

/// Moves one bot for this tick and updates its combat flags.
///
/// Does nothing while the controller is missing or out of the world.
pub fn update_movement<W: World>(
    world: &mut W,
    record: &mut BotRecord,
    preferred_range: f32,
    config: &MovementConfig,
) {
    let Some(controller) = world
        .actor(record.controller)
        .filter(|controller| controller.is_in_world())
    else {
        return;
    };
    let anchor = Anchor {
        position: controller.position(),
        facing: controller.facing(),
        zone: controller.zone(),
    };
    let target = controller_target(&*world, controller);

    match target {
        Some(enemy) => engage(world, record, enemy, preferred_range, config),
        None => {
            if record.in_combat {
                disengage(world, record);
            }
            follow(world, record, anchor, config);
        }
    }
}

fn engage<W: World>(
    world: &mut W,
    record: &mut BotRecord,
    enemy: ActorId,
    preferred_range: f32,
    config: &MovementConfig,
) {
    if !record.in_combat || record.pursuing != Some(enemy) {
        let distance = standoff(record.role, preferred_range, config);
        world.pursue(record.actor, enemy, distance);
        debug!(bot = %record.actor, %enemy, standoff = distance, "bot engaging");
    }
    record.in_combat = true;
    record.following = false;
    record.pursuing = Some(enemy);
    record.movement = MovementState::InCombat;
    record.slot_point = None;
}

fn disengage<W: World>(world: &mut W, record: &mut BotRecord) {
    world.stop_combat(record.actor);
    world.stop_movement(record.actor);
    record.queue.clear();
    record.in_combat = false;
    record.following = true;
    record.pursuing = None;
    record.movement = MovementState::Following;
    debug!(bot = %record.actor, "bot left combat");
}

fn follow<W: World>(
    world: &mut W,
    record: &mut BotRecord,
    anchor: Anchor,
    config: &MovementConfig,
) {
    let Some(slot) = record.slot else {
        return;
    };
    let Some(bot) = world.actor(record.actor) else {
        return;
    };
    if !bot.is_valid_target() {
        return;
    }
    let here = bot.position();
    let far_away = bot.zone() != anchor.zone
        || here.planar_distance(&anchor.position) > config.max_follow_distance;

    let point = slot_point(anchor.position, anchor.facing, slot, config);

    if far_away {
        world.relocate(record.actor, point);
        record.slot_point = Some(point);
        record.movement = MovementState::Following;
        debug!(bot = %record.actor, "bot relocated to its controller");
        return;
    }

    let drifted = record
        .slot_point
        .is_none_or(|last| last.planar_distance(&point) > config.slot_tolerance);
    if drifted {
        world.move_to(record.actor, point);
        record.slot_point = Some(point);
        record.movement = MovementState::Repositioning;
    } else if here.planar_distance(&point) <= config.slot_tolerance {
        record.movement = MovementState::Following;
    }
}
