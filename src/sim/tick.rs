//! Per-tick run loop
//!
//! One `tick` call advances the whole world by one frame: apply queued
//! control signals, scroll, expire-and-score obstacles, collide, then run
//! the spawn counter. The fixed ordering is load-bearing: expiry happens
//! before collision so an obstacle leaving the view can never be counted
//! as both a dodge and a hit on the same tick, and spawning happens last
//! so removals complete before a new obstacle joins the collection.

use super::control::TickInput;
use super::state::{Obstacle, ObstacleKind, World};
use crate::consts::*;
use rand::Rng;

/// Advance the world by one tick. A no-op once the run has ended; the
/// shell's frame clock keeps running and that is not an error.
pub fn tick(world: &mut World, input: &TickInput) {
    if world.is_over() {
        return;
    }
    world.time_ticks += 1;
    let variant = world.variant;

    // 1. Queued control signals, in arrival order, clamped after each
    for &signal in &input.signals {
        world.actor.apply_signal(signal, variant);
    }

    // 2. Scroll. Fixed speed; difficulty only ever affects lateral movement.
    world.scroll_offset += SCROLL_SPEED;
    let lateral = variant.lateral_of(world.actor.pos);
    world.actor.pos = variant.compose(lateral, variant.actor_travel(world.scroll_offset));

    // 3. Advance obstacles; expired ones are removed and scored together
    let scroll = world.scroll_offset;
    let mut dodged = 0u32;
    world.obstacles.retain_mut(|obstacle| {
        variant.advance_obstacle(&mut obstacle.pos);
        if variant.expired(obstacle.pos, scroll) {
            dodged += 1;
            false
        } else {
            true
        }
    });
    if dodged > 0 {
        world.score += dodged * SCORE_PER_DODGE;
        log::debug!("dodged {dodged}, score now {}", world.score);
    }

    // 4. Collision against surviving obstacles, in spawn order; any hit is
    //    terminal so the first suffices
    let actor_bounds = world.actor.bounds();
    let hit = world
        .obstacles
        .iter()
        .find(|o| actor_bounds.overlaps(&o.bounds()))
        .map(|o| o.id);
    if let Some(id) = hit {
        log::debug!("actor hit obstacle {id}");
        world.end_run();
        return;
    }

    // 5. Spawn counter, gated on the run still being live
    world.spawn_countdown = world.spawn_countdown.saturating_sub(1);
    if world.spawn_countdown == 0 {
        world.spawn_countdown = SPAWN_INTERVAL_TICKS;
        spawn_obstacle(world);
    }
}

/// Create one obstacle just beyond the leading view edge, at a lateral slot
/// and cosmetic kind drawn from the run's RNG.
pub fn spawn_obstacle(world: &mut World) {
    debug_assert!(!world.is_over(), "spawn on a finished run");
    if world.is_over() {
        log::warn!("spawn requested after game over; ignoring");
        return;
    }
    let id = world.next_entity_id();
    let slots = world.variant.spawn_slots();
    let slot = slots[world.rng.random_range(0..slots.len())];
    let kind = if world.rng.random_bool(0.5) {
        ObstacleKind::Germ
    } else {
        ObstacleKind::Topping
    };
    let pos = world
        .variant
        .compose(slot, world.variant.spawn_travel(world.scroll_offset));
    log::debug!("spawned obstacle {id} ({kind:?}) at {pos}");
    world.obstacles.push(Obstacle {
        id,
        kind,
        pos,
        spawned_at_scroll: world.scroll_offset,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::control::{ControlSignal, ControlSource, KeyboardSource, LateralKey, TickInput};
    use crate::sim::state::{Difficulty, GamePhase, Variant};

    fn run_ticks(world: &mut World, input: &TickInput, n: u32) {
        for _ in 0..n {
            tick(world, input);
        }
    }

    #[test]
    fn test_idle_actor_stays_put_laterally() {
        // Scenario A: no input, no obstacles yet (first spawn is tick 120)
        let mut world = World::new(Difficulty::Kid, Variant::LaneRunner, 42);
        let start_x = world.actor.pos.x;

        run_ticks(&mut world, &TickInput::default(), 100);

        assert_eq!(world.actor.pos.x, start_x);
        assert_eq!(world.score, 0);
        assert!(world.obstacles.is_empty());
        assert_eq!(world.phase, GamePhase::Running);
    }

    #[test]
    fn test_scroll_advances_every_tick() {
        let mut world = World::new(Difficulty::Kid, Variant::LaneRunner, 42);
        run_ticks(&mut world, &TickInput::default(), 10);
        assert_eq!(world.scroll_offset, 30.0);
        // Actor rides the window
        assert_eq!(world.actor.pos.y, 30.0 + 600.0 - 100.0);
    }

    #[test]
    fn test_spawn_cadence() {
        let mut world = World::new(Difficulty::Kid, Variant::LaneRunner, 42);

        run_ticks(&mut world, &TickInput::default(), 119);
        assert!(world.obstacles.is_empty());

        tick(&mut world, &TickInput::default());
        assert_eq!(world.obstacles.len(), 1);

        // Spawned beyond the leading edge, at one of the two lane slots
        let obstacle = &world.obstacles[0];
        assert!(obstacle.pos.y > world.scroll_offset + 600.0);
        assert!(obstacle.pos.x == 350.0 || obstacle.pos.x == 450.0);
    }

    #[test]
    fn test_overlapping_obstacle_ends_run_immediately() {
        // Scenario B: obstacle dropped directly on the actor
        let mut world = World::new(Difficulty::Kid, Variant::LaneRunner, 42);
        let pos = world.actor.pos;
        world.obstacles.push(Obstacle {
            id: 99,
            kind: ObstacleKind::Germ,
            pos,
            spawned_at_scroll: world.scroll_offset,
        });

        tick(&mut world, &TickInput::default());

        assert_eq!(world.phase, GamePhase::GameOver);
        assert_eq!(world.score, 0);
        let outcome = world.outcome().unwrap();
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.difficulty, Difficulty::Kid);
    }

    #[test]
    fn test_dodged_obstacle_scores_exactly_once() {
        // Scenario C: obstacle in the other lane slot scrolls past untouched
        let mut world = World::new(Difficulty::Kid, Variant::LaneRunner, 42);
        world.spawn_countdown = u32::MAX; // isolate from further spawns
        world.obstacles.push(Obstacle {
            id: 1,
            kind: ObstacleKind::Topping,
            pos: Variant::LaneRunner.compose(450.0, Variant::LaneRunner.spawn_travel(0.0)),
            spawned_at_scroll: 0.0,
        });

        // Closing speed is 6/tick (obstacle moves back while the expiry
        // boundary moves forward); well past expiry by 200 ticks
        let mut scores = Vec::new();
        for _ in 0..200 {
            tick(&mut world, &TickInput::default());
            scores.push(world.score);
        }

        assert_eq!(world.score, 10);
        assert!(world.obstacles.is_empty());
        assert_eq!(world.phase, GamePhase::Running);
        // Score went 0 -> 10 in a single step and never moved again
        assert!(scores.windows(2).all(|w| w[1] - w[0] == 0 || w[1] - w[0] == 10));
    }

    #[test]
    fn test_difficulty_scales_held_key_displacement() {
        // Scenario D: identical input, proportionally different displacement
        let mut keys = KeyboardSource::new();
        keys.key_down(LateralKey::Right);
        let input = TickInput {
            signals: vec![keys.sample(Difficulty::Kid.speed()).unwrap()],
        };
        let mut kid = World::new(Difficulty::Kid, Variant::LaneRunner, 42);
        run_ticks(&mut kid, &input, 4);

        let input = TickInput {
            signals: vec![keys.sample(Difficulty::Adult.speed()).unwrap()],
        };
        let mut adult = World::new(Difficulty::Adult, Variant::LaneRunner, 42);
        run_ticks(&mut adult, &input, 4);

        assert_eq!(kid.actor.pos.x - 400.0, 20.0);
        assert_eq!(adult.actor.pos.x - 400.0, 28.0);
    }

    #[test]
    fn test_terminal_world_is_frozen() {
        let mut world = World::new(Difficulty::Kid, Variant::LaneRunner, 42);
        world.obstacles.push(Obstacle {
            id: 1,
            kind: ObstacleKind::Germ,
            pos: world.actor.pos,
            spawned_at_scroll: 0.0,
        });
        tick(&mut world, &TickInput::default());
        assert!(world.is_over());

        let score = world.score;
        let actor_pos = world.actor.pos;
        let scroll = world.scroll_offset;
        let obstacles = world.obstacles.clone();

        // Frame clock keeps ticking, input keeps arriving; nothing moves.
        // 300 ticks also crosses several spawn periods.
        let input = TickInput {
            signals: vec![ControlSignal::Delta(5.0)],
        };
        run_ticks(&mut world, &input, 300);

        assert_eq!(world.score, score);
        assert_eq!(world.actor.pos, actor_pos);
        assert_eq!(world.scroll_offset, scroll);
        assert_eq!(world.obstacles, obstacles);
    }

    #[test]
    fn test_same_seed_replays_identically() {
        let input = TickInput::default();
        let mut a = World::new(Difficulty::Adult, Variant::LaneRunner, 1234);
        let mut b = World::new(Difficulty::Adult, Variant::LaneRunner, 1234);
        run_ticks(&mut a, &input, 500);
        run_ticks(&mut b, &input, 500);

        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.score, b.score);
        assert_eq!(a.phase, b.phase);
    }

    #[test]
    fn test_side_scroller_obstacles_travel_on_x() {
        let mut world = World::new(Difficulty::Kid, Variant::SideScroller, 42);
        world.spawn_countdown = u32::MAX;
        spawn_obstacle(&mut world);
        let spawn_x = world.obstacles[0].pos.x;
        assert_eq!(spawn_x, 850.0);

        run_ticks(&mut world, &TickInput::default(), 10);
        assert_eq!(world.obstacles[0].pos.x, spawn_x - 30.0);
        // Lateral slot untouched by travel
        assert_eq!(world.obstacles[0].pos.y, 450.0);

        // Actor stays pinned at its fixed travel position
        assert_eq!(world.actor.pos.x, 100.0);
    }

    #[test]
    fn test_side_scroller_expiry_past_left_edge() {
        let mut world = World::new(Difficulty::Kid, Variant::SideScroller, 42);
        world.spawn_countdown = u32::MAX;
        // Actor out of the obstacle's path so it expires instead of hitting
        world.actor.pos.y = 100.0;
        world.obstacles.push(Obstacle {
            id: 1,
            kind: ObstacleKind::Germ,
            pos: glam::Vec2::new(-40.0, 450.0),
            spawned_at_scroll: 0.0,
        });

        // Crosses x = -50 after a handful of ticks
        run_ticks(&mut world, &TickInput::default(), 5);
        assert!(world.obstacles.is_empty());
        assert_eq!(world.score, 10);
    }
}
