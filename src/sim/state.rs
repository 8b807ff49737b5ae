//! Game state and core simulation types
//!
//! Everything a run needs to replay deterministically lives here: the world,
//! its entities, and the seeded RNG all obstacle randomness is drawn from.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended by collision. Terminal: no further state mutation.
    GameOver,
}

/// Difficulty course, chosen in the menu before a run starts.
///
/// Governs only the actor's lateral speed; scroll speed is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Kid,
    Adult,
}

impl Difficulty {
    /// Lateral actor speed in units per tick
    pub fn speed(&self) -> f32 {
        match self {
            Difficulty::Kid => KID_SPEED,
            Difficulty::Adult => ADULT_SPEED,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Kid => "kid",
            Difficulty::Adult => "adult",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "kid" => Some(Difficulty::Kid),
            "adult" => Some(Difficulty::Adult),
            _ => None,
        }
    }
}

/// Lane-runner spawn slots: two discrete lateral offsets from lane center
const LANE_RUNNER_SLOTS: [f32; 2] = [
    VIEW_WIDTH / 2.0 - SPAWN_SLOT_OFFSET,
    VIEW_WIDTH / 2.0 + SPAWN_SLOT_OFFSET,
];

/// Side-scroller spawn slot: obstacles arrive at the actor's starting height
const SIDE_SCROLLER_SLOTS: [f32; 1] = [VIEW_HEIGHT - 150.0];

/// Scene variant: which axis the world travels along and how the lane is
/// bounded. Both variants share the entire run loop; this enum is the only
/// place their geometry differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Vertical scroll: actor moves laterally on x inside a narrow lane,
    /// obstacles approach from beyond the bottom edge of the view.
    #[default]
    LaneRunner,
    /// Horizontal scroll: actor moves laterally on y across the full window
    /// height, obstacles approach from beyond the right edge.
    SideScroller,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::LaneRunner => "lane-runner",
            Variant::SideScroller => "side-scroller",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "lane-runner" => Some(Variant::LaneRunner),
            "side-scroller" => Some(Variant::SideScroller),
            _ => None,
        }
    }

    /// Center of the legal lateral range
    pub fn lane_center(&self) -> f32 {
        match self {
            Variant::LaneRunner => VIEW_WIDTH / 2.0,
            Variant::SideScroller => VIEW_HEIGHT / 2.0,
        }
    }

    /// Full width of the legal lateral range
    pub fn lane_width(&self) -> f32 {
        match self {
            Variant::LaneRunner => LANE_WIDTH,
            Variant::SideScroller => VIEW_HEIGHT,
        }
    }

    /// Inclusive clamp bounds for the actor's lateral coordinate, keeping
    /// the whole actor inside the lane
    pub fn lateral_bounds(&self) -> (f32, f32) {
        let half = ACTOR_SIZE / 2.0;
        let center = self.lane_center();
        let width = self.lane_width();
        (center - width / 2.0 + half, center + width / 2.0 - half)
    }

    /// Lateral coordinate the actor starts a run at
    pub fn initial_lateral(&self) -> f32 {
        match self {
            Variant::LaneRunner => self.lane_center(),
            Variant::SideScroller => VIEW_HEIGHT - 150.0,
        }
    }

    /// Fixed set of lateral positions obstacles may spawn at
    pub fn spawn_slots(&self) -> &'static [f32] {
        match self {
            Variant::LaneRunner => &LANE_RUNNER_SLOTS,
            Variant::SideScroller => &SIDE_SCROLLER_SLOTS,
        }
    }

    /// The actor's travel-axis coordinate for the given scroll offset. The
    /// lane-runner actor rides the scrolling window; the side-scroller actor
    /// sits at a fixed position while obstacles come to it.
    pub fn actor_travel(&self, scroll_offset: f32) -> f32 {
        match self {
            Variant::LaneRunner => scroll_offset + VIEW_HEIGHT - ACTOR_VIEW_INSET,
            Variant::SideScroller => ACTOR_VIEW_INSET,
        }
    }

    /// Travel coordinate for a fresh obstacle: just beyond the leading
    /// visible boundary so it enters the view on the following ticks
    pub fn spawn_travel(&self, scroll_offset: f32) -> f32 {
        match self {
            Variant::LaneRunner => scroll_offset + VIEW_HEIGHT + SPAWN_LEAD,
            Variant::SideScroller => VIEW_WIDTH + SPAWN_LEAD,
        }
    }

    /// True once an obstacle has passed the trailing visible boundary
    pub fn expired(&self, pos: Vec2, scroll_offset: f32) -> bool {
        match self {
            Variant::LaneRunner => pos.y < scroll_offset - EXPIRE_MARGIN,
            Variant::SideScroller => pos.x < -EXPIRE_MARGIN,
        }
    }

    /// Move an obstacle one tick opposite to the travel direction
    pub fn advance_obstacle(&self, pos: &mut Vec2) {
        match self {
            Variant::LaneRunner => pos.y -= SCROLL_SPEED,
            Variant::SideScroller => pos.x -= SCROLL_SPEED,
        }
    }

    /// Build a position from (lateral, travel) coordinates
    pub fn compose(&self, lateral: f32, travel: f32) -> Vec2 {
        match self {
            Variant::LaneRunner => Vec2::new(lateral, travel),
            Variant::SideScroller => Vec2::new(travel, lateral),
        }
    }

    /// The lateral component of a position
    pub fn lateral_of(&self, pos: Vec2) -> f32 {
        match self {
            Variant::LaneRunner => pos.x,
            Variant::SideScroller => pos.y,
        }
    }

    /// Overwrite the lateral component of a position
    pub fn set_lateral(&self, pos: &mut Vec2, lateral: f32) {
        match self {
            Variant::LaneRunner => pos.x = lateral,
            Variant::SideScroller => pos.y = lateral,
        }
    }
}

/// The player-controlled entity. One per run; only its lateral coordinate
/// responds to input, and its travel coordinate is pinned each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
}

impl Actor {
    /// Bounding box for collision and rendering
    pub fn bounds(&self) -> Rect {
        Rect::centered_square(self.pos, ACTOR_SIZE)
    }
}

/// Obstacle appearance. Purely cosmetic: both kinds end the run on contact
/// and score the same when dodged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Germ,
    Topping,
}

/// A hazard scrolling toward the actor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub pos: Vec2,
    /// Scroll offset at spawn time, for debugging/replay inspection
    pub spawned_at_scroll: f32,
}

impl Obstacle {
    /// Bounding box for collision and rendering
    pub fn bounds(&self) -> Rect {
        Rect::centered_square(self.pos, OBSTACLE_SIZE)
    }
}

/// Final result of a run, handed to the menu on game over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub score: u32,
    pub ticks: u64,
    pub difficulty: Difficulty,
}

/// Complete run state (deterministic given seed and input sequence)
#[derive(Debug, Clone)]
pub struct World {
    /// Difficulty chosen at run start; immutable for the run's lifetime
    pub difficulty: Difficulty,
    /// Scene variant; immutable for the run's lifetime
    pub variant: Variant,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Obstacle randomness (spawn slot, kind)
    pub(crate) rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Monotonic world-space travel distance
    pub scroll_offset: f32,
    /// Points from dodged obstacles
    pub score: u32,
    /// Current phase
    pub phase: GamePhase,
    /// The player's actor
    pub actor: Actor,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Ticks until the spawner next fires
    pub spawn_countdown: u32,
    /// Next entity ID
    next_id: u32,
}

impl World {
    /// Create a fresh run in the `Running` phase
    pub fn new(difficulty: Difficulty, variant: Variant, seed: u64) -> Self {
        log::info!(
            "run started: {} {} seed={seed}",
            difficulty.as_str(),
            variant.as_str()
        );
        Self {
            difficulty,
            variant,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            scroll_offset: 0.0,
            score: 0,
            phase: GamePhase::Running,
            actor: Actor {
                pos: variant.compose(variant.initial_lateral(), variant.actor_travel(0.0)),
            },
            obstacles: Vec::new(),
            spawn_countdown: SPAWN_INTERVAL_TICKS,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Whether the run has ended
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Final result, available once the run has ended
    pub fn outcome(&self) -> Option<RunOutcome> {
        match self.phase {
            GamePhase::GameOver => Some(RunOutcome {
                score: self.score,
                ticks: self.time_ticks,
                difficulty: self.difficulty,
            }),
            GamePhase::Running => None,
        }
    }

    /// Start over: returns an independent fresh world with the same
    /// difficulty and variant. The old world is left untouched; callers
    /// discard it.
    pub fn restart(&self, seed: u64) -> World {
        World::new(self.difficulty, self.variant, seed)
    }

    /// Transition to the terminal phase. Repeated calls are a caller bug.
    pub(crate) fn end_run(&mut self) {
        debug_assert_eq!(self.phase, GamePhase::Running, "end_run on a finished run");
        if self.is_over() {
            log::warn!("end_run called on a finished run; ignoring");
            return;
        }
        self.phase = GamePhase::GameOver;
        log::info!("game over: score={} ticks={}", self.score, self.time_ticks);
    }
}
