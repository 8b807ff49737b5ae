//! Noodle Dash - a scrolling-lane obstacle dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, scoring)
//! - `config`: Run configuration (difficulty, scene variant, seed)
//! - `session`: Menu <-> run state machine for the embedding shell
//!
//! Rendering and raw input devices live outside this crate: a shell feeds
//! events into the control producers, calls [`sim::tick`] once per frame, and
//! draws from the [`sim::World`]'s public state.

pub mod config;
pub mod session;
pub mod sim;

pub use config::RunConfig;
pub use session::Session;
pub use sim::{Difficulty, GamePhase, RunOutcome, Variant, World};

/// Game tuning constants
pub mod consts {
    /// Nominal tick rate (one tick per rendered frame)
    pub const TICK_HZ: u32 = 60;
    /// Ticks between obstacle spawns (2 seconds at 60 Hz)
    pub const SPAWN_INTERVAL_TICKS: u32 = 2 * TICK_HZ;

    /// Visible region dimensions (logical units)
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;

    /// Width of the lane the actor may move within
    pub const LANE_WIDTH: f32 = 200.0;
    /// Actor's distance from the trailing edge of the view on the travel axis
    pub const ACTOR_VIEW_INSET: f32 = 100.0;

    /// Actor bounding box edge length
    pub const ACTOR_SIZE: f32 = 48.0;
    /// Obstacle bounding box edge length
    pub const OBSTACLE_SIZE: f32 = 48.0;

    /// World travel distance per tick (independent of difficulty)
    pub const SCROLL_SPEED: f32 = 3.0;
    /// Lateral offset of the two lane-runner spawn slots from lane center
    pub const SPAWN_SLOT_OFFSET: f32 = 50.0;
    /// How far beyond the leading view edge obstacles spawn
    pub const SPAWN_LEAD: f32 = 50.0;
    /// How far past the trailing view edge an obstacle expires
    pub const EXPIRE_MARGIN: f32 = 50.0;

    /// Points awarded per obstacle dodged
    pub const SCORE_PER_DODGE: u32 = 10;

    /// Divisor in the tilt-to-delta mapping: delta = gamma * speed / TILT_DIVISOR
    pub const TILT_DIVISOR: f32 = 10.0;

    /// Actor lateral speed per tick, kid difficulty
    pub const KID_SPEED: f32 = 5.0;
    /// Actor lateral speed per tick, adult difficulty
    pub const ADULT_SPEED: f32 = 7.0;
}
