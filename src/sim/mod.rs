//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, fixed per-tick units
//! - Seeded RNG only
//! - Stable iteration order (obstacles in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod control;
pub mod state;
pub mod tick;

pub use collision::{Rect, rects_overlap};
pub use control::{
    ControlSignal, ControlSource, KeyboardSource, LateralKey, PointerSource, TickInput, TiltSource,
};
pub use state::{
    Actor, Difficulty, GamePhase, Obstacle, ObstacleKind, RunOutcome, Variant, World,
};
pub use tick::{spawn_obstacle, tick};
