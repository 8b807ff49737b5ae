//! Input normalization
//!
//! Raw device events (key up/down, pointer moves, device-orientation) arrive
//! out of band from the shell. Each producer turns what it saw since the
//! last tick into at most one [`ControlSignal`] on the actor's lateral axis,
//! and the shell collects those into a [`TickInput`] consumed at tick start.
//! Keeping the tick function fed from an explicit queue (instead of letting
//! handlers poke the actor directly) is what makes runs replayable.

use serde::{Deserialize, Serialize};

use super::state::{Actor, Variant};
use crate::consts::TILT_DIVISOR;

/// A normalized directive for the actor's lateral axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControlSignal {
    /// Relative lateral movement, already scaled by difficulty speed
    Delta(f32),
    /// Absolute lateral target (pointer position); applied without smoothing
    Target(f32),
}

impl Actor {
    /// Apply one signal to the lateral coordinate, then clamp to the lane.
    /// Clamping is unconditional, including after absolute pointer jumps;
    /// out-of-range input is silently pulled back, never rejected.
    pub fn apply_signal(&mut self, signal: ControlSignal, variant: Variant) {
        let mut lateral = variant.lateral_of(self.pos);
        match signal {
            ControlSignal::Delta(d) => lateral += d,
            ControlSignal::Target(t) => lateral = t,
        }
        let (lo, hi) = variant.lateral_bounds();
        variant.set_lateral(&mut self.pos, lateral.clamp(lo, hi));
    }
}

/// All control signals to apply on one tick, in arrival order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub signals: Vec<ControlSignal>,
}

impl TickInput {
    /// Drain every registered producer into one tick's worth of signals
    pub fn gather(sources: &mut [&mut dyn ControlSource], speed: f32) -> Self {
        let mut input = TickInput::default();
        for source in sources {
            if let Some(signal) = source.sample(speed) {
                input.signals.push(signal);
            }
        }
        input
    }
}

/// A producer of control signals. Implementations hold whatever raw event
/// state they need; `sample` is called once per tick with the run's
/// difficulty speed and returns the signal for that tick, if any.
pub trait ControlSource {
    fn sample(&mut self, speed: f32) -> Option<ControlSignal>;
}

/// Held-key direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LateralKey {
    Left,
    Right,
}

/// Discrete key state: while a direction key is held, emit a constant
/// delta of one speed unit per tick. Both held cancel out.
#[derive(Debug, Clone, Default)]
pub struct KeyboardSource {
    left_held: bool,
    right_held: bool,
}

impl KeyboardSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: LateralKey) {
        match key {
            LateralKey::Left => self.left_held = true,
            LateralKey::Right => self.right_held = true,
        }
    }

    pub fn key_up(&mut self, key: LateralKey) {
        match key {
            LateralKey::Left => self.left_held = false,
            LateralKey::Right => self.right_held = false,
        }
    }
}

impl ControlSource for KeyboardSource {
    fn sample(&mut self, speed: f32) -> Option<ControlSignal> {
        let direction = match (self.left_held, self.right_held) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => return None,
        };
        Some(ControlSignal::Delta(direction * speed))
    }
}

/// Pointer absolute position: each pointer-move stores the coordinate on
/// the controlled axis; the next tick consumes it as an absolute target.
/// Moves between ticks overwrite each other (only the latest matters).
#[derive(Debug, Clone, Default)]
pub struct PointerSource {
    pending: Option<f32>,
}

impl PointerSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_moved(&mut self, lateral: f32) {
        self.pending = Some(lateral);
    }
}

impl ControlSource for PointerSource {
    fn sample(&mut self, _speed: f32) -> Option<ControlSignal> {
        self.pending.take().map(ControlSignal::Target)
    }
}

/// Device tilt: orientation events deliver a gamma angle in degrees
/// (standard ±90° range); each sampled event becomes a delta of
/// `gamma * speed / 10`. Capability is detected once by the shell at run
/// start; an unavailable sensor leaves the producer permanently inert.
#[derive(Debug, Clone)]
pub struct TiltSource {
    available: bool,
    pending: Option<f32>,
}

impl TiltSource {
    pub fn new(available: bool) -> Self {
        if !available {
            log::debug!("device orientation unavailable; tilt control inert");
        }
        Self {
            available,
            pending: None,
        }
    }

    /// Record a device-orientation event (gamma, degrees)
    pub fn orientation_changed(&mut self, gamma: f32) {
        if self.available {
            self.pending = Some(gamma);
        }
    }
}

impl ControlSource for TiltSource {
    fn sample(&mut self, speed: f32) -> Option<ControlSignal> {
        self.pending
            .take()
            .map(|gamma| ControlSignal::Delta(gamma * speed / TILT_DIVISOR))
    }
}
