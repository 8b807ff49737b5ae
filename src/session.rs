//! Menu <-> run state machine
//!
//! Scene transitions are explicit state transitions on an owned value: the
//! session either shows the menu or owns exactly one live [`World`]. There
//! is no global scene registry; the shell holds the session and drives it.

use crate::config::RunConfig;
use crate::sim::{RunOutcome, World};

/// What the player is currently looking at
#[derive(Debug)]
pub enum Screen {
    /// Difficulty selection
    Menu,
    /// An active (or just-ended) run
    Run(World),
}

/// Owns the current screen and the configuration runs start from
#[derive(Debug)]
pub struct Session {
    screen: Screen,
    config: RunConfig,
}

impl Session {
    /// Start at the menu with default configuration
    pub fn new() -> Self {
        Self {
            screen: Screen::Menu,
            config: RunConfig::default(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// The live world, if a run is on screen
    pub fn world(&self) -> Option<&World> {
        match &self.screen {
            Screen::Run(world) => Some(world),
            Screen::Menu => None,
        }
    }

    pub fn world_mut(&mut self) -> Option<&mut World> {
        match &mut self.screen {
            Screen::Run(world) => Some(world),
            Screen::Menu => None,
        }
    }

    /// Leave the menu and start a run with the given configuration.
    /// `fallback_seed` seeds the run unless the config pins a seed.
    pub fn start_run(&mut self, config: RunConfig, fallback_seed: u64) {
        self.config = config;
        self.screen = Screen::Run(config.start(fallback_seed));
    }

    /// Replace a finished run with a fresh one using the same configuration
    /// (the "play again" button). No-op while a run is still live or on the
    /// menu screen.
    pub fn retry(&mut self, seed: u64) {
        if let Screen::Run(world) = &self.screen {
            if world.is_over() {
                let fresh = world.restart(seed);
                self.screen = Screen::Run(fresh);
            }
        }
    }

    /// Return to difficulty selection, reporting the outcome of a finished
    /// run. Also abandons a live run (the world is simply dropped).
    pub fn to_menu(&mut self) -> Option<RunOutcome> {
        let outcome = self.world().and_then(World::outcome);
        self.screen = Screen::Menu;
        outcome
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
