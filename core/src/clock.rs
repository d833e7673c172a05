//! Simulation clock — owns the global tick counter.

use crate::types::Tick;
use serde::{Deserialize, Serialize};

/// Monotonically increasing tick counter. Advanced only by the
/// executor, exactly once per simulation step; everything else
/// reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameClock {
    current_tick: Tick,
}

impl GameClock {
    pub fn new() -> Self {
        Self { current_tick: 0 }
    }

    /// Start at an arbitrary tick. Used by tests that need a specific
    /// init-time seed or check offset.
    pub fn starting_at(tick: Tick) -> Self {
        Self { current_tick: tick }
    }

    pub fn ticks(&self) -> Tick {
        self.current_tick
    }

    /// Advance one tick. Returns the new tick number.
    pub fn advance(&mut self) -> Tick {
        self.current_tick += 1;
        self.current_tick
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}
