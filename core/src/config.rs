//! Game balance configuration.
//!
//! The yield table is keyed by mine level. Levels are 1-based; a
//! level beyond the table clamps to the last entry so an over-leveled
//! mine never panics, it just stops improving.

use crate::types::{Gems, Tick};
use serde::{Deserialize, Serialize};

/// Per-level gem mine balance entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GemMineLevel {
    /// Probability in [0,1] that a qualifying tick yields gems.
    pub rate: f64,
    /// Gems credited on a successful yield roll.
    pub output: Gems,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Ticks at the start of a game during which players spawn in.
    /// Executions that opt out of the spawn phase are not ticked
    /// while `ticks < spawn_phase_ticks`.
    pub spawn_phase_ticks: Tick,
    /// Gem mine yield table, indexed by `level - 1`.
    pub gem_mine_levels: Vec<GemMineLevel>,
}

impl GameConfig {
    /// Parse a config from its JSON representation.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Base yield probability for a mine of the given level.
    pub fn gem_mine_rate(&self, level: u32) -> f64 {
        self.level_entry(level).rate
    }

    /// Gems produced by one successful yield at the given level.
    pub fn gem_mine_output(&self, level: u32) -> Gems {
        self.level_entry(level).output
    }

    fn level_entry(&self, level: u32) -> &GemMineLevel {
        let idx = (level.max(1) as usize - 1).min(self.gem_mine_levels.len() - 1);
        &self.gem_mine_levels[idx]
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            spawn_phase_ticks: 0,
            gem_mine_levels: vec![
                GemMineLevel { rate: 0.20, output: 10 },
                GemMineLevel { rate: 0.25, output: 18 },
                GemMineLevel { rate: 0.30, output: 30 },
                GemMineLevel { rate: 0.35, output: 48 },
                GemMineLevel { rate: 0.40, output: 75 },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_clamps_to_table_bounds() {
        let config = GameConfig::default();
        // Level 0 reads the level-1 entry.
        assert_eq!(config.gem_mine_output(0), config.gem_mine_output(1));
        // Past the end of the table, the last entry applies.
        assert_eq!(config.gem_mine_output(99), config.gem_mine_output(5));
    }

    #[test]
    fn parses_from_json() {
        let json = r#"{
            "spawn_phase_ticks": 50,
            "gem_mine_levels": [
                { "rate": 1.0, "output": 5 }
            ]
        }"#;
        let config = GameConfig::from_json_str(json).expect("parse");
        assert_eq!(config.spawn_phase_ticks, 50);
        assert_eq!(config.gem_mine_rate(1), 1.0);
        assert_eq!(config.gem_mine_output(1), 5);
    }
}
