//! Run statistics.
//!
//! Cumulative counters only — the stats object never feeds back into
//! simulation decisions, so recording order can't affect determinism
//! of anything but the stats themselves.

use crate::types::{Gems, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStats {
    gems_mined: BTreeMap<PlayerId, Gems>,
    yield_events: u64,
}

impl GameStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successful gem mine yield.
    pub fn record_gems_mined(&mut self, player: PlayerId, amount: Gems) {
        *self.gems_mined.entry(player).or_insert(0) += amount;
        self.yield_events += 1;
    }

    /// Total gems mined by one player over the whole run.
    pub fn gems_mined_by(&self, player: PlayerId) -> Gems {
        self.gems_mined.get(&player).copied().unwrap_or(0)
    }

    /// Number of successful yield rolls recorded, all players.
    pub fn yield_events(&self) -> u64 {
        self.yield_events
    }

    /// Per-player totals in id order, for end-of-run summaries.
    pub fn per_player(&self) -> impl Iterator<Item = (PlayerId, Gems)> + '_ {
        self.gems_mined.iter().map(|(id, gems)| (*id, *gems))
    }
}
