//! Constructed structures.
//!
//! Units are mutated in place by game systems outside this crate's
//! executions (capture flips the owner, upgrades raise the level,
//! combat deactivates). Executions only ever read them, except through
//! `Game::build_unit`.

use crate::types::{PlayerId, TileRef, UnitId};
use serde::{Deserialize, Serialize};

/// Structure kinds the game knows how to build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnitType {
    GemMine,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    id: UnitId,
    unit_type: UnitType,
    owner: PlayerId,
    tile: TileRef,
    level: u32,
    active: bool,
}

impl Unit {
    pub(crate) fn new(id: UnitId, unit_type: UnitType, owner: PlayerId, tile: TileRef) -> Self {
        Self {
            id,
            unit_type,
            owner,
            tile,
            level: 1,
            active: true,
        }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn unit_type(&self) -> UnitType {
        self.unit_type
    }

    /// False once the unit has been destroyed. A destroyed unit never
    /// comes back.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn tile(&self) -> TileRef {
        self.tile
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Transfer ownership (capture). Called by game systems outside
    /// the execution core.
    pub fn set_owner(&mut self, owner: PlayerId) {
        self.owner = owner;
    }

    /// Raise the unit's level (upgrade).
    pub fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    /// Destroy the unit. Terminal.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
