//! The in-memory game state container.
//!
//! Owns the clock, config, players, units, map, stats, and the
//! display message buffer. Executions receive `&mut Game` from the
//! executor and go through the narrow methods here; they never hold
//! references into the arenas across ticks, only ids.

mod map;
mod player;
mod unit;

pub use map::GameMap;
pub use player::Player;
pub use unit::{Unit, UnitType};

use crate::{
    clock::GameClock,
    config::GameConfig,
    error::{GameError, GameResult},
    message::{DisplayMessage, MessageCategory},
    stats::GameStats,
    types::{Gems, PlayerId, Tick, TileRef, UnitId},
};
use std::collections::BTreeMap;

pub struct Game {
    clock: GameClock,
    config: GameConfig,
    map: GameMap,
    players: BTreeMap<PlayerId, Player>,
    units: BTreeMap<UnitId, Unit>,
    next_unit_id: UnitId,
    stats: GameStats,
    messages: Vec<DisplayMessage>,
}

impl Game {
    pub fn new(config: GameConfig, map: GameMap) -> Self {
        Self::with_clock(config, map, GameClock::new())
    }

    /// Build a game whose clock starts at an arbitrary tick. Tests use
    /// this to pin down init-time seeds and check offsets.
    pub fn with_clock(config: GameConfig, map: GameMap, clock: GameClock) -> Self {
        Self {
            clock,
            config,
            map,
            players: BTreeMap::new(),
            units: BTreeMap::new(),
            next_unit_id: 1,
            stats: GameStats::new(),
            messages: Vec::new(),
        }
    }

    pub fn add_player(&mut self, id: PlayerId, name: impl Into<String>) {
        self.players.insert(id, Player::new(id, name));
    }

    // ── Clock ─────────────────────────────────────────────────────

    /// Current global tick.
    pub fn ticks(&self) -> Tick {
        self.clock.ticks()
    }

    /// Advance the clock one tick. Called by the driver, exactly once
    /// per simulation step.
    pub fn advance_tick(&mut self) -> Tick {
        self.clock.advance()
    }

    /// True while players are still spawning in. Most executions do
    /// not run during this window.
    pub fn in_spawn_phase(&self) -> bool {
        self.clock.ticks() < self.config.spawn_phase_ticks
    }

    // ── Config / stats / messages ─────────────────────────────────

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut GameStats {
        &mut self.stats
    }

    /// Queue a user-facing message for the display layer.
    pub fn display_message(
        &mut self,
        text: impl Into<String>,
        category: MessageCategory,
        player: PlayerId,
        amount: Gems,
    ) {
        self.messages.push(DisplayMessage {
            tick: self.clock.ticks(),
            text: text.into(),
            category,
            player,
            amount,
        });
    }

    /// All messages queued so far, in emission order.
    pub fn messages(&self) -> &[DisplayMessage] {
        &self.messages
    }

    /// Hand queued messages to the display layer and clear the buffer.
    pub fn drain_messages(&mut self) -> Vec<DisplayMessage> {
        std::mem::take(&mut self.messages)
    }

    // ── Players ───────────────────────────────────────────────────

    pub fn player(&self, id: PlayerId) -> GameResult<&Player> {
        self.players.get(&id).ok_or(GameError::UnknownPlayer(id))
    }

    /// Credit gems to a player.
    pub fn add_gems(&mut self, player: PlayerId, amount: Gems) -> GameResult<()> {
        self.players
            .get_mut(&player)
            .ok_or(GameError::UnknownPlayer(player))?
            .add_gems(amount);
        Ok(())
    }

    // ── Units / construction ──────────────────────────────────────

    pub fn unit(&self, id: UnitId) -> GameResult<&Unit> {
        self.units.get(&id).ok_or(GameError::UnknownUnit(id))
    }

    pub fn unit_mut(&mut self, id: UnitId) -> GameResult<&mut Unit> {
        self.units.get_mut(&id).ok_or(GameError::UnknownUnit(id))
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut GameMap {
        &mut self.map
    }

    /// Validate construction of `unit_type` at `tile` for `player`.
    /// Returns the spawn tile when placement is currently valid.
    pub fn can_build(
        &self,
        player: PlayerId,
        _unit_type: UnitType,
        tile: TileRef,
    ) -> Option<TileRef> {
        if !self.players.contains_key(&player) {
            return None;
        }
        if self.map.is_buildable(tile) {
            Some(tile)
        } else {
            None
        }
    }

    /// Construct a unit at a spawn tile previously validated by
    /// `can_build`. The new unit starts active at level 1.
    pub fn build_unit(
        &mut self,
        player: PlayerId,
        unit_type: UnitType,
        spawn: TileRef,
    ) -> GameResult<UnitId> {
        if !self.players.contains_key(&player) {
            return Err(GameError::UnknownPlayer(player));
        }
        let id = self.next_unit_id;
        self.next_unit_id += 1;
        self.units.insert(id, Unit::new(id, unit_type, player, spawn));
        self.map.occupy(spawn);
        log::debug!("tick={} built {unit_type:?} unit {id} for player {player} at tile {spawn}", self.ticks());
        Ok(id)
    }

    /// Destroy a unit and free its tile. Called by game systems
    /// outside the execution core (combat, demolition).
    pub fn destroy_unit(&mut self, id: UnitId) -> GameResult<()> {
        let unit = self.units.get_mut(&id).ok_or(GameError::UnknownUnit(id))?;
        unit.deactivate();
        let tile = unit.tile();
        self.map.release(tile);
        Ok(())
    }
}
