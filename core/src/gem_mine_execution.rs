//! Gem mine execution — one instance per mine, scheduled by the
//! executor for the whole life of the structure.
//!
//! Lifecycle: lazily constructs its mine on the first tick, then rolls
//! for gem yield once every 10 ticks until the mine is destroyed or
//! construction turns out to be impossible. Both of those retire the
//! execution permanently.

use crate::{
    error::{GameError, GameResult},
    execution::Execution,
    game::{Game, UnitType},
    message::MessageCategory,
    rng::PseudoRandom,
    types::{PlayerId, Tick, TileRef, UnitId},
};

pub struct GemMineExecution {
    player: PlayerId,
    tile: TileRef,
    active: bool,
    mine: Option<UnitId>,
    random: Option<PseudoRandom>,
    check_offset: Option<Tick>,
}

impl GemMineExecution {
    const NAME: &'static str = "gem_mine";

    pub fn new(player: PlayerId, tile: TileRef) -> Self {
        Self {
            player,
            tile,
            active: true,
            mine: None,
            random: None,
            check_offset: None,
        }
    }

    /// The player currently credited by this execution. Tracks the
    /// mine's owner, tick by tick.
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// The mine unit, once construction has succeeded.
    pub fn mine(&self) -> Option<UnitId> {
        self.mine
    }
}

impl Execution for GemMineExecution {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn init(&mut self, game: &mut Game, _tick: Tick) {
        // Seed and offset derive from the clock at init time and are
        // never recomputed. The offset spreads instances across the
        // 10-tick cycle instead of synchronizing them all.
        self.random = Some(PseudoRandom::new(game.ticks()));
        self.check_offset = Some(game.ticks() % 10);
    }

    fn tick(&mut self, game: &mut Game, _tick: Tick) -> GameResult<()> {
        let Some(check_offset) = self.check_offset else {
            return Err(GameError::ExecutionNotInitialized { name: Self::NAME });
        };

        // Retirement is terminal. The executor stops scheduling us,
        // but a stray call must still have no effect.
        if !self.active {
            return Ok(());
        }

        let mine_id = match self.mine {
            Some(id) => id,
            None => {
                let Some(spawn) = game.can_build(self.player, UnitType::GemMine, self.tile)
                else {
                    log::warn!(
                        "player {} cannot build gem mine at tile {}",
                        self.player,
                        self.tile
                    );
                    self.active = false;
                    return Ok(());
                };
                let id = game.build_unit(self.player, UnitType::GemMine, spawn)?;
                self.mine = Some(id);
                id
            }
        };

        let mine = game.unit(mine_id)?;
        if !mine.is_active() {
            self.active = false;
            return Ok(());
        }

        // Ownership can change out from under us (capture). Re-sync
        // every tick so yield always credits the current owner.
        if self.player != mine.owner() {
            self.player = mine.owner();
        }

        // Only check every 10 ticks for performance.
        if (game.ticks() + check_offset) % 10 != 0 {
            return Ok(());
        }

        let mine_level = mine.level();
        let base_gem_rate = game.config().gem_mine_rate(mine_level);

        let random = self
            .random
            .as_mut()
            .ok_or(GameError::ExecutionNotInitialized { name: Self::NAME })?;
        if random.chance(base_gem_rate) {
            let gems_generated = game.config().gem_mine_output(mine_level);
            game.add_gems(self.player, gems_generated)?;
            game.stats_mut().record_gems_mined(self.player, gems_generated);
            game.display_message(
                format!("Mined {gems_generated} gems from gem mine"),
                MessageCategory::GemsMined,
                self.player,
                gems_generated,
            );
        }

        Ok(())
    }

    fn is_active(&self) -> bool {
        self.active
    }

    /// Gem mines never operate while players are still spawning in.
    fn active_during_spawn_phase(&self) -> bool {
        false
    }
}
