//! The executor — drives every registered execution, one global tick
//! at a time.
//!
//! RULES:
//!   - Single-threaded: executions run synchronously, in registration
//!     order, within the tick boundary. No execution suspends mid-tick.
//!   - An execution added during a run is `init`-ed at the start of
//!     the next tick, before any execution's `tick` for that tick.
//!   - `is_active()` is polled every tick; an execution that reports
//!     false is removed and never scheduled again.
//!   - While the game is in its spawn phase, executions with
//!     `active_during_spawn_phase() == false` are skipped entirely.

use crate::{
    error::GameResult,
    execution::Execution,
    game::Game,
    types::Tick,
};

pub struct Executor {
    game: Game,
    executions: Vec<Box<dyn Execution>>,
    pending: Vec<Box<dyn Execution>>,
}

impl Executor {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            executions: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Number of executions still scheduled (pending ones included).
    pub fn active_executions(&self) -> usize {
        self.executions.len() + self.pending.len()
    }

    /// Schedule a new execution. It is `init`-ed at the start of the
    /// next tick and ticked from then on.
    pub fn add_execution(&mut self, execution: Box<dyn Execution>) {
        self.pending.push(execution);
    }

    /// Advance one global tick: init newly added executions, tick
    /// every active one, then drop the retired.
    pub fn tick(&mut self) -> GameResult<Tick> {
        let current_tick = self.game.advance_tick();

        for mut execution in self.pending.drain(..) {
            execution.init(&mut self.game, current_tick);
            log::debug!("tick={current_tick} init execution '{}'", execution.name());
            self.executions.push(execution);
        }

        let in_spawn_phase = self.game.in_spawn_phase();
        for execution in &mut self.executions {
            if !execution.is_active() {
                continue;
            }
            if in_spawn_phase && !execution.active_during_spawn_phase() {
                continue;
            }
            execution.tick(&mut self.game, current_tick)?;
        }

        // Retirement is polled once per tick, after all executions ran.
        let before = self.executions.len();
        self.executions.retain(|execution| execution.is_active());
        let retired = before - self.executions.len();
        if retired > 0 {
            log::debug!("tick={current_tick} retired {retired} execution(s)");
        }

        Ok(current_tick)
    }

    /// Run n ticks in a loop. Used for testing and headless runs.
    pub fn run_ticks(&mut self, n: u64) -> GameResult<()> {
        for _ in 0..n {
            self.tick()?;
        }
        Ok(())
    }
}
