//! Execution trait — the uniform shape of every per-tick task.
//!
//! RULE: The executor drives every registered execution through this
//! contract and nothing else. `init` is called exactly once, before
//! any `tick`; ticks arrive in strictly increasing global-tick order.
//! An execution whose `is_active()` has gone false is dropped from the
//! schedule permanently.

use crate::{error::GameResult, game::Game, types::Tick};

/// The contract every execution must fulfill.
pub trait Execution {
    /// Unique stable name for this execution kind. Used in logs and
    /// error reports.
    fn name(&self) -> &'static str;

    /// Called once by the executor when the execution is first
    /// scheduled. `tick` is the current global tick; clock-derived
    /// state (random seeds, phase offsets) is bound here and never
    /// recomputed.
    fn init(&mut self, game: &mut Game, tick: Tick);

    /// Called once per global tick while `is_active()` is true.
    ///
    /// Returns `Err` only for fatal contract violations; expected
    /// outcomes such as "nothing to do this tick" or permanent
    /// retirement are signaled through `is_active()` going false.
    fn tick(&mut self, game: &mut Game, tick: Tick) -> GameResult<()>;

    /// False once this execution is permanently done. Polled by the
    /// executor every tick; false is terminal.
    fn is_active(&self) -> bool;

    /// Whether this execution runs during the pre-game spawn phase.
    /// Most do; resource producers opt out.
    fn active_during_spawn_phase(&self) -> bool {
        true
    }
}
