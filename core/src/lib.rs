//! gemmine-core — a tick-driven game simulation core.
//!
//! The executor advances one global tick at a time and drives every
//! registered [`execution::Execution`] synchronously inside the tick
//! boundary. The gem mine execution is the resource producer built on
//! that contract: it constructs its structure lazily, follows
//! ownership changes, and rolls for yield on a fixed 10-tick phase.
//!
//! All randomness is deterministic: streams are seeded from tick
//! values and a run is fully reproducible from its starting state.

pub mod clock;
pub mod config;
pub mod error;
pub mod execution;
pub mod executor;
pub mod game;
pub mod gem_mine_execution;
pub mod message;
pub mod rng;
pub mod stats;
pub mod types;
