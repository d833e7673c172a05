//! Shared primitive types used across the entire simulation.

/// A simulation tick. The engine advances one tick at a time,
/// process-wide, for every active execution.
pub type Tick = u64;

/// A stable, unique identifier for a player.
pub type PlayerId = u32;

/// A stable, unique identifier for a unit (a constructed structure).
pub type UnitId = u32;

/// A reference to one map tile, encoded as an index into the map grid.
pub type TileRef = u32;

/// A gem amount. Gems are the renewable resource mined by gem mines.
pub type Gems = u64;
