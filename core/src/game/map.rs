//! The map grid, reduced to what construction validation needs:
//! which tiles exist, which are blocked terrain, which are occupied.

use crate::types::TileRef;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct GameMap {
    width: u32,
    height: u32,
    blocked: HashSet<TileRef>,
    occupied: HashSet<TileRef>,
}

impl GameMap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            blocked: HashSet::new(),
            occupied: HashSet::new(),
        }
    }

    pub fn tile(&self, x: u32, y: u32) -> TileRef {
        y * self.width + x
    }

    /// Mark a tile as unbuildable terrain (water, mountain).
    pub fn block(&mut self, tile: TileRef) {
        self.blocked.insert(tile);
    }

    /// A tile is buildable when it exists, is not blocked terrain,
    /// and no structure stands on it yet.
    pub fn is_buildable(&self, tile: TileRef) -> bool {
        tile < self.width * self.height
            && !self.blocked.contains(&tile)
            && !self.occupied.contains(&tile)
    }

    pub(crate) fn occupy(&mut self, tile: TileRef) {
        self.occupied.insert(tile);
    }

    pub(crate) fn release(&mut self, tile: TileRef) {
        self.occupied.remove(&tile);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buildability_rules() {
        let mut map = GameMap::new(4, 4);
        let open = map.tile(1, 1);
        let water = map.tile(2, 2);
        map.block(water);

        assert!(map.is_buildable(open));
        assert!(!map.is_buildable(water));
        assert!(!map.is_buildable(100)); // out of bounds

        map.occupy(open);
        assert!(!map.is_buildable(open));
        map.release(open);
        assert!(map.is_buildable(open));
    }
}
