//! Map walkability grid and reachability queries.
//!
//! The embedding game owns real terrain and pathfinding; this grid is the
//! seam the module consumes: which cells exist, which are standable, and
//! whether one cell can be walked to from another.

use std::collections::{HashSet, VecDeque};

use bevy_ecs::resource::Resource;
use serde::{Deserialize, Serialize};

/// A map cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn dist_sq(self, other: Cell) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dy = i64::from(self.y - other.y);
        dx * dx + dy * dy
    }

    fn neighbors4(self) -> [Cell; 4] {
        [
            Cell::new(self.x, self.y - 1),
            Cell::new(self.x - 1, self.y),
            Cell::new(self.x + 1, self.y),
            Cell::new(self.x, self.y + 1),
        ]
    }
}

/// Rectangular walkability grid with 4-directional BFS reachability.
#[derive(Resource, Debug, Clone)]
pub struct MapGrid {
    width: i32,
    height: i32,
    blocked: HashSet<Cell>,
}

impl MapGrid {
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "degenerate map {width}x{height}");
        Self {
            width,
            height,
            blocked: HashSet::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn block(&mut self, cell: Cell) {
        self.blocked.insert(cell);
    }

    pub fn unblock(&mut self, cell: Cell) {
        self.blocked.remove(&cell);
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    pub fn walkable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.blocked.contains(&cell)
    }

    /// Whether `to` can be walked to from `from` over walkable cells.
    /// A cell is always reachable from itself.
    pub fn reachable(&self, from: Cell, to: Cell) -> bool {
        if from == to {
            return true;
        }
        if !self.in_bounds(from) || !self.walkable(to) {
            return false;
        }

        let mut visited = HashSet::from([from]);
        let mut frontier = VecDeque::from([from]);
        while let Some(cell) = frontier.pop_front() {
            for next in cell.neighbors4() {
                if next == to {
                    return true;
                }
                if self.walkable(next) && visited.insert(next) {
                    frontier.push_back(next);
                }
            }
        }
        false
    }

    /// Nearest walkable cell to `origin`, scanning outward ring by ring in a
    /// fixed order. Falls back to `origin` itself when nothing nearby is free.
    pub fn drop_spot_near(&self, origin: Cell) -> Cell {
        if self.walkable(origin) {
            return origin;
        }
        let max_radius = self.width.max(self.height);
        for radius in 1..=max_radius {
            let mut ring: Vec<Cell> = Vec::new();
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    if dx.abs().max(dy.abs()) == radius {
                        ring.push(origin.offset((dx, dy)));
                    }
                }
            }
            ring.sort();
            if let Some(cell) = ring.into_iter().find(|c| self.walkable(*c)) {
                return cell;
            }
        }
        origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_is_not_walkable() {
        let map = MapGrid::new(4, 4);
        assert!(map.walkable(Cell::new(0, 0)));
        assert!(!map.walkable(Cell::new(4, 0)));
        assert!(!map.walkable(Cell::new(-1, 2)));
    }

    #[test]
    fn reachable_across_open_ground() {
        let map = MapGrid::new(8, 8);
        assert!(map.reachable(Cell::new(0, 0), Cell::new(7, 7)));
    }

    #[test]
    fn wall_blocks_reachability() {
        let mut map = MapGrid::new(5, 5);
        for y in 0..5 {
            map.block(Cell::new(2, y));
        }
        assert!(!map.reachable(Cell::new(0, 2), Cell::new(4, 2)));

        // Open a door
        map.unblock(Cell::new(2, 3));
        assert!(map.reachable(Cell::new(0, 2), Cell::new(4, 2)));
    }

    #[test]
    fn cell_reachable_from_itself() {
        let mut map = MapGrid::new(3, 3);
        map.block(Cell::new(1, 1));
        assert!(map.reachable(Cell::new(1, 1), Cell::new(1, 1)));
    }

    #[test]
    fn drop_spot_prefers_origin() {
        let map = MapGrid::new(4, 4);
        assert_eq!(map.drop_spot_near(Cell::new(2, 2)), Cell::new(2, 2));
    }

    #[test]
    fn drop_spot_scans_outward_when_blocked() {
        let mut map = MapGrid::new(4, 4);
        map.block(Cell::new(2, 2));
        let spot = map.drop_spot_near(Cell::new(2, 2));
        assert_ne!(spot, Cell::new(2, 2));
        assert!(map.walkable(spot));
        assert!(spot.dist_sq(Cell::new(2, 2)) <= 2);
    }
}
