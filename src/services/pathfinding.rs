//! Tile pathfinding.
//!
//! The rules engine only talks to the [`Pathfinder`] trait. [`GridPathfinder`]
//! is the bundled breadth-first implementation over a walkability grid.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::models::constants::{offset_tile, NEIGHBOUR_OFFSETS};
use crate::models::position::TilePos;

/// A tile path. Includes both endpoints; empty when start and goal coincide.
pub type Path = Vec<TilePos>;

/// Shortest-path queries over a grid of walkability codes.
pub trait Pathfinder {
    /// Replace the grid. Rows are indexed by `y`, columns by `x`.
    fn set_grid(&mut self, grid: Vec<Vec<u8>>);
    /// Codes a path may pass through.
    fn set_acceptable_tiles(&mut self, codes: &[u8]);
    /// Treat `tile` as blocked until the avoid set is cleared.
    fn avoid_additional_point(&mut self, tile: TilePos);
    fn stop_avoiding_all_additional_points(&mut self);
    /// Shortest path from `from` to `to`, or `None` when unreachable.
    fn find_path(&mut self, from: TilePos, to: TilePos) -> Option<Path>;
}

/// 4-connected breadth-first search.
#[derive(Debug, Clone, Default)]
pub struct GridPathfinder {
    grid: Vec<Vec<u8>>,
    acceptable: HashSet<u8>,
    avoided: HashSet<TilePos>,
}

impl GridPathfinder {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_walkable(&self, tile: TilePos) -> bool {
        if tile.x < 0 || tile.y < 0 || self.avoided.contains(&tile) {
            return false;
        }
        self.grid
            .get(tile.y as usize)
            .and_then(|row| row.get(tile.x as usize))
            .is_some_and(|code| self.acceptable.contains(code))
    }

    fn bfs(&self, from: TilePos, to: TilePos) -> Option<Path> {
        let mut came_from: HashMap<TilePos, TilePos> = HashMap::new();
        let mut queue = VecDeque::new();
        came_from.insert(from, from);
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            if current == to {
                let mut path = vec![to];
                let mut step = to;
                while step != from {
                    step = *came_from.get(&step)?;
                    path.push(step);
                }
                path.reverse();
                return Some(path);
            }
            for offset in NEIGHBOUR_OFFSETS {
                let next = offset_tile(current, offset);
                if came_from.contains_key(&next) || !self.is_walkable(next) {
                    continue;
                }
                came_from.insert(next, current);
                queue.push_back(next);
            }
        }
        None
    }
}

impl Pathfinder for GridPathfinder {
    fn set_grid(&mut self, grid: Vec<Vec<u8>>) {
        self.grid = grid;
    }

    fn set_acceptable_tiles(&mut self, codes: &[u8]) {
        self.acceptable = codes.iter().copied().collect();
    }

    fn avoid_additional_point(&mut self, tile: TilePos) {
        self.avoided.insert(tile);
    }

    fn stop_avoiding_all_additional_points(&mut self) {
        self.avoided.clear();
    }

    fn find_path(&mut self, from: TilePos, to: TilePos) -> Option<Path> {
        if from == to {
            return Some(Vec::new());
        }
        let path = self.bfs(from, to);
        log::trace!("path {} -> {}: {:?}", from, to, path.as_ref().map(Vec::len));
        path
    }
}
