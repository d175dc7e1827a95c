use std::fmt;

/// A cell on the ship deck. (0,0) is the upper-left tile.
/// X increases left-to-right, Y increases top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

impl TilePos {
    pub fn new(x: i32, y: i32) -> Self {
        TilePos { x, y }
    }

    /// Manhattan distance in tiles.
    pub fn manhattan(&self, other: TilePos) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// True when the two tiles share an edge.
    pub fn is_adjacent(&self, other: TilePos) -> bool {
        self.manhattan(other) == 1
    }

    /// Euclidean distance in tiles, used for projectile flight time.
    pub fn distance(&self, other: TilePos) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for TilePos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
