use super::position::TilePos;

/// Maximum number of aliens alive at once. An adult cannot lay an egg past this.
pub const ALIEN_POPULATION_CAP: usize = 10;

/// How long a projectile may fly before the shot is abandoned.
pub const SHOT_DEADLINE_MS: u64 = 3000;

/// Projectile speed in tiles per second.
pub const PROJECTILE_SPEED: f64 = 5.0;

/// Offsets searched, in order, when an adult looks for a tile to lay an egg.
pub const GROWTH_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Neighbour order used by the grid pathfinder (east, west, south, north).
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = GROWTH_OFFSETS;

/// Walkability codes handed to the pathfinder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Void = 0,
    Floor = 1,
    Wall = 2,
    Debris = 3,
}

impl TileKind {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Walls, debris and open space block both movement and egg laying.
    pub fn collides(&self) -> bool {
        !matches!(self, TileKind::Floor)
    }

    pub fn symbol(&self) -> char {
        match self {
            TileKind::Void => ' ',
            TileKind::Floor => '.',
            TileKind::Wall => '#',
            TileKind::Debris => '%',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<TileKind> {
        match glyph {
            ' ' => Some(TileKind::Void),
            '.' => Some(TileKind::Floor),
            '#' => Some(TileKind::Wall),
            '%' => Some(TileKind::Debris),
            _ => None,
        }
    }
}

/// Deck glyphs that place an actor on a floor tile: (glyph, is_crew, species name).
pub const PLACEMENT_GLYPHS: [(char, bool, &str); 6] = [
    ('C', true, "captain"),
    ('Y', true, "yeoman"),
    ('e', false, "egg"),
    ('b', false, "blob"),
    ('y', false, "young"),
    ('a', false, "adult"),
];

/// Glyph a placed actor is drawn with, by species name.
pub fn species_glyph(name: &str) -> char {
    PLACEMENT_GLYPHS
        .iter()
        .find(|(_, _, species)| *species == name)
        .map(|(glyph, _, _)| *glyph)
        .unwrap_or('?')
}

/// Returns the tile one orthogonal step away along `offset`.
pub fn offset_tile(tile: TilePos, offset: (i32, i32)) -> TilePos {
    TilePos {
        x: tile.x + offset.0,
        y: tile.y + offset.1,
    }
}
