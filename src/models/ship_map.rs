use rand::seq::SliceRandom;
use rand::Rng;

use super::actor::Faction;
use super::constants::{TileKind, PLACEMENT_GLYPHS};
use super::errors::{GameError, GameResult};
use super::position::TilePos;

const BUILTIN_DECK: &str = include_str!("../../data/deck.txt");

/// The ship deck: a rectangular grid of tiles. Tiles outside the grid read as void.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipMap {
    width: i32,
    height: i32,
    /// Row-major: tiles[y * width + x].
    tiles: Vec<TileKind>,
}

/// An actor placed by the deck layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub faction: Faction,
    pub name: String,
    pub tile: TilePos,
}

/// A parsed deck layout: the map plus starting actors in row-major order.
#[derive(Debug, Clone)]
pub struct Deck {
    pub map: ShipMap,
    pub placements: Vec<Placement>,
}

impl ShipMap {
    /// An all-floor map, handy for tests.
    pub fn open(width: i32, height: i32) -> Self {
        ShipMap {
            width,
            height,
            tiles: vec![TileKind::Floor; (width.max(0) * height.max(0)) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, tile: TilePos) -> bool {
        tile.x >= 0 && tile.y >= 0 && tile.x < self.width && tile.y < self.height
    }

    pub fn get(&self, tile: TilePos) -> TileKind {
        if !self.in_bounds(tile) {
            return TileKind::Void;
        }
        self.tiles
            .get((tile.y * self.width + tile.x) as usize)
            .copied()
            .unwrap_or(TileKind::Void)
    }

    /// Out-of-bounds writes are ignored.
    pub fn set(&mut self, tile: TilePos, kind: TileKind) {
        if !self.in_bounds(tile) {
            return;
        }
        if let Some(slot) = self.tiles.get_mut((tile.y * self.width + tile.x) as usize) {
            *slot = kind;
        }
    }

    pub fn collides(&self, tile: TilePos) -> bool {
        self.get(tile).collides()
    }

    /// Walkability codes, one row per `y`, for the pathfinder.
    pub fn walkability_grid(&self) -> Vec<Vec<u8>> {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.get(TilePos { x, y }).code())
                    .collect()
            })
            .collect()
    }

    /// Codes the pathfinder may route through.
    pub fn acceptable_codes() -> Vec<u8> {
        vec![TileKind::Floor.code()]
    }

    pub fn floor_tiles(&self) -> Vec<TilePos> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| TilePos { x, y }))
            .filter(|t| self.get(*t) == TileKind::Floor)
            .collect()
    }

    /// Turn `count` random floor tiles into debris, leaving `keep_clear` alone.
    /// Returns the tiles that were changed.
    pub fn scatter_debris(
        &mut self,
        rng: &mut impl Rng,
        count: usize,
        keep_clear: &[TilePos],
    ) -> Vec<TilePos> {
        let mut candidates: Vec<TilePos> = self
            .floor_tiles()
            .into_iter()
            .filter(|t| !keep_clear.contains(t))
            .collect();
        candidates.shuffle(rng);
        candidates.truncate(count);
        for tile in &candidates {
            self.set(*tile, TileKind::Debris);
        }
        candidates
    }

    /// Render row `y` using `overlay` to draw actors over the terrain.
    pub fn render_row(&self, y: i32, overlay: impl Fn(TilePos) -> Option<char>) -> String {
        (0..self.width)
            .map(|x| {
                let tile = TilePos { x, y };
                overlay(tile).unwrap_or_else(|| self.get(tile).symbol())
            })
            .collect()
    }
}

impl Deck {
    /// The deck compiled into the binary.
    pub fn builtin() -> GameResult<Self> {
        Self::parse(BUILTIN_DECK)
    }

    /// Parse an ASCII layout. Short lines are padded with void; blank lines
    /// inside the layout are void rows, trailing ones are dropped.
    pub fn parse(text: &str) -> GameResult<Self> {
        let mut lines: Vec<&str> = text.lines().collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            return Err(GameError::MapParse {
                line: 0,
                reason: "deck layout is empty".to_string(),
            });
        }
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32;
        let height = lines.len() as i32;
        let mut map = ShipMap {
            width,
            height,
            tiles: vec![TileKind::Void; (width * height) as usize],
        };
        let mut placements = Vec::new();

        for (y, line) in lines.iter().enumerate() {
            for (x, glyph) in line.chars().enumerate() {
                let tile = TilePos::new(x as i32, y as i32);
                if let Some(kind) = TileKind::from_glyph(glyph) {
                    map.set(tile, kind);
                    continue;
                }
                let (_, is_crew, name) = PLACEMENT_GLYPHS
                    .iter()
                    .find(|(g, _, _)| *g == glyph)
                    .ok_or_else(|| GameError::MapParse {
                        line: y + 1,
                        reason: format!("unknown glyph {:?} at column {}", glyph, x + 1),
                    })?;
                map.set(tile, TileKind::Floor);
                placements.push(Placement {
                    faction: if *is_crew { Faction::Crew } else { Faction::Alien },
                    name: name.to_string(),
                    tile,
                });
            }
        }

        Ok(Deck { map, placements })
    }
}
