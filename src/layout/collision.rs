//! Collision predicates between tiles and against the canvas bounds

use crate::geometry::Rect;
use crate::layout::tile::Tile;

/// Outcome of a collision test for one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// The tile is inside the canvas and clear of every other tile
    None,
    /// The tile leaves the canvas; no partner is reported
    OutOfBounds,
    /// The tile intersects the tile at this index (first in collection order)
    Tile(usize),
}

impl Collision {
    /// Whether any collision was detected
    pub const fn is_collision(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Index of the colliding tile, if any
    pub const fn partner(self) -> Option<usize> {
        match self {
            Self::Tile(index) => Some(index),
            Self::None | Self::OutOfBounds => None,
        }
    }
}

fn first_collision(tiles: &[Tile], index: usize, bounds: &Rect, canvas: &Rect) -> Collision {
    if !canvas.contains(bounds) {
        return Collision::OutOfBounds;
    }

    tiles
        .iter()
        .enumerate()
        .find(|&(other, tile)| other != index && bounds.intersects(&tile.bounds()))
        .map_or(Collision::None, |(other, _)| Collision::Tile(other))
}

/// Test the tile at `index` against the canvas and every other tile
///
/// Bounds are checked first, so a tile leaving the canvas never reports a
/// partner even if it also touches another tile.
pub fn overlaps(tiles: &[Tile], index: usize, canvas: &Rect) -> Collision {
    tiles.get(index).map_or(Collision::None, |tile| {
        first_collision(tiles, index, &tile.bounds(), canvas)
    })
}

/// Test a hypothetical rectangle for the tile at `index`
pub fn proposed_overlaps(tiles: &[Tile], index: usize, proposed: &Rect, canvas: &Rect) -> bool {
    first_collision(tiles, index, proposed, canvas).is_collision()
}
