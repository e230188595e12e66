//! Initial tile placement before relaxation

use crate::geometry::{Point, Rect};
use crate::io::configuration::MAX_PLACEMENT_ATTEMPTS;
use crate::io::error::{CollageError, Result, configuration_error};
use crate::layout::collision::overlaps;
use crate::layout::tile::Tile;
use rand::Rng;

/// Strategies for the starting layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum InitialArrangement {
    /// Independent random positions, retried until no tile overlaps
    #[default]
    Random,
    /// Shuffled dense grid; relaxation spreads the tiles apart
    Uniform,
}

/// Place every tile according to `arrangement`
///
/// # Errors
///
/// Returns an error if the canvas is too small to sample positions from, or if
/// random placement runs out of attempts for some tile
pub fn distribute<R: Rng + ?Sized>(
    tiles: &mut [Tile],
    canvas: &Rect,
    arrangement: InitialArrangement,
    rng: &mut R,
) -> Result<()> {
    match arrangement {
        InitialArrangement::Random => distribute_random(tiles, canvas, rng, MAX_PLACEMENT_ATTEMPTS),
        InitialArrangement::Uniform => {
            distribute_uniform(tiles, canvas, rng);
            Ok(())
        }
    }
}

/// Sample integer top-left corners until each tile fits without overlap
///
/// Tiles not yet placed still occupy the origin and count as obstacles.
///
/// # Errors
///
/// Returns `LayoutExhaustion` when a tile needs more than `max_attempts`
/// samples, or a configuration error for a canvas narrower than one pixel
pub fn distribute_random<R: Rng + ?Sized>(
    tiles: &mut [Tile],
    canvas: &Rect,
    rng: &mut R,
    max_attempts: usize,
) -> Result<()> {
    let width = canvas.width as u32;
    let height = canvas.height as u32;
    if width == 0 || height == 0 {
        return Err(configuration_error(&format!(
            "canvas {}x{} is too small for random placement",
            canvas.width, canvas.height
        )));
    }

    for index in 0..tiles.len() {
        let mut placed = false;

        for _ in 0..max_attempts {
            let location = Point::new(
                canvas.x + rng.random_range(0..width) as f32,
                canvas.y + rng.random_range(0..height) as f32,
            );
            if let Some(tile) = tiles.get_mut(index) {
                tile.set_location(location);
            }
            if !overlaps(tiles, index, canvas).is_collision() {
                placed = true;
                break;
            }
        }

        if !placed {
            tracing::debug!(tile = index, max_attempts, "random placement exhausted");
            return Err(CollageError::LayoutExhaustion {
                tile: index,
                attempts: max_attempts,
            });
        }
    }

    Ok(())
}

/// Shuffle the tiles onto a dense square grid of centers
///
/// Centers sit at `(0.5 * col * W / divs, 0.5 * row * H / divs)` with
/// `divs = ceil(sqrt(n))`, so the grid only covers the top-left quarter and
/// overlap is expected.
pub fn distribute_uniform<R: Rng + ?Sized>(tiles: &mut [Tile], canvas: &Rect, rng: &mut R) {
    let n = tiles.len();
    if n == 0 {
        return;
    }

    // Fisher-Yates
    let mut order: Vec<usize> = (0..n).collect();
    for j in 0..n {
        let swap_with = rng.random_range(j..n);
        order.swap(j, swap_with);
    }

    let divs = (n as f64).sqrt().ceil() as usize;
    let cell_width = canvas.width / divs as f32;
    let cell_height = canvas.height / divs as f32;

    for (slot, &tile_index) in order.iter().enumerate() {
        let col = (slot % divs) as f32;
        let row = (slot / divs) as f32;
        if let Some(tile) = tiles.get_mut(tile_index) {
            tile.set_center(Point::new(
                canvas.x + (0.5 * col) * cell_width,
                canvas.y + (0.5 * row) * cell_height,
            ));
        }
    }
}
