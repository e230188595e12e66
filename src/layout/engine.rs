//! Force-based relaxation of tile positions
//!
//! Every tile is pulled towards the canvas center while collisions bounce it
//! back. When a move is blocked the tile tries sliding along one axis before
//! giving up for the iteration. The loop stops once the summed displacement of
//! an iteration drops to `MIN_DISPLACEMENT` or after `MAX_ITERATIONS`.

use crate::collage::CanvasConfig;
use crate::geometry::vector::{bearing, distance};
use crate::geometry::{Point, Rect, Vector};
use crate::io::configuration::{
    ABSORBANCE, DAMPING, MAX_ITERATIONS, MIN_DISPLACEMENT, PULLING_FORCE,
};
use crate::io::error::Result;
use crate::layout::collision::{Collision, overlaps, proposed_overlaps};
use crate::layout::distribution::distribute;
use crate::layout::tile::Tile;
use rand::Rng;
use std::time::{Duration, Instant};

/// Optional knobs for a layout run
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutOptions {
    /// Wall-clock budget for the relaxation loop
    pub deadline: Option<Duration>,
}

/// Summary of a finished layout run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutReport {
    /// Relaxation iterations performed
    pub iterations: usize,
    /// Total displacement measured in the last iteration
    pub total_displacement: f32,
    /// Whether the displacement threshold was reached
    pub converged: bool,
    /// Whether the deadline cut the loop short
    pub timed_out: bool,
}

/// Reset, distribute and relax `tiles` on the canvas
///
/// # Errors
///
/// Returns an error if the canvas is invalid or the initial random placement
/// runs out of attempts
pub fn arrange<R: Rng + ?Sized>(
    tiles: &mut [Tile],
    canvas: &CanvasConfig,
    rng: &mut R,
    options: LayoutOptions,
) -> Result<LayoutReport> {
    canvas.validate()?;
    let bounds = canvas.bounds();

    for tile in tiles.iter_mut() {
        tile.reset();
    }

    distribute(tiles, &bounds, canvas.initial_arrangement, rng)?;

    let started = Instant::now();
    let singularity = bounds.center();
    let mut iterations = 0;
    let mut converged = false;
    let mut timed_out = false;

    let total_displacement = loop {
        iterations += 1;

        let mut total_displacement = 0.0;
        for index in 0..tiles.len() {
            total_displacement += relax_tile(tiles, index, &bounds, singularity);
        }

        if total_displacement <= MIN_DISPLACEMENT {
            converged = true;
            break total_displacement;
        }
        if iterations >= MAX_ITERATIONS {
            break total_displacement;
        }
        if options.deadline.is_some_and(|limit| started.elapsed() >= limit) {
            timed_out = true;
            break total_displacement;
        }
    };

    tracing::debug!(
        tiles = tiles.len(),
        iterations,
        total_displacement,
        converged,
        timed_out,
        "layout finished"
    );

    Ok(LayoutReport {
        iterations,
        total_displacement,
        converged,
        timed_out,
    })
}

/// Advance one tile by one iteration, returning the distance it moved
pub fn relax_tile(tiles: &mut [Tile], index: usize, canvas: &Rect, singularity: Point) -> f32 {
    let Some(tile) = tiles.get(index) else {
        return 0.0;
    };

    let center = tile.center();
    let pulling = Vector::new(PULLING_FORCE, bearing(center, singularity));

    let old_velocity = tile.velocity;
    let velocity = old_velocity * DAMPING + pulling;

    let old_position = tile.location();
    let was_inside = canvas.contains(&tile.bounds());

    // Tentative move: the center as a polar vector from the origin plus velocity
    let current = Vector::new(
        distance(Point::ORIGIN, center),
        bearing(Point::ORIGIN, center),
    );
    let new_center = (current + velocity).to_point();

    if let Some(tile) = tiles.get_mut(index) {
        tile.velocity = velocity;
        tile.set_center(new_center);
    }

    match overlaps(tiles, index, canvas) {
        Collision::OutOfBounds if was_inside => {
            if let Some(tile) = tiles.get_mut(index) {
                tile.set_location(old_position);
            }
        }
        Collision::Tile(partner) => {
            let partner_center = tiles.get(partner).map_or(singularity, Tile::center);
            let bounce = Vector::new(-velocity.magnitude(), bearing(new_center, partner_center));
            let net_force = pulling * ABSORBANCE + bounce;
            let bounced = old_velocity * DAMPING + net_force;

            let resting = slide(tiles, index, canvas, old_position);
            if let Some(tile) = tiles.get_mut(index) {
                tile.velocity = bounced;
                tile.set_location(resting);
            }
        }
        Collision::OutOfBounds | Collision::None => {}
    }

    tiles
        .get(index)
        .map_or(0.0, |tile| distance(tile.location(), old_position))
}

// Blocked moves keep whichever single-axis component is free
fn slide(tiles: &[Tile], index: usize, canvas: &Rect, old_position: Point) -> Point {
    let Some(tile) = tiles.get(index) else {
        return old_position;
    };

    let moved = tile.bounds();
    let try_x = Rect::new(moved.x, old_position.y, moved.width, moved.height);
    let try_y = Rect::new(old_position.x, moved.y, moved.width, moved.height);

    if !proposed_overlaps(tiles, index, &try_x, canvas) {
        try_x.location()
    } else if !proposed_overlaps(tiles, index, &try_y, canvas) {
        try_y.location()
    } else {
        old_position
    }
}
