//! Scaling the settled layout onto the canvas and drawing the tiles

use crate::collage::CanvasConfig;
use crate::geometry::Rect;
use crate::io::configuration::{PREVIEW_FILL, PREVIEW_OUTLINE};
use crate::io::error::{Result, configuration_error};
use crate::layout::tile::{Category, Tile};
use crate::render::feather::make_soft_edge_image;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use serde::Serialize;

/// Where one tile ended up on the rendered raster
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlacementRecord {
    /// Face or non-face imagery
    pub category: Category,
    /// Left edge in canvas pixels
    pub x: f32,
    /// Top edge in canvas pixels
    pub y: f32,
    /// Width in canvas pixels
    pub width: f32,
    /// Height in canvas pixels
    pub height: f32,
}

impl PlacementRecord {
    /// Record for a tile whose final bounds are `bounds`
    pub const fn new(category: Category, bounds: Rect) -> Self {
        Self {
            category,
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
        }
    }
}

/// How tiles are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Decode and draw every image
    #[default]
    Full,
    /// Draw placeholder rectangles without decoding anything
    Preview,
}

/// A rendered collage and its placement records in collection order
#[derive(Debug, Clone)]
pub struct Rendering {
    /// RGBA raster at canvas resolution
    pub image: RgbaImage,
    /// One record per tile
    pub placements: Vec<PlacementRecord>,
}

/// Smallest rectangle enclosing every tile; empty for no tiles
pub fn total_area(tiles: &[Tile]) -> Rect {
    tiles
        .iter()
        .map(Tile::bounds)
        .reduce(|total, bounds| total.union(&bounds))
        .unwrap_or_default()
}

/// Scale and center the layout onto a `width` x `height` canvas
///
/// Writes each tile's final bounds without touching its position or velocity.
///
/// # Errors
///
/// Returns an error if the tiles enclose no area
pub fn compute_final_bounds(tiles: &mut [Tile], width: f32, height: f32) -> Result<()> {
    if tiles.is_empty() {
        return Ok(());
    }

    let total = total_area(tiles);
    if total.is_empty() {
        return Err(configuration_error(&format!(
            "tiles enclose no area ({}x{})",
            total.width, total.height
        )));
    }

    let scale = (width / total.width).min(height / total.height);
    let offset_x = (width - total.width * scale) / 2.0;
    let offset_y = (height - total.height * scale) / 2.0;

    for tile in tiles.iter_mut() {
        let bounds = tile.bounds();
        tile.set_final_bounds(Rect::new(
            (bounds.x - total.x) * scale + offset_x,
            (bounds.y - total.y) * scale + offset_y,
            bounds.width * scale,
            bounds.height * scale,
        ));
    }

    Ok(())
}

/// Draw the collage
///
/// Background color first, then the background image stretched to the canvas,
/// then every tile into its final bounds in collection order. Preview mode
/// skips the background image and draws outlined placeholders.
///
/// # Errors
///
/// Returns an error if the canvas or layout is degenerate, or an image fails to
/// decode
pub fn render(tiles: &mut [Tile], canvas: &CanvasConfig, mode: RenderMode) -> Result<Rendering> {
    canvas.validate()?;
    compute_final_bounds(tiles, canvas.width, canvas.height)?;

    let (width, height) = (canvas.width as u32, canvas.height as u32);
    let mut image = RgbaImage::from_pixel(width, height, canvas.background_color);

    if mode == RenderMode::Full
        && let Some(background) = &canvas.background
    {
        let decoded = background.load()?;
        let stretched = imageops::resize(&*decoded, width, height, FilterType::Triangle);
        imageops::overlay(&mut image, &stretched, 0, 0);
    }

    let mut placements = Vec::with_capacity(tiles.len());
    for tile in tiles.iter() {
        let Some(bounds) = tile.final_bounds() else {
            continue;
        };
        placements.push(PlacementRecord::new(tile.category(), bounds));

        // Origin and size are both truncated
        let (left, top) = (bounds.x as i64, bounds.y as i64);
        let (tile_width, tile_height) = (bounds.width as u32, bounds.height as u32);
        if tile_width == 0 || tile_height == 0 {
            continue;
        }

        match mode {
            RenderMode::Preview => {
                fill_rect(&mut image, left, top, tile_width, tile_height, Rgba(PREVIEW_FILL));
                stroke_rect(&mut image, left, top, tile_width, tile_height, Rgba(PREVIEW_OUTLINE));
            }
            RenderMode::Full => {
                let decoded = tile.source().load()?;
                let drawn = if canvas.soft_edges {
                    make_soft_edge_image(&decoded, tile_width, tile_height)?
                } else {
                    imageops::resize(&*decoded, tile_width, tile_height, FilterType::Triangle)
                };
                imageops::overlay(&mut image, &drawn, left, top);
            }
        }
    }

    tracing::debug!(
        width,
        height,
        tiles = placements.len(),
        preview = mode == RenderMode::Preview,
        "collage rendered"
    );

    Ok(Rendering { image, placements })
}

fn put_checked(image: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if let Some(pixel) = image.get_pixel_mut_checked(x, y) {
        *pixel = color;
    }
}

fn fill_rect(image: &mut RgbaImage, left: i64, top: i64, width: u32, height: u32, color: Rgba<u8>) {
    for dy in 0..i64::from(height) {
        for dx in 0..i64::from(width) {
            put_checked(image, left + dx, top + dy, color);
        }
    }
}

fn stroke_rect(image: &mut RgbaImage, left: i64, top: i64, width: u32, height: u32, color: Rgba<u8>) {
    let right = left + i64::from(width);
    let bottom = top + i64::from(height);
    for x in left..=right {
        put_checked(image, x, top, color);
        put_checked(image, x, bottom, color);
    }
    for y in top..=bottom {
        put_checked(image, left, y, color);
        put_checked(image, right, y, color);
    }
}
