//! A single collage build: ordered tiles plus the canvas they are laid out on

use crate::geometry::{Point, Rect};
use crate::io::error::{Result, invalid_parameter};
use crate::layout::engine::{LayoutOptions, LayoutReport, arrange};
use crate::layout::tile::{ImageSource, Tile};
use crate::layout::InitialArrangement;
use crate::render::compositor::{self, PlacementRecord, RenderMode, Rendering};
use image::Rgba;
use rand::Rng;

/// Canvas settings, fixed for the duration of one build
#[derive(Debug, Clone)]
pub struct CanvasConfig {
    /// Canvas width in pixels
    pub width: f32,
    /// Canvas height in pixels
    pub height: f32,
    /// Color filling the canvas before anything is drawn
    pub background_color: Rgba<u8>,
    /// Image stretched over the whole canvas behind the tiles
    pub background: Option<ImageSource>,
    /// Starting layout strategy
    pub initial_arrangement: InitialArrangement,
    /// Whether tiles are drawn with feathered edges
    pub soft_edges: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::new(1600.0, 1200.0)
    }
}

impl CanvasConfig {
    /// Transparent canvas of the given size with soft edges enabled
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            background_color: Rgba([0, 0, 0, 0]),
            background: None,
            initial_arrangement: InitialArrangement::Random,
            soft_edges: true,
        }
    }

    /// Check that the canvas covers at least one whole pixel
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is non-finite or below one pixel
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value < 1.0 {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"canvas dimensions must be at least one pixel",
                ));
            }
        }
        Ok(())
    }

    /// Canvas rectangle anchored at the origin
    pub const fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Point every tile is pulled towards
    pub fn center(&self) -> Point {
        self.bounds().center()
    }
}

/// Ordered tiles and their canvas
///
/// Order decides the uniform shuffle, the collision partner reported first and
/// the draw order, so later tiles paint over earlier ones.
#[derive(Debug, Clone)]
pub struct Collage {
    tiles: Vec<Tile>,
    canvas: CanvasConfig,
}

impl Collage {
    /// Empty collage on `canvas`
    pub const fn new(canvas: CanvasConfig) -> Self {
        Self {
            tiles: Vec::new(),
            canvas,
        }
    }

    /// Collage with the given tiles
    pub const fn with_tiles(canvas: CanvasConfig, tiles: Vec<Tile>) -> Self {
        Self { tiles, canvas }
    }

    /// Append a tile; it is drawn above every tile added before it
    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Tiles in collection order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Mutable access to the tiles
    pub fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    /// Canvas settings
    pub const fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Lay the tiles out with default options
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas is invalid or random placement is exhausted
    pub fn arrange<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<LayoutReport> {
        self.arrange_with(rng, LayoutOptions::default())
    }

    /// Lay the tiles out
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas is invalid or random placement is exhausted
    pub fn arrange_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        options: LayoutOptions,
    ) -> Result<LayoutReport> {
        arrange(&mut self.tiles, &self.canvas, rng, options)
    }

    /// Smallest rectangle enclosing every tile
    pub fn total_area(&self) -> Rect {
        compositor::total_area(&self.tiles)
    }

    /// Render with decoded images
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is degenerate or an image fails to decode
    pub fn render(&mut self) -> Result<Rendering> {
        compositor::render(&mut self.tiles, &self.canvas, RenderMode::Full)
    }

    /// Render placeholder rectangles instead of images
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is degenerate
    pub fn preview(&mut self) -> Result<Rendering> {
        compositor::render(&mut self.tiles, &self.canvas, RenderMode::Preview)
    }

    /// Placement records of the last render, in collection order
    pub fn placements(&self) -> Vec<PlacementRecord> {
        self.tiles
            .iter()
            .filter_map(|tile| {
                tile.final_bounds()
                    .map(|bounds| PlacementRecord::new(tile.category(), bounds))
            })
            .collect()
    }
}
