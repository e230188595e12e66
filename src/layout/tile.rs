//! Per-image placement state and the size policies deriving display dimensions

use crate::geometry::{Point, Rect, Vector};
use crate::io::error::{CollageError, Result, configuration_error};
use image::DynamicImage;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Kind of imagery a tile shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Image containing a face
    Face,
    /// Any other image
    NonFace,
}

impl Category {
    /// Whether the tile shows a face
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Face)
    }
}

/// Methods used to derive a tile's display size from its relative size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SizePolicy {
    /// Intermediate size such that tile area is mostly uniform
    #[default]
    Averaged,
    /// Variation in the horizontal dimension is preserved
    PreserveHorizontal,
    /// Variation in the vertical dimension is preserved
    PreserveVertical,
}

/// Handle to the pixel content of a tile or background
///
/// File sources are only decoded at render time. In-memory sources are shared
/// read-only between builds.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Image file on disk
    File(PathBuf),
    /// Already decoded image
    Memory(Arc<DynamicImage>),
}

impl ImageSource {
    /// Source dimensions, read from the file header without a full decode
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or its header is not a
    /// recognised image format
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        match self {
            Self::File(path) => {
                image::image_dimensions(path).map_err(|e| CollageError::SourceImage {
                    path: path.clone(),
                    source: e,
                })
            }
            Self::Memory(image) => Ok((image.width(), image.height())),
        }
    }

    /// Decode the full image
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded
    pub fn load(&self) -> Result<Arc<DynamicImage>> {
        match self {
            Self::File(path) => image::open(path)
                .map(Arc::new)
                .map_err(|e| CollageError::RenderAsset {
                    path: path.clone(),
                    source: e,
                }),
            Self::Memory(image) => Ok(Arc::clone(image)),
        }
    }

    /// Path of a file source
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Memory(_) => None,
        }
    }
}

/// One image element of a collage with its simulated position
#[derive(Debug, Clone)]
pub struct Tile {
    category: Category,
    source: ImageSource,
    original_width: f32,
    original_height: f32,
    relative_size: f32,
    size_policy: SizePolicy,
    /// Left edge on the canvas
    pub x: f32,
    /// Top edge on the canvas
    pub y: f32,
    /// Display width on the canvas
    pub width: f32,
    /// Display height on the canvas
    pub height: f32,
    /// Velocity during the simulation
    pub velocity: Vector,
    final_bounds: Option<Rect>,
}

impl Tile {
    /// Create a tile from an image file, reading only its header
    ///
    /// The relative size is halved before use.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be read, the image has no area,
    /// or the relative size is not a positive finite number
    pub fn from_path(
        category: Category,
        path: impl Into<PathBuf>,
        relative_size: f32,
        size_policy: SizePolicy,
    ) -> Result<Self> {
        let source = ImageSource::File(path.into());
        let (width, height) = source.dimensions()?;
        Self::with_dimensions(category, source, width, height, relative_size, size_policy)
    }

    /// Create a tile from an already decoded image
    ///
    /// # Errors
    ///
    /// Returns an error if the image has no area or the relative size is not a
    /// positive finite number
    pub fn from_image(
        category: Category,
        image: Arc<DynamicImage>,
        relative_size: f32,
        size_policy: SizePolicy,
    ) -> Result<Self> {
        let (width, height) = (image.width(), image.height());
        Self::with_dimensions(
            category,
            ImageSource::Memory(image),
            width,
            height,
            relative_size,
            size_policy,
        )
    }

    /// Create a tile from a source with known dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the relative size is not
    /// a positive finite number
    pub fn with_dimensions(
        category: Category,
        source: ImageSource,
        original_width: u32,
        original_height: u32,
        relative_size: f32,
        size_policy: SizePolicy,
    ) -> Result<Self> {
        if original_width == 0 || original_height == 0 {
            return Err(configuration_error(&format!(
                "source image has no area ({original_width}x{original_height})"
            )));
        }
        if !relative_size.is_finite() || relative_size <= 0.0 {
            return Err(configuration_error(&format!(
                "relative size must be positive, got {relative_size}"
            )));
        }

        let mut tile = Self {
            category,
            source,
            original_width: original_width as f32,
            original_height: original_height as f32,
            relative_size: relative_size / 2.0,
            size_policy,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            velocity: Vector::ZERO,
            final_bounds: None,
        };
        tile.reset();
        Ok(tile)
    }

    /// Face or non-face imagery
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Pixel content handle
    pub const fn source(&self) -> &ImageSource {
        &self.source
    }

    /// Source dimensions (width, height)
    pub const fn original_size(&self) -> (f32, f32) {
        (self.original_width, self.original_height)
    }

    /// Relative size after halving
    pub const fn relative_size(&self) -> f32 {
        self.relative_size
    }

    /// Active size policy
    pub const fn size_policy(&self) -> SizePolicy {
        self.size_policy
    }

    /// Change the size policy; takes effect on the next reset
    pub const fn set_size_policy(&mut self, size_policy: SizePolicy) {
        self.size_policy = size_policy;
    }

    fn aspect(&self) -> f32 {
        self.original_width / self.original_height
    }

    /// Width matching `height` at the source aspect ratio
    pub fn calc_width(&self, height: f32) -> f32 {
        height * self.aspect()
    }

    /// Height matching `width` at the source aspect ratio
    pub fn calc_height(&self, width: f32) -> f32 {
        width / self.aspect()
    }

    /// Zero position and velocity, then re-derive the size from the policy
    pub fn reset(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
        self.velocity = Vector::ZERO;

        // Averaging the fixed-width and fixed-height sizes keeps tile areas close
        let w1 = self.relative_size;
        let h1 = self.calc_height(w1);
        let h2 = self.relative_size;
        let w2 = self.calc_width(h2);

        let (width, height) = match self.size_policy {
            SizePolicy::Averaged => (f32::midpoint(w1, w2), f32::midpoint(h1, h2)),
            SizePolicy::PreserveHorizontal => (w2, h2),
            SizePolicy::PreserveVertical => (w1, h1),
        };
        self.width = width;
        self.height = height;
    }

    /// Top-left corner
    pub const fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the top-left corner
    pub const fn set_location(&mut self, location: Point) {
        self.x = location.x;
        self.y = location.y;
    }

    /// Center of the tile
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Move the tile so its center sits at `center`
    pub fn set_center(&mut self, center: Point) {
        self.x = center.x - self.width / 2.0;
        self.y = center.y - self.height / 2.0;
    }

    /// Rectangle currently covered on the canvas
    pub const fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Bounds on the rendered raster, set by the compositor
    pub const fn final_bounds(&self) -> Option<Rect> {
        self.final_bounds
    }

    pub(crate) const fn set_final_bounds(&mut self, bounds: Rect) {
        self.final_bounds = Some(bounds);
    }
}
