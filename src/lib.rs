//! Photo collage generation through force-based tile relaxation
//!
//! Tiles are sized from their aspect ratio, scattered over a canvas and relaxed
//! under a center-pulling force with elastic collisions. The settled layout is
//! scaled onto the canvas and composited over a background, optionally with
//! feathered tile edges.

#![forbid(unsafe_code)]

/// Single collage build: canvas settings and ordered tiles
pub mod collage;
/// Polar vectors, points and rectangles
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Tile sizing, collision tests and the relaxation engine
pub mod layout;
/// Compositing and edge feathering
pub mod render;

pub use collage::{CanvasConfig, Collage};
pub use io::error::{CollageError, Result};
