//! Planar geometry used by the layout engine and the compositor
//!
//! This module contains:
//! - Polar vectors for forces, velocities and positions
//! - Float points and axis-aligned rectangles

/// Float points and axis-aligned rectangles
pub mod rect;
/// Polar-form vectors, bearings and distances
pub mod vector;

pub use rect::{Point, Rect};
pub use vector::Vector;
