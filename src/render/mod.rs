//! Rendering of settled layouts

/// Scale-to-canvas math, tile drawing and preview placeholders
pub mod compositor;
/// Alpha feathering masks for soft tile edges
pub mod feather;

pub use compositor::{PlacementRecord, RenderMode, Rendering};
