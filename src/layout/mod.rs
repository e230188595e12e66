//! Tile layout: sizing, collision tests, initial distribution and relaxation

/// Collision predicates against the canvas and other tiles
pub mod collision;
/// Random and uniform initial placement strategies
pub mod distribution;
/// Iterative force simulation spreading tiles apart
pub mod engine;
/// Tile state and size policies
pub mod tile;

pub use distribution::InitialArrangement;
pub use engine::{LayoutOptions, LayoutReport, arrange};
pub use tile::{Category, ImageSource, SizePolicy, Tile};
