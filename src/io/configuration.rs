//! Layout constants and runtime configuration defaults

// Relaxation loop constants
/// Total displacement per iteration at or below which the layout is stable
pub const MIN_DISPLACEMENT: f32 = 10.0;
/// Magnitude of the force pulling every tile towards the canvas center
pub const PULLING_FORCE: f32 = 10.0;
/// Fraction of the velocity carried into the next iteration
pub const DAMPING: f32 = 0.5;
/// Fraction of the pulling force kept when two tiles collide
pub const ABSORBANCE: f32 = 0.5;
/// Iteration cap; reaching it is a normal termination
pub const MAX_ITERATIONS: usize = 200;

// Dense canvases would otherwise retry forever
/// Random placement attempts per tile before giving up
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible batches
pub const DEFAULT_SEED: u64 = 42;
/// Number of collages generated per batch
pub const DEFAULT_COLLAGE_COUNT: usize = 100;
/// Canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: f32 = 4000.0;
/// Canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: f32 = 3000.0;
/// Fewest tiles drawn into one collage
pub const DEFAULT_MIN_TILES: usize = 1;
/// Most tiles drawn into one collage (inclusive)
pub const DEFAULT_MAX_TILES: usize = 19;
/// Lower bound of the relative size sampling range (inclusive)
pub const MIN_RELATIVE_SIZE: u32 = 50;
/// Upper bound of the relative size sampling range (exclusive)
pub const MAX_RELATIVE_SIZE: u32 = 100;
/// Background color used by the batch driver
pub const DEFAULT_BACKGROUND: [u8; 4] = [0, 0, 0, 255];

// Preview rendering
/// Fill color of preview placeholders
pub const PREVIEW_FILL: [u8; 4] = [169, 169, 169, 255];
/// Outline color of preview placeholders
pub const PREVIEW_OUTLINE: [u8; 4] = [128, 128, 128, 255];

// Output settings
/// File name prefix of generated collages
pub const OUTPUT_PREFIX: &str = "Collage";
/// Extension of rendered collages
pub const IMAGE_EXTENSION: &str = "png";
/// Extension of placement metadata files
pub const METADATA_EXTENSION: &str = "json";

/// Log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
