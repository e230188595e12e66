//! Error types for collage builds
//!
//! Every failure is scoped to a single collage build: a batch driver logs the
//! error and moves on to the next build.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all collage operations
#[derive(Debug)]
pub enum CollageError {
    /// Inputs cannot describe a valid collage (missing sources, degenerate canvas)
    Configuration {
        /// Description of what's wrong with the configuration
        reason: String,
    },

    /// Source image header could not be read while selecting tiles
    SourceImage {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image error
        source: image::ImageError,
    },

    /// Random placement could not find a free spot for a tile
    ///
    /// Occurs when the canvas is too densely packed for the requested tiles.
    /// Retrying with another seed or fewer tiles may succeed.
    LayoutExhaustion {
        /// Index of the tile that could not be placed
        tile: usize,
        /// Number of placement attempts made for that tile
        attempts: usize,
    },

    /// A tile or background image failed to decode at render time
    RenderAsset {
        /// Path or description of the asset
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a rendered collage
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Failed to serialize placement records
    Metadata {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for CollageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { reason } => {
                write!(f, "Invalid configuration: {reason}")
            }
            Self::SourceImage { path, source } => {
                write!(
                    f,
                    "Failed to read source image '{}': {source}",
                    path.display()
                )
            }
            Self::LayoutExhaustion { tile, attempts } => {
                write!(
                    f,
                    "Could not place tile {tile} after {attempts} attempts (canvas too dense)"
                )
            }
            Self::RenderAsset { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Metadata { path, source } => {
                write!(
                    f,
                    "Failed to write metadata to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CollageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceImage { source, .. }
            | Self::RenderAsset { source, .. }
            | Self::ImageExport { source, .. } => Some(source),
            Self::Metadata { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl CollageError {
    /// Whether the error stems from the inputs rather than from one unlucky build
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::SourceImage { .. } | Self::InvalidParameter { .. }
        )
    }
}

/// Convenience type alias for collage results
pub type Result<T> = std::result::Result<T, CollageError>;

impl From<std::io::Error> for CollageError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CollageError {
    CollageError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a configuration error
pub fn configuration_error(reason: &impl ToString) -> CollageError {
    CollageError::Configuration {
        reason: reason.to_string(),
    }
}
