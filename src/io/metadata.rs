//! JSON export of placement records

use crate::io::error::{CollageError, Result};
use crate::render::compositor::PlacementRecord;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize records as a pretty-printed JSON array
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn placements_to_json(records: &[PlacementRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(|e| CollageError::Metadata {
        path: "<memory>".into(),
        source: e,
    })
}

/// Write records next to the rendered collage
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn export_placements(records: &[PlacementRecord], output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CollageError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = std::fs::File::create(output_path).map_err(|e| CollageError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| CollageError::Metadata {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    writer.flush().map_err(|e| CollageError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write file",
        source: e,
    })
}
