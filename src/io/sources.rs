//! Source image discovery and per-collage tile selection

use crate::io::error::{CollageError, Result, configuration_error, invalid_parameter};
use crate::layout::tile::{Category, ImageSource, SizePolicy, Tile};
use rand::Rng;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Tiles and background chosen for one collage
#[derive(Debug, Clone)]
pub struct Selection {
    /// Tiles in selection order
    pub tiles: Vec<Tile>,
    /// Background image, drawn from the non-face pool
    pub background: ImageSource,
}

/// Candidate image files for face and non-face tiles
#[derive(Debug, Clone)]
pub struct SourcePool {
    faces: Vec<PathBuf>,
    non_faces: Vec<PathBuf>,
}

impl SourcePool {
    /// Build a pool from explicit file lists
    ///
    /// # Errors
    ///
    /// Returns an error if either list is empty
    pub fn new(faces: Vec<PathBuf>, non_faces: Vec<PathBuf>) -> Result<Self> {
        if faces.is_empty() {
            return Err(configuration_error(&"no face images available"));
        }
        if non_faces.is_empty() {
            return Err(configuration_error(&"no non-face images available"));
        }
        Ok(Self { faces, non_faces })
    }

    /// List the regular files of both directories
    ///
    /// Files are sorted so a seed always selects the same images.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory is missing, unreadable or empty
    pub fn scan(face_dir: &Path, non_face_dir: &Path) -> Result<Self> {
        Self::new(list_files(face_dir)?, list_files(non_face_dir)?)
    }

    /// Face image candidates
    pub fn faces(&self) -> &[PathBuf] {
        &self.faces
    }

    /// Non-face image candidates
    pub fn non_faces(&self) -> &[PathBuf] {
        &self.non_faces
    }

    /// Pick `count` tiles and a background
    ///
    /// Each tile is a face with probability one half. Relative sizes are drawn
    /// uniformly from `size_range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the size range is empty or a chosen image header
    /// cannot be read
    pub fn select<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
        size_range: Range<u32>,
        size_policy: SizePolicy,
    ) -> Result<Selection> {
        if size_range.is_empty() || size_range.start == 0 {
            return Err(invalid_parameter(
                "size_range",
                &format!("{}..{}", size_range.start, size_range.end),
                &"relative sizes must be positive and the range non-empty",
            ));
        }

        let mut tiles = Vec::with_capacity(count);
        for _ in 0..count {
            let (category, pool) = if rng.random_range(0..2) == 0 {
                (Category::Face, &self.faces)
            } else {
                (Category::NonFace, &self.non_faces)
            };
            let path = choose(pool, rng)?;
            let relative_size = rng.random_range(size_range.clone()) as f32;
            tiles.push(Tile::from_path(category, path, relative_size, size_policy)?);
        }

        let background = ImageSource::File(choose(&self.non_faces, rng)?.to_path_buf());

        Ok(Selection { tiles, background })
    }
}

fn choose<'a, R: Rng + ?Sized>(pool: &'a [PathBuf], rng: &mut R) -> Result<&'a Path> {
    if pool.is_empty() {
        return Err(configuration_error(&"cannot choose from an empty image pool"));
    }
    pool.get(rng.random_range(0..pool.len()))
        .map(PathBuf::as_path)
        .ok_or_else(|| configuration_error(&"image index out of range"))
}

fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(configuration_error(&format!(
            "source directory '{}' does not exist",
            dir.display()
        )));
    }

    let entries = std::fs::read_dir(dir).map_err(|e| CollageError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| CollageError::FileSystem {
                path: dir.to_path_buf(),
                operation: "read directory entry",
                source: e,
            })?
            .path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(configuration_error(&format!(
            "source directory '{}' contains no files",
            dir.display()
        )));
    }
    Ok(files)
}
