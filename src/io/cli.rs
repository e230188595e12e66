//! Command-line interface driving a batch of collage builds

use crate::collage::{CanvasConfig, Collage};
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_COLLAGE_COUNT,
    DEFAULT_MAX_TILES, DEFAULT_MIN_TILES, DEFAULT_SEED, IMAGE_EXTENSION, MAX_RELATIVE_SIZE,
    METADATA_EXTENSION, MIN_RELATIVE_SIZE, OUTPUT_PREFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_collage_image;
use crate::io::metadata::export_placements;
use crate::io::progress::ProgressManager;
use crate::io::sources::SourcePool;
use crate::layout::{InitialArrangement, SizePolicy};
use clap::Parser;
use image::Rgba;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "collagen")]
#[command(
    author,
    version,
    about = "Generate photo collages mixing face and non-face images"
)]
/// Command-line arguments for the collage generator
// Output toggles are independent user choices
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory of face images
    #[arg(value_name = "FACE_DIR")]
    pub face_dir: PathBuf,

    /// Directory of non-face images (also used for backgrounds)
    #[arg(value_name = "NON_FACE_DIR")]
    pub non_face_dir: PathBuf,

    /// Directory receiving the collages and their metadata
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Number of collages to generate
    #[arg(short, long, default_value_t = DEFAULT_COLLAGE_COUNT)]
    pub count: usize,

    /// Base seed; collage `i` uses `seed + i`
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Canvas width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub width: f32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub height: f32,

    /// Fewest tiles per collage
    #[arg(long, default_value_t = DEFAULT_MIN_TILES)]
    pub min_tiles: usize,

    /// Most tiles per collage
    #[arg(long, default_value_t = DEFAULT_MAX_TILES)]
    pub max_tiles: usize,

    /// Starting layout strategy
    #[arg(short, long, value_enum, default_value_t = InitialArrangement::Uniform)]
    pub arrangement: InitialArrangement,

    /// How tile sizes follow their aspect ratio
    #[arg(long, value_enum, default_value_t = SizePolicy::Averaged)]
    pub size_policy: SizePolicy,

    /// Feather tile edges into the background
    #[arg(short = 'e', long)]
    pub soft_edges: bool,

    /// Draw placeholder rectangles instead of images
    #[arg(short, long)]
    pub preview: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate numeric arguments before any work starts
    ///
    /// # Errors
    ///
    /// Returns an error for an empty or inverted tile count range
    pub fn validate(&self) -> Result<()> {
        if self.min_tiles == 0 {
            return Err(invalid_parameter(
                "min_tiles",
                &self.min_tiles,
                &"a collage needs at least one tile",
            ));
        }
        if self.max_tiles < self.min_tiles {
            return Err(invalid_parameter(
                "max_tiles",
                &self.max_tiles,
                &format!("must not be below min_tiles ({})", self.min_tiles),
            ));
        }
        self.canvas().validate()
    }

    /// Canvas settings shared by every build, without a background
    pub const fn canvas(&self) -> CanvasConfig {
        CanvasConfig {
            width: self.width,
            height: self.height,
            background_color: Rgba(DEFAULT_BACKGROUND),
            background: None,
            initial_arrangement: self.arrangement,
            soft_edges: self.soft_edges,
        }
    }
}

/// Outcome of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Collages written to disk
    pub generated: usize,
    /// Builds that failed and were skipped
    pub failed: usize,
}

/// Runs every collage build of a batch, isolating failures per build
pub struct BatchProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl BatchProcessor {
    /// Create a batch processor from CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new(cli.count)
        } else {
            ProgressManager::hidden(cli.count)
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate every collage of the batch
    ///
    /// A failing build is logged and skipped; only configuration problems
    /// abort the batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid or the source directories
    /// cannot be scanned
    pub fn process(&mut self) -> Result<BatchSummary> {
        self.cli.validate()?;
        let pool = SourcePool::scan(&self.cli.face_dir, &self.cli.non_face_dir)?;
        tracing::info!(
            faces = pool.faces().len(),
            non_faces = pool.non_faces().len(),
            count = self.cli.count,
            "starting batch"
        );

        let mut summary = BatchSummary {
            generated: 0,
            failed: 0,
        };

        for index in 0..self.cli.count {
            let started = Instant::now();
            match self.build(index, &pool) {
                Ok(()) => {
                    summary.generated += 1;
                    self.progress_manager.complete();
                    tracing::debug!(index, elapsed = ?started.elapsed(), "collage saved");
                }
                Err(error) => {
                    summary.failed += 1;
                    self.progress_manager.fail();
                    tracing::warn!(index, %error, "collage build failed, continuing");
                }
            }
        }

        self.progress_manager.finish();
        tracing::info!(
            generated = summary.generated,
            failed = summary.failed,
            "batch finished"
        );
        Ok(summary)
    }

    fn build(&self, index: usize, pool: &SourcePool) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(self.cli.seed.wrapping_add(index as u64));

        self.progress_manager.set_stage(index, "selecting images");
        let tile_count = rng.random_range(self.cli.min_tiles..=self.cli.max_tiles);
        let selection = pool.select(
            &mut rng,
            tile_count,
            MIN_RELATIVE_SIZE..MAX_RELATIVE_SIZE,
            self.cli.size_policy,
        )?;

        let mut canvas = self.cli.canvas();
        canvas.background = Some(selection.background);
        let mut collage = Collage::with_tiles(canvas, selection.tiles);

        self.progress_manager.set_stage(index, "arranging images");
        let report = collage.arrange(&mut rng)?;
        tracing::debug!(
            index,
            tiles = tile_count,
            iterations = report.iterations,
            converged = report.converged,
            "layout settled"
        );

        self.progress_manager.set_stage(index, "rendering");
        let rendering = if self.cli.preview {
            collage.preview()?
        } else {
            collage.render()?
        };

        self.progress_manager.set_stage(index, "saving");
        export_collage_image(
            &rendering.image,
            &Self::output_path(&self.cli.output_dir, index, IMAGE_EXTENSION),
        )?;
        export_placements(
            &rendering.placements,
            &Self::output_path(&self.cli.output_dir, index, METADATA_EXTENSION),
        )?;

        Ok(())
    }

    /// Path of output file `index` with the given extension
    pub fn output_path(output_dir: &Path, index: usize, extension: &str) -> PathBuf {
        output_dir.join(format!("{OUTPUT_PREFIX}{index}.{extension}"))
    }
}
