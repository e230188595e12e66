//! Tests for command-line parsing and batch processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use collagen::io::cli::{BatchProcessor, BatchSummary, Cli};
    use collagen::io::configuration::{
        DEFAULT_BACKGROUND, DEFAULT_COLLAGE_COUNT, DEFAULT_MAX_TILES, DEFAULT_MIN_TILES,
        DEFAULT_SEED,
    };
    use collagen::layout::{InitialArrangement, SizePolicy};
    use image::{Rgba, RgbaImage};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn utf8(path: &Path) -> &str {
        path.to_str().expect("utf-8 temp path")
    }

    fn fixture_dirs(root: &Path) -> (PathBuf, PathBuf) {
        let faces = root.join("faces");
        let non_faces = root.join("non_faces");
        std::fs::create_dir_all(&faces).expect("faces dir");
        std::fs::create_dir_all(&non_faces).expect("non-face dir");
        RgbaImage::from_pixel(12, 16, Rgba([220, 180, 160, 255]))
            .save(faces.join("face.png"))
            .expect("face png");
        RgbaImage::from_pixel(16, 9, Rgba([30, 90, 40, 255]))
            .save(non_faces.join("field.png"))
            .expect("non-face png");
        (faces, non_faces)
    }

    // Tests CLI parsing with only the positional arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["collagen", "faces", "others", "out"]);

        assert_eq!(cli.face_dir, PathBuf::from("faces"));
        assert_eq!(cli.non_face_dir, PathBuf::from("others"));
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.count, DEFAULT_COLLAGE_COUNT);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.min_tiles, DEFAULT_MIN_TILES);
        assert_eq!(cli.max_tiles, DEFAULT_MAX_TILES);
        assert_eq!(cli.arrangement, InitialArrangement::Uniform);
        assert_eq!(cli.size_policy, SizePolicy::Averaged);
        assert!(!cli.soft_edges);
        assert!(!cli.preview);
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by renaming a value enum variant
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "collagen",
            "f",
            "n",
            "o",
            "--count",
            "3",
            "--seed",
            "9",
            "-W",
            "640",
            "-H",
            "480",
            "--min-tiles",
            "2",
            "--max-tiles",
            "4",
            "--arrangement",
            "random",
            "--size-policy",
            "preserve-horizontal",
            "--soft-edges",
            "--preview",
            "--quiet",
        ]);

        assert_eq!(cli.count, 3);
        assert_eq!(cli.seed, 9);
        assert!((cli.width - 640.0).abs() < f32::EPSILON);
        assert!((cli.height - 480.0).abs() < f32::EPSILON);
        assert_eq!((cli.min_tiles, cli.max_tiles), (2, 4));
        assert_eq!(cli.arrangement, InitialArrangement::Random);
        assert_eq!(cli.size_policy, SizePolicy::PreserveHorizontal);
        assert!(cli.soft_edges && cli.preview && cli.quiet);
        assert!(!cli.should_show_progress());
        assert!(cli.validate().is_ok());
    }

    // Tests validation of tile counts and canvas size
    // Verified by allowing an inverted tile range
    #[test]
    fn test_cli_validate() {
        let zero = Cli::parse_from(["collagen", "f", "n", "o", "--min-tiles", "0"]);
        assert!(zero.validate().is_err());

        let inverted = Cli::parse_from([
            "collagen",
            "f",
            "n",
            "o",
            "--min-tiles",
            "5",
            "--max-tiles",
            "4",
        ]);
        assert!(inverted.validate().is_err());

        let flat = Cli::parse_from(["collagen", "f", "n", "o", "-H", "0"]);
        assert!(flat.validate().is_err());
    }

    // Tests the shared canvas carries the CLI choices
    // Verified by ignoring the soft edge flag
    #[test]
    fn test_cli_canvas() {
        let cli = Cli::parse_from(["collagen", "f", "n", "o", "-W", "300", "-H", "200", "-e"]);
        let canvas = cli.canvas();
        assert!((canvas.width - 300.0).abs() < f32::EPSILON);
        assert!((canvas.height - 200.0).abs() < f32::EPSILON);
        assert_eq!(canvas.background_color, Rgba(DEFAULT_BACKGROUND));
        assert!(canvas.background.is_none());
        assert!(canvas.soft_edges);
    }

    // Tests output file naming
    // Verified by zero-padding the index
    #[test]
    fn test_output_path() {
        assert_eq!(
            BatchProcessor::output_path(Path::new("out"), 12, "png"),
            PathBuf::from("out/Collage12.png")
        );
    }

    // Tests a batch writes an image and metadata per collage
    // Verified by writing only the image
    #[test]
    fn test_batch_generates_outputs() {
        let root = TempDir::new().expect("temp dir");
        let (faces, non_faces) = fixture_dirs(root.path());
        let output = root.path().join("out");

        let cli = Cli::parse_from([
            "collagen",
            utf8(&faces),
            utf8(&non_faces),
            utf8(&output),
            "--count",
            "2",
            "-W",
            "200",
            "-H",
            "150",
            "--max-tiles",
            "3",
            "--soft-edges",
            "--quiet",
        ]);

        let summary = BatchProcessor::new(cli).process().expect("batch");
        assert_eq!(
            summary,
            BatchSummary {
                generated: 2,
                failed: 0
            }
        );

        for index in 0..2 {
            let png = BatchProcessor::output_path(&output, index, "png");
            let rendered = image::open(&png).expect("collage image");
            assert_eq!((rendered.width(), rendered.height()), (200, 150));

            let json = std::fs::read_to_string(BatchProcessor::output_path(&output, index, "json"))
                .expect("metadata");
            let records: serde_json::Value = serde_json::from_str(&json).expect("valid json");
            let count = records.as_array().map_or(0, Vec::len);
            assert!((1..=3).contains(&count));
        }
    }

    // Tests failing builds are counted without aborting the batch
    // Verified by propagating build errors from process
    #[test]
    fn test_batch_isolates_failures() {
        let root = TempDir::new().expect("temp dir");
        let (faces, non_faces) = fixture_dirs(root.path());
        std::fs::remove_file(non_faces.join("field.png")).expect("remove");
        std::fs::write(non_faces.join("broken.png"), b"not an image").expect("write");
        let output = root.path().join("out");

        let cli = Cli::parse_from([
            "collagen",
            utf8(&faces),
            utf8(&non_faces),
            utf8(&output),
            "--count",
            "3",
            "-W",
            "100",
            "-H",
            "100",
            "--quiet",
        ]);

        let summary = BatchProcessor::new(cli).process().expect("batch still completes");
        assert_eq!(
            summary,
            BatchSummary {
                generated: 0,
                failed: 3
            }
        );
    }

    // Tests missing source directories abort the batch
    // Verified by scanning lazily per build
    #[test]
    fn test_batch_missing_sources() {
        let root = TempDir::new().expect("temp dir");
        let missing = root.path().join("missing");
        let cli = Cli::parse_from([
            "collagen",
            utf8(&missing),
            utf8(&missing),
            utf8(root.path()),
            "--quiet",
        ]);

        let error = BatchProcessor::new(cli).process().expect_err("no sources");
        assert!(error.is_configuration());
    }
}
