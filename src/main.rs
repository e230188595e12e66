//! CLI entry point for batch collage generation

use clap::Parser;
use collagen::io::cli::{BatchProcessor, Cli};
use collagen::io::configuration::DEFAULT_LOG_FILTER;
use collagen::io::logging::init_logging;

fn main() -> collagen::Result<()> {
    let cli = Cli::parse();
    init_logging(DEFAULT_LOG_FILTER);
    let mut processor = BatchProcessor::new(cli);
    processor.process().map(|_| ())
}
