//! CLI entry point for chipset extraction and autotile expansion

use clap::Parser;
use remex::io::cli::{Cli, FileProcessor};
use remex::io::logging::init_logging;

fn main() -> remex::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level())?;
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
