//! CLI entry point for the domino tiling feasibility checker

use clap::Parser;
use flowtile::io::cli::{Cli, FileProcessor};

fn main() -> flowtile::Result<()> {
    let cli = Cli::parse();
    let processor = FileProcessor::new(cli);
    processor.process()
}
