//! CLI entry point for the dataset preview tool

use bandpack::io::cli::{Cli, PreviewProcessor};
use clap::Parser;

fn main() -> bandpack::Result<()> {
    let cli = Cli::parse();
    let processor = PreviewProcessor::new(cli);
    processor.process()
}
