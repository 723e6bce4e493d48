//! CLI entry point for Gabor sheet and random set generation

use clap::Parser;
use gaborsheet::io::cli::{Cli, Runner};

fn main() -> gaborsheet::Result<()> {
    let cli = Cli::parse();
    let mut runner = Runner::new(cli);
    runner.run()
}
