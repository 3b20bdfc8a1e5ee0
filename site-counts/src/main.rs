use anyhow::Result;
use clap::Parser;

use site_counts::cli::{self, Cli};

fn main() -> Result<()> {
    env_logger::init();
    cli::run(Cli::parse())
}
