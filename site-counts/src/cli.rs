//! Command-line preview for the block
//!
//! Loads a JSON site file into the in-memory host and renders the block
//! through the same registry dispatch the host page-assembly path uses.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

use crate::block::{self, BLOCK_NAME, BlockAttributes, BlockContext, BlockRegistry};
use crate::host::{ContentHost, MemoryHost};

#[derive(Parser, Debug)]
#[command(
    name = "site-counts",
    version,
    about = "Preview the site-counts block against a JSON site file"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the block markup
    Render {
        /// JSON site file holding the host content
        #[arg(long)]
        site: PathBuf,
        /// CSS class for the container element
        #[arg(long)]
        class_name: Option<String>,
        /// Id of the item to treat as currently displayed
        #[arg(long)]
        current_post_id: Option<u64>,
        /// Print load/render diagnostics
        #[arg(long)]
        verbose: bool,
    },
    /// List the site's public content types with their visible counts
    Types {
        /// JSON site file holding the host content
        #[arg(long)]
        site: PathBuf,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render {
            site,
            class_name,
            current_post_id,
            verbose,
        } => handle_render(site, class_name, current_post_id, verbose),
        Commands::Types { site } => handle_types(site),
    }
}

fn handle_render(
    site: PathBuf,
    class_name: Option<String>,
    current_post_id: Option<u64>,
    verbose: bool,
) -> Result<()> {
    let start_load = Instant::now();
    let host = MemoryHost::from_json_file(&site)?;
    if verbose {
        println!(
            "Loaded {} posts from {}",
            host.site().posts.len(),
            site.display().to_string().cyan()
        );
        println!(
            "Load time: {:.2}ms",
            start_load.elapsed().as_secs_f64() * 1000.0
        );
        println!();
    }

    let mut registry = BlockRegistry::new();
    block::init(&mut registry);

    let attributes = BlockAttributes { class_name };
    let context = BlockContext { current_post_id };

    let start_render = Instant::now();
    let markup = registry.render(BLOCK_NAME, &host, &attributes, "", &context)?;
    if verbose {
        println!(
            "Render time: {:.2}ms",
            start_render.elapsed().as_secs_f64() * 1000.0
        );
        println!();
    }
    print!("{}", markup);
    Ok(())
}

fn handle_types(site: PathBuf) -> Result<()> {
    let host = MemoryHost::from_json_file(&site)?;
    for ty in host.list_public_types()? {
        let count = host
            .count_by_status(&ty.slug, ty.visible_status())?
            .unwrap_or(0);
        let label = ty.display_name.as_deref().unwrap_or("");
        println!("{} {} ({})", ty.slug.bright_green().bold(), label, count);
    }
    Ok(())
}
