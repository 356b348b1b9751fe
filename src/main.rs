use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokencss_core::{Flavor, StyleMap, TokenFile};
use tracing::{info, warn};

use crate::config::Config;

mod config;
mod logging;
mod output;

/// Generates CSS custom properties from design-token JSON files.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to the config file.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Run the whole pipeline but print the CSS instead of writing it.
    #[arg(short, long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load(&args.config)?;
    logging::init(&config.logging.level)?;
    info!("starting the generator");

    let mut styles = StyleMap::new();
    for file_name in &config.settings.input_files {
        let path = config.settings.input_dir.join(file_name);
        info!(file = %path.display(), "loading token document");
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let document = TokenFile::parse(&data)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        for collection in &document.collections {
            info!(collection = collection.name.as_str(), "generating css");
            styles
                .add_collection(collection, &config.css.prefix)
                .with_context(|| format!("failed to resolve {}", path.display()))?;
        }
    }
    if styles.is_empty() {
        warn!("no variables resolved, output will be empty");
    }

    let flavor = if config.css.tailwindcss {
        Flavor::Tailwind
    } else {
        Flavor::Plain
    };
    let css = styles.to_css(flavor);

    if args.dry_run {
        print!("{css}");
        info!("dry run, skipping the write");
        return Ok(());
    }

    let target = output::write(&config.css.output.dir, &config.css.output.file, &css)?;
    info!(file = %target.display(), "saved css");
    Ok(())
}
