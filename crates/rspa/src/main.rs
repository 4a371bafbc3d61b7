mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rspa::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rspa")]
#[command(version, about = "rspa - render and inspect the demo single-page app", long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(short, long, default_value = "rspa.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Boot the app and print the page after each navigation
    Render {
        /// Paths to navigate to, in order
        paths: Vec<String>,

        /// Walk back through history afterwards
        #[arg(long)]
        back: bool,
    },

    /// List the route table
    Routes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render { paths, back } => {
            commands::render::execute(&config, &paths, back)?;
        }
        Commands::Routes => {
            commands::routes::execute(&config)?;
        }
    }

    Ok(())
}
