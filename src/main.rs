use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{ConfigCommand, GroceryCommand, RecipeCommand, StatsCommand};
use config::Config;
use recipebox_core::{FileStore, RecipeStore};

#[derive(Parser)]
#[command(name = "recipebox")]
#[command(version)]
#[command(about = "Keep recipes and a grocery list on your machine", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage recipes
    Recipe(RecipeCommand),

    /// Manage the grocery list
    Grocery(GroceryCommand),

    /// Show collection totals
    Stats(StatsCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.clone())?;

    // Initialize tracing; RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.value.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Some(Commands::Recipe(cmd)) => {
            let mut store = open_store(&config);
            cmd.run(&mut store)?;
        }
        Some(Commands::Grocery(cmd)) => {
            let mut store = open_store(&config);
            cmd.run(&mut store)?;
        }
        Some(Commands::Stats(cmd)) => {
            let store = open_store(&config);
            cmd.run(&store)?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config, cli.config)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

fn open_store(config: &Config) -> RecipeStore<FileStore> {
    let storage = FileStore::new(config.data_dir.value.clone());
    tracing::debug!("Using data directory {}", storage.data_dir().display());
    RecipeStore::load(storage)
}
