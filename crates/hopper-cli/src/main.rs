//! Hopper CLI - Command-line interface for the Hopper platformer

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{config, play, simulate};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hopper")]
#[command(about = "Side-scrolling platformer physics, headless or windowed", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a key script headlessly and print every tick
    Simulate {
        /// Path to script file
        script: PathBuf,

        /// Number of ticks to run (overrides the script)
        #[arg(long)]
        ticks: Option<u64>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Path to config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Open a window and play
    Play {
        /// Path to config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Launch in fullscreen mode
        #[arg(long)]
        fullscreen: bool,
    },

    /// Print the default configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            script,
            ticks,
            format,
            config,
        } => simulate::run(simulate::SimulateArgs {
            script,
            ticks,
            format,
            config,
        }),
        Commands::Play { config, fullscreen } => play::run(play::PlayArgs { config, fullscreen }),
        Commands::Config => config::run(),
    }
}
