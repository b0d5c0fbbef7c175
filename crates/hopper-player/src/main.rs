//! Hopper Player - Standalone game player binary
//!
//! Usage:
//!   hopper-player [--config <hopper.toml>] [--fullscreen]

use anyhow::{Context, Result};
use clap::Parser;
use hopper_player::{logging, GameConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hopper-player")]
#[command(about = "Hopper game player - run, jump and boost across a wrapping screen")]
struct Args {
    /// Path to config file (defaults to ./hopper.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Launch in fullscreen mode
    #[arg(long)]
    fullscreen: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init("info");

    let config = GameConfig::load(args.config.as_deref()).context("Failed to load config")?;

    println!("Controls:");
    println!("  Left/Right - Walk");
    println!("  Up         - Jump");
    println!("  Space      - Boost (once per jump)");
    println!("  F11        - Toggle fullscreen");
    println!("  Escape     - Exit");

    hopper_player::run(config, args.fullscreen)
}
