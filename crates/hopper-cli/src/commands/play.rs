//! Play command: launches the windowed player

use anyhow::{Context, Result};
use hopper_player::{logging, GameConfig};
use std::path::PathBuf;

pub struct PlayArgs {
    pub config: Option<PathBuf>,
    pub fullscreen: bool,
}

pub fn run(args: PlayArgs) -> Result<()> {
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
