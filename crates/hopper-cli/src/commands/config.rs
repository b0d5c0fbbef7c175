//! Config command

use anyhow::{Context, Result};
use hopper_player::GameConfig;

pub fn run() -> Result<()> {
    let text = GameConfig::default()
        .to_toml()
        .context("Failed to serialize default config")?;
    print!("{}", text);
    Ok(())
}
