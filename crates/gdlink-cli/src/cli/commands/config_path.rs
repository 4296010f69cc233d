//! `gdlink config-path` – print where config.toml lives.

use anyhow::Result;
use gdlink_core::config;

pub fn run_config_path() -> Result<()> {
    println!("{}", config::config_path()?.display());
    Ok(())
}
