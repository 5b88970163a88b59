//! `hero config` – show the effective configuration.

use anyhow::Result;
use hero_core::config::{self, WidgetConfig};

pub fn run_config(cfg: &WidgetConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
