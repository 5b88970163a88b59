//! `hero chart <id>` – print the power-stats chart JSON.

use anyhow::{Context, Result};
use hero_core::chart::PowerChart;
use hero_core::config::WidgetConfig;
use hero_core::{HeroClient, HeroId};

pub async fn run_chart(cfg: &WidgetConfig, id: &str) -> Result<()> {
    let id = HeroId::new(id).context("hero id must not be empty")?;
    let client = HeroClient::from_config(cfg)
        .with_context(|| format!("invalid base_url {:?}", cfg.base_url))?;
    let stats = tokio::task::spawn_blocking(move || client.power_stats(&id))
        .await
        .context("power stats task join")??;
    let chart = PowerChart::from_stats(&stats);
    println!("{}", serde_json::to_string_pretty(&chart)?);
    Ok(())
}
