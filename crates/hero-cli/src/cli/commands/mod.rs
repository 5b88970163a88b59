//! CLI command handlers. Each command is in its own file.

mod chart;
mod completions;
mod config;
mod list;
mod show;

pub use chart::run_chart;
pub use completions::run_completions;
pub use config::run_config;
pub use list::run_list;
pub use show::run_show;

use anyhow::{bail, Context, Result};
use hero_core::api::CurlTransport;
use hero_core::config::WidgetConfig;
use hero_core::ui::WidgetView;
use hero_core::widget::EventOutcome;
use hero_core::{HeroClient, HeroDetailWidget, WidgetOptions};

/// Mount the widget on `view` and wait for the hero list.
pub(crate) async fn mount_loaded<V: WidgetView>(
    cfg: &WidgetConfig,
    view: V,
) -> Result<HeroDetailWidget<CurlTransport, V>> {
    let client = HeroClient::from_config(cfg)
        .with_context(|| format!("invalid base_url {:?}", cfg.base_url))?;
    let mut widget = HeroDetailWidget::mount(client, view, WidgetOptions::from(cfg));
    widget.initialize();
    for outcome in widget.settle().await {
        if let EventOutcome::Failed { message, .. } = outcome {
            bail!("failed to load hero list from {}: {}", cfg.base_url, message);
        }
    }
    Ok(widget)
}
