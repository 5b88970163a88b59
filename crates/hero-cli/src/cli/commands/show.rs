//! `hero show <query>` – select a hero and trigger the search.

use anyhow::Result;
use hero_core::api::CurlTransport;
use hero_core::config::WidgetConfig;
use hero_core::ui::{MemoryView, WidgetView};
use hero_core::HeroDetailWidget;

use super::mount_loaded;
use crate::cli::terminal_view::TerminalView;

pub async fn run_show(cfg: &WidgetConfig, query: &str, json: bool) -> Result<()> {
    if json {
        let widget = search(cfg, query, MemoryView::new()).await?;
        println!("{}", serde_json::to_string_pretty(widget.view())?);
    } else {
        search(cfg, query, TerminalView::new(std::io::stdout())).await?;
    }
    Ok(())
}

async fn search<V: WidgetView>(
    cfg: &WidgetConfig,
    query: &str,
    view: V,
) -> Result<HeroDetailWidget<CurlTransport, V>> {
    let mut widget = mount_loaded(cfg, view).await?;
    let selected = widget.select_first_match(query)?;
    tracing::info!(id = %selected.id, name = %selected.text, "showing hero");
    widget.on_search_triggered()?;
    widget.settle().await;
    Ok(widget)
}
