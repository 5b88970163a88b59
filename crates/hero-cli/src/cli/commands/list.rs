//! `hero list` – print the hero list.

use anyhow::Result;
use hero_core::config::WidgetConfig;
use hero_core::ui::MemoryView;

use super::mount_loaded;

pub async fn run_list(cfg: &WidgetConfig, filter: Option<&str>) -> Result<()> {
    let widget = mount_loaded(cfg, MemoryView::new()).await?;
    let options = widget.search(filter.unwrap_or(""));
    if options.is_empty() {
        println!("No heroes match.");
        return Ok(());
    }
    println!("{:<6} {}", "ID", "NAME");
    for o in options {
        println!("{:<6} {}", o.id, o.text);
    }
    Ok(())
}
