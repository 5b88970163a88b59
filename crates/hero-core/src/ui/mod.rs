//! View bindings: the regions the widget drives and the selection control.

mod memory;
mod selection;

pub use memory::MemoryView;
pub use selection::{SelectOption, SelectionControl, SelectionError};

use crate::chart::PowerChart;
use serde::Serialize;
use std::fmt;

/// UI regions, named by their element ids on the hero page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    SearchDropdown,
    Search,
    HeroTitle,
    HeroImg,
    HeroOccupation,
    HeroBarChart,
}

impl Region {
    pub const fn id(self) -> &'static str {
        match self {
            Region::SearchDropdown => "search-dropdown",
            Region::Search => "search",
            Region::HeroTitle => "hero-title",
            Region::HeroImg => "hero-img",
            Region::HeroOccupation => "hero-occupation",
            Region::HeroBarChart => "hero-bar-chart",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// UI-binding handle injected into the widget. Only the widget calls these,
/// one at a time.
pub trait WidgetView {
    /// Replace the dropdown options (source order).
    fn populate_options(&mut self, options: &[SelectOption]);
    fn set_trigger_enabled(&mut self, enabled: bool);
    fn set_title(&mut self, text: &str);
    fn set_image_source(&mut self, url: &str);
    fn set_occupation(&mut self, text: &str);
    /// Render the chart, replacing any previous one.
    fn render_chart(&mut self, chart: &PowerChart);
    fn show_error(&mut self, region: Region, message: &str);
    fn clear_error(&mut self, region: Region);
}
