//! In-memory view that records the current state of every region.

use super::{Region, SelectOption, WidgetView};
use crate::chart::PowerChart;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize)]
pub struct MemoryView {
    pub options: Vec<SelectOption>,
    pub trigger_enabled: bool,
    pub title: Option<String>,
    pub image_source: Option<String>,
    pub occupation: Option<String>,
    pub chart: Option<PowerChart>,
    pub errors: BTreeMap<Region, String>,
    /// Number of chart renders so far.
    pub chart_renders: usize,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self, region: Region) -> Option<&str> {
        self.errors.get(&region).map(String::as_str)
    }
}

impl WidgetView for MemoryView {
    fn populate_options(&mut self, options: &[SelectOption]) {
        self.options = options.to_vec();
        self.errors.remove(&Region::SearchDropdown);
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger_enabled = enabled;
    }

    fn set_title(&mut self, text: &str) {
        self.title = Some(text.to_string());
        self.errors.remove(&Region::HeroTitle);
    }

    fn set_image_source(&mut self, url: &str) {
        self.image_source = Some(url.to_string());
        self.errors.remove(&Region::HeroImg);
    }

    fn set_occupation(&mut self, text: &str) {
        self.occupation = Some(text.to_string());
        self.errors.remove(&Region::HeroOccupation);
    }

    fn render_chart(&mut self, chart: &PowerChart) {
        self.chart = Some(chart.clone());
        self.chart_renders += 1;
        self.errors.remove(&Region::HeroBarChart);
    }

    fn show_error(&mut self, region: Region, message: &str) {
        self.errors.insert(region, message.to_string());
    }

    fn clear_error(&mut self, region: Region) {
        self.errors.remove(&region);
    }
}
