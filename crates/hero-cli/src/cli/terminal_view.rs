//! View that prints every region update as a line of text.

use hero_core::chart::PowerChart;
use hero_core::ui::{Region, SelectOption, WidgetView};
use std::io::Write;

/// Width of a full (rating 100) bar in characters.
const BAR_WIDTH: f64 = 40.0;

pub struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, region: Region, text: &str) {
        let _ = writeln!(self.out, "[{}] {}", region, text);
    }
}

impl<W: Write> WidgetView for TerminalView<W> {
    fn populate_options(&mut self, options: &[SelectOption]) {
        self.line(
            Region::SearchDropdown,
            &format!("{} heroes loaded", options.len()),
        );
    }

    fn set_trigger_enabled(&mut self, _enabled: bool) {}

    fn set_title(&mut self, text: &str) {
        self.line(Region::HeroTitle, text);
    }

    fn set_image_source(&mut self, url: &str) {
        self.line(Region::HeroImg, url);
    }

    fn set_occupation(&mut self, text: &str) {
        let text = if text.trim().is_empty() { "-" } else { text };
        self.line(Region::HeroOccupation, text);
    }

    fn render_chart(&mut self, chart: &PowerChart) {
        self.line(Region::HeroBarChart, chart.layout.title.text);
        let rows: Vec<String> = PowerChart::categories()
            .iter()
            .zip(chart.values())
            .map(|(category, value)| match value {
                Some(v) => {
                    let len = (v.clamp(0.0, 100.0) / 100.0 * BAR_WIDTH).round() as usize;
                    format!("  {:<13}{} {}", category, "#".repeat(len), v)
                }
                None => format!("  {:<13}n/a", category),
            })
            .collect();
        for row in rows {
            let _ = writeln!(self.out, "{}", row);
        }
    }

    fn show_error(&mut self, region: Region, message: &str) {
        self.line(region, &format!("error: {}", message));
    }

    fn clear_error(&mut self, _region: Region) {}
}
