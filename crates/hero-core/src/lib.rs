pub mod config;
pub mod logging;

pub mod api;
pub mod chart;
pub mod retry;
pub mod ui;
pub mod widget;

pub use api::{HeroClient, HeroId};
pub use widget::{HeroDetailWidget, WidgetOptions};
