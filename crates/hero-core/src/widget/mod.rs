//! Hero detail widget controller.
//!
//! The widget owns the view and is the only code that mutates it. Fetches run
//! as blocking curl transfers on the tokio blocking pool, tracked in a
//! [`JoinSet`]; each completion comes back as a [`WidgetEvent`] and is applied
//! one at a time by [`HeroDetailWidget::handle_event`], so region updates
//! never interleave. A fetch that panics still yields a failure event.
//!
//! Every search trigger takes a fresh [`SelectionToken`]. With
//! [`StalePolicy::Discard`] responses carrying an older token are dropped and
//! the last-clicked hero always wins; with [`StalePolicy::LastArrival`] each
//! region shows whichever response arrived last.

mod event;
mod token;


pub use event::{EventOutcome, WidgetEvent};
pub use token::SelectionToken;

use crate::api::{ApiError, HeroClient, HeroId, HeroSummary, HttpTransport};
use crate::chart::PowerChart;
use crate::config::{ErrorDisplay, StalePolicy, WidgetConfig};
use crate::ui::{Region, SelectOption, SelectionControl, SelectionError, WidgetView};
use event::Fetch;
use std::sync::Arc;
use token::TokenSource;
use tokio::task::JoinSet;

const NO_SELECTION_MESSAGE: &str = "select a hero first";

/// Behaviour switches taken from [`WidgetConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetOptions {
    pub error_display: ErrorDisplay,
    pub stale_responses: StalePolicy,
    pub disable_trigger_until_loaded: bool,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self::from(&WidgetConfig::default())
    }
}

impl From<&WidgetConfig> for WidgetOptions {
    fn from(cfg: &WidgetConfig) -> Self {
        Self {
            error_display: cfg.error_display,
            stale_responses: cfg.stale_responses,
            disable_trigger_until_loaded: cfg.disable_trigger_until_loaded,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("no hero selected")]
    NoSelection,
    #[error("hero list has not loaded yet")]
    NotLoaded,
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

pub struct HeroDetailWidget<T, V> {
    client: Arc<HeroClient<T>>,
    view: V,
    selection: SelectionControl,
    options: WidgetOptions,
    tokens: TokenSource,
    fetches: JoinSet<WidgetEvent>,
    loaded: bool,
}

impl<T: HttpTransport, V: WidgetView> HeroDetailWidget<T, V> {
    /// Attach the widget to a view. Nothing is requested until [`initialize`].
    ///
    /// [`initialize`]: HeroDetailWidget::initialize
    pub fn mount(client: HeroClient<T>, mut view: V, options: WidgetOptions) -> Self {
        view.set_trigger_enabled(!options.disable_trigger_until_loaded);
        Self {
            client: Arc::new(client),
            view,
            selection: SelectionControl::new(),
            options,
            tokens: TokenSource::default(),
            fetches: JoinSet::new(),
            loaded: false,
        }
    }

    /// Request the hero list. Must be called from within a tokio runtime.
    pub fn initialize(&mut self) {
        tracing::debug!(base = %self.client.base_url(), "loading hero list");
        self.spawn_fetch(Fetch::Heroes);
    }

    /// Handle a click on the search trigger.
    ///
    /// Sets the title from the selected option immediately, then starts the
    /// image, occupation and power-stats requests. Must be called from within
    /// a tokio runtime.
    pub fn on_search_triggered(&mut self) -> Result<SelectionToken, WidgetError> {
        if self.options.disable_trigger_until_loaded && !self.loaded {
            return Err(WidgetError::NotLoaded);
        }
        let Some(selected) = self.selection.selected().cloned() else {
            tracing::warn!("search triggered without a selection");
            if self.options.error_display == ErrorDisplay::Region {
                self.view.show_error(Region::HeroTitle, NO_SELECTION_MESSAGE);
            }
            return Err(WidgetError::NoSelection);
        };

        self.view.set_title(&selected.text);
        for region in [Region::HeroImg, Region::HeroOccupation, Region::HeroBarChart] {
            self.view.clear_error(region);
        }

        let token = self.tokens.issue();
        tracing::debug!(id = %selected.id, token = token.value(), "search triggered");

        let id = selected.id;
        self.spawn_fetch(Fetch::Image {
            token,
            id: id.clone(),
        });
        self.spawn_fetch(Fetch::Occupation {
            token,
            id: id.clone(),
        });
        self.spawn_fetch(Fetch::PowerStats { token, id });
        Ok(token)
    }

    /// Apply one completion to the view.
    pub fn handle_event(&mut self, event: WidgetEvent) -> EventOutcome {
        let region = event.region();
        if let Some(token) = event.token() {
            if !self.tokens.is_current(token)
                && self.options.stale_responses == StalePolicy::Discard
            {
                tracing::debug!(%region, token = token.value(), "discarding stale response");
                return EventOutcome::Discarded(region);
            }
        }
        let hero = event.hero_id().cloned();

        let result = match event {
            WidgetEvent::HeroesLoaded(result) => result.map(|heroes| self.apply_heroes(heroes)),
            WidgetEvent::ImageLoaded { result, .. } => {
                result.map(|image| self.view.set_image_source(&image.url))
            }
            WidgetEvent::OccupationLoaded { result, .. } => {
                result.map(|o| self.view.set_occupation(&o.occupation))
            }
            WidgetEvent::PowerStatsLoaded { result, .. } => {
                result.map(|stats| self.view.render_chart(&PowerChart::from_stats(&stats)))
            }
        };

        match result {
            Ok(()) => EventOutcome::Applied(region),
            Err(err) => {
                self.report(region, hero.as_ref(), &err);
                EventOutcome::Failed {
                    region,
                    message: err.to_string(),
                }
            }
        }
    }

    /// Wait for the next completion and apply it. `None` when nothing is in flight.
    pub async fn next_event(&mut self) -> Option<EventOutcome> {
        loop {
            match self.fetches.join_next().await? {
                Ok(event) => return Some(self.handle_event(event)),
                // Only reachable if the runtime cancels the task during shutdown.
                Err(e) => tracing::warn!("fetch task join: {}", e),
            }
        }
    }

    /// Apply completions until no request is in flight.
    pub async fn settle(&mut self) -> Vec<EventOutcome> {
        let mut outcomes = Vec::new();
        while let Some(outcome) = self.next_event().await {
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Options matching `query` (case-insensitive substring), in list order.
    pub fn search(&self, query: &str) -> Vec<SelectOption> {
        self.selection.filter(query).into_iter().cloned().collect()
    }

    pub fn select(&mut self, id: &HeroId) -> Result<SelectOption, WidgetError> {
        Ok(self.selection.select(id)?.clone())
    }

    /// Select by id, or by the first option whose name contains `query`.
    pub fn select_first_match(&mut self, query: &str) -> Result<SelectOption, WidgetError> {
        Ok(self.selection.select_first_match(query)?.clone())
    }

    pub fn selection(&self) -> &SelectionControl {
        &self.selection
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn in_flight(&self) -> usize {
        self.fetches.len()
    }

    pub fn client(&self) -> &HeroClient<T> {
        &self.client
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn apply_heroes(&mut self, heroes: Vec<HeroSummary>) {
        let count = heroes.len();
        self.selection
            .populate(heroes.into_iter().map(SelectOption::from).collect());
        self.view.populate_options(self.selection.options());
        self.loaded = true;
        self.view.set_trigger_enabled(true);
        tracing::info!(count, "hero list loaded");
    }

    fn report(&mut self, region: Region, hero: Option<&HeroId>, err: &ApiError) {
        match hero {
            Some(id) => tracing::warn!(%region, %id, "hero request failed: {}", err),
            None => tracing::warn!(%region, "hero request failed: {}", err),
        }
        if self.options.error_display == ErrorDisplay::Region {
            self.view.show_error(region, &err.user_message());
        }
    }

    fn spawn_fetch(&mut self, fetch: Fetch) {
        let client = Arc::clone(&self.client);
        self.fetches.spawn(async move {
            let request = fetch.clone();
            match tokio::task::spawn_blocking(move || request.run(&client)).await {
                Ok(event) => event,
                Err(e) => fetch.interrupted(e.to_string()),
            }
        });
    }
}
