//! Searchable single-selection control.

use crate::api::{HeroId, HeroSummary};
use serde::Serialize;

/// One dropdown entry: hero id and display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub id: HeroId,
    pub text: String,
}

impl From<HeroSummary> for SelectOption {
    fn from(h: HeroSummary) -> Self {
        Self {
            id: h.id,
            text: h.name,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no hero with id {0}")]
    UnknownId(HeroId),
    #[error("no hero matches {0:?}")]
    NoMatch(String),
}

#[derive(Debug, Clone, Default)]
pub struct SelectionControl {
    options: Vec<SelectOption>,
    selected: Option<usize>,
}

impl SelectionControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all options, keeping the current selection if its id survives.
    pub fn populate(&mut self, options: Vec<SelectOption>) {
        let previous = self.selected().map(|o| o.id.clone());
        self.options = options;
        self.selected = previous.and_then(|id| self.position(&id));
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Options whose text contains `query`, ignoring case, in source order.
    pub fn filter(&self, query: &str) -> Vec<&SelectOption> {
        let needle = query.trim().to_lowercase();
        self.options
            .iter()
            .filter(|o| needle.is_empty() || o.text.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn select(&mut self, id: &HeroId) -> Result<&SelectOption, SelectionError> {
        let idx = self
            .position(id)
            .ok_or_else(|| SelectionError::UnknownId(id.clone()))?;
        self.selected = Some(idx);
        Ok(&self.options[idx])
    }

    /// Select by exact id if `query` is one, else the first option whose
    /// text matches.
    pub fn select_first_match(&mut self, query: &str) -> Result<&SelectOption, SelectionError> {
        let by_id = HeroId::new(query).and_then(|id| self.position(&id));
        let idx = match by_id {
            Some(idx) => idx,
            None => {
                let needle = query.trim().to_lowercase();
                self.options
                    .iter()
                    .position(|o| !needle.is_empty() && o.text.to_lowercase().contains(&needle))
                    .ok_or_else(|| SelectionError::NoMatch(query.to_string()))?
            }
        };
        self.selected = Some(idx);
        Ok(&self.options[idx])
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    fn position(&self, id: &HeroId) -> Option<usize> {
        self.options.iter().position(|o| &o.id == id)
    }
}
