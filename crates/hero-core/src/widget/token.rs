//! Per-search request tokens.

/// Identifies one search trigger. Later triggers get larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SelectionToken(u64);

impl SelectionToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Issues tokens and remembers the latest one.
#[derive(Debug, Default)]
pub(crate) struct TokenSource {
    latest: Option<SelectionToken>,
}

impl TokenSource {
    pub(crate) fn issue(&mut self) -> SelectionToken {
        let next = SelectionToken(self.latest.map_or(1, |t| t.0 + 1));
        self.latest = Some(next);
        next
    }

    pub(crate) fn is_current(&self, token: SelectionToken) -> bool {
        self.latest == Some(token)
    }
}
