//! Catalog search with a minimum query length.

use tracing::debug;
use trivix_types::{CatalogItem, ItemKind};

use crate::timing::{Debouncer, Ticket};

pub const RESULTS_ID: &str = "search-results";
pub const RESULTS_CLASS: &str = "absolute top-full left-0 right-0 bg-gray-900/95 backdrop-blur-xl border border-purple-500/20 rounded-xl mt-2 max-h-64 overflow-y-auto z-50";
pub const NO_RESULTS: &str = "No results found";

/// Static stand-in for the search API.
pub fn mock_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("Digital Dreams", "CryptoBeats", ItemKind::Track),
        CatalogItem::new("Blockchain Beats", "Web3Sounds", ItemKind::Track),
        CatalogItem::new("NFT Symphony", "NFTunes", ItemKind::Album),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Remove the results container.
    Clear,
    /// Replace the container content; empty means "No results found".
    Results(Vec<CatalogItem>),
}

#[derive(Debug, Clone)]
pub struct SearchIndex {
    items: Vec<CatalogItem>,
    min_chars: usize,
}

impl SearchIndex {
    pub fn new(items: Vec<CatalogItem>, min_chars: usize) -> Self {
        Self { items, min_chars }
    }

    pub fn is_searchable(&self, query: &str) -> bool {
        query.chars().count() >= self.min_chars
    }

    pub fn evaluate(&self, query: &str) -> SearchOutcome {
        if !self.is_searchable(query) {
            return SearchOutcome::Clear;
        }
        debug!(query, "searching catalog");
        let needle = query.to_lowercase();
        let hits = self
            .items
            .iter()
            .filter(|item| {
                item.title.to_lowercase().contains(&needle)
                    || item.artist.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        SearchOutcome::Results(hits)
    }
}

/// What an `input` event asks the page to do right away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Too short: drop any pending search and clear now.
    ClearNow,
    /// Arm a timer for `ticket`; call [`SearchBox::fire`] when it expires.
    Arm(Ticket),
}

/// Per-input debounce state.
#[derive(Debug)]
pub struct SearchBox {
    debouncer: Debouncer<String>,
}

impl SearchBox {
    pub fn new(window: std::time::Duration) -> Self {
        Self {
            debouncer: Debouncer::new(window),
        }
    }

    pub fn window(&self) -> std::time::Duration {
        self.debouncer.window()
    }

    pub fn input(&mut self, index: &SearchIndex, query: &str) -> InputAction {
        if !index.is_searchable(query) {
            self.debouncer.cancel();
            return InputAction::ClearNow;
        }
        InputAction::Arm(self.debouncer.schedule(query.to_owned()))
    }

    /// `None` when a later keystroke superseded `ticket`.
    pub fn fire(&mut self, index: &SearchIndex, ticket: Ticket) -> Option<SearchOutcome> {
        let query = self.debouncer.fire(ticket)?;
        Some(index.evaluate(&query))
    }
}

/// Second line of a result row.
pub fn subtitle(item: &CatalogItem) -> String {
    format!("{} \u{2022} {}", item.artist, item.kind.as_str())
}
