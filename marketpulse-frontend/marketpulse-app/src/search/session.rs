use marketpulse_api_types::StockWithWatchlistStatus;
use std::sync::Arc;

/// Number of entries shown while browsing the popular list.
pub const POPULAR_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Nothing typed, the popular list is shown.
    Browse,
    /// A non-blank query filters results through the remote lookup.
    Search,
}

/// Identifies one remote lookup. Only the most recently issued ticket may
/// write results back into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LookupTicket(u64);

/// What the debounced handler has to do once it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Browse mode: the initial list was restored, no call is needed.
    RestoreInitial,
    /// Search mode: call the search function with the trimmed query.
    Remote { ticket: LookupTicket, query: String },
}

/// State of one search dialog, from mount to unmount.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    initial: Arc<Vec<StockWithWatchlistStatus>>,
    results: Vec<StockWithWatchlistStatus>,
    query: String,
    open: bool,
    loading: bool,
    latest: u64,
}

impl SearchSession {
    pub fn new(initial: impl Into<Arc<Vec<StockWithWatchlistStatus>>>) -> Self {
        let initial = initial.into();
        Self {
            results: initial.as_ref().clone(),
            initial,
            query: String::new(),
            open: false,
            loading: false,
            latest: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> SearchMode {
        if self.query.trim().is_empty() {
            SearchMode::Browse
        } else {
            SearchMode::Search
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn initial(&self) -> &[StockWithWatchlistStatus] {
        &self.initial
    }

    /// The list the dialog renders right now.
    pub fn displayed(&self) -> &[StockWithWatchlistStatus] {
        match self.mode() {
            SearchMode::Browse => &self.initial[..self.initial.len().min(POPULAR_LIMIT)],
            SearchMode::Search => &self.results,
        }
    }

    pub fn heading(&self) -> String {
        let title = match self.mode() {
            SearchMode::Browse => "Popular stocks",
            SearchMode::Search => "Search results",
        };
        format!("{title} ({})", self.displayed().len())
    }

    pub fn empty_message(&self) -> &'static str {
        match self.mode() {
            SearchMode::Browse => "No stocks available",
            SearchMode::Search => "No results found",
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.reset();
    }

    /// Flips the dialog and returns whether it is open afterwards.
    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
        } else {
            self.open();
        }
        self.open
    }

    /// Called when a result link is followed.
    pub fn select(&mut self) {
        self.reset();
    }

    /// Runs when the debounce timer fires.
    pub fn begin_lookup(&mut self) -> Lookup {
        self.latest += 1;
        match self.mode() {
            SearchMode::Browse => {
                self.results = self.initial.as_ref().clone();
                self.loading = false;
                Lookup::RestoreInitial
            }
            SearchMode::Search => {
                self.loading = true;
                Lookup::Remote {
                    ticket: LookupTicket(self.latest),
                    query: self.query.trim().to_string(),
                }
            }
        }
    }

    /// Applies the outcome of a remote lookup. Returns `false` when the
    /// outcome is stale and was dropped.
    pub fn finish<E>(
        &mut self,
        ticket: LookupTicket,
        outcome: Result<Vec<StockWithWatchlistStatus>, E>,
    ) -> bool {
        if ticket.0 != self.latest {
            return false;
        }
        self.loading = false;
        self.results = outcome.unwrap_or_default();
        true
    }

    fn reset(&mut self) {
        // outstanding tickets must not write into the fresh state
        self.latest += 1;
        self.open = false;
        self.loading = false;
        self.query.clear();
        self.results = self.initial.as_ref().clone();
    }
}
