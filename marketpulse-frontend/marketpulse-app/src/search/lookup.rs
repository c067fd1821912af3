use super::{Lookup, SearchSession};
use leptos::prelude::*;
use marketpulse_api_types::StockWithWatchlistStatus;
#[cfg(test)]
use std::{cell::RefCell, rc::Rc};
use std::{fmt::Display, future::Future};

/// Somewhere a `SearchSession` lives that a lookup can write back into.
pub trait SessionCell {
    /// Returns `None` once the session is gone.
    fn update_session<R>(&self, f: impl FnOnce(&mut SearchSession) -> R) -> Option<R>;
}

impl SessionCell for RwSignal<SearchSession> {
    fn update_session<R>(&self, f: impl FnOnce(&mut SearchSession) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[cfg(test)]
impl SessionCell for Rc<RefCell<SearchSession>> {
    fn update_session<R>(&self, f: impl FnOnce(&mut SearchSession) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Runs the lookup the session asks for once the debounce fires, then
/// writes the outcome back unless a newer lookup has started meanwhile.
pub async fn run_lookup<S, F, Fut, E>(session: S, search: F)
where
    S: SessionCell,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<Vec<StockWithWatchlistStatus>, E>>,
    E: Display,
{
    let Some(Lookup::Remote { ticket, query }) = session.update_session(SearchSession::begin_lookup)
    else {
        return;
    };
    let outcome = search(query.clone()).await;
    if let Err(e) = &outcome {
        log::warn!("stock search for {query:?} failed: {e}");
    }
    if session.update_session(|s| s.finish(ticket, outcome)) == Some(false) {
        log::debug!("dropped stale results for {query:?}");
    }
}
