//! Shared state machine behind every resource list page.
//!
//! Holds rows, query, loading and error signals, and re-fetches whenever
//! the query changes or `reload` is called. Responses are sequenced: each
//! fetch takes a ticket, and a response is applied only if nothing newer
//! has been applied already, so a slow page-0 response can never
//! overwrite a fast page-1 response. A response landing after the owning
//! page unmounted is dropped the same way.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;
use leptos::task::spawn_local;
use libris_shared::Page;

use crate::api::ApiError;

/// Monotonic ticket dispenser for in-flight list fetches.
#[derive(Debug, Default)]
pub struct RequestSeq {
    issued: AtomicU64,
    applied: AtomicU64,
}

impl RequestSeq {
    pub const fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
            applied: AtomicU64::new(0),
        }
    }

    /// Take the ticket for a fetch that is about to be issued.
    pub fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether the response holding `ticket` may be applied. Commits the
    /// ticket when it wins; an older ticket loses forever afterwards.
    pub fn try_commit(&self, ticket: u64) -> bool {
        self.applied.fetch_max(ticket, Ordering::Relaxed) < ticket
    }
}

/// Normalized fetch result: the rows to show plus the count to report.
#[derive(Debug, Clone, PartialEq)]
pub struct Rows<S> {
    pub rows: Vec<S>,
    pub total: u64,
}

impl<S> From<Page<S>> for Rows<S> {
    fn from(page: Page<S>) -> Self {
        let fallback = page.content.len() as u64;
        Rows {
            rows: page.content,
            total: page.total_elements.unwrap_or(fallback),
        }
    }
}

impl<S> From<Vec<S>> for Rows<S> {
    fn from(rows: Vec<S>) -> Self {
        let total = rows.len() as u64;
        Rows { rows, total }
    }
}

/// Query of the paginated author/genre listings.
#[derive(Debug, Clone, PartialEq)]
pub struct PageQuery {
    pub page: u32,
    pub page_size: u32,
    pub name: String,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 25,
            name: String::new(),
        }
    }
}

pub struct ListState<S, Q>
where
    S: Send + Sync + 'static,
    Q: Send + Sync + 'static,
{
    pub rows: RwSignal<Vec<S>>,
    pub total: RwSignal<u64>,
    pub query: RwSignal<Q>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    version: RwSignal<u64>,
    seq: StoredValue<RequestSeq>,
}

impl<S, Q> Clone for ListState<S, Q>
where
    S: Send + Sync + 'static,
    Q: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, Q> Copy for ListState<S, Q>
where
    S: Send + Sync + 'static,
    Q: Send + Sync + 'static,
{
}

impl<S, Q> ListState<S, Q>
where
    S: Send + Sync + 'static,
    Q: Send + Sync + 'static,
{
    /// Re-run the current query, e.g. after a mutation or on Refresh.
    pub fn reload(&self) {
        self.version.update(|v| *v += 1);
    }
}

/// Wire up a list state: fetches on creation and on every query change.
pub fn use_list_state<S, Q, F, Fut>(initial: Q, fetch: F) -> ListState<S, Q>
where
    S: Clone + Send + Sync + 'static,
    Q: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(Q) -> Fut + 'static,
    Fut: Future<Output = Result<Rows<S>, ApiError>> + 'static,
{
    let state = ListState {
        rows: RwSignal::new(Vec::new()),
        total: RwSignal::new(0),
        query: RwSignal::new(initial),
        loading: RwSignal::new(true),
        error: RwSignal::new(None),
        version: RwSignal::new(0),
        seq: StoredValue::new(RequestSeq::new()),
    };

    Effect::new(move |_| {
        state.version.get();
        let query = state.query.get();

        let ticket = state.seq.with_value(|seq| seq.begin());
        state.loading.set(true);
        state.error.set(None);

        let request = fetch(query);
        spawn_local(async move {
            let result = request.await;

            // A newer fetch (or the page's teardown) wins over this one.
            let fresh = state
                .seq
                .try_with_value(|seq| seq.try_commit(ticket))
                .unwrap_or(false);
            if !fresh {
                return;
            }

            match result {
                Ok(data) => {
                    state.rows.set(data.rows);
                    state.total.set(data.total);
                }
                Err(err) => state.error.set(Some(err.to_string())),
            }
            state.loading.set(false);
        });
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_order_responses_apply() {
        let seq = RequestSeq::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(seq.try_commit(first));
        assert!(seq.try_commit(second));
    }

    #[test]
    fn stale_responses_are_discarded() {
        let seq = RequestSeq::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(seq.try_commit(second));
        assert!(!seq.try_commit(first));
    }

    #[test]
    fn duplicate_commits_are_rejected() {
        let seq = RequestSeq::new();
        let ticket = seq.begin();
        assert!(seq.try_commit(ticket));
        assert!(!seq.try_commit(ticket));
    }

    #[test]
    fn page_envelope_normalizes_row_count() {
        let page = Page {
            content: vec!["a", "b"],
            current_page: 0,
            page_size: 25,
            total_elements: None,
            total_pages: None,
        };
        assert_eq!(Rows::from(page).total, 2);

        let page = Page {
            content: vec!["a", "b"],
            current_page: 0,
            page_size: 2,
            total_elements: Some(41),
            total_pages: Some(21),
        };
        assert_eq!(Rows::from(page).total, 41);
    }
}
