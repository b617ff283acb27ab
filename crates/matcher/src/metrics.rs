// Metrics hooks for the `matcher` crate.
//
// Callers install a global `SearchMetrics` implementation via
// [`set_search_metrics`]; every `Matcher::search` then reports its latency and
// hit count. This keeps instrumentation decoupled from any specific metrics
// backend.
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for search operations.
pub trait SearchMetrics: Send + Sync {
    /// Record the outcome of a search.
    ///
    /// `query_tokens` is the number of tokens in the normalized query,
    /// `latency` the wall-clock duration of scoring and ranking, and
    /// `hit_count` the number of products returned after truncation.
    fn record_search(&self, query_tokens: usize, latency: Duration, hit_count: usize);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn SearchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn SearchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn SearchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    guard.clone()
}

/// Install or clear the global search metrics recorder.
///
/// This is typically called once during service startup so all `Matcher`
/// instances share the same metrics backend.
pub fn set_search_metrics(recorder: Option<Arc<dyn SearchMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = recorder;
}
