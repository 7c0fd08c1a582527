//! Autocomplete session: sequence-numbered queries so late responses from
//! superseded searches can never clobber newer results, plus a debounced
//! driver that collapses keystroke bursts.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::{Stream, StreamExt};
use tracing::debug;

use super::{Destination, DestinationSource};
use crate::config::SearchConfig;

pub struct SearchSession {
    source: Arc<dyn DestinationSource>,
    min_query_len: usize,
    max_results: usize,
    debounce: Duration,
    latest: AtomicU64,
}

impl SearchSession {
    pub fn new(source: Arc<dyn DestinationSource>, config: &SearchConfig) -> Self {
        Self {
            source,
            min_query_len: config.min_query_len,
            max_results: config.max_results,
            debounce: Duration::from_millis(config.debounce_ms),
            latest: AtomicU64::new(0),
        }
    }

    /// Tag a new query. Every call supersedes all earlier ones.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Accept a completed query's results, or discard them as stale when a
    /// newer query has been issued since.
    pub fn accept(&self, seq: u64, results: Vec<Destination>) -> Option<Vec<Destination>> {
        if seq == self.latest.load(Ordering::SeqCst) {
            Some(results)
        } else {
            debug!("Discarding stale search result (seq {})", seq);
            None
        }
    }

    /// Issue, fetch, and accept in one go. Returns `None` when the result
    /// arrived stale. Short queries and source failures resolve to an
    /// empty (but fresh) result set rather than an error.
    pub async fn search(&self, query: &str) -> Option<Vec<Destination>> {
        let seq = self.issue();

        if query.trim().len() < self.min_query_len {
            return self.accept(seq, Vec::new());
        }

        let results = match self.source.search(query).await {
            Ok(mut results) => {
                results.truncate(self.max_results);
                results
            }
            Err(e) => {
                debug!("Destination source failed, returning no results: {}", e);
                Vec::new()
            }
        };

        self.accept(seq, results)
    }
}

/// Consume a stream of query strings, debounce them over the session's
/// quiet window, and invoke `on_results` with each fresh (non-stale)
/// result set. Returns once the stream ends, after flushing any pending
/// query.
pub async fn drive_debounced<S>(
    session: &SearchSession,
    queries: S,
    mut on_results: impl FnMut(&str, Vec<Destination>),
) where
    S: Stream<Item = String> + Unpin,
{
    let mut queries = queries.fuse();
    let mut pending: Option<String> = None;

    loop {
        tokio::select! {
            next = queries.next() => match next {
                Some(query) => pending = Some(query),
                None => {
                    if let Some(query) = pending.take() {
                        if let Some(results) = session.search(&query).await {
                            on_results(&query, results);
                        }
                    }
                    break;
                }
            },
            _ = tokio::time::sleep(session.debounce), if pending.is_some() => {
                let query = pending.take().unwrap();
                if let Some(results) = session.search(&query).await {
                    on_results(&query, results);
                }
            }
        }
    }
}
