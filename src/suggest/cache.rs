//! Bounded TTL cache for popular-word lists with single-flight loads.
//!
//! Concurrent callers for the same key share one in-flight load through a
//! `Shared` future registered in the inflight map, so the backend sees at
//! most one query per key at a time. A successful load is stored with a
//! fresh write timestamp; a failed load is logged, stores nothing, and
//! resolves every waiter to an empty list, leaving the key uncached so the
//! next caller retries the backend.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

type WordList = Arc<Vec<String>>;
type InflightLoad = Shared<BoxFuture<'static, WordList>>;

/// Shared popular-word cache. Clone-cheap (all `Arc`-wrapped internals).
#[derive(Clone)]
pub struct SuggestionCache {
    /// key → (written_at, word list)
    entries: Arc<DashMap<String, (Instant, WordList)>>,
    /// key → in-flight load shared by all waiters for that key
    inflight: Arc<DashMap<String, InflightLoad>>,
    max_entries: usize,
    ttl: Duration,
}

impl SuggestionCache {
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            inflight: Arc::new(DashMap::new()),
            max_entries,
            ttl,
        }
    }

    /// Return the cached word list if it exists and is fresh.
    pub fn get(&self, key: &str) -> Option<WordList> {
        let entry = self.entries.get(key)?;
        let (written_at, ref words) = *entry;
        if written_at.elapsed() < self.ttl {
            Some(words.clone())
        } else {
            None
        }
    }

    /// Return the cached list for `key`, loading it with `loader` on a miss.
    ///
    /// At most one loader runs per key at a time; concurrent callers await
    /// the same in-flight load and observe the same outcome. Never fails:
    /// a loader error resolves every waiter to an empty list.
    pub async fn get_or_load<F, Fut>(&self, key: &str, loader: F) -> WordList
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<Vec<String>>> + Send + 'static,
    {
        if let Some(words) = self.get(key) {
            return words;
        }

        let load = match self.inflight.entry(key.to_owned()) {
            Entry::Occupied(existing) => existing.get().clone(),
            Entry::Vacant(slot) => {
                // A winning load stores before it deregisters, so with the
                // slot held a fresh re-check settles the race with a flight
                // that completed between our miss and here.
                if let Some(words) = self.get(key) {
                    return words;
                }
                let cache = self.clone();
                let key = key.to_owned();
                let fut = loader();
                let load: InflightLoad = async move {
                    let words = match fut.await {
                        Ok(words) => {
                            let words = Arc::new(words);
                            cache.store(&key, words.clone());
                            words
                        }
                        Err(error) => {
                            // Fails soft: waiters see an empty list and the
                            // key stays uncached, so the next caller retries.
                            warn!(error = %error, "Failed to load popular words");
                            Arc::new(Vec::new())
                        }
                    };
                    cache.inflight.remove(&key);
                    words
                }
                .boxed()
                .shared();
                slot.insert(load.clone());
                load
            }
        };

        // Any waiter can drive the shared load, so the flight completes even
        // if the caller that registered it is cancelled.
        load.await
    }

    fn store(&self, key: &str, words: WordList) {
        self.entries.insert(key.to_owned(), (Instant::now(), words));
        if self.entries.len() > self.max_entries {
            self.evict();
        }
        debug!(key, entries = self.entries.len(), "popular word list cached");
    }

    /// Bring the table back within `max_entries`: expired entries go first,
    /// then the oldest-written entries until the bound holds.
    fn evict(&self) {
        self.entries
            .retain(|_, value| value.0.elapsed() < self.ttl);
        while self.entries.len() > self.max_entries {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|entry| entry.value().0)
                .map(|entry| entry.key().clone());
            let Some(key) = oldest else { break };
            self.entries.remove(&key);
            debug!(key = %key, "evicted popular word list");
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
