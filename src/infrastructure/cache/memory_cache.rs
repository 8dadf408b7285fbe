//! In-process TTL cache backed by `DashMap`.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

/// Minimum time between two expiry sweeps triggered by `set`.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

type Entries = DashMap<String, (String, Instant)>;

/// Thread-safe in-memory cache.
///
/// Each entry stores its value together with its expiry instant. Expired
/// entries are never returned. They are removed when read, by a sweep that
/// `set` runs at most once per [`SWEEP_INTERVAL`], and by the task started
/// with [`MemoryCache::spawn_eviction`].
///
/// Entries are local to the process, so this backend only suits
/// single-instance deployments or a Redis outage at startup.
#[derive(Clone)]
pub struct MemoryCache {
    inner: Arc<Entries>,
    last_sweep: Arc<Mutex<Instant>>,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
            last_sweep: Arc::new(Mutex::new(Instant::now())),
        }
    }
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently stored, expired ones included.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes all expired entries.
    pub fn evict_expired(&self) {
        evict(&self.inner);
    }

    /// Starts a background task that evicts expired entries every `every`.
    ///
    /// The task stops on its own once every handle to this cache is dropped.
    pub fn spawn_eviction(&self, every: Duration) -> JoinHandle<()> {
        let entries = Arc::downgrade(&self.inner);

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                match entries.upgrade() {
                    Some(entries) => evict(&entries),
                    None => break,
                }
            }
            debug!("Memory cache eviction task stopped");
        })
    }

    /// Sweeps expired entries if the last sweep is older than [`SWEEP_INTERVAL`].
    fn maybe_sweep(&self) {
        let Ok(mut last_sweep) = self.last_sweep.try_lock() else {
            return;
        };
        if last_sweep.elapsed() >= SWEEP_INTERVAL {
            *last_sweep = Instant::now();
            drop(last_sweep);
            self.evict_expired();
        }
    }
}

fn evict(entries: &Entries) {
    let now = Instant::now();
    let before = entries.len();
    entries.retain(|_, (_, expires_at)| *expires_at > now);
    let removed = before.saturating_sub(entries.len());
    if removed > 0 {
        debug!("Evicted {} expired cache entries", removed);
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        if let Some(entry) = self.inner.get(key) {
            let (value, expires_at) = entry.value();
            if *expires_at > Instant::now() {
                debug!("Cache HIT: {}", key);
                return Ok(Some(value.clone()));
            }
            drop(entry);
            // A concurrent `set` may have refreshed the entry since the read.
            self.inner
                .remove_if(key, |_, (_, expires_at)| *expires_at <= Instant::now());
            debug!("Cache EXPIRED: {}", key);
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        self.maybe_sweep();
        self.inner
            .insert(key.to_string(), (value.to_string(), Instant::now() + ttl));
        debug!("Cache SET: {} (TTL: {}s)", key, ttl.as_secs());
        Ok(())
    }

    async fn purge(&self) -> CacheResult<u64> {
        let removed = self.inner.len() as u64;
        self.inner.clear();
        Ok(removed)
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
