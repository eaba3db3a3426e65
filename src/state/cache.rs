use std::cell::Cell;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Source of the current time for expiry checks.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    start: Instant,
    elapsed: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            elapsed: Cell::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.start + self.elapsed.get()
    }
}

/// Keyed cache with per-entry time-to-live.
///
/// Callers own the cache and pass it to whatever needs it.
pub trait KeyedCache<K, V> {
    /// Value for `key` unless it is missing or expired.
    fn get(&self, key: &K) -> Option<V>;

    fn put(&mut self, key: K, value: V, ttl: Duration);

    /// Drop expired entries. Returns how many were removed.
    fn evict_expired(&mut self) -> usize;
}

/// In-memory [`KeyedCache`].
#[derive(Debug)]
pub struct MemoryCache<K, V, C = SystemClock> {
    entries: HashMap<K, (V, Instant)>,
    clock: C,
}

impl<K, V> MemoryCache<K, V, SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<K, V> Default for MemoryCache<K, V, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> MemoryCache<K, V, C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Entries held, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V, C> KeyedCache<K, V> for MemoryCache<K, V, C>
where
    K: Eq + Hash,
    V: Clone,
    C: Clock,
{
    fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        self.entries
            .get(key)
            .filter(|(_, expires)| *expires > now)
            .map(|(value, _)| value.clone())
    }

    fn put(&mut self, key: K, value: V, ttl: Duration) {
        let expires = self.clock.now() + ttl;
        self.entries.insert(key, (value, expires));
    }

    fn evict_expired(&mut self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, (_, expires)| *expires > now);
        before - self.entries.len()
    }
}
