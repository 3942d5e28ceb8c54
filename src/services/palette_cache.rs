//! In-memory palette cache for URL sources.
//!
//! Entries expire after the configured TTL. When full, the least recently
//! used entry is evicted first.

use chrono::{DateTime, Utc};
use oklch_theme::Palette;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::models::ExtractionConfig;

/// A palette as it was when first extracted
#[derive(Debug, Clone)]
pub struct CachedPalette {
    pub palette: Palette,
    /// When the palette was extracted
    pub extracted_at: DateTime<Utc>,
}

struct Entry {
    value: CachedPalette,
    cached_at: Instant,
}

struct Inner {
    entries: HashMap<String, Entry>,
    /// Keys by recency of use (oldest first)
    order: Vec<String>,
}

pub struct PaletteCache {
    inner: Mutex<Inner>,
    ttl: Duration,
    max_entries: usize,
}

/// Cache key for a source URL: first 16 bytes of its SHA-256, hex encoded.
pub fn cache_key(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    hex::encode(&digest[..16])
}

impl PaletteCache {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                order: Vec::new(),
            }),
            ttl,
            max_entries,
        }
    }

    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new(
            Duration::from_secs(config.cache_ttl_secs),
            config.cache_max_entries,
        )
    }

    /// A zero TTL or zero capacity disables the cache.
    pub fn is_enabled(&self) -> bool {
        !self.ttl.is_zero() && self.max_entries > 0
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a palette extracted from `url`
    pub fn get(&self, url: &str) -> Option<CachedPalette> {
        if !self.is_enabled() {
            return None;
        }
        let key = cache_key(url);
        let mut inner = self.lock();

        let expired = inner.entries.get(&key)?.cached_at.elapsed() > self.ttl;
        inner.order.retain(|k| k != &key);
        if expired {
            inner.entries.remove(&key);
            tracing::debug!(cache_key = %key, "Palette cache: expired entry");
            return None;
        }
        inner.order.push(key.clone());

        tracing::debug!(cache_key = %key, "Palette cache hit");
        inner.entries.get(&key).map(|entry| entry.value.clone())
    }

    /// Remember the palette extracted from `url`
    pub fn store(&self, url: &str, value: CachedPalette) {
        if !self.is_enabled() {
            return;
        }
        let key = cache_key(url);
        let mut inner = self.lock();

        inner.order.retain(|k| k != &key);
        inner.entries.remove(&key);

        while inner.entries.len() >= self.max_entries && !inner.order.is_empty() {
            let oldest = inner.order.remove(0);
            inner.entries.remove(&oldest);
            tracing::debug!(
                cache_key = %oldest,
                cache_size = inner.entries.len(),
                "Palette cache: evicted oldest entry"
            );
        }

        inner.entries.insert(
            key.clone(),
            Entry {
                value,
                cached_at: Instant::now(),
            },
        );
        inner.order.push(key);
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
