//! Caching decorator for per-region encodings.
//!
//! Encoding is pure, so results can be memoized per region and tier.
//! The decorator owns the key scheme and invalidation; the storage is
//! pluggable through [`EncodingCache`].

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use once_cell::sync::OnceCell;
use tracing::{debug, trace};

use crate::error::RegionError;
use crate::tier::Tier;
use crate::traits::{GeometrySource, Simplify};

pub type Encoded = Vec<String>;

/// Storage for encoded geometries.
pub trait EncodingCache {
    /// Returns the cached value for `key`, or runs `compute` and stores its
    /// result. Errors are returned to the caller and not stored.
    fn get_or_try_insert_with<E, F>(&self, key: &str, compute: F) -> Result<Encoded, E>
    where
        F: FnOnce() -> Result<Encoded, E>;

    fn invalidate(&self, key: &str);
}

type Slot = Arc<OnceCell<Encoded>>;

/// In-process cache.
///
/// Each key has its own slot. The map lock is only held to find the slot,
/// so a slow computation blocks callers of the same key and nobody else;
/// each key is still computed at most once at a time.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Slot>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a value is stored for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.lock()
            .get(key)
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.lock().values().filter(|slot| slot.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Slot>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn slot(&self, key: &str) -> Slot {
        self.lock().entry(key.to_string()).or_default().clone()
    }

    /// Drops `slot` if it is still the empty slot registered for `key`.
    fn discard_empty(&self, key: &str, slot: &Slot) {
        let mut entries = self.lock();
        if let Some(current) = entries.get(key) {
            if Arc::ptr_eq(current, slot) && current.get().is_none() {
                entries.remove(key);
            }
        }
    }
}

impl EncodingCache for MemoryCache {
    fn get_or_try_insert_with<E, F>(&self, key: &str, compute: F) -> Result<Encoded, E>
    where
        F: FnOnce() -> Result<Encoded, E>,
    {
        let slot = self.slot(key);
        if let Some(hit) = slot.get() {
            trace!(key, "cache hit");
            return Ok(hit.clone());
        }

        debug!(key, "cache miss");
        match slot.get_or_try_init(compute) {
            Ok(value) => Ok(value.clone()),
            Err(err) => {
                self.discard_empty(key, &slot);
                Err(err)
            }
        }
    }

    fn invalidate(&self, key: &str) {
        self.lock().remove(key);
    }
}

const STRIP_FIELD: &str = "strip";
const MAP_FIELD: &str = "gmap";

/// Cache key for one encoded field of a region, e.g. `region42strip`.
pub fn cache_key(id: impl Display, field: &str) -> String {
    format!("region{}{}", id, field)
}

/// Serves the strip and map encodings of regions, loading geometry from
/// `source` only on a cache miss.
#[derive(Debug)]
pub struct RegionEncoder<C, S, G> {
    cache: C,
    simplifier: S,
    source: G,
    strip: Tier,
    map: Tier,
}

impl<C, S, G> RegionEncoder<C, S, G>
where
    C: EncodingCache,
    S: Simplify,
    G: GeometrySource,
{
    /// Creates an encoder using the [`Tier::STRIP`] and [`Tier::MAP`] presets.
    pub fn new(cache: C, simplifier: S, source: G) -> Self {
        Self {
            cache,
            simplifier,
            source,
            strip: Tier::STRIP,
            map: Tier::MAP,
        }
    }

    /// Replaces the strip and map tiers.
    pub fn with_tiers(mut self, strip: Tier, map: Tier) -> Self {
        self.strip = strip;
        self.map = map;
        self
    }

    /// Returns a reference to the underlying cache.
    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Coarse encoding for thumbnails.
    pub fn strip(&self, id: &G::Id) -> Result<Encoded, RegionError> {
        self.cached(id, STRIP_FIELD, self.strip)
    }

    /// Detailed encoding for the interactive map.
    pub fn map(&self, id: &G::Id) -> Result<Encoded, RegionError> {
        self.cached(id, MAP_FIELD, self.map)
    }

    /// Drops every cached encoding of `id`. Call after the stored boundary changes.
    pub fn invalidate(&self, id: &G::Id) {
        for field in [STRIP_FIELD, MAP_FIELD] {
            self.cache.invalidate(&cache_key(id, field));
        }
    }

    fn cached(&self, id: &G::Id, field: &str, tier: Tier) -> Result<Encoded, RegionError> {
        let key = cache_key(id, field);
        self.cache.get_or_try_insert_with(&key, || -> Result<Encoded, RegionError> {
            let geometry = self
                .source
                .geometry_for(id)
                .ok_or_else(|| RegionError::UnknownRegion(id.to_string()))?;
            tier.encode(&geometry, &self.simplifier).map_err(RegionError::from)
        })
    }
}
