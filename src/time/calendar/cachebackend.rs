use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::trace;

use crate::time::calendar::yearholidaymap::YearHolidayMap;

/// Per-year memoization of holiday tables.
///
/// A table is a pure function of its year, so entries are never invalidated
/// or evicted.
pub trait YearCacheBackend {
    fn get_or_compute(
        &self,
        year: i32,
        compute: impl FnOnce() -> YearHolidayMap,
    ) -> Arc<YearHolidayMap>;

    fn cached_years(&self) -> usize;
}

// ── single-threaded: RefCell ────────────────────────────────────────────────

#[derive(Default)]
pub struct RefCellBackend {
    cache: RefCell<HashMap<i32, Arc<YearHolidayMap>>>,
}

impl RefCellBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl YearCacheBackend for RefCellBackend {
    fn get_or_compute(
        &self,
        year: i32,
        compute: impl FnOnce() -> YearHolidayMap,
    ) -> Arc<YearHolidayMap> {
        let mut cache = self.cache.borrow_mut();
        if let Some(map) = cache.get(&year) {
            trace!(year, "holiday table cache hit");
            return Arc::clone(map);
        }
        let map = Arc::new(compute());
        cache.insert(year, Arc::clone(&map));
        map
    }

    fn cached_years(&self) -> usize {
        self.cache.borrow().len()
    }
}

// ── multi-threaded: RwLock ──────────────────────────────────────────────────
//
// Two threads missing the same year under the read lock both compute the
// table. Tables are deterministic, so the second write keeps the first
// value and hands it back; the only cost is the redundant build.

#[derive(Default)]
pub struct RwLockBackend {
    cache: RwLock<HashMap<i32, Arc<YearHolidayMap>>>,
}

impl RwLockBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl YearCacheBackend for RwLockBackend {
    fn get_or_compute(
        &self,
        year: i32,
        compute: impl FnOnce() -> YearHolidayMap,
    ) -> Arc<YearHolidayMap> {
        // a panic elsewhere cannot leave a half-written table behind, so a
        // poisoned lock is still consistent
        {
            let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
            if let Some(map) = cache.get(&year) {
                trace!(year, "holiday table cache hit");
                return Arc::clone(map);
            }
        }

        let computed = Arc::new(compute());
        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        Arc::clone(cache.entry(year).or_insert(computed))
    }

    fn cached_years(&self) -> usize {
        self.cache.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}
