use std::collections::{hash_map::Entry, HashMap};
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use tracing::{trace, warn};

use crate::{Error, PlacementTable, Result, SymbolSize};

/// Memoizes placement tables by mapping matrix size.
///
/// A table is computed at most once per cache: the lock is held while a
/// missing table is computed, so concurrent callers asking for the same size
/// wait for it and then share the same [Arc]. Entries are never evicted.
#[derive(Debug, Default)]
pub struct PlacementCache {
    tables: Mutex<HashMap<(u16, u16), Arc<PlacementTable>>>,
}

impl PlacementCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache with room for `capacity` sizes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { tables: Mutex::new(HashMap::with_capacity(capacity)) }
    }

    /// The process-wide cache behind [compute_placement].
    pub fn global() -> &'static PlacementCache {
        static GLOBAL: OnceLock<PlacementCache> = OnceLock::new();
        GLOBAL.get_or_init(PlacementCache::new)
    }

    /// Returns the placement table of the `rows` x `cols` mapping matrix,
    /// computing and storing it on first request.
    pub fn get_or_compute(&self, rows: u16, cols: u16) -> Result<Arc<PlacementTable>> {
        let Some(size) = SymbolSize::from_mapping(rows, cols) else {
            warn!(rows, cols, "rejected placement request for a non ECC200 size");
            return Err(Error::InvalidDimensions { rows, cols });
        };

        let mut tables = self.tables.lock();
        let table = match tables.entry((rows, cols)) {
            Entry::Occupied(e) => {
                trace!(rows, cols, "placement cache hit");
                Arc::clone(e.get())
            },
            Entry::Vacant(e) => Arc::clone(e.insert(Arc::new(PlacementTable::for_symbol(size)))),
        };
        Ok(table)
    }

    /// Whether the table of the `rows` x `cols` mapping matrix is cached.
    pub fn contains(&self, rows: u16, cols: u16) -> bool {
        self.tables.lock().contains_key(&(rows, cols))
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.tables.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.lock().is_empty()
    }
}

/// Returns the placement table of the `rows` x `cols` mapping matrix from the
/// process-wide cache.
///
/// `rows` and `cols` describe the mapping matrix, not the symbol: the 12x12
/// symbol is placed with `compute_placement(10, 10)`. See
/// [SymbolSize::mapping_rows] and [SymbolSize::mapping_cols].
pub fn compute_placement(rows: u16, cols: u16) -> Result<Arc<PlacementTable>> {
    PlacementCache::global().get_or_compute(rows, cols)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{compute_placement, PlacementCache};
    use crate::Error;

    #[test]
    fn test_hit_shares_the_table() {
        let cache = PlacementCache::new();
        let first = cache.get_or_compute(10, 10).unwrap();
        let second = cache.get_or_compute(10, 10).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_sizes_are_kept_apart() {
        let cache = PlacementCache::with_capacity(2);
        let small = cache.get_or_compute(8, 8).unwrap();
        let rect = cache.get_or_compute(6, 16).unwrap();
        assert_eq!((small.rows(), small.cols()), (8, 8));
        assert_eq!((rect.rows(), rect.cols()), (6, 16));
        assert!(!Arc::ptr_eq(&small, &rect));

        let again = cache.get_or_compute(8, 8).unwrap();
        assert!(Arc::ptr_eq(&small, &again));
        assert_eq!(*again, crate::PlacementTable::new(8, 8).unwrap());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_invalid_size_is_not_cached() {
        let cache = PlacementCache::new();
        assert_eq!(cache.get_or_compute(12, 12).map(|_| ()), Ok(()));
        assert_eq!(cache.get_or_compute(13, 13).map(|_| ()), Err(Error::InvalidDimensions { rows: 13, cols: 13 }));
        assert!(cache.contains(12, 12));
        assert!(!cache.contains(13, 13));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_instances_are_isolated() {
        let a = PlacementCache::new();
        let b = PlacementCache::new();
        a.get_or_compute(10, 10).unwrap();
        assert!(b.is_empty());
    }

    #[test]
    fn test_global() {
        let first = compute_placement(14, 14).unwrap();
        let second = compute_placement(14, 14).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(PlacementCache::global().contains(14, 14));
        assert!(compute_placement(14, 15).is_err());
    }
}
