//! Dependency-tracked memoization
//!
//! Holds one computed value together with the key it was computed from.
//! Asking for the value with a different key recomputes it; the same key
//! returns the stored value untouched.

/// A single memoized value keyed by its dependencies
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    entry: Option<(K, V)>,
    recomputes: u64,
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self {
            entry: None,
            recomputes: 0,
        }
    }

    /// Return the value for `key`, recomputing only when the key changed
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> &V {
        let stale = !matches!(&self.entry, Some((k, _)) if *k == key);
        if stale {
            self.recomputes += 1;
            self.entry = None;
        }
        &self.entry.get_or_insert_with(|| (key, compute())).1
    }

    /// Stored value, if anything has been computed yet
    pub fn get(&self) -> Option<&V> {
        self.entry.as_ref().map(|(_, v)| v)
    }

    /// How many times the value has been computed
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }
}

impl<K: PartialEq, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
