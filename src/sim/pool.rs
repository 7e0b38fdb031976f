//! Fixed-capacity, order-compacting entity pool
//!
//! Live entries always occupy indices `0..len()`. Removing an entry shifts
//! everything after it down one slot, so survivors keep their relative
//! (insertion) order and there are never gaps.

use std::fmt;

/// Returned when spawning into a pool that is at capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolFull {
    pub capacity: usize,
}

impl fmt::Display for PoolFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pool is full ({} entries)", self.capacity)
    }
}

impl std::error::Error for PoolFull {}

#[derive(Debug, Clone, PartialEq)]
pub struct Pool<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Pool<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of live entries
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Append a live entry, returning its index.
    ///
    /// A full pool rejects the entry and is left unchanged.
    pub fn spawn(&mut self, item: T) -> Result<usize, PoolFull> {
        if self.is_full() {
            return Err(PoolFull {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(self.items.len() - 1)
    }

    /// Remove the entry at `index`, shifting later entries down one slot.
    ///
    /// Panics if `index` is not a live slot; that means the caller's entity
    /// accounting is already corrupt.
    pub fn remove_at(&mut self, index: usize) -> T {
        assert!(
            index < self.items.len(),
            "pool remove_at({index}) out of bounds (live count {})",
            self.items.len()
        );
        self.items.remove(index)
    }

    /// Visit every live entry in index order, removing those for which
    /// `keep` returns false.
    ///
    /// Handles the cursor adjustment after compaction so the entry shifted
    /// into a freed slot is still visited this pass. Returns the number of
    /// entries removed.
    pub fn sweep<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&mut T) -> bool,
    {
        let mut removed = 0;
        let mut i = 0;
        // Bound re-read every iteration: the live count shrinks as we go
        while i < self.items.len() {
            if keep(&mut self.items[i]) {
                i += 1;
            } else {
                self.remove_at(i);
                removed += 1;
            }
        }
        removed
    }

    /// Apply `f` to every live entry in index order
    pub fn for_each_live<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        for item in &mut self.items {
            f(item);
        }
    }

    /// Drop every live entry
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Live entries as a slice (read-only view for rendering)
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a Pool<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spawn_until_full() {
        let mut pool = Pool::new(3);
        assert_eq!(pool.spawn('a'), Ok(0));
        assert_eq!(pool.spawn('b'), Ok(1));
        assert_eq!(pool.spawn('c'), Ok(2));
        assert!(pool.is_full());
        assert_eq!(pool.spawn('d'), Err(PoolFull { capacity: 3 }));
        assert_eq!(pool.as_slice(), &['a', 'b', 'c']);
    }

    #[test]
    fn test_zero_capacity_rejects_everything() {
        let mut pool: Pool<u8> = Pool::new(0);
        assert!(pool.spawn(1).is_err());
        assert!(pool.is_empty());
    }

    #[test]
    fn test_remove_at_shifts_left() {
        let mut pool = Pool::new(5);
        for c in ['a', 'b', 'c', 'd'] {
            pool.spawn(c).unwrap();
        }
        assert_eq!(pool.remove_at(1), 'b');
        assert_eq!(pool.as_slice(), &['a', 'c', 'd']);
        // Freed slot can be reused
        assert_eq!(pool.spawn('e'), Ok(3));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_remove_at_past_live_count_panics() {
        let mut pool = Pool::new(4);
        pool.spawn(1).unwrap();
        pool.remove_at(1);
    }

    #[test]
    fn test_sweep_visits_shifted_in_entries() {
        let mut pool = Pool::new(8);
        // Adjacent removals: a naive forward loop would skip the second 0
        for v in [1, 0, 0, 2, 0, 3] {
            pool.spawn(v).unwrap();
        }
        let mut visited = 0;
        let removed = pool.sweep(|v| {
            visited += 1;
            *v != 0
        });
        assert_eq!(removed, 3);
        assert_eq!(visited, 6);
        assert_eq!(pool.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_for_each_live_mutates_in_order() {
        let mut pool = Pool::new(4);
        for v in [1, 2, 3] {
            pool.spawn(v).unwrap();
        }
        let mut order = Vec::new();
        pool.for_each_live(|v| {
            order.push(*v);
            *v *= 10;
        });
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(pool.as_slice(), &[10, 20, 30]);
    }

    proptest! {
        #[test]
        fn prop_live_count_never_exceeds_capacity(capacity in 0usize..64, attempts in 0usize..128) {
            let mut pool = Pool::new(capacity);
            let mut accepted = 0;
            for i in 0..attempts {
                if pool.spawn(i).is_ok() {
                    accepted += 1;
                }
            }
            prop_assert_eq!(accepted, attempts.min(capacity));
            prop_assert_eq!(pool.len(), attempts.min(capacity));
            prop_assert!(pool.len() <= pool.capacity());
        }

        #[test]
        fn prop_remove_preserves_survivor_order(n in 1usize..50, pick in 0usize..50) {
            let index = pick % n;
            let mut pool = Pool::new(64);
            for i in 0..n {
                pool.spawn(i).unwrap();
            }
            let removed = pool.remove_at(index);
            prop_assert_eq!(removed, index);
            prop_assert_eq!(pool.len(), n - 1);
            let expected: Vec<usize> = (0..n).filter(|&i| i != index).collect();
            prop_assert_eq!(pool.as_slice(), expected.as_slice());
        }

        #[test]
        fn prop_sweep_matches_retain(values in proptest::collection::vec(0u8..4, 0..40)) {
            let mut pool = Pool::new(64);
            for &v in &values {
                pool.spawn(v).unwrap();
            }
            let removed = pool.sweep(|v| *v != 0);
            let expected: Vec<u8> = values.iter().copied().filter(|&v| v != 0).collect();
            prop_assert_eq!(removed, values.len() - expected.len());
            prop_assert_eq!(pool.as_slice(), expected.as_slice());
        }
    }
}
