//! [`Entries`] keeps the entry sequence and the hash index over its positions in step.

use crate::Equivalent;
use hashbrown::hash_table::{self, HashTable};
use std::mem::replace;

/// A single entry stored in the sequence.
///
/// The hash value of the key is cached so that the index can be resized without rehashing keys.
#[derive(Clone)]
pub(super) struct Bucket<K, V> {
    pub(super) hash: u64,
    pub(super) key: K,
    pub(super) val: V,
}

/// The unsynchronized core of an [`OrderedMap`](super::OrderedMap).
///
/// `sequence` determines the iteration order, and `index` maps each key to the position of its
/// entry in `sequence`; every position in `sequence` is stored in `index` exactly once.
#[derive(Clone)]
pub(super) struct Entries<K, V> {
    sequence: Vec<Bucket<K, V>>,
    index: HashTable<usize>,
}

impl<K, V> Entries<K, V> {
    /// Creates an empty [`Entries`].
    #[inline]
    pub(super) const fn new() -> Self {
        Self {
            sequence: Vec::new(),
            index: HashTable::new(),
        }
    }

    /// Creates an empty [`Entries`] that can hold at least `capacity` entries without
    /// reallocating.
    #[inline]
    pub(super) fn with_capacity(capacity: usize) -> Self {
        Self {
            sequence: Vec::with_capacity(capacity),
            index: HashTable::with_capacity(capacity),
        }
    }

    #[inline]
    pub(super) fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    pub(super) fn capacity(&self) -> usize {
        self.sequence.capacity().min(self.index.capacity())
    }

    /// Returns all the entries in iteration order.
    #[inline]
    pub(super) fn as_slice(&self) -> &[Bucket<K, V>] {
        &self.sequence
    }

    /// Returns the position of the entry associated with the key.
    #[inline]
    pub(super) fn find<Q>(&self, hash: u64, key: &Q) -> Option<usize>
    where
        Q: Equivalent<K> + ?Sized,
    {
        let sequence = &self.sequence;
        self.index
            .find(hash, |&i| key.equivalent(&sequence[i].key))
            .copied()
    }

    /// Returns the entry at the position.
    #[inline]
    pub(super) fn get(&self, pos: usize) -> Option<&Bucket<K, V>> {
        self.sequence.get(pos)
    }

    /// Returns the entry at the position for modification.
    ///
    /// The key is only handed out as a shared reference since the index depends on it.
    #[inline]
    pub(super) fn get_mut(&mut self, pos: usize) -> Option<(&K, &mut V)> {
        self.sequence.get_mut(pos).map(|b| (&b.key, &mut b.val))
    }

    /// Inserts the key-value pair if the key is absent, otherwise passes the key-value pair and the
    /// position of the existing entry to `occupied`.
    ///
    /// Returns the position of the newly appended entry, or the result of `occupied`.
    #[inline]
    pub(super) fn insert_with<R, F: FnOnce(&mut Bucket<K, V>, K, V) -> R>(
        &mut self,
        hash: u64,
        key: K,
        val: V,
        occupied: F,
    ) -> Result<usize, R>
    where
        K: Eq,
    {
        let sequence = &self.sequence;
        match self.index.entry(
            hash,
            |&i| sequence[i].key == key,
            |&i| sequence[i].hash,
        ) {
            hash_table::Entry::Occupied(entry) => {
                let pos = *entry.get();
                Err(occupied(&mut self.sequence[pos], key, val))
            }
            hash_table::Entry::Vacant(entry) => {
                let pos = self.sequence.len();
                entry.insert(pos);
                self.sequence.push(Bucket { hash, key, val });
                Ok(pos)
            }
        }
    }

    /// Inserts the key-value pair, or replaces the value if the key exists.
    ///
    /// The position of an existing entry is unchanged. Returns the previous value.
    #[inline]
    pub(super) fn upsert(&mut self, hash: u64, key: K, val: V) -> Option<V>
    where
        K: Eq,
    {
        self.insert_with(hash, key, val, |bucket, _, val| replace(&mut bucket.val, val))
            .err()
    }

    /// Removes the entry associated with the key by moving the last entry into its position.
    #[inline]
    pub(super) fn swap_remove<Q>(&mut self, hash: u64, key: &Q) -> Option<(K, V)>
    where
        Q: Equivalent<K> + ?Sized,
    {
        let sequence = &self.sequence;
        let entry = self
            .index
            .find_entry(hash, |&i| key.equivalent(&sequence[i].key))
            .ok()?;
        let (pos, _) = entry.remove();
        Some(self.swap_remove_unindexed(pos))
    }

    /// Removes the entry associated with the key by shifting all the subsequent entries.
    #[inline]
    pub(super) fn shift_remove<Q>(&mut self, hash: u64, key: &Q) -> Option<(K, V)>
    where
        Q: Equivalent<K> + ?Sized,
    {
        let sequence = &self.sequence;
        let entry = self
            .index
            .find_entry(hash, |&i| key.equivalent(&sequence[i].key))
            .ok()?;
        let (pos, _) = entry.remove();
        let bucket = self.sequence.remove(pos);
        self.index.iter_mut().for_each(|i| {
            if *i > pos {
                *i -= 1;
            }
        });
        Some((bucket.key, bucket.val))
    }

    /// Retains only the entries satisfying the predicate.
    ///
    /// Each removed slot is refilled with the last entry, which is then visited in turn.
    pub(super) fn retain<F: FnMut(&K, &mut V) -> bool>(&mut self, mut pred: F) -> usize {
        let mut removed = 0;
        let mut pos = 0;
        while let Some(bucket) = self.sequence.get_mut(pos) {
            if pred(&bucket.key, &mut bucket.val) {
                pos += 1;
                continue;
            }
            let hash = bucket.hash;
            if let Ok(entry) = self.index.find_entry(hash, |&i| i == pos) {
                entry.remove();
            }
            drop(self.swap_remove_unindexed(pos));
            removed += 1;
        }
        removed
    }

    /// Removes the entry at `pos` whose position has already been purged from the index.
    fn swap_remove_unindexed(&mut self, pos: usize) -> (K, V) {
        let last = self.sequence.len() - 1;
        if pos != last {
            let moved_hash = self.sequence[last].hash;
            if let Some(i) = self.index.find_mut(moved_hash, |&i| i == last) {
                *i = pos;
            }
        }
        let bucket = self.sequence.swap_remove(pos);
        (bucket.key, bucket.val)
    }
}

impl<K, V> Default for Entries<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl<K, V> Entries<K, V> {
    /// Asserts that `index` and `sequence` are in one-to-one correspondence.
    pub(super) fn assert_consistent(&self) {
        assert_eq!(self.index.len(), self.sequence.len());
        let mut seen = vec![false; self.sequence.len()];
        for &i in self.index.iter() {
            assert!(!seen[i], "position {i} indexed twice");
            seen[i] = true;
            let hash = self.sequence[i].hash;
            assert!(self.index.find(hash, |&j| j == i).is_some());
        }
    }
}
