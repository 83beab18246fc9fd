//! [`OrderedMap`] is an insertion-ordered concurrent hash map.

mod entries;

use super::Equivalent;
use entries::Entries;
use std::collections::hash_map::RandomState;
use std::fmt::{self, Debug, Display};
use std::hash::{BuildHasher, Hash, Hasher};
use std::mem::take;
use std::ptr;
use std::sync::PoisonError;

#[cfg(feature = "loom")]
use loom::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
#[cfg(not(feature = "loom"))]
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Insertion-ordered concurrent hash map.
///
/// [`OrderedMap`] stores its entries in a growable sequence that determines the iteration order,
/// and keeps a hash index from each key to the position of its entry in the sequence. Lookups,
/// insertions, updates and removals take amortized constant time.
///
/// ## Iteration order
///
/// Entries are visited in the order their keys were first inserted; replacing the value of an
/// existing key does not move the entry. [`OrderedMap::remove`] is the one exception: it fills the
/// vacated slot with the last entry, so the formerly last entry is visited at the position of the
/// removed one. Use [`OrderedMap::shift_remove`] to keep the relative order of the remaining
/// entries at linear cost.
///
/// ```
/// use scc_ordmap::OrderedMap;
///
/// let map: OrderedMap<&str, u32> = OrderedMap::default();
///
/// map.upsert("a", 1);
/// map.upsert("b", 2);
/// map.upsert("c", 3);
/// map.remove("a");
///
/// assert_eq!(map.keys(), ["c", "b"]);
/// ```
///
/// ## Locking behavior
///
/// Each instance owns a single read-write lock guarding both the sequence and the index.
/// [`OrderedMap::upsert`], [`OrderedMap::remove`], [`OrderedMap::clear`] and the other mutating
/// methods hold the exclusive lock for their entire duration, and read-only methods hold the shared
/// lock, thus readers run concurrently with each other but never with a writer.
///
/// [`OrderedMap::range`], [`OrderedMap::scan`] and [`OrderedMap::any`] hold the shared lock while
/// calling the supplied closure, therefore the closure must not modify the same [`OrderedMap`],
/// otherwise it will lead to a deadlock.
///
/// ## Unwind safety
///
/// [`OrderedMap`] stays consistent when user-specified code panics on one condition;
/// `H::Hasher::hash`, `K::drop` and `V::drop` must not panic. A panic in `K::eq` or in a supplied
/// closure leaves the [`OrderedMap`] consistent; entries that [`OrderedMap::retain`] removed
/// before the panic stay removed.
pub struct OrderedMap<K, V, H = RandomState>
where
    H: BuildHasher,
{
    entries: RwLock<Entries<K, V>>,
    build_hasher: H,
}

impl<K, V, H> OrderedMap<K, V, H>
where
    H: BuildHasher,
{
    /// Creates an empty [`OrderedMap`] with the given [`BuildHasher`].
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let map: OrderedMap<u64, u32, RandomState> = OrderedMap::with_hasher(RandomState::new());
    /// ```
    #[cfg(not(feature = "loom"))]
    #[inline]
    pub const fn with_hasher(build_hasher: H) -> Self {
        Self {
            entries: RwLock::new(Entries::new()),
            build_hasher,
        }
    }

    /// Creates an empty [`OrderedMap`] with the given [`BuildHasher`].
    #[cfg(feature = "loom")]
    #[inline]
    pub fn with_hasher(build_hasher: H) -> Self {
        Self {
            entries: RwLock::new(Entries::new()),
            build_hasher,
        }
    }

    /// Creates an empty [`OrderedMap`] with the specified capacity and [`BuildHasher`].
    ///
    /// The actual capacity is equal to or greater than the specified capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let map: OrderedMap<u64, u32, RandomState> =
    ///     OrderedMap::with_capacity_and_hasher(1000, RandomState::new());
    ///
    /// assert!(map.capacity() >= 1000);
    /// ```
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, build_hasher: H) -> Self {
        Self {
            entries: RwLock::new(Entries::with_capacity(capacity)),
            build_hasher,
        }
    }

    /// Returns the number of entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<u64, u32> = OrderedMap::default();
    ///
    /// map.upsert(1, 0);
    /// assert_eq!(map.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.read_lock().len()
    }

    /// Returns `true` if the [`OrderedMap`] is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<u64, u32> = OrderedMap::default();
    ///
    /// assert!(map.is_empty());
    /// map.upsert(1, 0);
    /// assert!(!map.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of entries the [`OrderedMap`] can hold without reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<u64, u32> = OrderedMap::with_capacity(64);
    ///
    /// assert!(map.capacity() >= 64);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.read_lock().capacity()
    }

    /// Returns a reference to the specified [`BuildHasher`].
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let map: OrderedMap<u64, u32, RandomState> = OrderedMap::new();
    /// let result: &RandomState = map.hasher();
    /// ```
    #[inline]
    pub fn hasher(&self) -> &H {
        &self.build_hasher
    }

    /// Returns the keys in iteration order.
    ///
    /// The returned [`Vec`] is a snapshot; later modifications are not reflected in it.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<u64, u32> = OrderedMap::default();
    ///
    /// map.upsert(3, 0);
    /// map.upsert(1, 0);
    /// map.upsert(2, 0);
    ///
    /// assert_eq!(map.keys(), [3, 1, 2]);
    /// ```
    #[inline]
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.read_lock()
            .as_slice()
            .iter()
            .map(|b| b.key.clone())
            .collect()
    }

    /// Returns the values in iteration order.
    ///
    /// The returned [`Vec`] is a snapshot; later modifications are not reflected in it.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<u64, u32> = OrderedMap::default();
    ///
    /// map.upsert(3, 7);
    /// map.upsert(1, 8);
    ///
    /// assert_eq!(map.values(), [7, 8]);
    /// ```
    #[inline]
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.read_lock()
            .as_slice()
            .iter()
            .map(|b| b.val.clone())
            .collect()
    }

    /// Returns a clone of the key-value pair at the given position in iteration order.
    ///
    /// Returns `None` if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<u64, u32> = OrderedMap::default();
    ///
    /// map.upsert(5, 0);
    /// map.upsert(6, 1);
    ///
    /// assert_eq!(map.get_index(1), Some((6, 1)));
    /// assert!(map.get_index(2).is_none());
    /// ```
    #[inline]
    pub fn get_index(&self, index: usize) -> Option<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.read_lock()
            .get(index)
            .map(|b| (b.key.clone(), b.val.clone()))
    }

    /// Visits the entries in iteration order until the supplied closure returns `false`.
    ///
    /// Returns the number of times the closure was invoked.
    ///
    /// The shared lock is held during the entire traversal, therefore modifying the
    /// [`OrderedMap`] inside the closure will lead to a deadlock.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<u64, u32> = OrderedMap::default();
    ///
    /// map.upsert(1, 0);
    /// map.upsert(2, 1);
    /// map.upsert(3, 2);
    ///
    /// let mut seen = Vec::new();
    /// let visited = map.range(|k, _| {
    ///     seen.push(*k);
    ///     seen.len() < 2
    /// });
    ///
    /// assert_eq!(visited, 2);
    /// assert_eq!(seen, [1, 2]);
    /// ```
    #[inline]
    pub fn range<F: FnMut(&K, &V) -> bool>(&self, mut visitor: F) -> usize {
        let entries = self.read_lock();
        let mut visited = 0;
        for bucket in entries.as_slice() {
            visited += 1;
            if !visitor(&bucket.key, &bucket.val) {
                break;
            }
        }
        visited
    }

    /// Visits every entry in iteration order.
    ///
    /// The shared lock is held during the entire traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<u64, u32> = OrderedMap::default();
    ///
    /// map.upsert(1, 10);
    /// map.upsert(2, 20);
    ///
    /// let mut sum = 0;
    /// map.scan(|_, v| sum += *v);
    /// assert_eq!(sum, 30);
    /// ```
    #[inline]
    pub fn scan<F: FnMut(&K, &V)>(&self, mut scanner: F) {
        self.range(|k, v| {
            scanner(k, v);
            true
        });
    }

    /// Searches for any entry that satisfies the given predicate.
    ///
    /// Returns `true` as soon as an entry satisfying the predicate is found.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<u64, u32> = OrderedMap::default();
    ///
    /// map.upsert(1, 0);
    /// map.upsert(2, 1);
    ///
    /// assert!(map.any(|_, v| *v == 1));
    /// assert!(!map.any(|k, _| *k == 3));
    /// ```
    #[inline]
    pub fn any<P: FnMut(&K, &V) -> bool>(&self, mut pred: P) -> bool {
        let mut found = false;
        self.range(|k, v| {
            found = pred(k, v);
            !found
        });
        found
    }

    /// Retains the entries specified by the predicate.
    ///
    /// Returns the number of removed entries. Removed slots are refilled the way
    /// [`OrderedMap::remove`] does.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<u64, u32> = OrderedMap::default();
    ///
    /// map.upsert(1, 0);
    /// map.upsert(2, 1);
    /// map.upsert(3, 2);
    ///
    /// assert_eq!(map.retain(|k, v| { *v += 1; *k != 1 }), 1);
    /// assert_eq!(map.values(), [3, 2]);
    /// ```
    #[inline]
    pub fn retain<F: FnMut(&K, &mut V) -> bool>(&self, pred: F) -> usize {
        self.write_lock().retain(pred)
    }

    /// Clears the [`OrderedMap`] by removing all the entries.
    ///
    /// The removed entries are dropped after the lock is released.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<u64, u32> = OrderedMap::default();
    ///
    /// map.upsert(1, 0);
    /// map.clear();
    ///
    /// assert!(map.is_empty());
    /// assert_eq!(map.to_string(), "{}");
    /// ```
    #[inline]
    pub fn clear(&self) {
        let removed = take(&mut *self.write_lock());
        drop(removed);
    }

    /// Passes the number of entries to `start`, then visits every entry in iteration order with
    /// the state returned by `start`, all under a single shared lock.
    ///
    /// Stops at the first error.
    #[cfg(feature = "serde")]
    pub(crate) fn try_scan_sized<T, E, S, F>(&self, start: S, mut visitor: F) -> Result<T, E>
    where
        S: FnOnce(usize) -> Result<T, E>,
        F: FnMut(&mut T, &K, &V) -> Result<(), E>,
    {
        let entries = self.read_lock();
        let mut state = start(entries.len())?;
        for bucket in entries.as_slice() {
            visitor(&mut state, &bucket.key, &bucket.val)?;
        }
        Ok(state)
    }

    /// Acquires the shared lock.
    ///
    /// The lock is never left in an inconsistent state, thus poisoning is ignored.
    #[inline]
    fn read_lock(&self) -> RwLockReadGuard<'_, Entries<K, V>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquires the exclusive lock.
    #[inline]
    fn write_lock(&self) -> RwLockWriteGuard<'_, Entries<K, V>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the hash value of the key.
    #[inline]
    fn hash<Q>(&self, key: &Q) -> u64
    where
        Q: Hash + ?Sized,
    {
        let mut h = self.build_hasher.build_hasher();
        key.hash(&mut h);
        h.finish()
    }
}

impl<K, V, H> OrderedMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher,
{
    /// Inserts a key-value pair into the [`OrderedMap`].
    ///
    /// The new entry is placed at the end of the iteration order.
    ///
    /// # Errors
    ///
    /// Returns an error along with the supplied key-value pair if the key exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<u64, u32> = OrderedMap::default();
    ///
    /// assert!(map.insert(1, 0).is_ok());
    /// assert_eq!(map.insert(1, 1).unwrap_err(), (1, 1));
    /// ```
    #[inline]
    pub fn insert(&self, key: K, val: V) -> Result<(), (K, V)> {
        let hash = self.hash(&key);
        self.write_lock()
            .insert_with(hash, key, val, |_, key, val| (key, val))
            .map(|_| ())
    }

    /// Upserts a key-value pair into the [`OrderedMap`].
    ///
    /// If the key exists, the value is replaced and the entry keeps its position; otherwise the
    /// new entry is appended. Returns the previous value if the key existed.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<&str, u32> = OrderedMap::default();
    ///
    /// assert!(map.upsert("a", 1).is_none());
    /// assert!(map.upsert("b", 2).is_none());
    /// assert_eq!(map.upsert("a", 3), Some(1));
    ///
    /// assert_eq!(map.keys(), ["a", "b"]);
    /// assert_eq!(map.get("a"), Some(3));
    /// ```
    #[inline]
    pub fn upsert(&self, key: K, val: V) -> Option<V> {
        let hash = self.hash(&key);
        self.write_lock().upsert(hash, key, val)
    }

    /// Updates the value associated with the key in place.
    ///
    /// Returns `None` if the key does not exist. The position of the entry is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<u64, u32> = OrderedMap::default();
    ///
    /// assert!(map.update(&1, |_, v| *v += 1).is_none());
    /// map.upsert(1, 0);
    /// assert_eq!(map.update(&1, |_, v| { *v += 1; *v }), Some(1));
    /// ```
    #[inline]
    pub fn update<Q, U, R>(&self, key: &Q, updater: U) -> Option<R>
    where
        Q: Equivalent<K> + Hash + ?Sized,
        U: FnOnce(&K, &mut V) -> R,
    {
        let hash = self.hash(key);
        let mut entries = self.write_lock();
        let pos = entries.find(hash, key)?;
        entries.get_mut(pos).map(|(k, v)| updater(k, v))
    }

    /// Removes the key-value pair associated with the key.
    ///
    /// The last entry in iteration order is moved into the position of the removed entry, which
    /// keeps the removal constant-time at the cost of reordering. Returns `None` if the key does
    /// not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<&str, u32> = OrderedMap::default();
    ///
    /// map.upsert("a", 1);
    /// map.upsert("b", 2);
    /// map.upsert("c", 3);
    ///
    /// assert_eq!(map.remove("a"), Some(("a", 1)));
    /// assert!(map.remove("a").is_none());
    /// assert_eq!(map.keys(), ["c", "b"]);
    /// ```
    #[inline]
    pub fn remove<Q>(&self, key: &Q) -> Option<(K, V)>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        let hash = self.hash(key);
        self.write_lock().swap_remove(hash, key)
    }

    /// Removes the key-value pair associated with the key, preserving the relative order of the
    /// remaining entries.
    ///
    /// All the subsequent entries are shifted, therefore it takes linear time.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<&str, u32> = OrderedMap::default();
    ///
    /// map.upsert("a", 1);
    /// map.upsert("b", 2);
    /// map.upsert("c", 3);
    ///
    /// assert_eq!(map.shift_remove("a"), Some(("a", 1)));
    /// assert_eq!(map.keys(), ["b", "c"]);
    /// ```
    #[inline]
    pub fn shift_remove<Q>(&self, key: &Q) -> Option<(K, V)>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        let hash = self.hash(key);
        self.write_lock().shift_remove(hash, key)
    }

    /// Returns a clone of the value associated with the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<String, u32> = OrderedMap::default();
    ///
    /// assert!(map.get("a").is_none());
    /// map.upsert("a".to_string(), 1);
    /// assert_eq!(map.get("a"), Some(1));
    /// ```
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        Q: Equivalent<K> + Hash + ?Sized,
        V: Clone,
    {
        self.read(key, |_, v| v.clone())
    }

    /// Reads a key-value pair.
    ///
    /// Returns `None` if the key does not exist. The shared lock is held while `reader` runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<u64, u32> = OrderedMap::default();
    ///
    /// assert!(map.read(&1, |_, v| *v).is_none());
    /// map.upsert(1, 10);
    /// assert_eq!(map.read(&1, |_, v| *v), Some(10));
    /// ```
    #[inline]
    pub fn read<Q, R, F: FnOnce(&K, &V) -> R>(&self, key: &Q, reader: F) -> Option<R>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        let hash = self.hash(key);
        let entries = self.read_lock();
        let pos = entries.find(hash, key)?;
        entries.get(pos).map(|b| reader(&b.key, &b.val))
    }

    /// Checks if the key exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<u64, u32> = OrderedMap::default();
    ///
    /// assert!(!map.contains(&1));
    /// map.upsert(1, 0);
    /// assert!(map.contains(&1));
    /// ```
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        let hash = self.hash(key);
        self.read_lock().find(hash, key).is_some()
    }
}

#[cfg(test)]
impl<K, V, H> OrderedMap<K, V, H>
where
    H: BuildHasher,
{
    /// Asserts that the sequence and the index agree with each other.
    pub(crate) fn assert_consistent(&self) {
        self.read_lock().assert_consistent();
    }
}

impl<K, V> OrderedMap<K, V, RandomState> {
    /// Creates an empty default [`OrderedMap`].
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<u64, u32> = OrderedMap::new();
    ///
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty [`OrderedMap`] with the specified capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<u64, u32> = OrderedMap::with_capacity(1000);
    ///
    /// assert!(map.capacity() >= 1000);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V, H> Clone for OrderedMap<K, V, H>
where
    K: Clone,
    V: Clone,
    H: BuildHasher + Clone,
{
    /// Copies the [`OrderedMap`].
    ///
    /// Only the shared lock of `self` is acquired, so the clone is a consistent snapshot; the two
    /// instances are independent afterwards.
    #[inline]
    fn clone(&self) -> Self {
        let entries = self.read_lock().clone();
        Self {
            entries: RwLock::new(entries),
            build_hasher: self.build_hasher.clone(),
        }
    }
}

impl<K, V, H> Debug for OrderedMap<K, V, H>
where
    K: Debug,
    V: Debug,
    H: BuildHasher,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_map();
        self.scan(|k, v| {
            d.entry(k, v);
        });
        d.finish()
    }
}

impl<K, V, H> Display for OrderedMap<K, V, H>
where
    K: Display,
    V: Display,
    H: BuildHasher,
{
    /// Renders the entries as `{k1: v1, k2: v2}` in iteration order.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut result = Ok(());
        let mut first = true;
        self.range(|k, v| {
            result = if first {
                write!(f, "{k}: {v}")
            } else {
                write!(f, ", {k}: {v}")
            };
            first = false;
            result.is_ok()
        });
        result?;
        f.write_str("}")
    }
}

impl<K, V, H> Default for OrderedMap<K, V, H>
where
    H: BuildHasher + Default,
{
    /// Creates an empty default [`OrderedMap`].
    ///
    /// # Examples
    ///
    /// ```
    /// use scc_ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<u64, u32> = OrderedMap::default();
    ///
    /// assert_eq!(map.len(), 0);
    /// ```
    #[inline]
    fn default() -> Self {
        Self::with_hasher(H::default())
    }
}

impl<K, V, H> Extend<(K, V)> for OrderedMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher,
{
    /// Upserts every key-value pair in iteration order under a single exclusive lock.
    #[inline]
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        let mut entries = self.write_lock();
        iter.into_iter().for_each(|(k, v)| {
            let hash = self.hash(&k);
            entries.upsert(hash, k, v);
        });
    }
}

impl<K, V, H> FromIterator<(K, V)> for OrderedMap<K, V, H>
where
    K: Eq + Hash,
    H: BuildHasher + Default,
{
    #[inline]
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let into_iter = iter.into_iter();
        let mut map = Self::with_capacity_and_hasher(into_iter.size_hint().0, H::default());
        map.extend(into_iter);
        map
    }
}

impl<K, V, H> PartialEq for OrderedMap<K, V, H>
where
    K: Eq + Hash,
    V: PartialEq,
    H: BuildHasher,
{
    /// Compares two [`OrderedMap`] instances as sets of key-value pairs, ignoring the order.
    ///
    /// ## Locking behavior
    ///
    /// Shared locks of both instances are acquired, therefore it may lead to a deadlock if the
    /// instances are being modified by another thread.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }
        self.len() == other.len()
            && !self.any(|k, v| other.read(k, |_, ov| v == ov) != Some(true))
    }
}
