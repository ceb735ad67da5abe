//! An ordered map based on a red-black tree.

use compare::{Compare, Natural};
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::iter::{FromIterator, IntoIterator};
use std::ops;
use super::hook::{Discard, OnRemove};
use super::node::Side;
use super::tree::{self, RbTree};

/// A key-value pair stored in an [`OrderedMap`](struct.OrderedMap.html).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Returns a reference to the entry's key.
    pub fn key(&self) -> &K { &self.key }

    /// Returns a reference to the entry's value.
    pub fn value(&self) -> &V { &self.value }
}

/// Orders entries by key.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByKey<C>(C);

impl<K, V, C> Compare<Entry<K, V>> for ByKey<C> where C: Compare<K> {
    fn compare(&self, l: &Entry<K, V>, r: &Entry<K, V>) -> Ordering {
        self.0.compare(&l.key, &r.key)
    }
}

/// Splits removed entries between a key hook and a value hook.
#[derive(Clone, Copy, Debug, Default)]
pub struct Release<FK, FV> {
    key: FK,
    value: FV,
}

impl<K, V, FK, FV> OnRemove<Entry<K, V>> for Release<FK, FV>
    where FK: OnRemove<K>, FV: OnRemove<V> {

    fn on_remove(&mut self, entry: Entry<K, V>) {
        self.key.on_remove(entry.key);
        self.value.on_remove(entry.value);
    }
}

/// An ordered map based on a red-black tree.
///
/// Each key and value that leaves the map is handed to the map's key and value hooks,
/// respectively. Inserting a key that is already present replaces the whole entry: the old key
/// and old value go to the hooks, and the new key is kept.
///
/// The behavior of this map is undefined if a key's ordering relative to any other key changes
/// while the key is in the map. This is normally only possible through `Cell`, `RefCell`, or
/// unsafe code.
#[derive(Clone)]
pub struct OrderedMap<K, V, C = Natural<K>, FK = Discard, FV = Discard>
    where C: Compare<K>, FK: OnRemove<K>, FV: OnRemove<V> {

    tree: RbTree<Entry<K, V>, ByKey<C>, Release<FK, FV>>,
}

impl<K, V> OrderedMap<K, V> where K: Ord {
    /// Creates an empty map ordered according to the natural order of its keys.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rbtree::OrderedMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { OrderedMap::with_cmp(::compare::natural()) }
}

impl<K, V, C> OrderedMap<K, V, C> where C: Compare<K> {
    /// Creates an empty map ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut map = rbtree::OrderedMap::with_cmp(natural().rev());
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { OrderedMap::with_hooks(cmp, Discard, Discard) }
}

impl<K, V, C, FK, FV> OrderedMap<K, V, C, FK, FV>
    where C: Compare<K>, FK: OnRemove<K>, FV: OnRemove<V> {

    /// Creates an empty map ordered according to the given comparator, passing removed keys to
    /// `on_remove_key` and removed values to `on_remove_value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::RefCell;
    ///
    /// let keys = RefCell::new(vec![]);
    /// let values = RefCell::new(vec![]);
    ///
    /// {
    ///     let mut map = rbtree::OrderedMap::with_hooks(
    ///         compare::natural(),
    ///         |key: &'static str| keys.borrow_mut().push(key),
    ///         |value: u32| values.borrow_mut().push(value));
    ///
    ///     map.insert("a", 1);
    ///     map.insert("a", 2);
    ///     assert_eq!(*keys.borrow(), ["a"]);
    ///     assert_eq!(*values.borrow(), [1]);
    /// }
    ///
    /// assert_eq!(*values.borrow(), [1, 2]);
    /// ```
    pub fn with_hooks(cmp: C, on_remove_key: FK, on_remove_value: FV) -> Self {
        let release = Release { key: on_remove_key, value: on_remove_value };
        OrderedMap { tree: RbTree::with_hooks(ByKey(cmp), release) }
    }

    /// Checks if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rbtree::OrderedMap::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert(2, "b");
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.tree.is_empty() }

    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize { self.tree.len() }

    /// Returns a reference to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let map: rbtree::OrderedMap<i32, &str> = rbtree::OrderedMap::new();
    /// assert!(map.cmp().compares_lt(&1, &2));
    ///
    /// let map: rbtree::OrderedMap<i32, &str, _> = rbtree::OrderedMap::with_cmp(natural().rev());
    /// assert!(map.cmp().compares_gt(&1, &2));
    /// ```
    pub fn cmp(&self) -> &C { &self.tree.cmp().0 }

    /// Removes all entries from the map, handing their keys and values to the hooks.
    pub fn clear(&mut self) { self.tree.clear(); }

    /// Inserts an entry into the map, returning `true` if it replaced an entry with an equal
    /// key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rbtree::OrderedMap::new();
    /// assert!(!map.insert(1, "a"));
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert!(map.insert(1, "b"));
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        self.tree.insert(Entry { key: key, value: value })
    }

    /// Removes the entry whose key is equal to the given key, returning `true` if there was
    /// one.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rbtree::OrderedMap::new();
    /// map.insert(1, "a");
    ///
    /// assert!(map.remove(&1));
    /// assert!(!map.remove(&1));
    /// assert_eq!(map.get(&1), None);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> bool where C: Compare<Q, K> {
        let handle = {
            let cmp = &self.tree.cmp().0;
            self.tree.find_by(|entry| cmp.compare(key, &entry.key))
        };

        match handle {
            Some(handle) => { self.tree.delete(handle); true }
            None => false,
        }
    }

    /// Returns a reference to the entry whose key is equal to the given key, if any.
    pub fn find<Q: ?Sized>(&self, key: &Q) -> Option<&Entry<K, V>> where C: Compare<Q, K> {
        self.tree.find_by(|entry| self.cmp().compare(key, &entry.key))
            .map(|handle| self.tree.value(handle))
    }

    /// Checks if the map contains the given key.
    pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, K> {
        self.find(key).is_some()
    }

    /// Returns a reference to the value associated with the given key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rbtree::OrderedMap::new();
    /// map.insert("dog", "bark");
    ///
    /// assert_eq!(map.get(&"dog"), Some(&"bark"));
    /// assert_eq!(map.get(&"cat"), None);
    /// ```
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V> where C: Compare<Q, K> {
        self.find(key).map(Entry::value)
    }

    /// Returns a mutable reference to the value associated with the given key, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rbtree::OrderedMap::new();
    /// map.insert(1, "a");
    ///
    /// *map.get_mut(&1).unwrap() = "b";
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V> where C: Compare<Q, K> {
        let handle = {
            let cmp = &self.tree.cmp().0;
            self.tree.find_by(|entry| cmp.compare(key, &entry.key))
        };

        match handle {
            Some(handle) => Some(&mut self.tree.value_mut(handle).value),
            None => None,
        }
    }

    /// Returns a reference to the map's minimum key and its value, if any.
    pub fn min(&self) -> Option<(&K, &V)> { self.tree.min().map(as_pair) }

    /// Returns a reference to the map's maximum key and its value, if any.
    pub fn max(&self) -> Option<(&K, &V)> { self.tree.max().map(as_pair) }

    /// Returns a reference to the predecessor of the given key and its value, if any.
    ///
    /// The predecessor is the maximum key less than the given key, or equal to it if
    /// `inclusive` is true.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rbtree::OrderedMap::new();
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.pred(&3, false), Some((&1, &"a")));
    /// assert_eq!(map.pred(&3, true), Some((&3, &"c")));
    /// assert_eq!(map.pred(&1, false), None);
    /// ```
    pub fn pred<Q: ?Sized>(&self, key: &Q, inclusive: bool) -> Option<(&K, &V)>
        where C: Compare<Q, K> {

        self.closest(key, Side::Left, inclusive)
    }

    /// Returns a reference to the successor of the given key and its value, if any.
    ///
    /// The successor is the minimum key greater than the given key, or equal to it if
    /// `inclusive` is true.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rbtree::OrderedMap::new();
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// assert_eq!(map.succ(&1, false), Some((&3, &"c")));
    /// assert_eq!(map.succ(&2, true), Some((&3, &"c")));
    /// assert_eq!(map.succ(&3, false), None);
    /// ```
    pub fn succ<Q: ?Sized>(&self, key: &Q, inclusive: bool) -> Option<(&K, &V)>
        where C: Compare<Q, K> {

        self.closest(key, Side::Right, inclusive)
    }

    fn closest<Q: ?Sized>(&self, key: &Q, side: Side, inclusive: bool) -> Option<(&K, &V)>
        where C: Compare<Q, K> {

        self.tree.closest_by(|entry| self.cmp().compare(key, &entry.key), side, inclusive)
            .map(|handle| as_pair(self.tree.value(handle)))
    }

    /// Returns an iterator over the map's entries with immutable references to the values.
    ///
    /// The iterator yields the entries in ascending order according to the map's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut map = rbtree::OrderedMap::new();
    ///
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    ///
    /// let mut it = map.iter();
    /// assert_eq!(it.next(), Some((&1, &"a")));
    /// assert_eq!(it.next_back(), Some((&3, &"c")));
    /// assert_eq!(it.next(), Some((&2, &"b")));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<K, V> { Iter(self.tree.iter()) }

    /// Returns an iterator over the map's keys in ascending order.
    pub fn keys(&self) -> Keys<K, V> { Keys(self.iter()) }

    /// Returns an iterator over the map's values in ascending order of their keys.
    pub fn values(&self) -> Values<K, V> { Values(self.iter()) }
}

fn as_pair<K, V>(entry: &Entry<K, V>) -> (&K, &V) { (&entry.key, &entry.value) }

impl<K, V, C, FK, FV> Debug for OrderedMap<K, V, C, FK, FV>
    where K: Debug, V: Debug, C: Compare<K>, FK: OnRemove<K>, FV: OnRemove<V> {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C, FK, FV> Default for OrderedMap<K, V, C, FK, FV>
    where C: Compare<K> + Default, FK: OnRemove<K> + Default, FV: OnRemove<V> + Default {

    fn default() -> Self { OrderedMap::with_hooks(C::default(), FK::default(), FV::default()) }
}

impl<K, V, C, FK, FV> Extend<(K, V)> for OrderedMap<K, V, C, FK, FV>
    where C: Compare<K>, FK: OnRemove<K>, FV: OnRemove<V> {

    fn extend<I: IntoIterator<Item=(K, V)>>(&mut self, it: I) {
        for (k, v) in it { self.insert(k, v); }
    }
}

impl<K, V, C, FK, FV> FromIterator<(K, V)> for OrderedMap<K, V, C, FK, FV>
    where C: Compare<K> + Default, FK: OnRemove<K> + Default, FV: OnRemove<V> + Default {

    fn from_iter<I: IntoIterator<Item=(K, V)>>(it: I) -> Self {
        let mut map = OrderedMap::default();
        map.extend(it);
        map
    }
}

impl<'a, K, V, C, FK, FV, Q: ?Sized> ops::Index<&'a Q> for OrderedMap<K, V, C, FK, FV>
    where C: Compare<K> + Compare<Q, K>, FK: OnRemove<K>, FV: OnRemove<V> {

    type Output = V;
    fn index(&self, key: &Q) -> &V { self.get(key).expect("key not found") }
}

impl<'a, K, V, C, FK, FV> IntoIterator for &'a OrderedMap<K, V, C, FK, FV>
    where C: Compare<K>, FK: OnRemove<K>, FV: OnRemove<V> {

    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Iter<'a, K, V> { self.iter() }
}

/// An iterator that yields immutable references to a map's entries in ascending order.
///
/// Acquire through [`OrderedMap::iter`](struct.OrderedMap.html#method.iter).
pub struct Iter<'a, K: 'a, V: 'a>(tree::Iter<'a, Entry<K, V>>);

impl<'a, K, V> Clone for Iter<'a, K, V> {
    fn clone(&self) -> Self { Iter(self.0.clone()) }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<(&'a K, &'a V)> { self.0.next().map(as_pair) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> { self.0.next_back().map(as_pair) }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// An iterator that yields immutable references to a map's keys in ascending order.
///
/// Acquire through [`OrderedMap::keys`](struct.OrderedMap.html#method.keys).
pub struct Keys<'a, K: 'a, V: 'a>(Iter<'a, K, V>);

impl<'a, K, V> Clone for Keys<'a, K, V> {
    fn clone(&self) -> Self { Keys(self.0.clone()) }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;
    fn next(&mut self) -> Option<&'a K> { self.0.next().map(|e| e.0) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
    fn next_back(&mut self) -> Option<&'a K> { self.0.next_back().map(|e| e.0) }
}

impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}

/// An iterator that yields immutable references to a map's values in ascending order of their
/// keys.
///
/// Acquire through [`OrderedMap::values`](struct.OrderedMap.html#method.values).
pub struct Values<'a, K: 'a, V: 'a>(Iter<'a, K, V>);

impl<'a, K, V> Clone for Values<'a, K, V> {
    fn clone(&self) -> Self { Values(self.0.clone()) }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;
    fn next(&mut self) -> Option<&'a V> { self.0.next().map(|e| e.1) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, K, V> DoubleEndedIterator for Values<'a, K, V> {
    fn next_back(&mut self) -> Option<&'a V> { self.0.next_back().map(|e| e.1) }
}

impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}
