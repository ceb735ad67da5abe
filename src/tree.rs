//! An ordered collection of values based on a red-black tree.

use compare::{Compare, Natural};
use std::fmt::{self, Debug};
use std::iter::{FromIterator, IntoIterator};
use std::cmp::Ordering;
use std::mem;
use super::hook::{Discard, OnRemove};
use super::node::{self, Handle, Nodes, Search, Side, NIL};

/// An ordered collection of values based on a red-black tree.
///
/// Values that compare equal collapse to a single node: inserting an equal value replaces the
/// stored one. Every value that leaves the tree, whether deleted, replaced, cleared, or dropped
/// with the tree, is handed to the tree's [`OnRemove`](trait.OnRemove.html) hook exactly once.
///
/// The behavior of this tree is undefined if a value's ordering relative to any other value
/// changes while the value is in the tree.
#[derive(Clone)]
pub struct RbTree<T, C = Natural<T>, D = Discard> where C: Compare<T>, D: OnRemove<T> {
    nodes: Nodes<T>,
    cmp: C,
    on_remove: D,
}

impl<T> RbTree<T> where T: Ord {
    /// Creates an empty tree ordered according to the natural order of its values.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::RbTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), Some(&3));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn new() -> Self { RbTree::with_cmp(::compare::natural()) }
}

impl<T, C> RbTree<T, C> where C: Compare<T> {
    /// Creates an empty tree ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    ///
    /// let mut tree = rbtree::RbTree::with_cmp(natural().rev());
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), [&3, &2, &1]);
    /// ```
    pub fn with_cmp(cmp: C) -> Self { RbTree::with_hooks(cmp, Discard) }
}

impl<T, C, D> RbTree<T, C, D> where C: Compare<T>, D: OnRemove<T> {
    /// Creates an empty tree ordered according to the given comparator, passing removed values
    /// to `on_remove`.
    pub fn with_hooks(cmp: C, on_remove: D) -> Self {
        RbTree { nodes: Nodes::new(), cmp: cmp, on_remove: on_remove }
    }

    /// Checks if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::RbTree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(2);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.nodes.root() == NIL }

    /// Returns the number of values in the tree.
    pub fn len(&self) -> usize { self.nodes.len() }

    /// Returns a reference to the tree's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all values from the tree, handing each to the hook.
    pub fn clear(&mut self) {
        let on_remove = &mut self.on_remove;
        self.nodes.drain(|value| on_remove.on_remove(value));
    }

    /// Inserts a value into the tree, returning `true` if it replaced an equal value.
    ///
    /// The replaced value is handed to the hook.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::RbTree::new();
    /// assert!(!tree.insert(1));
    /// assert!(tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let search = {
            let cmp = &self.cmp;
            self.nodes.search(|stored| cmp.compare(&value, stored))
        };

        match search {
            Search::Found(index) => {
                let old = mem::replace(self.nodes.value_mut(index), value);
                self.on_remove.on_remove(old);
                true
            }
            Search::Vacant(parent, side) => {
                let index = self.nodes.attach(parent, side, value);
                trace!("inserted slot {} ({} values)", index, self.nodes.len());
                false
            }
        }
    }

    /// Returns a handle to the node holding a value equal to `probe`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::RbTree::new();
    /// tree.insert("b");
    ///
    /// let handle = tree.find(&"b").unwrap();
    /// assert_eq!(*tree.value(handle), "b");
    /// assert!(tree.find(&"a").is_none());
    /// ```
    pub fn find<Q: ?Sized>(&self, probe: &Q) -> Option<Handle> where C: Compare<Q, T> {
        self.find_by(|value| self.cmp.compare(probe, value))
    }

    pub(crate) fn find_by<F>(&self, f: F) -> Option<Handle> where F: FnMut(&T) -> Ordering {
        self.nodes.find(f).and_then(|index| self.nodes.handle(index))
    }

    /// Returns a reference to the value equal to `probe`, if any.
    pub fn get<Q: ?Sized>(&self, probe: &Q) -> Option<&T> where C: Compare<Q, T> {
        self.find(probe).map(|handle| self.value(handle))
    }

    /// Checks if the tree contains a value equal to `probe`.
    pub fn contains<Q: ?Sized>(&self, probe: &Q) -> bool where C: Compare<Q, T> {
        self.find(probe).is_some()
    }

    /// Returns a reference to the value at `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` does not name a node of this tree.
    pub fn value(&self, handle: Handle) -> &T {
        self.nodes.value(self.nodes.slot(handle, "RbTree::value()"))
    }

    pub(crate) fn value_mut(&mut self, handle: Handle) -> &mut T {
        let index = self.nodes.slot(handle, "RbTree::value_mut()");
        self.nodes.value_mut(index)
    }

    /// Deletes the node at `handle`, handing its value to the hook.
    ///
    /// `handle` is stale after this call. If the node had two children, its in-order successor's
    /// value moves into it and the successor's handle is stale too.
    ///
    /// # Panics
    ///
    /// Panics if `handle` does not name a node of this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree: rbtree::RbTree<_> = (1..8).collect();
    ///
    /// let handle = tree.find(&4).unwrap();
    /// tree.delete(handle);
    ///
    /// assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), [1, 2, 3, 5, 6, 7]);
    /// ```
    pub fn delete(&mut self, handle: Handle) {
        let index = self.nodes.slot(handle, "RbTree::delete()");
        let value = self.nodes.remove(index);
        self.on_remove.on_remove(value);
    }

    /// Deletes the value equal to `probe`, returning `true` if there was one.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = rbtree::RbTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.remove(&1));
    /// assert!(!tree.remove(&1));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, probe: &Q) -> bool where C: Compare<Q, T> {
        match self.find(probe) {
            Some(handle) => { self.delete(handle); true }
            None => false,
        }
    }

    /// Returns a handle to the node holding the minimum value, if any.
    pub fn first(&self) -> Option<Handle> {
        self.nodes.handle(self.nodes.extremum(self.nodes.root(), Side::Left))
    }

    /// Returns a handle to the node holding the maximum value, if any.
    pub fn last(&self) -> Option<Handle> {
        self.nodes.handle(self.nodes.extremum(self.nodes.root(), Side::Right))
    }

    /// Returns a handle to the in-order successor of `handle`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: rbtree::RbTree<_> = vec![3, 1, 2].into_iter().collect();
    ///
    /// let mut values = vec![];
    /// let mut cursor = tree.first();
    ///
    /// while let Some(handle) = cursor {
    ///     values.push(*tree.value(handle));
    ///     cursor = tree.next(handle);
    /// }
    ///
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    pub fn next(&self, handle: Handle) -> Option<Handle> {
        let index = self.nodes.slot(handle, "RbTree::next()");
        self.nodes.handle(self.nodes.neighbor(index, Side::Right))
    }

    /// Returns a handle to the in-order predecessor of `handle`, if any.
    pub fn prev(&self, handle: Handle) -> Option<Handle> {
        let index = self.nodes.slot(handle, "RbTree::prev()");
        self.nodes.handle(self.nodes.neighbor(index, Side::Left))
    }

    /// Returns a reference to the minimum value in the tree, if any.
    pub fn min(&self) -> Option<&T> { self.first().map(|handle| self.value(handle)) }

    /// Returns a reference to the maximum value in the tree, if any.
    pub fn max(&self) -> Option<&T> { self.last().map(|handle| self.value(handle)) }

    /// Deletes the minimum value in the tree, returning `true` if the tree was not empty.
    pub fn remove_min(&mut self) -> bool {
        match self.first() {
            Some(handle) => { self.delete(handle); true }
            None => false,
        }
    }

    /// Deletes the maximum value in the tree, returning `true` if the tree was not empty.
    pub fn remove_max(&mut self) -> bool {
        match self.last() {
            Some(handle) => { self.delete(handle); true }
            None => false,
        }
    }

    /// Returns a reference to the predecessor of `probe`, that is, the maximum value less than
    /// `probe`, or equal to it if `inclusive` is true.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: rbtree::RbTree<_> = vec![1, 3, 5].into_iter().collect();
    ///
    /// assert_eq!(tree.pred(&3, false), Some(&1));
    /// assert_eq!(tree.pred(&3, true), Some(&3));
    /// assert_eq!(tree.pred(&4, false), Some(&3));
    /// assert_eq!(tree.pred(&1, false), None);
    /// ```
    pub fn pred<Q: ?Sized>(&self, probe: &Q, inclusive: bool) -> Option<&T>
        where C: Compare<Q, T> {

        self.closest_by(|value| self.cmp.compare(probe, value), Side::Left, inclusive)
            .map(|handle| self.value(handle))
    }

    /// Returns a reference to the successor of `probe`, that is, the minimum value greater than
    /// `probe`, or equal to it if `inclusive` is true.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: rbtree::RbTree<_> = vec![1, 3, 5].into_iter().collect();
    ///
    /// assert_eq!(tree.succ(&3, false), Some(&5));
    /// assert_eq!(tree.succ(&3, true), Some(&3));
    /// assert_eq!(tree.succ(&0, false), Some(&1));
    /// assert_eq!(tree.succ(&5, false), None);
    /// ```
    pub fn succ<Q: ?Sized>(&self, probe: &Q, inclusive: bool) -> Option<&T>
        where C: Compare<Q, T> {

        self.closest_by(|value| self.cmp.compare(probe, value), Side::Right, inclusive)
            .map(|handle| self.value(handle))
    }

    pub(crate) fn closest_by<F>(&self, f: F, side: Side, inclusive: bool) -> Option<Handle>
        where F: FnMut(&T) -> Ordering {

        self.nodes.handle(self.nodes.closest(f, side, inclusive))
    }

    /// Calls `f` on every value in ascending order.
    pub fn apply<F>(&self, mut f: F) where F: FnMut(&T) {
        let mut cursor = self.first();

        while let Some(handle) = cursor {
            f(self.value(handle));
            cursor = self.next(handle);
        }
    }

    /// Returns an iterator over the tree's values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: rbtree::RbTree<_> = vec![2, 1, 3].into_iter().collect();
    ///
    /// let mut it = tree.iter();
    /// assert_eq!(it.next(), Some(&1));
    /// assert_eq!(it.next_back(), Some(&3));
    /// assert_eq!(it.next(), Some(&2));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<T> { Iter(node::Iter::new(&self.nodes)) }

    #[cfg(test)]
    pub(crate) fn nodes(&self) -> &Nodes<T> { &self.nodes }
}

impl<T, C, D> Drop for RbTree<T, C, D> where C: Compare<T>, D: OnRemove<T> {
    fn drop(&mut self) { self.clear(); }
}

impl<T, C, D> Debug for RbTree<T, C, D> where T: Debug, C: Compare<T>, D: OnRemove<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C, D> Default for RbTree<T, C, D>
    where C: Compare<T> + Default, D: OnRemove<T> + Default {

    fn default() -> Self { RbTree::with_hooks(C::default(), D::default()) }
}

impl<T, C, D> Extend<T> for RbTree<T, C, D> where C: Compare<T>, D: OnRemove<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, it: I) {
        for value in it { self.insert(value); }
    }
}

impl<T, C, D> FromIterator<T> for RbTree<T, C, D>
    where C: Compare<T> + Default, D: OnRemove<T> + Default {

    fn from_iter<I: IntoIterator<Item=T>>(it: I) -> Self {
        let mut tree = RbTree::default();
        tree.extend(it);
        tree
    }
}

impl<'a, T, C, D> IntoIterator for &'a RbTree<T, C, D> where C: Compare<T>, D: OnRemove<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

/// An iterator that yields references to the tree's values in ascending order.
///
/// Acquire through [`RbTree::iter`](struct.RbTree.html#method.iter).
pub struct Iter<'a, T: 'a>(node::Iter<'a, T>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> { self.0.next_back() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
