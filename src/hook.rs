//! Hooks that receive values as they leave a container.

/// Receives each value removed from a container.
///
/// A value is handed to the hook exactly once: when it is deleted, when an equal value replaces
/// it, or when the container is cleared or dropped. The hook must not touch the container that
/// owns it.
///
/// Any `FnMut(T)` closure is a hook:
///
/// ```
/// use rbtree::RbTree;
///
/// let mut removed = vec![];
///
/// {
///     let mut tree = RbTree::with_hooks(compare::natural(), |value: i32| removed.push(value));
///     tree.insert(1);
///     tree.insert(2);
///     assert!(tree.remove(&1));
/// }
///
/// assert_eq!(removed, [1, 2]);
/// ```
pub trait OnRemove<T> {
    /// Takes ownership of a removed value.
    fn on_remove(&mut self, value: T);
}

/// A hook that simply drops removed values.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Discard;

impl<T> OnRemove<T> for Discard {
    fn on_remove(&mut self, _value: T) {}
}

impl<T, F> OnRemove<T> for F where F: FnMut(T) {
    fn on_remove(&mut self, value: T) { self(value) }
}
