mod iter;


use std::cmp::Ordering::{self, *};
use std::mem;
use std::num::NonZeroUsize;

pub use self::iter::Iter;

/// The slot reserved for the sentinel.
pub const NIL: usize = 0;

/// An opaque reference to a node in an [`RbTree`](../struct.RbTree.html).
///
/// A handle goes stale when its value is deleted. Deleting a node with two children moves its
/// in-order successor's value into the deleted node, so the successor's handle goes stale too.
/// Using a stale handle panics.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Handle {
    index: NonZeroUsize,
    generation: u32,
}

impl Handle {
    fn index(self) -> usize { self.index.get() }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Node<T> {
    parent: usize,
    left: usize,
    right: usize,
    color: Color,
    // Bumped whenever the slot stops holding the value its handles were issued for.
    generation: u32,
    value: Option<T>,
}

impl<T> Node<T> {
    fn sentinel() -> Self {
        Node { parent: NIL, left: NIL, right: NIL, color: Color::Black, generation: 0, value: None }
    }
}

/// Where a probe landed during a search.
pub enum Search {
    Found(usize),
    Vacant(usize, Side),
}

/// A red-black tree laid out in an arena of slots.
///
/// Slot `NIL` is the sentinel: it is always black and its links always point back at itself
/// between operations. Vacated slots are recycled through `free`.
#[derive(Clone, Debug)]
pub struct Nodes<T> {
    slots: Vec<Node<T>>,
    free: Vec<usize>,
    root: usize,
}

impl<T> Nodes<T> {
    pub fn new() -> Self {
        Nodes { slots: vec![Node::sentinel()], free: vec![], root: NIL }
    }

    pub fn len(&self) -> usize { self.slots.len() - 1 - self.free.len() }

    pub fn root(&self) -> usize { self.root }

    /// Issues a handle for the node at `index`, or `None` for the sentinel.
    pub fn handle(&self, index: usize) -> Option<Handle> {
        NonZeroUsize::new(index)
            .map(|slot| Handle { index: slot, generation: self.slots[index].generation })
    }

    /// Returns the slot of a handle, panicking if the handle does not name a live node.
    pub fn slot(&self, handle: Handle, method: &str) -> usize {
        let index = handle.index();
        match self.slots.get(index) {
            Some(node) if node.value.is_some() && node.generation == handle.generation => index,
            _ => panic!("`{}` - `handle` is invalid!", method),
        }
    }

    fn invalidate(&mut self, index: usize) {
        let node = &mut self.slots[index];
        node.generation = node.generation.wrapping_add(1);
    }

    pub fn parent(&self, index: usize) -> usize { self.slots[index].parent }

    pub fn color(&self, index: usize) -> Color { self.slots[index].color }

    pub fn is_red(&self, index: usize) -> bool { self.slots[index].color == Color::Red }

    pub fn child(&self, index: usize, side: Side) -> usize {
        let node = &self.slots[index];
        match side {
            Side::Left => node.left,
            Side::Right => node.right,
        }
    }

    fn set_child(&mut self, index: usize, side: Side, child: usize) {
        let node = &mut self.slots[index];
        match side {
            Side::Left => node.left = child,
            Side::Right => node.right = child,
        }
    }

    fn set_color(&mut self, index: usize, color: Color) { self.slots[index].color = color; }

    fn side_of(&self, index: usize) -> Side {
        if self.child(self.parent(index), Side::Left) == index { Side::Left } else { Side::Right }
    }

    pub fn value(&self, index: usize) -> &T {
        self.slots[index].value.as_ref().expect("`Nodes::value()` - slot is vacant!")
    }

    pub fn value_mut(&mut self, index: usize) -> &mut T {
        self.slots[index].value.as_mut().expect("`Nodes::value_mut()` - slot is vacant!")
    }

    /// Walks from the root towards a value, steered by `f`, which orders the probe against the
    /// value of the node being visited.
    pub fn search<F>(&self, mut f: F) -> Search where F: FnMut(&T) -> Ordering {
        let mut parent = NIL;
        let mut side = Side::Left;
        let mut index = self.root;

        while index != NIL {
            side = match f(self.value(index)) {
                Equal => return Search::Found(index),
                Less => Side::Left,
                Greater => Side::Right,
            };

            parent = index;
            index = self.child(index, side);
        }

        Search::Vacant(parent, side)
    }

    pub fn find<F>(&self, f: F) -> Option<usize> where F: FnMut(&T) -> Ordering {
        match self.search(f) {
            Search::Found(index) => Some(index),
            Search::Vacant(..) => None,
        }
    }

    /// Finds the closest node on `side` of the probe, or the probe's own node if `inclusive`.
    pub fn closest<F>(&self, mut f: F, side: Side, inclusive: bool) -> usize
        where F: FnMut(&T) -> Ordering {

        let toward = match side { Side::Left => Less, Side::Right => Greater };
        let mut closest = NIL;
        let mut index = self.root;

        while index != NIL {
            let order = f(self.value(index));

            if order == Equal {
                if inclusive { return index; }
                let child = self.child(index, side);
                return if child == NIL { closest } else { self.extremum(child, side.opposite()) };
            }

            if order == toward {
                index = self.child(index, side);
            } else {
                closest = index;
                index = self.child(index, side.opposite());
            }
        }

        closest
    }

    /// Returns the leftmost or rightmost node of the subtree rooted at `index`.
    pub fn extremum(&self, mut index: usize, side: Side) -> usize {
        if index == NIL { return NIL; }

        loop {
            let child = self.child(index, side);
            if child == NIL { return index; }
            index = child;
        }
    }

    /// Returns the in-order neighbor of `index` on `side`, or `NIL` at either end.
    pub fn neighbor(&self, mut index: usize, side: Side) -> usize {
        let child = self.child(index, side);
        if child != NIL { return self.extremum(child, side.opposite()); }

        let mut parent = self.parent(index);
        while parent != NIL && self.child(parent, side) == index {
            index = parent;
            parent = self.parent(index);
        }

        parent
    }

    fn alloc(&mut self, parent: usize, value: T) -> usize {
        let index = match self.free.pop() {
            Some(index) => index,
            None => { self.slots.push(Node::sentinel()); self.slots.len() - 1 }
        };

        // A recycled slot keeps its generation so old handles into it stay stale.
        let node = &mut self.slots[index];
        node.parent = parent;
        node.left = NIL;
        node.right = NIL;
        node.color = Color::Red;
        node.value = Some(value);
        index
    }

    /// Resets the slot at `index` to a vacant one of the next generation.
    fn vacate(&mut self, index: usize) -> Option<T> {
        let generation = self.slots[index].generation.wrapping_add(1);
        let node = mem::replace(&mut self.slots[index], Node { generation, ..Node::sentinel() });
        self.free.push(index);
        node.value
    }

    fn release(&mut self, index: usize) -> T {
        let value = self.vacate(index);
        trace!("released slot {}", index);
        value.expect("`Nodes::release()` - slot is vacant!")
    }

    /// Points `parent`'s link to `old` at `new` instead, updating the root if `parent` is the
    /// sentinel.
    fn replace_child(&mut self, parent: usize, old: usize, new: usize) {
        if parent == NIL {
            self.root = new;
        } else if self.child(parent, Side::Left) == old {
            self.set_child(parent, Side::Left, new);
        } else {
            self.set_child(parent, Side::Right, new);
        }
    }

    // Rotates the node at `index` down towards `side`, lifting its child on the opposite side.
    fn rotate(&mut self, index: usize, side: Side) {
        let pivot = self.child(index, side.opposite());
        debug_assert!(pivot != NIL, "rotating towards an empty slot");

        let middle = self.child(pivot, side);
        self.set_child(index, side.opposite(), middle);
        if middle != NIL { self.slots[middle].parent = index; }

        let parent = self.parent(index);
        self.slots[pivot].parent = parent;
        self.replace_child(parent, index, pivot);

        self.set_child(pivot, side, index);
        self.slots[index].parent = pivot;
    }

    /// Hangs a new red node holding `value` under `parent` on `side` and rebalances.
    pub fn attach(&mut self, parent: usize, side: Side, value: T) -> usize {
        let index = self.alloc(parent, value);

        if parent == NIL {
            self.root = index;
        } else {
            self.set_child(parent, side, index);
        }

        self.insert_fixup(index);
        index
    }

    fn insert_fixup(&mut self, mut index: usize) {
        while self.is_red(self.parent(index)) {
            let parent = self.parent(index);
            let grandparent = self.parent(parent);
            let side = self.side_of(parent);
            let uncle = self.child(grandparent, side.opposite());

            if self.is_red(uncle) {
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                trace!("recolored around slot {}, continuing at {}", index, grandparent);
                index = grandparent;
            } else {
                if self.child(parent, side.opposite()) == index {
                    index = parent;
                    self.rotate(index, side);
                }

                let parent = self.parent(index);
                let grandparent = self.parent(parent);
                self.set_color(parent, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate(grandparent, side.opposite());
            }
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    /// Unlinks the node at `index` and returns the value it held.
    ///
    /// A node with two children trades values with its in-order successor, and the successor's
    /// slot is the one vacated.
    pub fn remove(&mut self, mut index: usize) -> T {
        if self.child(index, Side::Left) != NIL && self.child(index, Side::Right) != NIL {
            let successor = self.extremum(self.child(index, Side::Right), Side::Left);
            let value = self.slots[successor].value.take();
            let value = mem::replace(&mut self.slots[index].value, value);
            self.slots[successor].value = value;
            self.invalidate(index);
            index = successor;
        }

        let child = match self.child(index, Side::Left) {
            NIL => self.child(index, Side::Right),
            left => left,
        };

        // The sentinel may stand in for `child` here; fixup relies on its parent link.
        let parent = self.parent(index);
        self.slots[child].parent = parent;
        self.replace_child(parent, index, child);

        if self.color(index) == Color::Black { self.remove_fixup(child); }

        self.slots[NIL].parent = NIL;
        self.slots[NIL].color = Color::Black;
        self.release(index)
    }

    fn remove_fixup(&mut self, mut index: usize) {
        while index != self.root && self.color(index) == Color::Black {
            let parent = self.parent(index);
            let side = self.side_of(index);
            let far = side.opposite();
            let mut sibling = self.child(parent, far);

            if self.is_red(sibling) {
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.child(parent, far);
            }

            if !self.is_red(self.child(sibling, side)) && !self.is_red(self.child(sibling, far)) {
                self.set_color(sibling, Color::Red);
                index = parent;
                continue;
            }

            if !self.is_red(self.child(sibling, far)) {
                let near = self.child(sibling, side);
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, far);
                sibling = self.child(parent, far);
            }

            let color = self.color(parent);
            self.set_color(sibling, color);
            self.set_color(parent, Color::Black);
            let nephew = self.child(sibling, far);
            self.set_color(nephew, Color::Black);
            self.rotate(parent, side);
            trace!("rebalanced removal at slot {}", parent);
            index = self.root;
        }

        self.set_color(index, Color::Black);
    }

    /// Empties the arena, passing every value to `f` in post-order.
    ///
    /// Slots are kept for reuse so that handles into them stay stale.
    pub fn drain<F>(&mut self, mut f: F) where F: FnMut(T) {
        let mut index = self.root;
        self.root = NIL;

        while index != NIL {
            let node = &self.slots[index];

            if node.left != NIL {
                index = node.left;
            } else if node.right != NIL {
                index = node.right;
            } else {
                let parent = node.parent;
                if parent != NIL {
                    if self.slots[parent].left == index {
                        self.slots[parent].left = NIL;
                    } else {
                        self.slots[parent].right = NIL;
                    }
                }

                if let Some(value) = self.vacate(index) { f(value); }
                index = parent;
            }
        }

        trace!("drained arena, {} slots free", self.free.len());
    }
}
