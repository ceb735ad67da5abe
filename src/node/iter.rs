use super::{Nodes, Side, NIL};

/// An in-order walk over the values of a `Nodes` arena, driven from both ends by successor and
/// predecessor steps.
pub struct Iter<'a, T: 'a> {
    nodes: &'a Nodes<T>,
    front: usize,
    back: usize,
    size: usize,
}

impl<'a, T> Iter<'a, T> {
    pub fn new(nodes: &'a Nodes<T>) -> Iter<'a, T> {
        let root = nodes.root();

        Iter {
            nodes: nodes,
            front: nodes.extremum(root, Side::Left),
            back: nodes.extremum(root, Side::Right),
            size: nodes.len(),
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self { Iter { ..*self } }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.size == 0 { return None; }
        debug_assert!(self.front != NIL);

        let index = self.front;
        self.front = self.nodes.neighbor(index, Side::Right);
        self.size -= 1;
        Some(self.nodes.value(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.size == 0 { return None; }
        debug_assert!(self.back != NIL);

        let index = self.back;
        self.back = self.nodes.neighbor(index, Side::Left);
        self.size -= 1;
        Some(self.nodes.value(index))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
