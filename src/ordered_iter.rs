use ::ordered_iter::{OrderedMapIterator, OrderedSetIterator};
use super::{map, tree};

impl<'a, K, V> OrderedMapIterator for map::Iter<'a, K, V> where K: Ord {
    type Key = &'a K;
    type Val = &'a V;
}

impl<'a, T> OrderedSetIterator for tree::Iter<'a, T> where T: Ord {}
