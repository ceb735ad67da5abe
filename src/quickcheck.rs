use compare::Compare;
use ::quickcheck::{Arbitrary, Gen};
use super::{OnRemove, OrderedMap, RbTree};

impl<T, C, D> Arbitrary for RbTree<T, C, D>
    where T: Arbitrary,
          C: 'static + Clone + Compare<T> + Default,
          D: 'static + Clone + OnRemove<T> + Default {

    fn arbitrary(g: &mut Gen) -> Self { Vec::<T>::arbitrary(g).into_iter().collect() }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let vec: Vec<T> = self.iter().cloned().collect();
        Box::new(vec.shrink().map(|vec| vec.into_iter().collect()))
    }
}

impl<K, V, C, FK, FV> Arbitrary for OrderedMap<K, V, C, FK, FV>
    where K: Arbitrary,
          V: Arbitrary,
          C: 'static + Clone + Compare<K> + Default,
          FK: 'static + Clone + OnRemove<K> + Default,
          FV: 'static + Clone + OnRemove<V> + Default {

    fn arbitrary(g: &mut Gen) -> Self { Vec::<(K, V)>::arbitrary(g).into_iter().collect() }

    fn shrink(&self) -> Box<dyn Iterator<Item=Self>> {
        let vec: Vec<(K, V)> = self.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        Box::new(vec.shrink().map(|vec| vec.into_iter().collect()))
    }
}
