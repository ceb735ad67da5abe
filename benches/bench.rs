extern crate criterion;
extern crate rand;
extern crate rbtree;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rbtree::{OrderedMap, RbTree};

macro_rules! tree_insert_rand_bench {
    ($name: ident, $n: expr) => (
        fn $name(c: &mut Criterion) {
            let n: usize = $n;
            let mut tree = RbTree::new();
            // setup
            let mut rng = StdRng::seed_from_u64(n as u64);

            for _ in 0..n {
                tree.insert(rng.gen::<usize>() % n);
            }

            // measure
            c.bench_function(stringify!($name), |b| b.iter(|| {
                let k = rng.gen::<usize>() % n;
                tree.insert(k);
                tree.remove(&k);
            }));
            black_box(tree);
        }
    )
}

macro_rules! tree_insert_seq_bench {
    ($name: ident, $n: expr) => (
        fn $name(c: &mut Criterion) {
            let n: usize = $n;
            let mut tree = RbTree::new();
            // setup
            for i in 0..n {
                tree.insert(i * 2);
            }

            // measure
            let mut i = 1;
            c.bench_function(stringify!($name), |b| b.iter(|| {
                tree.insert(i);
                tree.remove(&i);
                i = (i + 2) % n;
            }));
            black_box(tree);
        }
    )
}

macro_rules! map_find_rand_bench {
    ($name: ident, $n: expr) => (
        fn $name(c: &mut Criterion) {
            let n: usize = $n;
            let mut map = OrderedMap::new();
            // setup
            let mut rng = StdRng::seed_from_u64(n as u64);
            let keys: Vec<usize> = (0..n).map(|_| rng.gen()).collect();

            for &k in &keys {
                map.insert(k, k);
            }

            // measure
            let mut i = 0;
            c.bench_function(stringify!($name), |b| b.iter(|| {
                let t = map.get(&keys[i]);
                i = (i + 1) % n;
                black_box(t);
            }));
        }
    )
}

macro_rules! tree_iter_bench {
    ($name: ident, $n: expr) => (
        fn $name(c: &mut Criterion) {
            let n: usize = $n;
            let mut rng = StdRng::seed_from_u64(n as u64);
            let tree: RbTree<usize> = (0..n).map(|_| rng.gen()).collect();

            c.bench_function(stringify!($name), |b| b.iter(|| {
                for value in &tree { black_box(value); }
            }));
        }
    )
}

tree_insert_rand_bench!{insert_rand_100,    100}
tree_insert_rand_bench!{insert_rand_10_000, 10_000}

tree_insert_seq_bench!{insert_seq_100,    100}
tree_insert_seq_bench!{insert_seq_10_000, 10_000}

map_find_rand_bench!{find_rand_100,    100}
map_find_rand_bench!{find_rand_10_000, 10_000}

tree_iter_bench!{iter_20,     20}
tree_iter_bench!{iter_1000,   1000}
tree_iter_bench!{iter_100000, 100000}

criterion_group!(benches,
    insert_rand_100, insert_rand_10_000,
    insert_seq_100, insert_seq_10_000,
    find_rand_100, find_rand_10_000,
    iter_20, iter_1000, iter_100000);
criterion_main!(benches);
