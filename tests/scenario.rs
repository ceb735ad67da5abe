extern crate compare;
extern crate quickcheck_macros;
extern crate rand;
extern crate rbtree;
extern crate simplelog;

use compare::Compare;
use quickcheck_macros::quickcheck;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rbtree::{OrderedMap, RbTree};
use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

const INSERTED: [&str; 10] =
    ["alpha", "xray", "coca", "book", "terra", "none", "factor", "not", "original", "zulu"];

const DELETED: [&str; 10] =
    ["none", "factor", "not", "original", "zulu", "alpha", "xray", "coca", "book", "terra"];

fn init_logging() {
    use simplelog::{Config, LevelFilter, SimpleLogger};
    let _ = SimpleLogger::init(LevelFilter::Trace, Config::default());
}

fn sorted(values: &[&'static str]) -> Vec<&'static str> {
    let mut values = values.to_vec();
    values.sort();
    values
}

#[test]
fn strings_insert_then_delete() {
    init_logging();

    let mut tree = RbTree::new();

    for (i, value) in INSERTED.iter().enumerate() {
        assert!(!tree.insert(*value));
        assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), sorted(&INSERTED[..i + 1]));
    }

    assert_eq!(tree.len(), 10);

    for (i, value) in DELETED.iter().enumerate() {
        assert!(tree.remove(value));
        assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), sorted(&DELETED[i + 1..]));
    }

    assert!(tree.is_empty());
    assert_eq!(tree.iter().next(), None);
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);
}

#[test]
fn strings_in_shuffled_orders() {
    init_logging();

    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..64 {
        let mut inserted = INSERTED.to_vec();
        inserted.shuffle(&mut rng);
        let mut tree: RbTree<&str> = inserted.iter().cloned().collect();

        let mut deleted = INSERTED.to_vec();
        deleted.shuffle(&mut rng);

        for (i, value) in deleted.iter().enumerate() {
            assert!(tree.remove(value));
            assert!(!tree.remove(value));
            assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), sorted(&deleted[i + 1..]));
        }

        assert!(tree.is_empty());
    }
}

#[test]
fn map_lookups() {
    let mut map = OrderedMap::new();

    assert!(!map.insert("dog", "bark"));
    assert_eq!(map.get(&"dog"), Some(&"bark"));

    assert!(!map.insert("cow", "mooh"));
    assert_eq!(map.get(&"cow"), Some(&"mooh"));

    assert_eq!(map.get(&"dog"), Some(&"bark"));
    assert_eq!(map.get(&"cat"), None);
    assert_eq!(map[&"cow"], "mooh");
    assert_eq!(format!("{:?}", map), r#"{"cow": "mooh", "dog": "bark"}"#);
}

#[test]
fn map_get_distinguishes_present_none() {
    let mut map: OrderedMap<&str, Option<u32>> = OrderedMap::new();
    map.insert("empty", None);

    assert_eq!(map.get(&"empty"), Some(&None));
    assert_eq!(map.get(&"absent"), None);
    assert!(map.find(&"empty").is_some());
}

#[test]
fn replaced_value_goes_to_hook_once() {
    let removed = Rc::new(RefCell::new(vec![]));

    {
        let removed = removed.clone();
        let mut tree = RbTree::with_hooks(
            |l: &(u32, &str), r: &(u32, &str)| l.0.cmp(&r.0),
            move |value: (u32, &'static str)| removed.borrow_mut().push(value));

        tree.insert((1, "one"));
        tree.insert((2, "two"));
        assert!(tree.insert((1, "uno")));

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), [(1, "uno"), (2, "two")]);
    }

    // The replaced value first, then the rest as the tree drops.
    let removed = removed.borrow();
    assert_eq!(removed[0], (1, "one"));
    assert_eq!(removed.len(), 3);
    assert!(removed[1..].contains(&(1, "uno")));
    assert!(removed[1..].contains(&(2, "two")));
}

#[test]
fn miss_does_not_call_hook() {
    let count = Rc::new(RefCell::new(0));
    let counter = count.clone();
    let mut tree = RbTree::with_hooks(compare::natural(), move |_: u32| *counter.borrow_mut() += 1);

    tree.extend(vec![3, 1, 2]);
    assert!(!tree.remove(&4));
    assert_eq!(*count.borrow(), 0);

    assert!(tree.remove(&2));
    assert_eq!(*count.borrow(), 1);

    tree.clear();
    assert_eq!(*count.borrow(), 3);
    assert!(tree.is_empty());

    drop(tree);
    assert_eq!(*count.borrow(), 3);
}

/// Orders strings without regard to ASCII case.
#[derive(Clone, Copy, Debug, Default)]
struct IgnoreCase;

impl Compare<String> for IgnoreCase {
    fn compare(&self, l: &String, r: &String) -> Ordering {
        l.to_lowercase().cmp(&r.to_lowercase())
    }
}

impl Compare<str, String> for IgnoreCase {
    fn compare(&self, l: &str, r: &String) -> Ordering {
        l.to_lowercase().cmp(&r.to_lowercase())
    }
}

#[test]
fn map_replace_keeps_new_key() {
    let keys = Rc::new(RefCell::new(vec![]));
    let values = Rc::new(RefCell::new(vec![]));

    let mut map = {
        let keys = keys.clone();
        let values = values.clone();
        OrderedMap::with_hooks(
            IgnoreCase,
            move |key: String| keys.borrow_mut().push(key),
            move |value: u32| values.borrow_mut().push(value))
    };

    assert!(!map.insert("Dog".to_string(), 1));
    assert!(map.insert("dog".to_string(), 2));

    assert_eq!(map.len(), 1);
    assert_eq!(map.find("DOG").map(|e| e.key().as_str()), Some("dog"));
    assert_eq!(map.get("DoG"), Some(&2));
    assert_eq!(*keys.borrow(), ["Dog"]);
    assert_eq!(*values.borrow(), [1]);

    assert!(map.remove("DOG"));
    assert!(map.is_empty());
    assert_eq!(*keys.borrow(), ["Dog", "dog"]);
    assert_eq!(*values.borrow(), [1, 2]);
}

#[test]
fn map_drop_releases_every_entry() {
    let released = Rc::new(RefCell::new(0));

    {
        let on_key = released.clone();
        let on_value = released.clone();
        let mut map = OrderedMap::with_hooks(
            compare::natural(),
            move |_: u32| *on_key.borrow_mut() += 1,
            move |_: u32| *on_value.borrow_mut() += 1);

        for i in 0..100 { map.insert(i % 40, i); }
        assert_eq!(map.len(), 40);
        assert_eq!(*released.borrow(), 120);
    }

    assert_eq!(*released.borrow(), 200);
}

#[test]
#[should_panic(expected = "`RbTree::delete()` - `handle` is invalid!")]
fn deleting_twice_through_one_handle_panics() {
    init_logging();

    let mut tree: RbTree<u32> = (0..7).collect();
    let handle = tree.find(&3).unwrap();
    tree.delete(handle);
    assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), [0, 1, 2, 4, 5, 6]);

    tree.delete(handle);
}

#[test]
fn handles_survive_unrelated_deletes() {
    let mut tree: RbTree<u32> = (0..64).collect();
    let handle = tree.find(&40).unwrap();

    for i in 0..32 { assert!(tree.remove(&i)); }
    tree.extend(100..132);

    assert_eq!(*tree.value(handle), 40);
    assert_eq!(tree.next(handle).map(|h| *tree.value(h)), Some(41));
}

#[test]
fn cursor_walks_both_ways() {
    let tree: RbTree<&str> = INSERTED.iter().cloned().collect();
    let expected = sorted(&INSERTED);

    let mut forward = vec![];
    let mut cursor = tree.first();
    while let Some(handle) = cursor {
        forward.push(*tree.value(handle));
        cursor = tree.next(handle);
    }

    let mut backward = vec![];
    let mut cursor = tree.last();
    while let Some(handle) = cursor {
        backward.push(*tree.value(handle));
        cursor = tree.prev(handle);
    }
    backward.reverse();

    assert_eq!(forward, expected);
    assert_eq!(backward, expected);
}

#[quickcheck]
fn map_keeps_one_entry_per_key(pairs: Vec<(u8, u32)>) -> bool {
    let mut map = OrderedMap::new();
    let mut replaced = 0;

    for &(k, v) in &pairs {
        if map.insert(k, v) { replaced += 1; }
    }

    let mut keys: Vec<u8> = pairs.iter().map(|p| p.0).collect();
    keys.sort();
    keys.dedup();

    map.len() == keys.len() &&
    replaced == pairs.len() - keys.len() &&
    map.keys().cloned().collect::<Vec<_>>() == keys &&
    pairs.iter().rev().all(|&(k, _)| map.contains_key(&k))
}

#[quickcheck]
fn last_insert_wins(pairs: Vec<(u8, u32)>) -> bool {
    let map: OrderedMap<u8, u32> = pairs.iter().cloned().collect();

    map.iter().all(|(k, v)| pairs.iter().rev().find(|p| p.0 == *k).map(|p| &p.1) == Some(v))
}
