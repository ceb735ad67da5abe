//! An ordered tree and an ordered map based on a red-black tree.
//!
//! Nodes live in an arena of slots with a shared black sentinel in slot zero, so rebalancing is
//! a matter of rewriting slot indices. Ordering comes from a
//! [`Compare`](https://docs.rs/compare) comparator, and values leaving a container are handed to
//! an [`OnRemove`](trait.OnRemove.html) hook.

#[macro_use]
extern crate log;

mod hook;
mod node;
pub mod map;
pub mod tree;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use hook::{Discard, OnRemove};
pub use map::{Entry, OrderedMap};
pub use node::Handle;
pub use tree::RbTree;
