//! # art-index
//!
//! An in-memory ordered associative index keyed by byte strings, implemented
//! as an Adaptive Radix Tree (ART).
//!
//! ## Overview
//!
//! Internal nodes adapt their representation to their fan-out (4, 16, 48, or
//! 256 child slots) and factor shared key bytes into compressed prefixes,
//! giving:
//!
//! - **Space efficiency**: node representations track data density
//! - **Fast point operations**: O(k) insert/get/remove, k the key length
//! - **Ordered traversal**: records visit in lexicographic key order
//! - **Prefix scans**: visit exactly the subtree extending a byte prefix
//!
//! ## Quick Start
//!
//! ```rust
//! use art_index::ArtIndex;
//!
//! let mut index = ArtIndex::new();
//!
//! // Insert some data. `None` means the key was new.
//! assert!(index.insert("hello", "world").is_none());
//! assert!(index.insert("foo", "bar").is_none());
//!
//! // Query the index.
//! assert_eq!(index.get("hello"), Some(&"world"));
//! assert_eq!(index.get("missing"), None);
//!
//! // Walk stored records in key order.
//! for node in index.iter().filter(|n| n.is_leaf()) {
//!     println!("{:?} -> {}", node.key().unwrap(), node.value().unwrap());
//! }
//! ```
//!
//! ## Key normalization and the null-byte limitation
//!
//! Keys are arbitrary byte strings. Internally every key gets a single `0x00`
//! terminator appended unless it already ends with one; the terminator keeps
//! stored keys prefix-free so that `"hell"` and `"hello"` each get their own
//! record, ordered correctly.
//!
//! Two consequences are part of this crate's contract:
//!
//! - A key already ending in `0x00` gains no second terminator, so `"k"` and
//!   `"k\0"` normalize identically and share one record.
//! - Keys containing an **interior** `0x00` byte are not supported: the first
//!   `0x00` acts as the effective terminator, and keys differing only past it
//!   can collide. Callers needing binary keys with embedded zeros must escape
//!   them first.
//!
//! ## Concurrency
//!
//! The index is single-threaded. Share it behind a lock if multiple threads
//! touch it; there is no internal synchronization.

mod iter;
mod keys;
mod mapping;
mod node;
mod prefix;
mod stats;
mod tree;
mod utils;

pub use iter::Iter;
pub use keys::Key;
pub use node::{NodeKind, NodeRef};
pub use stats::TreeStats;
pub use tree::ArtIndex;
