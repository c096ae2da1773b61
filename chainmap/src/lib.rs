//! Separate-chaining hash map with fixed buckets and checked iteration
//!
//! This crate provides [`ChainMap`], a single-threaded hash map that resolves
//! collisions by chaining entries into a fixed array of buckets, together with
//! the [`Dictionary`] trait describing its operations.
//!
//! # Features
//!
//! - **Deterministic Layout**: Fixed-seed hashing, so iteration and view order
//!   depend only on the sequence of mutations
//! - **Strict Insert**: `insert` refuses duplicates; `set` is the upsert
//! - **Typed Errors**: Every failure is a [`MapError`] value
//! - **Checked Iteration**: Iterators detect mutation of the map through a
//!   per-map version counter
//! - **Snapshot Views**: `keys`, `values` and `entries` return owned copies
//!
//! # Example
//!
//! ```rust
//! use chainmap::{ChainMap, MapError};
//!
//! let map = ChainMap::new();
//! map.insert('a', 1.1).unwrap();
//! map.insert('b', 2.2).unwrap();
//!
//! // Upsert
//! map.set('b', 3.3).unwrap();
//! assert_eq!(map.get(&'b'), Ok(3.3));
//!
//! assert_eq!(map.get(&'c'), Err(MapError::KeyNotFound));
//! assert!(map.remove(&'a'));
//! assert!(!map.remove(&'z'));
//!
//! for entry in &map {
//!     let (key, value) = entry.unwrap();
//!     println!("{key}: {value}");
//! }
//! ```

#![warn(missing_docs)]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod chain;
mod dictionary;
mod error;
mod iter;
mod key;
mod map;
mod point;
pub mod printer;

pub use dictionary::Dictionary;
pub use error::MapError;
pub use iter::Iter;
pub use key::MapKey;
pub use map::{ChainMap, DEFAULT_BUCKET_COUNT};
pub use point::Point;
