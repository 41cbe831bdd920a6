#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

//! An open-addressing hash table with prime capacities and a choice of probe
//! strategies.
//!
//! [`Hashtable`] maps keys to values in a single slot array. When the home slot
//! of a key is taken by a different key, the table walks a probe sequence
//! (linear, quadratic or double hashing, see [`ProbeStrategy`]) until it finds
//! the key or an empty slot. Inserting an existing key overwrites its value.
//! There is no removal.
//!
//! The capacity of a table is always a prime number. Before an insertion of a new
//! key would take the load factor above the max load factor (0.6 by default),
//! the table grows to the smallest prime at least twice its capacity and
//! reinserts every entry.
//!
//! # Example
//!
//! ```rust
//! use htable::{Hashtable, ProbeStrategy};
//!
//! let mut table = Hashtable::builder(13)
//!     .probe_strategy(ProbeStrategy::Quadratic)
//!     .build()?;
//!
//! for i in 0..100 {
//!     table.insert(format!("{}:{}", i, i * i), i)?;
//! }
//!
//! assert_eq!(table.get("7:49"), Some(&7));
//! assert_eq!(table.get("7:48"), None);
//! assert_eq!(table.len(), 100);
//! assert_eq!(table.keys().len(), 100);
//! # Ok::<(), htable::TableError>(())
//! ```
//!
//! # Keys
//!
//! Keys are not hashed with [`std::hash::Hash`]. Instead, both hash functions of
//! the table read the key's [`Display`](std::fmt::Display) output, so any type
//! that implements `PartialEq` and `Display` can be a key.
//!
//! # Logging
//!
//! With the `logging` feature (enabled by default), tables emit logs through the
//! [`log`](https://docs.rs/log) crate when they resize.

pub(crate) mod common;
pub(crate) mod policy;
pub mod stats;
pub mod table;

pub use common::error::TableError;
pub use policy::{Policy, ProbeStrategy};
pub use stats::CollisionStats;
pub use table::{Hashtable, HashtableBuilder};
