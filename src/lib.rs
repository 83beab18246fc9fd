//! Insertion-ordered concurrent hash map.
//!
//! # [`OrderedMap`]
//! A hash map that iterates its entries in the order they were first inserted, guarded by a single
//! read-write lock per instance.
//!
//! ## Features
//!
//! * `serde`: `Serialize` and `Deserialize` for [`OrderedMap`], in iteration order.
//! * `equivalent`: replaces the vendored [`Equivalent`] trait with the one from the
//!   [`equivalent`](https://crates.io/crates/equivalent) crate.
//! * `loom`: model-checks the container with [`loom`](https://crates.io/crates/loom).

#[cfg(not(feature = "equivalent"))]
mod equivalent;
pub use equivalent::Equivalent;

pub mod ordered_map;
pub use ordered_map::OrderedMap;

#[cfg(feature = "serde")]
mod serde;
