//! Singly-linked sequence container with O(1) ends and O(1) concatenation.
//!
//! [`Ring`] owns a forward-linked chain of heap nodes and tracks head,
//! tail, and length. Keeping exactly one link per node makes the hot
//! operations cheap and whole-container splicing free of per-element
//! work, in exchange for an O(n) back removal:
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `push_front` / `push_back` / `pop_front` | O(1) |
//! | `concat` | O(1) |
//! | `pop_back` | O(n) |
//! | `get` / `remove` / `try_insert` | O(index) |
//! | `remove_matching` / `distribute` / `validate` | O(n) |
//!
//! The asymmetry between `pop_front` and `pop_back` is part of the
//! contract, not an implementation accident. Workloads that pop from
//! both ends belong in `VecDeque`; this structure is for FIFO traffic,
//! cheap splicing, and partition-style bulk moves.
//!
//! # Quick Start
//!
//! ```rust
//! use ringlist::Ring;
//!
//! let mut ring: Ring<u32> = Ring::new();
//! ring.push_back(1);
//! ring.push_back(2);
//! ring.push_front(0);
//!
//! assert_eq!(ring.len(), 3);
//! assert_eq!(ring.pop_front(), Some(0));
//!
//! // Splice two rings without touching their elements.
//! let tail: Ring<u32> = (10..13).collect();
//! let ring = ring.concat(tail);
//! let values: Vec<_> = ring.into_iter().collect();
//! assert_eq!(values, vec![1, 2, 10, 11, 12]);
//! ```
//!
//! # Partitioning
//!
//! [`Ring::remove_matching`] splits a ring in two with a predicate and
//! [`Ring::distribute`] deals elements round-robin into fresh rings.
//! Both preserve relative order and move elements instead of cloning
//! them.
//!
//! ```rust
//! use ringlist::Ring;
//!
//! let mut ring: Ring<i32> = (0..6).collect();
//! let evens = ring.remove_matching(|&v| v % 2 == 0);
//!
//! assert_eq!(ring.into_iter().collect::<Vec<_>>(), vec![1, 3, 5]);
//! assert_eq!(evens.into_iter().collect::<Vec<_>>(), vec![0, 2, 4]);
//! ```
//!
//! # Validation
//!
//! [`Ring::validate`] walks the structure and reports the first broken
//! link-level invariant as an [`InvariantError`] without panicking.
//! [`Ring::assert_valid`] is the fail-fast wrapper for harnesses that
//! prefer to abort. Both are always compiled; how strictly to react is
//! the caller's call.
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize` and `Deserialize` impls for [`Ring`]

#![warn(missing_docs)]

pub mod error;
pub mod ring;

pub use error::{InvariantError, OutOfBounds};
pub use ring::{IntoIter, Iter, IterMut, Ring};
