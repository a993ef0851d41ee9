//! An augmented interval tree index over half-open time ranges.
//!
//! [`IntervalTree`] stores [`Range`] values in a binary search tree keyed
//! by range start, with each node carrying the maximum upper bound of its
//! subtree. The cached maximum lets an overlap query prove whole subtrees
//! irrelevant and skip them, answering "which stored ranges intersect this
//! range" in `O(depth + matches)` time - the question at the heart of
//! calendar and booking engines.
//!
//! ```
//! use interbst::IntervalTree;
//!
//! let mut bookings = IntervalTree::default();
//!
//! // Index a set of half-open booking windows.
//! bookings.insert(800..900);
//! bookings.insert(930..1015);
//! bookings.insert(1000..1130);
//!
//! // Find every booking overlapping [1000, 1100).
//! let clashes = bookings.overlaps(&(1000..1100)).collect::<Vec<_>>();
//! assert_eq!(clashes, [&(930..1015), &(1000..1130)]);
//! ```
//!
//! Any point type with a total order works as the range bound, from plain
//! integers to [`SystemTime`] values.
//!
//! # Semantics
//!
//! * Ranges are half-open: `[start, end)`. Two ranges overlap when each
//!   starts strictly before the other ends, so ranges sharing only a
//!   bound do not overlap.
//! * The tree is a multiset: duplicate ranges are stored and yielded once
//!   per occurrence, and nothing requires `start <= end` (an inverted
//!   range overlaps nothing).
//! * Removal matches stored ranges by upper-bound equality and start
//!   containment, not by range equality - see [`IntervalTree::remove()`]
//!   for the precise rule.
//!
//! # Performance
//!
//! The tree is deliberately unbalanced: insertion order alone decides its
//! shape, and no rebalancing is ever performed. Insert and remove cost
//! `O(depth)`, overlap search `O(depth + matches)`; depth is logarithmic
//! for randomly ordered inserts and linear in the worst case (sorted
//! inserts). Callers needing bounded depth should shuffle their inserts
//! or reach for a balancing tree instead.
//!
//! The tree is a plain owned structure with no interior mutability;
//! sharing it across threads requires external synchronisation, the same
//! as any `&mut` access.
//!
//! [`Range`]: std::ops::Range
//! [`SystemTime`]: std::time::SystemTime

#![warn(missing_docs, missing_debug_implementations)]

mod interval;
mod iter;
mod node;
mod tree;


pub use iter::OwnedIter;
pub use tree::*;
