//! Disjoint-set (union-find) data structures over a fixed universe
//! `0..n`, in three strategies with different cost profiles:
//!
//! - [`ds::QuickFind`] — O(1) `find`, O(n) `union`;
//! - [`ds::QuickUnion`] — O(depth) both, depth unbounded;
//! - [`ds::UnionFind`] — union by size + path halving, amortized
//!   O(log n) or better; the one to use.

#[doc(inline)]
pub use ds;
#[doc(inline)]
pub use ops;
