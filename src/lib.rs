//! # Succinct Trie
//!
//! *A read-only trie in barely more bits than the tree shape itself.*
//!
//! ## Intuition First
//!
//! Picture a phone book compressed down to the absolute minimum number of
//! bits that can still distinguish it from every other possible phone book.
//! Normally that compression destroys the index: to look up a name you must
//! decompress everything. A succinct trie keeps the "reach inside" ability:
//! you can walk from the root, one character at a time, straight through the
//! compressed bits, without ever materializing a node or following a pointer.
//!
//! ## The Problem
//!
//! A pointer-based trie over $n$ nodes spends $O(n \log n)$ bits on pointers
//! alone, routinely 10x to 20x the space of the strings it stores. For
//! dictionaries used as read-only filters (domain suffix lists, URL routing
//! tables) the pointers are pure overhead: the tree never changes, so its
//! shape can be encoded once.
//!
//! ## Historical Context
//!
//! ```text
//! 1989  Jacobson    LOUDS: level-order unary degree sequences, 2n + o(n) bits
//! 1996  Munro-Raman Constant-time rank/select in o(n) extra space
//! 2006  Delpratt    "Engineering the LOUDS succinct tree representation"
//! 2008  Okanohara   Practical select dictionaries (darray, sarray)
//! ```
//!
//! Jacobson's observation was that a tree's shape is fully captured by the
//! degree of each node in level order: write each degree in unary and the
//! resulting bit string supports parent/child navigation through rank and
//! select alone.
//!
//! ## Mathematical Formulation
//!
//! An $n$-node tree has $\binom{2n}{n}/(n+1)$ possible shapes, so its shape
//! needs $2n - \Theta(\log n)$ bits. LOUDS spends exactly $2n + O(1)$ bits
//! (one 0 per edge, one 1 per node) plus $o(n)$ bits of rank/select
//! acceleration. With 0-indexed `select1`, the node occupying child slot
//! $k$ has its own children at label positions
//!
//! $[\mathrm{select}_1(k) - k,\; \mathrm{select}_1(k+1) - k - 1)$
//!
//! which turns every downward step into one select and one probe of a
//! sorted byte range.
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(N \log N)$ to sort the dictionary, then $O(L)$ BFS where
//!   $L$ is the total key length.
//! - **Query**: $O(|q|)$ selects for a key $q$; each select is $O(1)$
//!   expected via the precomputed hint table.
//! - **Space**: $2n + o(n)$ bits of topology, $n$ bytes of labels, $n$ bits
//!   of leaf marks.
//!
//! ## What Could Go Wrong
//!
//! 1. **Static only**: there is no insert. Changing the dictionary means
//!    rebuilding; the accelerator tables are computed exactly once.
//! 2. **Off-by-one tar pits**: the LOUDS identity mixes 0-indexed bit
//!    positions with 1-indexed child slots. This crate pins the convention
//!    (0-indexed `select1`, label index 0 reserved) and tests the exact bit
//!    layout of a known dictionary.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **[`Trie`]**: the frozen store (topology, labels, leaf marks) with a
//!   BFS builder and a versioned binary codec.
//! - **[`Cursor`]**: copyable node handles for search, longest-prefix
//!   matching and caller-driven traversal.
//! - **[`BitVector`]**: the underlying rank/select bit vector and its
//!   mutable build-phase twin [`BitBuf`].
//!
//! ## References
//!
//! - Jacobson, G. (1989). "Space-efficient Static Trees and Graphs."
//! - Delpratt, O., Rahman, N., & Raman, R. (2006). "Engineering the LOUDS
//!   Succinct Tree Representation."
//! - Okanohara, D., & Sadakane, K. (2007). "Practical Entropy-Compressed
//!   Rank/Select Dictionary."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitvec;
pub mod cursor;
pub mod error;
pub mod trie;

pub use bitvec::{BitBuf, BitVector};
pub use cursor::Cursor;
pub use error::Error;
pub use trie::Trie;
