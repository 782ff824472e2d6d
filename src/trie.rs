//! Succinct read-only trie over byte strings.
//!
//! The tree shape is stored as a LOUDS (Level-Order Unary Degree Sequence)
//! bit vector: nodes are visited in BFS order from a virtual super-root, and
//! each node of degree $d$ contributes $d$ zero slots followed by a 1. Edge
//! labels live in a flat byte array in the same BFS-child order, and a second
//! bit vector marks the nodes where a dictionary entry ends.
//!
//! # Layout
//!
//! For the dictionary `["a", "hat", "is", "it"]`:
//!
//! ```text
//! labels:   [-, a, h, i, a, s, t, t]      (index 0 is a reserved byte)
//! leaves:    .  1  .  .  .  1  1  1
//! topology: 0 1 0 0 0 1 1 0 1 0 0 1 0 1 1 1 1   (bit 0 never set)
//! ```
//!
//! A node is identified by the index `k` of its incoming edge label. Its
//! children occupy the contiguous label range
//!
//! ```text
//! first = select1(topology, k) - k
//! after = select1(topology, k + 1) - k - 1
//! ```
//!
//! with `select1` 0-indexed, which is all the navigation a downward traversal
//! needs. Space is within a lower-order term of the information-theoretic
//! minimum for the tree shape; each descent costs one select and one probe of
//! a sorted label range.

use std::collections::VecDeque;
use std::fmt;
use std::io::{Read, Write};

use crate::bitvec::{BitBuf, BitVector};
use crate::cursor::Cursor;
use crate::error::{Error, Result};

/// Child ranges narrower than this are scanned linearly; wider ranges use
/// binary search over the sorted labels.
const BINARY_SEARCH_MIN_WIDTH: usize = 16;

const MAGIC: &[u8; 8] = b"STRIETR1";

/// An immutable trie over byte strings, built once from a dictionary and
/// then freely shareable among readers.
pub struct Trie {
    topology: BitVector,
    leaves: BitVector,
    labels: Vec<u8>,
    size: usize,
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("size", &self.size)
            .field("nodes", &self.labels.len())
            .finish()
    }
}

impl Trie {
    /// Build a trie from a dictionary of byte strings.
    ///
    /// The input need not be sorted or deduplicated; duplicates coalesce and
    /// empty strings are ignored (they have no label position to mark, so
    /// they do not count towards [`Trie::size`]). Construction never fails.
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<[u8]>,
    {
        let mut dict: Vec<K> = keys.into_iter().collect();
        dict.sort_unstable_by(|a, b| a.as_ref().cmp(b.as_ref()));

        let mut topology = BitBuf::new();
        let mut leaves = BitBuf::new();
        let mut labels = vec![0u8];
        let mut size = 0;

        // One-position counter: each node boundary sets a 1 here, and every
        // child slot advances it past a 0.
        let mut one_idx = 1;

        let mut queue = VecDeque::new();
        queue.push_back((0, dict.len(), 0));

        while let Some((l, r, depth)) = queue.pop_front() {
            topology.set(one_idx, true);
            one_idx += 1;

            // Entries of exactly `depth` bytes ended at this node; they were
            // leaf-marked when its incoming edge was appended.
            let mut i = l;
            while i < r && dict[i].as_ref().len() <= depth {
                i += 1;
            }

            while i < r {
                let b = dict[i].as_ref()[depth];
                let mut group_end = i + 1;
                while group_end < r && dict[group_end].as_ref()[depth] == b {
                    group_end += 1;
                }

                labels.push(b);
                // Sorted order puts the shortest entry first in its group.
                if dict[i].as_ref().len() == depth + 1 {
                    leaves.set(labels.len() - 1, true);
                    size += 1;
                }

                queue.push_back((i, group_end, depth + 1));
                one_idx += 1;
                i = group_end;
            }
        }

        topology.set(one_idx, true);

        Self {
            topology: topology.freeze(),
            leaves: leaves.freeze(),
            labels,
            size,
        }
    }

    /// Return a cursor positioned at the root node.
    ///
    /// The root is never leaf-marked, even when the dictionary is empty.
    pub fn root(&self) -> Cursor<'_> {
        let (first, after) = self.root_range();
        Cursor::at_root(self, first, after)
    }

    /// Child label range of the root node.
    pub fn root_range(&self) -> (usize, usize) {
        let (first, after, _) = self.node_range(0);
        (first, after)
    }

    /// Return the number of keys in the trie (distinct, non-empty).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return true if the trie holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Approximate heap memory usage in bytes.
    pub fn heap_bytes(&self) -> usize {
        self.topology.heap_bytes() + self.leaves.heap_bytes() + self.labels.capacity()
    }

    /// Child label range and leaf flag of the node whose incoming edge is
    /// `labels[k]` (`k = 0` is the root; its leaf flag is meaningless).
    ///
    /// A node whose child range would start past the end of the label array
    /// has no children and is necessarily leaf-marked.
    pub fn node_range(&self, k: usize) -> (usize, usize, bool) {
        let first = match self.topology.select1(k) {
            Some(pos) => pos - k,
            None => return (self.labels.len(), self.labels.len(), true),
        };
        if first >= self.labels.len() {
            return (self.labels.len(), self.labels.len(), true);
        }
        let after = match self.topology.select1(k + 1) {
            Some(pos) => (pos - k - 1).min(self.labels.len()),
            None => first,
        };
        (first, after, self.leaves.get(k))
    }

    /// Borrow the labels of the child range `[first, after)`. The view is
    /// read-only.
    pub fn child_labels(&self, first: usize, after: usize) -> &[u8] {
        &self.labels[first..after]
    }

    /// Absolute label position of the child of `[first, after)` whose edge
    /// byte is `b`, exploiting the sorted-children invariant.
    pub fn find_child(&self, first: usize, after: usize, b: u8) -> Option<usize> {
        let range = &self.labels[first..after];
        let idx = if range.len() < BINARY_SEARCH_MIN_WIDTH {
            range.iter().position(|&l| l == b)?
        } else {
            range.binary_search(&b).ok()?
        };
        Some(first + idx)
    }

    /// Serialize the trie to a stable binary encoding (little-endian).
    ///
    /// Format (versioned):
    /// - magic: 8 bytes (`STRIETR1`)
    /// - topology word count: u64, then that many u64 words
    /// - leaves word count: u64, then that many u64 words
    /// - label byte count: u64, then that many bytes
    /// - size: u64
    ///
    /// The rank/select accelerators are rebuilt on decode, never serialized.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(MAGIC);

        for bv in [&self.topology, &self.leaves] {
            let words = bv.as_words();
            out.extend_from_slice(&(words.len() as u64).to_le_bytes());
            for &w in words {
                out.extend_from_slice(&w.to_le_bytes());
            }
        }

        out.extend_from_slice(&(self.labels.len() as u64).to_le_bytes());
        out.extend_from_slice(&self.labels);
        out.extend_from_slice(&(self.size as u64).to_le_bytes());
        out
    }

    /// Deserialize a trie from `to_bytes()` output.
    ///
    /// Truncated input, unknown magic, inconsistent bit counts and trailing
    /// bytes are all rejected; on error nothing is constructed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut off = 0;

        let mut take = |n: usize| -> Result<&[u8]> {
            if off + n > bytes.len() {
                return Err(Error::InvalidEncoding(
                    "unexpected end of input".to_string(),
                ));
            }
            let slice = &bytes[off..off + n];
            off += n;
            Ok(slice)
        };

        let magic = take(8)?;
        if magic != MAGIC {
            return Err(Error::InvalidEncoding("bad magic for Trie".to_string()));
        }

        let topo_count = u64::from_le_bytes(take(8)?.try_into().unwrap()) as usize;
        // Bound allocations against total input to prevent allocation bombs.
        if topo_count.saturating_mul(8) > bytes.len() {
            return Err(Error::InvalidEncoding(format!(
                "topology word count ({topo_count}) too large for input ({} bytes)",
                bytes.len()
            )));
        }
        let mut topology_words = Vec::with_capacity(topo_count);
        for _ in 0..topo_count {
            topology_words.push(u64::from_le_bytes(take(8)?.try_into().unwrap()));
        }

        let leaf_count = u64::from_le_bytes(take(8)?.try_into().unwrap()) as usize;
        if leaf_count.saturating_mul(8) > bytes.len() {
            return Err(Error::InvalidEncoding(format!(
                "leaves word count ({leaf_count}) too large for input ({} bytes)",
                bytes.len()
            )));
        }
        let mut leaves_words = Vec::with_capacity(leaf_count);
        for _ in 0..leaf_count {
            leaves_words.push(u64::from_le_bytes(take(8)?.try_into().unwrap()));
        }

        let label_len = u64::from_le_bytes(take(8)?.try_into().unwrap()) as usize;
        if label_len > bytes.len() {
            return Err(Error::InvalidEncoding(format!(
                "label count ({label_len}) too large for input ({} bytes)",
                bytes.len()
            )));
        }
        let labels = take(label_len)?.to_vec();
        let size = u64::from_le_bytes(take(8)?.try_into().unwrap()) as usize;

        if off != bytes.len() {
            return Err(Error::InvalidEncoding(
                "trailing bytes after Trie".to_string(),
            ));
        }
        if labels.is_empty() {
            return Err(Error::InvalidEncoding(
                "label array missing reserved byte".to_string(),
            ));
        }

        let topology = BitVector::from_words(topology_words);
        let leaves = BitVector::from_words(leaves_words);

        if topology.count_ones() != labels.len() + 1 {
            return Err(Error::InvalidEncoding(format!(
                "topology popcount ({}) does not match node count ({})",
                topology.count_ones(),
                labels.len() + 1
            )));
        }
        if leaves.count_ones() != size {
            return Err(Error::InvalidEncoding(format!(
                "size ({size}) does not match leaves popcount ({})",
                leaves.count_ones()
            )));
        }
        if size > 0 {
            match leaves.select1(size - 1) {
                Some(pos) if pos < labels.len() => {}
                _ => {
                    return Err(Error::InvalidEncoding(
                        "leaf mark past end of label array".to_string(),
                    ))
                }
            }
        }

        Ok(Self {
            topology,
            leaves,
            labels,
            size,
        })
    }

    /// Serialize the trie into `sink`.
    pub fn marshal<W: Write>(&self, mut sink: W) -> Result<()> {
        sink.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Deserialize a trie from `source`, reading it to the end.
    pub fn unmarshal<R: Read>(mut source: R) -> Result<Self> {
        let mut buf = Vec::new();
        source.read_to_end(&mut buf)?;
        Self::from_bytes(&buf)
    }
}
