//! Cursor-based traversal over a [`Trie`].
//!
//! A cursor is a small copyable value: advancing returns a new cursor and
//! leaves the old one valid, so callers can branch, backtrack and drive
//! bespoke matching (wildcard labels, longest-suffix lookups) with ordinary
//! control flow. A failed descent yields a non-existent cursor on which
//! every operation is a harmless no-op.

use crate::trie::Trie;

/// An immutable handle to a trie node: its child label range and leaf flag.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    trie: &'a Trie,
    first: usize,
    after: usize,
    leaf: bool,
    exists: bool,
}

impl<'a> Cursor<'a> {
    pub(crate) fn at_root(trie: &'a Trie, first: usize, after: usize) -> Self {
        Self {
            trie,
            first,
            after,
            leaf: false,
            exists: true,
        }
    }

    fn missing(trie: &'a Trie) -> Self {
        Self {
            trie,
            first: 0,
            after: 0,
            leaf: false,
            exists: false,
        }
    }

    fn descend(&self, k: usize) -> Self {
        let (first, after, leaf) = self.trie.node_range(k);
        Self {
            trie: self.trie,
            first,
            after,
            leaf,
            exists: true,
        }
    }

    /// Return true if this cursor refers to a real node, false for the
    /// sentinel returned by a failed descent.
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Return true if a dictionary entry ends at this node.
    pub fn is_leaf(&self) -> bool {
        self.exists && self.leaf
    }

    /// Borrow the edge labels of this node's children, in strictly
    /// ascending byte order. The view is read-only and must not outlive
    /// the trie.
    pub fn children(&self) -> &'a [u8] {
        if !self.exists {
            return &[];
        }
        self.trie.child_labels(self.first, self.after)
    }

    /// Descend along the child edge labelled `b`, or return a non-existent
    /// cursor if there is no such child.
    pub fn next(&self, b: u8) -> Cursor<'a> {
        if !self.exists {
            return *self;
        }
        match self.trie.find_child(self.first, self.after, b) {
            Some(k) => self.descend(k),
            None => Self::missing(self.trie),
        }
    }

    /// Descend to the child at absolute label index `i`.
    ///
    /// Valid indexes are `children_range()`; anything else returns a
    /// non-existent cursor. Together with [`Cursor::children`] this is the
    /// hook for custom matchers that pick children by position rather than
    /// by byte.
    pub fn next_at(&self, i: usize) -> Cursor<'a> {
        if !self.exists || i < self.first || i >= self.after {
            return Self::missing(self.trie);
        }
        self.descend(i)
    }

    /// Absolute label index range of this node's children; the domain of
    /// [`Cursor::next_at`].
    pub fn children_range(&self) -> std::ops::Range<usize> {
        self.first..self.after
    }

    /// Descend along every byte of `key`, short-circuiting on a missing
    /// child. The result is non-existent unless the whole key traced a path.
    pub fn search(&self, key: &[u8]) -> Cursor<'a> {
        let mut cur = *self;
        for &b in key {
            if !cur.exists {
                break;
            }
            cur = cur.next(b);
        }
        cur
    }

    /// Return the length of the longest prefix of `key` that is a complete
    /// dictionary entry below this cursor, or 0 if none is.
    ///
    /// A full match returns `key.len()`. Only complete entries count: with
    /// `"xx.yy"` in the dictionary, `"xx.yy.zz"` and `"xx.yy"` both return
    /// 5 while `"xx"` returns 0.
    pub fn search_prefix(&self, key: &[u8]) -> usize {
        let mut cur = *self;
        let mut last_match = 0;
        for (i, &b) in key.iter().enumerate() {
            cur = cur.next(b);
            if !cur.exists {
                break;
            }
            if cur.leaf {
                last_match = i + 1;
            }
        }
        last_match
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_navigation() {
        let trie = Trie::from_keys(["hat", "is", "it", "a"]);

        let root = trie.root();
        assert!(root.exists());
        assert!(!root.is_leaf());
        assert_eq!(root.children(), b"ahi");

        // "a" is a complete entry with no descendants.
        let a = root.next(b'a');
        assert!(a.exists());
        assert!(a.is_leaf());
        assert!(a.children().is_empty());

        // "i" continues to "is" and "it".
        let i = root.next(b'i');
        assert!(!i.is_leaf());
        assert_eq!(i.children(), b"st");

        assert!(!root.next(b'z').exists());
    }

    #[test]
    fn test_missing_cursor_is_inert() {
        let trie = Trie::from_keys(["a"]);
        let missing = trie.root().next(b'z');
        assert!(!missing.exists());
        assert!(!missing.is_leaf());
        assert!(missing.children().is_empty());
        assert!(!missing.next(b'a').exists());
        assert!(!missing.search(b"a").exists());
        assert_eq!(missing.search_prefix(b"a"), 0);
    }

    #[test]
    fn test_next_at() {
        let trie = Trie::from_keys(["hat", "is", "it", "a"]);
        let root = trie.root();
        let range = root.children_range();

        let first = root.next_at(range.start);
        assert!(first.is_leaf()); // "a"

        assert!(!root.next_at(range.end).exists());
        assert!(!root.next_at(usize::MAX).exists());
    }

    #[test]
    fn test_search() {
        let trie = Trie::from_keys(["hat", "is", "it", "a"]);
        let root = trie.root();

        assert!(root.search(b"hat").is_leaf());
        assert!(root.search(b"is").is_leaf());
        assert!(!root.search(b"ha").is_leaf());
        assert!(!root.search(b"hats").exists());
        assert!(!root.search(b"").is_leaf()); // root itself
    }

    #[test]
    fn test_search_prefix() {
        let trie = Trie::from_keys(["hat", "is", "it", "a"]);
        let root = trie.root();

        assert_eq!(root.search_prefix(b"hat"), 3);
        assert_eq!(root.search_prefix(b"hatt"), 3);
        assert_eq!(root.search_prefix(b"ha"), 0);
        assert_eq!(root.search_prefix(b"iss"), 2);
        assert_eq!(root.search_prefix(b"ti"), 0);
        assert_eq!(root.search_prefix(b""), 0);
    }

    #[test]
    fn test_search_prefix_nested_keys() {
        let trie = Trie::from_keys(["a", "ab", "abc"]);
        let root = trie.root();

        assert_eq!(root.search_prefix(b"abcd"), 3);
        assert_eq!(root.search_prefix(b"abc"), 3);
        assert_eq!(root.search_prefix(b"ab"), 2);
        assert_eq!(root.search_prefix(b"abx"), 2);
        assert_eq!(root.search_prefix(b"a"), 1);
    }

    #[test]
    fn test_gap_in_nested_keys() {
        // "ab" is a path node but not an entry.
        let trie = Trie::from_keys(["abc", "a"]);
        let root = trie.root();

        assert_eq!(root.search_prefix(b"abcd"), 3);
        assert_eq!(root.search_prefix(b"ab"), 1);
        assert!(!root.search(b"ab").is_leaf());
        assert!(root.search(b"ab").exists());
    }

    #[test]
    fn test_keys_differing_in_last_byte() {
        let trie = Trie::from_keys(["abcx", "abcy"]);
        let root = trie.root();

        assert!(root.search(b"abcx").is_leaf());
        assert!(root.search(b"abcy").is_leaf());
        assert!(!root.search(b"abcz").exists());
        assert_eq!(trie.size(), 2);
    }

    #[test]
    fn test_empty_string_keys_ignored() {
        let trie = Trie::from_keys(["", "", "abc"]);
        let root = trie.root();

        assert_eq!(trie.size(), 1);
        assert!(root.search(b"abc").is_leaf());
        assert!(!root.search(b"").is_leaf());
        assert!(!root.is_leaf());
    }

    #[test]
    fn test_long_keys() {
        let long = vec![b'z'; 1500];
        let trie = Trie::from_keys([&long[..], &b"z"[..]]);
        let root = trie.root();

        assert!(root.search(&long).is_leaf());
        assert_eq!(root.search_prefix(&long), 1500);

        let mut longer = long.clone();
        longer.push(b'!');
        assert_eq!(root.search_prefix(&longer), 1500);
        assert_eq!(root.search_prefix(&long[..1499]), 1);
    }

    #[test]
    fn test_manual_wildcard_walk() {
        // Wildcard matching driven entirely from caller code: descend every
        // child where the pattern byte is '?', by byte otherwise.
        let trie = Trie::from_keys(["cat", "cot", "cut", "dog"]);

        fn matches(cur: Cursor<'_>, pattern: &[u8]) -> usize {
            let Some((&p, rest)) = pattern.split_first() else {
                return usize::from(cur.is_leaf());
            };
            if p == b'?' {
                cur.children_range()
                    .map(|i| matches(cur.next_at(i), rest))
                    .sum()
            } else {
                let next = cur.next(p);
                if next.exists() {
                    matches(next, rest)
                } else {
                    0
                }
            }
        }

        assert_eq!(matches(trie.root(), b"c?t"), 3);
        assert_eq!(matches(trie.root(), b"?og"), 1);
        assert_eq!(matches(trie.root(), b"???"), 4);
        assert_eq!(matches(trie.root(), b"c?g"), 0);
    }
}
