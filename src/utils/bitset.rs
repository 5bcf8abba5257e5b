//! A fixed-capacity bit vector used as a per-call visited set.
//!
//! Traversals in this crate never mark the nodes themselves. Each call
//! allocates a [`BitSet`] sized to the graph's slot bound, records the slots
//! it has reached, and drops the set on return. Nothing a traversal learns
//! can outlive it.
//!
//! # Example
//!
//! ```rust,ignore
//! use rootgraph::utils::BitSet;
//!
//! let mut visited = BitSet::new(100);
//! assert!(visited.insert(7));
//! assert!(!visited.insert(7)); // already present
//! assert!(visited.contains(7));
//! assert_eq!(visited.count(), 1);
//! ```

use std::fmt;

/// A bit vector of fixed capacity.
///
/// Indices at or beyond the capacity are never members: [`insert`](Self::insert)
/// refuses them and [`contains`](Self::contains) reports `false`, so a caller
/// handed a foreign index degrades to "not visited" instead of panicking.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    /// The bits, stored as a vector of words.
    words: Vec<u64>,
    /// The number of addressable bits.
    len: usize,
}

impl BitSet {
    /// Creates a new empty bit set able to hold indices `0..capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(64)],
            len: capacity,
        }
    }

    /// Returns the capacity of this bit set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no bit is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Sets the bit at `index`.
    ///
    /// Returns `true` if the bit was newly set, `false` if it was already set
    /// or `index` is out of range.
    pub fn insert(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        let mask = 1u64 << (index % 64);
        match self.words.get_mut(index / 64) {
            Some(word) if *word & mask == 0 => {
                *word |= mask;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if the bit at `index` is set.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index < self.len
            && self
                .words
                .get(index / 64)
                .is_some_and(|word| word & (1u64 << (index % 64)) != 0)
    }

    /// Returns the number of bits set.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Clears all bits.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Returns an iterator over the indices of set bits, in ascending order.
    pub fn iter(&self) -> BitSetIter<'_> {
        BitSetIter {
            set: self,
            word_idx: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the set bits in a [`BitSet`].
pub struct BitSetIter<'a> {
    set: &'a BitSet,
    word_idx: usize,
    /// Remaining (not yet yielded) bits of the current word
    current: u64,
}

impl Iterator for BitSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.word_idx * 64 + bit);
            }
            self.word_idx += 1;
            self.current = *self.set.words.get(self.word_idx)?;
        }
    }
}
