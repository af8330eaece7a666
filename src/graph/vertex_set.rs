//! `VertexSet`: an identity-keyed set of vertex handles.
//!
//! Handles are dense arena indices, so membership is stored as one bit per
//! vertex in a `Vec<u64>`. The set never looks at vertex values: two vertices
//! carrying equal values occupy two different bits.

use core::fmt;
use core::marker::PhantomData;

use crate::graph::vertex::{Brand, VertexId};

const WORD_BITS: usize = u64::BITS as usize;

/// A word-packed set of `VertexId`s belonging to one graph.
pub struct VertexSet<'brand> {
    words: Vec<u64>,
    /// Number of set bits.
    len: usize,
    _brand: Brand<'brand>,
}

impl<'brand> VertexSet<'brand> {
    /// Creates a new empty set.
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            len: 0,
            _brand: PhantomData,
        }
    }

    /// Creates an empty set sized for a graph of `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            words: vec![0; vertices.div_ceil(WORD_BITS)],
            len: 0,
            _brand: PhantomData,
        }
    }

    /// Returns the number of vertices in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every vertex, keeping the allocation.
    pub fn clear(&mut self) {
        self.words.fill(0);
        self.len = 0;
    }

    /// Adds a vertex. Returns `true` if it was not already present.
    pub fn insert(&mut self, id: VertexId<'brand>) -> bool {
        let (word_idx, mask) = locate(id);

        if word_idx >= self.words.len() {
            self.words.resize(word_idx + 1, 0);
        }

        let word = &mut self.words[word_idx];
        if *word & mask == 0 {
            *word |= mask;
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Removes a vertex. Returns `true` if it was present.
    pub fn remove(&mut self, id: VertexId<'brand>) -> bool {
        let (word_idx, mask) = locate(id);
        match self.words.get_mut(word_idx) {
            Some(word) if *word & mask != 0 => {
                *word &= !mask;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Returns `true` if the set contains the vertex.
    #[inline]
    pub fn contains(&self, id: VertexId<'brand>) -> bool {
        let (word_idx, mask) = locate(id);
        self.words
            .get(word_idx)
            .is_some_and(|word| word & mask != 0)
    }

    /// Returns `true` if every vertex of `self` is also in `other`.
    pub fn is_subset(&self, other: &VertexSet<'brand>) -> bool {
        if self.len > other.len {
            return false;
        }
        self.words.iter().enumerate().all(|(idx, &word)| {
            let theirs = other.words.get(idx).copied().unwrap_or(0);
            word & !theirs == 0
        })
    }

    /// Iterates over the vertices in ascending index order.
    pub fn iter(&self) -> Iter<'_, 'brand> {
        Iter {
            words: &self.words,
            word_idx: 0,
            current: self.words.first().copied().unwrap_or(0),
            remaining: self.len,
            _brand: PhantomData,
        }
    }
}

#[inline(always)]
fn locate(id: VertexId<'_>) -> (usize, u64) {
    let bit = id.index();
    (bit / WORD_BITS, 1u64 << (bit % WORD_BITS))
}

impl Default for VertexSet<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for VertexSet<'_> {
    fn eq(&self, other: &Self) -> bool {
        // Trailing zero words do not matter, so compare through the subset test.
        self.len == other.len && self.is_subset(other)
    }
}

impl Eq for VertexSet<'_> {}

impl fmt::Debug for VertexSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'brand> Extend<VertexId<'brand>> for VertexSet<'brand> {
    fn extend<I: IntoIterator<Item = VertexId<'brand>>>(&mut self, iter: I) {
        for id in iter {
            self.insert(id);
        }
    }
}

impl<'brand> FromIterator<VertexId<'brand>> for VertexSet<'brand> {
    fn from_iter<I: IntoIterator<Item = VertexId<'brand>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, 'brand> IntoIterator for &'a VertexSet<'brand> {
    type Item = VertexId<'brand>;
    type IntoIter = Iter<'a, 'brand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`VertexSet`], in ascending index order.
pub struct Iter<'a, 'brand> {
    words: &'a [u64],
    word_idx: usize,
    current: u64,
    remaining: usize,
    _brand: Brand<'brand>,
}

impl<'brand> Iterator for Iter<'_, 'brand> {
    type Item = VertexId<'brand>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            self.word_idx += 1;
            self.current = *self.words.get(self.word_idx)?;
        }
        let bit = self.current.trailing_zeros() as usize;
        // Clear the lowest set bit.
        self.current &= self.current - 1;
        self.remaining -= 1;
        Some(VertexId::from_index(self.word_idx * WORD_BITS + bit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_, '_> {}
