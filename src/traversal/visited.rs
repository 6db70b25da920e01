use bitvec::prelude::*;
use std::fmt;

/// Fixed-size set of row-major pixel indices seen during one traversal
///
/// Uses 0-based indices `y * width + x`. An index is never inserted twice:
/// a repeated insert reports the duplicate and leaves the set unchanged.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    bits: BitVec,
    len: usize,
}

impl VisitedSet {
    /// Create an empty set able to hold `capacity` indices
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
            len: 0,
        }
    }

    /// Insert an index
    ///
    /// Returns `false` if the index was already present or lies outside
    /// the capacity
    pub fn insert(&mut self, index: usize) -> bool {
        if index >= self.bits.len() || self.contains(index) {
            return false;
        }
        self.bits.set(index, true);
        self.len += 1;
        true
    }

    /// Test index membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Number of indices inserted
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Test if no index has been inserted
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of indices the set can hold
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Test if every index up to the capacity has been inserted
    pub fn is_complete(&self) -> bool {
        self.len == self.bits.len()
    }

    /// Indices never inserted, in ascending order
    pub fn missing(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_zeros()
    }
}

impl fmt::Display for VisitedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VisitedSet({}/{} pixels)", self.len, self.capacity())
    }
}
