//! Growable bit vector
//!
//! Used both as an entity's component-presence mask and as a family's
//! query predicate. Storage is a vector of `u64` words that only ever grows:
//! setting an index past the current capacity extends the storage, clearing
//! never shrinks it. Bits past the highest one ever set always read as zero.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAndAssign, BitOrAssign, BitXorAssign};

const WORD_BITS: usize = u64::BITS as usize;

#[inline]
fn word_index(index: usize) -> usize {
    index / WORD_BITS
}

#[inline]
fn bit_mask(index: usize) -> u64 {
    1u64 << (index % WORD_BITS)
}

/// A set of non-negative integers stored as a bit vector.
#[derive(Clone, Default)]
pub struct BitSet {
    words: Vec<u64>,
}

impl BitSet {
    /// Create an empty set with no storage.
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Create an empty set able to hold indices below `bits` without growing.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: vec![0; bits.div_ceil(WORD_BITS)],
        }
    }

    /// Whether `index` is a member. Indices past the capacity are never members.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.words
            .get(word_index(index))
            .is_some_and(|word| word & bit_mask(index) != 0)
    }

    /// Add (`true`) or remove (`false`) `index`, growing storage as needed.
    pub fn set(&mut self, index: usize, value: bool) {
        let word = word_index(index);
        self.ensure_word(word);
        if value {
            self.words[word] |= bit_mask(index);
        } else {
            self.words[word] &= !bit_mask(index);
        }
    }

    #[inline]
    pub fn insert(&mut self, index: usize) {
        self.set(index, true);
    }

    /// Remove `index`. Never grows storage.
    pub fn remove(&mut self, index: usize) {
        if let Some(word) = self.words.get_mut(word_index(index)) {
            *word &= !bit_mask(index);
        }
    }

    /// Toggle `index`, growing storage as needed.
    pub fn flip(&mut self, index: usize) {
        let word = word_index(index);
        self.ensure_word(word);
        self.words[word] ^= bit_mask(index);
    }

    /// Set `index` and report whether it was already set.
    pub fn get_and_set(&mut self, index: usize) -> bool {
        let word = word_index(index);
        self.ensure_word(word);
        let previous = self.words[word];
        self.words[word] |= bit_mask(index);
        previous & bit_mask(index) != 0
    }

    /// Clear `index` and report whether it was set before.
    pub fn get_and_clear(&mut self, index: usize) -> bool {
        match self.words.get_mut(word_index(index)) {
            Some(word) => {
                let was_set = *word & bit_mask(index) != 0;
                *word &= !bit_mask(index);
                was_set
            }
            None => false,
        }
    }

    /// Remove every member. Storage is kept.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Number of addressable bits in the current storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// One past the highest member, or 0 when empty.
    pub fn len(&self) -> usize {
        self.words
            .iter()
            .rposition(|&word| word != 0)
            .map(|word| {
                let top = WORD_BITS - self.words[word].leading_zeros() as usize;
                word * WORD_BITS + top
            })
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    /// Number of members.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// First member at or after `from`.
    pub fn next_set_bit(&self, from: usize) -> Option<usize> {
        let mut word = word_index(from);
        if word >= self.words.len() {
            return None;
        }

        let mut bits = self.words[word] & (!0u64 << (from % WORD_BITS));
        loop {
            if bits != 0 {
                return Some(word * WORD_BITS + bits.trailing_zeros() as usize);
            }
            word += 1;
            bits = *self.words.get(word)?;
        }
    }

    /// First non-member at or after `from`. Indices past the capacity are
    /// always clear, so this never fails.
    pub fn next_clear_bit(&self, from: usize) -> usize {
        let mut word = word_index(from);
        if word >= self.words.len() {
            return from;
        }

        let mut bits = !self.words[word] & (!0u64 << (from % WORD_BITS));
        loop {
            if bits != 0 {
                return word * WORD_BITS + bits.trailing_zeros() as usize;
            }
            word += 1;
            match self.words.get(word) {
                Some(next) => bits = !next,
                None => return self.capacity(),
            }
        }
    }

    /// Iterate over members in ascending order.
    pub fn ones(&self) -> Ones<'_> {
        Ones {
            set: self,
            next: 0,
        }
    }

    /// Keep only members also in `other`. Never grows.
    pub fn and(&mut self, other: &BitSet) {
        let common = self.words.len().min(other.words.len());
        for (word, theirs) in self.words[..common].iter_mut().zip(&other.words) {
            *word &= theirs;
        }
        self.words[common..].fill(0);
    }

    /// Remove every member of `other`. Never grows.
    pub fn and_not(&mut self, other: &BitSet) {
        for (word, theirs) in self.words.iter_mut().zip(&other.words) {
            *word &= !theirs;
        }
    }

    /// Add every member of `other`, growing to `other`'s storage size.
    pub fn or(&mut self, other: &BitSet) {
        self.combine(other, |a, b| a | b);
    }

    /// Symmetric difference with `other`, growing to `other`'s storage size.
    pub fn xor(&mut self, other: &BitSet) {
        self.combine(other, |a, b| a ^ b);
    }

    /// Whether the two sets share a member.
    pub fn intersects(&self, other: &BitSet) -> bool {
        self.words
            .iter()
            .zip(&other.words)
            .any(|(mine, theirs)| mine & theirs != 0)
    }

    /// Whether `other` is a subset of `self`. Members of `other` past this
    /// set's capacity are never contained.
    pub fn contains_all(&self, other: &BitSet) -> bool {
        if other.words.len() > self.words.len()
            && other.words[self.words.len()..].iter().any(|&word| word != 0)
        {
            return false;
        }

        self.words
            .iter()
            .zip(&other.words)
            .all(|(mine, theirs)| mine & theirs == *theirs)
    }

    /// Whether the two sets share a member, also answering `true` when
    /// `other` has any member past this set's capacity.
    pub fn contains_any(&self, other: &BitSet) -> bool {
        if other.words.len() > self.words.len()
            && other.words[self.words.len()..].iter().any(|&word| word != 0)
        {
            return true;
        }

        self.intersects(other)
    }

    fn combine(&mut self, other: &BitSet, op: impl Fn(u64, u64) -> u64) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for (word, theirs) in self.words.iter_mut().zip(&other.words) {
            *word = op(*word, *theirs);
        }
    }

    /// Exact-fit-plus-one growth: make `word` addressable.
    fn ensure_word(&mut self, word: usize) {
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
    }

    /// Words up to and including the last non-zero one.
    fn significant_words(&self) -> &[u64] {
        let end = self
            .words
            .iter()
            .rposition(|&word| word != 0)
            .map_or(0, |last| last + 1);
        &self.words[..end]
    }
}

impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        self.significant_words() == other.significant_words()
    }
}

impl Eq for BitSet {}

impl Hash for BitSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_words().hash(state);
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ones()).finish()
    }
}

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = BitSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<usize> for BitSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for index in iter {
            self.insert(index);
        }
    }
}

impl BitAndAssign<&BitSet> for BitSet {
    fn bitand_assign(&mut self, rhs: &BitSet) {
        self.and(rhs);
    }
}

impl BitOrAssign<&BitSet> for BitSet {
    fn bitor_assign(&mut self, rhs: &BitSet) {
        self.or(rhs);
    }
}

impl BitXorAssign<&BitSet> for BitSet {
    fn bitxor_assign(&mut self, rhs: &BitSet) {
        self.xor(rhs);
    }
}

/// Iterator over the members of a [`BitSet`].
pub struct Ones<'a> {
    set: &'a BitSet,
    next: usize,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let index = self.set.next_set_bit(self.next)?;
        self.next = index + 1;
        Some(index)
    }
}
