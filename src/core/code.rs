//! Letter codes and position codes
//!
//! A letter code `(c, n)` is the fact "the word contains at least `n`
//! copies of `c`". A position code `(c, p)` is the fact "the word has `c`
//! at index `p`". Both are stored as per-letter bitmasks so set unions
//! are a handful of OR instructions.

use super::word::MAX_WORD_LEN;
use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Highest ordinal a [`CodeSet`] can hold
pub const MAX_ORDINAL: u8 = 16;

/// Index of a lowercase ASCII letter in `0..26`
#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Lowercase ASCII letter for an index in `0..26`
#[inline]
pub(crate) const fn index_letter(index: usize) -> u8 {
    b'a' + index as u8
}

/// "Contains at least `ordinal` occurrences of `letter`"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterCode {
    letter: u8,
    ordinal: u8,
}

impl LetterCode {
    /// Create a letter code, or `None` if the letter is not lowercase ASCII
    /// or the ordinal is outside `1..=MAX_ORDINAL`
    ///
    /// # Examples
    /// ```
    /// use longwordle_ranker::core::LetterCode;
    ///
    /// let code = LetterCode::new(b'b', 2).unwrap();
    /// assert_eq!(code.to_string(), "b2");
    /// assert!(LetterCode::new(b'b', 0).is_none());
    /// ```
    #[must_use]
    pub const fn new(letter: u8, ordinal: u8) -> Option<Self> {
        if letter.is_ascii_lowercase() && ordinal >= 1 && ordinal <= MAX_ORDINAL {
            Some(Self { letter, ordinal })
        } else {
            None
        }
    }

    #[inline]
    pub(crate) const fn from_parts(letter: u8, ordinal: u8) -> Self {
        debug_assert!(letter.is_ascii_lowercase() && ordinal >= 1 && ordinal <= MAX_ORDINAL);
        Self { letter, ordinal }
    }

    #[inline]
    #[must_use]
    pub const fn letter(self) -> u8 {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self.ordinal
    }
}

impl fmt::Display for LetterCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter as char, self.ordinal)
    }
}

/// "Has `letter` at 0-based `position`"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PositionCode {
    letter: u8,
    position: u8,
}

impl PositionCode {
    /// Create a position code, or `None` if the letter is not lowercase
    /// ASCII or the position is at or past [`MAX_WORD_LEN`]
    #[must_use]
    pub const fn new(letter: u8, position: usize) -> Option<Self> {
        if letter.is_ascii_lowercase() && position < MAX_WORD_LEN {
            Some(Self {
                letter,
                position: position as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn letter(self) -> u8 {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn position(self) -> usize {
        self.position as usize
    }
}

impl fmt::Display for PositionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.letter as char, self.position)
    }
}

/// A set of letter codes, one ordinal bitmask per letter
///
/// Bit `n - 1` of `masks[c]` is set when code `(c, n)` is in the set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CodeSet {
    masks: [u16; ALPHABET_SIZE],
}

impl CodeSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            masks: [0; ALPHABET_SIZE],
        }
    }

    /// Add a code, returning whether it was newly inserted
    pub fn insert(&mut self, code: LetterCode) -> bool {
        let mask = &mut self.masks[letter_index(code.letter)];
        let bit = 1u16 << (code.ordinal - 1);
        let fresh = *mask & bit == 0;
        *mask |= bit;
        fresh
    }

    #[must_use]
    pub fn contains(&self, code: LetterCode) -> bool {
        self.masks[letter_index(code.letter)] & (1u16 << (code.ordinal - 1)) != 0
    }

    /// Add every code of `other`
    pub fn union_with(&mut self, other: &Self) {
        for (mine, theirs) in self.masks.iter_mut().zip(&other.masks) {
            *mine |= theirs;
        }
    }

    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut merged = *self;
        merged.union_with(other);
        merged
    }

    /// Codes of `self` that are not in `other`
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut remaining = *self;
        for (mine, theirs) in remaining.masks.iter_mut().zip(&other.masks) {
            *mine &= !theirs;
        }
        remaining
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.masks.iter().map(|m| m.count_ones() as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.masks.iter().all(|&m| m == 0)
    }

    /// Raw ordinal bitmask for one letter index
    #[inline]
    pub(crate) const fn mask(&self, index: usize) -> u16 {
        self.masks[index]
    }

    /// Iterate in letter order, then ordinal order
    pub fn iter(&self) -> impl Iterator<Item = LetterCode> + '_ {
        self.masks.iter().enumerate().flat_map(|(index, &mask)| {
            set_bits(mask).map(move |bit| LetterCode::from_parts(index_letter(index), bit + 1))
        })
    }
}

impl FromIterator<LetterCode> for CodeSet {
    fn from_iter<I: IntoIterator<Item = LetterCode>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<LetterCode> for CodeSet {
    fn extend<I: IntoIterator<Item = LetterCode>>(&mut self, iter: I) {
        for code in iter {
            self.insert(code);
        }
    }
}

/// A set of position codes, one position bitmask per letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PositionSet {
    masks: [u16; ALPHABET_SIZE],
}

impl PositionSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            masks: [0; ALPHABET_SIZE],
        }
    }

    pub fn insert(&mut self, code: PositionCode) -> bool {
        let mask = &mut self.masks[letter_index(code.letter)];
        let bit = 1u16 << code.position;
        let fresh = *mask & bit == 0;
        *mask |= bit;
        fresh
    }

    #[inline]
    pub(crate) fn insert_parts(&mut self, letter: u8, position: usize) {
        debug_assert!(position < MAX_WORD_LEN);
        self.masks[letter_index(letter)] |= 1u16 << position;
    }

    #[must_use]
    pub fn contains(&self, code: PositionCode) -> bool {
        self.masks[letter_index(code.letter)] & (1u16 << code.position) != 0
    }

    pub fn union_with(&mut self, other: &Self) {
        for (mine, theirs) in self.masks.iter_mut().zip(&other.masks) {
            *mine |= theirs;
        }
    }

    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut merged = *self;
        merged.union_with(other);
        merged
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.masks.iter().map(|m| m.count_ones() as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.masks.iter().all(|&m| m == 0)
    }

    #[inline]
    pub(crate) const fn mask(&self, index: usize) -> u16 {
        self.masks[index]
    }

    /// Iterate in letter order, then position order
    pub fn iter(&self) -> impl Iterator<Item = PositionCode> + '_ {
        self.masks.iter().enumerate().flat_map(|(index, &mask)| {
            set_bits(mask).map(move |bit| PositionCode {
                letter: index_letter(index),
                position: bit,
            })
        })
    }
}

/// Indices of the set bits of `mask`, lowest first
pub(crate) fn set_bits(mask: u16) -> impl Iterator<Item = u8> {
    (0..16u8).filter(move |bit| mask & (1 << bit) != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(letter: u8, ordinal: u8) -> LetterCode {
        LetterCode::new(letter, ordinal).unwrap()
    }

    #[test]
    fn letter_code_validation() {
        assert!(LetterCode::new(b'a', 1).is_some());
        assert!(LetterCode::new(b'z', MAX_ORDINAL).is_some());
        assert!(LetterCode::new(b'a', 0).is_none());
        assert!(LetterCode::new(b'a', MAX_ORDINAL + 1).is_none());
        assert!(LetterCode::new(b'A', 1).is_none());
    }

    #[test]
    fn position_code_validation() {
        assert!(PositionCode::new(b'a', 0).is_some());
        assert!(PositionCode::new(b'a', MAX_WORD_LEN - 1).is_some());
        assert!(PositionCode::new(b'a', MAX_WORD_LEN).is_none());
    }

    #[test]
    fn code_display() {
        assert_eq!(code(b'q', 3).to_string(), "q3");
        assert_eq!(PositionCode::new(b'q', 7).unwrap().to_string(), "q@7");
    }

    #[test]
    fn code_set_insert_and_contains() {
        let mut set = CodeSet::new();
        assert!(set.is_empty());
        assert!(set.insert(code(b'b', 2)));
        assert!(!set.insert(code(b'b', 2)));
        assert!(set.contains(code(b'b', 2)));
        assert!(!set.contains(code(b'b', 1)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn code_set_union_dedups() {
        let left: CodeSet = [code(b'a', 1), code(b'b', 1)].into_iter().collect();
        let right: CodeSet = [code(b'b', 1), code(b'b', 2)].into_iter().collect();

        let merged = left.union(&right);
        let codes: Vec<String> = merged.iter().map(|c| c.to_string()).collect();
        assert_eq!(codes, ["a1", "b1", "b2"]);
    }

    #[test]
    fn code_set_difference() {
        let all: CodeSet = [code(b'a', 1), code(b'b', 1), code(b'b', 2)]
            .into_iter()
            .collect();
        let known: CodeSet = [code(b'b', 1)].into_iter().collect();

        let rest: Vec<String> = all.difference(&known).iter().map(|c| c.to_string()).collect();
        assert_eq!(rest, ["a1", "b2"]);
    }

    #[test]
    fn position_set_union() {
        let mut left = PositionSet::new();
        left.insert(PositionCode::new(b'e', 1).unwrap());
        let mut right = PositionSet::new();
        right.insert(PositionCode::new(b'e', 1).unwrap());
        right.insert(PositionCode::new(b'e', 4).unwrap());

        let merged = left.union(&right);
        assert_eq!(merged.len(), 2);
        assert!(merged.contains(PositionCode::new(b'e', 4).unwrap()));
    }

    #[test]
    fn set_bits_lists_indices() {
        let bits: Vec<u8> = set_bits(0b1010_0001).collect();
        assert_eq!(bits, [0, 5, 7]);
    }
}
