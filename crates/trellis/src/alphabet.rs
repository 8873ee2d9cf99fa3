//! Atomic actions and their letters
//!
//! Slot `0` is named `'a'`, slot `1` is `'b'`, and so on. Letters are
//! accepted in either case.

use crate::error::{Result, TrellisError};

/// Number of letters available for naming slots.
pub const MAX_LETTERS: usize = 26;

/// The letters naming the atomic actions of a trellis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    size: usize,
}

impl Alphabet {
    /// Create an alphabet of `size` letters starting at `'a'`.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_LETTERS {
            return Err(TrellisError::AlphabetSize(size));
        }
        Ok(Self { size })
    }

    /// Caller guarantees `1 <= size <= 26`.
    pub(crate) fn new_unchecked(size: usize) -> Self {
        Self { size }
    }

    /// Number of atomic actions.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Always false: an alphabet has at least one letter.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The last letter of the alphabet.
    pub fn last(&self) -> char {
        // size is in 1..=26, so this never falls back
        slot_to_char(self.size - 1).unwrap_or('z')
    }

    /// Iterate over the letters in slot order.
    pub fn letters(&self) -> impl Iterator<Item = char> {
        (b'a'..b'a' + self.size as u8).map(char::from)
    }

    /// Map a letter to its slot.
    ///
    /// # Errors
    ///
    /// `InvalidAction` if `c` is not a letter of this alphabet.
    pub fn char_to_slot(&self, c: char) -> Result<usize> {
        let lower = c.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            let slot = (lower as u8 - b'a') as usize;
            if slot < self.size {
                return Ok(slot);
            }
        }
        Err(self.invalid(c.to_string()))
    }

    /// Check if a single character names an atomic action.
    pub fn is_valid_action(&self, c: char) -> bool {
        self.char_to_slot(c).is_ok()
    }

    /// Check if every character of `word` names an atomic action.
    pub fn is_valid_word(&self, word: &str) -> bool {
        word.chars().all(|c| self.is_valid_action(c))
    }

    /// Convert every character of `word` to its slot.
    pub fn slots(&self, word: &str) -> Result<Vec<usize>> {
        word.chars()
            .map(|c| self.char_to_slot(c).map_err(|_| self.invalid(word.to_string())))
            .collect()
    }

    pub(crate) fn invalid(&self, action: String) -> TrellisError {
        TrellisError::InvalidAction {
            action,
            last: self.last(),
        }
    }
}

/// Map a slot to its letter: `0` to `'a'`, `1` to `'b'`, etc.
///
/// # Errors
///
/// `SlotOutOfRange` if `slot > 25`.
pub fn slot_to_char(slot: usize) -> Result<char> {
    if slot >= MAX_LETTERS {
        return Err(TrellisError::SlotOutOfRange(slot));
    }
    Ok(char::from(b'a' + slot as u8))
}
