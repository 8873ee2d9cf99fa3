//! Words over the atomic actions, up to reordering

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::alphabet::{Alphabet, MAX_LETTERS};
use crate::error::{Result, TrellisError};

/// An element of the free commutative monoid over an alphabet.
///
/// Only the number of occurrences of each letter is kept, so `"abca"`
/// and `"aabc"` are the same word. Words render with their letters
/// sorted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    exponents: Vec<u64>,
}

impl Word {
    /// The empty word over `letters` letters.
    pub fn identity(letters: usize) -> Self {
        Self {
            exponents: vec![0; letters],
        }
    }

    /// Build a word from one exponent per letter.
    pub fn from_exponents(exponents: Vec<u64>) -> Result<Self> {
        if exponents.len() > MAX_LETTERS {
            return Err(TrellisError::AlphabetSize(exponents.len()));
        }
        Ok(Self { exponents })
    }

    /// Count the letters of `input`, case-insensitively.
    ///
    /// # Errors
    ///
    /// `InvalidAction` if any character is not in `alphabet`.
    pub fn parse(alphabet: &Alphabet, input: &str) -> Result<Self> {
        let mut word = Self::identity(alphabet.len());
        for slot in alphabet.slots(input)? {
            word.exponents[slot] += 1;
        }
        Ok(word)
    }

    /// Number of letters in the underlying alphabet.
    pub fn letters(&self) -> usize {
        self.exponents.len()
    }

    /// Exponent of the letter at `slot` (zero when out of range).
    pub fn get(&self, slot: usize) -> u64 {
        self.exponents.get(slot).copied().unwrap_or(0)
    }

    /// All exponents in slot order.
    pub fn exponents(&self) -> &[u64] {
        &self.exponents
    }

    /// Total number of atomic actions.
    pub fn weight(&self) -> u64 {
        self.exponents.iter().sum()
    }

    /// Check if this is the empty word.
    pub fn is_identity(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// This word repeated `times` times.
    pub fn repeat(&self, times: u64) -> Self {
        Self {
            exponents: self.exponents.iter().map(|e| e * times).collect(),
        }
    }

    /// This word followed by `other`.
    pub fn concat(&self, other: &Word) -> Self {
        let len = self.exponents.len().max(other.exponents.len());
        Self {
            exponents: (0..len).map(|i| self.get(i) + other.get(i)).collect(),
        }
    }

    /// Add signed `deltas` to the exponents.
    ///
    /// Returns `None` if any exponent would go negative, or if `deltas`
    /// is not one entry per letter.
    pub fn shifted(&self, deltas: &[i64]) -> Option<Self> {
        if deltas.len() != self.exponents.len() {
            return None;
        }
        let exponents = self
            .exponents
            .iter()
            .zip(deltas)
            .map(|(&e, &d)| {
                let shifted = e as i64 + d;
                (shifted >= 0).then_some(shifted as u64)
            })
            .collect::<Option<Vec<_>>>()?;
        Some(Self { exponents })
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (slot, &count) in self.exponents.iter().enumerate() {
            let letter = char::from(b'a' + slot as u8);
            for _ in 0..count {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// Shorter words first, then alphabetical. Words over different alphabets
// can render the same, so the letter count breaks the last tie.
impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight()
            .cmp(&other.weight())
            .then_with(|| self.to_string().cmp(&other.to_string()))
            .then_with(|| self.exponents.len().cmp(&other.exponents.len()))
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
