//! Rewrite rules derived from identity elements
//!
//! Every identity of the form `(a b c ...)^n` with even `n` gives a
//! family of rules: any letter's exponent may be negated modulo the
//! period, since `r^-k == r^(period - k)`. Choosing which letters to
//! negate is a bit pattern, so there are `2^letters` candidates per `n`.
//! Candidates are oriented to reduce weight and collected in order.

use std::collections::HashSet;
use std::fmt;

use indexmap::IndexSet;

use super::Word;
use crate::error::{Result, TrellisError};

/// A single rewrite: signed exponent deltas, one per letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RewriteRule {
    deltas: Vec<i64>,
}

impl RewriteRule {
    /// Create a rule from its deltas.
    pub fn new(deltas: Vec<i64>) -> Self {
        Self { deltas }
    }

    /// Exponent deltas in slot order.
    pub fn deltas(&self) -> &[i64] {
        &self.deltas
    }

    /// Net change in word length when the rule fires.
    pub fn weight(&self) -> i64 {
        self.deltas.iter().sum()
    }

    /// The rule with every delta negated.
    pub fn inverse(&self) -> Self {
        Self {
            deltas: self.deltas.iter().map(|d| -d).collect(),
        }
    }

    /// Fire the rule on `word` if no exponent would go negative.
    ///
    /// A rule over a different number of letters never fires.
    pub fn apply(&self, word: &Word) -> Option<Word> {
        word.shifted(&self.deltas)
    }
}

impl fmt::Display for RewriteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (slot, delta) in self.deltas.iter().enumerate() {
            if slot > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}^{}", char::from(b'a' + slot as u8), delta)?;
        }
        Ok(())
    }
}

/// An ordered list of rewrite rules for one trellis.
#[derive(Debug, Clone)]
pub struct RewriteSystem {
    letters: usize,
    period: u32,
    strictly_weight_reducing: bool,
    rules: Vec<RewriteRule>,
}

impl RewriteSystem {
    /// Generate the rules for `letters` atomic actions of period `period`.
    ///
    /// With `strictly_weight_reducing` false, weight-preserving rules are
    /// kept too, but never together with their own inverse.
    pub fn generate(letters: usize, period: u32, strictly_weight_reducing: bool) -> Self {
        let period = i64::from(period);
        let mut rules: IndexSet<RewriteRule> = IndexSet::new();
        let mut seen_reversible: HashSet<RewriteRule> = HashSet::new();

        for n in (2..=period / 2).step_by(2) {
            for candidate in sign_patterns(letters, -n, period - n) {
                let weight = candidate.weight();
                let oriented = if weight < 0 {
                    Some(candidate)
                } else if weight > 0 {
                    Some(candidate.inverse())
                } else if !strictly_weight_reducing && !seen_reversible.contains(&candidate) {
                    seen_reversible.insert(candidate.inverse());
                    Some(candidate)
                } else {
                    None
                };
                if let Some(rule) = oriented {
                    rules.insert(rule);
                }
            }
        }

        log::debug!(
            "generated {} rewrite rules for {} letters, period {}",
            rules.len(),
            letters,
            period
        );

        Self {
            letters,
            period: period as u32,
            strictly_weight_reducing,
            rules: rules.into_iter().collect(),
        }
    }

    /// The rules in application order.
    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Number of letters the rules act on.
    pub fn letters(&self) -> usize {
        self.letters
    }

    /// Period bound the rules were derived from.
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Whether weight-preserving rules were excluded.
    pub fn is_strict(&self) -> bool {
        self.strictly_weight_reducing
    }

    /// Run every applicable rule once, in order.
    fn reduce_pass(&self, word: &Word) -> Word {
        let mut current = word.clone();
        for rule in &self.rules {
            if let Some(next) = rule.apply(&current) {
                current = next;
            }
        }
        current
    }

    /// Rewrite `word` until no rule changes it.
    ///
    /// # Errors
    ///
    /// `ReductionCycle` if weight-preserving rules bring the word back
    /// to a form it already had.
    pub fn reduce(&self, word: &Word) -> Result<Word> {
        let mut seen: HashSet<Word> = HashSet::new();
        let mut current = word.clone();
        loop {
            let next = self.reduce_pass(&current);
            if next == current {
                return Ok(current);
            }
            if !seen.insert(current) {
                return Err(TrellisError::ReductionCycle {
                    word: word.to_string(),
                });
            }
            current = next;
        }
    }
}

/// All vectors in `{low, high}^len`, first coordinate varying slowest.
fn sign_patterns(len: usize, low: i64, high: i64) -> impl Iterator<Item = RewriteRule> {
    (0..1u64 << len).map(move |bits| {
        RewriteRule::new(
            (0..len)
                .map(|i| {
                    if (bits >> (len - 1 - i)) & 1 == 0 {
                        low
                    } else {
                        high
                    }
                })
                .collect(),
        )
    })
}
