//! Enumeration of words up to the period bound

use std::collections::BTreeSet;

use super::{RewriteSystem, Word};
use crate::context::SimContext;
use crate::error::Result;

/// Iterator over every word with all exponents below a bound.
///
/// Words come out in product order: the first letter's exponent varies
/// slowest. There are `period^letters` of them.
#[derive(Debug, Clone)]
pub struct AllActions {
    period: u64,
    next: Option<Vec<u64>>,
}

impl AllActions {
    /// Enumerate words over `letters` letters with exponents in `0..period`.
    pub fn new(letters: usize, period: u32) -> Self {
        let next = (period > 0).then(|| vec![0; letters]);
        Self {
            period: u64::from(period),
            next,
        }
    }
}

impl Iterator for AllActions {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        let current = self.next.take()?;

        // Odometer increment, last letter fastest
        let mut following = current.clone();
        let mut carried = true;
        for digit in following.iter_mut().rev() {
            *digit += 1;
            if *digit < self.period {
                carried = false;
                break;
            }
            *digit = 0;
        }
        if !carried {
            self.next = Some(following);
        }

        Word::from_exponents(current).ok()
    }
}

/// All words over `letters` letters, up to `period` of each.
pub fn all_actions(letters: usize, period: u32) -> AllActions {
    AllActions::new(letters, period)
}

/// Reduce every word of [`all_actions`] and collect the distinct results.
///
/// # Errors
///
/// `Interrupted` if the context is interrupted mid-way, or any error
/// from [`RewriteSystem::reduce`].
pub fn all_reduced_actions(system: &RewriteSystem, ctx: &SimContext) -> Result<BTreeSet<Word>> {
    let mut reduced = BTreeSet::new();
    for (index, action) in all_actions(system.letters(), system.period()).enumerate() {
        if index % 4096 == 0 {
            ctx.check()?;
            log::trace!("reduced {} actions so far", index);
        }
        reduced.insert(system.reduce(&action)?);
    }
    log::info!("found {} irreducible elements", reduced.len());
    Ok(reduced)
}
