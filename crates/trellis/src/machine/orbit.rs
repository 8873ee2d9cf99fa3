//! Orbit and period calculations driven by the simulation
//!
//! The trellis action is injective and there are finitely many
//! configurations, so repeatedly applying any word eventually returns to
//! where it started. The orbit is the list of (reduced) words visited on
//! the way.

use std::collections::BTreeSet;

use super::Trellis;
use crate::context::SimContext;
use crate::error::{Result, TrellisError};
use crate::group::{self, AllActions, RewriteSystem, Word};

impl Trellis {
    /// Every word with fewer than `period` copies of each letter.
    pub fn all_actions(&self) -> AllActions {
        group::all_actions(self.cols, self.period)
    }

    /// Rewrite rules for this trellis.
    pub fn rewrite_system(&self, strictly_weight_reducing: bool) -> RewriteSystem {
        RewriteSystem::generate(self.cols, self.period, strictly_weight_reducing)
    }

    /// Reduce `word` with this trellis' rewrite rules.
    pub fn reduce(&self, word: &str, strictly_weight_reducing: bool) -> Result<Word> {
        let word = Word::parse(&self.alphabet, word)?;
        self.rewrite_system(strictly_weight_reducing).reduce(&word)
    }

    /// The distinct reduced forms of [`Trellis::all_actions`].
    pub fn all_reduced_actions(
        &self,
        strictly_weight_reducing: bool,
        ctx: &SimContext,
    ) -> Result<BTreeSet<Word>> {
        group::all_reduced_actions(&self.rewrite_system(strictly_weight_reducing), ctx)
    }

    /// The orbit of `word` acting on the configuration reached by `start`.
    ///
    /// Starting from all switches left, `start` is dropped once. Then
    /// `word` is dropped repeatedly until the switches return to that
    /// configuration. Element `k` of the result is `start word^k`, reduced.
    /// The trellis is left exactly as it was found.
    ///
    /// # Errors
    ///
    /// - `InvalidAction` if either string has letters outside the alphabet
    /// - `OrbitTooLong` if the orbit exceeds `ctx.max_orbit_len`
    /// - `Interrupted` if the context is interrupted
    pub fn orbit(&mut self, word: &str, start: &str, ctx: &SimContext) -> Result<Vec<Word>> {
        let word_slots = self.alphabet.slots(word)?;
        let start_slots = self.alphabet.slots(start)?;
        let generator = Word::parse(&self.alphabet, word)?;
        let base = Word::parse(&self.alphabet, start)?;
        let system = self.rewrite_system(true);

        let mut guard = self.snapshot_guard();
        guard.reset();
        guard.remove_ball();
        guard.drop_slots(&start_slots)?;
        let initial = guard.configuration();

        let mut orbit = Vec::new();
        let mut count = 0u64;
        loop {
            ctx.check()?;
            if orbit.len() >= ctx.max_orbit_len {
                return Err(TrellisError::OrbitTooLong {
                    word: word.to_string(),
                    max: ctx.max_orbit_len,
                });
            }
            orbit.push(system.reduce(&base.concat(&generator.repeat(count)))?);
            guard.drop_slots(&word_slots)?;
            count += 1;
            if guard.grid == initial {
                break;
            }
        }

        if ctx.trace {
            let rendered: Vec<String> = orbit.iter().map(Word::to_string).collect();
            log::info!("orbit of '{}' from '{}': {:?}", word, start, rendered);
        }
        Ok(orbit)
    }

    /// Number of times `word` must be applied to the identity
    /// configuration to get back to it.
    pub fn period_of(&mut self, word: &str, ctx: &SimContext) -> Result<usize> {
        Ok(self.orbit(word, "", ctx)?.len())
    }
}
