//! Brute-force survey of a trellis' group elements
//!
//! Enumerates every word up to the period bound, reduces them, and
//! records the period of each distinct reduced form.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::context::SimContext;
use crate::error::Result;
use crate::machine::Trellis;

/// Irreducible count and period distribution for one trellis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Survey {
    /// Trellis height
    pub height: usize,
    /// Trellis width
    pub width: usize,
    /// Exponent bound used for enumeration
    pub period_bound: u32,
    /// Whether weight-preserving rewrites were excluded
    pub strictly_weight_reducing: bool,
    /// Number of distinct reduced words
    pub irreducible_count: usize,
    /// Period -> how many irreducibles have it
    pub periods: BTreeMap<usize, usize>,
}

impl Survey {
    /// Survey `trellis`. Its state is left as it was found.
    pub fn run(
        trellis: &mut Trellis,
        strictly_weight_reducing: bool,
        ctx: &SimContext,
    ) -> Result<Self> {
        log::info!(
            "surveying {}x{} trellis (period bound {})",
            trellis.height(),
            trellis.width(),
            trellis.period()
        );

        let irreducibles = trellis.all_reduced_actions(strictly_weight_reducing, ctx)?;

        let mut periods = BTreeMap::new();
        for (done, element) in irreducibles.iter().enumerate() {
            ctx.check()?;
            let period = trellis.period_of(&element.to_string(), ctx)?;
            *periods.entry(period).or_insert(0) += 1;
            if (done + 1) % 1024 == 0 {
                log::info!("computed {}/{} periods", done + 1, irreducibles.len());
            }
        }

        Ok(Self {
            height: trellis.height(),
            width: trellis.width(),
            period_bound: trellis.period(),
            strictly_weight_reducing,
            irreducible_count: irreducibles.len(),
            periods,
        })
    }
}

impl fmt::Display for Survey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Trellis {}x{} (period bound {}, {} rewrites)",
            self.height,
            self.width,
            self.period_bound,
            if self.strictly_weight_reducing {
                "strict"
            } else {
                "weight-preserving"
            }
        )?;
        writeln!(f, "Irreducible elements: {}", self.irreducible_count)?;
        writeln!(f, "{:>8}  {:>8}", "Period", "Count")?;
        for (period, count) in &self.periods {
            writeln!(f, "{:>8}  {:>8}", period, count)?;
        }
        Ok(())
    }
}
