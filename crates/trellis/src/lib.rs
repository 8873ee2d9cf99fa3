//! # Trellis
//!
//! A ball-drop trellis simulator and group-action calculator.
//!
//! A trellis is a grid of left/right switches. Dropping a ball into a
//! top slot walks it down the grid, flipping every switch it passes. Each
//! slot is an atomic action named by a letter (`a`, `b`, ...), and the
//! actions generate a finite group acting on switch configurations.
//!
//! ## Architecture
//!
//! - **Simulation**: [`Trellis`] holds the switches and steps the ball
//! - **Group algebra**: [`Word`]s, identity-derived [`RewriteRule`]s and
//!   reduction to normal forms
//! - **Orbits**: periods and orbits computed by running the simulation
//! - **Survey**: brute-force count of irreducibles and their periods
//!
//! ## Example
//!
//! ```
//! use trellis::{SimContext, Trellis};
//!
//! let mut trellis = Trellis::default();
//! let ctx = SimContext::new();
//!
//! assert_eq!(trellis.period_of("a", &ctx).unwrap(), 8);
//! assert_eq!(trellis.period_of("abc", &ctx).unwrap(), 2);
//! assert_eq!(trellis.reduce("aabbccc", true).unwrap().to_string(), "c");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod context;
pub mod error;
pub mod group;
pub mod machine;
pub mod survey;

// Re-export main types
pub use alphabet::{slot_to_char, Alphabet};
pub use context::SimContext;
pub use error::{Result, TrellisError};
pub use group::{all_actions, all_reduced_actions, AllActions, RewriteRule, RewriteSystem, Word};
pub use machine::{
    Configuration, Position, RenderStyle, Snapshot, SnapshotGuard, Switch, Trellis,
};
pub use survey::Survey;

/// Trellis version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
