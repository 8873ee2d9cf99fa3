//! Group-action algebra over the atomic actions
//!
//! Words are counted rather than ordered, rewrite rules come from
//! identity elements, and normal forms are fixed points of the rules.

mod enumerate;
mod rewrite;
mod word;

pub use enumerate::{all_actions, all_reduced_actions, AllActions};
pub use rewrite::{RewriteRule, RewriteSystem};
pub use word::Word;
