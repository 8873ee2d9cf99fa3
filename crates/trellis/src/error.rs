//! Error types for trellis simulation and group calculations

use thiserror::Error;

/// Main error type for trellis operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrellisError {
    /// The requested trellis shape cannot be built
    #[error("Invalid dimensions {height}x{width}: {reason}")]
    InvalidDimensions {
        /// Requested height
        height: usize,
        /// Requested width
        width: usize,
        /// Why the shape was rejected
        reason: String,
    },

    /// A character that is not an atomic action of this trellis
    #[error("Invalid action '{action}': expected a letter between 'a' and '{last}'")]
    InvalidAction {
        /// The offending input
        action: String,
        /// Last letter of the alphabet
        last: char,
    },

    /// A slot number with no letter
    #[error("Slot {0} is not between 0 and 25")]
    SlotOutOfRange(usize),

    /// An alphabet needs between 1 and 26 letters
    #[error("Alphabet size {0} is not between 1 and 26")]
    AlphabetSize(usize),

    /// `insert_ball` was called while a ball is still falling
    #[error("There's already a ball at {row},{col}")]
    BallInFlight {
        /// Row of the ball in flight
        row: usize,
        /// Column of the ball in flight
        col: usize,
    },

    /// Weight-preserving rewrites sent a word back to an earlier form
    #[error("Reduction of '{word}' does not terminate: rewrites cycle")]
    ReductionCycle {
        /// The word whose reduction revisited a state
        word: String,
    },

    /// The orbit did not close within the configured bound
    #[error("Orbit of '{word}' exceeds {max} elements")]
    OrbitTooLong {
        /// The word being iterated
        word: String,
        /// Configured bound
        max: usize,
    },

    /// Computation was interrupted through the context flag
    #[error("Interrupted")]
    Interrupted,
}

/// Result type alias for trellis operations
pub type Result<T> = std::result::Result<T, TrellisError>;
