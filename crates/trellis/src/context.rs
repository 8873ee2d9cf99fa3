//! Limits and cancellation for orbit and survey runs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{Result, TrellisError};

/// Shared settings for orbits, enumeration and surveys.
///
/// Orbits stop with `OrbitTooLong` once they pass `max_orbit_len`
/// words. A survey of a tall trellis enumerates `period^slots` words, so
/// another thread holding a clone can stop it through the shared flag.
#[derive(Debug, Clone)]
pub struct SimContext {
    /// Longest orbit `orbit` will build
    pub max_orbit_len: usize,

    /// Shared between clones; enumeration and orbit loops poll it
    pub interrupt: Arc<AtomicBool>,

    /// Print every frame of a drop and log finished orbits
    pub trace: bool,
}

impl Default for SimContext {
    fn default() -> Self {
        Self {
            max_orbit_len: 1 << 20,
            interrupt: Arc::new(AtomicBool::new(false)),
            trace: false,
        }
    }
}

impl SimContext {
    /// Orbits up to 2^20 words, no tracing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context whose orbits give up after `max_len` words.
    pub fn with_max_orbit_len(max_len: usize) -> Self {
        Self {
            max_orbit_len: max_len,
            ..Default::default()
        }
    }

    /// Context that prints each frame of a drop.
    pub fn traced() -> Self {
        Self {
            trace: true,
            ..Default::default()
        }
    }

    /// Whether someone asked the running survey to stop.
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Ask every holder of this flag to stop at its next check.
    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    /// Clear the flag so the next run starts fresh.
    pub fn reset_interrupt(&self) {
        self.interrupt.store(false, Ordering::Relaxed);
    }

    /// Fail with [`TrellisError::Interrupted`] if the flag is set.
    pub fn check(&self) -> Result<()> {
        if self.is_interrupted() {
            return Err(TrellisError::Interrupted);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_round_trip() {
        let ctx = SimContext::new();
        assert!(ctx.check().is_ok());

        let shared = ctx.clone();
        shared.interrupt();
        assert_eq!(ctx.check(), Err(TrellisError::Interrupted));

        ctx.reset_interrupt();
        assert!(!shared.is_interrupted());
    }

    #[test]
    fn test_constructors() {
        assert_eq!(SimContext::with_max_orbit_len(7).max_orbit_len, 7);
        assert!(SimContext::traced().trace);
        assert!(!SimContext::new().trace);
    }
}
