//! RAII guard restoring trellis state on drop

use super::{Configuration, Position, Trellis};
use crate::error::{Result, TrellisError};

/// Everything a computation may disturb: switches, ball, and ball path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    height: usize,
    width: usize,
    grid: Configuration,
    ball: Option<Position>,
    ball_path: Vec<Position>,
}

impl Trellis {
    /// Capture the current switches, ball, and ball path.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            height: self.height,
            width: self.width,
            grid: self.grid.clone(),
            ball: self.ball,
            ball_path: self.ball_path.clone(),
        }
    }

    /// Put back a state captured by [`Trellis::snapshot`].
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if the snapshot came from a trellis of another
    /// size. The trellis is left unchanged.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<()> {
        if (snapshot.height, snapshot.width) != (self.height, self.width) {
            return Err(TrellisError::InvalidDimensions {
                height: snapshot.height,
                width: snapshot.width,
                reason: format!(
                    "snapshot does not fit a {}x{} trellis",
                    self.height, self.width
                ),
            });
        }
        self.grid = snapshot.grid;
        self.ball = snapshot.ball;
        self.ball_path = snapshot.ball_path;
        Ok(())
    }

    /// Create a guard that snapshots now and restores on drop.
    pub fn snapshot_guard(&mut self) -> SnapshotGuard<'_> {
        let saved = Some(self.snapshot());
        SnapshotGuard {
            trellis: self,
            saved,
        }
    }
}

/// RAII guard that puts the trellis back the way it was when dropped.
///
/// # Example
///
/// ```
/// use trellis::Trellis;
///
/// let mut trellis = Trellis::default();
///
/// {
///     let mut guard = trellis.snapshot_guard();
///     guard.drop_balls("abc").unwrap();
///     assert!(!guard.is_identity());
/// }
/// // guard dropped, switches restored
/// assert!(trellis.is_identity());
/// ```
pub struct SnapshotGuard<'a> {
    trellis: &'a mut Trellis,
    saved: Option<Snapshot>,
}

impl<'a> Drop for SnapshotGuard<'a> {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            // Only fails if the guarded trellis was replaced wholesale.
            if let Err(e) = self.trellis.restore(saved) {
                log::warn!("snapshot not restored: {}", e);
            }
        }
    }
}

impl<'a> std::ops::Deref for SnapshotGuard<'a> {
    type Target = Trellis;

    fn deref(&self) -> &Self::Target {
        self.trellis
    }
}

impl<'a> std::ops::DerefMut for SnapshotGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.trellis
    }
}
