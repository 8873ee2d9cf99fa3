//! The trellis machine: switches, a falling ball, and the basic action
//!
//! A trellis of height `h` and width `w` has `2h + 1` rows. Even rows
//! hold `w + 1` switches and odd rows hold `w`, drawn between them:
//!
//! ```text
//! o   o   o
//!   o   o
//! o   o   o
//! ```
//!
//! A ball dropped into top slot `s` visits switches on its way down.
//! Each switch it leaves is flipped. The ball exits after visiting a
//! switch on the last row.

mod display;
mod guard;
mod orbit;

pub use display::RenderStyle;
pub use guard::{Snapshot, SnapshotGuard};

use crate::alphabet::Alphabet;
use crate::error::{Result, TrellisError};

/// A `(row, column)` position in the grid.
pub type Position = (usize, usize);

/// The state of every switch, row by row.
pub type Configuration = Vec<Vec<Switch>>;

/// Which way a switch sends the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Switch {
    /// Initial state, drawn as `o`
    Left,
    /// Drawn as `x`
    Right,
}

impl Switch {
    /// The opposite state.
    pub fn flipped(self) -> Self {
        match self {
            Switch::Left => Switch::Right,
            Switch::Right => Switch::Left,
        }
    }

    /// Character used when drawing the trellis.
    pub fn symbol(self) -> char {
        match self {
            Switch::Left => 'o',
            Switch::Right => 'x',
        }
    }
}

/// A trellis and the ball currently falling through it.
#[derive(Clone, PartialEq, Eq)]
pub struct Trellis {
    height: usize,
    width: usize,
    rows: usize,
    cols: usize,
    period: u32,
    alphabet: Alphabet,
    grid: Configuration,
    ball: Option<Position>,
    ball_path: Vec<Position>,
}

impl Default for Trellis {
    /// The 1x2 trellis.
    fn default() -> Self {
        Self::build(1, 2, 3, 3, 8)
    }
}

impl Trellis {
    /// Create a `height` x `width` trellis with every switch pointing left.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if the width is zero, there are more slots
    /// than letters, or the period bound `2^rows` overflows.
    pub fn new(height: usize, width: usize) -> Result<Self> {
        let invalid = |reason: &str| TrellisError::InvalidDimensions {
            height,
            width,
            reason: reason.to_string(),
        };

        if width == 0 {
            return Err(invalid("width must be at least 1"));
        }
        let cols = width + 1;
        if cols > crate::alphabet::MAX_LETTERS {
            return Err(invalid("at most 26 slots can be named"));
        }
        let rows = height
            .checked_mul(2)
            .and_then(|r| r.checked_add(1))
            .ok_or_else(|| invalid("too many rows"))?;
        let period = u32::try_from(rows)
            .ok()
            .and_then(|r| 2u32.checked_pow(r))
            .ok_or_else(|| invalid("period bound 2^rows does not fit in 32 bits"))?;

        Ok(Self::build(height, width, rows, cols, period))
    }

    fn build(height: usize, width: usize, rows: usize, cols: usize, period: u32) -> Self {
        Self {
            height,
            width,
            rows,
            cols,
            period,
            alphabet: Alphabet::new_unchecked(cols),
            grid: fresh_grid(rows, cols),
            ball: None,
            ball_path: Vec::new(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Accessors
    // ═══════════════════════════════════════════════════════════════════

    /// Height as given at construction.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Width as given at construction.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of switch rows, `2 * height + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of switches on even rows, `width + 1`. Also the slot count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Upper bound on the order of any atomic action, `2^rows`.
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Letters naming the top slots.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Current ball position, if a ball is falling.
    pub fn ball(&self) -> Option<Position> {
        self.ball
    }

    /// Positions visited by the current or most recent ball.
    pub fn ball_path(&self) -> &[Position] {
        &self.ball_path
    }

    /// State of one switch, or `None` off the grid.
    pub fn state(&self, row: usize, col: usize) -> Option<Switch> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Copy of every switch state.
    pub fn configuration(&self) -> Configuration {
        self.grid.clone()
    }

    /// Check if every switch points left.
    pub fn is_identity(&self) -> bool {
        self.grid.iter().flatten().all(|&s| s == Switch::Left)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Mutation
    // ═══════════════════════════════════════════════════════════════════

    /// Toggle the switch at `(row, col)`. Positions off the grid are ignored.
    pub fn flip(&mut self, row: usize, col: usize) {
        if let Some(switch) = self.grid.get_mut(row).and_then(|r| r.get_mut(col)) {
            *switch = switch.flipped();
        }
    }

    /// Point every switch left and forget the ball path.
    ///
    /// A ball in flight stays where it is.
    pub fn reset(&mut self) {
        self.grid = fresh_grid(self.rows, self.cols);
        self.ball_path.clear();
    }

    /// Take the ball out of the machine without moving any switch.
    pub fn remove_ball(&mut self) {
        self.ball = None;
    }

    /// Put a ball at the top of `slot`.
    ///
    /// # Errors
    ///
    /// `BallInFlight` if a ball is already falling, `InvalidAction` if
    /// the slot does not exist.
    pub fn insert_ball(&mut self, slot: usize) -> Result<()> {
        if let Some((row, col)) = self.ball {
            return Err(TrellisError::BallInFlight { row, col });
        }
        if slot >= self.cols {
            return Err(self.alphabet.invalid(slot.to_string()));
        }
        self.ball = Some((0, slot));
        self.ball_path.clear();
        Ok(())
    }

    /// The basic action: move the ball one switch and flip the switch it left.
    ///
    /// Returns `false` when there is no ball to move.
    pub fn step(&mut self) -> bool {
        let Some((row, col)) = self.ball else {
            return false;
        };
        self.ball_path.push((row, col));
        let left = self.grid[row][col] == Switch::Left;

        self.ball = if row == self.rows - 1 {
            None
        } else if row % 2 == 1 {
            if left {
                Some((row + 1, col))
            } else {
                Some((row + 1, col + 1))
            }
        } else if col == 0 {
            if left {
                Some((row + 2, col))
            } else {
                Some((row + 1, col))
            }
        } else if col == self.cols - 1 {
            if left {
                Some((row + 1, col - 1))
            } else {
                Some((row + 2, col))
            }
        } else if left {
            Some((row + 1, col - 1))
        } else {
            Some((row + 1, col))
        };

        log::trace!("ball {:?} -> {:?}", (row, col), self.ball);
        self.flip(row, col);
        true
    }

    /// Drop a ball into the slot named by `letter` and let it fall through.
    pub fn drop_ball(&mut self, letter: char) -> Result<()> {
        self.drop_ball_traced(letter, |_| {})
    }

    /// Like [`Trellis::drop_ball`], calling `observer` after the ball is
    /// inserted and after every step.
    pub fn drop_ball_traced<F>(&mut self, letter: char, mut observer: F) -> Result<()>
    where
        F: FnMut(&Trellis),
    {
        let slot = self.alphabet.char_to_slot(letter)?;
        self.insert_ball(slot)?;
        observer(self);
        while self.step() {
            observer(self);
        }
        Ok(())
    }

    /// Drop one ball per letter of `word`, in order.
    ///
    /// The whole word is validated before any ball is dropped.
    pub fn drop_balls(&mut self, word: &str) -> Result<()> {
        self.drop_balls_traced(word, |_| {})
    }

    /// Like [`Trellis::drop_balls`] with an observer for every step.
    pub fn drop_balls_traced<F>(&mut self, word: &str, mut observer: F) -> Result<()>
    where
        F: FnMut(&Trellis),
    {
        let slots = self.alphabet.slots(word)?;
        if let Some((row, col)) = self.ball {
            return Err(TrellisError::BallInFlight { row, col });
        }
        for slot in slots {
            self.insert_ball(slot)?;
            observer(self);
            while self.step() {
                observer(self);
            }
        }
        Ok(())
    }

    /// Drop pre-validated slots without observers.
    pub(crate) fn drop_slots(&mut self, slots: &[usize]) -> Result<()> {
        for &slot in slots {
            self.insert_ball(slot)?;
            while self.step() {}
        }
        Ok(())
    }
}

fn fresh_grid(rows: usize, cols: usize) -> Configuration {
    (0..rows)
        .map(|i| vec![Switch::Left; cols - i % 2])
        .collect()
}
