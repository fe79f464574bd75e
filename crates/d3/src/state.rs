//! Working point set: the mutable state that operations act on.
//!
//! ```text
//!            apply / apply_sequence
//!   Origin ──────────────────────────▶ Transformed ─┐
//!     ▲                                   │   ▲     │ apply / apply_sequence
//!     └──────────────── reset ────────────┘   └─────┘
//! ```
//!
//! The stored origin is never modified; [`WorkingSet::reset`] copies it back
//! into the working slot by value.

use tracing::trace;

use crate::operation::Operation;
use crate::point_set::PointSet;

/// Logical state of a [`WorkingSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetState {
    /// Freshly reset; the working set equals the origin.
    Origin,
    /// At least one operation applied since the last reset.
    Transformed,
}

/// An origin configuration plus the working set derived from it.
///
/// # Example
///
/// ```
/// use d3::{Operation, PointSet, SetState, WorkingSet};
///
/// let mut ws = WorkingSet::new(PointSet::origin());
/// ws.apply_sequence(&[Operation::R1, Operation::R1, Operation::R1]);
/// assert_eq!(ws.state(), SetState::Transformed);
/// ws.reset();
/// assert_eq!(ws.current(), ws.origin());
/// ```
#[derive(Debug, Clone)]
pub struct WorkingSet {
    origin: PointSet,
    current: PointSet,
    state: SetState,
}

impl WorkingSet {
    /// Start at `origin`.
    #[must_use]
    pub const fn new(origin: PointSet) -> Self {
        Self {
            origin,
            current: origin,
            state: SetState::Origin,
        }
    }

    /// The fixed origin configuration.
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> &PointSet {
        &self.origin
    }

    /// The working configuration.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> &PointSet {
        &self.current
    }

    /// Origin or Transformed.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> SetState {
        self.state
    }

    /// Replace the working set with `op` applied to every point.
    pub fn apply(&mut self, op: Operation) {
        self.current = self.current.transformed(op);
        self.state = SetState::Transformed;
        trace!(op = %op, points = %self.current, "applied operation");
    }

    /// Apply `ops` left to right, each to the result of the previous one.
    pub fn apply_sequence(&mut self, ops: &[Operation]) {
        for &op in ops {
            self.apply(op);
        }
    }

    /// Restore the working set to the origin.
    pub fn reset(&mut self) {
        self.current = self.origin;
        self.state = SetState::Origin;
    }
}

impl Default for WorkingSet {
    fn default() -> Self {
        Self::new(PointSet::origin())
    }
}
