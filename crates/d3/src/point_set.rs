//! Ordered sets of three labeled points.
//!
//! A [`PointSet`] always holds exactly one point per [`Label`], stored in
//! label order. Operations map every point and keep that order, so the label
//! multiset never changes; only coordinates move.

use core::fmt;

use crate::constants::{ORIGIN_A, ORIGIN_B, ORIGIN_C, VERTEX_COUNT};
use crate::operation::Operation;
use crate::point::{Color, Label, Point};

/// Colors assigned to `a`, `b`, `c`.
const COLORS: [Color; VERTEX_COUNT] = [Color::Red, Color::Blue, Color::Green];

/// Three labeled points, one per vertex label.
///
/// `PointSet` is `Copy`: assigning it duplicates the points, so a working set
/// can never alias the stored origin.
///
/// # Example
///
/// ```
/// use d3::{Label, Operation, PointSet};
///
/// let origin = PointSet::origin();
/// let turned = origin.transformed(Operation::R1);
/// assert_eq!(turned.get(Label::A).label(), Label::A);
/// assert!((turned.get(Label::A).x() + 0.866).abs() < 1e-3);
/// assert_eq!(origin.get(Label::A).coords(), (0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PointSet([Point; VERTEX_COUNT]);

impl PointSet {
    /// The origin configuration: `a` at 90°, `b` at 210°, `c` at 330° on the
    /// unit circle. This is the identity state.
    #[must_use]
    pub const fn origin() -> Self {
        Self::from_coords([ORIGIN_A, ORIGIN_B, ORIGIN_C])
    }

    /// Build a set from coordinates given in label order (`a`, `b`, `c`).
    ///
    /// Colors follow the origin assignment.
    #[must_use]
    pub const fn from_coords(coords: [(f64, f64); VERTEX_COUNT]) -> Self {
        let [ca, cb, cc] = coords;
        Self([
            Point::new(ca.0, ca.1, Label::A, COLORS[0]),
            Point::new(cb.0, cb.1, Label::B, COLORS[1]),
            Point::new(cc.0, cc.1, Label::C, COLORS[2]),
        ])
    }

    /// The points in label order.
    #[inline]
    #[must_use]
    pub const fn points(&self) -> &[Point; VERTEX_COUNT] {
        &self.0
    }

    /// The point carrying `label`.
    #[inline]
    #[must_use]
    pub const fn get(&self, label: Label) -> &Point {
        &self.0[label.index()]
    }

    /// Iterate over the points in label order.
    pub fn iter(&self) -> core::slice::Iter<'_, Point> {
        self.0.iter()
    }

    /// A new set with `op` applied to every point.
    #[must_use]
    pub fn transformed(&self, op: Operation) -> Self {
        Self(self.0.map(|p| op.transform(&p)))
    }
}

impl Default for PointSet {
    fn default() -> Self {
        Self::origin()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = core::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_labels_in_order() {
        let labels: Vec<Label> = PointSet::origin().iter().map(Point::label).collect();
        assert_eq!(labels, Label::ALL.to_vec());
    }

    #[test]
    fn origin_colors() {
        let o = PointSet::origin();
        assert_eq!(o.get(Label::A).color(), Color::Red);
        assert_eq!(o.get(Label::B).color(), Color::Blue);
        assert_eq!(o.get(Label::C).color(), Color::Green);
    }

    #[test]
    fn transform_keeps_label_multiset() {
        let o = PointSet::origin();
        for op in Operation::ALL {
            let t = o.transformed(op);
            for (i, p) in t.iter().enumerate() {
                assert_eq!(p.label(), Label::ALL[i], "{op} moved label slot");
            }
        }
    }

    #[test]
    fn copies_are_independent() {
        let origin = PointSet::origin();
        let mut working = origin;
        working = working.transformed(Operation::R1);
        assert_ne!(working, origin);
        assert_eq!(origin, PointSet::origin());
    }

    #[test]
    fn display_lists_points() {
        let s = PointSet::from_coords([(0.0, 1.0), (0.0, 0.0), (1.0, 0.0)]).to_string();
        assert_eq!(s, "a=(0.000, 1.000) b=(0.000, 0.000) c=(1.000, 0.000)");
    }
}
