//! Canonical configurations: fixed-precision comparison keys for point sets.
//!
//! Floating-point drift makes raw coordinates useless for equality. Every
//! coordinate is instead quantized by [`quantize`] to an integer count of
//! hundredths (two decimal digits). Catalog construction and identification
//! both go through this one function, so their keys always agree.
//!
//! # Example
//!
//! ```
//! use d3::{CanonicalConfiguration, Label, Operation, PointSet};
//!
//! let turned = PointSet::origin().transformed(Operation::R1);
//! let key = CanonicalConfiguration::of(&turned);
//! assert_eq!(key.coords(Label::A), (-0.87, -0.5));
//! ```

use core::fmt;

use crate::constants::{QUANTUM, VERTEX_COUNT};
use crate::point::Label;
use crate::point_set::PointSet;

/// Quantize a coordinate to an integer number of `1 / QUANTUM` steps.
///
/// Rounds half away from zero. `-0.0` and `0.0` share the key `0`.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn quantize(value: f64) -> i64 {
    (value * QUANTUM).round() as i64
}

/// Label → rounded `(x, y)` snapshot of a [`PointSet`].
///
/// Two configurations are equal exactly when every label sits at the same
/// quantized coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalConfiguration([(i64, i64); VERTEX_COUNT]);

impl CanonicalConfiguration {
    /// Canonicalize a point set.
    #[must_use]
    pub fn of(set: &PointSet) -> Self {
        let mut keys = [(0i64, 0i64); VERTEX_COUNT];
        for p in set {
            keys[p.label().index()] = (quantize(p.x()), quantize(p.y()));
        }
        Self(keys)
    }

    /// Quantized integer key for `label`.
    #[inline]
    #[must_use]
    pub const fn key(&self, label: Label) -> (i64, i64) {
        self.0[label.index()]
    }

    /// Rounded coordinates for `label`, e.g. `(-0.87, -0.5)`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn coords(&self, label: Label) -> (f64, f64) {
        let (x, y) = self.key(label);
        (x as f64 / QUANTUM, y as f64 / QUANTUM)
    }

    /// Iterate over `(label, rounded x, rounded y)` in label order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, f64, f64)> + '_ {
        Label::ALL.into_iter().map(move |l| {
            let (x, y) = self.coords(l);
            (l, x, y)
        })
    }
}

impl fmt::Display for CanonicalConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, x, y)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{label}=({x:.2}, {y:.2})")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CanonicalConfiguration {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(VERTEX_COUNT))?;
        for (label, x, y) in self.iter() {
            map.serialize_entry(&label, &(x, y))?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Operation;

    #[test]
    fn quantize_two_digits() {
        assert_eq!(quantize(0.866_025_403_784_438_7), 87);
        assert_eq!(quantize(-0.866_025_403_784_438_7), -87);
        assert_eq!(quantize(-0.500_000_000_000_000_3), -50);
        assert_eq!(quantize(1.0), 100);
    }

    #[test]
    fn negative_zero_matches_zero() {
        assert_eq!(quantize(-0.0), quantize(0.0));
        assert_eq!(quantize(-1e-17), 0);
    }

    #[test]
    fn origin_key() {
        let key = CanonicalConfiguration::of(&PointSet::origin());
        assert_eq!(key.key(Label::A), (0, 100));
        assert_eq!(key.key(Label::B), (-87, -50));
        assert_eq!(key.key(Label::C), (87, -50));
    }

    #[test]
    fn drift_below_precision_is_absorbed() {
        let o = PointSet::origin();
        let nudged = PointSet::from_coords([(1e-9, 1.0 - 1e-9), (-0.866, -0.5), (0.866, -0.5)]);
        assert_eq!(
            CanonicalConfiguration::of(&o),
            CanonicalConfiguration::of(&nudged)
        );
    }

    #[test]
    fn r1_moves_a_to_b_slot() {
        let key = CanonicalConfiguration::of(&PointSet::origin().transformed(Operation::R1));
        assert_eq!(key.coords(Label::A), (-0.87, -0.5));
        assert_eq!(key.coords(Label::B), (0.87, -0.5));
        assert_eq!(key.coords(Label::C), (0.0, 1.0));
    }

    #[test]
    fn display_two_decimals() {
        let key = CanonicalConfiguration::of(&PointSet::origin());
        assert_eq!(key.to_string(), "a=(0.00, 1.00) b=(-0.87, -0.50) c=(0.87, -0.50)");
    }
}
