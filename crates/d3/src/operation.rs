//! The six symmetry operations of the equilateral triangle.
//!
//! Each [`Operation`] is a tag with a fixed geometric handler: identity, a
//! rotation about the origin, or a reflection across an axis through the
//! origin. Dispatch is a `match` on the tag; there is no name lookup at
//! apply time.
//!
//! | Tag | Kind | Angle |
//! |-----|------|-------|
//! | I   | identity   | —    |
//! | R1  | rotation   | 120° |
//! | R2  | rotation   | 240° |
//! | S1  | reflection | 30°  |
//! | S2  | reflection | 90°  |
//! | S3  | reflection | 150° |
//!
//! # Example
//!
//! ```
//! use d3::{Operation, OperationKind};
//!
//! let op: Operation = "S2".parse().unwrap();
//! assert_eq!(op, Operation::S2);
//! assert_eq!(op.kind(), OperationKind::Reflection);
//! assert_eq!(op.angle_degrees(), Some(90.0));
//! assert!("R3".parse::<Operation>().is_err());
//! ```

use core::fmt;
use core::str::FromStr;

use crate::constants::{GROUP_ORDER, REFLECTION_AXES, ROTATION_ANGLES};
use crate::error::D3Error;
use crate::point::Point;

/// Broad classification of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OperationKind {
    /// Leaves every point in place.
    Identity,
    /// Rotation about the origin.
    Rotation,
    /// Reflection across a line through the origin.
    Reflection,
}

/// One element of the dihedral group of order 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum Operation {
    /// Identity.
    I = 0,
    /// Rotation by 120°.
    R1 = 1,
    /// Rotation by 240°.
    R2 = 2,
    /// Reflection across the 30° axis.
    S1 = 3,
    /// Reflection across the 90° axis.
    S2 = 4,
    /// Reflection across the 150° axis.
    S3 = 5,
}

impl Operation {
    /// All operations in catalog order.
    pub const ALL: [Self; GROUP_ORDER] = [
        Self::I,
        Self::R1,
        Self::R2,
        Self::S1,
        Self::S2,
        Self::S3,
    ];

    /// Position of this operation in [`Operation::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short name (`"I"`, `"R1"`, ...).
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::R1 => "R1",
            Self::R2 => "R2",
            Self::S1 => "S1",
            Self::S2 => "S2",
            Self::S3 => "S3",
        }
    }

    /// Human-readable description.
    #[inline]
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::I => "identity",
            Self::R1 => "rotation by 120 degrees",
            Self::R2 => "rotation by 240 degrees",
            Self::S1 => "reflection across the 30 degree axis",
            Self::S2 => "reflection across the 90 degree axis",
            Self::S3 => "reflection across the 150 degree axis",
        }
    }

    /// Identity, rotation or reflection.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> OperationKind {
        match self {
            Self::I => OperationKind::Identity,
            Self::R1 | Self::R2 => OperationKind::Rotation,
            Self::S1 | Self::S2 | Self::S3 => OperationKind::Reflection,
        }
    }

    /// Rotation angle or reflection axis in degrees; `None` for identity.
    #[inline]
    #[must_use]
    pub const fn angle_degrees(self) -> Option<f64> {
        match self {
            Self::I => None,
            Self::R1 => Some(ROTATION_ANGLES[0]),
            Self::R2 => Some(ROTATION_ANGLES[1]),
            Self::S1 => Some(REFLECTION_AXES[0]),
            Self::S2 => Some(REFLECTION_AXES[1]),
            Self::S3 => Some(REFLECTION_AXES[2]),
        }
    }

    /// Apply this operation to a single point.
    #[must_use]
    pub fn transform(self, point: &Point) -> Point {
        match (self.kind(), self.angle_degrees()) {
            (OperationKind::Rotation, Some(angle)) => point.rotated(angle),
            (OperationKind::Reflection, Some(axis)) => point.reflected(axis),
            _ => *point,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Operation {
    type Err = D3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| D3Error::InvalidOperation {
                name: name.to_string(),
            })
    }
}

/// Parse a comma- or whitespace-separated list of operation names.
///
/// # Errors
///
/// Returns [`D3Error::InvalidOperation`] for the first name that is not one
/// of the six operations.
pub fn parse_sequence(text: &str) -> Result<Vec<Operation>, D3Error> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}
