//! Numeric constants for the triangle and its symmetry operations.
//!
//! Every angle, coordinate and rounding rule used by the engine lives here so
//! that the catalog and identification always agree on the same numbers.

/// Number of labeled vertices (and points in every [`PointSet`](crate::PointSet)).
pub const VERTEX_COUNT: usize = 3;

/// Order of the group: 3 rotations (including identity) + 3 reflections.
pub const GROUP_ORDER: usize = 2 * VERTEX_COUNT;

/// Decimal digits kept when canonicalizing coordinates.
pub const PRECISION_DIGITS: u32 = 2;

/// Scale applied before rounding: `10^PRECISION_DIGITS`.
///
/// A coordinate `v` is keyed as `round(v * QUANTUM)`.
pub const QUANTUM: f64 = 100.0;

/// Rotation angles (degrees) for R1 and R2.
pub const ROTATION_ANGLES: [f64; 2] = [120.0, 240.0];

/// Reflection axis angles (degrees) for S1, S2 and S3.
///
/// Each axis passes through one origin vertex: 30° through `b` (at 210°),
/// 90° through `a`, 150° through `c` (at 330°).
pub const REFLECTION_AXES: [f64; 3] = [30.0, 90.0, 150.0];

/// Origin coordinates of vertex `a` (90° on the unit circle).
pub const ORIGIN_A: (f64, f64) = (0.0, 1.0);

/// Origin coordinates of vertex `b` (210° on the unit circle).
pub const ORIGIN_B: (f64, f64) = (-0.866_025_403_784_438_7, -0.499_999_999_999_999_8);

/// Origin coordinates of vertex `c` (330° on the unit circle).
pub const ORIGIN_C: (f64, f64) = (0.866_025_403_784_438_4, -0.500_000_000_000_000_3);

/// Half-width of the square plot window: labels are drawn in `[-3, 3]²`.
pub const PLOT_EXTENT: f64 = 3.0;
