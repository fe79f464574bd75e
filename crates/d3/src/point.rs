//! Labeled, colored points.
//!
//! A [`Point`] is an immutable value: rotating or reflecting it returns a new
//! point carrying the same [`Label`] and [`Color`].

use core::fmt;

use crate::constants::VERTEX_COUNT;
use crate::geometry;

/// Identifier of one triangle vertex.
///
/// Labels are the identity of a point; transformations move them but never
/// reassign or drop them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Label {
    /// Vertex `a`, at 90° in the origin configuration.
    A = 0,
    /// Vertex `b`, at 210° in the origin configuration.
    B = 1,
    /// Vertex `c`, at 330° in the origin configuration.
    C = 2,
}

impl Label {
    /// All labels in canonical order.
    pub const ALL: [Self; VERTEX_COUNT] = [Self::A, Self::B, Self::C];

    /// Position of this label in [`Label::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-character symbol drawn by renderers.
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
            Self::C => 'c',
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Display color of a point. Irrelevant to identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    /// Red.
    Red,
    /// Blue.
    Blue,
    /// Green.
    Green,
}

impl Color {
    /// Lowercase color name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }

    /// SGR foreground code for ANSI terminals.
    #[inline]
    #[must_use]
    pub const fn ansi_code(self) -> u8 {
        match self {
            Self::Red => 31,
            Self::Green => 32,
            Self::Blue => 34,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A labeled point in the plane.
///
/// # Example
///
/// ```
/// use d3::{Color, Label, Point};
///
/// let p = Point::new(1.0, 0.0, Label::A, Color::Red);
/// let q = p.rotated(180.0);
/// assert_eq!(q.label(), Label::A);
/// assert!((q.x() + 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Point {
    x: f64,
    y: f64,
    label: Label,
    color: Color,
}

impl Point {
    /// Create a point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, label: Label, color: Color) -> Self {
        Self { x, y, label, color }
    }

    /// X coordinate.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Coordinates as an `(x, y)` pair.
    #[inline]
    #[must_use]
    pub const fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Vertex label.
    #[inline]
    #[must_use]
    pub const fn label(&self) -> Label {
        self.label
    }

    /// Display color.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Same label and color at new coordinates.
    #[inline]
    #[must_use]
    pub const fn moved_to(&self, (x, y): (f64, f64)) -> Self {
        Self::new(x, y, self.label, self.color)
    }

    /// This point rotated about the origin.
    #[must_use]
    pub fn rotated(&self, angle_degrees: f64) -> Self {
        self.moved_to(geometry::rotate(self.coords(), angle_degrees))
    }

    /// This point reflected across the line through the origin at `axis_degrees`.
    #[must_use]
    pub fn reflected(&self, axis_degrees: f64) -> Self {
        self.moved_to(geometry::reflect(self.coords(), axis_degrees))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=({:.3}, {:.3})", self.label, self.x, self.y)
    }
}
