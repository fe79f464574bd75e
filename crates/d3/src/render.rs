//! Display-only rendering of point sets.
//!
//! The engine never reads a renderer's output. [`AsciiPlot`] draws each label
//! on a character grid covering `[-PLOT_EXTENT, PLOT_EXTENT]` on both axes,
//! optionally colored with ANSI escapes.
//!
//! # Example
//!
//! ```
//! use d3::{AsciiPlot, PointSet, Renderer};
//!
//! let mut plot = AsciiPlot::new(21, 11);
//! let text = plot.render(&PointSet::origin());
//! assert_eq!(text.lines().count(), 11);
//! assert!(text.contains('a') && text.contains('b') && text.contains('c'));
//! ```

use crate::constants::PLOT_EXTENT;
use crate::point::Point;
use crate::point_set::PointSet;

/// A drawing surface for point sets.
pub trait Renderer {
    /// What a render produces.
    type Output;

    /// Draw `set`.
    fn render(&mut self, set: &PointSet) -> Self::Output;
}

/// Character-grid plot of a point set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiPlot {
    width: usize,
    height: usize,
    ansi: bool,
}

impl AsciiPlot {
    /// A plot `width` columns by `height` rows (each at least 3).
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.max(3),
            height: height.max(3),
            ansi: false,
        }
    }

    /// Color labels with ANSI escape codes.
    #[must_use]
    pub const fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Grid cell `(row, col)` for `point`, or `None` outside the window.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn cell_of(&self, point: &Point) -> Option<(usize, usize)> {
        let (x, y) = point.coords();
        if x.abs() > PLOT_EXTENT || y.abs() > PLOT_EXTENT {
            return None;
        }
        let span = 2.0 * PLOT_EXTENT;
        let col = ((x + PLOT_EXTENT) / span * (self.width - 1) as f64).round() as usize;
        let row = ((PLOT_EXTENT - y) / span * (self.height - 1) as f64).round() as usize;
        Some((row, col))
    }

    fn paint(&self, point: &Point) -> String {
        let symbol = point.label().symbol();
        if self.ansi {
            format!("\x1b[{}m{symbol}\x1b[0m", point.color().ansi_code())
        } else {
            symbol.to_string()
        }
    }
}

impl Default for AsciiPlot {
    fn default() -> Self {
        Self::new(41, 21)
    }
}

impl Renderer for AsciiPlot {
    type Output = String;

    fn render(&mut self, set: &PointSet) -> String {
        let (mid_row, mid_col) = (self.height / 2, self.width / 2);
        let mut grid: Vec<Vec<String>> = (0..self.height)
            .map(|r| {
                (0..self.width)
                    .map(|c| {
                        let axis = match (r == mid_row, c == mid_col) {
                            (true, true) => "+",
                            (true, false) => "-",
                            (false, true) => "|",
                            (false, false) => " ",
                        };
                        axis.to_string()
                    })
                    .collect()
            })
            .collect();
        for p in set {
            if let Some((r, c)) = self.cell_of(p) {
                grid[r][c] = self.paint(p);
            }
        }
        let mut out = String::new();
        for line in grid {
            out.push_str(line.concat().trim_end());
            out.push('\n');
        }
        out
    }
}
