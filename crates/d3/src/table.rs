//! Composition (Cayley) tables.
//!
//! Cell `(row, col)` holds the operation equivalent to applying `row` first
//! and `col` second. Row and column order is whatever the caller asked for:
//! the full group in catalog order, a permutation, or a subset.
//!
//! ```text
//!  ∘  │ I   R1  R2  S1  S2  S3
//! ────┼────────────────────────
//!  I  │ I   R1  R2  S1  S2  S3
//!  R1 │ R1  R2  I   S3  S1  S2
//!  R2 │ R2  I   R1  S2  S3  S1
//!  S1 │ S1  S2  S3  I   R1  R2
//!  S2 │ S2  S3  S1  R2  I   R1
//!  S3 │ S3  S1  S2  R1  R2  I
//! ```

use core::fmt;

use crate::operation::Operation;

/// Square table of composed operations, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionTable {
    order: Vec<Operation>,
    cells: Vec<Operation>,
}

impl CompositionTable {
    /// Assemble from an axis order and `order.len()²` row-major cells.
    pub(crate) fn from_cells(order: Vec<Operation>, cells: Vec<Operation>) -> Self {
        debug_assert_eq!(cells.len(), order.len() * order.len());
        Self { order, cells }
    }

    /// Row and column order.
    #[inline]
    #[must_use]
    pub fn order(&self) -> &[Operation] {
        &self.order
    }

    /// Side length.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True for a table built over an empty order.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Cell at row index `i`, column index `j`.
    #[inline]
    #[must_use]
    pub fn cell(&self, i: usize, j: usize) -> Option<Operation> {
        if i < self.len() && j < self.len() {
            Some(self.cells[i * self.len() + j])
        } else {
            None
        }
    }

    /// Result of `row` then `col`, if both are on the table's axes.
    #[must_use]
    pub fn get(&self, row: Operation, col: Operation) -> Option<Operation> {
        let i = self.position(row)?;
        let j = self.position(col)?;
        self.cell(i, j)
    }

    /// The row for `op`.
    #[must_use]
    pub fn row(&self, op: Operation) -> Option<&[Operation]> {
        let i = self.position(op)?;
        let n = self.len();
        Some(&self.cells[i * n..(i + 1) * n])
    }

    /// The column for `op`.
    #[must_use]
    pub fn column(&self, op: Operation) -> Option<Vec<Operation>> {
        let j = self.position(op)?;
        Some((0..self.len()).filter_map(|i| self.cell(i, j)).collect())
    }

    /// Iterate over rows in axis order.
    pub fn rows(&self) -> impl Iterator<Item = (Operation, &[Operation])> {
        let n = self.len().max(1);
        self.order.iter().copied().zip(self.cells.chunks(n))
    }

    /// True when every row and every column is a permutation of the axis
    /// order, i.e. each operation on the axes appears exactly once.
    #[must_use]
    pub fn is_latin_square(&self) -> bool {
        let n = self.len();
        let mut expected: Vec<Operation> = self.order.clone();
        expected.sort_unstable();
        let is_perm = |mut line: Vec<Operation>| {
            line.sort_unstable();
            line == expected
        };
        (0..n).all(|i| is_perm((0..n).filter_map(|j| self.cell(i, j)).collect()))
            && (0..n).all(|j| is_perm((0..n).filter_map(|i| self.cell(i, j)).collect()))
    }

    /// GitHub-flavoured Markdown rendering.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("| ∘ |");
        for op in &self.order {
            out.push_str(&format!(" {op} |"));
        }
        out.push_str("\n|---|");
        for _ in &self.order {
            out.push_str("---|");
        }
        out.push('\n');
        for (op, cells) in self.rows() {
            out.push_str(&format!("| **{op}** |"));
            for c in cells {
                out.push_str(&format!(" {c} |"));
            }
            out.push('\n');
        }
        out
    }

    fn position(&self, op: Operation) -> Option<usize> {
        self.order.iter().position(|&o| o == op)
    }
}

impl fmt::Display for CompositionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ∘  │")?;
        for op in &self.order {
            write!(f, " {op:<3}")?;
        }
        writeln!(f)?;
        writeln!(f, "────┼{}", "────".repeat(self.len()))?;
        for (op, cells) in self.rows() {
            write!(f, " {op:<2} │")?;
            for c in cells {
                write!(f, " {c:<3}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CompositionTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let rows: Vec<&[Operation]> = self.rows().map(|(_, cells)| cells).collect();
        let mut s = serializer.serialize_struct("CompositionTable", 2)?;
        s.serialize_field("order", &self.order)?;
        s.serialize_field("rows", &rows)?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Operation::{I, R1, R2};

    /// The rotation subgroup, filled by hand.
    fn rotations() -> CompositionTable {
        CompositionTable::from_cells(vec![I, R1, R2], vec![I, R1, R2, R1, R2, I, R2, I, R1])
    }

    #[test]
    fn lookup_by_operation() {
        let t = rotations();
        assert_eq!(t.get(R1, R2), Some(I));
        assert_eq!(t.get(R2, R2), Some(R1));
        assert_eq!(t.get(R1, Operation::S1), None);
    }

    #[test]
    fn rows_and_columns() {
        let t = rotations();
        assert_eq!(t.row(R1), Some(&[R1, R2, I][..]));
        assert_eq!(t.column(R2), Some(vec![R2, I, R1]));
        assert_eq!(t.cell(3, 0), None);
    }

    #[test]
    fn latin_square_detects_repeats() {
        assert!(rotations().is_latin_square());
        let broken = CompositionTable::from_cells(vec![I, R1], vec![I, R1, R1, R1]);
        assert!(!broken.is_latin_square());
    }

    #[test]
    fn empty_table() {
        let t = CompositionTable::from_cells(Vec::new(), Vec::new());
        assert!(t.is_empty());
        assert_eq!(t.rows().count(), 0);
        assert!(t.is_latin_square());
    }

    #[test]
    fn display_grid() {
        let text = rotations().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].trim_end(), " ∘  │ I   R1  R2");
        assert_eq!(lines[3].trim_end(), " R1 │ R1  R2  I");
    }

    #[test]
    fn markdown_rows() {
        let md = rotations().to_markdown();
        assert!(md.starts_with("| ∘ | I | R1 | R2 |\n|---|---|---|---|\n"));
        assert!(md.contains("| **R2** | R2 | I | R1 |"));
    }
}
