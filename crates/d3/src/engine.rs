//! The identification engine: working set + catalog + table builder.
//!
//! An [`Engine`] owns one [`WorkingSet`] and the [`Catalog`] built from it at
//! construction. Every trial follows reset → transform → identify → reset, so
//! no trial sees another's state.
//!
//! The catalog is immutable after construction. Concurrent callers each use
//! their own engine; a built catalog can be cloned and shared freely.
//!
//! # Example
//!
//! ```
//! use d3::{Engine, Operation};
//!
//! let mut engine = Engine::new();
//! engine.apply_sequence(&[Operation::R1, Operation::S1]);
//! assert_eq!(engine.identify().unwrap(), Operation::S3);
//!
//! let table = engine.composition_table(&Operation::ALL).unwrap();
//! assert_eq!(table.get(Operation::S1, Operation::R1), Some(Operation::S2));
//! assert!(table.is_latin_square());
//! ```

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::operation::{parse_sequence, Operation};
use crate::point_set::PointSet;
use crate::state::{SetState, WorkingSet};
use crate::table::CompositionTable;

/// Dihedral-group identification engine.
#[derive(Debug, Clone)]
pub struct Engine {
    working: WorkingSet,
    catalog: Catalog,
}

impl Engine {
    /// Build the origin configuration and the catalog.
    #[must_use]
    pub fn new() -> Self {
        let mut working = WorkingSet::new(PointSet::origin());
        let catalog = Catalog::build(&mut working);
        debug!(entries = catalog.len(), "engine ready");
        Self { working, catalog }
    }

    /// The read-only catalog.
    #[inline]
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The origin configuration.
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> &PointSet {
        self.working.origin()
    }

    /// The working configuration.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> &PointSet {
        self.working.current()
    }

    /// Origin or Transformed.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> SetState {
        self.working.state()
    }

    /// Apply one operation to the working set.
    pub fn apply(&mut self, op: Operation) {
        self.working.apply(op);
    }

    /// Apply operations left to right to the working set.
    pub fn apply_sequence(&mut self, ops: &[Operation]) {
        self.working.apply_sequence(ops);
    }

    /// Parse operation names and apply them in order.
    ///
    /// Every name is parsed before anything is applied, so a bad name leaves
    /// the working set untouched.
    ///
    /// # Errors
    ///
    /// Returns [`D3Error::InvalidOperation`](crate::D3Error::InvalidOperation)
    /// for the first unknown name.
    pub fn apply_names<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        let ops = names
            .iter()
            .map(|n| n.as_ref().parse())
            .collect::<Result<Vec<Operation>>>()?;
        self.apply_sequence(&ops);
        Ok(())
    }

    /// Parse a comma- or whitespace-separated sequence and apply it.
    ///
    /// # Errors
    ///
    /// Returns [`D3Error::InvalidOperation`](crate::D3Error::InvalidOperation)
    /// for the first unknown name; the working set is left untouched.
    pub fn apply_str(&mut self, text: &str) -> Result<()> {
        let ops = parse_sequence(text)?;
        self.apply_sequence(&ops);
        Ok(())
    }

    /// Restore the working set to the origin.
    pub fn reset(&mut self) {
        self.working.reset();
    }

    /// The single operation equivalent to the working set's current state.
    ///
    /// # Errors
    ///
    /// Returns [`D3Error::LookupFailure`](crate::D3Error::LookupFailure) if
    /// the working set matches no catalog entry.
    pub fn identify(&self) -> Result<Operation> {
        self.catalog.identify(self.working.current())
    }

    /// Identify an arbitrary point set against this engine's catalog.
    ///
    /// # Errors
    ///
    /// Returns [`D3Error::LookupFailure`](crate::D3Error::LookupFailure) if
    /// `set` matches no catalog entry.
    pub fn identify_set(&self, set: &PointSet) -> Result<Operation> {
        self.catalog.identify(set)
    }

    /// Identify the composite of `first` then `second` applied to the origin.
    ///
    /// Leaves the working set at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`D3Error::LookupFailure`](crate::D3Error::LookupFailure) if
    /// the composite matches no catalog entry.
    pub fn compose(&mut self, first: Operation, second: Operation) -> Result<Operation> {
        self.working.reset();
        self.working.apply_sequence(&[first, second]);
        let result = self.identify();
        self.working.reset();
        result
    }

    /// Build the composition table over `order`.
    ///
    /// Row is the outer loop: for each `row`, for each `col`, the cell holds
    /// the identity of `row` then `col` applied to the origin. The working set
    /// is at the origin afterwards. Built fresh on every call.
    ///
    /// # Errors
    ///
    /// Returns [`D3Error::LookupFailure`](crate::D3Error::LookupFailure) if
    /// any composite matches no catalog entry.
    pub fn composition_table(&mut self, order: &[Operation]) -> Result<CompositionTable> {
        let mut cells = Vec::with_capacity(order.len() * order.len());
        self.working.reset();
        for &row in order {
            for &col in order {
                let cell = self.compose(row, col)?;
                debug!(row = %row, col = %col, cell = %cell, "composed");
                cells.push(cell);
            }
        }
        Ok(CompositionTable::from_cells(order.to_vec(), cells))
    }

    /// The full 6×6 table in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`D3Error::LookupFailure`](crate::D3Error::LookupFailure) if
    /// any composite matches no catalog entry.
    pub fn cayley_table(&mut self) -> Result<CompositionTable> {
        self.composition_table(&Operation::ALL)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
