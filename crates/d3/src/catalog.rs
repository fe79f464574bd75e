//! Catalog of the configuration each operation produces from the origin.
//!
//! Built once per engine and read-only afterwards. Identification searches
//! the six entries for a structurally equal [`CanonicalConfiguration`].
//!
//! # Example
//!
//! ```
//! use d3::{Catalog, Operation, PointSet, WorkingSet};
//!
//! let mut ws = WorkingSet::new(PointSet::origin());
//! let catalog = Catalog::build(&mut ws);
//!
//! let turned = PointSet::origin().transformed(Operation::R2);
//! assert_eq!(catalog.identify(&turned).unwrap(), Operation::R2);
//! ```

use tracing::{debug, warn};

use crate::canonical::CanonicalConfiguration;
use crate::constants::GROUP_ORDER;
use crate::error::{D3Error, Result};
use crate::operation::Operation;
use crate::point_set::PointSet;
use crate::state::WorkingSet;

/// Operation → canonical configuration, in [`Operation::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: [(Operation, CanonicalConfiguration); GROUP_ORDER],
}

impl Catalog {
    /// Record the configuration of every operation.
    ///
    /// For each operation in catalog order the working set is reset, the
    /// single operation applied, its canonical configuration recorded, and
    /// the working set reset again. Rebuilding yields an equal catalog.
    pub fn build(working: &mut WorkingSet) -> Self {
        working.reset();
        let entries = Operation::ALL.map(|op| {
            working.apply(op);
            let config = CanonicalConfiguration::of(working.current());
            debug!(op = %op, config = %config, "recorded catalog entry");
            working.reset();
            (op, config)
        });
        Self { entries }
    }

    /// Number of entries (always 6).
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        GROUP_ORDER
    }

    /// Always false: the catalog covers all six operations.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Canonical configuration recorded for `op`.
    #[inline]
    #[must_use]
    pub const fn get(&self, op: Operation) -> &CanonicalConfiguration {
        &self.entries[op.index()].1
    }

    /// Iterate over `(operation, configuration)` in catalog order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &(Operation, CanonicalConfiguration)> {
        self.entries.iter()
    }

    /// The operation whose configuration equals `config`.
    ///
    /// # Errors
    ///
    /// Returns [`D3Error::LookupFailure`] when no entry matches.
    pub fn lookup(&self, config: &CanonicalConfiguration) -> Result<Operation> {
        self.entries
            .iter()
            .find(|(_, c)| c == config)
            .map(|&(op, _)| op)
            .ok_or_else(|| {
                warn!(config = %config, "configuration not in catalog");
                D3Error::LookupFailure {
                    configuration: *config,
                }
            })
    }

    /// Canonicalize `set` and look it up.
    ///
    /// # Errors
    ///
    /// Returns [`D3Error::LookupFailure`] when no entry matches.
    pub fn identify(&self, set: &PointSet) -> Result<Operation> {
        self.lookup(&CanonicalConfiguration::of(set))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::point::Label;
    use crate::state::SetState;

    fn catalog() -> Catalog {
        Catalog::build(&mut WorkingSet::default())
    }

    #[test]
    fn entries_in_catalog_order() {
        let ops: Vec<Operation> = catalog().iter().map(|(op, _)| *op).collect();
        assert_eq!(ops, Operation::ALL.to_vec());
    }

    #[test]
    fn build_leaves_working_set_at_origin() {
        let mut ws = WorkingSet::default();
        ws.apply(Operation::S3);
        let _ = Catalog::build(&mut ws);
        assert_eq!(ws.state(), SetState::Origin);
        assert_eq!(ws.current(), &PointSet::origin());
    }

    #[test]
    fn rebuild_is_idempotent() {
        let mut ws = WorkingSet::default();
        let first = Catalog::build(&mut ws);
        ws.apply(Operation::R1);
        let second = Catalog::build(&mut ws);
        assert_eq!(first, second);
    }

    #[test]
    fn configurations_are_distinct() {
        let c = catalog();
        for a in Operation::ALL {
            for b in Operation::ALL {
                if a != b {
                    assert_ne!(c.get(a), c.get(b), "{a} and {b} collide");
                }
            }
        }
    }

    #[test]
    fn identity_entry_is_origin() {
        let c = catalog();
        assert_eq!(
            c.get(Operation::I),
            &CanonicalConfiguration::of(&PointSet::origin())
        );
    }

    #[test]
    fn reflections_fix_their_vertex() {
        let c = catalog();
        let origin = CanonicalConfiguration::of(&PointSet::origin());
        assert_eq!(c.get(Operation::S1).key(Label::B), origin.key(Label::B));
        assert_eq!(c.get(Operation::S2).key(Label::A), origin.key(Label::A));
        assert_eq!(c.get(Operation::S3).key(Label::C), origin.key(Label::C));
    }

    #[test]
    fn every_single_operation_identifies_itself() {
        let c = catalog();
        for op in Operation::ALL {
            let set = PointSet::origin().transformed(op);
            assert_eq!(c.identify(&set).unwrap(), op);
        }
    }

    #[test]
    fn unknown_configuration_is_lookup_failure() {
        let c = catalog();
        let squashed = PointSet::from_coords([(0.0, 0.0), (0.0, 0.0), (0.0, 0.0)]);
        match c.identify(&squashed) {
            Err(D3Error::LookupFailure { configuration }) => {
                assert_eq!(configuration.key(Label::A), (0, 0));
            }
            other => panic!("expected LookupFailure, got {other:?}"),
        }
    }
}
