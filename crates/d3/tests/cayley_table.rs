//! Cayley table cross-checks through the public API.

#![allow(clippy::unwrap_used)]

use d3::{CanonicalConfiguration, D3Error, Engine, Label, Operation, PointSet, SetState};
use d3::Operation::{I, R1, R2, S1, S2, S3};

/// Every ordered pair composes to one of the six operations.
#[test]
fn closure_over_all_pairs() {
    let mut engine = Engine::new();
    for a in Operation::ALL {
        for b in Operation::ALL {
            let result = engine.compose(a, b);
            assert!(result.is_ok(), "{a} then {b} failed: {result:?}");
        }
    }
}

/// The full table is a Latin square.
#[test]
fn full_table_is_latin_square() {
    let mut engine = Engine::new();
    let table = engine.cayley_table().unwrap();
    assert_eq!(table.len(), 6);
    assert!(table.is_latin_square());
    for op in Operation::ALL {
        let mut row = table.row(op).unwrap().to_vec();
        row.sort_unstable();
        assert_eq!(row, Operation::ALL.to_vec(), "row {op}");
        let mut col = table.column(op).unwrap();
        col.sort_unstable();
        assert_eq!(col, Operation::ALL.to_vec(), "column {op}");
    }
}

/// R1 then S1 differs from S1 then R1.
#[test]
fn group_is_not_abelian() {
    let mut engine = Engine::new();
    let ab = engine.compose(R1, S1).unwrap();
    let ba = engine.compose(S1, R1).unwrap();
    assert_ne!(ab, ba);
    assert_eq!(ab, S3);
    assert_eq!(ba, S2);
}

/// The rotations commute among themselves.
#[test]
fn rotation_subgroup_is_abelian() {
    let mut engine = Engine::new();
    let table = engine.composition_table(&[I, R1, R2]).unwrap();
    for a in [I, R1, R2] {
        for b in [I, R1, R2] {
            assert_eq!(table.get(a, b), table.get(b, a));
        }
    }
    assert!(table.is_latin_square());
}

/// R1 three times returns to the origin; R1 then R2 is the identity.
#[test]
fn rotation_order() {
    let mut engine = Engine::new();
    engine.apply_sequence(&[R1, R1, R1]);
    assert_eq!(
        CanonicalConfiguration::of(engine.current()),
        CanonicalConfiguration::of(&PointSet::origin())
    );
    assert_eq!(engine.compose(R1, R2).unwrap(), I);
}

/// Each reflection applied twice is the identity.
#[test]
fn reflections_are_involutions() {
    let mut engine = Engine::new();
    for s in [S1, S2, S3] {
        assert_eq!(engine.compose(s, s).unwrap(), I, "{s}");
    }
}

/// Single R1 from the origin: `a` lands at (-0.866, -0.5).
#[test]
fn r1_concrete_scenario() {
    let mut engine = Engine::new();
    let origin = engine.origin();
    assert_eq!(origin.get(Label::A).coords(), (0.0, 1.0));
    assert!((origin.get(Label::B).x() + 0.866).abs() < 1e-3);
    assert!((origin.get(Label::C).x() - 0.866).abs() < 1e-3);

    engine.apply(R1);
    assert_eq!(engine.state(), SetState::Transformed);
    assert_eq!(engine.identify().unwrap(), R1);
    let key = CanonicalConfiguration::of(engine.current());
    assert_eq!(key.coords(Label::A), (-0.87, -0.5));
}

/// Permuted axes give the same cells as the canonical table.
#[test]
fn permuted_order_agrees_with_full_table() {
    let mut engine = Engine::new();
    let full = engine.cayley_table().unwrap();
    let permuted = engine.composition_table(&[S3, R2, I, S1, R1, S2]).unwrap();
    for a in Operation::ALL {
        for b in Operation::ALL {
            assert_eq!(full.get(a, b), permuted.get(a, b));
        }
    }
}

/// Independent engines share nothing mutable.
#[test]
fn engines_are_independent() {
    let mut first = Engine::new();
    let second = Engine::new();
    first.apply(S2);
    assert_eq!(second.state(), SetState::Origin);
    assert_eq!(first.catalog(), second.catalog());
}

/// A configuration outside the group is reported, not silently dropped.
#[test]
fn off_group_configuration_fails_lookup() {
    let engine = Engine::new();
    let skewed = PointSet::from_coords([(0.0, 1.0), (0.0, -1.0), (1.0, 0.0)]);
    let err = engine.identify_set(&skewed).unwrap_err();
    assert!(matches!(err, D3Error::LookupFailure { .. }));
    assert!(err.to_string().starts_with("no catalog entry matches configuration a=(0.00, 1.00)"));
}

/// Unknown names fail before touching the working set.
#[test]
fn invalid_names_rejected() {
    let mut engine = Engine::new();
    let err = engine.apply_names(&["S1", "T4"]).unwrap_err();
    assert_eq!(
        err,
        D3Error::InvalidOperation {
            name: "T4".to_string()
        }
    );
    assert_eq!(engine.state(), SetState::Origin);
}
