//! D3 — the symmetry group of an equilateral triangle, derived from geometry.
//!
//! Group elements are rigid motions of three labeled points. The engine
//! applies rotations and reflections to the points, snapshots the result as a
//! rounded [`CanonicalConfiguration`], and identifies which of the six
//! operations produces that snapshot from the origin. Composing every ordered
//! pair this way yields the Cayley table.
//!
//! # Layers
//!
//! ```text
//! geometry   rotate / reflect one point about the origin
//!    ↓
//! WorkingSet origin + working PointSet; apply, apply_sequence, reset
//!    ↓
//! Catalog    Operation → CanonicalConfiguration, built once
//! Engine     identify, compose, composition_table
//! ```
//!
//! # Operations
//!
//! | Tag | Motion |
//! |-----|--------|
//! | I  | identity |
//! | R1 | rotation by 120° |
//! | R2 | rotation by 240° |
//! | S1 | reflection across the 30° axis (through `b`) |
//! | S2 | reflection across the 90° axis (through `a`) |
//! | S3 | reflection across the 150° axis (through `c`) |
//!
//! # Example
//!
//! ```
//! use d3::{Engine, Operation};
//!
//! let mut engine = Engine::new();
//! let table = engine.cayley_table().unwrap();
//!
//! // The group is not abelian.
//! assert_eq!(table.get(Operation::R1, Operation::S1), Some(Operation::S3));
//! assert_eq!(table.get(Operation::S1, Operation::R1), Some(Operation::S2));
//! println!("{table}");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

// Angles, origin coordinates, rounding precision
pub mod constants;

// Rotation and reflection of a single point
pub mod geometry;

// Labeled, colored points
mod point;

// Three-point configurations
mod point_set;

// The six group operations
mod operation;

// Working state machine (Origin / Transformed)
mod state;

// Fixed-precision comparison keys
mod canonical;

// Operation → configuration catalog
mod catalog;

// Engine: identification and table building
mod engine;

// Cayley tables
mod table;

// Display-only rendering
pub mod render;

mod error;

pub use canonical::{quantize, CanonicalConfiguration};
pub use catalog::Catalog;
pub use engine::Engine;
pub use error::{D3Error, Result};
pub use operation::{parse_sequence, Operation, OperationKind};
pub use point::{Color, Label, Point};
pub use point_set::PointSet;
pub use render::{AsciiPlot, Renderer};
pub use state::{SetState, WorkingSet};
pub use table::CompositionTable;
