//! Gridfit places polyomino-shaped components onto a fixed-size grid of
//! powered cells.
//!
//! Each grid cell is [`Blocked`](solver::grid::CellState::Blocked),
//! [`Powered`](solver::grid::CellState::Powered), or
//! [`Protected`](solver::grid::CellState::Protected). The engine sites as
//! many component instances as it can without overlap, using only 90°
//! rotations, honoring the caller's priority order along with per-instance
//! mandatory and protection-required flags, and preferring protected cells
//! whenever a choice exists.
//!
//! # Core Concepts
//!
//! - **[`Grid`](solver::grid::Grid)** and
//!   **[`ShapeMask`](solver::shape::ShapeMask)**: the read-only field and
//!   the rotatable component footprints.
//! - **[`ComponentInstance`](solver::instance::ComponentInstance)**: one
//!   placeable unit; its position in the input slice is its priority.
//! - **[`PlacementEngine`](solver::engine::PlacementEngine)**: validates the
//!   batch, runs bounded backtracking with documented fallbacks (strict, then
//!   skip-allowed, then greedy), explores a few deterministic instance
//!   orderings, and returns a scored, deduplicated
//!   [`SolveReport`](solver::engine::SolveReport).
//!
//! The search is best-effort by design: it is bounded by an iteration budget
//! and degrades gracefully rather than guaranteeing a global optimum.
//!
//! # Example: three components on a 4×4 grid
//!
//! ```
//! use gridfit::solver::engine::PlacementEngine;
//! use gridfit::solver::grid::{CellState, Grid};
//! use gridfit::solver::instance::ComponentInstance;
//! use gridfit::solver::shape::ShapeMask;
//!
//! // A powered 4x4 grid with one protected cell.
//! let mut rows = vec![vec![CellState::Powered; 4]; 4];
//! rows[0][0] = CellState::Protected;
//! let grid = Grid::from_states(rows).unwrap();
//!
//! let bar = ShapeMask::from_rows(vec![vec![true, true, true]]).unwrap();
//! let dot = ShapeMask::from_rows(vec![vec![true]]).unwrap();
//!
//! let instances = vec![
//!     ComponentInstance::new(1, "pipe", bar),
//!     ComponentInstance::new(2, "vent", dot.clone()),
//!     ComponentInstance::new(3, "shielded vent", dot).needs_protection(),
//! ];
//!
//! let report = PlacementEngine::new().solve(&grid, &instances).unwrap();
//! assert_eq!(report.primary.stats.placed, 3);
//!
//! // The protection-only instance ended up on the protected cell.
//! let shielded = report
//!     .primary
//!     .placements
//!     .iter()
//!     .find(|p| p.instance_id == 3)
//!     .unwrap();
//! assert_eq!(shielded.cells, vec![(0, 0)]);
//! ```
pub mod error;
pub mod examples;
pub mod solver;
