//! The grid model: a fixed-size rectangular field of cell states with
//! placeability queries.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolveError};

/// The semantic state of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellState {
    /// Nothing may be placed here.
    Blocked,
    /// Placeable, no preference.
    Powered,
    /// Placeable and preferred; required by protection-only instances.
    Protected,
}

/// A fixed-size rectangular grid of [`CellState`] values.
///
/// Dimensions are immutable after construction and cell states are set in
/// bulk before solving; the solver treats the grid as read-only for the
/// duration of a call, so one grid can back several concurrent strategy runs.
/// Hosts exchange grids as rows of [`CellState`] and rebuild through
/// [`Grid::from_states`] so the cached aggregate counts stay consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
    placeable_cells: usize,
    protected_cells: usize,
}

impl Grid {
    /// Builds a grid from nested rows of cell states.
    ///
    /// Fails on ragged rows or zero dimensions. The placeable and protected
    /// aggregate counts are computed once here rather than per placement
    /// attempt.
    pub fn from_states(rows: Vec<Vec<CellState>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if height == 0 || width == 0 || rows.iter().any(|r| r.len() != width) {
            return Err(SolveError::MalformedGrid.into());
        }
        let cells: Vec<CellState> = rows.into_iter().flatten().collect();
        let placeable_cells = cells.iter().filter(|c| **c != CellState::Blocked).count();
        let protected_cells = cells.iter().filter(|c| **c == CellState::Protected).count();
        Ok(Self {
            rows: height,
            cols: width,
            cells,
            placeable_cells,
            protected_cells,
        })
    }

    /// Convenience constructor for a uniformly-powered grid.
    pub fn powered(rows: usize, cols: usize) -> Result<Self> {
        Self::from_states(vec![vec![CellState::Powered; cols]; rows])
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn state(&self, row: usize, col: usize) -> CellState {
        self.cells[row * self.cols + col]
    }

    /// Whether an instance cell may sit at `(row, col)`.
    ///
    /// `require_protected` is set for instances that only accept protected
    /// cells.
    pub fn is_placeable(&self, row: usize, col: usize, require_protected: bool) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        match self.state(row, col) {
            CellState::Blocked => false,
            CellState::Powered => !require_protected,
            CellState::Protected => true,
        }
    }

    pub fn is_protected(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.state(row, col) == CellState::Protected
    }

    /// Total cells anything can be placed on (powered + protected).
    pub fn placeable_cells(&self) -> usize {
        self.placeable_cells
    }

    /// Total protected cells.
    pub fn protected_cells(&self) -> usize {
        self.protected_cells
    }
}
