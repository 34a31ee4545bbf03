//! The shape engine: boolean masks for component footprints and their
//! axis-aligned 90° rotations.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolveError};

/// A rectangular boolean mask describing a component's footprint.
///
/// Cells are stored row-major in a flat vector. A mask always has at least
/// one filled cell; mirroring is not supported, only clockwise rotation in
/// 90° increments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeMask {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl ShapeMask {
    /// Builds a mask from row-major cell data.
    ///
    /// Fails if the cell count does not match the declared dimensions or if
    /// no cell is filled.
    pub fn new(rows: usize, cols: usize, cells: Vec<bool>) -> Result<Self> {
        if cells.len() != rows * cols {
            return Err(SolveError::ShapeDimensionMismatch {
                rows,
                cols,
                actual: cells.len(),
            }
            .into());
        }
        if !cells.iter().any(|filled| *filled) {
            return Err(SolveError::EmptyShape.into());
        }
        Ok(Self { rows, cols, cells })
    }

    /// Builds a mask from nested rows, as scenario files and catalogs supply
    /// them.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if rows.iter().any(|r| r.len() != width) {
            return Err(SolveError::ShapeDimensionMismatch {
                rows: height,
                cols: width,
                actual: rows.iter().map(|r| r.len()).sum(),
            }
            .into());
        }
        Self::new(height, width, rows.into_iter().flatten().collect())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn filled(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    /// Number of filled cells; used by the size-ordering heuristics.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|filled| **filled).count()
    }

    /// Rotates the mask 90° clockwise.
    ///
    /// For an R×C mask the result is C×R with
    /// `rotated[c][R - 1 - r] = mask[r][c]`.
    pub fn rotate90(&self) -> Self {
        let mut cells = vec![false; self.cells.len()];
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.filled(r, c) {
                    // Rotated mask is cols x rows.
                    cells[c * self.rows + (self.rows - 1 - r)] = true;
                }
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// All distinct rotations of this mask, starting with the unrotated
    /// mask, each paired with its rotation index (0–3).
    ///
    /// Rotations of symmetric shapes collapse to fewer than four entries;
    /// trying a duplicate rotation would be wasted work rather than a
    /// correctness issue, so duplicates are dropped here.
    pub fn rotations(&self) -> Vec<(usize, ShapeMask)> {
        let mut out: Vec<(usize, ShapeMask)> = vec![(0, self.clone())];
        let mut current = self.clone();
        for index in 1..4 {
            current = current.rotate90();
            if out.iter().any(|(_, seen)| *seen == current) {
                continue;
            }
            out.push((index, current.clone()));
        }
        out
    }

    /// Absolute grid coordinates occupied when the mask's top-left corner
    /// sits at `(origin_row, origin_col)`.
    ///
    /// Pure enumeration; bounds are the caller's responsibility.
    pub fn occupied_cells(&self, origin_row: usize, origin_col: usize) -> Vec<(usize, usize)> {
        let mut cells = Vec::with_capacity(self.filled_count());
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.filled(r, c) {
                    cells.push((origin_row + r, origin_col + c));
                }
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::ShapeMask;
    use crate::error::SolveError;

    fn l_tromino() -> ShapeMask {
        ShapeMask::from_rows(vec![vec![true, false], vec![true, true]]).unwrap()
    }

    #[test]
    fn rotate90_maps_cells_clockwise() {
        // X.      XX
        // XX  ->  X.
        let rotated = l_tromino().rotate90();
        assert_eq!(
            rotated,
            ShapeMask::from_rows(vec![vec![true, true], vec![true, false]]).unwrap()
        );
    }

    #[test]
    fn rotate90_transposes_dimensions() {
        let bar = ShapeMask::from_rows(vec![vec![true, true, true]]).unwrap();
        let rotated = bar.rotate90();
        assert_eq!((rotated.rows(), rotated.cols()), (3, 1));
        assert_eq!(rotated.filled_count(), 3);
    }

    #[test]
    fn rotations_deduplicate_symmetric_shapes() {
        let square = ShapeMask::from_rows(vec![vec![true, true], vec![true, true]]).unwrap();
        assert_eq!(square.rotations().len(), 1);

        let bar = ShapeMask::from_rows(vec![vec![true, true]]).unwrap();
        assert_eq!(bar.rotations().len(), 2);

        assert_eq!(l_tromino().rotations().len(), 4);
    }

    #[test]
    fn rotation_indices_track_the_applied_turns() {
        let indices: Vec<usize> = l_tromino().rotations().iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn occupied_cells_are_offset_by_origin() {
        assert_eq!(
            l_tromino().occupied_cells(2, 3),
            vec![(2, 3), (3, 3), (3, 4)]
        );
    }

    #[test]
    fn empty_mask_is_rejected() {
        let err = ShapeMask::new(2, 2, vec![false; 4]).unwrap_err();
        assert_eq!(*err.kind(), SolveError::EmptyShape);
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        let err = ShapeMask::new(2, 2, vec![true; 3]).unwrap_err();
        assert_eq!(
            *err.kind(),
            SolveError::ShapeDimensionMismatch {
                rows: 2,
                cols: 2,
                actual: 3
            }
        );
    }

    fn arb_mask() -> impl Strategy<Value = ShapeMask> {
        (1usize..=5, 1usize..=5)
            .prop_flat_map(|(rows, cols)| {
                (
                    Just(rows),
                    Just(cols),
                    proptest::collection::vec(any::<bool>(), rows * cols),
                    0..rows * cols,
                )
            })
            .prop_map(|(rows, cols, mut cells, pinned)| {
                // Guarantee at least one filled cell.
                cells[pinned] = true;
                ShapeMask::new(rows, cols, cells).unwrap()
            })
    }

    proptest! {
        #[test]
        fn four_rotations_are_the_identity(mask in arb_mask()) {
            let back = mask.rotate90().rotate90().rotate90().rotate90();
            prop_assert_eq!(back, mask);
        }

        #[test]
        fn occupied_cell_count_matches_filled_count(
            mask in arb_mask(),
            origin_row in 0usize..10,
            origin_col in 0usize..10,
        ) {
            prop_assert_eq!(
                mask.occupied_cells(origin_row, origin_col).len(),
                mask.filled_count()
            );
        }

        #[test]
        fn rotation_preserves_filled_count(mask in arb_mask()) {
            prop_assert_eq!(mask.rotate90().filled_count(), mask.filled_count());
        }
    }
}
