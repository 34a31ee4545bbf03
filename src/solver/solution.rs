//! Solution types: individual placements and the scored solutions the
//! strategies produce.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::solver::{instance::InstanceId, stats::CoverageStats};

/// The result of successfully siting one instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub instance_id: InstanceId,
    /// Number of clockwise 90° turns applied to the instance's shape (0–3).
    pub rotation: usize,
    /// Top-left origin of the rotated shape's bounding box.
    pub row: usize,
    pub col: usize,
    /// Absolute grid cells this placement occupies.
    pub cells: Vec<(usize, usize)>,
    /// How many of those cells are protected.
    pub protected_hits: usize,
}

/// One strategy's scored outcome: the placements it committed plus derived
/// coverage statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedSolution {
    /// Human-readable label of the strategy that produced this solution.
    pub strategy: String,
    pub placements: Vec<Placement>,
    pub stats: CoverageStats,
    /// Whether the iteration budget was hit while producing this solution,
    /// in which case it may be poorer than an unbounded search would find.
    pub budget_exhausted: bool,
}

impl PlacedSolution {
    /// The occupied-cell set per instance id, normalized for comparison.
    ///
    /// Rotation labels are deliberately ignored: two placements of a
    /// symmetric shape that cover the same cells under different rotation
    /// indices are the same outcome.
    pub fn footprint(&self) -> BTreeMap<InstanceId, BTreeSet<(usize, usize)>> {
        self.placements
            .iter()
            .map(|p| (p.instance_id, p.cells.iter().copied().collect()))
            .collect()
    }

    /// Order-independent equality on the per-instance occupied-cell sets.
    pub fn same_footprint(&self, other: &PlacedSolution) -> bool {
        self.footprint() == other.footprint()
    }
}
