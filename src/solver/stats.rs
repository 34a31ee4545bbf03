//! Coverage statistics and human-readable report rendering.

use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

use crate::solver::{
    engine::SolveReport, grid::Grid, instance::ComponentInstance, solution::Placement,
};

/// Derived statistics for one candidate solution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageStats {
    /// Instances that received a placement.
    pub placed: usize,
    /// Instances submitted.
    pub total: usize,
    /// Grid cells covered by placements.
    pub covered_cells: usize,
    /// Placeable (powered or protected) cells on the grid.
    pub placeable_cells: usize,
    /// Protected cells covered by placements.
    pub covered_protected: usize,
    /// Protected cells on the grid.
    pub protected_cells: usize,
    /// Placements covering at least one protected cell.
    pub shielded_components: usize,
    /// Mandatory instances that received a placement.
    pub mandatory_placed: usize,
    /// Mandatory instances submitted.
    pub mandatory_total: usize,
}

impl CoverageStats {
    /// Scores a placement set against the grid and the submitted batch.
    pub fn compute(
        grid: &Grid,
        instances: &[ComponentInstance],
        placements: &[Placement],
    ) -> Self {
        let covered_cells = placements.iter().map(|p| p.cells.len()).sum();
        let covered_protected = placements.iter().map(|p| p.protected_hits).sum();
        let shielded_components = placements.iter().filter(|p| p.protected_hits > 0).count();
        let mandatory_total = instances.iter().filter(|i| i.mandatory).count();
        let mandatory_placed = placements
            .iter()
            .filter(|p| {
                instances
                    .iter()
                    .any(|i| i.id == p.instance_id && i.mandatory)
            })
            .count();
        Self {
            placed: placements.len(),
            total: instances.len(),
            covered_cells,
            placeable_cells: grid.placeable_cells(),
            covered_protected,
            protected_cells: grid.protected_cells(),
            shielded_components,
            mandatory_placed,
            mandatory_total,
        }
    }

    /// Ranking key for presenting alternates: more placed, then more
    /// protected coverage, then more cells covered.
    pub fn rank_key(&self) -> (usize, usize, usize) {
        (self.placed, self.covered_protected, self.covered_cells)
    }

    /// Whether every submitted instance was placed.
    pub fn is_complete(&self) -> bool {
        self.placed == self.total
    }
}

/// Renders a report's solutions as a table, one row per strategy outcome.
pub fn render_report_table(report: &SolveReport) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Strategy"),
        Cell::new("Placed"),
        Cell::new("Cells"),
        Cell::new("Protected"),
        Cell::new("Shielded"),
        Cell::new("Budget hit"),
    ]));

    for solution in report.solutions() {
        let stats = &solution.stats;
        table.add_row(Row::new(vec![
            Cell::new(&solution.strategy),
            Cell::new(&format!("{}/{}", stats.placed, stats.total)),
            Cell::new(&format!(
                "{}/{}",
                stats.covered_cells, stats.placeable_cells
            )),
            Cell::new(&format!(
                "{}/{}",
                stats.covered_protected, stats.protected_cells
            )),
            Cell::new(&stats.shielded_components.to_string()),
            Cell::new(if solution.budget_exhausted { "yes" } else { "no" }),
        ]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::CoverageStats;
    use crate::solver::{
        grid::{CellState, Grid},
        instance::ComponentInstance,
        shape::ShapeMask,
        solution::Placement,
    };

    fn unit(id: u32) -> ComponentInstance {
        ComponentInstance::new(
            id,
            format!("unit-{id}"),
            ShapeMask::from_rows(vec![vec![true]]).unwrap(),
        )
    }

    #[test]
    fn compute_tallies_coverage_and_mandatory_counts() {
        let grid = Grid::from_states(vec![
            vec![CellState::Protected, CellState::Powered],
            vec![CellState::Powered, CellState::Blocked],
        ])
        .unwrap();
        let instances = vec![unit(1).mandatory(), unit(2), unit(3)];
        let placements = vec![
            Placement {
                instance_id: 1,
                rotation: 0,
                row: 0,
                col: 0,
                cells: vec![(0, 0)],
                protected_hits: 1,
            },
            Placement {
                instance_id: 2,
                rotation: 0,
                row: 0,
                col: 1,
                cells: vec![(0, 1)],
                protected_hits: 0,
            },
        ];

        let stats = CoverageStats::compute(&grid, &instances, &placements);
        assert_eq!(stats.placed, 2);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.covered_cells, 2);
        assert_eq!(stats.placeable_cells, 3);
        assert_eq!(stats.covered_protected, 1);
        assert_eq!(stats.protected_cells, 1);
        assert_eq!(stats.shielded_components, 1);
        assert_eq!(stats.mandatory_placed, 1);
        assert_eq!(stats.mandatory_total, 1);
        assert!(!stats.is_complete());
    }

    #[test]
    fn rank_key_prefers_placed_then_protection() {
        let more_placed = CoverageStats {
            placed: 3,
            covered_protected: 0,
            ..CoverageStats::default()
        };
        let more_protected = CoverageStats {
            placed: 2,
            covered_protected: 4,
            ..CoverageStats::default()
        };
        assert!(more_placed.rank_key() > more_protected.rank_key());
    }
}
