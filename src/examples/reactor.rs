//! A small demo frontend: a reactor-style component catalog and helpers for
//! building placement batches from it.
//!
//! This is not a real game catalog; it exists so the crate ships a concrete,
//! end-to-end usage of the engine and a home for integration tests.

use crate::{
    error::Result,
    solver::{
        instance::{ComponentInstance, InstanceId},
        shape::ShapeMask,
    },
};

/// The demo component kinds and their footprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// 1x1.
    Vent,
    /// 1x3 bar.
    Pipe,
    /// 2x2 block.
    Cell,
    /// L-tromino.
    Heatsink,
}

impl ComponentKind {
    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::Vent => "vent",
            ComponentKind::Pipe => "pipe",
            ComponentKind::Cell => "cell",
            ComponentKind::Heatsink => "heatsink",
        }
    }

    pub fn shape(&self) -> Result<ShapeMask> {
        match self {
            ComponentKind::Vent => ShapeMask::from_rows(vec![vec![true]]),
            ComponentKind::Pipe => ShapeMask::from_rows(vec![vec![true, true, true]]),
            ComponentKind::Cell => {
                ShapeMask::from_rows(vec![vec![true, true], vec![true, true]])
            }
            ComponentKind::Heatsink => {
                ShapeMask::from_rows(vec![vec![true, false], vec![true, true]])
            }
        }
    }
}

/// Builds an instance list from `(kind, mandatory, needs_protection)`
/// triples, assigning ids by position.
pub fn build_batch(
    entries: &[(ComponentKind, bool, bool)],
) -> Result<Vec<ComponentInstance>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, (kind, mandatory, needs_protection))| {
            let mut instance =
                ComponentInstance::new(index as InstanceId, kind.label(), kind.shape()?);
            if *mandatory {
                instance = instance.mandatory();
            }
            if *needs_protection {
                instance = instance.needs_protection();
            }
            Ok(instance)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{build_batch, ComponentKind};
    use crate::solver::{
        engine::PlacementEngine,
        grid::{CellState, Grid},
        stats::render_report_table,
    };

    #[test]
    fn a_mixed_batch_packs_onto_a_reactor_grid() {
        let _ = tracing_subscriber::fmt::try_init();

        // 6x6, a blocked column gap and a protected corner patch.
        let mut rows = vec![vec![CellState::Powered; 6]; 6];
        for r in 0..6 {
            rows[r][3] = CellState::Blocked;
        }
        rows[0][0] = CellState::Protected;
        rows[0][1] = CellState::Protected;
        rows[1][0] = CellState::Protected;
        let grid = Grid::from_states(rows).unwrap();

        let instances = build_batch(&[
            (ComponentKind::Heatsink, true, true),
            (ComponentKind::Cell, false, false),
            (ComponentKind::Pipe, false, false),
            (ComponentKind::Vent, false, false),
            (ComponentKind::Vent, false, false),
        ])
        .unwrap();

        let report = PlacementEngine::new().solve(&grid, &instances).unwrap();

        assert_eq!(report.primary.stats.placed, 5);
        assert_eq!(report.primary.stats.mandatory_placed, 1);

        // The heatsink demanded protection; all three of its cells must be
        // on the protected patch.
        let heatsink = report
            .primary
            .placements
            .iter()
            .find(|p| p.instance_id == 0)
            .unwrap();
        assert_eq!(heatsink.protected_hits, 3);
        for &(r, c) in &heatsink.cells {
            assert_eq!(grid.state(r, c), CellState::Protected);
        }

        // No placement strays onto the blocked column.
        for placement in &report.primary.placements {
            for &(_, c) in &placement.cells {
                assert_ne!(c, 3);
            }
        }
    }

    #[test]
    fn report_table_renders_one_row_per_solution() {
        let grid = Grid::powered(4, 4).unwrap();
        let instances = build_batch(&[
            (ComponentKind::Pipe, false, false),
            (ComponentKind::Vent, false, false),
        ])
        .unwrap();
        let report = PlacementEngine::new().solve(&grid, &instances).unwrap();

        let table = render_report_table(&report);
        assert!(table.contains("priority order"));
        assert!(table.contains("2/2"));
    }

    #[test]
    fn reports_round_trip_through_json() {
        let grid = Grid::powered(3, 3).unwrap();
        let instances = build_batch(&[(ComponentKind::Heatsink, false, false)]).unwrap();
        let report = PlacementEngine::new().solve(&grid, &instances).unwrap();

        let encoded = serde_json::to_string(&report).unwrap();
        let decoded: crate::solver::engine::SolveReport = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.primary.placements, report.primary.placements);
        assert_eq!(decoded.primary.stats, report.primary.stats);
    }
}
