//! The orchestration layer: input validation, the strict → skip-allowed →
//! greedy escalation policy, mandatory-instance handling, and the
//! multi-strategy explorer that scores, deduplicates, and ranks solutions.
//!
//! No grid or shape logic lives here; this module only coordinates the
//! search in `solver::search` and assembles the final report.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    error::{Result, SolveError},
    solver::{
        grid::Grid,
        instance::ComponentInstance,
        search::{Occupancy, PlacementSearch, SearchConfig, SearchStats, SkipPolicy},
        solution::{PlacedSolution, Placement},
        stats::CoverageStats,
        strategy::{default_strategies, Strategy},
    },
};

/// The full outcome of one solve call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveReport {
    /// The solution to present by default.
    pub primary: PlacedSolution,
    /// Unique alternate solutions from the other strategies, ranked best
    /// first.
    pub alternates: Vec<PlacedSolution>,
    /// Whether any strategy run hit its iteration budget.
    pub budget_exhausted: bool,
}

impl SolveReport {
    /// The primary solution followed by the alternates.
    pub fn solutions(&self) -> impl Iterator<Item = &PlacedSolution> {
        std::iter::once(&self.primary).chain(self.alternates.iter())
    }
}

/// The main entry point for solving placement batches.
///
/// The engine is stateless apart from its configuration: every call owns its
/// occupancy set and instance copies, so independent solves may run
/// concurrently against the same read-only grid.
pub struct PlacementEngine {
    config: SearchConfig,
}

impl PlacementEngine {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Solves one batch: validates inputs, runs the strategy set, scores and
    /// deduplicates the outcomes.
    ///
    /// Partial placement and budget exhaustion are reported through the
    /// returned statistics and flags, not as errors; only the
    /// input-validation class fails the call.
    pub fn solve(&self, grid: &Grid, instances: &[ComponentInstance]) -> Result<SolveReport> {
        if instances.is_empty() {
            return Err(SolveError::NothingToPlace.into());
        }
        if grid.placeable_cells() == 0 {
            return Err(SolveError::NoPoweredCells.into());
        }
        let mandatory_count = instances.iter().filter(|i| i.mandatory).count();
        if mandatory_count > self.config.mandatory_limit {
            return Err(SolveError::MandatoryLimitExceeded {
                limit: self.config.mandatory_limit,
                actual: mandatory_count,
            }
            .into());
        }

        // A single instance admits no alternative orderings, so exploring
        // the other strategies would only produce duplicates.
        let strategies: Vec<Strategy> = if instances.len() == 1 {
            default_strategies().into_iter().take(1).collect()
        } else {
            default_strategies()
        };

        let mut solutions: Vec<PlacedSolution> = Vec::with_capacity(strategies.len());
        for strategy in &strategies {
            let ordered = strategy.ordering.order(instances);
            let solution = self.run_strategy(grid, instances, &ordered, strategy);
            info!(
                strategy = strategy.label,
                placed = solution.stats.placed,
                total = solution.stats.total,
                budget_exhausted = solution.budget_exhausted,
                "strategy finished"
            );
            solutions.push(solution);
        }

        Ok(Self::assemble_report(solutions))
    }

    /// Runs one strategy over its reordered instance list and scores the
    /// result against the original batch.
    fn run_strategy(
        &self,
        grid: &Grid,
        instances: &[ComponentInstance],
        ordered: &[ComponentInstance],
        strategy: &Strategy,
    ) -> PlacedSolution {
        let search = PlacementSearch::new(grid, &self.config, strategy.protected_bias);
        let mut budget_exhausted = false;

        let mandatory: Vec<ComponentInstance> =
            ordered.iter().filter(|i| i.mandatory).cloned().collect();
        let optional: Vec<ComponentInstance> =
            ordered.iter().filter(|i| !i.mandatory).cloned().collect();

        let mut placements = if mandatory.is_empty() {
            self.escalate(&search, ordered, Occupancy::new(), &mut budget_exhausted)
                .0
        } else {
            self.place_with_mandatory(&search, &mandatory, &optional, &mut budget_exhausted)
        };

        // Present placements in the caller's priority order regardless of
        // the order the strategy attempted them in.
        placements.sort_by_key(|p| {
            instances
                .iter()
                .position(|i| i.id == p.instance_id)
                .unwrap_or(usize::MAX)
        });

        let stats = CoverageStats::compute(grid, instances, &placements);
        PlacedSolution {
            strategy: strategy.label.to_string(),
            placements,
            stats,
            budget_exhausted,
        }
    }

    /// The escalation ladder: strict backtracking when the list is small
    /// enough, then skip-allowed backtracking, then the greedy pass. Each
    /// tier gets a fresh iteration budget; exhausting one tier triggers the
    /// next rather than failing the call.
    fn escalate(
        &self,
        search: &PlacementSearch<'_>,
        instances: &[ComponentInstance],
        occupancy: Occupancy,
        budget_exhausted: &mut bool,
    ) -> (Vec<Placement>, Occupancy) {
        if instances.is_empty() {
            return (Vec::new(), occupancy);
        }

        if instances.len() <= self.config.strict_limit {
            let mut stats = SearchStats::default();
            if let Some(placements) = search.backtrack(
                instances,
                SkipPolicy::FailBranch,
                occupancy.clone(),
                &mut stats,
            ) {
                let occupied = Self::claim(occupancy, &placements);
                return (placements, occupied);
            }
            *budget_exhausted |= stats.budget_exhausted;
            debug!(
                nodes = stats.nodes_visited,
                backtracks = stats.backtracks,
                "strict mode found no complete placement, falling back"
            );
        }

        let mut stats = SearchStats::default();
        if let Some(placements) = search.backtrack(
            instances,
            SkipPolicy::SkipInstance,
            occupancy.clone(),
            &mut stats,
        ) {
            *budget_exhausted |= stats.budget_exhausted;
            let occupied = Self::claim(occupancy, &placements);
            return (placements, occupied);
        }
        *budget_exhausted |= stats.budget_exhausted;
        debug!("skip-allowed mode exhausted its budget, falling back to greedy");

        search.greedy(instances, occupancy)
    }

    /// Mandatory policy: strict-solve the mandatory subset first, then fit
    /// the optional subset around it. If the mandatory subset cannot be
    /// fully placed even by backtracking, degrade to greedy for both groups
    /// and accept partial mandatory coverage.
    fn place_with_mandatory(
        &self,
        search: &PlacementSearch<'_>,
        mandatory: &[ComponentInstance],
        optional: &[ComponentInstance],
        budget_exhausted: &mut bool,
    ) -> Vec<Placement> {
        let mut stats = SearchStats::default();
        let strict_mandatory = search.backtrack(
            mandatory,
            SkipPolicy::FailBranch,
            Occupancy::new(),
            &mut stats,
        );
        *budget_exhausted |= stats.budget_exhausted;

        match strict_mandatory {
            Some(mut placements) => {
                let occupancy = Self::claim(Occupancy::new(), &placements);
                let (optional_placements, _) =
                    self.escalate(search, optional, occupancy, budget_exhausted);
                placements.extend(optional_placements);
                placements
            }
            None => {
                debug!("mandatory subset could not be fully placed, degrading to greedy");
                let (mut placements, occupancy) = search.greedy(mandatory, Occupancy::new());
                let (optional_placements, _) = search.greedy(optional, occupancy);
                placements.extend(optional_placements);
                placements
            }
        }
    }

    fn claim(mut occupancy: Occupancy, placements: &[Placement]) -> Occupancy {
        for placement in placements {
            for &cell in &placement.cells {
                occupancy.insert(cell);
            }
        }
        occupancy
    }

    /// Deduplicates by footprint and ranks: the primary is the first
    /// strategy's non-empty result, alternates follow best-score first.
    fn assemble_report(solutions: Vec<PlacedSolution>) -> SolveReport {
        let budget_exhausted = solutions.iter().any(|s| s.budget_exhausted);

        let mut unique: Vec<PlacedSolution> = Vec::with_capacity(solutions.len());
        for solution in solutions {
            if !unique.iter().any(|seen| seen.same_footprint(&solution)) {
                unique.push(solution);
            }
        }

        let primary_index = unique
            .iter()
            .position(|s| !s.placements.is_empty())
            .unwrap_or(0);
        let primary = unique.remove(primary_index);

        let mut alternates = unique;
        alternates.sort_by_key(|s| std::cmp::Reverse(s.stats.rank_key()));

        SolveReport {
            primary,
            alternates,
            budget_exhausted,
        }
    }
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self::new()
    }
}
