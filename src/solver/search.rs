//! The placement search: candidate enumeration, bounded backtracking in
//! strict and skip-allowed modes, and the greedy fallback pass.
//!
//! All three entry points operate over an instance list that is already in
//! the order placements should be attempted; reordering is the strategy
//! layer's job. The search is fully deterministic: candidate order is fixed
//! by the protected-coverage bias and raw enumeration order, and no
//! randomness is involved anywhere.

use tracing::debug;

use crate::solver::{
    grid::Grid,
    instance::ComponentInstance,
    solution::Placement,
};

/// Tuning knobs for one solve call.
///
/// The defaults bound the exponential worst case of polyomino backtracking;
/// callers with bigger grids or more patience can raise them.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Global cap on recursive search calls per backtracking run. Hitting it
    /// aborts that run and flags the result as budget-exhausted.
    pub iteration_budget: u64,
    /// How many of the best-ranked candidates are tried per instance during
    /// backtracking, to keep the branching factor tractable.
    pub candidate_cap: usize,
    /// Largest instance count strict mode is attempted for.
    pub strict_limit: usize,
    /// Hard cap on mandatory instances; exceeding it is an input error.
    pub mandatory_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            iteration_budget: 75_000,
            candidate_cap: 20,
            strict_limit: 8,
            mandatory_limit: 8,
        }
    }
}

/// What happens when an instance has no feasible candidate at its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipPolicy {
    /// Strict mode: the branch fails and the search backtracks.
    FailBranch,
    /// Skip-allowed mode: the instance is left unplaced and the search moves
    /// on. A skipped instance is never revisited, even if a later backtrack
    /// frees up space; this trades completeness for throughput.
    SkipInstance,
}

/// Counters threaded through a search run.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    pub nodes_visited: u64,
    pub backtracks: u64,
    pub budget_exhausted: bool,
}

/// The set of cells already claimed by committed placements.
///
/// A persistent set: each recursion step works on a cheap updated copy, so
/// backtracking is simply returning to the caller's copy rather than undoing
/// mutations.
pub type Occupancy = im::HashSet<(usize, usize)>;

/// One feasible (rotation, origin) siting for an instance.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub rotation: usize,
    pub row: usize,
    pub col: usize,
    pub cells: Vec<(usize, usize)>,
    pub protected_hits: usize,
}

impl Candidate {
    fn into_placement(self, instance_id: u32) -> Placement {
        Placement {
            instance_id,
            rotation: self.rotation,
            row: self.row,
            col: self.col,
            cells: self.cells,
            protected_hits: self.protected_hits,
        }
    }
}

/// Enumerates every feasible candidate for `instance` against the current
/// occupancy.
///
/// Feasibility is all-or-nothing: every filled cell must be in bounds,
/// placeable for this instance (protected-only when it needs protection),
/// and free of other placements.
///
/// With `protected_bias` set, candidates covering more protected cells come
/// first; ties keep raw enumeration order (rotation ascending, then row,
/// then column). Without it the raw order is returned untouched.
pub fn enumerate_candidates(
    grid: &Grid,
    instance: &ComponentInstance,
    occupancy: &Occupancy,
    protected_bias: bool,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for (rotation, mask) in instance.shape.rotations() {
        if mask.rows() > grid.rows() || mask.cols() > grid.cols() {
            continue;
        }
        for row in 0..=(grid.rows() - mask.rows()) {
            'origin: for col in 0..=(grid.cols() - mask.cols()) {
                let cells = mask.occupied_cells(row, col);
                let mut protected_hits = 0;
                for &(r, c) in &cells {
                    if !grid.is_placeable(r, c, instance.needs_protection)
                        || occupancy.contains(&(r, c))
                    {
                        continue 'origin;
                    }
                    if grid.is_protected(r, c) {
                        protected_hits += 1;
                    }
                }
                candidates.push(Candidate {
                    rotation,
                    row,
                    col,
                    cells,
                    protected_hits,
                });
            }
        }
    }

    if protected_bias {
        // Stable sort keeps enumeration order among equally-scored candidates.
        candidates.sort_by_key(|c| std::cmp::Reverse(c.protected_hits));
    }
    candidates
}

/// The parameterized search over one ordered instance list.
///
/// Strict mode, skip-allowed mode, and the greedy fallback all share this
/// struct; the mode differences are the [`SkipPolicy`] parameter and which
/// entry point is called.
pub struct PlacementSearch<'a> {
    grid: &'a Grid,
    config: &'a SearchConfig,
    protected_bias: bool,
}

impl<'a> PlacementSearch<'a> {
    pub fn new(grid: &'a Grid, config: &'a SearchConfig, protected_bias: bool) -> Self {
        Self {
            grid,
            config,
            protected_bias,
        }
    }

    /// Depth-first backtracking over `instances`, starting from an existing
    /// occupancy (non-empty when optional instances are placed on top of a
    /// committed mandatory set).
    ///
    /// Under [`SkipPolicy::FailBranch`] this returns `Some` only if every
    /// instance was placed. Under [`SkipPolicy::SkipInstance`] it returns
    /// `Some` with whatever subset it managed, unless the budget ran out
    /// before reaching the end of the list.
    pub fn backtrack(
        &self,
        instances: &[ComponentInstance],
        skip_policy: SkipPolicy,
        occupancy: Occupancy,
        stats: &mut SearchStats,
    ) -> Option<Vec<Placement>> {
        let mut placements = Vec::with_capacity(instances.len());
        if self.descend(instances, 0, occupancy, &mut placements, skip_policy, stats) {
            Some(placements)
        } else {
            None
        }
    }

    fn descend(
        &self,
        instances: &[ComponentInstance],
        index: usize,
        occupancy: Occupancy,
        placements: &mut Vec<Placement>,
        skip_policy: SkipPolicy,
        stats: &mut SearchStats,
    ) -> bool {
        stats.nodes_visited += 1;
        if stats.nodes_visited > self.config.iteration_budget {
            if !stats.budget_exhausted {
                debug!(
                    nodes = stats.nodes_visited,
                    "iteration budget exhausted, aborting search"
                );
            }
            stats.budget_exhausted = true;
            return false;
        }

        let Some(instance) = instances.get(index) else {
            return true;
        };

        let candidates = enumerate_candidates(self.grid, instance, &occupancy, self.protected_bias);

        if candidates.is_empty() {
            return match skip_policy {
                SkipPolicy::FailBranch => false,
                SkipPolicy::SkipInstance => self.descend(
                    instances,
                    index + 1,
                    occupancy,
                    placements,
                    skip_policy,
                    stats,
                ),
            };
        }

        for candidate in candidates.into_iter().take(self.config.candidate_cap) {
            let mut next_occupancy = occupancy.clone();
            for &cell in &candidate.cells {
                next_occupancy.insert(cell);
            }
            placements.push(candidate.into_placement(instance.id));

            if self.descend(
                instances,
                index + 1,
                next_occupancy,
                placements,
                skip_policy,
                stats,
            ) {
                return true;
            }

            placements.pop();
            stats.backtracks += 1;
            if stats.budget_exhausted {
                // Unwind the whole run without trying siblings.
                return false;
            }
        }

        false
    }

    /// Single-pass greedy placement: each instance takes its best candidate
    /// immediately, with no backtracking. Instances with no candidate are
    /// skipped; the rest of the batch still gets its attempt.
    ///
    /// Returns the placements plus the occupancy they claimed, so a caller
    /// can continue placing another group on what remains.
    pub fn greedy(
        &self,
        instances: &[ComponentInstance],
        mut occupancy: Occupancy,
    ) -> (Vec<Placement>, Occupancy) {
        let mut placements = Vec::new();
        for instance in instances {
            let candidates =
                enumerate_candidates(self.grid, instance, &occupancy, self.protected_bias);
            let Some(best) = candidates.into_iter().next() else {
                debug!(id = instance.id, label = %instance.label, "no feasible candidate, greedy skip");
                continue;
            };
            for &cell in &best.cells {
                occupancy.insert(cell);
            }
            placements.push(best.into_placement(instance.id));
        }
        (placements, occupancy)
    }
}
