//! Instance-ordering heuristics: deterministic reorderings of the
//! priority list that the strategies feed to the search engine.

use crate::solver::instance::ComponentInstance;

/// A strategy for deciding which order instances are attempted in.
///
/// Implementations must be deterministic reorderings of the input: the same
/// instance list always produces the same order. Random shuffles would make
/// solve results irreproducible and are deliberately unsupported.
pub trait InstanceOrdering {
    /// Returns a reordered copy of `instances`.
    ///
    /// The input order is the caller's priority order; ties in whatever key
    /// an implementation sorts by must preserve it.
    fn order(&self, instances: &[ComponentInstance]) -> Vec<ComponentInstance>;
}

/// Keeps the caller-supplied priority order untouched.
pub struct PriorityOrder;

impl InstanceOrdering for PriorityOrder {
    fn order(&self, instances: &[ComponentInstance]) -> Vec<ComponentInstance> {
        instances.to_vec()
    }
}

/// Largest shapes first: big footprints claim space before the grid
/// fragments, which tends to maximize protected-cell coverage.
pub struct LargestFirst;

impl InstanceOrdering for LargestFirst {
    fn order(&self, instances: &[ComponentInstance]) -> Vec<ComponentInstance> {
        let mut ordered = instances.to_vec();
        // Stable: equal sizes keep priority order.
        ordered.sort_by_key(|i| std::cmp::Reverse(i.shape.filled_count()));
        ordered
    }
}

/// Smallest shapes first: many small placements tend to maximize the count
/// of components touching a protected cell.
pub struct SmallestFirst;

impl InstanceOrdering for SmallestFirst {
    fn order(&self, instances: &[ComponentInstance]) -> Vec<ComponentInstance> {
        let mut ordered = instances.to_vec();
        ordered.sort_by_key(|i| i.shape.filled_count());
        ordered
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{InstanceOrdering, LargestFirst, PriorityOrder, SmallestFirst};
    use crate::solver::{instance::ComponentInstance, shape::ShapeMask};

    fn sized(id: u32, cells: usize) -> ComponentInstance {
        ComponentInstance::new(
            id,
            format!("sized-{id}"),
            ShapeMask::from_rows(vec![vec![true; cells]]).unwrap(),
        )
    }

    #[test]
    fn priority_order_is_the_identity() {
        let instances = vec![sized(1, 2), sized(2, 1), sized(3, 3)];
        let ids: Vec<u32> = PriorityOrder
            .order(&instances)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn size_orderings_are_stable_on_ties() {
        let instances = vec![sized(1, 2), sized(2, 3), sized(3, 2), sized(4, 1)];

        let largest: Vec<u32> = LargestFirst
            .order(&instances)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(largest, vec![2, 1, 3, 4]);

        let smallest: Vec<u32> = SmallestFirst
            .order(&instances)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(smallest, vec![4, 1, 3, 2]);
    }
}
