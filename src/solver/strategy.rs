//! Named solve strategies.
//!
//! A strategy is nothing more than parameters for the one search engine: an
//! instance ordering plus whether candidate ranking prefers protected cells.
//! The multi-strategy explorer in the engine calls the same search once per
//! strategy rather than maintaining near-duplicate search code paths.

use crate::solver::heuristics::ordering::{
    InstanceOrdering, LargestFirst, PriorityOrder, SmallestFirst,
};

pub struct Strategy {
    /// Shown to users when presenting alternate solutions.
    pub label: &'static str,
    pub ordering: Box<dyn InstanceOrdering>,
    /// Whether candidates covering more protected cells are tried first.
    pub protected_bias: bool,
}

impl Strategy {
    pub fn new(
        label: &'static str,
        ordering: Box<dyn InstanceOrdering>,
        protected_bias: bool,
    ) -> Self {
        Self {
            label,
            ordering,
            protected_bias,
        }
    }
}

/// The built-in strategy set, in presentation priority order.
///
/// The first entry is the primary strategy; the rest explore alternative
/// orderings of the same deterministic engine.
pub fn default_strategies() -> Vec<Strategy> {
    vec![
        Strategy::new("priority order", Box::new(PriorityOrder), true),
        Strategy::new("pack ignoring protection", Box::new(PriorityOrder), false),
        Strategy::new("largest shapes first", Box::new(LargestFirst), true),
        Strategy::new("smallest shapes first", Box::new(SmallestFirst), true),
    ]
}

#[cfg(test)]
mod tests {
    use super::default_strategies;

    #[test]
    fn primary_strategy_respects_priority_and_protection() {
        let strategies = default_strategies();
        assert_eq!(strategies.len(), 4);
        assert_eq!(strategies[0].label, "priority order");
        assert!(strategies[0].protected_bias);
        assert!(!strategies[1].protected_bias);
    }
}
