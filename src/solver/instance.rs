//! Component instances: the placeable units submitted to the solver.

use serde::{Deserialize, Serialize};

use crate::solver::shape::ShapeMask;

pub type InstanceId = u32;

/// One placeable unit.
///
/// Priority is positional: an instance's rank is its index in the slice the
/// caller hands to the engine, lower index meaning higher priority. Instances
/// are constructed fresh per solve call and consumed read-only by the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentInstance {
    pub id: InstanceId,
    pub label: String,
    pub shape: ShapeMask,
    /// Must be placed for the batch to count as fully satisfied.
    #[serde(default)]
    pub mandatory: bool,
    /// Only protected cells are acceptable placements for this instance.
    #[serde(default)]
    pub needs_protection: bool,
}

impl ComponentInstance {
    pub fn new(id: InstanceId, label: impl Into<String>, shape: ShapeMask) -> Self {
        Self {
            id,
            label: label.into(),
            shape,
            mandatory: false,
            needs_protection: false,
        }
    }

    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    pub fn needs_protection(mut self) -> Self {
        self.needs_protection = true;
        self
    }
}
