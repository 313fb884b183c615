use serde::{Deserialize, Serialize};

use crate::model::ids::CategoryId;
use crate::model::problem::Problem;
use crate::model::progress::CategoryProgress;

/// A named grouping of problems with a sort key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Sort key. Any JSON number; absent or `null` sorts as `0`.
    #[serde(default)]
    pub order: Option<f64>,
    pub problems: Vec<Problem>,
}

impl Category {
    #[must_use]
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        order: Option<f64>,
        problems: Vec<Problem>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            order,
            problems,
        }
    }

    /// The value categories are compared by.
    #[must_use]
    pub fn sort_key(&self) -> f64 {
        self.order.unwrap_or(0.0)
    }

    #[must_use]
    pub fn total_problems(&self) -> usize {
        self.problems.len()
    }

    #[must_use]
    pub fn progress(&self) -> CategoryProgress {
        CategoryProgress::placeholder(self.total_problems())
    }
}
