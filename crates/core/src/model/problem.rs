use serde::{Deserialize, Serialize};

use crate::model::difficulty::Difficulty;
use crate::model::ids::ProblemId;

/// One link-bearing, difficulty-tagged entry within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub id: ProblemId,
    pub title: String,
    pub difficulty: Difficulty,
    /// Absolute or relative link; not validated.
    pub url: String,
}

impl Problem {
    #[must_use]
    pub fn new(
        id: ProblemId,
        title: impl Into<String>,
        difficulty: Difficulty,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            difficulty,
            url: url.into(),
        }
    }
}
