use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::category::Category;
use crate::model::ids::{CategoryId, ProblemId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DocumentError {
    #[error("{0}")]
    Malformed(String),

    #[error("duplicate category id: {0}")]
    DuplicateCategoryId(CategoryId),

    #[error("duplicate problem id {problem} in category {category}")]
    DuplicateProblemId {
        category: CategoryId,
        problem: ProblemId,
    },
}

impl From<serde_json::Error> for DocumentError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

//
// ─── DOCUMENT ──────────────────────────────────────────────────────────────────
//

/// The whole fetched payload: every category, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemsDocument {
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl ProblemsDocument {
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Parse a JSON body. Id uniqueness is not checked here; see `validate`.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Malformed` when the body does not match the
    /// document shape.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, DocumentError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Check id uniqueness: category ids across the document, problem ids
    /// within each category. A document that fails this still renders.
    ///
    /// # Errors
    ///
    /// Returns the first duplicate found, in document order.
    pub fn validate(&self) -> Result<(), DocumentError> {
        let mut category_ids = HashSet::with_capacity(self.categories.len());
        for category in &self.categories {
            if !category_ids.insert(&category.id) {
                return Err(DocumentError::DuplicateCategoryId(category.id.clone()));
            }

            let mut problem_ids = HashSet::with_capacity(category.problems.len());
            for problem in &category.problems {
                if !problem_ids.insert(&problem.id) {
                    return Err(DocumentError::DuplicateProblemId {
                        category: category.id.clone(),
                        problem: problem.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Categories ascending by `order`; ties keep document order.
    #[must_use]
    pub fn sorted_categories(&self) -> Vec<&Category> {
        let mut sorted: Vec<&Category> = self.categories.iter().collect();
        // `sort_by` is stable. `-0.0` and `0.0` compare equal.
        sorted.sort_by(|a, b| {
            a.sort_key()
                .partial_cmp(&b.sort_key())
                .unwrap_or(Ordering::Equal)
        });
        sorted
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
