use roadmap_core::model::{Category, ProblemsDocument};

use crate::vm::keys::SiblingKeys;

pub const PAGE_SUBTITLE: &str =
    "Expand a category to see its problems. Minimal build: progress, favorites and sync are not included yet.";

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryEntryVm {
    pub key: String,
    pub category: Category,
}

/// The loaded page: categories already in display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoadmapVm {
    pub categories: Vec<CategoryEntryVm>,
}

impl RoadmapVm {
    #[must_use]
    pub fn from_document(document: &ProblemsDocument) -> Self {
        let mut keys = SiblingKeys::default();
        let categories = document
            .sorted_categories()
            .into_iter()
            .enumerate()
            .map(|(index, category)| CategoryEntryVm {
                key: keys.key_for(category.id.as_str(), index),
                category: category.clone(),
            })
            .collect();
        Self { categories }
    }
}
