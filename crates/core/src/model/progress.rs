/// Completion summary shown in a category header.
///
/// Completion tracking is not implemented yet: `placeholder` always reports
/// zero completed problems, so the bar renders empty and the count reads
/// `0 / N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryProgress {
    completed: usize,
    total: usize,
}

impl CategoryProgress {
    #[must_use]
    pub const fn placeholder(total: usize) -> Self {
        Self {
            completed: 0,
            total,
        }
    }

    #[must_use]
    pub const fn completed(&self) -> usize {
        self.completed
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Count label, e.g. `0 / 12`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} / {}", self.completed, self.total)
    }

    /// Filled share of the progress bar, in whole percent.
    #[must_use]
    pub const fn fill_percent(&self) -> u8 {
        // TODO: derive from `completed / total` once solved problems are tracked.
        0
    }
}
