use roadmap_core::model::Category;

/// Expand/collapse state of a single category card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded,
}

impl Disclosure {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }

    /// Rotation of the disclosure arrow, in degrees.
    #[must_use]
    pub const fn arrow_rotation(self) -> u16 {
        match self {
            Self::Collapsed => 0,
            Self::Expanded => 180,
        }
    }
}

/// Everything the always-visible card header shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryHeaderVm {
    pub name: String,
    pub progress_label: String,
    pub progress_fill: String,
    pub expanded: bool,
    pub arrow_style: String,
}

impl CategoryHeaderVm {
    #[must_use]
    pub fn new(category: &Category, disclosure: Disclosure) -> Self {
        let progress = category.progress();
        Self {
            name: category.name.clone(),
            progress_label: progress.label(),
            progress_fill: format!("width: {}%;", progress.fill_percent()),
            expanded: disclosure.is_expanded(),
            arrow_style: format!(
                "transform: rotate({}deg); transition: 200ms;",
                disclosure.arrow_rotation()
            ),
        }
    }
}
