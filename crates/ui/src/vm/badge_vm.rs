use roadmap_core::model::Difficulty;

/// UI-ready colors and labels for a difficulty pill.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifficultyBadgeVm {
    pub label: String,
    pub aria_label: String,
    pub text_color: &'static str,
    pub background: &'static str,
}

impl DifficultyBadgeVm {
    /// Inline style for the pill; the border reuses the text color.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "color: {color}; background: {bg}; border: 1px solid {color};",
            color = self.text_color,
            bg = self.background,
        )
    }
}

impl From<&Difficulty> for DifficultyBadgeVm {
    fn from(difficulty: &Difficulty) -> Self {
        if !difficulty.is_recognized() {
            tracing::debug!(label = difficulty.label(), "unrecognized difficulty, using Hard colors");
        }
        let tone = difficulty.tone();
        Self {
            label: difficulty.label().to_owned(),
            aria_label: format!("Difficulty: {}", difficulty.label()),
            text_color: tone.text_color(),
            background: tone.background_color(),
        }
    }
}
