use serde::{Deserialize, Serialize};
use std::fmt;

//
// ─── DIFFICULTY ───────────────────────────────────────────────────────────────
//

/// Difficulty label attached to a problem.
///
/// The document format only defines `Easy`, `Medium` and `Hard`. Any other
/// label is kept verbatim in `Unrecognized` so it can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unrecognized(String),
}

impl Difficulty {
    /// Parses a label. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::from(label.to_owned())
    }

    /// The literal label, as it appeared in the document.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Unrecognized(raw) => raw,
        }
    }

    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Color family used when rendering this difficulty.
    ///
    /// Unrecognized labels fall through to the `Hard` tone.
    #[must_use]
    pub fn tone(&self) -> DifficultyTone {
        match self {
            Self::Easy => DifficultyTone::Easy,
            Self::Medium => DifficultyTone::Medium,
            Self::Hard | Self::Unrecognized(_) => DifficultyTone::Hard,
        }
    }
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Easy" => Self::Easy,
            "Medium" => Self::Medium,
            "Hard" => Self::Hard,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        match value {
            Difficulty::Unrecognized(raw) => raw,
            known => known.label().to_owned(),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── TONE ─────────────────────────────────────────────────────────────────────
//

/// Text/background color pair for a difficulty badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyTone {
    Easy,
    Medium,
    Hard,
}

impl DifficultyTone {
    #[must_use]
    pub const fn text_color(self) -> &'static str {
        match self {
            Self::Easy => "#16a34a",
            Self::Medium => "#ca8a04",
            Self::Hard => "#dc2626",
        }
    }

    #[must_use]
    pub const fn background_color(self) -> &'static str {
        match self {
            Self::Easy => "#052e17",
            Self::Medium => "#2a2206",
            Self::Hard => "#3b0a0a",
        }
    }
}
