mod category;
mod difficulty;
mod document;
mod ids;
mod problem;
mod progress;

pub use ids::{CategoryId, ProblemId};

pub use category::Category;
pub use difficulty::{Difficulty, DifficultyTone};
pub use document::{DocumentError, ProblemsDocument};
pub use problem::Problem;
pub use progress::CategoryProgress;
