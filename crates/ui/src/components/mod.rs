mod category_card;
mod difficulty_badge;
mod problem_table;

pub use category_card::CategoryCard;
pub use difficulty_badge::DifficultyBadge;
pub use problem_table::ProblemTable;

#[cfg(test)]
pub(crate) use category_card::CategoryCardTestHandles;

#[cfg(test)]
mod render_smoke;
