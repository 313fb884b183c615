mod badge_vm;
mod category_vm;
mod keys;
mod problem_vm;
mod roadmap_vm;

pub use badge_vm::DifficultyBadgeVm;
pub use category_vm::{CategoryHeaderVm, Disclosure};
pub use problem_vm::{ProblemRowVm, map_problem_rows};
pub use roadmap_vm::{CategoryEntryVm, PAGE_SUBTITLE, RoadmapVm};
