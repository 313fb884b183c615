mod not_found;
mod roadmap;
mod state;

pub use not_found::NotFoundPage;
pub use roadmap::RoadmapPage;
pub use state::{ViewError, ViewState, view_state_from_resource};

#[cfg(test)]
mod view_smoke;
