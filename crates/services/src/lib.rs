#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod loader;
pub mod sources;

pub use config::SourceConfig;
pub use error::{SourceConfigError, SourceError};
pub use loader::{LoadFailure, LoadOutcome, ProblemsLoader};
pub use sources::{
    FileProblemsSource, HttpProblemsSource, ProblemsSource, StaticProblemsSource, StaticResponse,
};

pub use reqwest::StatusCode;
