use roadmap_core::model::{Difficulty, Problem};
use url::Url;

use crate::vm::keys::SiblingKeys;

const ROW_EVEN_BACKGROUND: &str = "#0a1f2a";
const ROW_ODD_BACKGROUND: &str = "#0b2530";

/// One table row, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemRowVm {
    pub key: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub url: String,
    pub background: &'static str,
    /// Only absolute `http`/`https` links are handed to the OS browser.
    pub is_web_link: bool,
}

impl ProblemRowVm {
    #[must_use]
    pub fn new(index: usize, problem: &Problem) -> Self {
        Self::with_key(problem.id.to_string(), index, problem)
    }

    fn with_key(key: String, index: usize, problem: &Problem) -> Self {
        Self {
            key,
            title: problem.title.clone(),
            difficulty: problem.difficulty.clone(),
            url: problem.url.clone(),
            background: if index % 2 == 1 {
                ROW_ODD_BACKGROUND
            } else {
                ROW_EVEN_BACKGROUND
            },
            is_web_link: is_web_link(&problem.url),
        }
    }
}

fn is_web_link(raw: &str) -> bool {
    Url::parse(raw).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

#[must_use]
pub fn map_problem_rows(problems: &[Problem]) -> Vec<ProblemRowVm> {
    let mut keys = SiblingKeys::default();
    problems
        .iter()
        .enumerate()
        .map(|(index, problem)| {
            ProblemRowVm::with_key(keys.key_for(problem.id.as_str(), index), index, problem)
        })
        .collect()
}
