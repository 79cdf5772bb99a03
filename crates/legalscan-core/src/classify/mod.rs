pub mod domain;
pub mod engine;
pub mod extract;
pub mod scoring;

pub use domain::{determine_domain, domain_scores, DomainScore, DomainScoreTable};
pub use engine::{extract, split_lines};
pub use extract::MatchPolicy;
