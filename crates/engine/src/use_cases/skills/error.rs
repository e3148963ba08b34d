//! Skill operation errors.

use arkham_domain::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum SkillError {
    #[error("Unknown skill or characteristic: {0}")]
    UnknownTarget(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
