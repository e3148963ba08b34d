//! Structured skill keys.
//!
//! A skill is addressed by its main name plus an optional specialization.
//! The sheet/file form is `Main（Spec）` with full-width parentheses; that
//! string only appears at the serialization boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Main skill name that carries individual languages as specializations.
pub const LANGUAGE_SKILL: &str = "语言";

const OPEN: char = '（';
const CLOSE: char = '）';

/// `{main, specialization}` key for a skill value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SkillLabel {
    main: String,
    specialization: Option<String>,
}

impl SkillLabel {
    /// A plain skill such as `侦查`.
    pub fn new(main: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            specialization: None,
        }
    }

    /// A specialized skill such as `语言（英语）`.
    pub fn specialized(main: impl Into<String>, specialization: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            specialization: Some(specialization.into()),
        }
    }

    /// `语言（<language>）`
    pub fn language(language: impl Into<String>) -> Self {
        Self::specialized(LANGUAGE_SKILL, language)
    }

    /// Parse `Main` or `Main（Spec）`. ASCII parentheses are accepted and normalized.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let normalized = input.trim().replace('(', "（").replace(')', "）");
        if normalized.is_empty() {
            return Err(DomainError::parse("Empty skill label"));
        }

        match normalized.find(OPEN) {
            None => {
                if normalized.contains(CLOSE) {
                    return Err(DomainError::parse(format!(
                        "Unbalanced parenthesis in skill label: {normalized}"
                    )));
                }
                Ok(Self::new(normalized))
            }
            Some(open) => {
                let main = normalized[..open].trim();
                let rest = &normalized[open + OPEN.len_utf8()..];
                let spec = rest.strip_suffix(CLOSE).ok_or_else(|| {
                    DomainError::parse(format!("Unterminated specialization: {normalized}"))
                })?;
                let spec = spec.trim();
                if main.is_empty() || spec.is_empty() || spec.contains(OPEN) || spec.contains(CLOSE)
                {
                    return Err(DomainError::parse(format!(
                        "Malformed skill label: {normalized}"
                    )));
                }
                Ok(Self::specialized(main, spec))
            }
        }
    }

    pub fn main(&self) -> &str {
        &self.main
    }

    pub fn specialization(&self) -> Option<&str> {
        self.specialization.as_deref()
    }

    pub fn is_specialized(&self) -> bool {
        self.specialization.is_some()
    }

    /// The language name when this is a `语言（X）` label.
    pub fn language_name(&self) -> Option<&str> {
        if self.main == LANGUAGE_SKILL {
            self.specialization.as_deref()
        } else {
            None
        }
    }
}

impl fmt::Display for SkillLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.specialization {
            Some(spec) => write!(f, "{}{OPEN}{spec}{CLOSE}", self.main),
            None => f.write_str(&self.main),
        }
    }
}

impl FromStr for SkillLabel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SkillLabel {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SkillLabel> for String {
    fn from(value: SkillLabel) -> Self {
        value.to_string()
    }
}
