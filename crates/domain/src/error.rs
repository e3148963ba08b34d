//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all rule operations,
//! enabling consistent error handling without forcing adapters to use String or anyhow.

use thiserror::Error;

use crate::value_objects::DiceParseError;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., age outside every age bracket)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found in a rule table
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Business rule violation
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when domain invariants or constraints are violated:
    /// - Values are outside allowed ranges
    /// - Required table content is missing
    ///
    /// # Example
    /// ```ignore
    /// if AgeBracket::from_age(age).is_none() {
    ///     return Err(DomainError::validation(format!("age {age} is outside 15-89")));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format:
    /// - Unknown attribute names
    /// - Malformed skill labels
    /// - Unrecognized occupation skill shorthand
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<DiceParseError> for DomainError {
    fn from(err: DiceParseError) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("age 12 is outside every bracket");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: age 12 is outside every bracket"
        );
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("Occupation", "宇航员");
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(err.to_string().contains("Occupation"));
        assert!(err.to_string().contains("宇航员"));
    }

    #[test]
    fn test_constraint_error() {
        let err = DomainError::constraint("allocated points exceed budget");
        assert_eq!(
            err.to_string(),
            "Constraint violation: allocated points exceed budget"
        );
    }

    #[test]
    fn test_from_dice_parse_error() {
        let dice_err = DiceParseError::Empty;
        let domain_err: DomainError = dice_err.into();
        assert!(matches!(domain_err, DomainError::Parse(_)));
        assert!(domain_err.to_string().contains("Empty dice formula"));
    }
}
