//! The policy root: a named handle for a term tree.

use serde::{Deserialize, Serialize};

use claimgate_core::ClaimSet;

use crate::operations::InvalidOperand;
use crate::term::Term;

// =============================================================================
// Policy
// =============================================================================

/// A named authorization rule tree with one root term.
///
/// A policy is constructed once — programmatically or by decoding a JSON
/// document — and is read-only afterwards; it is evaluated repeatedly, once
/// per incoming request, against a different claim set each time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Policy {
    /// Identifier used by callers for logging and tracing.
    pub id: String,

    /// Root of the term tree.
    pub evaluation_exp: Term,
}

impl Policy {
    /// Create a policy from an id and a root term.
    #[must_use]
    pub fn new(id: impl Into<String>, evaluation_exp: Term) -> Self {
        Self {
            id: id.into(),
            evaluation_exp,
        }
    }

    /// Evaluate the policy against a claim set.
    ///
    /// `true` means the claims satisfy the policy; the caller decides what a
    /// `false` turns into (typically an authorization rejection). This is
    /// the engine's entire outward decision surface.
    #[must_use]
    pub fn evaluate(&self, claims: &ClaimSet) -> bool {
        let allowed = self.evaluation_exp.evaluate(claims);
        tracing::debug!(policy_id = %self.id, allowed, "policy evaluated");
        allowed
    }

    /// Decode a policy from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns the decode error for malformed JSON, a missing required
    /// field, or an unrecognized `Type` discriminator. A policy that fails
    /// to decode must not be replaced by a default; surface the error
    /// before any request is evaluated.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Encode the policy as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Encode the policy as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Validate the policy for authoring mistakes.
    ///
    /// Checks that the id is non-empty, combinators have children, matches
    /// name a claim type, and numeric/date-time operands parse. These are
    /// authoring-time failures, distinct from an evaluation returning
    /// `false`.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, walking the tree depth-first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingId);
        }
        Self::validate_term(&self.evaluation_exp)
    }

    fn validate_term(term: &Term) -> Result<(), ValidationError> {
        match term {
            Term::Rule {
                match_exp,
                operation_exp,
                ..
            } => {
                if match_exp.claim_type().is_empty() {
                    return Err(ValidationError::MissingClaimType);
                }
                operation_exp.validate_operand()?;
                Ok(())
            }
            Term::LogicalAnd { terms, .. } => {
                if terms.is_empty() {
                    return Err(ValidationError::EmptyCombinator("#LogicalAnd"));
                }
                terms.iter().try_for_each(Self::validate_term)
            }
            Term::LogicalOr { terms, .. } => {
                if terms.is_empty() {
                    return Err(ValidationError::EmptyCombinator("#LogicalOr"));
                }
                terms.iter().try_for_each(Self::validate_term)
            }
        }
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Errors that can occur during policy validation.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The policy id is empty.
    #[error("Policy id must not be empty")]
    MissingId,

    /// A match selects the empty claim type.
    #[error("Match has an empty claim type")]
    MissingClaimType,

    /// A combinator has no child terms.
    #[error("{0} has no child terms")]
    EmptyCombinator(&'static str),

    /// A configured operand does not parse for its comparator.
    #[error(transparent)]
    Operand(#[from] InvalidOperand),
}

// =============================================================================
// Tests
// =============================================================================
