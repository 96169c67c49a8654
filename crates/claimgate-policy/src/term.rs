//! The recursive boolean expression tree.
//!
//! A term is a boolean-producing node: a rule leaf (one match, one
//! operation) or a logical combinator over child terms. Terms own their
//! children; the whole tree is immutable after construction, so one tree may
//! be evaluated concurrently from any number of threads.

use serde::{Deserialize, Serialize};

use claimgate_core::ClaimSet;

use crate::matcher::Match;
use crate::operations::Operation;

// =============================================================================
// Term
// =============================================================================

/// A node in a policy's boolean expression tree.
///
/// Every variant carries the polarity flag `Eval`; when `false`, the node's
/// computed result is negated before being returned. `Eval` defaults to
/// `true` when absent from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Type", rename_all_fields = "PascalCase")]
pub enum Term {
    /// Leaf: one match selecting claims, one operation comparing them.
    #[serde(rename = "#Rule")]
    Rule {
        #[serde(default = "default_eval")]
        eval: bool,
        match_exp: Match,
        operation_exp: Operation,
    },

    /// Holds when every child holds. An empty child list holds vacuously.
    #[serde(rename = "#LogicalAnd")]
    LogicalAnd {
        #[serde(default = "default_eval")]
        eval: bool,
        terms: Vec<Term>,
    },

    /// Holds when at least one child holds. An empty child list never holds.
    #[serde(rename = "#LogicalOr")]
    LogicalOr {
        #[serde(default = "default_eval")]
        eval: bool,
        terms: Vec<Term>,
    },
}

fn default_eval() -> bool {
    true
}

impl Term {
    /// Create a rule term with default polarity.
    #[must_use]
    pub fn rule(match_exp: Match, operation_exp: Operation) -> Self {
        Self::Rule {
            eval: true,
            match_exp,
            operation_exp,
        }
    }

    /// Create a conjunction term with default polarity.
    #[must_use]
    pub fn logical_and(terms: Vec<Term>) -> Self {
        Self::LogicalAnd { eval: true, terms }
    }

    /// Create a disjunction term with default polarity.
    #[must_use]
    pub fn logical_or(terms: Vec<Term>) -> Self {
        Self::LogicalOr { eval: true, terms }
    }

    /// Return this term with the given polarity.
    #[must_use]
    pub fn with_eval(mut self, polarity: bool) -> Self {
        match &mut self {
            Self::Rule { eval, .. }
            | Self::LogicalAnd { eval, .. }
            | Self::LogicalOr { eval, .. } => *eval = polarity,
        }
        self
    }

    /// Evaluate this term against a claim set.
    ///
    /// Pure and total: absence of a claim type, multi-valued claims and
    /// negation are ordinary outcomes, never errors.
    #[must_use]
    pub fn evaluate(&self, claims: &ClaimSet) -> bool {
        match self {
            Self::Rule {
                eval,
                match_exp,
                operation_exp,
            } => {
                let mut selected = claims.values_of(match_exp.claim_type()).peekable();
                let base = if selected.peek().is_none() {
                    // optional+absent passes, required+absent fails
                    !match_exp.required()
                } else {
                    // inclusive OR across same-typed claims
                    selected.any(|value| operation_exp.execute(Some(value)))
                };
                apply_polarity(*eval, base)
            }
            Self::LogicalAnd { eval, terms } => {
                apply_polarity(*eval, terms.iter().all(|t| t.evaluate(claims)))
            }
            Self::LogicalOr { eval, terms } => {
                apply_polarity(*eval, terms.iter().any(|t| t.evaluate(claims)))
            }
        }
    }
}

fn apply_polarity(eval: bool, base: bool) -> bool {
    if eval { base } else { !base }
}

// =============================================================================
// Tests
// =============================================================================
