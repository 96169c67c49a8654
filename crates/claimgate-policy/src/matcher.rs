//! Claim selection for rule evaluation.
//!
//! A match identifies which claim type a rule inspects and whether that
//! claim's absence is tolerated. Selection is an exact string comparison on
//! the claim type; there is no prefix, wildcard, or hierarchical matching.

use serde::{Deserialize, Serialize};

// =============================================================================
// Match
// =============================================================================

/// Selects the claims a rule inspects.
///
/// The serialized form carries the `Type` discriminator; `#Literal` is the
/// only concrete variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Type", rename_all_fields = "PascalCase")]
pub enum Match {
    /// Selects claims whose type equals `claim_type` exactly.
    #[serde(rename = "#Literal")]
    Literal {
        /// The claim type to select.
        claim_type: String,

        /// Carried for serialization completeness; rule evaluation takes its
        /// comparison operand from the operation, not the match.
        #[serde(default)]
        value: Option<String>,

        /// When `true`, absence of the claim type fails the owning rule;
        /// when `false`, absence passes it vacuously.
        #[serde(default = "default_required")]
        required: bool,
    },
}

fn default_required() -> bool {
    true
}

impl Match {
    /// Create a literal match with no carried value.
    #[must_use]
    pub fn literal(claim_type: impl Into<String>, required: bool) -> Self {
        Self::Literal {
            claim_type: claim_type.into(),
            value: None,
            required,
        }
    }

    /// The claim type this match selects.
    #[must_use]
    pub fn claim_type(&self) -> &str {
        match self {
            Self::Literal { claim_type, .. } => claim_type,
        }
    }

    /// Whether absence of the claim type fails the owning rule.
    #[must_use]
    pub fn required(&self) -> bool {
        match self {
            Self::Literal { required, .. } => *required,
        }
    }

    /// The carried value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Literal { value, .. } => value.as_deref(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
