//! Claims describing an authenticated principal.
//!
//! A claim is an immutable (type, value) attribute pair produced upstream by
//! token validation. A principal may carry several claims with the same type
//! (multi-valued attributes such as repeated `roles` claims), so selection by
//! type yields zero or more values.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

// =============================================================================
// Claim
// =============================================================================

/// A single (type, value) attribute pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// Claim type, e.g. `"roles"` or `"http://schemas.../nameidentifier"`.
    pub claim_type: String,

    /// Claim value.
    pub value: String,
}

impl Claim {
    /// Create a new claim.
    #[must_use]
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }

    /// Parse a claim from a `type=value` pair.
    ///
    /// The value may itself contain `=`; only the first one splits.
    ///
    /// # Errors
    ///
    /// Returns an error if the input has no `=` or an empty type.
    pub fn parse_pair(input: &str) -> Result<Self> {
        let (claim_type, value) = input
            .split_once('=')
            .ok_or_else(|| CoreError::invalid_claim(format!("missing '=' in {input:?}")))?;

        if claim_type.is_empty() {
            return Err(CoreError::invalid_claim(format!(
                "empty claim type in {input:?}"
            )));
        }

        Ok(Self::new(claim_type, value))
    }
}

// =============================================================================
// Claim Set
// =============================================================================

/// An ordered, immutable collection of claims.
///
/// Built once per request from the authenticated principal and handed to
/// policy evaluation; never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet(Vec<Claim>);

impl ClaimSet {
    /// Create a claim set from a list of claims.
    #[must_use]
    pub fn new(claims: Vec<Claim>) -> Self {
        Self(claims)
    }

    /// Create a claim set from (type, value) pairs.
    #[must_use]
    pub fn from_pairs<I, T, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, V)>,
        T: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(t, v)| Claim::new(t, v))
                .collect(),
        )
    }

    /// Decode a claim set from a JSON array of claims.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid claim array.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Values of every claim whose type equals `claim_type` exactly.
    ///
    /// Matching is an exact string comparison; there is no prefix, wildcard,
    /// or hierarchical matching.
    pub fn values_of<'a>(&'a self, claim_type: &'a str) -> impl Iterator<Item = &'a str> {
        self.0
            .iter()
            .filter(move |c| c.claim_type == claim_type)
            .map(|c| c.value.as_str())
    }

    /// Iterate over all claims.
    pub fn iter(&self) -> std::slice::Iter<'_, Claim> {
        self.0.iter()
    }

    /// Number of claims in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set holds no claims.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Claim> for ClaimSet {
    fn from_iter<I: IntoIterator<Item = Claim>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ClaimSet {
    type Item = &'a Claim;
    type IntoIter = std::slice::Iter<'a, Claim>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
