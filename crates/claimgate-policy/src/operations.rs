//! Comparator operations applied to claim values.
//!
//! Each operation variant carries the operand configured by the policy
//! author and compares it against a claim value at evaluation time.
//! Operations are stateless and pure: constructed once when a policy is
//! decoded and reused across any number of concurrent evaluations.
//!
//! # Usage
//!
//! ```ignore
//! use claimgate_policy::Operation;
//!
//! let op: Operation = serde_json::from_str(
//!     r##"{ "Type": "#EqualCaseSensitive", "Value": "reader" }"##,
//! )?;
//! assert!(op.execute(Some("reader")));
//! ```
//!
//! Numeric and date-time comparators parse both sides with explicit fallible
//! helpers. A parse failure on either side fails closed: `execute` returns
//! `false`. [`Operation::validate_operand`] catches unparseable configured
//! operands ahead of time.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use claimgate_core::parse_datetime;

// =============================================================================
// Operation
// =============================================================================

/// A comparator applied to a selected claim value against a configured
/// operand.
///
/// The serialized form carries the `Type` discriminator alongside the
/// configured `Value`; the discriminator is authoritative and round-trips
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Type", rename_all_fields = "PascalCase")]
pub enum Operation {
    /// Ordinal string equality.
    #[serde(rename = "#EqualCaseSensitive")]
    EqualCaseSensitive { value: String },

    /// Case-insensitive string equality.
    #[serde(rename = "#EqualCaseInsensitive")]
    EqualCaseInsensitive { value: String },

    /// Ordinal string inequality.
    #[serde(rename = "#NotEqualCaseSensitive")]
    NotEqualCaseSensitive { value: String },

    /// Case-insensitive string inequality.
    #[serde(rename = "#NotEqualCaseInsensitive")]
    NotEqualCaseInsensitive { value: String },

    /// Numeric equality; trailing zeros do not affect the comparison.
    #[serde(rename = "#EqualNumeric")]
    EqualNumeric { value: String },

    /// Claim value strictly greater than the operand, numerically.
    #[serde(rename = "#GreaterThan")]
    GreaterThan { value: String },

    /// Claim value strictly less than the operand, numerically.
    #[serde(rename = "#LessThan")]
    LessThan { value: String },

    /// Claim value greater than or equal to the operand, numerically.
    #[serde(rename = "#GreaterThanOrEqual")]
    GreaterThanOrEqual { value: String },

    /// Claim value less than or equal to the operand, numerically.
    #[serde(rename = "#LessThanOrEqual")]
    LessThanOrEqual { value: String },

    /// Claim value within `"lower upper"`, boundaries included.
    ///
    /// The operand holds two whitespace-separated numbers.
    #[serde(rename = "#BetweenInclusive")]
    BetweenInclusive { value: String },

    /// Claim value within `"lower upper"`, boundaries excluded.
    #[serde(rename = "#BetweenExclusive")]
    BetweenExclusive { value: String },

    /// The configured operand contains the claim value as a substring.
    ///
    /// The operand is the haystack and the claim value the needle, not the
    /// reverse.
    #[serde(rename = "#Contains")]
    Contains { value: String },

    /// The claim is present; an empty value still counts as present.
    #[serde(rename = "#Exists")]
    Exists {
        #[serde(default)]
        value: String,
    },

    /// Claim value and operand are the same instant.
    #[serde(rename = "#EqualDateTime")]
    EqualDateTime { value: String },

    /// Claim value chronologically after the operand.
    #[serde(rename = "#GreaterThanDateTime")]
    GreaterThanDateTime { value: String },

    /// Claim value chronologically before the operand.
    #[serde(rename = "#LessThanDateTime")]
    LessThanDateTime { value: String },

    /// Claim value at or after the operand.
    #[serde(rename = "#GreaterThanOrEqualDateTime")]
    GreaterThanOrEqualDateTime { value: String },

    /// Claim value at or before the operand.
    #[serde(rename = "#LessThanOrEqualDateTime")]
    LessThanOrEqualDateTime { value: String },

    /// Claim value within two whitespace-separated date-times, boundaries
    /// included. Each bound must be a single token without spaces.
    #[serde(rename = "#BetweenDateTime")]
    BetweenDateTime { value: String },
}

impl Operation {
    /// Apply the comparator to a claim value.
    ///
    /// `lhs` is `None` when the rule selected no claim value; every
    /// comparator returns `false` for it, including [`Operation::Exists`],
    /// which succeeds for any present value (empty string included).
    /// Unparseable numeric or date-time input on either side also returns
    /// `false`.
    #[must_use]
    pub fn execute(&self, lhs: Option<&str>) -> bool {
        let Some(lhs) = lhs else {
            return false;
        };

        match self {
            Self::EqualCaseSensitive { value } => lhs == value,
            Self::EqualCaseInsensitive { value } => lhs.to_lowercase() == value.to_lowercase(),
            Self::NotEqualCaseSensitive { value } => lhs != value,
            Self::NotEqualCaseInsensitive { value } => {
                lhs.to_lowercase() != value.to_lowercase()
            }

            Self::EqualNumeric { value } => {
                numeric_pair(lhs, value).is_some_and(|(l, v)| l == v)
            }
            Self::GreaterThan { value } => numeric_pair(lhs, value).is_some_and(|(l, v)| l > v),
            Self::LessThan { value } => numeric_pair(lhs, value).is_some_and(|(l, v)| l < v),
            Self::GreaterThanOrEqual { value } => {
                numeric_pair(lhs, value).is_some_and(|(l, v)| l >= v)
            }
            Self::LessThanOrEqual { value } => {
                numeric_pair(lhs, value).is_some_and(|(l, v)| l <= v)
            }
            Self::BetweenInclusive { value } => parse_number(lhs)
                .zip(numeric_range(value))
                .is_some_and(|(l, (lower, upper))| l >= lower && l <= upper),
            Self::BetweenExclusive { value } => parse_number(lhs)
                .zip(numeric_range(value))
                .is_some_and(|(l, (lower, upper))| l > lower && l < upper),

            Self::Contains { value } => value.contains(lhs),
            Self::Exists { .. } => true,

            Self::EqualDateTime { value } => {
                datetime_pair(lhs, value).is_some_and(|(l, v)| l == v)
            }
            Self::GreaterThanDateTime { value } => {
                datetime_pair(lhs, value).is_some_and(|(l, v)| l > v)
            }
            Self::LessThanDateTime { value } => {
                datetime_pair(lhs, value).is_some_and(|(l, v)| l < v)
            }
            Self::GreaterThanOrEqualDateTime { value } => {
                datetime_pair(lhs, value).is_some_and(|(l, v)| l >= v)
            }
            Self::LessThanOrEqualDateTime { value } => {
                datetime_pair(lhs, value).is_some_and(|(l, v)| l <= v)
            }
            Self::BetweenDateTime { value } => parse_datetime(lhs)
                .zip(datetime_range(value))
                .is_some_and(|(l, (lower, upper))| l >= lower && l <= upper),
        }
    }

    /// The `Type` discriminator string for this comparator.
    #[must_use]
    pub fn discriminator(&self) -> &'static str {
        match self {
            Self::EqualCaseSensitive { .. } => "#EqualCaseSensitive",
            Self::EqualCaseInsensitive { .. } => "#EqualCaseInsensitive",
            Self::NotEqualCaseSensitive { .. } => "#NotEqualCaseSensitive",
            Self::NotEqualCaseInsensitive { .. } => "#NotEqualCaseInsensitive",
            Self::EqualNumeric { .. } => "#EqualNumeric",
            Self::GreaterThan { .. } => "#GreaterThan",
            Self::LessThan { .. } => "#LessThan",
            Self::GreaterThanOrEqual { .. } => "#GreaterThanOrEqual",
            Self::LessThanOrEqual { .. } => "#LessThanOrEqual",
            Self::BetweenInclusive { .. } => "#BetweenInclusive",
            Self::BetweenExclusive { .. } => "#BetweenExclusive",
            Self::Contains { .. } => "#Contains",
            Self::Exists { .. } => "#Exists",
            Self::EqualDateTime { .. } => "#EqualDateTime",
            Self::GreaterThanDateTime { .. } => "#GreaterThanDateTime",
            Self::LessThanDateTime { .. } => "#LessThanDateTime",
            Self::GreaterThanOrEqualDateTime { .. } => "#GreaterThanOrEqualDateTime",
            Self::LessThanOrEqualDateTime { .. } => "#LessThanOrEqualDateTime",
            Self::BetweenDateTime { .. } => "#BetweenDateTime",
        }
    }

    /// Check that the configured operand parses for this comparator.
    ///
    /// String comparators accept any operand. Numeric, range and date-time
    /// comparators require operands that parse; catching those here keeps
    /// authoring mistakes out of the fail-closed evaluation path.
    ///
    /// # Errors
    ///
    /// Returns an error if the operand does not parse for this comparator.
    pub fn validate_operand(&self) -> Result<(), InvalidOperand> {
        let well_formed = match self {
            Self::EqualCaseSensitive { .. }
            | Self::EqualCaseInsensitive { .. }
            | Self::NotEqualCaseSensitive { .. }
            | Self::NotEqualCaseInsensitive { .. }
            | Self::Contains { .. }
            | Self::Exists { .. } => true,

            Self::EqualNumeric { value }
            | Self::GreaterThan { value }
            | Self::LessThan { value }
            | Self::GreaterThanOrEqual { value }
            | Self::LessThanOrEqual { value } => parse_number(value).is_some(),

            Self::BetweenInclusive { value } | Self::BetweenExclusive { value } => {
                numeric_range(value).is_some()
            }

            Self::EqualDateTime { value }
            | Self::GreaterThanDateTime { value }
            | Self::LessThanDateTime { value }
            | Self::GreaterThanOrEqualDateTime { value }
            | Self::LessThanOrEqualDateTime { value } => parse_datetime(value).is_some(),

            Self::BetweenDateTime { value } => datetime_range(value).is_some(),
        };

        if well_formed {
            Ok(())
        } else {
            Err(InvalidOperand {
                discriminator: self.discriminator(),
                value: self.operand().to_string(),
            })
        }
    }

    fn operand(&self) -> &str {
        match self {
            Self::EqualCaseSensitive { value }
            | Self::EqualCaseInsensitive { value }
            | Self::NotEqualCaseSensitive { value }
            | Self::NotEqualCaseInsensitive { value }
            | Self::EqualNumeric { value }
            | Self::GreaterThan { value }
            | Self::LessThan { value }
            | Self::GreaterThanOrEqual { value }
            | Self::LessThanOrEqual { value }
            | Self::BetweenInclusive { value }
            | Self::BetweenExclusive { value }
            | Self::Contains { value }
            | Self::Exists { value }
            | Self::EqualDateTime { value }
            | Self::GreaterThanDateTime { value }
            | Self::LessThanDateTime { value }
            | Self::GreaterThanOrEqualDateTime { value }
            | Self::LessThanOrEqualDateTime { value }
            | Self::BetweenDateTime { value } => value,
        }
    }
}

/// A configured operand that does not parse for its comparator.
#[derive(Debug, thiserror::Error)]
#[error("Operand {value:?} is not valid for {discriminator}")]
pub struct InvalidOperand {
    /// The comparator's `Type` discriminator.
    pub discriminator: &'static str,

    /// The offending operand.
    pub value: String,
}

// =============================================================================
// Operand Parsing
// =============================================================================

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn numeric_pair(lhs: &str, value: &str) -> Option<(f64, f64)> {
    Some((parse_number(lhs)?, parse_number(value)?))
}

fn numeric_range(value: &str) -> Option<(f64, f64)> {
    let mut parts = value.split_whitespace();
    let lower = parse_number(parts.next()?)?;
    let upper = parse_number(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((lower, upper))
}

fn datetime_pair(lhs: &str, value: &str) -> Option<(OffsetDateTime, OffsetDateTime)> {
    Some((parse_datetime(lhs)?, parse_datetime(value)?))
}

fn datetime_range(value: &str) -> Option<(OffsetDateTime, OffsetDateTime)> {
    let mut parts = value.split_whitespace();
    let lower = parse_datetime(parts.next()?)?;
    let upper = parse_datetime(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((lower, upper))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn op(json: &str) -> Operation {
        serde_json::from_str(json).unwrap()
    }

    // -------------------------------------------------------------------------
    // String Comparators
    // -------------------------------------------------------------------------

    #[test]
    fn test_equal_case_sensitive() {
        let op = Operation::EqualCaseSensitive {
            value: "reader".to_string(),
        };
        assert!(op.execute(Some("reader")));
        assert!(!op.execute(Some("Reader")));
        assert!(!op.execute(Some("writer")));
        assert!(!op.execute(None));
    }

    #[test]
    fn test_equal_case_insensitive() {
        let op = Operation::EqualCaseInsensitive {
            value: "Reader".to_string(),
        };
        assert!(op.execute(Some("reader")));
        assert!(op.execute(Some("READER")));
        assert!(!op.execute(Some("writer")));
    }

    #[test]
    fn test_not_equal_variants() {
        let sensitive = Operation::NotEqualCaseSensitive {
            value: "reader".to_string(),
        };
        assert!(!sensitive.execute(Some("reader")));
        assert!(sensitive.execute(Some("Reader")));

        let insensitive = Operation::NotEqualCaseInsensitive {
            value: "reader".to_string(),
        };
        assert!(!insensitive.execute(Some("Reader")));
        assert!(insensitive.execute(Some("writer")));
    }

    #[test]
    fn test_contains_direction() {
        // The configured operand is the haystack, the claim value the needle.
        let op = Operation::Contains {
            value: "quick brown fox".to_string(),
        };
        assert!(op.execute(Some("brown fox")));
        assert!(!op.execute(Some("green fox")));
        assert!(op.execute(Some("")));
    }

    #[test]
    fn test_exists() {
        let op = Operation::Exists {
            value: String::new(),
        };
        assert!(op.execute(Some("foo")));
        assert!(op.execute(Some("")));
        assert!(!op.execute(None));
    }

    // -------------------------------------------------------------------------
    // Numeric Comparators
    // -------------------------------------------------------------------------

    #[test]
    fn test_equal_numeric_trailing_zeros() {
        let op = Operation::EqualNumeric {
            value: "1.1".to_string(),
        };
        assert!(op.execute(Some("1.10")));
        assert!(!op.execute(Some("1.01")));
    }

    #[test]
    fn test_ordering_comparators() {
        let gt = Operation::GreaterThan {
            value: "5".to_string(),
        };
        assert!(gt.execute(Some("5.1")));
        assert!(!gt.execute(Some("5")));
        assert!(!gt.execute(Some("4.9")));

        let lt = Operation::LessThan {
            value: "5".to_string(),
        };
        assert!(lt.execute(Some("4.9")));
        assert!(!lt.execute(Some("5")));

        let gte = Operation::GreaterThanOrEqual {
            value: "5".to_string(),
        };
        assert!(gte.execute(Some("5")));
        assert!(gte.execute(Some("5.0")));
        assert!(!gte.execute(Some("4.99")));

        let lte = Operation::LessThanOrEqual {
            value: "5".to_string(),
        };
        assert!(lte.execute(Some("5")));
        assert!(!lte.execute(Some("5.01")));
    }

    #[test]
    fn test_between_inclusive_boundaries() {
        let op = Operation::BetweenInclusive {
            value: "1.1 1.2".to_string(),
        };
        assert!(op.execute(Some("1.1")));
        assert!(op.execute(Some("1.2")));
        assert!(op.execute(Some("1.15")));
        assert!(!op.execute(Some("1.05")));
        assert!(!op.execute(Some("1.25")));
    }

    #[test]
    fn test_between_exclusive_boundaries() {
        let op = Operation::BetweenExclusive {
            value: "1.1 1.2".to_string(),
        };
        assert!(!op.execute(Some("1.1")));
        assert!(!op.execute(Some("1.2")));
        assert!(op.execute(Some("1.15")));
    }

    #[test]
    fn test_numeric_parse_failure_fails_closed() {
        let op = Operation::GreaterThan {
            value: "5".to_string(),
        };
        assert!(!op.execute(Some("not-a-number")));

        let bad_operand = Operation::GreaterThan {
            value: "banana".to_string(),
        };
        assert!(!bad_operand.execute(Some("10")));

        let bad_range = Operation::BetweenInclusive {
            value: "1".to_string(),
        };
        assert!(!bad_range.execute(Some("1")));
    }

    #[test]
    fn test_numeric_rejects_non_finite() {
        let op = Operation::GreaterThan {
            value: "inf".to_string(),
        };
        assert!(!op.execute(Some("1")));
    }

    // -------------------------------------------------------------------------
    // Date-Time Comparators
    // -------------------------------------------------------------------------

    #[test]
    fn test_equal_datetime() {
        let op = Operation::EqualDateTime {
            value: "2023-05-15T14:30:00Z".to_string(),
        };
        assert!(op.execute(Some("2023-05-15T14:30:00Z")));
        // Same instant, different offset.
        assert!(op.execute(Some("2023-05-15T16:30:00+02:00")));
        assert!(!op.execute(Some("2023-05-15T14:30:01Z")));
    }

    #[test]
    fn test_datetime_ordering() {
        let gt = Operation::GreaterThanDateTime {
            value: "2023-05-15T00:00:00Z".to_string(),
        };
        assert!(gt.execute(Some("2023-05-16T00:00:00Z")));
        assert!(!gt.execute(Some("2023-05-15T00:00:00Z")));
        assert!(!gt.execute(Some("2023-05-14T00:00:00Z")));

        let gte = Operation::GreaterThanOrEqualDateTime {
            value: "2023-05-15T00:00:00Z".to_string(),
        };
        assert!(gte.execute(Some("2023-05-15T00:00:00Z")));

        let lt = Operation::LessThanDateTime {
            value: "2023-05-15T00:00:00Z".to_string(),
        };
        assert!(lt.execute(Some("2023-05-14T23:59:59Z")));
        assert!(!lt.execute(Some("2023-05-15T00:00:00Z")));

        let lte = Operation::LessThanOrEqualDateTime {
            value: "2023-05-15T00:00:00Z".to_string(),
        };
        assert!(lte.execute(Some("2023-05-15T00:00:00Z")));
    }

    #[test]
    fn test_datetime_accepts_quoted_claim_value() {
        // The claim value may have been produced by a JSON serializer.
        let op = Operation::GreaterThanDateTime {
            value: "2023-05-15T00:00:00Z".to_string(),
        };
        assert!(op.execute(Some("\"2023-05-16T00:00:00Z\"")));
    }

    #[test]
    fn test_datetime_accepts_locale_claim_value() {
        let op = Operation::LessThanDateTime {
            value: "2023-05-15T00:00:00Z".to_string(),
        };
        assert!(op.execute(Some("5/14/2023 11:59:59 PM")));
    }

    #[test]
    fn test_between_datetime_boundaries_included() {
        let op = Operation::BetweenDateTime {
            value: "2023-05-01T00:00:00Z 2023-05-31T00:00:00Z".to_string(),
        };
        assert!(op.execute(Some("2023-05-01T00:00:00Z")));
        assert!(op.execute(Some("2023-05-31T00:00:00Z")));
        assert!(op.execute(Some("2023-05-15T12:00:00Z")));
        assert!(!op.execute(Some("2023-06-01T00:00:00Z")));
    }

    #[test]
    fn test_datetime_parse_failure_fails_closed() {
        let op = Operation::GreaterThanDateTime {
            value: "2023-05-15T00:00:00Z".to_string(),
        };
        assert!(!op.execute(Some("yesterday")));

        let bad_operand = Operation::GreaterThanDateTime {
            value: "whenever".to_string(),
        };
        assert!(!bad_operand.execute(Some("2023-05-16T00:00:00Z")));
    }

    // -------------------------------------------------------------------------
    // Operand Validation
    // -------------------------------------------------------------------------

    #[test]
    fn test_validate_operand_string_comparators() {
        let op = Operation::EqualCaseSensitive {
            value: "anything at all".to_string(),
        };
        assert!(op.validate_operand().is_ok());
    }

    #[test]
    fn test_validate_operand_numeric() {
        assert!(
            Operation::GreaterThan {
                value: "5.5".to_string()
            }
            .validate_operand()
            .is_ok()
        );

        let err = Operation::GreaterThan {
            value: "banana".to_string(),
        }
        .validate_operand()
        .unwrap_err();
        assert_eq!(err.discriminator, "#GreaterThan");
        assert_eq!(err.value, "banana");
    }

    #[test]
    fn test_validate_operand_range() {
        assert!(
            Operation::BetweenInclusive {
                value: "1 2".to_string()
            }
            .validate_operand()
            .is_ok()
        );
        assert!(
            Operation::BetweenInclusive {
                value: "1".to_string()
            }
            .validate_operand()
            .is_err()
        );
        assert!(
            Operation::BetweenInclusive {
                value: "1 2 3".to_string()
            }
            .validate_operand()
            .is_err()
        );
    }

    #[test]
    fn test_validate_operand_datetime() {
        assert!(
            Operation::EqualDateTime {
                value: "2023-05-15T14:30:00Z".to_string()
            }
            .validate_operand()
            .is_ok()
        );
        assert!(
            Operation::EqualDateTime {
                value: "never".to_string()
            }
            .validate_operand()
            .is_err()
        );
        assert!(
            Operation::BetweenDateTime {
                value: "2023-05-01T00:00:00Z 2023-05-31T00:00:00Z".to_string()
            }
            .validate_operand()
            .is_ok()
        );
    }

    // -------------------------------------------------------------------------
    // Serialization
    // -------------------------------------------------------------------------

    #[test]
    fn test_deserialization_dispatches_on_type() {
        let parsed = op(r##"{ "Type": "#Contains", "Value": "quick brown fox" }"##);
        assert_eq!(
            parsed,
            Operation::Contains {
                value: "quick brown fox".to_string()
            }
        );
    }

    #[test]
    fn test_serialization_format() {
        let json = serde_json::to_string(&Operation::EqualCaseSensitive {
            value: "reader".to_string(),
        })
        .unwrap();
        assert_eq!(json, r##"{"Type":"#EqualCaseSensitive","Value":"reader"}"##);
    }

    #[test]
    fn test_unknown_discriminator_is_decode_error() {
        let result: Result<Operation, _> =
            serde_json::from_str(r##"{ "Type": "#Sounds", "Value": "x" }"##);
        assert!(result.is_err());
    }

    #[test]
    fn test_exists_value_optional_in_json() {
        let parsed = op(r##"{ "Type": "#Exists" }"##);
        assert!(matches!(parsed, Operation::Exists { .. }));
    }

    #[test]
    fn test_roundtrip_every_discriminator() {
        let variants = [
            r##"{"Type":"#EqualCaseSensitive","Value":"a"}"##,
            r##"{"Type":"#EqualCaseInsensitive","Value":"a"}"##,
            r##"{"Type":"#NotEqualCaseSensitive","Value":"a"}"##,
            r##"{"Type":"#NotEqualCaseInsensitive","Value":"a"}"##,
            r##"{"Type":"#EqualNumeric","Value":"1"}"##,
            r##"{"Type":"#GreaterThan","Value":"1"}"##,
            r##"{"Type":"#LessThan","Value":"1"}"##,
            r##"{"Type":"#GreaterThanOrEqual","Value":"1"}"##,
            r##"{"Type":"#LessThanOrEqual","Value":"1"}"##,
            r##"{"Type":"#BetweenInclusive","Value":"1 2"}"##,
            r##"{"Type":"#BetweenExclusive","Value":"1 2"}"##,
            r##"{"Type":"#Contains","Value":"abc"}"##,
            r##"{"Type":"#Exists","Value":""}"##,
            r##"{"Type":"#EqualDateTime","Value":"2023-05-15T14:30:00Z"}"##,
            r##"{"Type":"#GreaterThanDateTime","Value":"2023-05-15T14:30:00Z"}"##,
            r##"{"Type":"#LessThanDateTime","Value":"2023-05-15T14:30:00Z"}"##,
            r##"{"Type":"#GreaterThanOrEqualDateTime","Value":"2023-05-15T14:30:00Z"}"##,
            r##"{"Type":"#LessThanOrEqualDateTime","Value":"2023-05-15T14:30:00Z"}"##,
            r##"{"Type":"#BetweenDateTime","Value":"2023-05-01T00:00:00Z 2023-05-31T00:00:00Z"}"##,
        ];

        for json in variants {
            let parsed: Operation = serde_json::from_str(json).unwrap();
            let reserialized = serde_json::to_string(&parsed).unwrap();
            assert_eq!(reserialized, json);

            let doc: serde_json::Value = serde_json::from_str(json).unwrap();
            assert_eq!(doc["Type"].as_str().unwrap(), parsed.discriminator());
        }
    }
}
