//! Error types for range pattern expansion.

use thiserror::Error;

/// Errors that abort a pattern expansion.
///
/// Expansion is all-or-nothing: any of these means no URL list is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The token's start sorts after its end in the token's alphabet.
    #[error("invalid range {token}: start '{start}' is after end '{end}'")]
    RangeOrder {
        /// Full token text, e.g. `[5-3]`.
        token: String,
        /// Literal start bound (may be empty).
        start: String,
        /// Literal end bound.
        end: String,
    },

    /// A letter bound longer than one letter has no alphabet position.
    #[error("invalid range {token}: bound '{bound}' must be a single letter")]
    InvalidBound {
        /// Full token text.
        token: String,
        /// The offending bound.
        bound: String,
    },

    /// A digit bound that does not fit in 64 bits.
    #[error("invalid range {token}: number '{value}' is too large")]
    NumberOutOfRange {
        /// Full token text.
        token: String,
        /// The offending digits.
        value: String,
    },
}

impl PatternError {
    /// Creates a `RangeOrder` error.
    #[must_use]
    pub fn range_order(token: &str, start: &str, end: &str) -> Self {
        Self::RangeOrder {
            token: token.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Creates an `InvalidBound` error.
    #[must_use]
    pub fn invalid_bound(token: &str, bound: &str) -> Self {
        Self::InvalidBound {
            token: token.to_string(),
            bound: bound.to_string(),
        }
    }

    /// Creates a `NumberOutOfRange` error.
    #[must_use]
    pub fn number_out_of_range(token: &str, value: &str) -> Self {
        Self::NumberOutOfRange {
            token: token.to_string(),
            value: value.to_string(),
        }
    }
}
