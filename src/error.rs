//! Error types for the kirkman library.
//!
//! Every failure is either an input error (an order with no known
//! construction) or a logic error surfaced by the verifier. Nothing here is
//! transient; callers should never retry.

use thiserror::Error;

use crate::construct::ConstructionKind;

/// The main error type for the kirkman library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Order Selection Errors ============
    /// No Kirkman triple system of this order can be built.
    #[error("no Kirkman triple system of order {order}: {reason}")]
    InfeasibleOrder {
        /// The rejected order.
        order: u32,
        /// The violated condition.
        reason: String,
    },

    /// A construction was requested explicitly but does not fit the order.
    #[error("{construction} construction does not apply to order {order}")]
    ConstructionNotApplicable {
        /// The requested order.
        order: u32,
        /// The construction that was forced.
        construction: ConstructionKind,
    },

    /// Invalid or missing configuration.
    #[error("invalid parameters: {message}")]
    InvalidParams {
        /// Description of what is invalid.
        message: String,
    },

    /// The system has not been solved yet.
    #[error("KTS({order}) has not been solved yet")]
    NotSolved {
        /// Order of the unsolved system.
        order: u32,
    },

    // ============ Galois Field Errors ============
    /// The field size is not a prime power.
    #[error("field size {0} is not a prime power (must be p^k for prime p and k >= 1)")]
    NotPrimePower(u32),

    /// No irreducible polynomial could be found for the extension field.
    #[error("no irreducible polynomial available for GF({0})")]
    NoIrreduciblePolynomial(u32),

    // ============ Parameter Search Errors ============
    /// The field has no primitive element (only possible for a broken field).
    #[error("no primitive element found in GF({q})")]
    NoPrimitiveElement {
        /// The field size.
        q: u32,
    },

    /// No primitive element and exponent satisfy 2·α^m = α^t + 1.
    #[error("no primitive element α and exponent m in GF({q}) satisfy 2·α^m = α^{t} + 1")]
    NoDefiningExponent {
        /// The field size.
        q: u32,
        /// The block-repetition parameter (q - 1) / 6.
        t: u32,
    },

    // ============ Verification Errors ============
    /// A parallel class does not cover every point exactly once.
    #[error("day {day} covers {covered} of {expected} points")]
    MissingPoints {
        /// The offending day (1-based).
        day: usize,
        /// Number of distinct points the day covers.
        covered: usize,
        /// Number of points a parallel class must cover.
        expected: usize,
    },

    /// The same triple appears on two days.
    #[error("triple {triple:?} appears on day {first_day} and again on day {second_day}")]
    DuplicateTriple {
        /// The repeated triple, sorted ascending.
        triple: [u32; 3],
        /// First day the triple was seen.
        first_day: usize,
        /// Day of the repeat.
        second_day: usize,
    },

    /// The schedule holds the wrong number of distinct triples.
    #[error("schedule holds {distinct} distinct triples, expected {expected}")]
    TripleCount {
        /// Distinct triples found.
        distinct: usize,
        /// Triples a Steiner triple system of this order has.
        expected: usize,
    },

    /// A pair of points is not covered exactly once.
    #[error("pair {{{first}, {second}}} is covered {count} times, expected exactly once")]
    PairCoverage {
        /// Smaller point of the pair.
        first: u32,
        /// Larger point of the pair.
        second: u32,
        /// Number of triples containing the pair.
        count: usize,
    },
}

/// A specialized `Result` type for kirkman operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `InfeasibleOrder` error.
    #[must_use]
    pub fn infeasible(order: u32, reason: impl Into<String>) -> Self {
        Self::InfeasibleOrder {
            order,
            reason: reason.into(),
        }
    }

    /// Create a new `InvalidParams` error.
    #[must_use]
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }

    /// Whether this error was raised by the verifier.
    #[must_use]
    pub fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            Self::MissingPoints { .. }
                | Self::DuplicateTriple { .. }
                | Self::TripleCount { .. }
                | Self::PairCoverage { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::infeasible(10, "order mod 6 must be 3");
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("mod 6"));

        let err = Error::NoDefiningExponent { q: 13, t: 2 };
        assert!(err.to_string().contains("GF(13)"));
        assert!(err.to_string().contains("α^2"));

        let err = Error::MissingPoints {
            day: 3,
            covered: 14,
            expected: 15,
        };
        assert_eq!(err.to_string(), "day 3 covers 14 of 15 points");

        let err = Error::PairCoverage {
            first: 1,
            second: 2,
            count: 0,
        };
        assert!(err.to_string().starts_with("pair {1, 2}"));
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::TripleCount {
            distinct: 1,
            expected: 2
        }
        .is_verification_failure());
        assert!(!Error::NotPrimePower(6).is_verification_failure());
        assert_eq!(Error::NotPrimePower(6), Error::NotPrimePower(6));
        assert_ne!(Error::NotPrimePower(6), Error::NotPrimePower(10));
    }
}
