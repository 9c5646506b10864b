//! Failure kinds shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised by polynomial, field and code operations.
///
/// No operation retries internally: each variant ends the current call and
/// leaves the decision to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// `a * x ≡ b (mod modulus)` has no solution.
    ///
    /// Only reachable when the modulus is not prime.
    #[error("cannot solve {a} * x = {b} (mod {modulus})")]
    UnsolvableEquation { a: u64, b: u64, modulus: u64 },

    /// The polynomial congruence passed to `expanded_gcd` has no solution.
    #[error("polynomial congruence has no solution")]
    UnsolvablePolynomialEquation,

    /// Division by the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,

    /// An algorithm reached a state its preconditions rule out, typically
    /// because `Zp` is not prime or a supplied modulus/primitive is not what
    /// it claims to be.
    #[error("algorithmic invariant violated: {0}")]
    InvariantViolation(String),

    /// A caller-supplied argument was rejected before any work was done.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation exists in the interface but has no implementation.
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = AlgebraError::UnsolvableEquation {
            a: 2,
            b: 1,
            modulus: 4,
        };
        assert_eq!(e.to_string(), "cannot solve 2 * x = 1 (mod 4)");
        assert_eq!(
            AlgebraError::NotImplemented("encode").to_string(),
            "not implemented: encode"
        );
        assert_eq!(
            AlgebraError::DivisionByZero.to_string(),
            "division by the zero polynomial"
        );
    }
}
