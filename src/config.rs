//! Explicit configuration for polynomial rendering and division.
//!
//! Operations that depend on these settings come in two flavours: a plain
//! method that uses [`PolyConfig::default`] and a `*_with` method that takes
//! a `&PolyConfig`.

/// How a polynomial is rendered for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputMode {
    /// Every stored coefficient is printed, zeros included.
    Canonical,
    /// Zero terms are suppressed.
    #[default]
    Minimal,
}

/// What polynomial division does when a quotient coefficient cannot be
/// solved for (only possible over a non-prime modulus).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DivisionPolicy {
    /// Fail with [`AlgebraError::UnsolvableEquation`](crate::AlgebraError::UnsolvableEquation).
    #[default]
    Strict,
    /// Use coefficient one for the unsolvable step and stop dividing.
    ///
    /// The result no longer satisfies `dividend = q * divisor + r`.
    ClosestRemainder,
}

/// Settings threaded through polynomial operations.
///
/// # Example
///
/// ```
/// use galois_bch::{DivisionPolicy, OutputMode, PolyConfig};
///
/// let cfg = PolyConfig::default()
///     .with_output(OutputMode::Canonical)
///     .with_division(DivisionPolicy::ClosestRemainder);
/// assert_eq!(cfg.output, OutputMode::Canonical);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PolyConfig {
    pub output: OutputMode,
    pub division: DivisionPolicy,
}

impl PolyConfig {
    pub const fn new(output: OutputMode, division: DivisionPolicy) -> Self {
        Self { output, division }
    }

    pub const fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    pub const fn with_division(mut self, division: DivisionPolicy) -> Self {
        self.division = division;
        self
    }
}
