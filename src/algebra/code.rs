use crate::error::AlgebraError;

/// Capabilities of an error-correcting block code over a `Q`-ary alphabet.
///
/// Symbols are carried as `u64` residues in `[0, Q)`. Implementations that
/// do not support an operation return
/// [`AlgebraError::NotImplemented`] rather than panicking.
pub trait Code {
    /// Codeword length `n`.
    fn block_size(&self) -> usize;

    /// Number of information symbols `k`.
    fn info_size(&self) -> usize;

    /// Designed minimum distance.
    fn distance(&self) -> usize;

    /// Map `k` information symbols to an `n`-symbol codeword.
    fn encode(&self, message: &[u64]) -> Result<Vec<u64>, AlgebraError>;

    /// Recover the information symbols from a (possibly corrupted) codeword.
    fn decode(&self, codeword: &[u64]) -> Result<Vec<u64>, AlgebraError>;

    /// Locate the positions of corrupted symbols in a codeword.
    fn errors(&self, codeword: &[u64]) -> Result<Vec<usize>, AlgebraError>;
}
