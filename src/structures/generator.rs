//! Candidate sources for the irreducible and primitive polynomial searches.
//!
//! A generator yields monic polynomials of degree `D` over `Z/PZ`. The field
//! construction only asks for the next candidate, whether the supply has run
//! out, and whether running out can be detected at all.

use crate::structures::poly::Polynomial;
use crate::structures::zp::Zp;

#[cfg(feature = "rand")]
use rand::{Rng, SeedableRng};
#[cfg(feature = "rand")]
use rand_chacha::ChaCha8Rng;

/// A resettable stream of monic degree-`D` polynomials over `Z/PZ`.
pub trait PolynomialGenerator<const P: u64, const D: usize> {
    /// Produce the next candidate, or `None` once the stream is exhausted.
    fn next_candidate(&mut self) -> Option<Polynomial<P>>;

    /// Whether the stream has run out.
    ///
    /// Always `false` for generators that cannot detect exhaustion.
    fn is_exhausted(&self) -> bool;

    /// Whether the stream is finite and reports exhaustion.
    fn detects_exhaustion(&self) -> bool;

    /// Restart the stream from its first candidate.
    fn reset(&mut self);
}

/// Enumerates all `P^D` monic polynomials of degree `D` exactly once.
///
/// The first candidate is `x^D`; each following one increments the lower `D`
/// coefficients as a little-endian base-`P` counter. After the counter wraps
/// the generator reports exhaustion.
///
/// # Example
///
/// ```
/// use galois_bch::{ConsecutivePolynomialGenerator, PolynomialGenerator};
///
/// let mut gen = ConsecutivePolynomialGenerator::<2, 2>::new();
/// let all: Vec<String> = gen.by_ref().map(|p| p.to_string()).collect();
/// assert_eq!(all, ["x^2", "x^2 + 1", "x^2 + x", "x^2 + x + 1"]);
/// assert!(gen.is_exhausted());
/// ```
#[derive(Debug, Clone)]
pub struct ConsecutivePolynomialGenerator<const P: u64, const D: usize> {
    low: Vec<u64>,
    started: bool,
    exhausted: bool,
}

impl<const P: u64, const D: usize> ConsecutivePolynomialGenerator<P, D> {
    pub fn new() -> Self {
        Self {
            low: vec![0; D],
            started: false,
            exhausted: false,
        }
    }

    fn current(&self) -> Polynomial<P> {
        let mut coeffs: Vec<Zp<P>> = self.low.iter().map(|&c| Zp::new(c)).collect();
        coeffs.push(Zp::ONE);
        Polynomial::new(coeffs)
    }

    /// Advance the counter; returns `false` when it wraps around.
    fn increment(&mut self) -> bool {
        for digit in self.low.iter_mut() {
            *digit += 1;
            if *digit < P {
                return true;
            }
            *digit = 0;
        }
        false
    }
}

impl<const P: u64, const D: usize> Default for ConsecutivePolynomialGenerator<P, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const P: u64, const D: usize> PolynomialGenerator<P, D>
    for ConsecutivePolynomialGenerator<P, D>
{
    fn next_candidate(&mut self) -> Option<Polynomial<P>> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }
        if !self.increment() {
            self.exhausted = true;
            return None;
        }
        Some(self.current())
    }

    fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn detects_exhaustion(&self) -> bool {
        true
    }

    fn reset(&mut self) {
        self.low.iter_mut().for_each(|c| *c = 0);
        self.started = false;
        self.exhausted = false;
    }
}

impl<const P: u64, const D: usize> Iterator for ConsecutivePolynomialGenerator<P, D> {
    type Item = Polynomial<P>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_candidate()
    }
}

/// Draws monic degree-`D` polynomials with uniformly random lower
/// coefficients.
///
/// The stream never ends. [`reset`](PolynomialGenerator::reset) reseeds with
/// the generator's seed, so two generators with the same seed produce the
/// same sequence.
#[cfg(feature = "rand")]
#[derive(Debug, Clone)]
pub struct RandomPolynomialGenerator<const P: u64, const D: usize> {
    seed: u64,
    rng: ChaCha8Rng,
}

#[cfg(feature = "rand")]
impl<const P: u64, const D: usize> RandomPolynomialGenerator<P, D> {
    pub const DEFAULT_SEED: u64 = 5489;

    pub fn new() -> Self {
        Self::with_seed(Self::DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(feature = "rand")]
impl<const P: u64, const D: usize> Default for RandomPolynomialGenerator<P, D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "rand")]
impl<const P: u64, const D: usize> PolynomialGenerator<P, D> for RandomPolynomialGenerator<P, D> {
    fn next_candidate(&mut self) -> Option<Polynomial<P>> {
        let mut coeffs: Vec<Zp<P>> = (0..D).map(|_| Zp::new(self.rng.gen_range(0..P))).collect();
        coeffs.push(Zp::ONE);
        Some(Polynomial::new(coeffs))
    }

    fn is_exhausted(&self) -> bool {
        false
    }

    fn detects_exhaustion(&self) -> bool {
        false
    }

    fn reset(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }
}
