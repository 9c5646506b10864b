//! Integer factorization by trial division against a growing prime cache.

use core::fmt;
use core::ops::Deref;

use crate::utils::isqrt;

/// Ordered `(prime, multiplicity)` pairs describing an integer.
///
/// Primes appear in increasing order. The two degenerate inputs keep their
/// sentinel encodings: `0` factors as `[(0, 0)]` and `1` as `[(1, 0)]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Factorization(Vec<(u64, usize)>);

impl Factorization {
    pub fn new(pairs: Vec<(u64, usize)>) -> Self {
        Self(pairs)
    }

    /// Distinct prime divisors, skipping the sentinel entries.
    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().filter(|(_, m)| *m > 0).map(|&(p, _)| p)
    }

    /// Recombine `∏ prime^multiplicity`.
    ///
    /// Sentinel entries contribute their base, so `0` and `1` round-trip too.
    pub fn product(&self) -> u64 {
        self.0.iter().fold(1u64, |acc, &(p, m)| {
            if m == 0 {
                acc * p
            } else {
                acc * p.pow(m as u32)
            }
        })
    }

    pub fn into_inner(self) -> Vec<(u64, usize)> {
        self.0
    }
}

impl Deref for Factorization {
    type Target = [(u64, usize)];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Factorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &(p, m)) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, "*")?;
            }
            write!(f, "{}", p)?;
            if m != 1 {
                write!(f, "^{}", m)?;
            }
        }
        Ok(())
    }
}

/// Trial-division factorizer that remembers every prime it has found.
///
/// The cache only grows; repeated factorization of related numbers reuses
/// it. A single instance is not meant to be shared across threads without
/// external synchronisation.
///
/// # Example
///
/// ```
/// use galois_bch::PrimeFactorizer;
///
/// let mut f = PrimeFactorizer::new();
/// assert_eq!(&*f.factorize(1024), &[(2, 10)]);
/// assert_eq!(f.factorize(360).to_string(), "2^3*3^2*5");
/// ```
#[derive(Debug, Clone)]
pub struct PrimeFactorizer {
    primes: Vec<u64>,
}

impl PrimeFactorizer {
    /// Seed of the prime cache.
    pub const CORE_PRIMES: [u64; 1] = [2];

    pub fn new() -> Self {
        Self {
            primes: Self::CORE_PRIMES.to_vec(),
        }
    }

    /// Primes cached so far, in increasing order.
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    /// Reset the cache to its seed.
    pub fn flush(&mut self) {
        self.primes = Self::CORE_PRIMES.to_vec();
    }

    /// Extend the cache with every prime up to `max`.
    pub fn calculate_primes_to(&mut self, max: u64) {
        let mut candidate = match self.primes.last() {
            Some(&last) => last + 1,
            None => {
                self.flush();
                3
            }
        };
        while candidate <= max {
            if self.is_cached_prime(candidate) {
                self.primes.push(candidate);
            }
            candidate += 1;
        }
    }

    fn is_cached_prime(&self, candidate: u64) -> bool {
        let root = isqrt(candidate);
        self.primes
            .iter()
            .take_while(|&&p| p <= root)
            .all(|&p| candidate % p != 0)
    }

    /// Factorize `n` into `(prime, multiplicity)` pairs.
    pub fn factorize(&mut self, n: u64) -> Factorization {
        match n {
            0 => return Factorization::new(vec![(0, 0)]),
            1 => return Factorization::new(vec![(1, 0)]),
            _ => {}
        }

        if self.primes.last().map_or(true, |&last| last < n) {
            self.calculate_primes_to(n);
        }

        let mut rest = n;
        let mut factors = Vec::new();
        for &p in &self.primes {
            if rest == 1 {
                break;
            }
            let mut multiplicity = 0;
            while rest % p == 0 {
                rest /= p;
                multiplicity += 1;
            }
            if multiplicity > 0 {
                factors.push((p, multiplicity));
            }
        }
        Factorization::new(factors)
    }
}

impl Default for PrimeFactorizer {
    fn default() -> Self {
        Self::new()
    }
}
