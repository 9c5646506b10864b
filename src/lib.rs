//! Exact arithmetic over prime fields `Z/PZ`, polynomials over them, finite
//! field extensions `GF(P^D)` and BCH generator polynomials.
//!
//! ```
//! use galois_bch::{BchCode, Code, ConsecutivePolynomialGenerator, GaloisFieldExtension};
//!
//! let mut gen = ConsecutivePolynomialGenerator::<2, 4>::new();
//! let field = GaloisFieldExtension::<2, 4>::build(&mut gen).unwrap();
//! assert_eq!(field.m_order(), 15);
//!
//! let code = BchCode::<2, 4, 2>::new(&field).unwrap();
//! assert_eq!(code.distance(), 4);
//! ```

pub mod algebra;
pub mod codes;
pub mod config;
pub mod error;
pub mod structures;
pub mod utils;

pub use algebra::code::Code;
pub use algebra::ring::Ring;

pub use codes::bch::BchCode;
pub use config::{DivisionPolicy, OutputMode, PolyConfig};
pub use error::AlgebraError;
pub use structures::factorizer::{Factorization, PrimeFactorizer};
pub use structures::field::{FieldChecks, GaloisFieldExtension};
pub use structures::generator::{ConsecutivePolynomialGenerator, PolynomialGenerator};
#[cfg(feature = "rand")]
pub use structures::generator::RandomPolynomialGenerator;
pub use structures::poly::Polynomial;
pub use structures::zp::Zp;
pub use utils::{extended_gcd, gcd, inverse_mod, is_prime, powmod};
