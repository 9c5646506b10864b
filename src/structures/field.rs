//! Galois field extensions `GF(P^D)` built as `Z/PZ[x] / (f)`.
//!
//! A field is constructed once, by searching for an irreducible modulus and a
//! primitive element or by validating caller-supplied ones, and then
//! enumerates its whole multiplicative group. After construction it is
//! immutable and every query is a lookup or a small computation over the
//! element table.

use core::fmt;
use core::ops::Index;

use log::{debug, trace, warn};

use crate::error::AlgebraError;
use crate::structures::factorizer::PrimeFactorizer;
use crate::structures::generator::PolynomialGenerator;
use crate::structures::poly::Polynomial;
use crate::structures::zp::Zp;
use crate::utils::{checked_pow, gcd, is_prime, powmod};

/// Which properties of a caller-supplied modulus and primitive element are
/// verified by [`GaloisFieldExtension::build_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldChecks {
    pub irreducibility: bool,
    pub primitivity: bool,
}

impl FieldChecks {
    /// Trust both inputs.
    pub const fn unchecked() -> Self {
        Self {
            irreducibility: false,
            primitivity: false,
        }
    }
}

impl Default for FieldChecks {
    fn default() -> Self {
        Self {
            irreducibility: true,
            primitivity: true,
        }
    }
}

/// The finite field `GF(P^D)` together with its enumerated multiplicative
/// group.
///
/// `elements()[i]` is `primitive^i mod factor`; `elements()[0]` is one. The
/// zero element belongs to the field but is not stored in the table.
///
/// # Example
///
/// ```
/// use galois_bch::{FieldChecks, GaloisFieldExtension, Polynomial};
///
/// // GF(16) = GF(2)[x] / (x^4 + x + 1), generated by x
/// let factor = Polynomial::<2>::from_coeffs(&[1, 1, 0, 0, 1]);
/// let field = GaloisFieldExtension::<2, 4>::build_with(
///     factor,
///     Polynomial::x(),
///     FieldChecks::default(),
/// )
/// .unwrap();
///
/// assert_eq!(field.order(), 16);
/// assert_eq!(field[4], Polynomial::from_coeffs(&[1, 1]));
/// assert_eq!(field.log_alpha(&Polynomial::from_coeffs(&[1, 1])).unwrap(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct GaloisFieldExtension<const P: u64, const D: usize> {
    factor: Polynomial<P>,
    primitive: Polynomial<P>,
    elements: Vec<Polynomial<P>>,
}

impl<const P: u64, const D: usize> GaloisFieldExtension<P, D> {
    /// Size of the multiplicative group, `P^D - 1`.
    pub fn group_order() -> Result<u64, AlgebraError> {
        checked_pow(P, D)
            .map(|n| n - 1)
            .ok_or_else(|| AlgebraError::InvalidArgument(format!("{}^{} overflows u64", P, D)))
    }

    fn warn_if_composite() {
        if !is_prime(P) {
            warn!("building GF({}^{}) over a non-prime modulus", P, D);
        }
    }

    // ========================================================================
    // Tests
    // ========================================================================

    /// Test whether `poly` is irreducible over `Z/PZ`.
    ///
    /// Nonzero constants and degree one are always irreducible, matching
    /// [`Polynomial::rabin_test`]. Otherwise a root in `Z/PZ` means a linear
    /// factor; that settles degrees two and three, and larger degrees go on
    /// to [`Polynomial::rabin_test`].
    pub fn test_irreducibility(poly: &Polynomial<P>) -> Result<bool, AlgebraError> {
        let deg = poly.degree();
        if deg <= 1 {
            return Ok(!poly.is_zero());
        }
        if let Some(root) = (0..P).map(Zp::new).find(|&x| poly.eval(x) == Zp::ZERO) {
            trace!("{} has root {}", poly, root);
            return Ok(false);
        }
        if deg <= 3 {
            return Ok(true);
        }
        poly.rabin_test()
    }

    /// Test whether `poly` generates the multiplicative group of
    /// `Z/PZ[x] / (modulus)`, of order `P^D - 1`.
    ///
    /// Fails if `poly` is not already reduced below the modulus' degree.
    pub fn test_primitivity(
        poly: &Polynomial<P>,
        modulus: &Polynomial<P>,
    ) -> Result<bool, AlgebraError> {
        if poly.is_zero() {
            return Ok(false);
        }
        if poly.degree() >= modulus.degree() {
            return Err(AlgebraError::InvalidArgument(format!(
                "generator {} must have lower degree than the modulus {}",
                poly, modulus
            )));
        }

        let mult_order = Self::group_order()?;
        let mut factorizer = PrimeFactorizer::new();
        for q in factorizer.factorize(mult_order).primes() {
            if poly.pow_mod(mult_order / q, modulus)?.is_one() {
                trace!("{} has order dividing {}", poly, mult_order / q);
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Test whether the integer `elem` generates the multiplicative group of
    /// a field with `order` elements.
    ///
    /// # Example
    ///
    /// ```
    /// use galois_bch::GaloisFieldExtension;
    ///
    /// type F = GaloisFieldExtension<7, 1>;
    /// assert!(F::test_exponent_primitivity(3, 7));
    /// assert!(!F::test_exponent_primitivity(2, 7));
    /// ```
    pub fn test_exponent_primitivity(elem: u64, order: u64) -> bool {
        if order < 2 {
            return false;
        }
        let mult_order = order - 1;
        let mut factorizer = PrimeFactorizer::new();
        let primes: Vec<u64> = factorizer.factorize(mult_order).primes().collect();
        primes
            .into_iter()
            .all(|q| powmod(elem, mult_order / q, order) != 1)
    }

    // ========================================================================
    // Searches
    // ========================================================================

    /// Draw candidates from `generator` until one is irreducible.
    ///
    /// For `D == 1` every monic candidate is irreducible, so the first one is
    /// taken as is.
    pub fn find_irreducible<G>(generator: &mut G) -> Result<Polynomial<P>, AlgebraError>
    where
        G: PolynomialGenerator<P, D> + ?Sized,
    {
        while let Some(candidate) = generator.next_candidate() {
            if D == 1 || Self::test_irreducibility(&candidate)? {
                debug!("found irreducible {} of degree {}", candidate, D);
                return Ok(candidate);
            }
            trace!("rejected reducible candidate {}", candidate);
        }
        Err(AlgebraError::InvariantViolation(format!(
            "no irreducible polynomial of degree {} over Z/{}Z; is {} prime?",
            D, P, P
        )))
    }

    /// Find a primitive element modulo `factor`.
    ///
    /// Tries `x` first. Otherwise the generator is reset and its candidates
    /// are scanned with the `x^D` term cleared.
    pub fn find_primitive<G>(
        generator: &mut G,
        factor: &Polynomial<P>,
    ) -> Result<Polynomial<P>, AlgebraError>
    where
        G: PolynomialGenerator<P, D> + ?Sized,
    {
        let default = Polynomial::x().rem(factor)?;
        if Self::test_primitivity(&default, factor)? {
            debug!("x is primitive modulo {}", factor);
            return Ok(default);
        }

        generator.reset();
        while let Some(mut candidate) = generator.next_candidate() {
            candidate.set(D, 0);
            if candidate.degree() < factor.degree() && Self::test_primitivity(&candidate, factor)? {
                debug!("found primitive {} modulo {}", candidate, factor);
                return Ok(candidate);
            }
        }
        Err(AlgebraError::InvariantViolation(format!(
            "no primitive element modulo {}",
            factor
        )))
    }

    /// Collect every irreducible candidate of a finite generator.
    pub fn find_all_irreducibles<G>(generator: &mut G) -> Result<Vec<Polynomial<P>>, AlgebraError>
    where
        G: PolynomialGenerator<P, D> + ?Sized,
    {
        if !generator.detects_exhaustion() {
            return Err(AlgebraError::InvalidArgument(
                "cannot enumerate all irreducibles with a generator that never ends".into(),
            ));
        }
        let mut irreducibles = Vec::new();
        while let Some(candidate) = generator.next_candidate() {
            if Self::test_irreducibility(&candidate)? {
                irreducibles.push(candidate);
            }
        }
        Ok(irreducibles)
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Search for an irreducible modulus and a primitive element, then build
    /// the field.
    pub fn build<G>(generator: &mut G) -> Result<Self, AlgebraError>
    where
        G: PolynomialGenerator<P, D> + ?Sized,
    {
        Self::warn_if_composite();
        let factor = Self::find_irreducible(generator)?;
        let primitive = Self::find_primitive(generator, &factor)?;
        Self::build_mult_group(factor, primitive)
    }

    /// Build the field from a given modulus and primitive element.
    ///
    /// The modulus must have degree at least `D`. Irreducibility and
    /// primitivity are verified according to `checks`.
    pub fn build_with(
        factor: Polynomial<P>,
        primitive: Polynomial<P>,
        checks: FieldChecks,
    ) -> Result<Self, AlgebraError> {
        Self::warn_if_composite();
        if factor.degree() < D {
            return Err(AlgebraError::InvalidArgument(format!(
                "modulus {} has degree lower than {}",
                factor, D
            )));
        }
        if checks.irreducibility && !Self::test_irreducibility(&factor)? {
            return Err(AlgebraError::InvalidArgument(format!(
                "modulus {} is reducible",
                factor
            )));
        }
        if checks.primitivity && !Self::test_primitivity(&primitive, &factor)? {
            return Err(AlgebraError::InvalidArgument(format!(
                "{} is not primitive modulo {}",
                primitive, factor
            )));
        }
        let primitive = primitive.rem(&factor)?;
        Self::build_mult_group(factor, primitive)
    }

    /// Build the field around a given primitive element, searching only for
    /// the modulus.
    pub fn build_by_primitive<G>(
        primitive: Polynomial<P>,
        generator: &mut G,
        check_primitivity: bool,
    ) -> Result<Self, AlgebraError>
    where
        G: PolynomialGenerator<P, D> + ?Sized,
    {
        let factor = Self::find_irreducible(generator)?;
        let checks = FieldChecks {
            irreducibility: false,
            primitivity: check_primitivity,
        };
        Self::build_with(factor, primitive, checks)
    }

    /// Enumerate powers of `primitive` modulo `factor` until they return to
    /// one.
    fn build_mult_group(
        factor: Polynomial<P>,
        primitive: Polynomial<P>,
    ) -> Result<Self, AlgebraError> {
        let bound = checked_pow(P, factor.degree())
            .map(|n| n - 1)
            .ok_or_else(|| {
                AlgebraError::InvalidArgument(format!("{}^{} overflows u64", P, factor.degree()))
            })?;

        let mut elements = vec![Polynomial::one()];
        let mut power = Polynomial::one();
        loop {
            power = (&primitive * &power).rem(&factor)?;
            if power.is_one() {
                break;
            }
            if power.is_zero() || elements.len() as u64 >= bound {
                return Err(AlgebraError::InvariantViolation(format!(
                    "powers of {} modulo {} do not cycle back to one",
                    primitive, factor
                )));
            }
            elements.push(power.clone());
        }

        debug!(
            "built GF({}^{}) with modulus {} and primitive {}: {} elements",
            P,
            D,
            factor,
            primitive,
            elements.len()
        );
        Ok(Self {
            factor,
            primitive,
            elements,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of field elements, zero included.
    pub fn order(&self) -> usize {
        self.elements.len() + 1
    }

    /// Number of elements of the multiplicative group.
    pub fn m_order(&self) -> usize {
        self.elements.len()
    }

    /// The irreducible modulus.
    pub fn factor(&self) -> &Polynomial<P> {
        &self.factor
    }

    /// The primitive element `alpha`.
    pub fn primitive(&self) -> &Polynomial<P> {
        &self.primitive
    }

    pub fn elements(&self) -> &[Polynomial<P>] {
        &self.elements
    }

    /// `alpha^i`, if `i < m_order()`.
    pub fn element(&self, i: usize) -> Option<&Polynomial<P>> {
        self.elements.get(i)
    }

    fn check_index(&self, i: usize) -> Result<(), AlgebraError> {
        if i >= self.elements.len() {
            return Err(AlgebraError::InvalidArgument(format!(
                "element index {} out of range for a group of {} elements",
                i,
                self.elements.len()
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Discrete logarithm to base `alpha`: the `i` with `alpha^i ≡ poly`.
    pub fn log_alpha(&self, poly: &Polynomial<P>) -> Result<usize, AlgebraError> {
        let reduced = poly.rem(&self.factor)?;
        self.elements
            .iter()
            .position(|e| *e == reduced)
            .ok_or_else(|| {
                AlgebraError::InvariantViolation(format!(
                    "{} is not a power of {}",
                    reduced, self.primitive
                ))
            })
    }

    /// Indices of the other members of `alpha^i`'s Frobenius orbit.
    ///
    /// These are `i * P^k mod m_order()` for `k = 1, 2, ...`, stopping when
    /// the orbit returns to `i` (which is not included).
    ///
    /// # Example
    ///
    /// ```
    /// use galois_bch::{FieldChecks, GaloisFieldExtension, Polynomial};
    ///
    /// let factor = Polynomial::<2>::from_coeffs(&[1, 1, 0, 0, 1]);
    /// let field =
    ///     GaloisFieldExtension::<2, 4>::build_with(factor, Polynomial::x(), FieldChecks::default())
    ///         .unwrap();
    /// assert_eq!(field.adjoint_elements(3).unwrap(), vec![6, 12, 9]);
    /// ```
    pub fn adjoint_elements(&self, i: usize) -> Result<Vec<usize>, AlgebraError> {
        self.check_index(i)?;
        let m = self.elements.len() as u128;
        let idx = i as u128;

        let mut adjoints = Vec::new();
        let mut power: u128 = 1;
        for _ in 0..self.elements.len() {
            power = power * P as u128 % m;
            let next = (idx * power % m) as usize;
            if next == i {
                return Ok(adjoints);
            }
            adjoints.push(next);
        }
        Err(AlgebraError::InvariantViolation(format!(
            "Frobenius orbit of index {} does not close",
            i
        )))
    }

    /// Minimal polynomial of `alpha^i` over `Z/PZ`.
    ///
    /// The product of `(y - c)` over the conjugates `c` is expanded with
    /// coefficients in the field and then each coefficient, which must be
    /// a constant, is projected back to `Z/PZ`.
    pub fn minimal_polynomial(&self, i: usize) -> Result<Polynomial<P>, AlgebraError> {
        let mut conjugates = vec![i];
        conjugates.extend(self.adjoint_elements(i)?);

        // coefficients of the product, ascending in y, each an element mod factor
        let mut product: Vec<Polynomial<P>> = vec![Polynomial::one()];
        for &c in &conjugates {
            let root = &self.elements[c];
            let mut next = vec![Polynomial::zero(); product.len() + 1];
            for (k, coeff) in product.iter().enumerate() {
                next[k + 1] += coeff;
                next[k] -= &(coeff * root).rem(&self.factor)?;
            }
            product = next;
        }

        let coeffs = product
            .iter()
            .map(|c| {
                if c.degree() == 0 {
                    Ok(c.coeff(0))
                } else {
                    Err(AlgebraError::InvariantViolation(format!(
                        "minimal polynomial of alpha^{} has coefficient {} outside Z/{}Z",
                        i, c, P
                    )))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Polynomial::new(coeffs))
    }

    /// Indices `i` for which `alpha^i` is itself primitive.
    pub fn find_all_primitive_elements(&self) -> Vec<usize> {
        let m = self.elements.len() as u64;
        (0..self.elements.len())
            .filter(|&i| gcd(i as u64, m) == 1)
            .collect()
    }

    /// Split `poly` into linear factors `x - e` over the field's elements.
    ///
    /// Candidates are `e = 0` followed by every group element; `e == x` and
    /// unit candidates are skipped. A remainder of positive degree that no
    /// candidate divides is appended with multiplicity one, without testing
    /// it further.
    pub fn factorize_by_field_elements(
        &self,
        poly: &Polynomial<P>,
    ) -> Result<Vec<(Polynomial<P>, usize)>, AlgebraError> {
        let mut factors = Vec::new();
        let mut current = poly.clone();
        let x = Polynomial::x();

        let zero = Polynomial::zero();
        let candidates = core::iter::once(&zero).chain(self.elements.iter());
        for elem in candidates {
            if current.degree() == 0 {
                break;
            }
            if elem.degree() > current.degree() || *elem == x {
                continue;
            }
            let root = &x - elem;
            if root.degree() == 0 {
                continue;
            }

            let mut multiplicity = 0;
            loop {
                let (q, r) = current.div_rem(&root)?;
                if !r.is_zero() {
                    break;
                }
                multiplicity += 1;
                current = q;
            }
            if multiplicity > 0 {
                factors.push((root, multiplicity));
            }
        }

        if current.degree() != 0 {
            factors.push((current, 1));
        }
        Ok(factors)
    }

    /// Diagnostic rendering; lists the element table when `print_elements`.
    pub fn pretty(&self, print_elements: bool) -> Pretty<'_, P, D> {
        Pretty {
            field: self,
            print_elements,
        }
    }
}

impl<const P: u64, const D: usize> Index<usize> for GaloisFieldExtension<P, D> {
    type Output = Polynomial<P>;

    fn index(&self, i: usize) -> &Self::Output {
        &self.elements[i]
    }
}

/// Display adapter returned by [`GaloisFieldExtension::pretty`].
pub struct Pretty<'a, const P: u64, const D: usize> {
    field: &'a GaloisFieldExtension<P, D>,
    print_elements: bool,
}

impl<const P: u64, const D: usize> fmt::Display for Pretty<'_, P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field;
        writeln!(f, "Field GF({}^{}) [ {} elements ]", P, D, field.order())?;
        writeln!(f, "Generator: {}", field.primitive)?;
        writeln!(f, "Irreducible polynomial as factor: {}", field.factor)?;
        if self.print_elements {
            let sz = field.m_order();
            writeln!(f, "Elements of multiplicative group ({} elements ):", sz)?;
            let width = sz.to_string().len();
            for (i, e) in field.elements.iter().enumerate() {
                writeln!(f, "a^{:>width$} : {}", i, e, width = width)?;
            }
        }
        Ok(())
    }
}

impl<const P: u64, const D: usize> fmt::Display for GaloisFieldExtension<P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.pretty(true), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::generator::ConsecutivePolynomialGenerator;
    use std::collections::BTreeSet;

    type Gf16 = GaloisFieldExtension<2, 4>;
    type Gf64 = GaloisFieldExtension<2, 6>;

    fn gf16() -> Gf16 {
        let factor = Polynomial::from_coeffs(&[1, 1, 0, 0, 1]);
        Gf16::build_with(factor, Polynomial::x(), FieldChecks::default()).unwrap()
    }

    #[test]
    fn gf64_has_63_distinct_elements() {
        let mut gen = ConsecutivePolynomialGenerator::<2, 6>::new();
        let field = Gf64::build(&mut gen).unwrap();
        assert_eq!(field.m_order(), 63);
        assert_eq!(field.order(), 64);
        assert!(field[0].is_one());

        let distinct: BTreeSet<_> = field.elements().iter().cloned().collect();
        assert_eq!(distinct.len(), 63);
        assert!(field.elements().iter().all(|e| e.degree() < 6));
    }

    #[test]
    fn consecutive_search_picks_first_irreducible() {
        let mut gen = ConsecutivePolynomialGenerator::<2, 6>::new();
        let field = Gf64::build(&mut gen).unwrap();
        assert_eq!(*field.factor(), Polynomial::from_coeffs(&[1, 1, 0, 0, 0, 0, 1]));
        assert_eq!(*field.primitive(), Polynomial::x());
    }

    #[test]
    fn log_alpha_round_trip() {
        let field = gf16();
        for i in 0..field.m_order() {
            assert_eq!(field.log_alpha(&field[i]).unwrap(), i);
        }
        // x^4 reduces to x + 1 = alpha^4
        let x4 = Polynomial::monomial(Zp::ONE, 4);
        assert_eq!(field.log_alpha(&x4).unwrap(), 4);
        assert!(matches!(
            field.log_alpha(&Polynomial::zero()),
            Err(AlgebraError::InvariantViolation(_))
        ));
    }

    #[test]
    fn irreducibility() {
        type F2 = GaloisFieldExtension<2, 2>;
        assert!(F2::test_irreducibility(&Polynomial::from_coeffs(&[1, 1, 1])).unwrap());
        assert!(!F2::test_irreducibility(&Polynomial::from_coeffs(&[1, 0, 1])).unwrap());
        assert!(F2::test_irreducibility(&Polynomial::x()).unwrap());
        assert!(F2::test_irreducibility(&Polynomial::one()).unwrap());
        assert!(!F2::test_irreducibility(&Polynomial::zero()).unwrap());

        type F3 = GaloisFieldExtension<3, 2>;
        assert!(F3::test_irreducibility(&Polynomial::from_coeffs(&[1, 0, 1])).unwrap());
        assert!(!F3::test_irreducibility(&Polynomial::from_coeffs(&[2, 0, 1])).unwrap());

        // (x^2 + x + 1)^2 has no roots but is reducible
        assert!(!Gf16::test_irreducibility(&Polynomial::from_coeffs(&[1, 0, 1, 0, 1])).unwrap());
    }

    #[test]
    fn irreducibility_agrees_with_rabin_on_low_degrees() {
        type F5 = GaloisFieldExtension<5, 2>;
        for p in [
            Polynomial::<5>::zero(),
            Polynomial::one(),
            Polynomial::constant(3),
            Polynomial::x(),
            Polynomial::from_coeffs(&[4, 2]),
        ] {
            assert_eq!(F5::test_irreducibility(&p).unwrap(), p.rabin_test().unwrap(), "{}", p);
        }
    }

    #[test]
    fn primitivity() {
        let f = Polynomial::<2>::from_coeffs(&[1, 1, 0, 0, 1]);
        assert!(Gf16::test_primitivity(&Polynomial::x(), &f).unwrap());
        assert!(!Gf16::test_primitivity(&Polynomial::one(), &f).unwrap());
        assert!(!Gf16::test_primitivity(&Polynomial::zero(), &f).unwrap());
        assert!(Gf16::test_primitivity(&Polynomial::monomial(Zp::ONE, 4), &f).is_err());

        // x has order 5 modulo x^4 + x^3 + x^2 + x + 1
        let g = Polynomial::<2>::from_coeffs(&[1, 1, 1, 1, 1]);
        assert!(!Gf16::test_primitivity(&Polynomial::x(), &g).unwrap());
    }

    #[test]
    fn build_rejects_bad_inputs() {
        let low = Polynomial::from_coeffs(&[1, 1, 1]);
        assert!(matches!(
            Gf16::build_with(low, Polynomial::x(), FieldChecks::default()),
            Err(AlgebraError::InvalidArgument(_))
        ));

        let reducible = Polynomial::from_coeffs(&[1, 0, 1, 0, 1]);
        assert!(matches!(
            Gf16::build_with(reducible, Polynomial::x(), FieldChecks::default()),
            Err(AlgebraError::InvalidArgument(_))
        ));

        let g = Polynomial::from_coeffs(&[1, 1, 1, 1, 1]);
        assert!(matches!(
            Gf16::build_with(g, Polynomial::x(), FieldChecks::default()),
            Err(AlgebraError::InvalidArgument(_))
        ));
    }

    #[test]
    fn unchecked_build_enumerates_subgroup() {
        let g = Polynomial::from_coeffs(&[1, 1, 1, 1, 1]);
        let field = Gf16::build_with(g, Polynomial::x(), FieldChecks::unchecked()).unwrap();
        assert_eq!(field.m_order(), 5);
    }

    #[test]
    fn find_primitive_scans_generator() {
        let g = Polynomial::<2>::from_coeffs(&[1, 1, 1, 1, 1]);
        let mut gen = ConsecutivePolynomialGenerator::<2, 4>::new();
        let primitive = Gf16::find_primitive(&mut gen, &g).unwrap();
        assert!(primitive.degree() < 4);
        assert!(Gf16::test_primitivity(&primitive, &g).unwrap());

        let field = Gf16::build_with(g, primitive, FieldChecks::default()).unwrap();
        assert_eq!(field.m_order(), 15);
    }

    #[test]
    fn build_by_primitive_searches_modulus() {
        let mut gen = ConsecutivePolynomialGenerator::<2, 4>::new();
        let field = Gf16::build_by_primitive(Polynomial::x(), &mut gen, true).unwrap();
        assert_eq!(*field.factor(), Polynomial::from_coeffs(&[1, 1, 0, 0, 1]));
        assert_eq!(field.m_order(), 15);
    }

    #[test]
    fn all_irreducibles_of_degree_four() {
        let mut gen = ConsecutivePolynomialGenerator::<2, 4>::new();
        let all = Gf16::find_all_irreducibles(&mut gen).unwrap();
        assert_eq!(
            all,
            vec![
                Polynomial::from_coeffs(&[1, 1, 0, 0, 1]),
                Polynomial::from_coeffs(&[1, 0, 0, 1, 1]),
                Polynomial::from_coeffs(&[1, 1, 1, 1, 1]),
            ]
        );
    }

    #[cfg(feature = "rand")]
    #[test]
    fn all_irreducibles_needs_finite_generator() {
        use crate::structures::generator::RandomPolynomialGenerator;
        let mut gen = RandomPolynomialGenerator::<2, 4>::new();
        assert!(Gf16::find_all_irreducibles(&mut gen).is_err());
    }

    /// Finite generator replaying a fixed list.
    struct Replay(Vec<Polynomial<2>>, usize);

    impl PolynomialGenerator<2, 2> for Replay {
        fn next_candidate(&mut self) -> Option<Polynomial<2>> {
            let next = self.0.get(self.1).cloned();
            self.1 += 1;
            next
        }

        fn is_exhausted(&self) -> bool {
            self.1 > self.0.len()
        }

        fn detects_exhaustion(&self) -> bool {
            true
        }

        fn reset(&mut self) {
            self.1 = 0;
        }
    }

    #[test]
    fn exhausted_search_is_an_error() {
        let reducible = vec![
            Polynomial::from_coeffs(&[0, 0, 1]),
            Polynomial::from_coeffs(&[1, 0, 1]),
        ];
        let mut gen = Replay(reducible, 0);
        assert!(matches!(
            GaloisFieldExtension::<2, 2>::find_irreducible(&mut gen),
            Err(AlgebraError::InvariantViolation(_))
        ));
    }

    #[test]
    fn prime_field_as_degree_one_extension() {
        let mut gen = ConsecutivePolynomialGenerator::<3, 1>::new();
        let field = GaloisFieldExtension::<3, 1>::build(&mut gen).unwrap();
        assert_eq!(*field.factor(), Polynomial::x());
        assert_eq!(field.elements(), &[Polynomial::one(), Polynomial::constant(2)]);
    }

    #[test]
    fn exponent_primitivity() {
        assert!(Gf16::test_exponent_primitivity(3, 7));
        assert!(Gf16::test_exponent_primitivity(5, 7));
        assert!(!Gf16::test_exponent_primitivity(2, 7));
        assert!(!Gf16::test_exponent_primitivity(6, 7));
        assert!(!Gf16::test_exponent_primitivity(1, 1));
    }

    #[test]
    fn adjoints() {
        let field = gf16();
        assert_eq!(field.adjoint_elements(0).unwrap(), Vec::<usize>::new());
        assert_eq!(field.adjoint_elements(1).unwrap(), vec![2, 4, 8]);
        assert_eq!(field.adjoint_elements(5).unwrap(), vec![10]);
        assert_eq!(field.adjoint_elements(7).unwrap(), vec![14, 13, 11]);
        assert!(field.adjoint_elements(15).is_err());
    }

    #[test]
    fn minimal_polynomials_gf16() {
        let field = gf16();
        let cases: [(usize, &[i64]); 5] = [
            (0, &[1, 1]),
            (1, &[1, 1, 0, 0, 1]),
            (3, &[1, 1, 1, 1, 1]),
            (5, &[1, 1, 1]),
            (7, &[1, 0, 0, 1, 1]),
        ];
        for (i, coeffs) in cases {
            assert_eq!(field.minimal_polynomial(i).unwrap(), Polynomial::from_coeffs(coeffs));
        }
    }

    #[test]
    fn minimal_polynomial_annihilates_element() {
        let field = gf16();
        for i in 0..field.m_order() {
            let m = field.minimal_polynomial(i).unwrap();
            // evaluate m at alpha^i inside the field
            let value = m
                .coefficients()
                .iter()
                .enumerate()
                .fold(Polynomial::zero(), |acc, (k, &c)| {
                    acc + field[i * k % 15].clone() * c
                });
            assert!(value.rem(field.factor()).unwrap().is_zero());
        }
    }

    #[test]
    fn primitive_element_indices() {
        let field = gf16();
        assert_eq!(field.find_all_primitive_elements(), vec![1, 2, 4, 7, 8, 11, 13, 14]);
    }

    #[test]
    fn factorize_linear_factors() {
        let field = gf16();
        // x^3 + x = x (x + 1)^2
        let p = Polynomial::from_coeffs(&[0, 1, 0, 1]);
        let factors = field.factorize_by_field_elements(&p).unwrap();
        assert_eq!(
            factors,
            vec![
                (Polynomial::x(), 1),
                (Polynomial::from_coeffs(&[1, 1]), 2),
            ]
        );
        assert!(field.factorize_by_field_elements(&Polynomial::one()).unwrap().is_empty());
    }

    #[test]
    fn factorize_keeps_irreducible_remainder() {
        let mut gen = ConsecutivePolynomialGenerator::<3, 1>::new();
        let field = GaloisFieldExtension::<3, 1>::build(&mut gen).unwrap();
        // (x + 1)(x^2 + 1)
        let p = Polynomial::from_coeffs(&[1, 1, 1, 1]);
        let factors = field.factorize_by_field_elements(&p).unwrap();
        assert_eq!(
            factors,
            vec![
                (Polynomial::from_coeffs(&[1, 1]), 1),
                (Polynomial::from_coeffs(&[1, 0, 1]), 1),
            ]
        );
    }

    #[test]
    fn pretty_output() {
        let field = gf16();
        let short = field.pretty(false).to_string();
        assert_eq!(
            short,
            "Field GF(2^4) [ 16 elements ]\nGenerator: x\nIrreducible polynomial as factor: x^4 + x + 1\n"
        );
        let full = field.to_string();
        assert!(full.contains("Elements of multiplicative group (15 elements ):"));
        assert!(full.contains("a^ 4 : x + 1\n"));
        assert!(full.contains("a^14 : x^3 + 1\n"));
    }
}
