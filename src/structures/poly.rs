use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::algebra::ring::Ring;
use crate::config::{DivisionPolicy, OutputMode, PolyConfig};
use crate::error::AlgebraError;
use crate::structures::factorizer::PrimeFactorizer;
use crate::structures::zp::Zp;
use crate::utils::powmod;

/// Dense polynomial over `Z/PZ`.
///
/// Coefficients are stored in ascending order of degree:
/// `coeffs[i]` is the coefficient of `x^i`. Storage always holds at least one
/// coefficient and is not trimmed eagerly; the degree is recomputed from
/// content whenever the coefficients change.
///
/// The zero polynomial is `[0]` and reports `degree() == 0`, the same as a
/// non-zero constant. Use [`Polynomial::is_zero`] to tell them apart.
///
/// Equality, ordering and hashing only look at the significant coefficients
/// (indices `0..=degree()`), so `[1, 1]` and `[1, 1, 0, 0]` are the same key.
#[derive(Clone)]
pub struct Polynomial<const P: u64> {
    coeffs: Vec<Zp<P>>,
    deg: usize,
}

impl<const P: u64> Polynomial<P> {
    /// Create a polynomial from coefficients in ascending order.
    ///
    /// An empty vector yields the zero polynomial.
    pub fn new(coeffs: Vec<Zp<P>>) -> Self {
        let coeffs = if coeffs.is_empty() {
            vec![Zp::ZERO]
        } else {
            coeffs
        };
        let deg = Self::compute_degree(&coeffs);
        Self { coeffs, deg }
    }

    /// Create a polynomial from signed integer coefficients, reducing each
    /// modulo `P`.
    ///
    /// # Example
    ///
    /// ```
    /// use galois_bch::Polynomial;
    ///
    /// // x^2 - 1 over Z/5Z
    /// let p = Polynomial::<5>::from_coeffs(&[-1, 0, 1]);
    /// assert_eq!(p.degree(), 2);
    /// assert_eq!(p.coeff(0).value(), 4);
    /// ```
    pub fn from_coeffs(coeffs: &[i64]) -> Self {
        Self::new(coeffs.iter().map(|&c| Zp::from_i64(c)).collect())
    }

    /// Create a constant polynomial.
    pub fn constant(c: i64) -> Self {
        Self::new(vec![Zp::from_i64(c)])
    }

    pub fn zero() -> Self {
        Self::new(vec![Zp::ZERO])
    }

    pub fn one() -> Self {
        Self::new(vec![Zp::ONE])
    }

    /// Create the polynomial `x`.
    pub fn x() -> Self {
        Self::new(vec![Zp::ZERO, Zp::ONE])
    }

    /// Create a monomial `c * x^n`.
    pub fn monomial(c: Zp<P>, n: usize) -> Self {
        let mut coeffs = vec![Zp::ZERO; n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Create a polynomial from its roots: `(x - r1)(x - r2)...(x - rn)`.
    pub fn from_roots(roots: &[Zp<P>]) -> Self {
        roots.iter().fold(Self::one(), |acc, &root| {
            acc * Self::new(vec![-root, Zp::ONE])
        })
    }

    fn compute_degree(coeffs: &[Zp<P>]) -> usize {
        coeffs.iter().rposition(|c| c.value() != 0).unwrap_or(0)
    }

    fn refresh_degree(&mut self) {
        self.deg = Self::compute_degree(&self.coeffs);
    }

    /// Index of the highest non-zero coefficient; `0` for the zero polynomial.
    pub fn degree(&self) -> usize {
        self.deg
    }

    /// Number of stored coefficients (at least `degree() + 1`).
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_zero(&self) -> bool {
        self.deg == 0 && self.coeffs[0] == Zp::ZERO
    }

    pub fn is_one(&self) -> bool {
        self.deg == 0 && self.coeffs[0] == Zp::ONE
    }

    /// Get the coefficient of `x^i`.
    ///
    /// Returns zero if `i` is beyond the stored coefficients.
    pub fn coeff(&self, i: usize) -> Zp<P> {
        self.coeffs.get(i).copied().unwrap_or(Zp::ZERO)
    }

    /// Significant coefficients, `x^0` through `x^degree()`.
    pub fn coefficients(&self) -> &[Zp<P>] {
        &self.coeffs[..=self.deg]
    }

    /// Coefficient of `x^degree()` (zero for the zero polynomial).
    pub fn leading_coeff(&self) -> Zp<P> {
        self.coeffs[self.deg]
    }

    /// Set the coefficient of `x^idx`, growing storage if needed.
    pub fn set(&mut self, idx: usize, value: i64) {
        if idx >= self.coeffs.len() {
            self.coeffs.resize(idx + 1, Zp::ZERO);
        }
        self.coeffs[idx] = Zp::from_i64(value);
        self.refresh_degree();
    }

    /// Replace all coefficients.
    pub fn assign(&mut self, coeffs: &[i64]) {
        *self = Self::from_coeffs(coeffs);
    }

    /// Evaluate the polynomial at a point.
    ///
    /// Each term recomputes `x^i` with [`powmod`] and the sum is reduced
    /// modulo `P` after every term.
    ///
    /// # Example
    ///
    /// ```
    /// use galois_bch::{Polynomial, Zp};
    ///
    /// // p(x) = 1 + 2x + 3x^2 over Z/17Z
    /// let p = Polynomial::<17>::from_coeffs(&[1, 2, 3]);
    /// assert_eq!(p.eval(Zp::new(2)), Zp::new(0));
    /// assert_eq!(p.eval(Zp::new(1)), Zp::new(6));
    /// ```
    pub fn eval(&self, x: Zp<P>) -> Zp<P> {
        self.coefficients()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.value() != 0)
            .fold(Zp::ZERO, |acc, (i, &c)| {
                acc + Zp::new(powmod(x.value(), i as u64, P)) * c
            })
    }

    /// Formal derivative.
    ///
    /// # Example
    ///
    /// ```
    /// use galois_bch::Polynomial;
    ///
    /// // f(x) = x^3 + 2x^2 + 3x + 4, f'(x) = 3x^2 + 4x + 3
    /// let f = Polynomial::<17>::from_coeffs(&[4, 3, 2, 1]);
    /// assert_eq!(f.derivative(), Polynomial::from_coeffs(&[3, 4, 3]));
    /// ```
    pub fn derivative(&self) -> Self {
        let mut res = self.shift_back(1);
        for (i, c) in res.coeffs.iter_mut().enumerate() {
            *c = *c * Zp::new(i as u64 + 1);
        }
        res.refresh_degree();
        res
    }

    /// Multiply by `x^n`.
    pub fn shift(&self, n: usize) -> Self {
        if n == 0 {
            return self.clone();
        }
        let mut coeffs = vec![Zp::ZERO; n];
        coeffs.extend_from_slice(self.coefficients());
        Self::new(coeffs)
    }

    /// Divide by `x^n`, dropping the `n` lowest terms.
    pub fn shift_back(&self, n: usize) -> Self {
        if n == 0 {
            return self.clone();
        }
        if n > self.deg {
            return Self::zero();
        }
        Self::new(self.coeffs[n..=self.deg].to_vec())
    }

    /// `self^exp` by square-and-multiply.
    pub fn pow(&self, exp: u64) -> Self {
        Ring::pow(self, exp)
    }

    fn add_coeffs(&self, rhs: &Self, negate_rhs: bool) -> Self {
        let len = (self.deg + 1).max(rhs.deg + 1);
        let coeffs = (0..len)
            .map(|i| {
                let b = rhs.coeff(i);
                self.coeff(i) + if negate_rhs { -b } else { b }
            })
            .collect();
        Self::new(coeffs)
    }

    fn scale(&self, c: Zp<P>) -> Self {
        if c == Zp::ZERO {
            return Self::zero();
        }
        if c == Zp::ONE {
            return self.clone();
        }
        Self::new(self.coefficients().iter().map(|&a| a * c).collect())
    }

    /// Schoolbook convolution, short-circuiting identities and scalars.
    fn mul_poly(&self, rhs: &Self) -> Self {
        if self.is_one() {
            return rhs.clone();
        }
        if rhs.is_one() {
            return self.clone();
        }
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }
        if rhs.deg == 0 {
            return self.scale(rhs.coeffs[0]);
        }
        if self.deg == 0 {
            return rhs.scale(self.coeffs[0]);
        }

        let mut coeffs = vec![Zp::ZERO; self.deg + rhs.deg + 1];
        for (i, &a) in self.coefficients().iter().enumerate() {
            if a == Zp::ZERO {
                continue;
            }
            for (j, &b) in rhs.coefficients().iter().enumerate() {
                coeffs[i + j] = coeffs[i + j] + a * b;
            }
        }
        Self::new(coeffs)
    }

    /// Long division: returns `(quotient, remainder)`.
    ///
    /// Uses [`PolyConfig::default`], i.e. fails when a quotient coefficient
    /// cannot be solved for.
    ///
    /// # Example
    ///
    /// ```
    /// use galois_bch::Polynomial;
    ///
    /// // (x^4 + 1) / (x + 1) over GF(2)
    /// let p = Polynomial::<2>::from_coeffs(&[1, 0, 0, 0, 1]);
    /// let d = Polynomial::<2>::from_coeffs(&[1, 1]);
    /// let (q, r) = p.div_rem(&d).unwrap();
    /// assert_eq!(q, Polynomial::from_coeffs(&[1, 1, 1, 1]));
    /// assert!(r.is_zero());
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), AlgebraError> {
        self.div_rem_with(divisor, &PolyConfig::default())
    }

    /// Long division under an explicit [`PolyConfig`].
    ///
    /// Each step solves `lc(divisor) * c ≡ lc(remainder) (mod P)`. When that
    /// has no solution, [`DivisionPolicy::Strict`] fails and
    /// [`DivisionPolicy::ClosestRemainder`] takes `c = 1` and stops, so the
    /// returned remainder keeps the dividend's degree.
    pub fn div_rem_with(
        &self,
        divisor: &Self,
        cfg: &PolyConfig,
    ) -> Result<(Self, Self), AlgebraError> {
        if divisor.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }

        let dd = divisor.deg;
        let mut dt = self.deg;
        if dd > dt || self.is_zero() {
            return Ok((Self::zero(), self.clone()));
        }

        let lc = divisor.leading_coeff();
        let mut quotient = vec![Zp::ZERO; dt - dd + 1];
        let mut remainder = self.coefficients().to_vec();

        loop {
            let target = remainder[dt];
            let (c, stop) = match lc.solve(target) {
                Some(c) => (c, false),
                None => match cfg.division {
                    DivisionPolicy::Strict => {
                        return Err(AlgebraError::UnsolvableEquation {
                            a: lc.value(),
                            b: target.value(),
                            modulus: P,
                        })
                    }
                    DivisionPolicy::ClosestRemainder => (Zp::ONE, true),
                },
            };

            let shift = dt - dd;
            quotient[shift] = c;
            for (i, &d) in divisor.coefficients().iter().enumerate() {
                remainder[i + shift] = remainder[i + shift] - c * d;
            }

            match remainder.iter().rposition(|r| r.value() != 0) {
                None => break,
                Some(d) => dt = d,
            }
            if stop || dt < dd {
                break;
            }
        }

        Ok((Self::new(quotient), Self::new(remainder)))
    }

    /// Quotient of [`Polynomial::div_rem`].
    pub fn quotient(&self, divisor: &Self) -> Result<Self, AlgebraError> {
        self.quotient_with(divisor, &PolyConfig::default())
    }

    pub fn quotient_with(&self, divisor: &Self, cfg: &PolyConfig) -> Result<Self, AlgebraError> {
        self.div_rem_with(divisor, cfg).map(|(q, _)| q)
    }

    /// Remainder of [`Polynomial::div_rem`].
    pub fn rem(&self, divisor: &Self) -> Result<Self, AlgebraError> {
        self.rem_with(divisor, &PolyConfig::default())
    }

    pub fn rem_with(&self, divisor: &Self, cfg: &PolyConfig) -> Result<Self, AlgebraError> {
        self.div_rem_with(divisor, cfg).map(|(_, r)| r)
    }

    /// Scale so the leading coefficient is one.
    ///
    /// Returns `None` for the zero polynomial or a non-unit leading
    /// coefficient.
    pub fn monic(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let inv = self.leading_coeff().inverse()?;
        Some(self.scale(inv))
    }

    fn normalized(self) -> Self {
        match self.monic() {
            Some(m) => m,
            None => self,
        }
    }

    /// Greatest common divisor by the Euclidean algorithm.
    ///
    /// The result is monic whenever its leading coefficient is a unit, and
    /// zero only when both inputs are zero.
    ///
    /// # Example
    ///
    /// ```
    /// use galois_bch::{Polynomial, Zp};
    ///
    /// type P17 = Polynomial<17>;
    ///
    /// // gcd((x-1)(x-2), (x-2)(x-3)) = x - 2
    /// let a = P17::from_roots(&[Zp::new(1), Zp::new(2)]);
    /// let b = P17::from_roots(&[Zp::new(2), Zp::new(3)]);
    /// assert_eq!(P17::gcd(&a, &b).unwrap(), P17::from_roots(&[Zp::new(2)]));
    /// ```
    pub fn gcd(p1: &Self, p2: &Self) -> Result<Self, AlgebraError> {
        Self::gcd_with(p1, p2, &PolyConfig::default())
    }

    /// [`Polynomial::gcd`] with every division step run under `cfg`.
    ///
    /// A lossy step leaves the remainder's degree where it was; the loop then
    /// ends with the current divisor.
    pub fn gcd_with(p1: &Self, p2: &Self, cfg: &PolyConfig) -> Result<Self, AlgebraError> {
        let (small, large) = if p1 > p2 { (p2, p1) } else { (p1, p2) };
        if small.is_zero() {
            return Ok(large.clone().normalized());
        }
        if small.is_one() {
            return Ok(Self::one());
        }
        if small == large {
            return Ok(small.clone().normalized());
        }

        let mut a = large.clone();
        let mut b = small.clone();
        while !b.is_zero() {
            let r = a.rem_with(&b, cfg)?;
            if !r.is_zero() && r.deg >= b.deg {
                return Ok(b.normalized());
            }
            a = b;
            b = r;
        }
        Ok(a.normalized())
    }

    /// Solve `a * x ≡ b (mod modulus)` for `x`.
    ///
    /// Mirrors [`extended_gcd`](crate::utils::extended_gcd): when
    /// `g = gcd(a, modulus)` is not one, a solution exists only if `g | b`,
    /// and the congruence is divided through by `g` first.
    ///
    /// # Example
    ///
    /// ```
    /// use galois_bch::Polynomial;
    ///
    /// type P7 = Polynomial<7>;
    ///
    /// let a = P7::from_coeffs(&[1, 2, 8, 4, 5]);
    /// let m = P7::from_coeffs(&[7, 4, 6, 5, 1]);
    /// let x = P7::expanded_gcd(&a, &P7::one(), &m).unwrap();
    /// assert!((a * x).rem(&m).unwrap().is_one());
    /// ```
    pub fn expanded_gcd(a: &Self, b: &Self, modulus: &Self) -> Result<Self, AlgebraError> {
        Self::expanded_gcd_with(a, b, modulus, &PolyConfig::default())
    }

    /// [`Polynomial::expanded_gcd`] with every division step run under
    /// `cfg`.
    ///
    /// A lossy step that leaves the Euclidean remainder's degree unchanged
    /// makes the congruence unsolvable.
    pub fn expanded_gcd_with(
        a: &Self,
        b: &Self,
        modulus: &Self,
        cfg: &PolyConfig,
    ) -> Result<Self, AlgebraError> {
        let mut a = a.rem_with(modulus, cfg)?;
        let mut b = b.rem_with(modulus, cfg)?;
        let mut m = modulus.clone();
        if a.is_one() {
            return Ok(b);
        }

        let g = Self::gcd_with(&a, &m, cfg)?;
        if !g.is_one() {
            if !b.rem_with(&g, cfg)?.is_zero() {
                return Err(AlgebraError::UnsolvablePolynomialEquation);
            }
            a = a.quotient_with(&g, cfg)?;
            b = b.quotient_with(&g, cfg)?;
            m = m.quotient_with(&g, cfg)?;
        }
        if m.deg == 0 {
            // every polynomial is congruent modulo a unit
            return Ok(Self::zero());
        }

        let (mut r0, mut r1) = (m.clone(), a);
        let (mut y0, mut y1) = (Self::zero(), Self::one());
        while !r1.is_zero() {
            let (q, r) = r0.div_rem_with(&r1, cfg)?;
            if !r.is_zero() && r.deg >= r1.deg {
                return Err(AlgebraError::UnsolvablePolynomialEquation);
            }
            let y = y0 - q * &y1;
            r0 = r1;
            r1 = r;
            y0 = y1;
            y1 = y;
        }

        if r0.deg != 0 {
            return Err(AlgebraError::InvariantViolation(format!(
                "reduced congruence still has common factor {}",
                r0
            )));
        }
        let inv = r0
            .leading_coeff()
            .inverse()
            .ok_or(AlgebraError::UnsolvablePolynomialEquation)?;
        (y0.scale(inv) * b).rem_with(&m, cfg)
    }

    /// `self^exp mod modulus` by square-and-multiply with reduction at each
    /// step.
    pub fn pow_mod(&self, exp: u64, modulus: &Self) -> Result<Self, AlgebraError> {
        self.pow_mod_with(exp, modulus, &PolyConfig::default())
    }

    pub fn pow_mod_with(
        &self,
        exp: u64,
        modulus: &Self,
        cfg: &PolyConfig,
    ) -> Result<Self, AlgebraError> {
        let mut base = self.rem_with(modulus, cfg)?;
        let mut result = Self::one().rem_with(modulus, cfg)?;
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = (result * &base).rem_with(modulus, cfg)?;
            }
            e >>= 1;
            if e > 0 {
                base = (&base * &base).rem_with(modulus, cfg)?;
            }
        }
        Ok(result)
    }

    /// `x^(P^n) - x mod modulus`.
    ///
    /// Computed by raising `x` to the `P`-th power `n` times modulo
    /// `modulus`, so the dense `x^(P^n)` is never built.
    pub fn frobenius_residue(n: usize, modulus: &Self) -> Result<Self, AlgebraError> {
        let mut h = Self::x().rem(modulus)?;
        for _ in 0..n {
            h = h.pow_mod(P, modulus)?;
        }
        (h - Self::x()).rem(modulus)
    }

    /// Rabin's irreducibility test.
    ///
    /// For every distinct prime `d` dividing `n = degree()`, requires
    /// `gcd(self, x^(P^(n/d)) - x) == 1`, and finally `x^(P^n) ≡ x` modulo
    /// `self`. Degree `<= 1` is irreducible by definition.
    pub fn rabin_test(&self) -> Result<bool, AlgebraError> {
        let n = self.deg;
        if n <= 1 {
            return Ok(!self.is_zero());
        }

        let mut factorizer = PrimeFactorizer::new();
        for d in factorizer.factorize(n as u64).primes() {
            let h = Self::frobenius_residue(n / d as usize, self)?;
            if !Self::gcd(self, &h)?.is_one() {
                return Ok(false);
            }
        }
        Ok(Self::frobenius_residue(n, self)?.is_zero())
    }

    /// Render with an explicit [`OutputMode`].
    ///
    /// # Example
    ///
    /// ```
    /// use galois_bch::{OutputMode, Polynomial};
    ///
    /// let p = Polynomial::<5>::from_coeffs(&[1, 0, 3]);
    /// assert_eq!(p.render(OutputMode::Minimal).to_string(), "3x^2 + 1");
    /// assert_eq!(p.render(OutputMode::Canonical).to_string(), "3x^2 + 0x + 1");
    /// ```
    pub fn render(&self, mode: OutputMode) -> Rendered<'_, P> {
        Rendered { poly: self, mode }
    }

    /// Render with the output mode of `cfg`.
    pub fn render_with(&self, cfg: &PolyConfig) -> Rendered<'_, P> {
        self.render(cfg.output)
    }
}

/// Display adapter returned by [`Polynomial::render`].
pub struct Rendered<'a, const P: u64> {
    poly: &'a Polynomial<P>,
    mode: OutputMode,
}

impl<const P: u64> fmt::Display for Rendered<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut printed = false;
        for i in (0..self.poly.coeffs.len()).rev() {
            let c = self.poly.coeffs[i];
            if c == Zp::ZERO && self.mode == OutputMode::Minimal {
                continue;
            }
            if printed {
                write!(f, " + ")?;
            }
            if i == 0 || c != Zp::ONE {
                write!(f, "{}", c.value())?;
            }
            match i {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", i)?,
            }
            printed = true;
        }
        if !printed {
            write!(f, "0")?;
        }
        Ok(())
    }
}

impl<const P: u64> fmt::Display for Polynomial<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render(OutputMode::Minimal), f)
    }
}

impl<const P: u64> fmt::Debug for Polynomial<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<u64> = self.coefficients().iter().map(|c| c.value()).collect();
        write!(f, "Polynomial<{}>{:?}", P, values)
    }
}

impl<const P: u64> Default for Polynomial<P> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const P: u64> From<Zp<P>> for Polynomial<P> {
    fn from(c: Zp<P>) -> Self {
        Self::new(vec![c])
    }
}

/* ---- comparison ---- */

impl<const P: u64> PartialEq for Polynomial<P> {
    fn eq(&self, other: &Self) -> bool {
        self.deg == other.deg && self.coefficients() == other.coefficients()
    }
}

impl<const P: u64> Eq for Polynomial<P> {}

impl<const P: u64> Ord for Polynomial<P> {
    /// Degree first, then coefficients from the leading term down.
    fn cmp(&self, other: &Self) -> Ordering {
        self.deg.cmp(&other.deg).then_with(|| {
            self.coefficients()
                .iter()
                .rev()
                .cmp(other.coefficients().iter().rev())
        })
    }
}

impl<const P: u64> PartialOrd for Polynomial<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const P: u64> Hash for Polynomial<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coefficients().hash(state);
    }
}

/* ---- arithmetic operators ---- */

impl<const P: u64> Add for Polynomial<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_coeffs(&rhs, false)
    }
}

impl<const P: u64> Add<&Polynomial<P>> for Polynomial<P> {
    type Output = Self;

    fn add(self, rhs: &Polynomial<P>) -> Self::Output {
        self.add_coeffs(rhs, false)
    }
}

impl<const P: u64> Add for &Polynomial<P> {
    type Output = Polynomial<P>;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_coeffs(rhs, false)
    }
}

impl<const P: u64> AddAssign<&Polynomial<P>> for Polynomial<P> {
    fn add_assign(&mut self, rhs: &Polynomial<P>) {
        if rhs.len() > self.coeffs.len() {
            self.coeffs.resize(rhs.len(), Zp::ZERO);
        }
        for (a, &b) in self.coeffs.iter_mut().zip(rhs.coefficients()) {
            *a = *a + b;
        }
        self.refresh_degree();
    }
}

impl<const P: u64> Neg for Polynomial<P> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        for c in self.coeffs.iter_mut() {
            *c = -*c;
        }
        self
    }
}

impl<const P: u64> Neg for &Polynomial<P> {
    type Output = Polynomial<P>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<const P: u64> Sub for Polynomial<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.add_coeffs(&rhs, true)
    }
}

impl<const P: u64> Sub<&Polynomial<P>> for Polynomial<P> {
    type Output = Self;

    fn sub(self, rhs: &Polynomial<P>) -> Self::Output {
        self.add_coeffs(rhs, true)
    }
}

impl<const P: u64> Sub for &Polynomial<P> {
    type Output = Polynomial<P>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.add_coeffs(rhs, true)
    }
}

impl<const P: u64> SubAssign<&Polynomial<P>> for Polynomial<P> {
    fn sub_assign(&mut self, rhs: &Polynomial<P>) {
        if rhs.len() > self.coeffs.len() {
            self.coeffs.resize(rhs.len(), Zp::ZERO);
        }
        for (a, &b) in self.coeffs.iter_mut().zip(rhs.coefficients()) {
            *a = *a - b;
        }
        self.refresh_degree();
    }
}

impl<const P: u64> Mul for Polynomial<P> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_poly(&rhs)
    }
}

impl<const P: u64> Mul<&Polynomial<P>> for Polynomial<P> {
    type Output = Self;

    fn mul(self, rhs: &Polynomial<P>) -> Self::Output {
        self.mul_poly(rhs)
    }
}

impl<const P: u64> Mul for &Polynomial<P> {
    type Output = Polynomial<P>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_poly(rhs)
    }
}

impl<const P: u64> MulAssign<&Polynomial<P>> for Polynomial<P> {
    fn mul_assign(&mut self, rhs: &Polynomial<P>) {
        *self = self.mul_poly(rhs);
    }
}

/// Scalar multiplication: polynomial * residue
impl<const P: u64> Mul<Zp<P>> for Polynomial<P> {
    type Output = Self;

    fn mul(self, rhs: Zp<P>) -> Self::Output {
        self.scale(rhs)
    }
}

impl<const P: u64> Ring for Polynomial<P> {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn one() -> Self {
        Polynomial::one()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }

    fn is_one(&self) -> bool {
        Polynomial::is_one(self)
    }
}
