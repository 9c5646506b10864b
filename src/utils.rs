//! Scalar arithmetic modulo `Zp`.
//!
//! These helpers work on plain integers and are the leaf of the crate: the
//! typed [`Zp`](crate::Zp) scalar, the polynomial ring and the field
//! machinery all reduce through them.

/// Reduce a signed integer into `[0, zp)`.
///
/// Negative inputs are mapped by adding enough multiples of `zp`.
///
/// # Example
///
/// ```
/// use galois_bch::utils::modulo;
///
/// assert_eq!(modulo(-1, 7), 6);
/// assert_eq!(modulo(-14, 7), 0);
/// assert_eq!(modulo(23, 7), 2);
/// ```
pub const fn modulo(a: i64, zp: u64) -> u64 {
    (a as i128).rem_euclid(zp as i128) as u64
}

/// `base^exp mod zp` by repeated multiplication.
///
/// Exponents handed to this function come from group orders, so the loop is
/// linear in `exp` on purpose; the intermediate product is widened to `u128`.
pub fn powmod(base: u64, exp: u64, zp: u64) -> u64 {
    let base = (base % zp) as u128;
    let zp = zp as u128;
    let mut result: u128 = 1 % zp;
    for _ in 0..exp {
        result = result * base % zp;
    }
    result as u64
}

/// Greatest common divisor by the Euclidean algorithm.
///
/// Symmetric in its arguments, with `gcd(a, 0) == a`.
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    if a < b {
        let t = a;
        a = b;
        b = t;
    }
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Solve `a * x ≡ b (mod zp)` for `x`.
///
/// When `g = gcd(a, zp) != 1` a solution exists only if `g | b`; the equation
/// is then scaled down by `g` before inverting. The returned `x` is reduced
/// modulo `zp / g`.
///
/// Returns `None` when the equation has no solution.
///
/// # Example
///
/// ```
/// use galois_bch::utils::extended_gcd;
///
/// let x = extended_gcd(15, 6, 18).unwrap();
/// assert_eq!(15 * x % 18, 6);
///
/// assert_eq!(extended_gcd(2, 1, 4), None);
/// ```
pub fn extended_gcd(a: u64, b: u64, zp: u64) -> Option<u64> {
    let mut a = a % zp;
    let mut b = b % zp;
    let mut zp = zp;

    if a == 0 {
        return if b == 0 { Some(0) } else { None };
    }
    if a == 1 {
        return Some(b);
    }

    let g = gcd(a, zp);
    if g != 1 {
        if b % g != 0 {
            return None;
        }
        a /= g;
        b /= g;
        zp /= g;
    }
    if zp == 1 {
        return Some(0);
    }

    // Iterative extended Euclid on (zp, a), tracking only a's cofactor.
    let (mut r0, mut r1) = (zp as i128, a as i128);
    let (mut y0, mut y1) = (0i128, 1i128);
    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (y0, y1) = (y1, y0 - q * y1);
    }
    debug_assert_eq!(r0, 1);

    let zp = zp as i128;
    Some((y0.rem_euclid(zp) * b as i128).rem_euclid(zp) as u64)
}

/// Multiplicative inverse of `a` modulo `zp`, if it exists.
pub fn inverse_mod(a: u64, zp: u64) -> Option<u64> {
    extended_gcd(a, 1, zp)
}

/// `base^exp`, or `None` on `u64` overflow.
pub const fn checked_pow(base: u64, exp: usize) -> Option<u64> {
    let mut result: u64 = 1;
    let mut i = 0;
    while i < exp {
        result = match result.checked_mul(base) {
            Some(r) => r,
            None => return None,
        };
        i += 1;
    }
    Some(result)
}

/// Floor of the square root of `n`.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut x = (n as f64).sqrt() as u64;
    while x.checked_mul(x).map_or(true, |sq| sq > n) {
        x -= 1;
    }
    while (x + 1).checked_mul(x + 1).map_or(false, |sq| sq <= n) {
        x += 1;
    }
    x
}

/// Check if `n` is a prime number.
///
/// Uses trial division for `n < 2^32`, which needs at most `2^15` steps.
/// Larger `n` get a deterministic Miller test over a fixed set of seven
/// witnesses that is exact for every `u64`.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    if n < 1 << 32 {
        let mut i = 3;
        while i <= n / i {
            if n % i == 0 {
                return false;
            }
            i += 2;
        }
        return true;
    }
    miller_test(n)
}

const MILLER_WITNESSES: [u64; 7] = [2, 325, 9375, 28178, 450775, 9780504, 1795265022];

const fn mul_mod(a: u64, b: u64, n: u64) -> u64 {
    ((a as u128 * b as u128) % n as u128) as u64
}

const fn square_and_multiply(mut base: u64, mut exp: u64, n: u64) -> u64 {
    let mut result = 1 % n;
    base %= n;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, n);
        }
        base = mul_mod(base, base, n);
        exp >>= 1;
    }
    result
}

/// Strong probable-prime test of odd `n` against every witness.
const fn miller_test(n: u64) -> bool {
    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    let mut w = 0;
    'witness: while w < MILLER_WITNESSES.len() {
        let a = MILLER_WITNESSES[w] % n;
        w += 1;
        if a == 0 {
            continue;
        }

        let mut x = square_and_multiply(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        let mut r = 1;
        while r < s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
            r += 1;
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulo_negative() {
        assert_eq!(modulo(-1, 2), 1);
        assert_eq!(modulo(-3, 5), 2);
        assert_eq!(modulo(-10, 5), 0);
        assert_eq!(modulo(i64::MIN, 7), (i64::MIN as i128).rem_euclid(7) as u64);
    }

    #[test]
    fn modulo_positive() {
        assert_eq!(modulo(0, 5), 0);
        assert_eq!(modulo(4, 5), 4);
        assert_eq!(modulo(12, 5), 2);
    }

    #[test]
    fn powmod_basic() {
        assert_eq!(powmod(3, 0, 7), 1);
        assert_eq!(powmod(3, 1, 7), 3);
        assert_eq!(powmod(3, 6, 7), 1); // Fermat
        assert_eq!(powmod(2, 10, 1000), 24);
        assert_eq!(powmod(5, 3, 1), 0);
    }

    #[test]
    fn gcd_symmetric() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(18, 12), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(1, 99), 1);
        assert_eq!(gcd(13, 13), 13);
    }

    #[test]
    fn extended_gcd_prime_modulus() {
        for a in 1u64..13 {
            for b in 0u64..13 {
                let x = extended_gcd(a, b, 13).unwrap();
                assert_eq!(a * x % 13, b);
            }
        }
    }

    #[test]
    fn extended_gcd_common_factor() {
        // 15x = 6 (mod 18) scales down to 5x = 2 (mod 6)
        let x = extended_gcd(15, 6, 18).unwrap();
        assert_eq!(15 * x % 18, 6);
    }

    #[test]
    fn extended_gcd_unsolvable() {
        assert_eq!(extended_gcd(2, 1, 4), None);
        assert_eq!(extended_gcd(6, 4, 9), None);
        assert_eq!(extended_gcd(0, 3, 7), None);
    }

    #[test]
    fn extended_gcd_zero_equation() {
        assert_eq!(extended_gcd(0, 0, 7), Some(0));
        assert_eq!(extended_gcd(7, 14, 7), Some(0));
    }

    #[test]
    fn inverse_mod_all() {
        for a in 1u64..17 {
            let inv = inverse_mod(a, 17).unwrap();
            assert_eq!(a * inv % 17, 1);
        }
        assert_eq!(inverse_mod(4, 8), None);
    }

    #[test]
    fn checked_pow_overflow() {
        assert_eq!(checked_pow(2, 10), Some(1024));
        assert_eq!(checked_pow(7, 0), Some(1));
        assert_eq!(checked_pow(2, 64), None);
    }

    #[test]
    fn isqrt_values() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(15), 3);
        assert_eq!(isqrt(16), 4);
        assert_eq!(isqrt(17), 4);
        assert_eq!(isqrt(u64::MAX), 4294967295);
    }

    #[test]
    fn small_primes() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(9));
        assert!(is_prime(11));
        assert!(is_prime(13));
    }

    #[test]
    fn larger_primes() {
        assert!(is_prime(101));
        assert!(is_prime(1009));
        assert!(is_prime(104729)); // 10000th prime
        assert!(!is_prime(1000));
    }

    #[test]
    fn primes_near_u64_max() {
        assert!(is_prime(18446744073709551557)); // largest u64 prime
        assert!(!is_prime(u64::MAX));
        assert!(!is_prime(18446744073709551559));
        assert!(is_prime(4294967311)); // smallest prime above 2^32
        // product of the two largest primes below 2^32
        assert!(!is_prime(4294967291 * 4294967279));
        // strong pseudoprime to base 2
        assert!(!is_prime(3215031751));
    }
}
