//! Galois Field Tour
//!
//! This demo walks through:
//! - Building GF(16) from a known modulus and primitive element
//! - Discrete logarithms, Frobenius orbits and minimal polynomials
//! - Splitting a polynomial over the field's elements
//! - Searching for a field with the consecutive generator
//!
//! Run with: cargo run --example field_tour

use galois_bch::{
    AlgebraError, ConsecutivePolynomialGenerator, FieldChecks, GaloisFieldExtension, OutputMode,
    Polynomial,
};

type Gf16 = GaloisFieldExtension<2, 4>;

fn main() -> Result<(), AlgebraError> {
    println!("=== Galois Field Tour ===\n");

    let field = gf16_by_hand()?;
    field_queries(&field)?;
    factorization(&field)?;
    searched_field()?;
    Ok(())
}

/// GF(2^4) = GF(2)[x] / (x^4 + x + 1) with alpha = x
fn gf16_by_hand() -> Result<Gf16, AlgebraError> {
    println!("--- GF(16) from x^4 + x + 1 ---\n");

    let factor = Polynomial::from_coeffs(&[1, 1, 0, 0, 1]);
    let field = Gf16::build_with(factor, Polynomial::x(), FieldChecks::default())?;
    println!("{}", field);
    Ok(field)
}

fn field_queries(field: &Gf16) -> Result<(), AlgebraError> {
    println!("--- Queries ---\n");

    let p = Polynomial::from_coeffs(&[1, 0, 1, 1]);
    println!("log_alpha({}) = {}", p, field.log_alpha(&p)?);
    println!(
        "canonical form of alpha^7: {}",
        field[7].render(OutputMode::Canonical)
    );
    println!();

    for i in [1, 3, 5, 7] {
        let orbit = field.adjoint_elements(i)?;
        let minimal = field.minimal_polynomial(i)?;
        println!("alpha^{:<2} conjugates {:?}  minimal polynomial {}", i, orbit, minimal);
    }
    println!();

    println!(
        "primitive element indices: {:?}\n",
        field.find_all_primitive_elements()
    );
    Ok(())
}

fn factorization(field: &Gf16) -> Result<(), AlgebraError> {
    println!("--- Splitting over field elements ---\n");

    // x^5 + x^4 + x^3 + x^2 = x^2 (x + 1)^3
    let p = Polynomial::from_coeffs(&[0, 0, 1, 1, 1, 1]);
    let factors = field.factorize_by_field_elements(&p)?;
    let rendered: Vec<String> = factors
        .iter()
        .map(|(f, m)| format!("({})^{}", f, m))
        .collect();
    println!("{} = {}\n", p, rendered.join(" * "));
    Ok(())
}

fn searched_field() -> Result<(), AlgebraError> {
    println!("--- Searching GF(2^6) ---\n");

    let mut gen = ConsecutivePolynomialGenerator::<2, 6>::new();
    let field = GaloisFieldExtension::<2, 6>::build(&mut gen)?;
    print!("{}", field.pretty(false));
    println!("multiplicative group has {} elements", field.m_order());

    let mut gen = ConsecutivePolynomialGenerator::<2, 6>::new();
    let irreducibles = GaloisFieldExtension::<2, 6>::find_all_irreducibles(&mut gen)?;
    println!("{} monic irreducible sextics over GF(2)", irreducibles.len());
    Ok(())
}
