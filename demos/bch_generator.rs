//! BCH Generator Polynomials
//!
//! This demo builds BCH generator polynomials over fields found by the
//! random search, and shows that data operations are reported as not
//! implemented.
//!
//! Run with: cargo run --example bch_generator

use galois_bch::{
    AlgebraError, BchCode, Code, GaloisFieldExtension, RandomPolynomialGenerator,
};

fn describe<C: Code>(name: &str, code: &C, generator: impl std::fmt::Display) {
    println!(
        "{}: n = {}, k = {}, d = {}",
        name,
        code.block_size(),
        code.info_size(),
        code.distance()
    );
    println!("  g(x) = {}", generator);
}

fn main() -> Result<(), AlgebraError> {
    println!("=== BCH Generator Polynomials ===\n");

    let code = BchCode::<2, 4, 2>::random()?;
    describe("BCH(2, 4, 2)", &code, code.generator());
    println!("  h(x) = {}\n", code.check_polynomial()?);

    let mut gen = RandomPolynomialGenerator::<2, 6>::with_seed(2024);
    let field = GaloisFieldExtension::<2, 6>::build(&mut gen)?;
    println!("GF(64) modulus: {}", field.factor());
    // T is a const parameter, so each designed distance is its own type
    let t1 = BchCode::<2, 6, 1>::new(&field)?;
    describe("BCH(2, 6, 1)", &t1, t1.generator());
    let t2 = BchCode::<2, 6, 2>::new(&field)?;
    describe("BCH(2, 6, 2)", &t2, t2.generator());
    let t3 = BchCode::<2, 6, 3>::new(&field)?;
    describe("BCH(2, 6, 3)", &t3, t3.generator());
    println!();

    let ternary = BchCode::<3, 2, 1>::random()?;
    describe("BCH(3, 2, 1)", &ternary, ternary.generator());

    match code.encode(&[1, 0, 1, 1, 0, 1]) {
        Ok(word) => println!("codeword: {:?}", word),
        Err(e) => println!("\nencode: {}", e),
    }
    Ok(())
}
