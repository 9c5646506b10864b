//! Benchmarks for galois-bch polynomial, field and code construction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use galois_bch::{
    BchCode, ConsecutivePolynomialGenerator, FieldChecks, GaloisFieldExtension, Polynomial,
    PrimeFactorizer, Zp,
};

const P: u64 = 65521;
type Poly = Polynomial<P>;

fn dense(n: i64) -> Poly {
    let coeffs: Vec<i64> = (0..n).map(|i| i * 7919 + 1).collect();
    Poly::from_coeffs(&coeffs)
}

fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scalar");

    let a = Zp::<P>::new(12345);
    let b = Zp::<P>::new(54321);

    group.bench_function("mul", |bencher| {
        bencher.iter(|| black_box(a) * black_box(b))
    });

    group.bench_function("solve", |bencher| {
        bencher.iter(|| black_box(a).solve(black_box(b)))
    });

    group.bench_function("factorize_65535", |bencher| {
        bencher.iter(|| PrimeFactorizer::new().factorize(black_box(65535)))
    });

    group.finish();
}

fn bench_poly_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Polynomial");

    for size in [16i64, 64, 256] {
        let a = dense(size);
        let b = dense(size / 2);

        group.bench_with_input(BenchmarkId::new("mul", size), &size, |bencher, _| {
            bencher.iter(|| black_box(&a) * black_box(&a))
        });

        group.bench_with_input(BenchmarkId::new("div_rem", size), &size, |bencher, _| {
            bencher.iter(|| black_box(&a).div_rem(black_box(&b)))
        });

        group.bench_with_input(BenchmarkId::new("gcd", size), &size, |bencher, _| {
            bencher.iter(|| Poly::gcd(black_box(&a), black_box(&b)))
        });
    }

    let p = dense(64);
    let x = Zp::new(42);
    group.bench_function("eval_64", |bencher| {
        bencher.iter(|| black_box(&p).eval(black_box(x)))
    });

    group.finish();
}

fn bench_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("Field");

    group.bench_function("build_gf64", |bencher| {
        bencher.iter(|| {
            let mut gen = ConsecutivePolynomialGenerator::<2, 6>::new();
            GaloisFieldExtension::<2, 6>::build(&mut gen)
        })
    });

    let factor = Polynomial::<2>::from_coeffs(&[1, 0, 0, 1, 0, 0, 0, 0, 1]);
    group.bench_function("rabin_deg8", |bencher| {
        bencher.iter(|| black_box(&factor).rabin_test())
    });

    let mut gen = ConsecutivePolynomialGenerator::<2, 8>::new();
    let field = GaloisFieldExtension::<2, 8>::build(&mut gen).unwrap();
    group.bench_function("minimal_polynomial_gf256", |bencher| {
        bencher.iter(|| field.minimal_polynomial(black_box(7)))
    });

    group.bench_function("bch_255_t4", |bencher| {
        bencher.iter(|| BchCode::<2, 8, 4>::new(black_box(&field)))
    });

    let gf16 = GaloisFieldExtension::<2, 4>::build_with(
        Polynomial::from_coeffs(&[1, 1, 0, 0, 1]),
        Polynomial::x(),
        FieldChecks::default(),
    )
    .unwrap();
    group.bench_function("log_alpha_gf16", |bencher| {
        bencher.iter(|| gf16.log_alpha(black_box(&gf16[11])))
    });

    group.finish();
}

criterion_group!(benches, bench_scalar, bench_poly_operations, bench_field);
criterion_main!(benches);
