use ark_std::{
    rand::{rngs::StdRng, SeedableRng},
    UniformRand,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hashlock_dleq::{hint::fake_glv::decompose, prelude::*};

fn hint_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let params = CurveParameters::ed25519();
    let base = CurvePoint::generator().mul(&Scalar::rand(&mut rng));
    let k = Scalar::rand(&mut rng);

    c.bench_function("Decompose scalar", |b| b.iter(|| decompose(black_box(&k))));

    c.bench_function("Generate hint", |b| {
        b.iter(|| ScalarMulHint::new(black_box(&base), black_box(&k), &params))
    });

    let hint = ScalarMulHint::new(&base, &k, &params).unwrap();

    c.bench_function("Verify hint", |b| {
        b.iter(|| hint.verify(black_box(&base), black_box(&k), &params))
    });

    c.bench_function("Bind hint", |b| {
        b.iter(|| hint.bind(black_box(&base), &params))
    });

    c.bench_function("Direct scalar multiplication", |b| {
        b.iter(|| black_box(&base).mul(black_box(&k)))
    });

    let compressed = base.compress();
    let x = compressed.recover_x(&params).unwrap();
    c.bench_function("Decompress with witness", |b| {
        b.iter(|| compressed.decompress(black_box(&x), &params))
    });
    c.bench_function("Recover square root witness", |b| {
        b.iter(|| compressed.recover_x(&params))
    });
}

criterion_group!(benches, hint_benchmark);
criterion_main!(benches);
