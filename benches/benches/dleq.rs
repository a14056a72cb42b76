use ark_std::{
    rand::{rngs::StdRng, SeedableRng},
    UniformRand,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hashlock_dleq::prelude::*;

fn dleq_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0u64);
    let params = CurveParameters::ed25519();
    let bases = DleqBases::standard();
    let secret = Scalar::rand(&mut rng);
    let hashlock = hashlock_for_secret(&secret);

    c.bench_function("Generate proof", |b| {
        b.iter(|| DleqProof::new_for_hashlock(black_box(secret), &bases, black_box(hashlock)))
    });

    let (statement, proof) = DleqProof::new_for_hashlock(secret, &bases, hashlock).unwrap();

    c.bench_function("Generate verification hints", |b| {
        b.iter(|| proof.verification_hints(black_box(&statement), &params))
    });

    let hints = proof.verification_hints(&statement, &params).unwrap();

    c.bench_function("Verify proof", |b| {
        b.iter(|| proof.verify(black_box(&statement), black_box(&hints), &params))
    });

    let counts = [4, 16, 64];
    let mut items = vec![];
    for _ in 0..counts[counts.len() - 1] {
        let secret = Scalar::rand(&mut rng);
        let (statement, proof) = DleqProof::new(secret, &bases, [0u8; 32]).unwrap();
        let hints = proof.verification_hints(&statement, &params).unwrap();
        items.push((statement, proof, hints));
    }
    let mut group = c.benchmark_group("Batch verify");
    for count in counts {
        group.bench_function(format!("{} proofs", count), |b| {
            b.iter(|| verify_batch(black_box(&items[..count]), &params))
        });
    }
    group.finish();
}

criterion_group!(benches, dleq_benchmark);
criterion_main!(benches);
