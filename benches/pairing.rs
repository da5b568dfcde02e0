use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use paircheck::{
    CurvePoint, FieldElement, Fr, PairingBackend, PairingEngine, PairingEquation, Verifier, G1, G2,
};

const TERMS: usize = 8;

fn random_terms(rng: &mut StdRng) -> (Vec<G1>, Vec<G2>) {
    let g1: Vec<G1> = (0..TERMS)
        .map(|_| G1::mul_generator(&Fr::random(rng)))
        .collect();
    let g2: Vec<G2> = (0..TERMS)
        .map(|_| G2::mul_generator(&Fr::random(rng)))
        .collect();
    (g1, g2)
}

fn bench_pairing(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let a = G1::mul_generator(&Fr::random(&mut rng));
    let b = G2::mul_generator(&Fr::random(&mut rng));

    c.bench_function("bn254/pairing", |bench| {
        bench.iter(|| {
            let gt = PairingEngine::pairing(black_box(&a), black_box(&b));
            black_box(gt);
        });
    });
}

fn bench_multi_pairing(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let (g1, g2) = random_terms(&mut rng);

    c.bench_function("bn254/multi_pairing_8", |bench| {
        bench.iter(|| {
            let gt = PairingEngine::multi_pairing(black_box(&g1), black_box(&g2)).unwrap();
            black_box(gt);
        });
    });
}

fn bench_verify(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let (g1, g2) = random_terms(&mut rng);
    let verifier = Verifier::<PairingEngine>::new().unwrap();
    let equation = PairingEquation::from_terms(&g1, &g2).unwrap();

    c.bench_function("bn254/verify_8_terms", |bench| {
        bench.iter(|| {
            let accepted = verifier.verify(black_box(&equation)).unwrap();
            black_box(accepted);
        });
    });
}

fn criterion_benches(c: &mut Criterion) {
    bench_pairing(c);
    bench_multi_pairing(c);
    bench_verify(c);
}

criterion_group!(benches, criterion_benches);
criterion_main!(benches);
