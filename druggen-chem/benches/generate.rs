use criterion::{black_box, criterion_group, criterion_main, Criterion};
use druggen_chem::{
    apply_correlations, generate_candidates, generate_structure, resolve_profile, sample_properties,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DISEASES: &[&str] = &[
    "alzheimers",
    "parkinsons",
    "cancer",
    "diabetes",
    "hypertension",
    "migraine",
];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for &n in &[20i64, 1000] {
        group.bench_function(format!("{}_candidates", n), |b| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| {
                for &d in DISEASES {
                    let _ = generate_candidates(&mut rng, black_box(n), black_box(d));
                }
            })
        });
    }

    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("components");
    let profile = resolve_profile("alzheimers");

    group.bench_function("sample_and_correlate_1k", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| {
            for _ in 0..1000 {
                black_box(apply_correlations(sample_properties(&mut rng, &profile)));
            }
        })
    });

    group.bench_function("structure_1k", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| {
            for _ in 0..1000 {
                black_box(generate_structure(&mut rng));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_components);
criterion_main!(benches);
