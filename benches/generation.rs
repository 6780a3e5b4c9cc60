use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bsp_dungeon::{BspGenerator, GenerationConfig};

fn bench_generate(c: &mut Criterion) {
    let mut generator = BspGenerator::new(GenerationConfig::default().with_seed(42))
        .expect("default config is valid");
    c.bench_function("generate 100x60 depth 6", |b| {
        b.iter(|| black_box(generator.generate()))
    });

    let mut large = BspGenerator::new(GenerationConfig::new(400, 240).with_max_depth(10).with_seed(42))
        .expect("config is valid");
    c.bench_function("generate 400x240 depth 10", |b| {
        b.iter(|| black_box(large.generate()))
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
