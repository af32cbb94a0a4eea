//! Benchmark for character generation performance
//!
//! Target: a single character should generate in well under 1ms

use chargen_core::config::ConfigCatalog;
use chargen_core::generator::{CharacterGenerator, GenerationParams, ProfessionChoice};
use chargen_core::render::render_character;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const CATALOG: &str = include_str!("../data/catalog.json");

fn benchmark_generation(c: &mut Criterion) {
    let catalog = ConfigCatalog::from_json_str(CATALOG).unwrap();
    let generator = CharacterGenerator::new(&catalog);

    let agent = GenerationParams {
        profession: ProfessionChoice::parse("federal_agent"),
        ..Default::default()
    };
    c.bench_function("generate_agent", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| black_box(generator.generate(black_box(&agent), &mut rng).unwrap()))
    });

    let damaged_veteran = GenerationParams {
        veteran: true,
        damaged: true,
        random_nationality: true,
        ..Default::default()
    };
    c.bench_function("generate_damaged_veteran", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| black_box(generator.generate(&damaged_veteran, &mut rng).unwrap()))
    });

    let batch = GenerationParams {
        count: 100,
        ..Default::default()
    };
    c.bench_function("generate_batch_100", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        b.iter(|| black_box(generator.generate_many(&batch, &mut rng).unwrap()))
    });
}

fn benchmark_catalog(c: &mut Criterion) {
    c.bench_function("catalog_load_json", |b| {
        b.iter(|| black_box(ConfigCatalog::from_json_str(black_box(CATALOG)).unwrap()))
    });
}

fn benchmark_render(c: &mut Criterion) {
    let catalog = ConfigCatalog::from_json_str(CATALOG).unwrap();
    let params = GenerationParams::default();
    let character = CharacterGenerator::new(&catalog)
        .generate(&params, &mut ChaCha8Rng::seed_from_u64(1))
        .unwrap();

    c.bench_function("render_statblock", |b| {
        b.iter(|| black_box(render_character(black_box(&character))))
    });
}

criterion_group!(benches, benchmark_generation, benchmark_catalog, benchmark_render);
criterion_main!(benches);
