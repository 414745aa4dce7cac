// Performance benchmarks for the matching pipeline
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use skillmatch::{Catalog, JobIndex, JobRole, SkillExtractor};

fn skill_pool(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("skill{i}")).collect()
}

fn generate_catalog(roles: usize, skills_per_role: usize, pool: &[String]) -> Catalog {
    let mut rng = rand::rng();
    (0..roles)
        .map(|i| {
            let skills: Vec<&str> = (0..skills_per_role)
                .map(|_| pool[rng.random_range(0..pool.len())].as_str())
                .collect();
            JobRole::new(format!("Role {i}"), skills.join(" "))
        })
        .collect()
}

fn generate_document(words: usize, pool: &[String]) -> String {
    let mut rng = rand::rng();
    (0..words)
        .map(|_| {
            if rng.random_bool(0.2) {
                pool[rng.random_range(0..pool.len())].clone()
            } else {
                "filler".to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn benchmark_index_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_build");
    let pool = skill_pool(2000);

    for roles in [10, 100, 1000].iter() {
        let catalog = generate_catalog(*roles, 12, &pool);
        group.bench_with_input(BenchmarkId::new("skillmatch", roles), &catalog, |b, catalog| {
            b.iter(|| black_box(JobIndex::build(catalog.clone())));
        });
    }

    group.finish();
}

fn benchmark_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    let pool = skill_pool(2000);
    let index = JobIndex::build(generate_catalog(500, 12, &pool));
    let extractor = SkillExtractor::new().unwrap();

    for words in [200, 2000].iter() {
        let text = generate_document(*words, &pool);
        group.bench_with_input(BenchmarkId::new("skillmatch", words), &text, |b, text| {
            b.iter(|| black_box(extractor.extract(black_box(text), index.vocabulary())));
        });
    }

    group.finish();
}

fn benchmark_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    let pool = skill_pool(2000);

    for roles in [10, 100, 1000].iter() {
        let index = JobIndex::build(generate_catalog(*roles, 12, &pool));
        let extractor = SkillExtractor::new().unwrap();
        let skills = extractor.extract(&generate_document(500, &pool), index.vocabulary());
        let candidate = index.vectorize_skills(&skills);

        group.bench_with_input(BenchmarkId::new("skillmatch", roles), &candidate, |b, candidate| {
            b.iter(|| black_box(index.rank(black_box(candidate)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_index_build, benchmark_extract, benchmark_rank);
criterion_main!(benches);
