//! Benchmarks for the lookup stages

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use staffdex_core::{Directory, FuzzyEngine, PersonRecord};

const FIRST: &[&str] = &[
    "Alice", "Bob", "Priya", "Marco", "Maria", "Samuel", "Hannah", "Diego", "Yuki", "Fatima",
    "Liam", "Zoe", "Christopher", "Amara", "Oskar", "Ines", "Tariq", "Mei", "Jonas", "Lucia",
];

const LAST: &[&str] = &[
    "Smith", "Lee", "Raman", "Chen", "Okafor", "Becker", "Fernandez", "Tanaka", "Al-Sayed",
    "O'Connor", "Ortiz", "Nolan", "Mensah", "Lindqvist", "Duarte", "Haddad", "Wong", "Novak",
    "Rossi", "Kowalski",
];

/// 400 distinct synthetic names
fn synthetic_engine() -> FuzzyEngine {
    let records = FIRST
        .iter()
        .flat_map(|first| LAST.iter().map(move |last| format!("{first} {last}")))
        .map(|name| {
            let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
            PersonRecord::new(name, email, "Engineer", "Platform", 100_000)
        })
        .collect();
    FuzzyEngine::build(Directory::from_records(records))
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    group.throughput(Throughput::Elements((FIRST.len() * LAST.len()) as u64));

    group.bench_function("build", |b| b.iter(|| black_box(synthetic_engine())));

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let engine = synthetic_engine();

    let mut group = c.benchmark_group("lookup");

    group.bench_function("exact", |b| {
        b.iter(|| engine.lookup(black_box("Priya Raman"), 3))
    });

    group.bench_function("partial", |b| {
        b.iter(|| engine.lookup(black_box("kowalski"), 3))
    });

    group.bench_function("fuzzy", |b| {
        b.iter(|| engine.lookup(black_box("pria ramen"), 3))
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_stages);
criterion_main!(benches);
