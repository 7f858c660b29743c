//! Dictionary build and annotation throughput
//!
//! Run with: cargo bench --bench annotate

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use termtag_engine::{Annotator, AnnotatorConfig, DictionaryEntry, LabelKind, Language};

/// Synthetic dictionary of two- and three-word terms
fn generate_dictionary(size: usize) -> Vec<DictionaryEntry> {
    (0..size)
        .map(|i| {
            let text = if i % 3 == 0 {
                format!("term{i} alpha{} beta", i % 17)
            } else {
                format!("term{i} gamma{}", i % 29)
            };
            let kind = if i % 5 == 0 {
                LabelKind::Synonym
            } else {
                LabelKind::Label
            };
            DictionaryEntry::new(text, kind, format!("urn:term:{}", i / 2))
        })
        .collect()
}

/// Text of roughly `size` bytes mentioning some dictionary terms
fn generate_text(size: usize) -> String {
    let sentence = "Reports on term3 alpha3 beta and term10 gamma10 arrived, while term7 gamma7 running late. ";
    let mut text = sentence.repeat(size / sentence.len() + 1);
    text.truncate(size);
    text
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [1_000, 10_000, 50_000] {
        let entries = generate_dictionary(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("entries", size), &entries, |b, entries| {
            b.iter(|| {
                Annotator::new(black_box(entries.clone()), AnnotatorConfig::default()).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_annotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("annotate");
    let entries = generate_dictionary(10_000);

    let plain = Annotator::new(entries.clone(), AnnotatorConfig::default()).unwrap();
    let stemmed = Annotator::new(entries, AnnotatorConfig::stemmed(Language::English)).unwrap();

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("plain", size), &text, |b, text| {
            b.iter(|| plain.annotate(black_box(text)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("stemmed", size), &text, |b, text| {
            b.iter(|| stemmed.annotate(black_box(text)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_annotate);
criterion_main!(benches);
