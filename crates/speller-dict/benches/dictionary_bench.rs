// Criterion benchmarks for speller-dict.
//
// The word list is synthesized in memory (a deterministic walk over
// letter combinations), so the benchmarks need no external files.
//
// Run:
//   cargo bench -p speller-dict

use std::io::Cursor;

use criterion::{Criterion, criterion_group, criterion_main};
use speller_dict::{Dictionary, bucket_index};

// ---------------------------------------------------------------------------
// Synthetic word list
// ---------------------------------------------------------------------------

/// Generate `count` distinct pseudo-words spread across the buckets.
fn synthetic_words(count: usize) -> Vec<String> {
    let letters: Vec<char> = ('a'..='z').collect();
    let mut words = Vec::with_capacity(count);
    for i in 0..count {
        let mut word = String::new();
        word.push(letters[i % 26]);
        word.push(letters[(i / 26) % 26]);
        word.push(letters[(i / 676) % 26]);
        // Vary the tail so chain scans compare realistic lengths.
        for j in 0..(i % 7) {
            word.push(letters[(i + j) % 26]);
        }
        words.push(word);
    }
    words
}

fn loaded_dictionary(words: &[String]) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.load_from_reader(Cursor::new(words.join("\n")))
        .expect("synthetic word list should load");
    dict
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Bulk-load 10k words into a fresh dictionary.
fn bench_load(c: &mut Criterion) {
    let words = synthetic_words(10_000);
    let source = words.join("\n");

    c.bench_function("load_10k_words", |b| {
        b.iter(|| {
            let mut dict = Dictionary::new();
            dict.load_from_reader(Cursor::new(source.clone()))
                .expect("load");
            std::hint::black_box(dict.size());
        });
    });
}

/// Membership lookups that hit, across case variants.
fn bench_check_hits(c: &mut Criterion) {
    let words = synthetic_words(10_000);
    let dict = loaded_dictionary(&words);
    let probes: Vec<String> = words
        .iter()
        .step_by(10)
        .map(|w| w.to_ascii_uppercase())
        .collect();

    c.bench_function("check_1k_hits", |b| {
        b.iter(|| {
            for word in &probes {
                std::hint::black_box(dict.check(word));
            }
        });
    });
}

/// Membership lookups that miss after scanning a full chain.
fn bench_check_misses(c: &mut Criterion) {
    let words = synthetic_words(10_000);
    let dict = loaded_dictionary(&words);
    let probes: Vec<String> = words
        .iter()
        .step_by(10)
        .map(|w| format!("{w}xq"))
        .collect();

    c.bench_function("check_1k_misses", |b| {
        b.iter(|| {
            for word in &probes {
                std::hint::black_box(dict.check(word));
            }
        });
    });
}

/// Raw bucket hashing throughput.
fn bench_bucket_index(c: &mut Criterion) {
    let words = synthetic_words(1_000);

    c.bench_function("bucket_index_1k_words", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(bucket_index(word));
            }
        });
    });
}

/// Full lifecycle: load, a burst of queries, unload.
fn bench_lifecycle(c: &mut Criterion) {
    let words = synthetic_words(1_000);
    let source = words.join("\n");

    c.bench_function("lifecycle_1k_words", |b| {
        b.iter(|| {
            let mut dict = Dictionary::new();
            dict.load_from_reader(Cursor::new(source.clone()))
                .expect("load");
            for word in &words {
                std::hint::black_box(dict.check(word));
            }
            std::hint::black_box(dict.unload());
        });
    });
}

criterion_group!(
    benches,
    bench_load,
    bench_check_hits,
    bench_check_misses,
    bench_bucket_index,
    bench_lifecycle,
);
criterion_main!(benches);
