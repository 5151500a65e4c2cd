//! Pipeline benchmarks.
//!
//! Benchmarks: single-record extraction and parallel batch extraction.
//! Run with: cargo bench -p hwm-extraction --bench pipeline_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hwm_extraction::{ExtractionEngine, FieldQualityHints, FileRecord, RecordInput};

const README: &str = "# Desk Lamp {i}

A 3D printed desk lamp with a laser cut plywood base and a soldered LED strip.

## Build

Print the 40 mm arm joints, cut the 300 mm base and assemble with M3 screws.
Version 1.{i}.0, released under the CERN-OHL-S v2.
";

/// A record with a README, license, BOM, and a handful of design files.
fn sample_record(i: usize) -> Vec<FileRecord> {
    let mut files = vec![
        FileRecord::with_content("README.md", README.replace("{i}", &i.to_string())),
        FileRecord::with_content("LICENSE", "CERN Open Hardware Licence Version 2 - Strongly Reciprocal"),
        FileRecord::with_content("bom.csv", "part,qty\nM3 screw,12\nLED strip,1\n"),
        FileRecord::with_content("docs/assembly.md", "Attach the arm with 25 mm bolts."),
        FileRecord::with_content(".git/HEAD", "ref: refs/heads/main"),
    ];
    for j in 0..20 {
        files.push(FileRecord::new(format!("cad/part_{j:02}.step")));
        files.push(FileRecord::new(format!("stl/part_{j:02}.stl")));
    }
    files
}

fn single_record(c: &mut Criterion) {
    let engine = ExtractionEngine::new();
    let files = sample_record(0);
    let hints = FieldQualityHints::new();

    c.bench_function("process_record", |b| {
        b.iter(|| engine.process_record(&files, &hints));
    });
}

fn batch_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_records");
    group.sample_size(10);

    let engine = ExtractionEngine::new();
    for size in [10, 100, 1000] {
        let records: Vec<RecordInput> = (0..size)
            .map(|i| RecordInput::new(format!("record-{i}"), sample_record(i)))
            .collect();

        group.bench_with_input(BenchmarkId::new("batch", size), &records, |b, records| {
            b.iter(|| engine.process_records(records));
        });
    }
    group.finish();
}

criterion_group!(benches, single_record, batch_records);
criterion_main!(benches);
