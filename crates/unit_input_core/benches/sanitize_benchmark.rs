//! Benchmark for the keystroke path.
//!
//! Every keystroke in the field runs sanitize → parse → clamp, so this has to
//! stay far below a frame budget even for pasted garbage.
//!
//! Run with: cargo bench --package unit_input_core --bench sanitize_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use unit_input_core::{sanitize_input, Unit, UnitInputConfig, ValueEditor};

const INPUTS: [&str; 6] = ["0", "12,5", "1.2.3", "abc", "  99.999 px", "1,000,000.25"];

fn bench_sanitize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize");
    group.throughput(Throughput::Elements(INPUTS.len() as u64));

    group.bench_function("typical_inputs", |b| {
        b.iter(|| {
            for input in INPUTS {
                black_box(sanitize_input(black_box(input)));
            }
        });
    });

    let pasted = "x1,2.3;4 ".repeat(256);
    group.bench_function("pasted_2kb", |b| {
        b.iter(|| black_box(sanitize_input(black_box(&pasted))));
    });

    group.finish();
}

fn bench_edit_text(c: &mut Criterion) {
    let mut editor = ValueEditor::new(UnitInputConfig::default().with_unit(Unit::Pixel));

    c.bench_function("edit_text", |b| {
        b.iter(|| {
            for input in INPUTS {
                black_box(editor.edit_text(black_box(input)));
            }
        });
    });
}

criterion_group!(benches, bench_sanitize, bench_edit_text);
criterion_main!(benches);
