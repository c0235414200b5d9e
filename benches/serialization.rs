use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flatjson::{decode_flat, encode_flat, encode_script, CodecOptions, FlatMap, PerfReportForm};

fn bindings_map(size: usize) -> FlatMap {
    (0..size)
        .map(|i| (format!("action.{}", i), format!("Ctrl+Shift+{}", i)))
        .collect()
}

fn benchmark_encode_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_flat");

    for size in [10, 50, 100, 500].iter() {
        let map = bindings_map(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &map, |b, map| {
            b.iter(|| encode_flat(black_box(map)))
        });
    }
    group.finish();
}

fn benchmark_decode_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_flat");

    for size in [10, 50, 100, 500].iter() {
        let text = encode_flat(&bindings_map(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| decode_flat(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_escaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("escaping");

    let plain: FlatMap = [("key", "plain value without anything to escape")]
        .into_iter()
        .collect();
    let heavy: FlatMap = [("key", "\"quoted\"\\path\\to\\file\n\tindented\r\n")]
        .into_iter()
        .collect();

    group.bench_function("encode_plain", |b| b.iter(|| encode_flat(black_box(&plain))));
    group.bench_function("encode_heavy", |b| b.iter(|| encode_flat(black_box(&heavy))));

    let heavy_text = encode_flat(&heavy);
    group.bench_function("decode_heavy", |b| {
        b.iter(|| decode_flat(black_box(&heavy_text)))
    });

    group.finish();
}

fn benchmark_script_preview(c: &mut Criterion) {
    let mut form = PerfReportForm::new();
    for i in 0..50 {
        form.add_script_node(format!("Chart: metric {} vs nodes", i));
    }
    let options = CodecOptions::default();

    c.bench_function("script_preview", |b| {
        b.iter(|| black_box(&form).script_preview(&options))
    });

    let document = form.script_document();
    c.bench_function("encode_script", |b| {
        b.iter(|| encode_script(black_box(&document)))
    });
}

criterion_group!(
    benches,
    benchmark_encode_flat,
    benchmark_decode_flat,
    benchmark_escaping,
    benchmark_script_preview
);
criterion_main!(benches);
