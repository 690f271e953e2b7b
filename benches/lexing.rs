use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jsonlex::{Scanner, TokenKind};

/// Builds a synthetic document with `records` array entries.
fn synthetic_document(records: usize) -> String {
    let mut doc = String::from("{\n  \"records\": [\n");
    for i in 0..records {
        doc.push_str(&format!(
            "    {{\"id\": {i}, \"name\": \"record-{i}\", \"score\": {}.5e2, \"ok\": {}}},\n",
            i % 97,
            i % 2 == 0,
        ));
    }
    doc.push_str("    null\n  ]\n}\n");
    doc
}

fn count_tokens(input: &str) -> usize {
    let mut scanner = Scanner::new(input);
    let mut count = 0;
    loop {
        let token = scanner.next_token();
        if token.kind == TokenKind::EndOfInput {
            return count;
        }
        count += 1;
    }
}

fn benchmark_scan_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_document");

    for size in [10, 100, 1000].iter() {
        let doc = synthetic_document(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| count_tokens(black_box(&doc)))
        });
    }
    group.finish();
}

fn benchmark_scan_strings(c: &mut Criterion) {
    let escaped = r#""a\"b\\céd\n" "#.repeat(500);

    c.bench_function("scan_escaped_strings", |b| {
        b.iter(|| count_tokens(black_box(&escaped)))
    });
}

criterion_group!(benches, benchmark_scan_document, benchmark_scan_strings);
criterion_main!(benches);
