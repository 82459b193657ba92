// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for document decoding in the redactguide-document crate.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use redactguide_document::decoder::decode_pdf;
use redactguide_document::fixtures::blank_pdf;

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Decode a 200-page document: parse, walk the page tree, fingerprint.
fn bench_decode(c: &mut Criterion) {
    let bytes = blank_pdf(200);

    c.bench_function("decode_pdf (200 pages)", |b| {
        b.iter(|| {
            let decoded = decode_pdf(black_box(&bytes)).expect("decode");
            black_box(decoded);
        });
    });
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
