// SPDX-License-Identifier: MIT
// Copyright (c) 2025 The nuctrans Authors and Contributors. All Rights Reserved.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nuctrans_num::{set_precision_digits, HighPrecReal};

fn bench_powi(c: &mut Criterion) {
    set_precision_digits(100);
    let base = HighPrecReal::parse("1.0000001").unwrap();
    c.bench_function("high_prec_real_powi_1024", |b| {
        b.iter(|| black_box(base.clone()).powi(black_box(1024)))
    });
}

fn bench_exp_ln(c: &mut Criterion) {
    set_precision_digits(100);
    let value = HighPrecReal::parse("2.5").unwrap();
    c.bench_function("high_prec_real_exp_then_ln", |b| {
        b.iter(|| black_box(value.clone()).exp().ln())
    });
}

criterion_group!(benches, bench_powi, bench_exp_ln);
criterion_main!(benches);
