// Copyright 2026 The aesce Authors.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHORS DISCLAIM ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHORS BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

#![allow(missing_docs)]

use aesce::{gcm, Accelerator};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const H: gcm::FieldElement = [
    0x66, 0xe9, 0x4b, 0xd4, 0xef, 0x8a, 0x2c, 0x3b, 0x88, 0x4c, 0xfa, 0x59, 0xca, 0x34, 0x2b, 0x2e,
];

fn multiply(c: &mut Criterion) {
    if let Some(accel) = Accelerator::new() {
        c.bench_function("gcm::multiply::hw", |b| {
            let mut xi = gcm::ONE;
            b.iter(|| {
                xi = accel.multiply(black_box(xi), H);
            })
        });
    }

    c.bench_function("gcm::multiply::fallback", |b| {
        let mut xi = gcm::ONE;
        b.iter(|| {
            xi = gcm::fallback::multiply(black_box(xi), H);
        })
    });
}

criterion_group!(gcm, multiply);
criterion_main!(gcm);
