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

use aesce::{aes, Accelerator, Block};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

static VARIANTS: &[(&str, aes::Rounds)] = &[
    ("aes128", aes::Rounds::Aes128),
    ("aes192", aes::Rounds::Aes192),
    ("aes256", aes::Rounds::Aes256),
];

static DIRECTIONS: &[(&str, aes::Direction)] = &[
    ("encrypt", aes::Direction::Encrypt),
    ("decrypt", aes::Direction::Decrypt),
];

fn transform_block(c: &mut Criterion) {
    let accel = match Accelerator::new() {
        Some(accel) => accel,
        None => {
            eprintln!("skipping aes benchmarks: no hardware support");
            return;
        }
    };

    for &(variant_name, rounds) in VARIANTS {
        let schedule: Vec<Block> = (0..rounds.num_round_keys())
            .map(|i| [i as u8; 16])
            .collect();
        let round_keys = aes::RoundKeys::new(&schedule).unwrap();

        for &(direction_name, direction) in DIRECTIONS {
            c.bench_with_input(
                BenchmarkId::new(
                    format!("aes::transform_block::{direction_name}"),
                    variant_name,
                ),
                &direction,
                |b, &direction| {
                    let mut block = [0u8; 16];
                    b.iter(|| {
                        block = accel.transform_block(&round_keys, direction, black_box(block));
                    })
                },
            );
        }
    }
}

criterion_group!(aes, transform_block);
criterion_main!(aes);
