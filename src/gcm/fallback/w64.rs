// Copyright (c) 2019, Google Inc.
// Portions Copyright 2020-2024 Brian Smith.
// Portions Copyright 2026 The aesce Authors.
//
// Permission to use, copy, modify, and/or distribute this software for any
// purpose with or without fee is hereby granted, provided that the above
// copyright notice and this permission notice appear in all copies.
//
// THE SOFTWARE IS PROVIDED "AS IS" AND THE AUTHOR DISCLAIMS ALL WARRANTIES
// WITH REGARD TO THIS SOFTWARE INCLUDING ALL IMPLIED WARRANTIES OF
// MERCHANTABILITY AND FITNESS. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY
// SPECIAL, DIRECT, INDIRECT, OR CONSEQUENTIAL DAMAGES OR ANY DAMAGES
// WHATSOEVER RESULTING FROM LOSS OF USE, DATA OR PROFITS, WHETHER IN AN ACTION
// OF CONTRACT, NEGLIGENCE OR OTHER TORTIOUS ACTION, ARISING OUT OF OR IN
// CONNECTION WITH THE USE OR PERFORMANCE OF THIS SOFTWARE.

// u128 multiplication is available and constant time on 64-bit targets.
pub(super) fn clmul64(a: u64, b: u64) -> (u64, u64) {
    #[allow(clippy::cast_possible_truncation)]
    #[inline(always)]
    fn lo(a: u128) -> u64 {
        a as u64
    }

    #[inline(always)]
    fn hi(a: u128) -> u64 {
        lo(a >> 64)
    }

    #[inline(always)]
    fn mul(a: u64, b: u64) -> u128 {
        u128::from(a) * u128::from(b)
    }

    // With one term every four bits, the largest sum of terms is 64/4 = 16,
    // which would overflow into the next term. Masking off the bottom four
    // bits of `a` limits it to 60/4 = 15; those bits are applied separately.
    const A_MASKS: [u64; 4] = [
        0x1111111111111110,
        0x2222222222222220,
        0x4444444444444440,
        0x8888888888888880,
    ];
    const B_MASKS: [u64; 4] = [
        0x1111111111111111,
        0x2222222222222222,
        0x4444444444444444,
        0x8888888888888888,
    ];

    let [a0, a1, a2, a3] = A_MASKS.map(|m| a & m);
    let [b0, b1, b2, b3] = B_MASKS.map(|m| b & m);

    let c0 = mul(a0, b0) ^ mul(a1, b3) ^ mul(a2, b2) ^ mul(a3, b1);
    let c1 = mul(a0, b1) ^ mul(a1, b0) ^ mul(a2, b3) ^ mul(a3, b2);
    let c2 = mul(a0, b2) ^ mul(a1, b1) ^ mul(a2, b0) ^ mul(a3, b3);
    let c3 = mul(a0, b3) ^ mul(a1, b2) ^ mul(a2, b1) ^ mul(a3, b0);

    // The bottom four bits of `a` times `b`.
    let extra = (0..4).fold(0u128, |acc, i| {
        let mask = 0u64.wrapping_sub((a >> i) & 1);
        acc ^ (u128::from(mask & b) << i)
    });

    let [m0, m1, m2, m3] = B_MASKS;
    let lo = (lo(c0) & m0) ^ (lo(c1) & m1) ^ (lo(c2) & m2) ^ (lo(c3) & m3) ^ lo(extra);
    let hi = (hi(c0) & m0) ^ (hi(c1) & m1) ^ (hi(c2) & m2) ^ (hi(c3) & m3) ^ hi(extra);
    (lo, hi)
}
