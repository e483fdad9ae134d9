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

//! Constant-time software multiplication, for CPUs without a carry-less
//! multiply instruction.
//!
//! Based on BoringSSL's gcm_nohw.c, which follows the notes in
//! <https://bearssl.org/constanttime.html#ghash-for-gcm>: integer
//! multiplication with the operands' bits spread four apart, so that carries
//! land in bits that are masked away afterwards.

use super::{multiply_with, FieldElement, Lanes, Product};

cfg_if::cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        mod w64;
        use w64::clmul64;
    } else {
        mod w32;
        use w32::clmul64;
    }
}

/// Computes `a * b` in GF(2^128) without the cryptography extension.
///
/// The result is the same as [`crate::Accelerator::multiply`]. Running time
/// does not depend on the values of `a` or `b`.
pub fn multiply(a: FieldElement, b: FieldElement) -> FieldElement {
    multiply_with(a, b, clmul128)
}

// Karatsuba: three 64x64 products instead of four.
fn clmul128([a0, a1]: Lanes, [b0, b1]: Lanes) -> Product {
    let (r0, mut r1) = clmul64(a0, b0);
    let (mut r2, r3) = clmul64(a1, b1);
    let (mut mid0, mut mid1) = clmul64(a0 ^ a1, b0 ^ b1);
    mid0 ^= r0 ^ r2;
    mid1 ^= r1 ^ r3;
    r2 ^= mid1;
    r1 ^= mid0;
    [r0, r1, r2, r3]
}
