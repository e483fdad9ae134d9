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

//! PMULL.

use super::{multiply_with, FieldElement, Lanes, Product};
use crate::accel::Required;
use core::arch::aarch64::vmull_p64;

pub(crate) fn multiply(cpu: Required, a: FieldElement, b: FieldElement) -> FieldElement {
    let (_aes, _pmull) = cpu;
    // SAFETY: `_pmull` proves PMULL is available.
    multiply_with(a, b, |a, b| unsafe { clmul128(a, b) })
}

#[allow(clippy::cast_possible_truncation)]
#[target_feature(enable = "neon,aes")]
unsafe fn clmul128([a0, a1]: Lanes, [b0, b1]: Lanes) -> Product {
    let lo = vmull_p64(a0, b0);
    let hi = vmull_p64(a1, b1);
    let mid = vmull_p64(a0, b1) ^ vmull_p64(a1, b0);

    let lo = lo ^ (mid << 64);
    let hi = hi ^ (mid >> 64);

    [lo as u64, (lo >> 64) as u64, hi as u64, (hi >> 64) as u64]
}
