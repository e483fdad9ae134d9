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

//! PCLMULQDQ.

use super::{multiply_with, FieldElement, Lanes, Product};
use crate::accel::Required;

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

pub(crate) fn multiply(cpu: Required, a: FieldElement, b: FieldElement) -> FieldElement {
    let (_aes, _clmul, _ssse3) = cpu;
    // SAFETY: `_clmul` proves PCLMULQDQ is available.
    multiply_with(a, b, |a, b| unsafe { clmul128(a, b) })
}

// Schoolbook multiplication with four partial products. The two middle
// products are combined and split across the outer halves.
#[target_feature(enable = "pclmulqdq")]
unsafe fn clmul128(a: Lanes, b: Lanes) -> Product {
    let a = load(a);
    let b = load(b);

    let lo = _mm_clmulepi64_si128(a, b, 0x00);
    let hi = _mm_clmulepi64_si128(a, b, 0x11);
    let mid = _mm_xor_si128(
        _mm_clmulepi64_si128(a, b, 0x01),
        _mm_clmulepi64_si128(a, b, 0x10),
    );

    let lo = _mm_xor_si128(lo, _mm_slli_si128(mid, 8));
    let hi = _mm_xor_si128(hi, _mm_srli_si128(mid, 8));

    let [r0, r1] = store(lo);
    let [r2, r3] = store(hi);
    [r0, r1, r2, r3]
}

#[allow(clippy::cast_possible_wrap)]
#[inline(always)]
unsafe fn load([lo, hi]: Lanes) -> __m128i {
    _mm_set_epi64x(hi as i64, lo as i64)
}

#[inline(always)]
unsafe fn store(v: __m128i) -> Lanes {
    let mut out = [0u64; 2];
    _mm_storeu_si128(out.as_mut_ptr().cast(), v);
    out
}
