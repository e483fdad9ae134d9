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

//! Multiplication in GF(2^128) as GHASH (NIST SP 800-38D) defines it.
//!
//! A [`FieldElement`] is 16 bytes in the GCM bit order: the most significant
//! bit of byte 0 is the coefficient of x^0 and the least significant bit of
//! byte 15 is the coefficient of x^127. Products are reduced modulo
//! x^128 + x^7 + x^2 + x + 1.
//!
//! Every multiplier in this module works on the POLYVAL (RFC 8452)
//! representation instead. Byte-swapping a GCM element gives its bit
//! reflection as a little-endian 128-bit integer, and bit reflection turns
//! `a * b` into `rev(a) * rev(b) * x^-127`, so multiplying one operand by x
//! up front leaves a product that is reduced by multiplying by x^-128. That
//! reduction is a fixed sequence of shifts and XORs with no data-dependent
//! branches.

use crate::{
    block::{Block, ZERO_BLOCK},
    polyfill::ArraySplitMap as _,
};

pub mod fallback;

cfg_if::cfg_if! {
    if #[cfg(all(target_arch = "aarch64", target_endian = "little"))] {
        pub(crate) mod clmul_aarch64;
        pub(crate) use self::clmul_aarch64 as hw;
    } else if #[cfg(any(target_arch = "x86", target_arch = "x86_64"))] {
        pub(crate) mod clmul_x86;
        pub(crate) use self::clmul_x86 as hw;
    } else {
        pub(crate) mod hw {
            use super::FieldElement;
            use crate::accel::Required;

            pub(crate) fn multiply(
                cpu: Required,
                _a: FieldElement,
                _b: FieldElement,
            ) -> FieldElement {
                match cpu {}
            }
        }
    }
}

/// An element of GF(2^128) in the GCM bit order.
pub type FieldElement = Block;

/// The additive identity.
pub const ZERO: FieldElement = ZERO_BLOCK;

/// The multiplicative identity: the polynomial `1`.
pub const ONE: FieldElement = [0x80, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

/// A POLYVAL element as `[low, high]` 64-bit words.
type Lanes = [u64; 2];

/// A 256-bit unreduced product, least significant word first.
type Product = [u64; 4];

/// Computes `a * b` given a 128x128-bit carry-less multiplication.
#[inline(always)]
pub(crate) fn multiply_with(
    a: FieldElement,
    b: FieldElement,
    clmul128: impl FnOnce(Lanes, Lanes) -> Product,
) -> FieldElement {
    let product = clmul128(to_lanes(a), mul_x(to_lanes(b)));
    from_lanes(reduce(product))
}

#[inline(always)]
fn to_lanes(a: FieldElement) -> Lanes {
    let [hi, lo] = a.array_split_map(u64::from_be_bytes);
    [lo, hi]
}

#[inline(always)]
fn from_lanes([lo, hi]: Lanes) -> FieldElement {
    let mut out = ZERO_BLOCK;
    let (out_hi, out_lo) = out.split_at_mut(8);
    out_hi.copy_from_slice(&hi.to_be_bytes());
    out_lo.copy_from_slice(&lo.to_be_bytes());
    out
}

// mulX_POLYVAL from RFC 8452 Appendix A. The irreducible polynomial is
// 1 + x^121 + x^126 + x^127 + x^128, so an overflowing bit is folded back in
// as 0xc200...0001, selected with a mask instead of a branch.
#[inline(always)]
fn mul_x([mut lo, mut hi]: Lanes) -> Lanes {
    let carry = 0u64.wrapping_sub(hi >> 63);

    hi <<= 1;
    hi |= lo >> 63;
    lo <<= 1;

    lo ^= carry & 1;
    hi ^= carry & 0xc200000000000000;

    [lo, hi]
}

// Multiplies the 256-bit product by x^-128 modulo the POLYVAL polynomial.
// `r2` and `r3` shift into position and `r0` and `r1` are multiplied by
//
//   x^-128 = x^-7 + x^-2 + x^-1 + 1
//
// The x^-7, x^-2 and x^-1 terms shift bits past x^0, which would need a
// second reduction. Instead the excess bits are folded into `r1` first. See
// slides 17-19 of
// https://crypto.stanford.edu/RealWorldCrypto/slides/gueron.pdf.
#[inline(always)]
fn reduce([r0, mut r1, mut r2, mut r3]: Product) -> Lanes {
    r1 ^= (r0 << 63) ^ (r0 << 62) ^ (r0 << 57);

    // 1
    r2 ^= r0;
    r3 ^= r1;

    // x^-1
    r2 ^= r0 >> 1;
    r2 ^= r1 << 63;
    r3 ^= r1 >> 1;

    // x^-2
    r2 ^= r0 >> 2;
    r2 ^= r1 << 62;
    r3 ^= r1 >> 2;

    // x^-7
    r2 ^= r0 >> 7;
    r2 ^= r1 << 57;
    r3 ^= r1 >> 7;

    [r2, r3]
}
