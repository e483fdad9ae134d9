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

//! AES-NI.

use super::{Direction, RoundKeys};
use crate::{accel::Required, block::Block};

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

pub(crate) fn transform_block(
    cpu: Required,
    round_keys: &RoundKeys,
    direction: Direction,
    input: Block,
) -> Block {
    let (_aes, _clmul, _ssse3) = cpu;
    // SAFETY: `_aes` proves AES-NI is available and SSE2 is statically
    // enabled (see `cpu::intel::abi_assumptions`).
    unsafe {
        match direction {
            Direction::Encrypt => encrypt(round_keys, input),
            Direction::Decrypt => decrypt(round_keys, input),
        }
    }
}

#[target_feature(enable = "aes")]
unsafe fn encrypt(round_keys: &RoundKeys, input: Block) -> Block {
    let mut state = _mm_xor_si128(load(&input), load(round_keys.first()));
    for round_key in round_keys.middle() {
        state = _mm_aesenc_si128(state, load(round_key));
    }
    state = _mm_aesenclast_si128(state, load(round_keys.last()));
    store(state)
}

// The equivalent inverse cipher (FIPS-197 5.3.5), with InvMixColumns applied
// to the middle round keys here rather than in a separate decryption schedule.
#[target_feature(enable = "aes")]
unsafe fn decrypt(round_keys: &RoundKeys, input: Block) -> Block {
    let mut state = _mm_xor_si128(load(&input), load(round_keys.last()));
    for round_key in round_keys.middle().iter().rev() {
        state = _mm_aesdec_si128(state, _mm_aesimc_si128(load(round_key)));
    }
    state = _mm_aesdeclast_si128(state, load(round_keys.first()));
    store(state)
}

#[inline(always)]
unsafe fn load(block: &Block) -> __m128i {
    _mm_loadu_si128(block.as_ptr().cast())
}

#[inline(always)]
unsafe fn store(state: __m128i) -> Block {
    let mut out = [0u8; 16];
    _mm_storeu_si128(out.as_mut_ptr().cast(), state);
    out
}
