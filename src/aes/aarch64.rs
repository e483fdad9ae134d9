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

//! The ARMv8-A Cryptography Extension.
//!
//! `aese` combines AddRoundKey, SubBytes and ShiftRows, in that order, so
//! round key `i` is consumed at the start of round `i + 1` and the last round
//! key is a plain XOR. `aesd` does the same for the inverse cipher.

use super::{Direction, RoundKeys};
use crate::{accel::Required, block::Block};
use core::arch::aarch64::*;

pub(crate) fn transform_block(
    cpu: Required,
    round_keys: &RoundKeys,
    direction: Direction,
    input: Block,
) -> Block {
    let (_aes, _pmull) = cpu;
    // SAFETY: `_aes` proves the AES instructions are available.
    unsafe {
        match direction {
            Direction::Encrypt => encrypt(round_keys, input),
            Direction::Decrypt => decrypt(round_keys, input),
        }
    }
}

#[target_feature(enable = "aes")]
unsafe fn encrypt(round_keys: &RoundKeys, input: Block) -> Block {
    let mut state = load(&input);
    let mut round_key = load(round_keys.first());
    for next in round_keys.middle() {
        state = vaesmcq_u8(vaeseq_u8(state, round_key));
        round_key = load(next);
    }
    state = vaeseq_u8(state, round_key);
    state = veorq_u8(state, load(round_keys.last()));
    store(state)
}

#[target_feature(enable = "aes")]
unsafe fn decrypt(round_keys: &RoundKeys, input: Block) -> Block {
    let mut state = load(&input);
    let mut round_key = load(round_keys.last());
    for next in round_keys.middle().iter().rev() {
        state = vaesimcq_u8(vaesdq_u8(state, round_key));
        round_key = vaesimcq_u8(load(next));
    }
    state = vaesdq_u8(state, round_key);
    state = veorq_u8(state, load(round_keys.first()));
    store(state)
}

#[inline(always)]
unsafe fn load(block: &Block) -> uint8x16_t {
    vld1q_u8(block.as_ptr())
}

#[inline(always)]
unsafe fn store(state: uint8x16_t) -> Block {
    let mut out = [0u8; 16];
    vst1q_u8(out.as_mut_ptr(), state);
    out
}
