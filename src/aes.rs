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

//! AES (FIPS-197) block transforms over pre-expanded round keys.
//!
//! Key expansion is the caller's job. [`RoundKeys`] wraps the forward
//! (FIPS-197 `KeyExpansion`) schedule, which is used for both directions:
//! decryption derives the equivalent inverse cipher's keys on the fly.

pub use crate::block::{Block, BLOCK_LEN};
use crate::error;

cfg_if::cfg_if! {
    if #[cfg(all(target_arch = "aarch64", target_endian = "little"))] {
        pub(crate) mod aarch64;
        pub(crate) use self::aarch64 as hw;
    } else if #[cfg(any(target_arch = "x86", target_arch = "x86_64"))] {
        pub(crate) mod x86;
        pub(crate) use self::x86 as hw;
    } else {
        pub(crate) mod hw {
            use super::{Block, Direction, RoundKeys};
            use crate::accel::Required;

            pub(crate) fn transform_block(
                cpu: Required,
                _round_keys: &RoundKeys,
                _direction: Direction,
                _input: Block,
            ) -> Block {
                match cpu {}
            }
        }
    }
}

/// Which way a block is transformed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The forward cipher.
    Encrypt,

    /// The inverse cipher.
    Decrypt,
}

/// The AES variants, distinguished by their number of rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounds {
    /// AES-128: 10 rounds.
    Aes128,

    /// AES-192: 12 rounds.
    Aes192,

    /// AES-256: 14 rounds.
    Aes256,
}

impl Rounds {
    /// The number of rounds.
    #[inline]
    pub const fn num_rounds(self) -> usize {
        match self {
            Self::Aes128 => 10,
            Self::Aes192 => 12,
            Self::Aes256 => 14,
        }
    }

    /// The number of round keys in an expanded schedule, one more than the
    /// number of rounds.
    #[inline]
    pub const fn num_round_keys(self) -> usize {
        self.num_rounds() + 1
    }

    fn from_num_round_keys(num_round_keys: usize) -> Result<Self, error::Unspecified> {
        [Self::Aes128, Self::Aes192, Self::Aes256]
            .into_iter()
            .find(|rounds| rounds.num_round_keys() == num_round_keys)
            .ok_or(error::Unspecified)
    }
}

/// The largest number of round keys of any variant.
pub const MAX_ROUND_KEYS: usize = Rounds::Aes256.num_round_keys();

/// A validated, borrowed AES key schedule.
///
/// Holds `Nr + 1` round keys in FIPS-197 order: round key 0 is the
/// whitening key and round key `Nr` is used by the last encryption round.
#[derive(Clone, Copy)]
pub struct RoundKeys<'a> {
    first: &'a Block,
    middle: &'a [Block],
    last: &'a Block,
    rounds: Rounds,
}

derive_debug_from_field!(RoundKeys<'a>, rounds);

impl<'a> RoundKeys<'a> {
    /// Validates the length of an expanded key schedule.
    ///
    /// Fails unless `round_keys` holds exactly 11, 13, or 15 blocks.
    pub fn new(round_keys: &'a [Block]) -> Result<Self, error::Unspecified> {
        let rounds = Rounds::from_num_round_keys(round_keys.len())?;
        let (first, rest) = round_keys.split_first().ok_or(error::Unspecified)?;
        let (last, middle) = rest.split_last().ok_or(error::Unspecified)?;
        Ok(Self {
            first,
            middle,
            last,
            rounds,
        })
    }

    /// The AES variant the schedule is for.
    #[inline]
    pub fn rounds(&self) -> Rounds {
        self.rounds
    }

    /// Round key 0.
    #[inline(always)]
    pub(crate) fn first(&self) -> &'a Block {
        self.first
    }

    /// Round keys 1 through `Nr - 1`.
    #[inline(always)]
    pub(crate) fn middle(&self) -> &'a [Block] {
        self.middle
    }

    /// Round key `Nr`.
    #[inline(always)]
    pub(crate) fn last(&self) -> &'a Block {
        self.last
    }
}

impl<'a> TryFrom<&'a [Block]> for RoundKeys<'a> {
    type Error = error::Unspecified;

    fn try_from(round_keys: &'a [Block]) -> Result<Self, Self::Error> {
        Self::new(round_keys)
    }
}
