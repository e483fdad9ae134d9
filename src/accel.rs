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

use crate::{aes, block::Block, gcm};

cfg_if::cfg_if! {
    if #[cfg(all(target_arch = "aarch64", target_endian = "little"))] {
        pub(crate) type Required = (crate::cpu::aarch64::Aes, crate::cpu::aarch64::PMull);
    } else if #[cfg(any(target_arch = "x86", target_arch = "x86_64"))] {
        pub(crate) type Required = (
            crate::cpu::intel::Aes,
            crate::cpu::intel::ClMul,
            crate::cpu::intel::Ssse3,
        );
    } else {
        /// No instruction set is supported on this target.
        #[derive(Clone, Copy)]
        pub(crate) enum Required {}
    }
}

/// Returns `true` if the CPU has the cryptography instructions this crate
/// uses.
///
/// The CPU is queried on the first call only; every call in a process
/// returns the same value, including concurrent first calls.
#[inline]
pub fn is_available() -> bool {
    Accelerator::new().is_some()
}

/// Proof that the CPU has the cryptography instructions this crate uses.
///
/// An `Accelerator` can only be obtained from [`Accelerator::new()`], so
/// holding one means the hardware operations are safe to execute.
#[derive(Clone, Copy)]
pub struct Accelerator {
    cpu: Required,
}

derive_debug_via_name!(Accelerator);

impl Accelerator {
    /// Returns `Some` if the CPU has the required instructions.
    #[inline]
    pub fn new() -> Option<Self> {
        Self::detect()
    }

    #[cfg(any(
        all(target_arch = "aarch64", target_endian = "little"),
        target_arch = "x86",
        target_arch = "x86_64"
    ))]
    #[inline(always)]
    fn detect() -> Option<Self> {
        use crate::cpu::{self, GetFeature as _};
        cpu::features().get_feature().map(|cpu| Self { cpu })
    }

    #[cfg(not(any(
        all(target_arch = "aarch64", target_endian = "little"),
        target_arch = "x86",
        target_arch = "x86_64"
    )))]
    #[inline(always)]
    fn detect() -> Option<Self> {
        None
    }

    /// Encrypts or decrypts one block with AES.
    ///
    /// `round_keys` is the forward key schedule for both directions.
    #[inline]
    pub fn transform_block(
        &self,
        round_keys: &aes::RoundKeys,
        direction: aes::Direction,
        input: Block,
    ) -> Block {
        aes::hw::transform_block(self.cpu, round_keys, direction, input)
    }

    /// Shorthand for `transform_block(round_keys, Direction::Encrypt, input)`.
    #[inline]
    pub fn encrypt_block(&self, round_keys: &aes::RoundKeys, input: Block) -> Block {
        self.transform_block(round_keys, aes::Direction::Encrypt, input)
    }

    /// Shorthand for `transform_block(round_keys, Direction::Decrypt, input)`.
    #[inline]
    pub fn decrypt_block(&self, round_keys: &aes::RoundKeys, input: Block) -> Block {
        self.transform_block(round_keys, aes::Direction::Decrypt, input)
    }

    /// Computes `a * b` in GF(2^128) in the GCM bit order.
    ///
    /// See [`gcm`] for the representation of field elements.
    #[inline]
    pub fn multiply(&self, a: gcm::FieldElement, b: gcm::FieldElement) -> gcm::FieldElement {
        gcm::hw::multiply(self.cpu, a, b)
    }
}

/// The per-block operations of an AES-GCM implementation.
///
/// [`Accelerator`] implements this with the CPU's instructions. Callers that
/// also carry a software implementation can select one at runtime behind a
/// `&dyn Backend`.
pub trait Backend {
    /// Encrypts or decrypts one block with AES.
    fn transform_block(
        &self,
        round_keys: &aes::RoundKeys,
        direction: aes::Direction,
        input: Block,
    ) -> Block;

    /// Computes `a * b` in GF(2^128) in the GCM bit order.
    fn multiply(&self, a: gcm::FieldElement, b: gcm::FieldElement) -> gcm::FieldElement;
}

impl Backend for Accelerator {
    #[inline]
    fn transform_block(
        &self,
        round_keys: &aes::RoundKeys,
        direction: aes::Direction,
        input: Block,
    ) -> Block {
        Accelerator::transform_block(self, round_keys, direction, input)
    }

    #[inline]
    fn multiply(&self, a: gcm::FieldElement, b: gcm::FieldElement) -> gcm::FieldElement {
        Accelerator::multiply(self, a, b)
    }
}
