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

//! AES block transforms and GCM field multiplication using the CPU's
//! cryptography instructions.
//!
//! This crate is the accelerated core of an AES/AES-GCM implementation. It
//! does not expand keys, chain blocks, or pad messages; the layer above it
//! does all of that and calls into this crate one 128-bit block at a time:
//!
//! ```
//! use aesce::{aes, Accelerator, Block};
//!
//! # fn round_keys_from_somewhere() -> [Block; 11] { [[0u8; 16]; 11] }
//! let schedule: [Block; 11] = round_keys_from_somewhere();
//! let round_keys = aes::RoundKeys::new(&schedule[..]).unwrap();
//!
//! match Accelerator::new() {
//!     Some(accel) => {
//!         let ciphertext = accel.encrypt_block(&round_keys, [0u8; 16]);
//!         assert_eq!(accel.decrypt_block(&round_keys, ciphertext), [0u8; 16]);
//!     }
//!     None => {
//!         // Use a software implementation instead.
//!     }
//! }
//! ```
//!
//! Supported instruction sets:
//!
//! <table>
//! <tr><th>Target
//!     <th>Instructions
//! <tr><td><code>x86</code>, <code>x86_64</code>
//!     <td>AES-NI, PCLMULQDQ, and SSSE3.
//! <tr><td><code>aarch64</code> (little-endian)
//!     <td>The ARMv8-A Cryptography Extension (AES and PMULL).
//! </table>
//!
//! On every other target [`is_available()`] returns `false`.
//!
//! # Feature Flags
//!
//! <table>
//! <tr><th>Feature
//!     <th>Description
//! <tr><td><code>alloc (default)</code>
//!     <td>Enable the test-vector framework in <code>aesce::test</code>,
//!         which requires an allocator.
//! <tr><td><code>std</code>
//!     <td>Enable features that use libstd, in particular
//!         <code>std::error::Error</code> integration. Implies `alloc`.
//! <tr><td><code>test_logging</code>
//!     <td>Print the test-vector lines and failing test cases while running
//!         tests. Implies `std`.
//! <tr><td><code>slow_tests</code>
//!     <td>Run more iterations of the randomized tests.
//! <tr><td><code>unstable-testing-no-hw</code>
//!     <td>Ignore the cryptography extension unless the compilation target
//!         enables it statically. Only for testing the "not available"
//!         paths of callers.
//! </table>

#![allow(
    clippy::identity_op,
    clippy::len_without_is_empty,
    clippy::new_without_default,
    unsafe_code
)]
#![deny(missing_docs, variant_size_differences)]
#![forbid(unused_results)]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod debug;

mod polyfill;

mod accel;
pub mod aes;
mod block;

#[cfg(any(
    all(target_arch = "aarch64", target_endian = "little"),
    target_arch = "x86",
    target_arch = "x86_64"
))]
mod cpu;

pub mod error;
pub mod gcm;

#[cfg(feature = "alloc")]
pub mod test;

pub use self::{
    accel::{is_available, Accelerator, Backend},
    block::{Block, BLOCK_LEN},
};
