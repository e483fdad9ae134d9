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

use super::{Aes, PMull};

// Work around a bug in LLVM/rustc where `-C target_cpu=cortex-a72` (and
// `-C target_cpu=native` on Cortex-A72 Raspberry Pi devices in particular)
// enables crypto features even though not all Cortex-A72 CPUs have them:
//
// ```
// $ rustc --print cfg --target=aarch64-unknown-linux-gnu -C target_cpu=cortex-a72 | grep feature
// target_feature="aes"
// target_feature="crc"
// target_feature="neon"
// ```
#[cfg(not(target_env = "uclibc"))]
pub const FORCE_DYNAMIC_DETECTION: u32 = Aes::mask() | PMull::mask();

// `uclibc` does not provide `getauxval` so just use static feature detection
// for it.
#[cfg(target_env = "uclibc")]
pub const FORCE_DYNAMIC_DETECTION: u32 = 0;

#[cfg(target_env = "uclibc")]
pub fn detect_features() -> u32 {
    0
}

#[cfg(not(target_env = "uclibc"))]
pub fn detect_features() -> u32 {
    use libc::{getauxval, AT_HWCAP, HWCAP_AES, HWCAP_PMULL};

    let mut features = 0;

    // SAFETY: `getauxval` has no preconditions.
    let caps = unsafe { getauxval(AT_HWCAP) };

    if caps & HWCAP_AES == HWCAP_AES {
        features |= Aes::mask();
    }
    if caps & HWCAP_PMULL == HWCAP_PMULL {
        features |= PMull::mask();
    }

    features
}
