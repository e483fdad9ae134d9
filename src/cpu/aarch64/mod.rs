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

mod abi_assumptions {
    use core::mem::size_of;

    const _ASSUMED_POINTER_SIZE: usize = 8;
    const _ASSUMED_USIZE_SIZE: () = assert!(size_of::<usize>() == _ASSUMED_POINTER_SIZE);

    // The intrinsics are used on little-endian AArch64 only; vector lanes are
    // loaded from and stored to bytes with that assumption.
    const _ASSUMED_ENDIANNESS: () = assert!(cfg!(target_endian = "little"));
}

cfg_if::cfg_if! {
    if #[cfg(any(target_os = "ios", target_os = "macos", target_os = "tvos", target_os = "visionos", target_os = "watchos"))] {
        mod darwin;
        use darwin as detect;
    } else if #[cfg(any(target_os = "android", target_os = "linux"))] {
        mod linux;
        use linux as detect;
    } else if #[cfg(target_os = "windows")] {
        mod windows;
        use windows as detect;
    } else {
        mod detect {
            pub const FORCE_DYNAMIC_DETECTION: u32 = 0;
            #[inline(always)]
            pub fn detect_features() -> u32 { 0 }
        }
    }
}

impl_get_feature! {
    // ARMv8 originally tied PMULL detection to AES detection, and there is
    // no separate "pmull" target feature, so both follow "aes" statically.
    Aes,
    PMull,
}

pub(super) mod featureflags {
    use super::*;
    use crate::{cpu, polyfill::once_cell::race};

    pub(in super::super) fn get_or_init() -> cpu::Features {
        let features = FEATURES.get_or_init(|| {
            let static_detected = STATIC_DETECTED & !detect::FORCE_DYNAMIC_DETECTION;
            cpu::merge(
                Shift::INITIALIZED_MASK,
                static_detected,
                detect::detect_features(),
            )
        });
        cpu::Features(features.get())
    }

    static FEATURES: race::OnceNonZeroU32 = race::OnceNonZeroU32::new();

    #[rustfmt::skip]
    pub(crate) const STATIC_DETECTED: u32 = 0
        | (if cfg!(target_feature = "aes") { Aes::mask() } else { 0 })
        | (if cfg!(target_feature = "aes") { PMull::mask() } else { 0 })
        ;
}
