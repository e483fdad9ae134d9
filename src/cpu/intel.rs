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

// "Intel" citations are for "Intel 64 and IA-32 Architectures Software
// Developer's Manual", Combined Volumes, December 2024.

mod abi_assumptions {
    use core::mem::size_of;

    // CPUID is executed unconditionally; every CPU with SSE2 has it.
    const _ASSUMES_SSE2: () =
        assert!(cfg!(target_feature = "sse") && cfg!(target_feature = "sse2"));

    #[cfg(target_arch = "x86_64")]
    const _ASSUMED_POINTER_SIZE: usize = 8;
    #[cfg(target_arch = "x86")]
    const _ASSUMED_POINTER_SIZE: usize = 4;
    const _ASSUMED_USIZE_SIZE: () = assert!(size_of::<usize>() == _ASSUMED_POINTER_SIZE);

    const _ASSUMED_ENDIANNESS: () = assert!(cfg!(target_endian = "little"));
}

impl_get_feature! {
    ClMul,
    Ssse3,
    Aes,
}

pub(super) mod featureflags {
    use super::*;
    use crate::{cpu, polyfill::once_cell::race};

    pub(in super::super) fn get_or_init() -> cpu::Features {
        let features = FEATURES.get_or_init(|| {
            // SAFETY: `leaf1_ecx` assumes CPUID is available.
            let ecx = unsafe { leaf1_ecx() };
            cpu::merge(Shift::INITIALIZED_MASK, STATIC_DETECTED, cpuid_to_caps(ecx))
        });
        cpu::Features(features.get())
    }

    static FEATURES: race::OnceNonZeroU32 = race::OnceNonZeroU32::new();

    #[rustfmt::skip]
    pub(crate) const STATIC_DETECTED: u32 = 0
        | if cfg!(target_feature = "aes") { Aes::mask() } else { 0 }
        | if cfg!(target_feature = "pclmulqdq") { ClMul::mask() } else { 0 }
        | if cfg!(target_feature = "ssse3") { Ssse3::mask() } else { 0 }
        ;
}

// SAFETY: This unconditionally uses CPUID because we don't have a good way to
// detect CPUID and because we don't know of a CPU that supports SSE2 (that we
// statically require) but doesn't support CPUID.
#[allow(unused_unsafe)]
unsafe fn leaf1_ecx() -> u32 {
    #[cfg(target_arch = "x86")]
    use core::arch::x86 as arch;
    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64 as arch;

    // Intel: "21.1.1 Notes on Where to Start".
    let leaf0 = unsafe { arch::__cpuid(0) };
    if leaf0.eax >= 1 {
        // SAFETY: `leaf0.eax >= 1` indicates leaf 1 is available.
        let leaf1 = unsafe { arch::__cpuid(1) };
        leaf1.ecx
    } else {
        0
    }
}

fn cpuid_to_caps(leaf1_ecx: u32) -> u32 {
    fn check(ecx: u32, bit: u32) -> bool {
        let shifted = 1 << bit;
        (ecx & shifted) == shifted
    }

    let mut caps = 0;

    // Intel: "Table 1-21. Feature Information Returned in the ECX Register".
    if check(leaf1_ecx, 1) {
        caps |= ClMul::mask();
    }
    if check(leaf1_ecx, 9) {
        caps |= Ssse3::mask();
    }
    if check(leaf1_ecx, 25) {
        caps |= Aes::mask();
    }

    caps
}
