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

//! CPU feature detection.
//!
//! Detection happens at most once per process. The result is stored in a
//! write-once atomic cell; racing first callers may each run the detection
//! but all of them observe the same stored value.

use core::num::NonZeroU32;

/// A witness indicating that CPU features have been detected and cached.
///
/// The detected feature bits travel with the witness, so reading them never
/// touches the cache again.
#[derive(Clone, Copy)]
pub(crate) struct Features(u32);

impl Features {
    #[inline(always)]
    fn values(self) -> u32 {
        self.0
    }
}

pub(crate) trait GetFeature<T> {
    fn get_feature(&self) -> Option<T>;
}

impl<A, B> GetFeature<(A, B)> for Features
where
    Features: GetFeature<A>,
    Features: GetFeature<B>,
{
    #[inline(always)]
    fn get_feature(&self) -> Option<(A, B)> {
        match (self.get_feature(), self.get_feature()) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }
}

impl<A, B, C> GetFeature<(A, B, C)> for Features
where
    Features: GetFeature<A>,
    Features: GetFeature<B>,
    Features: GetFeature<C>,
{
    #[inline(always)]
    fn get_feature(&self) -> Option<(A, B, C)> {
        match (self.get_feature(), self.get_feature(), self.get_feature()) {
            (Some(a), Some(b), Some(c)) => Some((a, b, c)),
            _ => None,
        }
    }
}

#[inline(always)]
pub(crate) fn features() -> Features {
    featureflags::get_or_init()
}

// Declares one zero-sized witness type per feature. A witness can only be
// obtained through `GetFeature`, i.e. after detection found the feature.
macro_rules! impl_get_feature {
    { $( $feature:ident ),+ $(,)? } => {
        #[derive(Clone, Copy)]
        #[repr(u32)]
        enum Shift {
            // Set in every cached value so that the cache is never zero once
            // it has been written.
            Initialized,
            $( $feature, )+
        }

        impl Shift {
            const INITIALIZED_MASK: u32 = 1 << (Shift::Initialized as u32);
        }

        $(
            #[derive(Clone, Copy)]
            pub(crate) struct $feature(());

            impl $feature {
                #[inline(always)]
                const fn mask() -> u32 {
                    1 << (Shift::$feature as u32)
                }
            }

            impl crate::cpu::GetFeature<$feature> for crate::cpu::Features {
                #[inline(always)]
                fn get_feature(&self) -> Option<$feature> {
                    const MASK: u32 = $feature::mask();
                    if (self.values() & MASK) == MASK {
                        Some($feature(()))
                    } else {
                        None
                    }
                }
            }
        )+
    };
}

/// Combines the statically-known and dynamically-detected feature bits into
/// the value stored in the cache.
#[inline(always)]
fn merge(initialized_mask: u32, static_detected: u32, detected: u32) -> NonZeroU32 {
    let detected = if cfg!(feature = "unstable-testing-no-hw") {
        0
    } else {
        detected
    };
    let initialized = match NonZeroU32::new(initialized_mask) {
        Some(initialized) => initialized,
        None => unreachable!(),
    };
    initialized | static_detected | detected
}

cfg_if::cfg_if! {
    if #[cfg(all(target_arch = "aarch64", target_endian = "little"))] {
        pub(crate) mod aarch64;
        use aarch64::featureflags;
    } else if #[cfg(any(target_arch = "x86", target_arch = "x86_64"))] {
        pub(crate) mod intel;
        use intel::featureflags;
    }
}
