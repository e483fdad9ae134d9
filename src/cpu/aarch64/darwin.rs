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

use super::{featureflags::STATIC_DETECTED, Aes, PMull};

// Every aarch64-apple-* target statically enables "aes":
//
// ```
// $ rustc --print cfg --target=aarch64-apple-ios | grep -E "aes"
// target_feature="aes"
// ```
pub const MIN_STATIC_FEATURES: u32 = Aes::mask() | PMull::mask();
pub const FORCE_DYNAMIC_DETECTION: u32 = 0;

#[allow(clippy::assertions_on_constants)]
const _AARCH64_APPLE_TARGETS_EXPECTED_FEATURES: () =
    assert!((STATIC_DETECTED & MIN_STATIC_FEATURES) == MIN_STATIC_FEATURES);

pub fn detect_features() -> u32 {
    0
}
