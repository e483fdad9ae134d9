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

/// An error with absolutely no details.
///
/// *aesce* uses this unit type as the error type in its few fallible
/// operations because the only way to fail is to violate a precondition,
/// such as passing a key schedule with the wrong number of round keys. Such
/// a failure is a bug in the caller and the caller already knows everything
/// there is to know about it.
///
/// `Result<T, aesce::error::Unspecified>` is mostly equivalent to
/// `Result<T, ()>`. However, `aesce::error::Unspecified` implements
/// [`std::error::Error`] when the `std` feature is enabled, and users can
/// implement `From<aesce::error::Unspecified>` to map this to their own
/// error types:
///
/// ```
/// use aesce::{aes, error, Block};
///
/// #[derive(Debug)]
/// enum Error {
///     BadKeySchedule,
///     // [...]
/// }
///
/// impl From<error::Unspecified> for Error {
///     fn from(_: error::Unspecified) -> Self { Error::BadKeySchedule }
/// }
///
/// fn rounds_of(schedule: &[Block]) -> Result<aes::Rounds, Error> {
///     // The `From<error::Unspecified>` implementation above makes this
///     // equivalent to
///     // `aes::RoundKeys::new(schedule).map_err(|_| Error::BadKeySchedule)?`.
///     let round_keys = aes::RoundKeys::new(schedule)?;
///     Ok(round_keys.rounds())
/// }
///
/// assert!(rounds_of(&[[0u8; 16]; 13]).is_ok());
/// assert!(rounds_of(&[[0u8; 16]; 12]).is_err());
/// ```
///
/// [`std::error::Error`]: https://doc.rust-lang.org/std/error/trait.Error.html
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unspecified;

// This is required for the implementation of `std::error::Error`.
impl core::fmt::Display for Unspecified {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("aesce::error::Unspecified")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Unspecified {}
