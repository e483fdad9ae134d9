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

//! Testing framework.
//!
//! Unlike the rest of this crate, this testing framework uses panics pretty
//! liberally. It is designed for the crate's own known-answer tests and is
//! optimized for writing those quickly. The best way to learn it is to look
//! at `tests/aes_tests.rs`.
//!
//! # Example
//!
//! Input files look like this:
//!
//! ```text
//! # This is a comment.
//!
//! [AES-128]
//!
//! Key = 000102030405060708090a0b0c0d0e0f
//! Plaintext = 00112233445566778899aabbccddeeff
//! Ciphertext = 69c4e0d86a7b0430d8cdb78070b4c55a
//! ```
//!
//! Test cases are separated with blank lines. A line of the form `[name]`
//! starts a named section; the section name is passed to the test function
//! with every test case that follows it. Byte values are hex, or a quoted
//! string; the empty sequence of bytes can only be written as `""`.
//!
//! Here's how you would consume the test data:
//!
//! ```ignore
//! use aesce::{test, test_file};
//!
//! test::run(test_file!("aes_tests.txt"), |section, test_case| {
//!     let key = test_case.consume_bytes("Key");
//!     let plaintext = test_case.consume_bytes("Plaintext");
//!     let ciphertext = test_case.consume_bytes("Ciphertext");
//!
//!     // Do the actual testing here
//!     Ok(())
//! });
//! ```

use crate::{block::Block, error};
use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};

/// `test_file!("file_name.txt")` is equivalent to
/// `test::File { file_name: "file_name.txt", contents: include_str!("file_name.txt") }`.
#[macro_export]
macro_rules! test_file {
    ($file_name:expr) => {
        $crate::test::File {
            file_name: $file_name,
            contents: include_str!($file_name),
        }
    };
}

/// A test input file.
#[derive(Clone, Copy)]
pub struct File<'a> {
    /// The name (path) of the file.
    pub file_name: &'a str,

    /// The contents of the file.
    pub contents: &'a str,
}

/// A test case. A test case consists of a set of named attributes. Every
/// attribute in the test case must be consumed exactly once; this helps catch
/// typos and omissions.
#[derive(Debug)]
pub struct TestCase {
    attributes: Vec<(String, String, bool)>,
}

impl TestCase {
    /// Returns the value of an attribute that is encoded as a sequence of an
    /// even number of hex digits, or as a double-quoted UTF-8 string. The
    /// empty (zero-length) value is represented as "".
    pub fn consume_bytes(&mut self, key: &str) -> Vec<u8> {
        self.consume_optional_bytes(key)
            .unwrap_or_else(|| panic!("No attribute named \"{}\"", key))
    }

    /// Like `consume_bytes()` except it returns `None` if the test case
    /// doesn't have the attribute.
    pub fn consume_optional_bytes(&mut self, key: &str) -> Option<Vec<u8>> {
        let s = self.consume_optional_string(key)?;
        let result = if let Some(quoted) = s.strip_prefix('\"') {
            // The value is a quoted UTF-8 string.
            let unquoted = quoted
                .strip_suffix('\"')
                .unwrap_or_else(|| panic!("expected quoted string, found {}", s));
            unquoted.as_bytes().to_vec()
        } else {
            // The value is hex encoded.
            match from_hex(&s) {
                Ok(s) => s,
                Err(err_str) => {
                    panic!("{} in {}", err_str, s);
                }
            }
        };
        Some(result)
    }

    /// Returns the value of an attribute that is exactly one block long,
    /// encoded as hex.
    pub fn consume_block(&mut self, key: &str) -> Block {
        let bytes = self.consume_bytes(key);
        Block::try_from(bytes.as_slice())
            .unwrap_or_else(|_| panic!("\"{}\" is {} bytes, not one block", key, bytes.len()))
    }

    /// Returns the value of an attribute that is a whole number of blocks,
    /// encoded as hex.
    pub fn consume_blocks(&mut self, key: &str) -> Vec<Block> {
        let bytes = self.consume_bytes(key);
        let chunks = bytes.chunks_exact(crate::BLOCK_LEN);
        assert!(
            chunks.remainder().is_empty(),
            "\"{}\" is not a whole number of blocks",
            key
        );
        chunks
            .map(|chunk| Block::try_from(chunk).unwrap_or_else(|_| unreachable!()))
            .collect()
    }

    /// Returns the value of an attribute that is an integer, in decimal
    /// notation.
    pub fn consume_usize(&mut self, key: &str) -> usize {
        let s = self.consume_string(key);
        s.parse::<usize>().unwrap()
    }

    /// Returns the raw value of an attribute, without any unquoting or
    /// other interpretation.
    pub fn consume_string(&mut self, key: &str) -> String {
        self.consume_optional_string(key)
            .unwrap_or_else(|| panic!("No attribute named \"{}\"", key))
    }

    /// Like `consume_string()` except it returns `None` if the test case
    /// doesn't have the attribute.
    pub fn consume_optional_string(&mut self, key: &str) -> Option<String> {
        for (name, value, consumed) in &mut self.attributes {
            if key == name {
                if *consumed {
                    panic!("Attribute {} was already consumed", key);
                }
                *consumed = true;
                return Some(value.clone());
            }
        }
        None
    }
}

/// Reads test cases out of the file with the path given by
/// `test_file.file_name`, calling `f` on each vector until `f` fails or until
/// all the test vectors have been read. `f` can indicate failure either by
/// returning `Err()` or by panicking.
#[track_caller]
pub fn run<F>(test_file: File, mut f: F)
where
    F: FnMut(&str, &mut TestCase) -> Result<(), error::Unspecified>,
{
    let lines = &mut test_file.contents.lines();

    let mut current_section = String::from("");
    let mut failed = false;

    while let Some(mut test_case) = parse_test_case(&mut current_section, lines) {
        let result = f(&current_section, &mut test_case);
        let result = match result {
            Ok(()) => {
                if !test_case
                    .attributes
                    .iter()
                    .any(|&(_, _, consumed)| !consumed)
                {
                    Ok(())
                } else {
                    Err("Test didn't consume all attributes.")
                }
            }
            Err(error::Unspecified) => Err("Test returned Err(error::Unspecified)."),
        };

        if result.is_err() {
            failed = true;
        }

        #[cfg(feature = "test_logging")]
        if let Err(msg) = result {
            std::println!("{}: {}", test_file.file_name, msg);

            for (name, value, consumed) in test_case.attributes {
                let consumed_str = if consumed { "" } else { " (unconsumed)" };
                std::println!("{}{} = {}", name, consumed_str, value);
            }
        };
    }

    if failed {
        panic!("{}: Test failed.", test_file.file_name);
    }
}

/// Decode an string of hex digits into a sequence of bytes. The input must
/// have an even number of digits.
pub fn from_hex(hex_str: &str) -> Result<Vec<u8>, String> {
    if hex_str.len() % 2 != 0 {
        return Err(String::from(
            "Hex string does not have an even number of digits",
        ));
    }

    hex_str
        .as_bytes()
        .chunks(2)
        .map(|digits| -> Result<u8, String> {
            Ok((from_hex_digit(digits[0])? << 4) | from_hex_digit(digits[1])?)
        })
        .collect()
}

fn from_hex_digit(d: u8) -> Result<u8, String> {
    use core::ops::RangeInclusive;
    const DECIMAL: (u8, RangeInclusive<u8>) = (0, b'0'..=b'9');
    const HEX_LOWER: (u8, RangeInclusive<u8>) = (10, b'a'..=b'f');
    const HEX_UPPER: (u8, RangeInclusive<u8>) = (10, b'A'..=b'F');
    for (offset, range) in &[DECIMAL, HEX_LOWER, HEX_UPPER] {
        if range.contains(&d) {
            return Ok(d - range.start() + offset);
        }
    }
    Err(format!("Invalid hex digit '{}'", d as char))
}

fn parse_test_case(
    current_section: &mut String,
    lines: &mut dyn Iterator<Item = &str>,
) -> Option<TestCase> {
    let mut attributes: Vec<(String, String, bool)> = Vec::new();

    let mut is_first_line = true;
    loop {
        let line = lines.next();

        #[cfg(feature = "test_logging")]
        if let Some(text) = &line {
            std::println!("Line: {}", text);
        }

        match line {
            // If we get to EOF when we're not in the middle of a test case,
            // then we're done.
            None if is_first_line => {
                return None;
            }

            // End of the file on a non-empty test cases ends the test case.
            None => {
                return Some(TestCase { attributes });
            }

            // A blank line ends a test case if the test case isn't empty.
            Some("") => {
                if !is_first_line {
                    return Some(TestCase { attributes });
                }
                // Ignore leading blank lines.
            }

            // Comments start with '#'; ignore them.
            Some(line) if line.starts_with('#') => (),

            Some(line) if line.starts_with('[') => {
                assert!(is_first_line);
                assert!(line.ends_with(']'));
                current_section.truncate(0);
                current_section.push_str(line);
                let _ = current_section.pop();
                let _ = current_section.remove(0);
            }

            Some(line) => {
                is_first_line = false;

                let (key, value) = line
                    .split_once(" = ")
                    .unwrap_or_else(|| panic!("Malformed attribute line: {}", line));
                let key = key.trim();
                let value = value.trim();

                // Don't allow the value to be omitted. An empty value can be
                // represented as an empty quoted string.
                assert_ne!(value.len(), 0);

                // Don't accept duplicate keys.
                assert!(
                    attributes.iter().all(|(name, _, _)| name != key),
                    "Duplicate attribute {}",
                    key
                );
                attributes.push((key.to_string(), value.to_string(), false));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_ok() {
        run(test_file!("test/test_1_tests.txt"), |_, test_case| {
            let _ = test_case.consume_string("Key");
            Ok(())
        });
    }

    #[test]
    #[should_panic(expected = "Test failed.")]
    fn one_err() {
        run(test_file!("test/test_1_tests.txt"), |_, test_case| {
            let _ = test_case.consume_string("Key");
            Err(error::Unspecified)
        });
    }

    #[test]
    #[should_panic(expected = "Oh noes!")]
    fn one_panics() {
        run(test_file!("test/test_1_tests.txt"), |_, test_case| {
            let _ = test_case.consume_string("Key");
            panic!("Oh noes!");
        });
    }

    #[test]
    #[should_panic(expected = "Test failed.")]
    fn first_err() {
        err_one(0)
    }

    #[test]
    #[should_panic(expected = "Test failed.")]
    fn middle_err() {
        err_one(1)
    }

    #[test]
    #[should_panic(expected = "Test failed.")]
    fn last_err() {
        err_one(2)
    }

    fn err_one(test_to_fail: usize) {
        let mut n = 0;
        run(test_file!("test/test_3_tests.txt"), |_, test_case| {
            let _ = test_case.consume_string("Key");
            let result = if n != test_to_fail {
                Ok(())
            } else {
                Err(error::Unspecified)
            };
            n += 1;
            result
        });
    }

    #[test]
    #[should_panic(expected = "Test failed.")]
    fn unconsumed_attribute() {
        run(test_file!("test/test_1_tests.txt"), |_, _| Ok(()));
    }

    #[test]
    fn sections_and_blocks() {
        let mut sections = Vec::new();
        run(
            test_file!("test/test_sections_tests.txt"),
            |section, test_case| {
                sections.push(String::from(section));
                let blocks = test_case.consume_blocks("Blocks");
                assert_eq!(blocks.len(), 2);
                assert_eq!(blocks[1][15], 0x1f);
                assert_eq!(test_case.consume_block("One")[0], 0xaa);
                assert_eq!(test_case.consume_bytes("Quoted"), b"abc");
                assert_eq!(test_case.consume_optional_string("Missing"), None);
                Ok(())
            },
        );
        assert_eq!(sections, ["first", "second"]);
    }

    #[test]
    fn from_hex_rejects_garbage() {
        assert_eq!(from_hex("00ff7F"), Ok(alloc::vec![0x00, 0xff, 0x7f]));
        assert!(from_hex("0").is_err());
        assert!(from_hex("zz").is_err());
    }
}
