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

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
use wasm_bindgen_test::{wasm_bindgen_test as test, wasm_bindgen_test_configure};

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
wasm_bindgen_test_configure!(run_in_browser);

use aesce::{
    gcm::{self, fallback, FieldElement},
    test, test_file, Accelerator, Backend,
};

#[test]
fn gcm_multiply_known_answer() {
    let accel = Accelerator::new();
    test::run(test_file!("gcm_mul_tests.txt"), |section, test_case| {
        assert_eq!(section, "");
        let x = test_case.consume_block("X");
        let y = test_case.consume_block("Y");
        let product = test_case.consume_block("Product");

        assert_eq!(fallback::multiply(x, y), product);
        assert_eq!(fallback::multiply(y, x), product);

        if let Some(accel) = accel {
            assert_eq!(accel.multiply(x, y), product);
            assert_eq!(accel.multiply(y, x), product);
        }
        Ok(())
    })
}

// GHASH over NIST GCM Test Case 3's ciphertext and length block, one
// multiplication per block, ending in the tag mask input.
#[test]
fn gcm_multiply_ghash_chain() {
    fn ghash(multiply: impl Fn(FieldElement, FieldElement) -> FieldElement) -> FieldElement {
        let h = block("b83b533708bf535d0aa6e52980d53b78");
        let blocks = [
            "42831ec2217774244b7221b784d0d49c",
            "e3aa212f2c02a4e035c17e2329aca12e",
            "21d514b25466931c7d8f6a5aac84aa05",
            "1ba30b396a0aac973d58e091473f5985",
            // len(A) || len(C) in bits.
            "00000000000000000000000000000200",
        ];
        blocks.iter().fold(gcm::ZERO, |xi, b| {
            let mut xi = xi;
            xi.iter_mut().zip(block(b)).for_each(|(x, b)| *x ^= b);
            multiply(xi, h)
        })
    }

    let expected = block("7f1b32b81b820d02614f8895ac1d4eac");
    assert_eq!(ghash(fallback::multiply), expected);
    if let Some(accel) = Accelerator::new() {
        assert_eq!(ghash(|a, b| accel.multiply(a, b)), expected);
    }
}

#[test]
fn gcm_multiply_algebra() {
    fn check(multiply: impl Fn(FieldElement, FieldElement) -> FieldElement) {
        let iterations = if cfg!(feature = "slow_tests") {
            4096
        } else {
            128
        };
        for _ in 0..iterations {
            let a = random_element();
            let b = random_element();
            let c = random_element();

            assert_eq!(multiply(a, gcm::ONE), a);
            assert_eq!(multiply(gcm::ONE, a), a);
            assert_eq!(multiply(a, gcm::ZERO), gcm::ZERO);
            assert_eq!(multiply(a, b), multiply(b, a));

            // (a * b) * c == a * (b * c)
            assert_eq!(multiply(multiply(a, b), c), multiply(a, multiply(b, c)));

            // a * (b + c) == a * b + a * c
            let sum = xor(b, c);
            assert_eq!(multiply(a, sum), xor(multiply(a, b), multiply(a, c)));
        }
    }

    check(fallback::multiply);
    if let Some(accel) = Accelerator::new() {
        check(|a, b| accel.multiply(a, b));
    }
}

#[test]
fn gcm_hardware_matches_fallback() {
    let accel = match Accelerator::new() {
        Some(accel) => accel,
        None => return,
    };
    let backend: &dyn Backend = &accel;

    let iterations = if cfg!(feature = "slow_tests") {
        65536
    } else {
        1024
    };
    for _ in 0..iterations {
        let a = random_element();
        let b = random_element();
        assert_eq!(backend.multiply(a, b), fallback::multiply(a, b));
    }
}

fn xor(a: FieldElement, b: FieldElement) -> FieldElement {
    let mut r = a;
    r.iter_mut().zip(b).for_each(|(r, b)| *r ^= b);
    r
}

fn block(hex: &str) -> FieldElement {
    FieldElement::try_from(test::from_hex(hex).unwrap().as_slice()).unwrap()
}

fn random_element() -> FieldElement {
    let mut element = gcm::ZERO;
    getrandom::getrandom(&mut element).unwrap();
    element
}
