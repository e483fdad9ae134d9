#![no_main]
use aesce::gcm::{fallback, FieldElement};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u8; 32]| {
    let (a, b) = data.split_at(16);
    let a = FieldElement::try_from(a).unwrap();
    let b = FieldElement::try_from(b).unwrap();

    let product = fallback::multiply(a, b);
    assert_eq!(fallback::multiply(b, a), product);

    if let Some(accel) = aesce::Accelerator::new() {
        assert_eq!(accel.multiply(a, b), product);
    }
});
