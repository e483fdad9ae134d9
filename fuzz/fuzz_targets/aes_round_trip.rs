#![no_main]
use aesce::{aes, Block, BLOCK_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let accel = match aesce::Accelerator::new() {
        Some(accel) => accel,
        None => return,
    };

    let mut blocks: Vec<Block> = data
        .chunks_exact(BLOCK_LEN)
        .map(|chunk| Block::try_from(chunk).unwrap())
        .collect();
    let input = match blocks.pop() {
        Some(input) => input,
        None => return,
    };

    let round_keys = match aes::RoundKeys::new(&blocks) {
        Ok(round_keys) => round_keys,
        Err(_) => return,
    };

    let ciphertext = accel.encrypt_block(&round_keys, input);
    assert_eq!(accel.decrypt_block(&round_keys, ciphertext), input);
});
