//! Fuzzing placeholder for the stealthtext-core codec
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Point a fuzz target at `fuzz_encode`, `fuzz_decode` or `fuzz_scan`
//!    and run it with `cargo fuzz run <target>`

/// Split fuzz input into a carrier and a payload at the first NUL byte
fn split_input(data: &[u8]) -> (&[u8], &[u8]) {
    match data.iter().position(|&b| b == 0) {
        Some(pos) => (&data[..pos], &data[pos + 1..]),
        None => (data, &[]),
    }
}

pub fn fuzz_encode(data: &[u8]) {
    use stealthtext_core::{decode_bytes, encode, is_selector};

    let (carrier, payload) = split_input(data);
    let carrier = String::from_utf8_lossy(carrier);

    // Selectors inside the carrier are decoded as payload; only encode them
    if carrier.chars().any(is_selector) {
        let _ = encode(&carrier, payload);
        return;
    }

    // Encoding may reject the input, but a successful encode must round-trip
    if let Ok(encoded) = encode(&carrier, payload) {
        let recovered = decode_bytes(&encoded).expect("encoded text is never empty");
        assert_eq!(recovered.as_ref(), payload);
    }
}

pub fn fuzz_decode(data: &[u8]) {
    use stealthtext_core::decode;

    // Try to decode - should never panic
    let _ = decode(&String::from_utf8_lossy(data));
}

pub fn fuzz_scan(data: &[u8]) {
    use stealthtext_core::scan_text;

    // Try to scan - should never panic
    let _ = scan_text(&String::from_utf8_lossy(data));
}
