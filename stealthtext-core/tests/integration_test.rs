//! Integration tests for the complete encode → transport → scan → decode flow

use rand::{RngCore, SeedableRng};
use stealthtext_core::{
    decode, decode_bytes, encode, encode_str, scan_text_with_stats, strip, EncodeBuilder,
    StegoError,
};

#[test]
fn test_full_workflow_text() {
    let carrier = "Meet me at the usual place.";
    let secret = "The package arrives Thursday at 09:30.";

    let encoded = encode_str(carrier, secret).unwrap();

    // Visible text is unchanged
    assert_eq!(strip(&encoded), carrier);

    let (groups, stats) = scan_text_with_stats(&encoded);
    assert_eq!(groups.len(), carrier.chars().count());
    assert_eq!(stats.payload_len, secret.len());
    assert_eq!(stats.empty_groups, 0);

    assert_eq!(decode(&encoded).unwrap(), secret);
}

#[test]
fn test_random_binary_payload() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(123);
    let mut data = vec![0u8; 10_000];
    rng.fill_bytes(&mut data);

    let encoded = encode("short carrier", &data).unwrap();
    let recovered = decode_bytes(&encoded).unwrap();

    assert_eq!(recovered.len(), data.len());
    assert_eq!(&recovered[..], &data[..]);
}

#[test]
fn test_multilingual_round_trip() {
    let carrier = "こんにちは世界";
    let secret = "Grüße aus Zürich 🇨🇭 — ¿qué tal?";

    let encoded = encode_str(carrier, secret).unwrap();
    assert_eq!(strip(&encoded), carrier);
    assert_eq!(decode(&encoded).unwrap(), secret);
}

#[test]
fn test_message_embedded_in_larger_document() {
    let encoded = encode_str("signature", "hidden in the footer").unwrap();
    let document = format!("Dear team,\n\nPlease find the report attached.\n\n{}\n", encoded);

    assert_eq!(decode(&document).unwrap(), "hidden in the footer");
}

#[test]
fn test_payload_equal_to_carrier_length() {
    let encoded = encode("abcd", b"wxyz").unwrap();
    let (groups, _) = scan_text_with_stats(&encoded);

    for group in &groups {
        assert_eq!(group.bytes.len(), 1);
    }
    assert_eq!(decode(&encoded).unwrap(), "wxyz");
}

#[test]
fn test_truncated_copy_breaks_utf8() {
    // "é" is two UTF-8 bytes; its second byte is the only one in the last group
    let encoded = encode_str("ab", "xé").unwrap();

    // Copying only part of the text drops the trailing selector
    let truncated: String = encoded.chars().take(encoded.chars().count() - 1).collect();

    assert!(matches!(
        decode(&truncated),
        Err(StegoError::InvalidUtf8 { valid_up_to: 1 })
    ));
}

#[test]
fn test_builder_matches_free_function() {
    let built = EncodeBuilder::new("carrier")
        .payload(b"0123456789".to_vec())
        .build()
        .unwrap();

    assert_eq!(built, encode("carrier", b"0123456789").unwrap());
}

#[test]
fn test_error_messages() {
    assert_eq!(StegoError::EmptyCarrier.to_string(), "Carrier string is empty");
    assert_eq!(
        StegoError::PayloadTooShort {
            payload_len: 1,
            carrier_len: 3
        }
        .to_string(),
        "Payload too short: 1 bytes for a carrier of 3 characters"
    );
}
