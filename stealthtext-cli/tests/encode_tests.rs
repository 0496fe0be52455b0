use std::fs;
use tempfile::tempdir;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use stealthtext_cli::{commands::encode, PayloadKind};
use stealthtext_core::{decode, strip};

fn write_file<P: AsRef<std::path::Path>>(p: P, data: &[u8]) {
    fs::write(p, data).unwrap();
}

#[test]
fn encode_message_to_file() {
    let td = tempdir().unwrap();
    let out_path = td.path().join("out.txt");

    encode::execute(
        "Hello there",
        Some("meet at noon, bring the map"),
        None,
        Some(out_path.to_str().unwrap()),
        PayloadKind::Auto,
    )
    .unwrap();

    let encoded = fs::read_to_string(&out_path).unwrap();
    assert_eq!(strip(&encoded), "Hello there");
    assert_eq!(decode(&encoded).unwrap(), "meet at noon, bring the map");
}

#[test]
fn encode_text_file_verbatim() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("secret.md");
    let out_path = td.path().join("out.txt");
    write_file(&in_path, "# Notes\nline two\n".as_bytes());

    encode::execute(
        "ok",
        None,
        Some(in_path.to_str().unwrap()),
        Some(out_path.to_str().unwrap()),
        PayloadKind::Auto,
    )
    .unwrap();

    let encoded = fs::read_to_string(&out_path).unwrap();
    assert_eq!(decode(&encoded).unwrap(), "# Notes\nline two\n");
}

#[test]
fn encode_binary_file_as_base64() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("blob.bin");
    let out_path = td.path().join("out.txt");
    let data: Vec<u8> = (0..=255u8).collect();
    write_file(&in_path, &data);

    encode::execute(
        "binary inside",
        None,
        Some(in_path.to_str().unwrap()),
        Some(out_path.to_str().unwrap()),
        PayloadKind::Auto,
    )
    .unwrap();

    let encoded = fs::read_to_string(&out_path).unwrap();
    let hidden = decode(&encoded).unwrap();
    assert_eq!(BASE64.decode(hidden).unwrap(), data);
}

#[test]
fn encode_forced_text_kind() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("payload.dat");
    let out_path = td.path().join("out.txt");
    write_file(&in_path, b"plain words in a .dat file");

    encode::execute(
        "abc",
        None,
        Some(in_path.to_str().unwrap()),
        Some(out_path.to_str().unwrap()),
        PayloadKind::Text,
    )
    .unwrap();

    let encoded = fs::read_to_string(&out_path).unwrap();
    assert_eq!(decode(&encoded).unwrap(), "plain words in a .dat file");
}

#[test]
fn encode_rejects_short_payload() {
    let td = tempdir().unwrap();
    let out_path = td.path().join("out.txt");

    let err = encode::execute(
        "a long carrier sentence",
        Some("hi"),
        None,
        Some(out_path.to_str().unwrap()),
        PayloadKind::Auto,
    )
    .unwrap_err();

    assert!(format!("{:#}", err).contains("Payload too short"));
    assert!(!out_path.exists());
}

#[test]
fn encode_missing_input_file() {
    let td = tempdir().unwrap();
    let missing = td.path().join("nope.txt");

    let result = encode::execute(
        "x",
        None,
        Some(missing.to_str().unwrap()),
        None,
        PayloadKind::Auto,
    );

    assert!(result.is_err());
}

#[test]
fn encode_message_wins_over_input_file() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("payload.txt");
    let out_path = td.path().join("out.txt");
    write_file(&in_path, b"contents of the file");

    encode::execute(
        "ab",
        Some("hello"),
        Some(in_path.to_str().unwrap()),
        Some(out_path.to_str().unwrap()),
        PayloadKind::Auto,
    )
    .unwrap();

    let encoded = fs::read_to_string(&out_path).unwrap();
    assert_eq!(decode(&encoded).unwrap(), "hello");
}
