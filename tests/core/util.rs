use dedup::core::{blake3_hex, content_hash, sha256_hex, xxh3_128_hex, xxh3_64_hex};
use dedup::HashAlgorithm;
use xxhash_rust::xxh3::{xxh3_128, xxh3_64};

fn is_lower_hex(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

#[test]
fn test_blake3_hex_is_64_chars_lowercase() {
    let hex = blake3_hex(b"hello world");
    assert_eq!(hex.len(), 64);
    assert!(is_lower_hex(&hex));
}

#[test]
fn test_known_vectors_empty_input() {
    assert_eq!(
        sha256_hex(b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        blake3_hex(b""),
        "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
    );
    assert_eq!(xxh3_64_hex(b""), "2d06800538d394c2");
    assert_eq!(xxh3_128_hex(b""), "99aa06d3014798d86001c324468d497f");
}

#[test]
fn test_sha256_abc() {
    assert_eq!(
        sha256_hex(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_xxh3_hex_is_big_endian_canonical_form() {
    let data = br#"{"event_name":"video_play","profile_id":"user_123"}"#;
    assert_eq!(xxh3_128_hex(data), format!("{:032x}", xxh3_128(data)));
    assert_eq!(xxh3_64_hex(data), format!("{:016x}", xxh3_64(data)));
}

#[test]
fn test_content_hash_length_matches_algorithm() {
    let data = br#"{"a":1}"#;
    for algorithm in [
        HashAlgorithm::Xxh3_128,
        HashAlgorithm::Xxh3_64,
        HashAlgorithm::Sha256,
        HashAlgorithm::Blake3,
    ] {
        let hex = content_hash(algorithm, data);
        assert_eq!(hex.len(), algorithm.hex_len(), "{algorithm}");
        assert!(is_lower_hex(&hex));
    }
}

#[test]
fn test_content_hash_dispatches_to_helpers() {
    let data = b"[1,2,3]";
    assert_eq!(content_hash(HashAlgorithm::Sha256, data), sha256_hex(data));
    assert_eq!(content_hash(HashAlgorithm::Blake3, data), blake3_hex(data));
    assert_eq!(content_hash(HashAlgorithm::Xxh3_64, data), xxh3_64_hex(data));
    assert_eq!(
        content_hash(HashAlgorithm::default(), data),
        xxh3_128_hex(data)
    );
}

#[test]
fn test_algorithm_names_parse() {
    assert_eq!("xxh3".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Xxh3_128);
    assert_eq!(" SHA256 ".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
    assert_eq!("blake3".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Blake3);
    assert!("md5".parse::<HashAlgorithm>().is_err());

    for algorithm in [HashAlgorithm::Xxh3_128, HashAlgorithm::Xxh3_64] {
        assert_eq!(algorithm.to_string().parse::<HashAlgorithm>().unwrap(), algorithm);
    }
}
