//! End-to-end tests for the huffpack codec.
//!
//! These exercise the full path in both directions — histogram -> tree ->
//! code table -> container -> payload, and container -> tree -> decoded
//! bytes — verifying that the output always matches the input and that
//! malformed containers are rejected rather than misdecoded.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use huffpack_core::error::{Error, FormatError};
use huffpack_core::{compress, compress_bytes, decompress, decompress_bytes};

fn round_trip(input: &[u8]) {
    let container = compress_bytes(input).expect("compression failed");
    let output = decompress_bytes(&container).expect("decompression failed");
    assert_eq!(output, input, "round trip altered the data");
}

#[test]
fn round_trips_small_inputs() {
    round_trip(b"");
    round_trip(b"a");
    round_trip(b"aaaa");
    round_trip(b"aabb");
    round_trip(b"abc");
    round_trip(b"hello world! this is a test of the huffpack codec: aaaaaa bbbb cc");
}

#[test]
fn round_trips_full_alphabet() {
    let input: Vec<u8> = (0..=255u8).collect();
    round_trip(&input);

    // Every value repeated unevenly, so the tree is irregular.
    let mut skewed = Vec::new();
    for value in 0..=255u8 {
        skewed.extend(std::iter::repeat(value).take(1 + value as usize % 17));
    }
    round_trip(&skewed);
}

#[test]
fn round_trips_binary_data_with_marker_collisions() {
    // Symbols that collide with the format's marker and separator bytes.
    round_trip(b"0101010 , , 111 000");
    round_trip(&[b'0', b'1', b',', b' ', 0x00, 0xFF, b' ', b','].repeat(50));
}

#[test]
fn round_trips_seeded_random_data() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for size in [1usize, 2, 63, 64, 65, 1000, 65_536] {
        let input: Vec<u8> = (0..size).map(|_| rng.gen()).collect();
        round_trip(&input);
    }
}

#[test]
fn round_trips_seeded_skewed_data() {
    // Highly skewed histograms make deep trees; exercise long codes.
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut input = vec![b'a'; 50_000];
    for _ in 0..40 {
        let pos = rng.gen_range(0..input.len());
        input[pos] = rng.gen();
    }
    round_trip(&input);
}

#[test]
fn containers_are_byte_identical_across_runs() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let input: Vec<u8> = (0..10_000).map(|_| rng.gen_range(b'a'..=b'h')).collect();

    let first = compress_bytes(&input).unwrap();
    let second = compress_bytes(&input).unwrap();
    assert_eq!(first, second, "tie-break is not deterministic");
}

#[test]
fn degenerate_single_symbol_container_layout() {
    let container = compress_bytes(b"aaaa").unwrap();

    // Header `4,`, tree shape `1a`, separator, one fully-padded zero byte.
    assert_eq!(container, b"4,1a \x00");
    assert_eq!(decompress_bytes(&container).unwrap(), b"aaaa");
}

#[test]
fn repetitive_input_compresses_well() {
    let input = b"The quick brown fox jumps over the lazy dog. ".repeat(200);

    let mut container = Vec::new();
    let stats = compress(std::io::Cursor::new(&input), &mut container).unwrap();
    assert!(stats.ratio() < 0.7, "ratio was {}", stats.ratio());

    let mut output = Vec::new();
    let stats = decompress(std::io::Cursor::new(&container), &mut output).unwrap();
    assert_eq!(output, input);
    assert_eq!(stats.output_bytes, input.len() as u64);
}

#[test]
fn truncated_tree_shape_is_rejected() {
    let container = compress_bytes(b"some moderately varied input text").unwrap();

    // Cut inside the tree shape: keep the header and a few shape bytes.
    let cut = container.iter().position(|&b| b == b',').unwrap() + 3;
    let result = decompress_bytes(&container[..cut]);
    assert!(matches!(
        result,
        Err(Error::Format(
            FormatError::TruncatedTree { .. } | FormatError::MissingSeparator
        ))
    ));
}

#[test]
fn truncated_payload_is_rejected() {
    let input = b"abcdefgh".repeat(64);
    let container = compress_bytes(&input).unwrap();

    let result = decompress_bytes(&container[..container.len() - 8]);
    assert!(matches!(
        result,
        Err(Error::Format(FormatError::PayloadExhausted { .. }))
    ));
}

#[test]
fn garbage_input_is_rejected_not_crashed() {
    assert!(decompress_bytes(b"").is_err());
    assert!(decompress_bytes(b"not a container").is_err());
    assert!(decompress_bytes(&[0xFF; 128]).is_err());
    assert!(decompress_bytes(b"4,").is_err());
}
