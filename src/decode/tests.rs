use std::io::Read;

use super::*;
use crate::error::TranscodeError;
use crate::format::SourceFormat;

/// Source that yields one byte per read, to hit every chunk boundary.
struct Trickle<'a>(&'a [u8]);

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.0.is_empty() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.0[0];
        self.0 = &self.0[1..];
        Ok(1)
    }
}

fn decode(format: SourceFormat, input: &[u8]) -> Result<Vec<u8>, TranscodeError> {
    let mut out = Vec::new();
    Decoder::new(format, input).read_to_end(&mut out)?;
    Ok(out)
}

fn decode_trickle(format: SourceFormat, input: &[u8]) -> Result<Vec<u8>, TranscodeError> {
    let mut out = Vec::new();
    Decoder::new(format, Trickle(input)).read_to_end(&mut out)?;
    Ok(out)
}

fn is_malformed(result: Result<Vec<u8>, TranscodeError>) -> bool {
    matches!(result, Err(TranscodeError::MalformedInput { .. }))
}

// ===== RAW =====

#[test]
fn test_raw_passthrough() {
    let input: Vec<u8> = (0..=255).collect();
    assert_eq!(decode(SourceFormat::Raw, &input).unwrap(), input);
    assert!(decode(SourceFormat::Raw, b"").unwrap().is_empty());
}

// ===== HEX =====

#[test]
fn test_hex_basic() {
    assert_eq!(
        decode(SourceFormat::Hex, b"DEADBEEF").unwrap(),
        [0xde, 0xad, 0xbe, 0xef]
    );
}

#[test]
fn test_hex_prefix_tolerance() {
    assert_eq!(
        decode(SourceFormat::Hex, b"0xDEADBEEF").unwrap(),
        decode(SourceFormat::Hex, b"DEADBEEF").unwrap()
    );
}

#[test]
fn test_hex_whitespace_tolerance() {
    assert_eq!(
        decode(SourceFormat::Hex, b"DE AD\nBE EF").unwrap(),
        [0xde, 0xad, 0xbe, 0xef]
    );
    assert_eq!(
        decode(SourceFormat::Hex, b"  0xdead\r\n\tbeef\n").unwrap(),
        [0xde, 0xad, 0xbe, 0xef]
    );
}

#[test]
fn test_hex_trailing_newline() {
    assert_eq!(decode(SourceFormat::Hex, b"000102\n").unwrap(), [0, 1, 2]);
}

#[test]
fn test_hex_leading_zero_is_not_prefix() {
    assert_eq!(decode(SourceFormat::Hex, b"0a0b").unwrap(), [0x0a, 0x0b]);
    assert_eq!(decode(SourceFormat::Hex, b"00").unwrap(), [0x00]);
}

#[test]
fn test_hex_prefix_only_at_stream_start() {
    assert!(is_malformed(decode(SourceFormat::Hex, b"de0xad")));
}

#[test]
fn test_hex_prefix_split_across_reads() {
    assert_eq!(
        decode_trickle(SourceFormat::Hex, b"0xDE AD\nBE EF").unwrap(),
        [0xde, 0xad, 0xbe, 0xef]
    );
}

#[test]
fn test_hex_pairs_split_across_reads() {
    let input = b"000102030405060708090a0b0c0d0e0f";
    assert_eq!(
        decode_trickle(SourceFormat::Hex, input).unwrap(),
        decode(SourceFormat::Hex, input).unwrap()
    );
}

#[test]
fn test_hex_split_prefix_is_malformed() {
    assert!(is_malformed(decode(SourceFormat::Hex, b"0 x12")));
    assert!(is_malformed(decode(SourceFormat::Hex, b"0\nx12")));
}

#[test]
fn test_hex_bare_prefix_is_malformed() {
    assert!(is_malformed(decode(SourceFormat::Hex, b"0x")));
    assert!(is_malformed(decode(SourceFormat::Hex, b" 0x \n")));
    assert!(is_malformed(decode_trickle(SourceFormat::Hex, b"0x")));
}

#[test]
fn test_hex_leading_whitespace_across_reads() {
    assert_eq!(
        decode_trickle(SourceFormat::Hex, b" \n\t0xdead").unwrap(),
        [0xde, 0xad]
    );
}

#[test]
fn test_hex_odd_digits() {
    assert!(is_malformed(decode(SourceFormat::Hex, b"abc")));
    assert!(is_malformed(decode(SourceFormat::Hex, b"0")));
}

#[test]
fn test_hex_invalid_digit() {
    assert!(is_malformed(decode(SourceFormat::Hex, b"zz")));
    assert!(is_malformed(decode(SourceFormat::Hex, b"0xDEADBEEG")));
}

#[test]
fn test_hex_empty() {
    assert!(decode(SourceFormat::Hex, b"").unwrap().is_empty());
    assert!(decode(SourceFormat::Hex, b" \n").unwrap().is_empty());
}

#[test]
fn test_hex_large_input_spans_chunks() {
    let data: Vec<u8> = (0..100_000).map(|i| (i % 256) as u8).collect();
    let hex: String = data.iter().map(|b| format!("{:02X}", b)).collect();
    assert_eq!(decode(SourceFormat::Hex, hex.as_bytes()).unwrap(), data);
}

// ===== BASE64 / BASE32 =====

#[test]
fn test_base64_basic() {
    assert_eq!(decode(SourceFormat::Base64, b"aGVsbG8").unwrap(), b"hello");
    assert_eq!(
        decode(SourceFormat::Base64, b"SGVsbG8gV29ybGQ\n").unwrap(),
        b"Hello World"
    );
}

#[test]
fn test_base64_whitespace() {
    assert_eq!(
        decode(SourceFormat::Base64, b"YWJj\r\nZGVm\n").unwrap(),
        b"abcdef"
    );
}

#[test]
fn test_base64_trickle() {
    assert_eq!(
        decode_trickle(SourceFormat::Base64, b"SGVs\nbG8g\nV29y\nbGQ").unwrap(),
        b"Hello World"
    );
}

#[test]
fn test_base64_invalid() {
    assert!(is_malformed(decode(SourceFormat::Base64, b"SGVs!!bG8")));
    assert!(is_malformed(decode(SourceFormat::Base64, b"aGVsbG8=")));
}

#[test]
fn test_base64_rejects_nonzero_trailing_bits() {
    // "aGVsbG8" is canonical; "aGVsbG9" differs only in the unused low bits.
    assert!(is_malformed(decode(SourceFormat::Base64, b"aGVsbG9")));
}

#[test]
fn test_base64_impossible_tail() {
    assert!(is_malformed(decode(SourceFormat::Base64, b"YWJjZ")));
}

#[test]
fn test_base32_basic() {
    assert_eq!(decode(SourceFormat::Base32, b"NBSWY3DP").unwrap(), b"hello");
    assert_eq!(
        decode(SourceFormat::Base32, b"MZXW6YTBOI\n").unwrap(),
        b"foobar"
    );
}

#[test]
fn test_base32_trickle() {
    assert_eq!(
        decode_trickle(SourceFormat::Base32, b"MZXW 6YTB OI").unwrap(),
        b"foobar"
    );
}

#[test]
fn test_base32_rejects_lowercase() {
    assert!(is_malformed(decode(SourceFormat::Base32, b"nbswy3dp")));
    assert!(is_malformed(decode(SourceFormat::Base32, b"NBSWy3DP")));
    assert!(is_malformed(decode_trickle(SourceFormat::Base32, b"MZXW6YTBoi")));
}

#[test]
fn test_base32_invalid() {
    assert!(is_malformed(decode(SourceFormat::Base32, b"NBSWY1DP")));
}

// ===== BASE58 =====

#[test]
fn test_base58_basic() {
    assert_eq!(decode(SourceFormat::Base58, b"Cn8eVZg").unwrap(), b"hello");
}

#[test]
fn test_base58_trims_whitespace() {
    assert_eq!(decode(SourceFormat::Base58, b"  Cn8eVZg\n").unwrap(), b"hello");
}

#[test]
fn test_base58_trickle_matches_whole() {
    assert_eq!(
        decode_trickle(SourceFormat::Base58, b"Cn8eVZg").unwrap(),
        b"hello"
    );
}

#[test]
fn test_base58_empty_rejected() {
    assert!(is_malformed(decode(SourceFormat::Base58, b"")));
    assert!(is_malformed(decode(SourceFormat::Base58, b"\n")));
}

#[test]
fn test_base58_invalid() {
    assert!(is_malformed(decode(SourceFormat::Base58, b"Cn8eVZ0")));
}

#[test]
fn test_base58_small_reads() {
    let mut decoder = Decoder::new(SourceFormat::Base58, &b"Cn8eVZg"[..]);
    let mut out = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        match decoder.read(&mut byte).unwrap() {
            0 => break,
            n => out.extend_from_slice(&byte[..n]),
        }
    }
    assert_eq!(out, b"hello");
}

// ===== MULTIBASE =====

#[test]
fn test_multibase_passthrough() {
    assert_eq!(decode(SourceFormat::Multibase, b"f010203").unwrap(), [1, 2, 3]);
    assert_eq!(decode(SourceFormat::Multibase, b"zLdp\n").unwrap(), [1, 2, 3]);
    assert_eq!(decode(SourceFormat::Multibase, b" mAQID ").unwrap(), [1, 2, 3]);
}

#[test]
fn test_multibase_invalid() {
    assert!(is_malformed(decode(SourceFormat::Multibase, b"")));
    assert!(is_malformed(decode(SourceFormat::Multibase, b"?nope")));
}
