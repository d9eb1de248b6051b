//! Whole-buffer entry points into the codec crates.
//!
//! Nothing here streams: every function takes a complete buffer. The
//! `decode` and `encode` modules decide how much of a stream is safe to
//! hand over at once.

use base64_simd::AsOut;
use multibase::Base;

use crate::error::TranscodeError;

/// Standard alphabet, no `=` padding.
const BASE64_ENGINE: &base64_simd::Base64 = &base64_simd::STANDARD_NO_PAD;

/// RFC 4648 base32, upper case, no padding.
const BASE32_BASE: Base = Base::Base32Upper;

/// Lowercase base16.
const HEX_BASE: Base = Base::Base16Lower;

/// Encode bytes as lowercase hex.
pub fn hex_encode(data: &[u8]) -> String {
    HEX_BASE.encode(data)
}

/// Decode an even number of hex digits of either case.
pub fn hex_decode(digits: &[u8]) -> Result<Vec<u8>, TranscodeError> {
    let text = ascii_text("hex", digits)?.to_ascii_lowercase();
    HEX_BASE
        .decode(text)
        .map_err(|e| TranscodeError::malformed("hex", e.to_string()))
}

/// Encodings that map a fixed number of bytes onto a fixed number of
/// characters, so complete groups can be coded independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupCodec {
    Base64,
    Base32,
}

impl GroupCodec {
    pub fn name(self) -> &'static str {
        match self {
            GroupCodec::Base64 => "base64",
            GroupCodec::Base32 => "base32",
        }
    }

    /// Raw bytes per group.
    pub const fn bytes_per_group(self) -> usize {
        match self {
            GroupCodec::Base64 => 3,
            GroupCodec::Base32 => 5,
        }
    }

    /// Encoded characters per group.
    pub const fn chars_per_group(self) -> usize {
        match self {
            GroupCodec::Base64 => 4,
            GroupCodec::Base32 => 8,
        }
    }

    /// Encode `data`, appending to `out`.
    /// Only the last call of a stream may pass a partial group.
    pub fn encode_into(self, data: &[u8], out: &mut Vec<u8>) {
        if data.is_empty() {
            return;
        }
        match self {
            GroupCodec::Base64 => {
                let start = out.len();
                let enc_len = BASE64_ENGINE.encoded_length(data.len());
                out.resize(start + enc_len, 0);
                BASE64_ENGINE.encode(data, out[start..].as_out());
            }
            GroupCodec::Base32 => out.extend_from_slice(BASE32_BASE.encode(data).as_bytes()),
        }
    }

    /// Decode whitespace-free characters.
    /// Only the last call of a stream may pass a partial group.
    pub fn decode(self, chars: &[u8]) -> Result<Vec<u8>, TranscodeError> {
        if chars.is_empty() {
            return Ok(Vec::new());
        }
        match self {
            GroupCodec::Base64 => BASE64_ENGINE
                .decode_to_vec(chars)
                .map_err(|_| TranscodeError::malformed("base64", "invalid character or length")),
            GroupCodec::Base32 => {
                // The codec also takes lower case; the RFC alphabet does not.
                if let Some(pos) = chars.iter().position(|&b| !is_base32_char(b)) {
                    return Err(TranscodeError::malformed(
                        "base32",
                        format!("invalid character {:?} at offset {}", chars[pos] as char, pos),
                    ));
                }
                let text = ascii_text("base32", chars)?;
                BASE32_BASE
                    .decode(text)
                    .map_err(|e| TranscodeError::malformed("base32", e.to_string()))
            }
        }
    }
}

/// RFC 4648 base32 alphabet: `A-Z` and `2-7`.
#[inline]
fn is_base32_char(b: u8) -> bool {
    b.is_ascii_uppercase() || (b'2'..=b'7').contains(&b)
}

/// Encode bytes with the Bitcoin base58 alphabet.
pub fn base58_encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Decode a complete base58 string. An empty result is an error:
/// it can only come from empty input.
pub fn base58_decode(text: &[u8]) -> Result<Vec<u8>, TranscodeError> {
    let decoded = bs58::decode(text)
        .into_vec()
        .map_err(|e| TranscodeError::malformed("base58", e.to_string()))?;
    if decoded.is_empty() {
        return Err(TranscodeError::malformed("base58", "no data decoded"));
    }
    Ok(decoded)
}

/// Decode a complete multibase string; the base it names is only logged.
pub fn multibase_decode(text: &[u8]) -> Result<Vec<u8>, TranscodeError> {
    let text = std::str::from_utf8(text)
        .map_err(|e| TranscodeError::malformed("multibase", e.to_string()))?;
    let (base, decoded) =
        multibase::decode(text).map_err(|e| TranscodeError::malformed("multibase", e.to_string()))?;
    log::debug!("multibase input uses {:?}", base);
    Ok(decoded)
}

/// The hex and base32 alphabets are ASCII; anything else is malformed
/// before the codec ever sees it.
fn ascii_text<'a>(format: &'static str, data: &'a [u8]) -> Result<&'a str, TranscodeError> {
    match data.iter().position(|b| !b.is_ascii()) {
        Some(pos) => Err(TranscodeError::malformed(
            format,
            format!("non-ASCII byte 0x{:02x} at offset {}", data[pos], pos),
        )),
        None => std::str::from_utf8(data).map_err(|e| TranscodeError::malformed(format, e.to_string())),
    }
}
