use std::fmt;
use std::str::FromStr;

use crate::error::TranscodeError;

/// Encoding of the bytes arriving on stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Hex,
    Base64,
    Base32,
    Base58,
    Raw,
    /// Self-describing: the first character of the input picks the base.
    Multibase,
}

/// Encoding written to stdout. Multibase is decode-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    Hex,
    Base64,
    Base32,
    Base58,
    Raw,
}

/// Accepted source tokens, in the order shown by `--help`.
pub const SOURCE_TOKENS: &[(&str, SourceFormat)] = &[
    ("hex", SourceFormat::Hex),
    ("b16", SourceFormat::Hex),
    ("b64", SourceFormat::Base64),
    ("base64", SourceFormat::Base64),
    ("b32", SourceFormat::Base32),
    ("base32", SourceFormat::Base32),
    ("b58", SourceFormat::Base58),
    ("base58", SourceFormat::Base58),
    ("raw", SourceFormat::Raw),
    ("bin", SourceFormat::Raw),
    ("mbase", SourceFormat::Multibase),
];

/// Accepted target tokens.
pub const TARGET_TOKENS: &[(&str, TargetFormat)] = &[
    ("hex", TargetFormat::Hex),
    ("b16", TargetFormat::Hex),
    ("b64", TargetFormat::Base64),
    ("base64", TargetFormat::Base64),
    ("b32", TargetFormat::Base32),
    ("base32", TargetFormat::Base32),
    ("b58", TargetFormat::Base58),
    ("base58", TargetFormat::Base58),
    ("raw", TargetFormat::Raw),
    ("bin", TargetFormat::Raw),
];

impl SourceFormat {
    pub fn name(self) -> &'static str {
        match self {
            SourceFormat::Hex => "hex",
            SourceFormat::Base64 => "base64",
            SourceFormat::Base32 => "base32",
            SourceFormat::Base58 => "base58",
            SourceFormat::Raw => "raw",
            SourceFormat::Multibase => "multibase",
        }
    }
}

impl TargetFormat {
    pub fn name(self) -> &'static str {
        match self {
            TargetFormat::Hex => "hex",
            TargetFormat::Base64 => "base64",
            TargetFormat::Base32 => "base32",
            TargetFormat::Base58 => "base58",
            TargetFormat::Raw => "raw",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SourceFormat {
    type Err = TranscodeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        SOURCE_TOKENS
            .iter()
            .find(|(t, _)| *t == token)
            .map(|&(_, f)| f)
            .ok_or_else(|| TranscodeError::UnrecognizedFormat {
                role: "input",
                token: token.to_string(),
            })
    }
}

impl FromStr for TargetFormat {
    type Err = TranscodeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        TARGET_TOKENS
            .iter()
            .find(|(t, _)| *t == token)
            .map(|&(_, f)| f)
            .ok_or_else(|| TranscodeError::UnrecognizedFormat {
                role: "output",
                token: token.to_string(),
            })
    }
}

#[inline]
pub fn resolve_source(token: &str) -> Result<SourceFormat, TranscodeError> {
    token.parse()
}

#[inline]
pub fn resolve_target(token: &str) -> Result<TargetFormat, TranscodeError> {
    token.parse()
}
