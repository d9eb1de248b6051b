use std::io::{self, Read};

use crate::codec::hex_decode;
use crate::common::io::read_retry;
use crate::common::{is_whitespace, strip_whitespace_into};
use crate::error::TranscodeError;

use super::core::{Pending, READ_CHUNK};

/// Incremental hex decoder.
///
/// Whitespace is dropped wherever it appears. A `0x` prefix is dropped
/// once, right after any leading whitespace, even if `0` and `x` arrive in
/// different reads; `0 x` is not a prefix. A prefix must be followed by
/// at least one digit pair. Complete digit pairs are decoded as soon as
/// they arrive; a dangling digit waits for the next read.
pub struct HexDecoder<R> {
    src: R,
    chunk: Vec<u8>,
    /// Whitespace-free digits not yet decoded.
    digits: Vec<u8>,
    /// Raw bytes after leading whitespace, held until the prefix is decided.
    lead: Vec<u8>,
    prefix_checked: bool,
    prefixed: bool,
    decoded_any: bool,
    out: Pending,
    eof: bool,
}

impl<R: Read> HexDecoder<R> {
    pub fn new(src: R) -> Self {
        HexDecoder {
            src,
            chunk: vec![0u8; READ_CHUNK],
            digits: Vec::new(),
            lead: Vec::new(),
            prefix_checked: false,
            prefixed: false,
            decoded_any: false,
            out: Pending::default(),
            eof: false,
        }
    }

    fn fill(&mut self) -> io::Result<()> {
        let n = read_retry(&mut self.src, &mut self.chunk)?;
        if n == 0 {
            self.eof = true;
        }
        let raw = &self.chunk[..n];

        if self.prefix_checked {
            strip_whitespace_into(raw, &mut self.digits);
        } else {
            // The prefix is judged on raw bytes, so "0 x" stays malformed.
            let raw = if self.lead.is_empty() {
                let start = raw.iter().position(|&b| !is_whitespace(b)).unwrap_or(raw.len());
                &raw[start..]
            } else {
                raw
            };
            self.lead.extend_from_slice(raw);
            if self.lead.len() < 2 && !self.eof {
                return Ok(());
            }
            let start = if self.lead.starts_with(b"0x") {
                self.prefixed = true;
                2
            } else {
                0
            };
            strip_whitespace_into(&self.lead[start..], &mut self.digits);
            self.lead = Vec::new();
            self.prefix_checked = true;
        }

        let whole = self.digits.len() & !1;
        if whole > 0 {
            let decoded = hex_decode(&self.digits[..whole]).map_err(TranscodeError::into_io)?;
            self.digits.drain(..whole);
            self.decoded_any = true;
            self.out.push(decoded);
        }

        if self.eof {
            if !self.digits.is_empty() {
                return Err(TranscodeError::malformed("hex", "odd number of hex digits").into_io());
            }
            if self.prefixed && !self.decoded_any {
                return Err(TranscodeError::malformed("hex", "no digits after 0x prefix").into_io());
            }
        }
        Ok(())
    }
}

impl<R: Read> Read for HexDecoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            if !self.out.is_empty() {
                return Ok(self.out.copy_to(buf));
            }
            if self.eof {
                return Ok(0);
            }
            self.fill()?;
        }
    }
}
