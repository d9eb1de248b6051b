use std::io::{self, Read};

use crate::codec::{base58_decode, multibase_decode};
use crate::common::io::read_all;
use crate::error::TranscodeError;

use super::core::Pending;

/// Formats that can only be decoded as one complete string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WholeKind {
    /// Every character affects the whole value.
    Base58,
    /// The prefix character names the base of the rest.
    Multibase,
}

/// Reads the entire source on the first `read`, trims surrounding
/// whitespace, decodes once, then serves the result.
pub struct WholeDecoder<R> {
    kind: WholeKind,
    src: Option<R>,
    out: Pending,
}

impl<R: Read> WholeDecoder<R> {
    pub fn new(kind: WholeKind, src: R) -> Self {
        WholeDecoder {
            kind,
            src: Some(src),
            out: Pending::default(),
        }
    }

    fn decode_all(&mut self, mut src: R) -> io::Result<()> {
        let data = read_all(&mut src)?;
        let text = data.trim_ascii();
        log::debug!("{:?}: decoding {} bytes of input at once", self.kind, text.len());
        let decoded = match self.kind {
            WholeKind::Base58 => base58_decode(text),
            WholeKind::Multibase => multibase_decode(text),
        }
        .map_err(TranscodeError::into_io)?;
        self.out.push(decoded);
        Ok(())
    }
}

impl<R: Read> Read for WholeDecoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if let Some(src) = self.src.take() {
            self.decode_all(src)?;
        }
        Ok(self.out.copy_to(buf))
    }
}
