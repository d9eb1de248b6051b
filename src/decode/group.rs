use std::io::{self, Read};

use crate::codec::GroupCodec;
use crate::common::io::read_retry;
use crate::common::strip_whitespace_into;
use crate::error::TranscodeError;

use super::core::{Pending, READ_CHUNK};

/// Incremental base64/base32 decoder (unpadded alphabets).
///
/// Complete character groups are decoded as they arrive. The trailing
/// partial group is decoded once the source reports end of input.
pub struct GroupDecoder<R> {
    codec: GroupCodec,
    src: R,
    chunk: Vec<u8>,
    /// Whitespace-free characters not yet decoded.
    chars: Vec<u8>,
    out: Pending,
    eof: bool,
}

impl<R: Read> GroupDecoder<R> {
    pub fn new(codec: GroupCodec, src: R) -> Self {
        GroupDecoder {
            codec,
            src,
            chunk: vec![0u8; READ_CHUNK],
            chars: Vec::new(),
            out: Pending::default(),
            eof: false,
        }
    }

    fn fill(&mut self) -> io::Result<()> {
        let n = read_retry(&mut self.src, &mut self.chunk)?;
        let take = if n == 0 {
            self.eof = true;
            self.chars.len()
        } else {
            strip_whitespace_into(&self.chunk[..n], &mut self.chars);
            let group = self.codec.chars_per_group();
            self.chars.len() - self.chars.len() % group
        };

        if take > 0 {
            let decoded = self
                .codec
                .decode(&self.chars[..take])
                .map_err(TranscodeError::into_io)?;
            self.chars.drain(..take);
            self.out.push(decoded);
        }
        Ok(())
    }
}

impl<R: Read> Read for GroupDecoder<R> {
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
