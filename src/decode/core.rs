use std::io::{self, Read};

use crate::codec::GroupCodec;
use crate::format::SourceFormat;

use super::group::GroupDecoder;
use super::hex::HexDecoder;
use super::whole::{WholeDecoder, WholeKind};

/// Encoded bytes pulled from the source per refill.
pub const READ_CHUNK: usize = 64 * 1024;

/// Pull-based decoder over `R`, one variant per source format.
///
/// Malformed input comes out of `read` as an `InvalidData` io::Error
/// carrying a `TranscodeError::MalformedInput`.
pub enum Decoder<R: Read> {
    Raw(R),
    Hex(HexDecoder<R>),
    Base64(GroupDecoder<R>),
    Base32(GroupDecoder<R>),
    Base58(WholeDecoder<R>),
    Multibase(WholeDecoder<R>),
}

impl<R: Read> Decoder<R> {
    pub fn new(format: SourceFormat, src: R) -> Self {
        match format {
            SourceFormat::Raw => Decoder::Raw(src),
            SourceFormat::Hex => Decoder::Hex(HexDecoder::new(src)),
            SourceFormat::Base64 => Decoder::Base64(GroupDecoder::new(GroupCodec::Base64, src)),
            SourceFormat::Base32 => Decoder::Base32(GroupDecoder::new(GroupCodec::Base32, src)),
            SourceFormat::Base58 => Decoder::Base58(WholeDecoder::new(WholeKind::Base58, src)),
            SourceFormat::Multibase => {
                Decoder::Multibase(WholeDecoder::new(WholeKind::Multibase, src))
            }
        }
    }
}

impl<R: Read> Read for Decoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Decoder::Raw(r) => r.read(buf),
            Decoder::Hex(d) => d.read(buf),
            Decoder::Base64(d) | Decoder::Base32(d) => d.read(buf),
            Decoder::Base58(d) | Decoder::Multibase(d) => d.read(buf),
        }
    }
}

/// Decoded bytes waiting to be handed to the caller.
#[derive(Default)]
pub(super) struct Pending {
    buf: Vec<u8>,
    pos: usize,
}

impl Pending {
    #[inline]
    pub(super) fn is_empty(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Queue more decoded bytes. Consumed bytes are dropped first.
    pub(super) fn push(&mut self, data: Vec<u8>) {
        if self.is_empty() {
            self.buf = data;
            self.pos = 0;
        } else {
            self.buf.drain(..self.pos);
            self.pos = 0;
            self.buf.extend_from_slice(&data);
        }
    }

    /// Copy as much as fits into `dst`.
    pub(super) fn copy_to(&mut self, dst: &mut [u8]) -> usize {
        let n = dst.len().min(self.buf.len() - self.pos);
        dst[..n].copy_from_slice(&self.buf[self.pos..self.pos + n]);
        self.pos += n;
        n
    }
}
