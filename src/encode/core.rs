use std::io::{self, Write};

use crate::codec::{GroupCodec, base58_encode, hex_encode};
use crate::format::TargetFormat;

/// Push-based encoder over `W`, one variant per target format.
///
/// `finish` is the terminal step: it emits whatever an encoding holds
/// back until the end of input, flushes, and returns the inner writer.
/// Dropping an encoder without `finish` loses that tail.
pub enum Encoder<W: Write> {
    Raw(W),
    Hex(HexEncoder<W>),
    Base64(GroupEncoder<W>),
    Base32(GroupEncoder<W>),
    Base58(Base58Encoder<W>),
}

impl<W: Write> Encoder<W> {
    pub fn new(format: TargetFormat, dst: W) -> Self {
        match format {
            TargetFormat::Raw => Encoder::Raw(dst),
            TargetFormat::Hex => Encoder::Hex(HexEncoder::new(dst)),
            TargetFormat::Base64 => Encoder::Base64(GroupEncoder::new(GroupCodec::Base64, dst)),
            TargetFormat::Base32 => Encoder::Base32(GroupEncoder::new(GroupCodec::Base32, dst)),
            TargetFormat::Base58 => Encoder::Base58(Base58Encoder::new(dst)),
        }
    }

    pub fn finish(self) -> io::Result<W> {
        match self {
            Encoder::Raw(mut w) => {
                w.flush()?;
                Ok(w)
            }
            Encoder::Hex(e) => e.finish(),
            Encoder::Base64(e) | Encoder::Base32(e) => e.finish(),
            Encoder::Base58(e) => e.finish(),
        }
    }
}

impl<W: Write> Write for Encoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Encoder::Raw(w) => w.write(buf),
            Encoder::Hex(e) => e.write(buf),
            Encoder::Base64(e) | Encoder::Base32(e) => e.write(buf),
            Encoder::Base58(e) => e.write(buf),
        }
    }

    /// Flushes the inner writer only; held-back groups stay held.
    fn flush(&mut self) -> io::Result<()> {
        match self {
            Encoder::Raw(w) => w.flush(),
            Encoder::Hex(e) => e.flush(),
            Encoder::Base64(e) | Encoder::Base32(e) => e.flush(),
            Encoder::Base58(e) => e.flush(),
        }
    }
}

/// Lowercase hex, written chunk by chunk. Every byte maps to exactly
/// two digits, so nothing is ever held back.
pub struct HexEncoder<W> {
    dst: W,
}

impl<W: Write> HexEncoder<W> {
    pub fn new(dst: W) -> Self {
        HexEncoder { dst }
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.dst.flush()?;
        Ok(self.dst)
    }
}

impl<W: Write> Write for HexEncoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        self.dst.write_all(hex_encode(buf).as_bytes())?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.dst.flush()
    }
}

/// Base64/base32 encoder. Whole byte groups are encoded as they arrive;
/// a trailing partial group waits in `partial` until more bytes or `finish`.
pub struct GroupEncoder<W> {
    codec: GroupCodec,
    dst: W,
    partial: Vec<u8>,
    /// Reused output buffer.
    encoded: Vec<u8>,
}

impl<W: Write> GroupEncoder<W> {
    pub fn new(codec: GroupCodec, dst: W) -> Self {
        GroupEncoder {
            codec,
            dst,
            partial: Vec::with_capacity(codec.bytes_per_group()),
            encoded: Vec::new(),
        }
    }

    pub fn finish(mut self) -> io::Result<W> {
        if !self.partial.is_empty() {
            self.encoded.clear();
            self.codec.encode_into(&self.partial, &mut self.encoded);
            self.partial.clear();
            self.dst.write_all(&self.encoded)?;
        }
        self.dst.flush()?;
        Ok(self.dst)
    }
}

impl<W: Write> Write for GroupEncoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let group = self.codec.bytes_per_group();
        let mut input = buf;
        self.encoded.clear();

        // Top up the held-back group first.
        if !self.partial.is_empty() {
            let take = (group - self.partial.len()).min(input.len());
            self.partial.extend_from_slice(&input[..take]);
            input = &input[take..];
            if self.partial.len() < group {
                return Ok(buf.len());
            }
            self.codec.encode_into(&self.partial, &mut self.encoded);
            self.partial.clear();
        }

        let whole = input.len() - input.len() % group;
        self.codec.encode_into(&input[..whole], &mut self.encoded);
        self.partial.extend_from_slice(&input[whole..]);

        if !self.encoded.is_empty() {
            self.dst.write_all(&self.encoded)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.dst.flush()
    }
}

/// Base58 has no group structure: each new byte changes every digit.
/// All input is buffered and encoded once, on `finish`.
pub struct Base58Encoder<W> {
    dst: W,
    data: Vec<u8>,
}

impl<W: Write> Base58Encoder<W> {
    pub fn new(dst: W) -> Self {
        Base58Encoder {
            dst,
            data: Vec::new(),
        }
    }

    pub fn finish(mut self) -> io::Result<W> {
        log::debug!("base58: encoding {} buffered bytes", self.data.len());
        if !self.data.is_empty() {
            self.dst.write_all(base58_encode(&self.data).as_bytes())?;
        }
        self.dst.flush()?;
        Ok(self.dst)
    }
}

impl<W: Write> Write for Base58Encoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.dst.flush()
    }
}
