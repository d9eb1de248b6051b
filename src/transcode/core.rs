use std::io::{self, Read, Write};

use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::error::TranscodeError;
use crate::format::{SourceFormat, TargetFormat, resolve_source, resolve_target};

/// Decoded bytes moved per copy iteration.
pub const STREAM_CHUNK: usize = 64 * 1024;

/// Stream everything from `input` (encoded as `source`) to `output`
/// (encoded as `target`), then finish the encoder.
/// Returns the number of decoded bytes that passed through.
///
/// No partial success: the first read, decode or write error ends the
/// transfer. Output already written stays written.
pub fn transcode<R: Read, W: Write>(
    source: SourceFormat,
    target: TargetFormat,
    input: R,
    output: W,
) -> Result<u64, TranscodeError> {
    let mut decoder = Decoder::new(source, input);
    let mut encoder = Encoder::new(target, output);
    let mut buf = vec![0u8; STREAM_CHUNK];
    let mut total: u64 = 0;

    loop {
        let n = match decoder.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        encoder.write_all(&buf[..n])?;
        total += n as u64;
    }

    log::debug!("end of input after {} decoded bytes, finishing {}", total, target);
    encoder.finish()?;
    Ok(total)
}

/// One complete run: resolve both tokens, then transcode.
///
/// Both formats are resolved before `input` is touched, so a bad token
/// never consumes input or produces output.
pub fn run<R: Read, W: Write>(
    source_token: Option<&str>,
    target_token: Option<&str>,
    input: R,
    output: W,
) -> Result<u64, TranscodeError> {
    let (Some(source_token), Some(target_token)) = (source_token, target_token) else {
        return Err(TranscodeError::Usage);
    };
    let source = resolve_source(source_token)?;
    let target = resolve_target(target_token)?;
    log::debug!("transcoding {} -> {}", source, target);

    transcode(source, target, input, output)
}
