use std::io::{self, Read};

/// Single read that retries on EINTR.
/// Returns 0 only at end of input.
#[inline]
pub fn read_retry(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match reader.read(buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            r => return r,
        }
    }
}

/// Read as many bytes as possible into buf, retrying on partial reads.
/// Ensures the full buffer is filled (or EOF reached).
/// Fast path: regular file reads usually return the full buffer on the first call.
#[inline]
pub fn read_full(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let n = read_retry(reader, buf)?;
    if n == buf.len() || n == 0 {
        return Ok(n);
    }
    // Slow path: partial read, keep going (pipes, slow devices)
    let mut total = n;
    while total < buf.len() {
        match read_retry(reader, &mut buf[total..])? {
            0 => break,
            n => total += n,
        }
    }
    Ok(total)
}

/// Read everything left in `reader`.
/// Used by the decoders that can only work on the complete input.
pub fn read_all(reader: &mut impl Read) -> io::Result<Vec<u8>> {
    const READ_CHUNK: usize = 64 * 1024;

    let mut buf = Vec::with_capacity(READ_CHUNK);
    let mut chunk = vec![0u8; READ_CHUNK];
    loop {
        let n = read_full(reader, &mut chunk)?;
        buf.extend_from_slice(&chunk[..n]);
        if n < chunk.len() {
            break;
        }
    }
    Ok(buf)
}
