pub mod io;

/// Name printed in front of every diagnostic.
pub const TOOL_NAME: &str = "transcode";

/// Format an IO error message without the "(os error N)" suffix.
/// GNU coreutils prints e.g. "Broken pipe" while Rust's
/// Display impl adds " (os error 32)". This strips the suffix for compat.
pub fn io_error_msg(e: &std::io::Error) -> String {
    if let Some(raw) = e.raw_os_error() {
        let os_err = std::io::Error::from_raw_os_error(raw);
        let msg = format!("{}", os_err);
        msg.replace(&format!(" (os error {})", raw), "")
    } else {
        format!("{}", e)
    }
}

/// ASCII whitespace as accepted between encoded characters.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Append `data` to `out` with all ASCII whitespace removed.
/// Newline-only input (the common case for wrapped encodings) is
/// handled with SIMD memchr; other whitespace falls back to a byte scan.
pub fn strip_whitespace_into(data: &[u8], out: &mut Vec<u8>) {
    let start = out.len();
    let mut last = 0;
    for pos in memchr::memchr_iter(b'\n', data) {
        if pos > last {
            out.extend_from_slice(&data[last..pos]);
        }
        last = pos + 1;
    }
    if last < data.len() {
        out.extend_from_slice(&data[last..]);
    }

    // Rare case: CR, tabs, spaces
    if out[start..].iter().any(|&b| is_whitespace(b)) {
        let mut i = start;
        for j in start..out.len() {
            let b = out[j];
            if !is_whitespace(b) {
                out[i] = b;
                i += 1;
            }
        }
        out.truncate(i);
    }
}
