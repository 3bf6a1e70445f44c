//! Bounded copies into caller-supplied byte buffers
//!
//! A destination of capacity `c` receives at most `c - 1` payload bytes
//! followed by a NUL terminator. Nothing is ever written past `c`, and a
//! zero-capacity destination is left untouched.

/// Copy `src` into `dst`, truncating to fit and always terminating.
///
/// Returns the number of payload bytes written (terminator excluded).
/// Truncation works on bytes; a multi-byte character may be cut.
pub fn copy_truncated(src: &str, dst: &mut [u8]) -> usize {
    let Some(room) = dst.len().checked_sub(1) else {
        return 0;
    };
    let written = src.len().min(room);
    dst[..written].copy_from_slice(&src.as_bytes()[..written]);
    dst[written] = 0;
    written
}

/// Bytes of `buf` up to (not including) the first NUL terminator.
pub fn until_terminator(buf: &[u8]) -> &[u8] {
    match buf.iter().position(|&b| b == 0) {
        Some(end) => &buf[..end],
        None => buf,
    }
}
