//! Splits a raw request buffer into CRLF-terminated blocks.

/// The two-byte line terminator used by HTTP/1.1.
pub const CRLF: &[u8] = b"\r\n";

/// Splits `buf` into blocks, each ending with (and including) a CRLF.
///
/// Whatever follows the last terminator is returned as a final block when it
/// is non-empty. A terminator at the start of a block produces the block
/// `b"\r\n"`, which is the blank line between headers and body.
///
/// Concatenating the returned blocks always reproduces `buf`.
///
/// # Example
///
/// ```
/// # use petrel::http::frame::split_blocks;
/// let blocks = split_blocks(b"GET / HTTP/1.1\r\n\r\nbody");
/// assert_eq!(blocks, vec![&b"GET / HTTP/1.1\r\n"[..], &b"\r\n"[..], &b"body"[..]]);
/// ```
pub fn split_blocks(buf: &[u8]) -> Vec<&[u8]> {
    let mut blocks = Vec::new();
    let mut start = 0;

    while let Some(pos) = find_crlf(&buf[start..]) {
        let end = start + pos + CRLF.len();
        blocks.push(&buf[start..end]);
        start = end;
    }

    if start < buf.len() {
        blocks.push(&buf[start..]);
    }

    blocks
}

/// Returns true if `block` is exactly the blank line `\r\n`.
pub fn is_blank(block: &[u8]) -> bool {
    block == CRLF
}

/// Strips a trailing CRLF from `block`, if present.
pub fn trim_crlf(block: &[u8]) -> &[u8] {
    block.strip_suffix(CRLF).unwrap_or(block)
}

fn find_crlf(buf: &[u8]) -> Option<usize> {
    buf.windows(CRLF.len()).position(|w| w == CRLF)
}
