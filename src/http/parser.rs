use thiserror::Error;

use crate::http::frame::{split_blocks, trim_crlf};
use crate::http::headers::parse_headers;
use crate::http::request::{DEFAULT_VERSION, Method, Request, RequestLine};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty request buffer")]
    Empty,
    #[error("request line is not valid UTF-8")]
    InvalidUtf8,
    #[error("malformed request line: {0:?}")]
    InvalidRequestLine(String),
}

/// Decodes one complete request from `buf`.
///
/// The buffer must hold the whole request; nothing is carried over between
/// calls, so decoding the same bytes twice yields equal requests.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let blocks = split_blocks(buf);
    let first = blocks.first().ok_or(ParseError::Empty)?;

    let line = parse_request_line(first)?;
    let section = parse_headers(&blocks);
    let body = extract_body(&blocks, section.end, section.headers.content_length);

    Ok(Request {
        line,
        headers: section.headers,
        body,
    })
}

/// Parses `<method> <path> [<version>]`, split on single spaces.
///
/// Fewer than two tokens, or a path not starting with `/`, is an error.
pub fn parse_request_line(block: &[u8]) -> Result<RequestLine, ParseError> {
    let line = std::str::from_utf8(trim_crlf(block)).map_err(|_| ParseError::InvalidUtf8)?;
    let mut parts = line.split(' ');

    let method = parts.next().filter(|m| !m.is_empty());
    let path = parts.next().filter(|p| p.starts_with('/'));

    let (Some(method), Some(path)) = (method, path) else {
        return Err(ParseError::InvalidRequestLine(line.to_string()));
    };

    let version = parts
        .next()
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_VERSION);

    Ok(RequestLine::new(Method::from_token(method), path, version))
}

/// Returns the bytes after the blank line at block index `header_end`,
/// truncated to `content_length`.
///
/// `header_end == 0` means the header section never ended, so there is no
/// body. A buffer shorter than `content_length` yields whatever is present.
pub fn extract_body(blocks: &[&[u8]], header_end: usize, content_length: usize) -> Vec<u8> {
    if header_end == 0 {
        return Vec::new();
    }

    let available: usize = blocks[header_end + 1..].iter().map(|b| b.len()).sum();
    if available < content_length {
        tracing::warn!(
            content_length,
            available,
            "Request body shorter than Content-Length, truncating"
        );
    }

    let mut body = Vec::with_capacity(content_length.min(available));
    for block in &blocks[header_end + 1..] {
        let remaining = content_length - body.len();
        if remaining == 0 {
            break;
        }
        body.extend_from_slice(&block[..block.len().min(remaining)]);
    }

    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_http_request(req).unwrap();

        assert_eq!(parsed.path(), "/");
        assert_eq!(parsed.headers.host.as_deref(), Some("example.com"));
        assert!(parsed.body.is_empty());
    }

    #[test]
    fn body_spanning_crlf_is_rejoined() {
        let req = b"POST /files/a HTTP/1.1\r\nContent-Length: 6\r\n\r\nab\r\ncd";

        let parsed = parse_http_request(req).unwrap();

        assert_eq!(parsed.body, b"ab\r\ncd".to_vec());
    }
}
