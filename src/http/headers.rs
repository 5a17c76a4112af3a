//! Recognized request headers.
//!
//! Only six header names are understood. Every other header line is parsed
//! far enough to be counted and then dropped.

use crate::http::encoding::ContentEncoding;
use crate::http::frame::{is_blank, trim_crlf};

/// The recognized subset of a request's headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    pub host: Option<String>,
    pub user_agent: Option<String>,
    pub accept: Option<String>,
    pub content_type: Option<String>,
    /// Parsed `Content-Length`; 0 when absent or unparseable.
    pub content_length: usize,
    /// Scheme negotiated from `Accept-Encoding`, if any is supported.
    pub accept_encoding: Option<ContentEncoding>,
    unrecognized: usize,
}

impl HeaderSet {
    /// Number of header lines that were skipped because their name is not
    /// recognized (or the line had no colon).
    pub fn unrecognized(&self) -> usize {
        self.unrecognized
    }

    /// Applies one `name: value` pair. Names compare case-insensitively.
    pub fn apply(&mut self, name: &str, value: &str) {
        let name = name.trim();
        let value = value.trim();

        if name.eq_ignore_ascii_case("Host") {
            self.host = Some(value.to_string());
        } else if name.eq_ignore_ascii_case("User-Agent") {
            self.user_agent = Some(value.to_string());
        } else if name.eq_ignore_ascii_case("Accept") {
            self.accept = Some(value.to_string());
        } else if name.eq_ignore_ascii_case("Content-Type") {
            self.content_type = Some(value.to_string());
        } else if name.eq_ignore_ascii_case("Content-Length") {
            self.content_length = value.parse().unwrap_or(0);
        } else if name.eq_ignore_ascii_case("Accept-Encoding") {
            self.accept_encoding = ContentEncoding::negotiate(value);
        } else {
            self.unrecognized += 1;
        }
    }
}

/// Result of scanning the header section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSection {
    pub headers: HeaderSet,
    /// Index (into the full block list) of the blank line ending the header
    /// section, or 0 when no blank line was found and there is no body.
    pub end: usize,
}

/// Parses the header blocks of a request.
///
/// `blocks` is the complete output of [`split_blocks`](crate::http::frame::split_blocks);
/// block 0 is the request line and is skipped.
pub fn parse_headers(blocks: &[&[u8]]) -> HeaderSection {
    let mut headers = HeaderSet::default();

    for (index, block) in blocks.iter().enumerate().skip(1) {
        if is_blank(block) {
            return HeaderSection { headers, end: index };
        }

        let line = match std::str::from_utf8(trim_crlf(block)) {
            Ok(line) => line,
            Err(_) => {
                headers.unrecognized += 1;
                continue;
            }
        };

        match line.split_once(':') {
            Some((name, value)) => headers.apply(name, value),
            None => headers.unrecognized += 1,
        }
    }

    HeaderSection { headers, end: 0 }
}
