//! Content-encoding negotiation and gzip compression.

use std::fmt;
use std::io::Write;

use flate2::Compression;
use flate2::write::GzEncoder;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("compression failed: {0}")]
    Compression(#[from] std::io::Error),
}

/// Response compression schemes the server can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Gzip,
}

impl ContentEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentEncoding::Gzip => "gzip",
        }
    }

    /// Picks a scheme from an `Accept-Encoding` value.
    ///
    /// Only substring containment is checked, so `deflate, gzip` and
    /// `x-gzip` both select gzip. Quality values are not interpreted.
    pub fn negotiate(accept_encoding: &str) -> Option<Self> {
        accept_encoding
            .contains(ContentEncoding::Gzip.as_str())
            .then_some(ContentEncoding::Gzip)
    }

    /// Compresses `payload` with this scheme.
    pub fn encode(&self, payload: &[u8]) -> Result<Vec<u8>, EncodingError> {
        match self {
            ContentEncoding::Gzip => gzip_compress(payload),
        }
    }
}

impl fmt::Display for ContentEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn gzip_compress(input: &[u8]) -> Result<Vec<u8>, EncodingError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(input)?;
    Ok(encoder.finish()?)
}
