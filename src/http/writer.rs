use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::{HTTP_VERSION, Response};

/// Renders `resp` in wire form.
///
/// Header order is fixed: Content-Encoding (only when set), Content-Type,
/// Content-Length, User-Agent. The last three are written even when empty.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut head = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );

    if let Some(encoding) = resp.content_encoding {
        head.push_str(&format!("Content-Encoding: {}\r\n", encoding));
    }
    head.push_str(&format!("Content-Type: {}\r\n", resp.content_type));
    head.push_str(&format!("Content-Length: {}\r\n", resp.content_length()));
    head.push_str(&format!("User-Agent: {}\r\n", resp.user_agent));

    // Header/body separator
    head.push_str("\r\n");

    let mut buf = Vec::with_capacity(head.len() + resp.body.len());
    buf.extend_from_slice(head.as_bytes());
    buf.extend_from_slice(&resp.body);
    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub async fn write_to_stream<S>(&mut self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
