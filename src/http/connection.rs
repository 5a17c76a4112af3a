use std::sync::Arc;

use anyhow::Context;
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::http::writer::ResponseWriter;
use crate::router::Router;

/// Size of the single read made per connection. A request that does not fit
/// is cut off at this length.
pub const READ_BUFFER_SIZE: usize = 1024;

pub struct Connection<S> {
    stream: S,
    router: Arc<Router>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(BytesMut),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>) -> Self {
        Self {
            stream,
            router,
            state: ConnectionState::Reading,
        }
    }

    /// Reads one request, answers it, and returns. The caller closes the
    /// stream by dropping the connection.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(buf) => ConnectionState::Processing(buf),
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Processing(buf) => {
                    let buf = std::mem::take(buf).freeze();
                    let router = Arc::clone(&self.router);

                    // Routing does blocking file I/O.
                    let response = tokio::task::spawn_blocking(move || router.handle_bytes(&buf))
                        .await
                        .context("request handler panicked")?;

                    tracing::info!(
                        status = response.status.as_u16(),
                        bytes = response.content_length(),
                        "Response ready"
                    );

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Makes a single read. Returns `None` if the peer closed without
    /// sending anything.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<BytesMut>> {
        let mut buf = BytesMut::with_capacity(READ_BUFFER_SIZE);
        let n = self
            .stream
            .read_buf(&mut buf)
            .await
            .context("reading request")?;

        if n == 0 {
            return Ok(None);
        }

        buf.truncate(READ_BUFFER_SIZE);
        Ok(Some(buf))
    }
}
