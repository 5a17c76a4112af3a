//! HTTP/1.1 message handling.
//!
//! One request per connection, read in a single buffer. No keep-alive and no
//! chunked bodies.
//!
//! # Architecture
//!
//! - **`frame`**: Splits a raw buffer into CRLF-terminated blocks
//! - **`parser`**: Request line, body extraction, and whole-request decode
//! - **`headers`**: The six recognized request headers
//! - **`request`**: Request line and decoded request types
//! - **`response`**: Response model with builder
//! - **`encoding`**: Accept-Encoding negotiation and gzip
//! - **`writer`**: Serializes and writes responses
//! - **`connection`**: Per-connection read, route, write cycle
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Single read of up to 1024 bytes
//!        └──────┬──────┘
//!               │ Bytes received (EOF → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Parse and route on a blocking thread
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use petrel::http::connection::Connection;
//! use petrel::router::Router;
//! use petrel::store::FileStore;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:4221").await?;
//!     let router = Arc::new(Router::with_store(FileStore::new("/tmp")));
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let router = Arc::clone(&router);
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, router);
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod connection;
pub mod encoding;
pub mod frame;
pub mod headers;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
