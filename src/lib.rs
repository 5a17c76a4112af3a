//! Petrel - minimal HTTP/1.1 server
//!
//! Decodes a request buffer, routes it to one of a few built-in behaviors
//! (root, echo, user-agent, file read/write) and serializes the response.

pub mod config;
pub mod http;
pub mod router;
pub mod server;
pub mod store;
