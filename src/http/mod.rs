//! HTTP protocol implementation.
//!
//! This module implements an HTTP/1.0 server core: one request per
//! connection, no keep-alive, no chunked encoding.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`accumulator`**: Collects the full request payload from the socket
//! - **`parser`**: Validates the raw buffer into a request or a rejection
//! - **`request`**: HTTP request representation and construction utilities
//! - **`response`**: HTTP response representation with builder pattern
//! - **`status`**: Status-code-to-reason-phrase registry
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//! - **`connection`**: Per-connection orchestration of the above
//!
//! # Request lifecycle
//!
//! ```text
//!   socket ──► accumulator ──► parser ──► responder ──► writer ──► socket
//!                                 │
//!                                 └─ rejection ─► error response ─► writer
//! ```
//!
//! A rejected request still receives a well-formed response carrying the
//! rejection's status; the connection is never silently dropped when a
//! response can be sent.

pub mod accumulator;
pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod status;
pub mod writer;
