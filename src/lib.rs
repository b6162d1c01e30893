//! Outpost - Minimal HTTP/1.0 Static File Server
//!
//! Core library for the HTTP/1.0 protocol engine and static file serving.

pub mod config;
pub mod http;
pub mod server;
