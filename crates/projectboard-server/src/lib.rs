//! Projectboard server library
//!
//! Everything between the wire and the transport-agnostic core: the server
//! configuration, the route table, and the tiny_http adapter. The binary in
//! `main.rs` is a thin composition of these pieces, and integration tests
//! reuse them to boot real servers on ephemeral ports.

pub mod config;
pub mod router;
pub mod server;
