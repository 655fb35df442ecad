//! Projectboard Core Library
//!
//! This crate provides the transport-agnostic core of Projectboard:
//! - Project entity and repository contract (domain)
//! - In-memory storage backend (storage)
//! - Use cases, one per exposed operation (application)
//! - Neutral HTTP request and response shapes (http)
//! - Controllers mapping use cases onto those shapes (controllers)
//!
//! Routing, the wire adapter, and process bootstrap live in
//! `projectboard-server`; nothing here knows which HTTP framework is
//! driving it.

pub mod application;
pub mod controllers;
pub mod domain;
pub mod error;
pub mod http;
pub mod storage;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::domain::projects::{Project, ProjectDraft, ProjectRepository};
    pub use crate::error::{Error, Result};
}
