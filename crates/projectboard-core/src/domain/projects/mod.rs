//! Project domain module
//!
//! Contains the project entity, its draft type, and the repository trait
//! storage backends implement.

pub mod entity;
pub mod repository;

// Re-export project types
pub use entity::*;
pub use repository::*;
