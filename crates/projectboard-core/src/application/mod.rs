//! Application layer: one use case per exposed operation

pub mod projects;

pub use projects::*;
