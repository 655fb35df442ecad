//! Storage backends for the project repository

pub mod memory;

pub use memory::InMemoryProjectRepository;
