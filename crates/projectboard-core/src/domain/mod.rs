//! Domain layer: entities and repository contracts

pub mod projects;
