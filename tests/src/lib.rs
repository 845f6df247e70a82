//! Shared fixtures for the kyberscope integration tests
pub mod strategies;
pub mod vectors;
