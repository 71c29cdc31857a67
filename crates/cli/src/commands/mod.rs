//! CLI command implementations.

pub mod browse;
pub mod demo;
pub mod storage;
