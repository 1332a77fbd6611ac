//! Random symmetric distance matrices and populations of random tours over them.

pub mod config;
pub mod error;
pub mod generate;
pub mod report;
pub mod route;
pub mod types;
