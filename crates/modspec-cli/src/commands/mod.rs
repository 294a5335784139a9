//! CLI command implementations.

pub mod common;
pub mod config;
pub mod run;
pub mod tasks;
