//! Shared utilities for stock-search
//!
//! This crate provides common functionality used across the workspace,
//! including logging setup and helpers for reading settings from the
//! process environment.

pub mod config;
pub mod logging;

pub use config::{env_first, env_non_empty};
pub use logging::init_tracing;
