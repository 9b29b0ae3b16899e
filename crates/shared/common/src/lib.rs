//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling for the service boundary
//! - Configuration structures
//! - Tracing setup

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppResult};
pub use telemetry::{init_tracing, log_filter};
