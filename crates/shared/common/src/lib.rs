//! Common utilities shared across the account services.
//!
//! This crate provides:
//! - Unified error handling over storage failures
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
