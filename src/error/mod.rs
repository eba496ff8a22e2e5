//! Unified error types for the Longan library.
//!
//! This module provides a unified error type that encompasses shape
//! validation, value validation, and sink I/O failures, presenting a
//! consistent API to users.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result, ShapeError};
