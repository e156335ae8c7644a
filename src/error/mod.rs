//! Error types for the points backend.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors; most
//! variants use `#[from]` for automatic conversion. Storage corruption is fatal
//! to the failing operation and propagates to the caller uncaught, while
//! "not found" conditions are expressed as default values or booleans by the
//! repository layer rather than as errors.

pub mod config;
pub mod store;

use thiserror::Error;

use crate::error::{config::ConfigError, store::StoreError};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the backend. Callers in the
/// command layer are expected to log the failure and keep serving other
/// requests; nothing here is meant to take the process down after startup.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Document store error: corrupt content or filesystem failure.
    ///
    /// Corruption is never recovered automatically; the operation fails
    /// visibly and the document on disk is left untouched.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Caller-supplied input rejected before touching storage.
    ///
    /// # Fields
    /// - Message describing what was invalid about the input
    #[error("{0}")]
    InvalidInput(String),

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}
