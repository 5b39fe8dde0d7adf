//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels (`RUST_LOG` overrides)
//! - Console output on stderr
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use filtered_export::logging::init_logging;
//! use filtered_export::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Export started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export run
///
/// # Example
///
/// ```no_run
/// use filtered_export::log_export_start;
///
/// log_export_start!("stl", "everything");
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($kind:expr, $selection:expr) => {
        tracing::info!(kind = %$kind, selection = %$selection, "Starting export");
    };
}

/// Log the completion of an export run
///
/// # Example
///
/// ```no_run
/// use filtered_export::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!(12, Duration::from_millis(850));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($count:expr, $duration:expr) => {
        tracing::info!(
            count = $count,
            duration_ms = $duration.as_millis(),
            "Export finished"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use filtered_export::log_error_with_context;
/// use filtered_export::domain::FilteredExportError;
///
/// let error = FilteredExportError::NoBodiesFound;
/// log_error_with_context!(&error, "Collecting bodies");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(error = %$error, context = $context, "Error occurred");
    };
}
