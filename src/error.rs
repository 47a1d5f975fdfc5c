//! Formatting error types.

use thiserror::Error;

/// Errors reported by the fallible formatting routines.
///
/// Only contract violations are representable: every routine either fully
/// succeeds or fails fast here, there is no partial output.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FormatError {
    /// NaN or infinite input where a finite number is required.
    #[error("expected a finite number, got `{0}`")]
    NonFinite(f64),

    /// `bytes_in_kb` of 0 or 1 makes every file-size threshold collapse.
    #[error("bytes-per-kilobyte unit must be at least 2, got {0}")]
    InvalidUnit(u64),
}
