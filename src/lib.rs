//! Number-to-text humanization.
//!
//! Pure, stateless routines turning raw integers, byte counts and occurrence
//! counts into human-friendly strings:
//!
//! - [`int_comma`] / [`format_number`] / [`group_number`] - digit grouping
//!   with caller-overridable separators
//! - [`int_word`] / [`int_word_over`] / [`compact_integer`] - magnitude words
//!   ("1.2 million") and abbreviations ("1.2M")
//! - [`ap_number`] - AP-style words for single digits
//! - [`ordinal`] - "1st", "2nd", "3rd", "11th"
//! - [`bounded_number`] - "100+"
//! - [`times`] / [`times_with`] - "never", "once", "twice", "5 times"
//! - [`file_size`] - "13 KB", "4.1 MB", "102 bytes"
//!
//! Everything returns a `String`; source routines that could hand back a raw
//! number instead normalize to the number's `Display` form. The float-taking
//! routines reject NaN and infinities with [`FormatError`], all others are
//! infallible. No locale handling, no I/O, no shared state: every function is
//! safe to call from any thread.
//!
//! # Example
//!
//! ```
//! use humanize_number::{file_size, int_word, ordinal, times};
//!
//! assert_eq!(int_word(1_200_000.0, 1, false).unwrap(), "1.2 million");
//! assert_eq!(file_size(13 * 1024, 0, 1024).unwrap(), "13 KB");
//! assert_eq!(ordinal(3), "3rd");
//! assert_eq!(times(2), "twice");
//! ```

mod count;
mod error;
mod filesize;
mod group;
mod magnitude;
mod words;

pub use count::{bounded_number, times, times_with};
pub use error::FormatError;
pub use filesize::file_size;
pub use group::{GroupStyle, format_number, group_number, int_comma};
pub use magnitude::{compact_integer, int_word, int_word_over};
pub use words::{ap_number, ordinal};
