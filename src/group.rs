//! Grouped-digit number formatting.
//!
//! Digits are grouped in threes from the right (default `,`), with a fixed
//! number of decimal places behind a configurable decimal point. No locale
//! lookup happens anywhere: separators are literal characters chosen by the
//! caller via [`GroupStyle`].

use crate::error::FormatError;
use serde::{Deserialize, Serialize};

/// Digit-grouping style.
///
/// Deserializes with every field optional, so it can be embedded in a caller's
/// own config file:
///
/// ```toml
/// [display.numbers]
/// decimal_places = 2
/// decimal_point = ","
/// separator = "."
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupStyle {
    /// Decimal places to render (0 omits the decimal point entirely).
    pub decimal_places: u8,
    /// Character between the integer and fraction parts.
    pub decimal_point: char,
    /// Character between digit groups of three.
    pub separator: char,
}

impl Default for GroupStyle {
    fn default() -> Self {
        Self {
            decimal_places: 0,
            decimal_point: '.',
            separator: ',',
        }
    }
}

impl GroupStyle {
    pub fn with_decimal_places(mut self, decimal_places: u8) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    pub fn with_decimal_point(mut self, decimal_point: char) -> Self {
        self.decimal_point = decimal_point;
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }
}

/// Round half away from zero at `places` decimal places.
///
/// `format!("{:.N}")` rounds half to even, which would turn 1.5 at zero places
/// into "2" but 2.5 into "2"; the threshold scans depend on the away-from-zero
/// convention, so rounding happens here before any string rendering.
#[inline]
pub(crate) fn round_places(value: f64, places: u8) -> f64 {
    let factor = 10f64.powi(i32::from(places));
    (value * factor).round() / factor
}

/// Format a number with digit grouping per `style`.
///
/// The sign stays attached to the leading digit group; values below 1000 get
/// no grouping.
///
/// # Examples
///
/// ```
/// use humanize_number::{GroupStyle, group_number};
///
/// let style = GroupStyle::default().with_decimal_places(2);
/// assert_eq!(group_number(1234567.891, &style).unwrap(), "1,234,567.89");
///
/// let german = style.with_decimal_point(',').with_separator('.');
/// assert_eq!(group_number(12345.678, &german).unwrap(), "12.345,68");
/// ```
pub fn group_number(value: f64, style: &GroupStyle) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::NonFinite(value));
    }

    let mut rounded = round_places(value, style.decimal_places);
    if rounded == 0.0 {
        // -0.4 at zero places must print "0", not "-0"
        rounded = 0.0;
    }

    let rendered = format!("{:.*}", usize::from(style.decimal_places), rounded);
    let (int_part, fraction) = match rendered.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (rendered.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };

    let mut out = String::with_capacity(rendered.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(style.separator);
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push(style.decimal_point);
        out.push_str(fraction);
    }
    Ok(out)
}

/// Format an integer-valued number with commas every three digits.
///
/// # Examples
///
/// ```
/// use humanize_number::int_comma;
///
/// assert_eq!(int_comma(1234567.0).unwrap(), "1,234,567");
/// assert_eq!(int_comma(-1234.0).unwrap(), "-1,234");
/// ```
pub fn int_comma(value: f64) -> Result<String, FormatError> {
    group_number(value, &GroupStyle::default())
}

/// Format a number with commas every three digits and two decimal places.
///
/// # Examples
///
/// ```
/// use humanize_number::format_number;
///
/// assert_eq!(format_number(1234567.891).unwrap(), "1,234,567.89");
/// assert_eq!(format_number(0.0).unwrap(), "0.00");
/// ```
pub fn format_number(value: f64) -> Result<String, FormatError> {
    group_number(value, &GroupStyle::default().with_decimal_places(2))
}

// ============================================================================
// tests
// ============================================================================
