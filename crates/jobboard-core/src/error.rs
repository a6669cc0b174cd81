//! # Errors
//!
//! Structured validation errors for the job board, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! The slug codec and the filter engine are infallible by type. Errors only
//! arise when admin input is turned into a record, or when text is parsed
//! into one of the listing enumerations or a timestamp.

use thiserror::Error;

/// Validation errors for drafts and enumerated labels.
///
/// Each variant names the offending field or input so the presentation layer
/// can attach the message to the right form control.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required text field is empty after trimming.
    #[error("{field} must not be empty")]
    EmptyField {
        /// The field name, as stored by the Gateway.
        field: &'static str,
    },

    /// A salary bound is negative or not a finite number.
    #[error("{field} must be a non-negative number, got {value}")]
    InvalidSalary {
        /// `salary_min` or `salary_max`.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Both salary bounds are present and the minimum exceeds the maximum.
    #[error("salary_min ({min}) exceeds salary_max ({max})")]
    SalaryRangeInverted {
        /// The lower bound as entered.
        min: f64,
        /// The upper bound as entered.
        max: f64,
    },

    /// The application link is not an absolute URL.
    #[error("invalid apply_url: \"{value}\" ({reason})")]
    InvalidApplyUrl {
        /// The rejected text.
        value: String,
        /// Why the URL parser rejected it.
        reason: String,
    },

    /// Read time must be at least one minute.
    #[error("read_time must be a positive number of minutes, got {0}")]
    InvalidReadTime(i64),

    /// A label does not name any variant of the enumeration.
    #[error("unknown {kind}: \"{value}\"")]
    UnknownLabel {
        /// Which enumeration was being parsed.
        kind: &'static str,
        /// The rejected label.
        value: String,
    },

    /// Timestamp string is not valid RFC 3339.
    #[error("invalid timestamp: \"{value}\" ({reason})")]
    InvalidTimestamp {
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}
