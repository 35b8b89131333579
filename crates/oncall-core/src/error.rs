//! Error types for oncall-core operations.
//!
//! Field validation failures are *not* errors in this sense: they are data
//! ([`ValidationErrorKind`] inside a `ValidationResult`) and flow through the
//! same commit path as values. [`OnCallError`] covers failures at the crate's
//! boundaries: configuration, input parsing, and misuse of the state API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::Field;

/// Why a single field failed validation.
///
/// Exactly one kind is reported per validation call. The variants are
/// user-correctable conditions; display text is resolved elsewhere
/// (see [`crate::labels::ErrorMessageLabels`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationErrorKind {
    /// The field has no value.
    Required,
    /// `dateFrom` is strictly after the committed `dateTo`.
    MustPrecedeOrEqualDateTo,
    /// `dateTo` is strictly before the committed `dateFrom`.
    MustFollowOrEqualDateFrom,
    /// Same-day window and `timeFrom` is strictly after `timeTo`.
    MustPrecedeOrEqualTimeTo,
    /// Same-day window and `timeTo` is strictly before `timeFrom`.
    MustFollowOrEqualTimeFrom,
}

impl ValidationErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ValidationErrorKind; 5] = [
        ValidationErrorKind::Required,
        ValidationErrorKind::MustPrecedeOrEqualDateTo,
        ValidationErrorKind::MustFollowOrEqualDateFrom,
        ValidationErrorKind::MustPrecedeOrEqualTimeTo,
        ValidationErrorKind::MustFollowOrEqualTimeFrom,
    ];
}

/// Errors raised at the boundaries of the on-call availability core.
#[derive(Error, Debug)]
pub enum OnCallError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A value string could not be parsed for the named field.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: Field, message: String },

    /// A validation result was attached to a field that has no validator.
    #[error("Field {0} is not validated")]
    NotValidated(Field),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout oncall-core.
pub type Result<T> = std::result::Result<T, OnCallError>;
