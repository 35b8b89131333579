//! Display text for validation error kinds.
//!
//! The core only ever stores [`ValidationErrorKind`]s. Hosts supply their own
//! translated text; any kind they leave out falls back to the English
//! default.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationErrorKind;
use crate::record::{ValidatedField, ValidationState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<ValidationErrorKind, String>")]
#[serde(into = "HashMap<ValidationErrorKind, String>")]
pub struct ErrorMessageLabels {
    labels: HashMap<ValidationErrorKind, String>,
}

impl Default for ErrorMessageLabels {
    fn default() -> Self {
        let labels = ValidationErrorKind::ALL
            .into_iter()
            .map(|kind| (kind, default_label(kind).to_string()))
            .collect();
        Self { labels }
    }
}

impl From<HashMap<ValidationErrorKind, String>> for ErrorMessageLabels {
    fn from(overrides: HashMap<ValidationErrorKind, String>) -> Self {
        let mut labels = Self::default();
        labels.labels.extend(overrides);
        labels
    }
}

impl From<ErrorMessageLabels> for HashMap<ValidationErrorKind, String> {
    fn from(labels: ErrorMessageLabels) -> Self {
        labels.labels
    }
}

impl ErrorMessageLabels {
    pub fn message(&self, kind: ValidationErrorKind) -> &str {
        self.labels
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| default_label(kind))
    }
}

fn default_label(kind: ValidationErrorKind) -> &'static str {
    match kind {
        ValidationErrorKind::Required => "This field is required",
        ValidationErrorKind::MustPrecedeOrEqualDateTo => {
            "Start date must be on or before the end date"
        }
        ValidationErrorKind::MustFollowOrEqualDateFrom => {
            "End date must be on or after the start date"
        }
        ValidationErrorKind::MustPrecedeOrEqualTimeTo => {
            "Start time must be at or before the end time"
        }
        ValidationErrorKind::MustFollowOrEqualTimeFrom => {
            "End time must be at or after the start time"
        }
    }
}

impl ValidationState {
    /// Resolve the error text of every invalid field.
    pub fn messages(&self, labels: &ErrorMessageLabels) -> Vec<(ValidatedField, String)> {
        self.errors()
            .into_iter()
            .map(|(field, kind)| (field, labels.message(kind).to_string()))
            .collect()
    }
}
