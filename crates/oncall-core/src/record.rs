//! The availability record being edited and its per-field validation state.
//!
//! [`AvailabilityRecord`] is the single source of truth for the window. Its
//! fields are independently nullable; nothing forces them to be populated
//! until submission validates them. [`ValidationState`] holds exactly one
//! [`ValidationResult`] per validated field and is only written by the field
//! update and submission coordinators, never read back into the record.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{OnCallError, Result, ValidationErrorKind};

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

/// Every field of an [`AvailabilityRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    DateFrom,
    DateTo,
    TimeFrom,
    TimeTo,
    IsAllDay,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::DateFrom,
        Field::DateTo,
        Field::TimeFrom,
        Field::TimeTo,
        Field::IsAllDay,
    ];

    /// Wire name of the field (`dateFrom`, `isAllDay`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Field::DateFrom => "dateFrom",
            Field::DateTo => "dateTo",
            Field::TimeFrom => "timeFrom",
            Field::TimeTo => "timeTo",
            Field::IsAllDay => "isAllDay",
        }
    }

    /// The validated counterpart of this field. `None` for `isAllDay`, which
    /// has no validator.
    pub fn validated(self) -> Option<ValidatedField> {
        match self {
            Field::DateFrom => Some(ValidatedField::DateFrom),
            Field::DateTo => Some(ValidatedField::DateTo),
            Field::TimeFrom => Some(ValidatedField::TimeFrom),
            Field::TimeTo => Some(ValidatedField::TimeTo),
            Field::IsAllDay => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = OnCallError;

    fn from_str(s: &str) -> Result<Self> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| OnCallError::UnknownField(s.to_string()))
    }
}

/// The four fields that carry a [`ValidationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidatedField {
    DateFrom,
    DateTo,
    TimeFrom,
    TimeTo,
}

impl ValidatedField {
    pub const ALL: [ValidatedField; 4] = [
        ValidatedField::DateFrom,
        ValidatedField::DateTo,
        ValidatedField::TimeFrom,
        ValidatedField::TimeTo,
    ];

    pub fn field(self) -> Field {
        match self {
            ValidatedField::DateFrom => Field::DateFrom,
            ValidatedField::DateTo => Field::DateTo,
            ValidatedField::TimeFrom => Field::TimeFrom,
            ValidatedField::TimeTo => Field::TimeTo,
        }
    }
}

impl fmt::Display for ValidatedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.field().fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// The on-call availability window being edited.
///
/// `time_from` / `time_to` are wall-clock times of day. They are ignored by
/// validation while `is_all_day` is set but keep their values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRecord {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub time_from: Option<NaiveTime>,
    pub time_to: Option<NaiveTime>,
    #[serde(default)]
    pub is_all_day: bool,
}

impl AvailabilityRecord {
    /// Whether both dates are present and fall on the same calendar day.
    pub fn is_same_day(&self) -> bool {
        matches!((self.date_from, self.date_to), (Some(from), Some(to)) if from == to)
    }

    /// Overwrite exactly one field.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::DateFrom(value) => self.date_from = value,
            FieldUpdate::DateTo(value) => self.date_to = value,
            FieldUpdate::TimeFrom(value) => self.time_from = value,
            FieldUpdate::TimeTo(value) => self.time_to = value,
            FieldUpdate::IsAllDay(value) => self.is_all_day = value,
        }
    }
}

/// A typed value for one field of the record.
///
/// Date and time fields take `None` to clear them; clearing `isAllDay` means
/// `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    DateFrom(Option<NaiveDate>),
    DateTo(Option<NaiveDate>),
    TimeFrom(Option<NaiveTime>),
    TimeTo(Option<NaiveTime>),
    IsAllDay(bool),
}

impl FieldUpdate {
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::DateFrom(_) => Field::DateFrom,
            FieldUpdate::DateTo(_) => Field::DateTo,
            FieldUpdate::TimeFrom(_) => Field::TimeFrom,
            FieldUpdate::TimeTo(_) => Field::TimeTo,
            FieldUpdate::IsAllDay(_) => Field::IsAllDay,
        }
    }

    /// The cleared value for `field`.
    pub fn cleared(field: Field) -> Self {
        match field {
            Field::DateFrom => FieldUpdate::DateFrom(None),
            Field::DateTo => FieldUpdate::DateTo(None),
            Field::TimeFrom => FieldUpdate::TimeFrom(None),
            Field::TimeTo => FieldUpdate::TimeTo(None),
            Field::IsAllDay => FieldUpdate::IsAllDay(false),
        }
    }

    /// Parse operator input for `field`.
    ///
    /// Dates are `YYYY-MM-DD`, times `HH:MM` or `HH:MM:SS`, the flag is
    /// `true`/`false`. An empty string or `null` clears a date or time field.
    pub fn parse(field: Field, text: &str) -> Result<Self> {
        let text = text.trim();
        let cleared = text.is_empty() || text == "null";

        let invalid = |message: String| OnCallError::InvalidValue { field, message };

        match field {
            Field::DateFrom | Field::DateTo => {
                let date = if cleared {
                    None
                } else {
                    Some(
                        NaiveDate::parse_from_str(text, "%Y-%m-%d")
                            .map_err(|e| invalid(format!("'{}': {}", text, e)))?,
                    )
                };
                Ok(if field == Field::DateFrom {
                    FieldUpdate::DateFrom(date)
                } else {
                    FieldUpdate::DateTo(date)
                })
            }
            Field::TimeFrom | Field::TimeTo => {
                let time = if cleared {
                    None
                } else {
                    Some(parse_time(text).map_err(|e| invalid(format!("'{}': {}", text, e)))?)
                };
                Ok(if field == Field::TimeFrom {
                    FieldUpdate::TimeFrom(time)
                } else {
                    FieldUpdate::TimeTo(time)
                })
            }
            Field::IsAllDay => match text {
                "true" => Ok(FieldUpdate::IsAllDay(true)),
                "false" => Ok(FieldUpdate::IsAllDay(false)),
                other => Err(invalid(format!("'{}' is not a boolean", other))),
            },
        }
    }
}

fn parse_time(text: &str) -> std::result::Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(text, "%H:%M:%S").or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
}

// ---------------------------------------------------------------------------
// Validation results
// ---------------------------------------------------------------------------

/// Outcome of validating one field. The error is present iff the field is
/// invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    error: Option<ValidationErrorKind>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(kind: ValidationErrorKind) -> Self {
        Self {
            is_valid: false,
            error: Some(kind),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn error(&self) -> Option<ValidationErrorKind> {
        self.error
    }
}

impl From<Option<ValidationErrorKind>> for ValidationResult {
    fn from(error: Option<ValidationErrorKind>) -> Self {
        error.map_or_else(ValidationResult::valid, ValidationResult::invalid)
    }
}

/// One [`ValidationResult`] per validated field.
///
/// The default is "not yet validated": every entry valid with no error, which
/// is indistinguishable from "validated and passing" until re-validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationState {
    date_from: ValidationResult,
    date_to: ValidationResult,
    time_from: ValidationResult,
    time_to: ValidationResult,
}

impl Default for ValidationState {
    fn default() -> Self {
        Self {
            date_from: ValidationResult::valid(),
            date_to: ValidationResult::valid(),
            time_from: ValidationResult::valid(),
            time_to: ValidationResult::valid(),
        }
    }
}

impl ValidationState {
    pub fn get(&self, field: ValidatedField) -> ValidationResult {
        match field {
            ValidatedField::DateFrom => self.date_from,
            ValidatedField::DateTo => self.date_to,
            ValidatedField::TimeFrom => self.time_from,
            ValidatedField::TimeTo => self.time_to,
        }
    }

    pub fn set(&mut self, field: ValidatedField, result: ValidationResult) {
        let slot = match field {
            ValidatedField::DateFrom => &mut self.date_from,
            ValidatedField::DateTo => &mut self.date_to,
            ValidatedField::TimeFrom => &mut self.time_from,
            ValidatedField::TimeTo => &mut self.time_to,
        };
        *slot = result;
    }

    /// Results in `dateFrom, dateTo, timeFrom, timeTo` order.
    pub fn iter(&self) -> impl Iterator<Item = (ValidatedField, ValidationResult)> + '_ {
        ValidatedField::ALL.into_iter().map(|field| (field, self.get(field)))
    }

    /// Logical AND across all four results.
    pub fn is_valid(&self) -> bool {
        self.iter().all(|(_, result)| result.is_valid())
    }

    /// Fields that currently carry an error.
    pub fn errors(&self) -> Vec<(ValidatedField, ValidationErrorKind)> {
        self.iter()
            .filter_map(|(field, result)| result.error().map(|kind| (field, kind)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_roundtrip_through_from_str() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
        assert!(matches!(
            "startDate".parse::<Field>(),
            Err(OnCallError::UnknownField(name)) if name == "startDate"
        ));
    }

    #[test]
    fn parse_accepts_short_and_long_times() {
        let short = FieldUpdate::parse(Field::TimeFrom, "09:30").unwrap();
        let long = FieldUpdate::parse(Field::TimeFrom, "09:30:00").unwrap();
        assert_eq!(short, long);
        assert_eq!(
            short,
            FieldUpdate::TimeFrom(NaiveTime::from_hms_opt(9, 30, 0))
        );
    }

    #[test]
    fn parse_empty_clears_dates_and_times() {
        assert_eq!(
            FieldUpdate::parse(Field::DateTo, "").unwrap(),
            FieldUpdate::DateTo(None)
        );
        assert_eq!(
            FieldUpdate::parse(Field::TimeTo, "null").unwrap(),
            FieldUpdate::TimeTo(None)
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(FieldUpdate::parse(Field::DateFrom, "2024-13-01").is_err());
        assert!(FieldUpdate::parse(Field::TimeTo, "25:00").is_err());
        assert!(FieldUpdate::parse(Field::IsAllDay, "yes").is_err());
    }

    #[test]
    fn validation_result_serializes_with_wire_names() {
        let json = serde_json::to_string(&ValidationResult::invalid(
            ValidationErrorKind::MustFollowOrEqualTimeFrom,
        ))
        .unwrap();
        assert_eq!(json, r#"{"isValid":false,"error":"mustFollowOrEqualTimeFrom"}"#);

        let json = serde_json::to_string(&ValidationResult::valid()).unwrap();
        assert_eq!(json, r#"{"isValid":true,"error":null}"#);
    }

    #[test]
    fn same_day_requires_both_dates() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1);
        let mut record = AvailabilityRecord {
            date_from: day,
            ..Default::default()
        };
        assert!(!record.is_same_day());
        record.date_to = day;
        assert!(record.is_same_day());
    }
}
