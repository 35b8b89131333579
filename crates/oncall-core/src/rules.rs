//! Pure validation rules for the four validated fields.
//!
//! Every rule takes the candidate value plus its cross-field context as
//! explicit arguments and returns a [`ValidationResult`]. Rules never read
//! mutable state; callers pass the *committed* counterpart values from the
//! current record, not other candidates.
//!
//! Ties are legal: `dateFrom == dateTo` and, on a same-day window,
//! `timeFrom == timeTo` both validate.

use chrono::{NaiveDate, NaiveTime};

use crate::error::ValidationErrorKind;
use crate::record::{AvailabilityRecord, FieldUpdate, ValidatedField, ValidationResult, ValidationState};

/// Cross-field context for the time rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeContext {
    /// Time fields are collapsed; every time validates.
    pub is_all_day: bool,
    /// `dateFrom` and `dateTo` are both set and equal.
    pub same_day: bool,
}

impl TimeContext {
    pub fn of(record: &AvailabilityRecord) -> Self {
        Self {
            is_all_day: record.is_all_day,
            same_day: record.is_same_day(),
        }
    }
}

/// Which end of the window a time rule is judging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    From,
    To,
}

/// Validate a candidate `dateFrom` against the committed `dateTo`.
pub fn validate_date_from(date: Option<NaiveDate>, date_to: Option<NaiveDate>) -> ValidationResult {
    match (date, date_to) {
        (None, _) => ValidationResult::invalid(ValidationErrorKind::Required),
        (Some(from), Some(to)) if from > to => {
            ValidationResult::invalid(ValidationErrorKind::MustPrecedeOrEqualDateTo)
        }
        _ => ValidationResult::valid(),
    }
}

/// Validate a candidate `dateTo` against the committed `dateFrom`.
pub fn validate_date_to(date: Option<NaiveDate>, date_from: Option<NaiveDate>) -> ValidationResult {
    match (date, date_from) {
        (None, _) => ValidationResult::invalid(ValidationErrorKind::Required),
        (Some(to), Some(from)) if to < from => {
            ValidationResult::invalid(ValidationErrorKind::MustFollowOrEqualDateFrom)
        }
        _ => ValidationResult::valid(),
    }
}

/// Validate a candidate `timeFrom` against the committed `timeTo`.
pub fn validate_time_from(
    time: Option<NaiveTime>,
    time_to: Option<NaiveTime>,
    ctx: TimeContext,
) -> ValidationResult {
    validate_time(Side::From, time, time_to, ctx)
}

/// Validate a candidate `timeTo` against the committed `timeFrom`.
pub fn validate_time_to(
    time: Option<NaiveTime>,
    time_from: Option<NaiveTime>,
    ctx: TimeContext,
) -> ValidationResult {
    validate_time(Side::To, time, time_from, ctx)
}

/// Shared time rule, judged from one side of the window.
fn validate_time(
    side: Side,
    time: Option<NaiveTime>,
    counterpart: Option<NaiveTime>,
    ctx: TimeContext,
) -> ValidationResult {
    if ctx.is_all_day {
        return ValidationResult::valid();
    }
    let Some(time) = time else {
        return ValidationResult::invalid(ValidationErrorKind::Required);
    };
    // Different days never order the times against each other.
    let Some(other) = counterpart.filter(|_| ctx.same_day) else {
        return ValidationResult::valid();
    };

    match side {
        Side::From if time > other => {
            ValidationResult::invalid(ValidationErrorKind::MustPrecedeOrEqualTimeTo)
        }
        Side::To if time < other => {
            ValidationResult::invalid(ValidationErrorKind::MustFollowOrEqualTimeFrom)
        }
        _ => ValidationResult::valid(),
    }
}

/// Validate a single-field edit against the current record.
///
/// The candidate value comes from `update`; every other input is read from
/// `record` as currently committed. Returns `None` for `isAllDay`, which has
/// no validator.
pub fn validate_update(update: FieldUpdate, record: &AvailabilityRecord) -> Option<ValidationResult> {
    let ctx = TimeContext::of(record);
    let result = match update {
        FieldUpdate::DateFrom(date) => validate_date_from(date, record.date_to),
        FieldUpdate::DateTo(date) => validate_date_to(date, record.date_from),
        FieldUpdate::TimeFrom(time) => validate_time_from(time, record.time_to, ctx),
        FieldUpdate::TimeTo(time) => validate_time_to(time, record.time_from, ctx),
        FieldUpdate::IsAllDay(_) => return None,
    };
    Some(result)
}

/// Validate one field of `record` as it stands.
pub fn validate_field(field: ValidatedField, record: &AvailabilityRecord) -> ValidationResult {
    let ctx = TimeContext::of(record);
    match field {
        ValidatedField::DateFrom => validate_date_from(record.date_from, record.date_to),
        ValidatedField::DateTo => validate_date_to(record.date_to, record.date_from),
        ValidatedField::TimeFrom => validate_time_from(record.time_from, record.time_to, ctx),
        ValidatedField::TimeTo => validate_time_to(record.time_to, record.time_from, ctx),
    }
}

/// Re-validate every field of `record` in one pass.
///
/// The result depends only on `record`, never on previously stored
/// validation results.
pub fn validate_all(record: &AvailabilityRecord) -> ValidationState {
    let mut state = ValidationState::default();
    for field in ValidatedField::ALL {
        state.set(field, validate_field(field, record));
    }
    state
}
