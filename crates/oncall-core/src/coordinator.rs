//! Field update coordinator: one user edit in, one committed update out.
//!
//! Date and time edits are validated against the *current* record (the
//! counterpart values as committed, plus the current all-day flag) and the
//! value lands together with its result. The all-day toggle and per-field
//! resets commit the value only: toggling does not re-validate the time
//! fields, and clearing a field does not flag it invalid.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::record::{Field, FieldUpdate, ValidationResult};
use crate::rules;
use crate::state::AvailabilityState;

/// A single user edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    /// Set a field to a new value (validated unless it is `isAllDay`).
    Set(FieldUpdate),
    /// Clear a field without validating it.
    Reset(Field),
}

/// What an edit did, for callers that want to echo it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditOutcome {
    pub field: Field,
    /// `None` when the edit committed a value without validation.
    pub validation: Option<ValidationResult>,
}

/// Apply one edit to `state`.
pub fn apply_edit(state: &mut AvailabilityState, edit: FieldEdit) -> EditOutcome {
    match edit {
        FieldEdit::Set(update) => {
            let validation = rules::validate_update(update, state.record());
            let keyed = update.field().validated().zip(validation);
            state.commit(update, keyed);
            EditOutcome {
                field: update.field(),
                validation,
            }
        }
        FieldEdit::Reset(field) => {
            state.commit(FieldUpdate::cleared(field), None);
            EditOutcome {
                field,
                validation: None,
            }
        }
    }
}

pub fn set_date_from(state: &mut AvailabilityState, date: Option<NaiveDate>) -> EditOutcome {
    apply_edit(state, FieldEdit::Set(FieldUpdate::DateFrom(date)))
}

pub fn set_date_to(state: &mut AvailabilityState, date: Option<NaiveDate>) -> EditOutcome {
    apply_edit(state, FieldEdit::Set(FieldUpdate::DateTo(date)))
}

pub fn set_time_from(state: &mut AvailabilityState, time: Option<NaiveTime>) -> EditOutcome {
    apply_edit(state, FieldEdit::Set(FieldUpdate::TimeFrom(time)))
}

pub fn set_time_to(state: &mut AvailabilityState, time: Option<NaiveTime>) -> EditOutcome {
    apply_edit(state, FieldEdit::Set(FieldUpdate::TimeTo(time)))
}

pub fn set_is_all_day(state: &mut AvailabilityState, is_all_day: bool) -> EditOutcome {
    apply_edit(state, FieldEdit::Set(FieldUpdate::IsAllDay(is_all_day)))
}

pub fn reset_field(state: &mut AvailabilityState, field: Field) -> EditOutcome {
    apply_edit(state, FieldEdit::Reset(field))
}
