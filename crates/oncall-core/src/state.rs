//! The authoritative availability state: current values plus validation.
//!
//! All mutations take `&mut self` and finish before returning, so a reader
//! never sees a value without its matching validation result. Every mutation
//! bumps [`AvailabilityState::revision`], which a UI layer can poll or compare
//! to drive its own change notification.

use tracing::{debug, trace};

use crate::error::{OnCallError, Result};
use crate::record::{AvailabilityRecord, FieldUpdate, ValidatedField, ValidationResult, ValidationState};

/// Current field values and per-field validation results for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityState {
    record: AvailabilityRecord,
    validation: ValidationState,
    revision: u64,
}

impl AvailabilityState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &AvailabilityRecord {
        &self.record
    }

    pub fn validation(&self) -> &ValidationState {
        &self.validation
    }

    /// Incremented once per mutation, batch or single.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Overwrite exactly one field of the record. Does not validate.
    pub fn set_field(&mut self, update: FieldUpdate) {
        self.record.apply(update);
        self.revision += 1;
    }

    /// Overwrite exactly one validation entry.
    pub fn set_field_validation(&mut self, field: ValidatedField, result: ValidationResult) {
        self.validation.set(field, result);
        self.revision += 1;
    }

    /// Write a field value and, if given, its validation result together.
    ///
    /// Without a result only the value changes (the all-day toggle and field
    /// resets). A result for `isAllDay` is rejected before anything is
    /// written.
    pub fn commit_field_update(
        &mut self,
        update: FieldUpdate,
        result: Option<ValidationResult>,
    ) -> Result<()> {
        let field = update.field();
        let validated = match (result, field.validated()) {
            (Some(result), Some(validated)) => Some((validated, result)),
            (Some(_), None) => return Err(OnCallError::NotValidated(field)),
            (None, _) => None,
        };
        self.commit(update, validated);
        Ok(())
    }

    /// Infallible commit used once the result is already keyed to a
    /// validated field.
    pub(crate) fn commit(
        &mut self,
        update: FieldUpdate,
        validated: Option<(ValidatedField, ValidationResult)>,
    ) {
        self.record.apply(update);
        if let Some((field, result)) = validated {
            self.validation.set(field, result);
        }
        self.revision += 1;

        debug!(
            field = %update.field(),
            revision = self.revision,
            error = ?validated.and_then(|(_, r)| r.error()),
            "committed field update"
        );
    }

    /// Replace the whole validation state in one step.
    pub fn apply_validation_batch(&mut self, validation: ValidationState) {
        self.validation = validation;
        self.revision += 1;
    }

    /// Clear every field and mark every entry as not yet validated.
    pub fn reset(&mut self) {
        self.record = AvailabilityRecord::default();
        self.validation = ValidationState::default();
        self.revision += 1;
        trace!(revision = self.revision, "availability state reset");
    }
}
