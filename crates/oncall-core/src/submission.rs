//! Submission coordinator: confirm and cancel.
//!
//! Confirm re-validates every field of the *current* record in one batch,
//! commits the fresh validation state in full (so every error shows at once),
//! and only builds and dispatches a [`SaveRequest`] when all four fields pass.
//! Cancel resets the state and asks the host to close the editing surface.
//!
//! Dispatch is fire-and-forget. The core never waits on the persistence
//! collaborator, never retries, and does not clear state when a save
//! completes; the host does that through [`crate::session::FormSession::finish_save`].

use serde::Serialize;
use tracing::{debug, info};

use crate::config::SaveContext;
use crate::record::{AvailabilityRecord, ValidationState};
use crate::rules;
use crate::state::AvailabilityState;

/// Payload handed to the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub tenant: String,
    pub time_zone_id: String,
    pub display_info: serde_json::Value,
    pub on_call_availability: AvailabilityRecord,
    pub tags: Vec<String>,
}

impl SaveRequest {
    pub fn new(context: &SaveContext, record: &AvailabilityRecord) -> Self {
        Self {
            tenant: context.tenant.clone(),
            time_zone_id: context.time_zone_id.clone(),
            display_info: context.display_info.clone(),
            on_call_availability: record.clone(),
            tags: vec![context.on_call_tag_id.clone()],
        }
    }
}

/// The persistence collaborator that performs the actual create operation.
pub trait AvailabilityStore {
    /// Start creating the availability. Must not block on completion.
    fn create_on_call_availability(&mut self, request: SaveRequest);

    /// Whether a previously dispatched save is still in flight.
    fn is_saving(&self) -> bool;
}

/// Open/closed state of the editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayState {
    pub is_overlay_open: bool,
}

/// The host that owns the editing surface.
pub trait SessionHost {
    fn toggle_overlay(&mut self, state: OverlayState, force: bool);
}

/// Result of a confirm action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A save request was handed to the store.
    Dispatched,
    /// At least one field failed; the state now shows every error.
    Invalid(ValidationState),
    /// A save is already in flight; nothing was validated or dispatched.
    Busy,
}

/// Run the batch validation, commit it, and report overall validity.
pub fn validate_form(state: &mut AvailabilityState) -> bool {
    let validation = rules::validate_all(state.record());
    let is_valid = validation.is_valid();
    state.apply_validation_batch(validation);
    is_valid
}

/// Confirm (save attempt).
pub fn confirm<S: AvailabilityStore + ?Sized>(
    state: &mut AvailabilityState,
    context: &SaveContext,
    store: &mut S,
) -> SubmitOutcome {
    if store.is_saving() {
        debug!("save already in flight, confirm ignored");
        return SubmitOutcome::Busy;
    }

    if !validate_form(state) {
        let validation = *state.validation();
        debug!(errors = ?validation.errors(), "submission refused");
        return SubmitOutcome::Invalid(validation);
    }

    let request = SaveRequest::new(context, state.record());
    info!(
        tenant = %request.tenant,
        time_zone_id = %request.time_zone_id,
        "dispatching on-call availability"
    );
    store.create_on_call_availability(request);
    SubmitOutcome::Dispatched
}

/// Cancel: clear local state and close the surface, regardless of any save in
/// flight.
pub fn cancel<H: SessionHost + ?Sized>(state: &mut AvailabilityState, host: &mut H) {
    state.reset();
    host.toggle_overlay(
        OverlayState {
            is_overlay_open: false,
        },
        true,
    );
}
