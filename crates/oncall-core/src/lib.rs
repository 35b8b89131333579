//! # oncall-core
//!
//! Validation and state core for editing an on-call duty availability window.
//!
//! An operator edits four interdependent fields (start date, start time, end
//! date, end time) and an all-day flag. This crate keeps those fields and
//! their per-field validation results consistent, and gates submission on
//! whole-form validity before handing a save request to the persistence
//! collaborator.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use oncall_core::{coordinator, submission, AvailabilityState, SaveContext, SaveRequest};
//!
//! struct Recorder(Vec<SaveRequest>);
//!
//! impl submission::AvailabilityStore for Recorder {
//!     fn create_on_call_availability(&mut self, request: SaveRequest) {
//!         self.0.push(request);
//!     }
//!     fn is_saving(&self) -> bool {
//!         false
//!     }
//! }
//!
//! let mut state = AvailabilityState::new();
//! let day = NaiveDate::from_ymd_opt(2024, 5, 1);
//! coordinator::set_date_from(&mut state, day);
//! coordinator::set_date_to(&mut state, day);
//! coordinator::set_time_from(&mut state, NaiveTime::from_hms_opt(9, 0, 0));
//! coordinator::set_time_to(&mut state, NaiveTime::from_hms_opt(17, 0, 0));
//!
//! let context = SaveContext {
//!     tenant: "acme".into(),
//!     time_zone_id: "Europe/Berlin".into(),
//!     display_info: serde_json::Value::Null,
//!     on_call_tag_id: "on-call".into(),
//! };
//! let mut store = Recorder(Vec::new());
//! let outcome = submission::confirm(&mut state, &context, &mut store);
//! assert_eq!(outcome, submission::SubmitOutcome::Dispatched);
//! assert_eq!(store.0.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`rules`] — Pure per-field validation rules and the batch validator
//! - [`state`] — The authoritative record + validation state
//! - [`coordinator`] — Single-field edits: validate, then commit together
//! - [`submission`] — Confirm/cancel, save request construction
//! - [`session`] — A form session wiring state to its host and store
//! - [`record`] — Record, field names, validation result types
//! - [`config`] — Save context, locale settings, configuration loading
//! - [`labels`] — Display text for validation error kinds
//! - [`error`] — Error types

pub mod config;
pub mod coordinator;
pub mod error;
pub mod labels;
pub mod record;
pub mod rules;
pub mod session;
pub mod state;
pub mod submission;

pub use config::{FormConfig, LocaleSettings, SaveContext, TimeFormat};
pub use coordinator::{apply_edit, EditOutcome, FieldEdit};
pub use error::{OnCallError, ValidationErrorKind};
pub use labels::ErrorMessageLabels;
pub use record::{
    AvailabilityRecord, Field, FieldUpdate, ValidatedField, ValidationResult, ValidationState,
};
pub use rules::validate_all;
pub use session::{FieldView, FormSession, FormView};
pub use state::AvailabilityState;
pub use submission::{AvailabilityStore, SaveRequest, SessionHost, SubmitOutcome};
