//! A single form session: state, configuration, and the two collaborators.
//!
//! [`FormSession`] is the entry point a host drives. Edits go through the
//! field update coordinator, confirm/cancel through the submission
//! coordinator, and [`FormSession::view`] hands the presentation layer a
//! read-only snapshot with error text already resolved.

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::Serialize;

use crate::config::{FormConfig, TimeFormat};
use crate::coordinator::{self, EditOutcome, FieldEdit};
use crate::error::Result;
use crate::record::{Field, ValidatedField};
use crate::state::AvailabilityState;
use crate::submission::{self, AvailabilityStore, OverlayState, SessionHost, SubmitOutcome};

pub struct FormSession<S, H> {
    state: AvailabilityState,
    config: FormConfig,
    store: S,
    host: H,
}

impl<S: AvailabilityStore, H: SessionHost> FormSession<S, H> {
    /// Create a session with empty state. Fails if the save context is
    /// unusable.
    pub fn new(config: FormConfig, store: S, host: H) -> Result<Self> {
        config.context.validate()?;
        Ok(Self {
            state: AvailabilityState::new(),
            config,
            store,
            host,
        })
    }

    pub fn state(&self) -> &AvailabilityState {
        &self.state
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Start editing from an empty form.
    pub fn open(&mut self) {
        self.state.reset();
        self.host.toggle_overlay(
            OverlayState {
                is_overlay_open: true,
            },
            false,
        );
    }

    pub fn apply(&mut self, edit: FieldEdit) -> EditOutcome {
        coordinator::apply_edit(&mut self.state, edit)
    }

    pub fn set_date_from(&mut self, date: NaiveDate) -> EditOutcome {
        coordinator::set_date_from(&mut self.state, Some(date))
    }

    pub fn set_date_to(&mut self, date: NaiveDate) -> EditOutcome {
        coordinator::set_date_to(&mut self.state, Some(date))
    }

    pub fn set_time_from(&mut self, time: NaiveTime) -> EditOutcome {
        coordinator::set_time_from(&mut self.state, Some(time))
    }

    pub fn set_time_to(&mut self, time: NaiveTime) -> EditOutcome {
        coordinator::set_time_to(&mut self.state, Some(time))
    }

    pub fn set_is_all_day(&mut self, is_all_day: bool) -> EditOutcome {
        coordinator::set_is_all_day(&mut self.state, is_all_day)
    }

    pub fn reset_date_from(&mut self) -> EditOutcome {
        coordinator::reset_field(&mut self.state, Field::DateFrom)
    }

    pub fn reset_date_to(&mut self) -> EditOutcome {
        coordinator::reset_field(&mut self.state, Field::DateTo)
    }

    pub fn reset_time_from(&mut self) -> EditOutcome {
        coordinator::reset_field(&mut self.state, Field::TimeFrom)
    }

    pub fn reset_time_to(&mut self) -> EditOutcome {
        coordinator::reset_field(&mut self.state, Field::TimeTo)
    }

    pub fn confirm(&mut self) -> SubmitOutcome {
        submission::confirm(&mut self.state, &self.config.context, &mut self.store)
    }

    pub fn cancel(&mut self) {
        submission::cancel(&mut self.state, &mut self.host);
    }

    /// Called by the host once the store reports a successful save.
    pub fn finish_save(&mut self) {
        submission::cancel(&mut self.state, &mut self.host);
    }

    /// Snapshot for the presentation layer.
    pub fn view(&self) -> FormView {
        let record = self.state.record();
        let labels = &self.config.labels;
        let locale = &self.config.locale;

        let field = |validated: ValidatedField| {
            let result = self.state.validation().get(validated);
            (
                !result.is_valid(),
                result.error().map(|kind| labels.message(kind).to_string()),
            )
        };
        let (date_from_error, date_from_text) = field(ValidatedField::DateFrom);
        let (date_to_error, date_to_text) = field(ValidatedField::DateTo);
        let (time_from_error, time_from_text) = field(ValidatedField::TimeFrom);
        let (time_to_error, time_to_text) = field(ValidatedField::TimeTo);

        FormView {
            date_from: FieldView {
                value: record.date_from,
                error: date_from_error,
                error_text: date_from_text,
            },
            date_to: FieldView {
                value: record.date_to,
                error: date_to_error,
                error_text: date_to_text,
            },
            time_from: FieldView {
                value: record.time_from,
                error: time_from_error,
                error_text: time_from_text,
            },
            time_to: FieldView {
                value: record.time_to,
                error: time_to_error,
                error_text: time_to_text,
            },
            is_all_day: record.is_all_day,
            time_pickers_collapsed: record.is_all_day,
            ampm: locale.time_format == TimeFormat::H12,
            date_format: locale.date_format.clone(),
            first_day_of_week: locale.first_day_of_week,
            is_loading: self.store.is_saving(),
            revision: self.state.revision(),
        }
    }
}

/// One picker as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView<T> {
    pub value: Option<T>,
    pub error: bool,
    pub error_text: Option<String>,
}

/// Read-only snapshot of a form session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub date_from: FieldView<NaiveDate>,
    pub date_to: FieldView<NaiveDate>,
    pub time_from: FieldView<NaiveTime>,
    pub time_to: FieldView<NaiveTime>,
    pub is_all_day: bool,
    pub time_pickers_collapsed: bool,
    /// 12-hour pickers.
    pub ampm: bool,
    pub date_format: String,
    pub first_day_of_week: Weekday,
    pub is_loading: bool,
    pub revision: u64,
}
