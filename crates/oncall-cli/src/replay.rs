//! Session scripts: replay a list of edits and actions against a form session.

use oncall_core::{
    validate_all, AvailabilityRecord, AvailabilityStore, ErrorMessageLabels, Field, FieldEdit,
    FieldUpdate, FormConfig, FormSession, SaveRequest, SessionHost, SubmitOutcome,
    ValidationState,
};
use oncall_core::submission::OverlayState;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct Script {
    pub config: FormConfig,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Set {
        set: String,
        #[serde(default)]
        value: Value,
    },
    Reset {
        reset: String,
    },
    Action {
        action: Action,
    },
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Open,
    Confirm,
    Cancel,
    FinishSave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfirmResult {
    Dispatched,
    Invalid,
    Busy,
}

impl From<&SubmitOutcome> for ConfirmResult {
    fn from(outcome: &SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Dispatched => ConfirmResult::Dispatched,
            SubmitOutcome::Invalid(_) => ConfirmResult::Invalid,
            SubmitOutcome::Busy => ConfirmResult::Busy,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub confirmations: Vec<ConfirmResult>,
    pub requests: Vec<SaveRequest>,
    pub record: AvailabilityRecord,
    pub validation: ValidationState,
    pub messages: Map<String, Value>,
    pub overlay_open: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub is_valid: bool,
    pub validation: ValidationState,
    pub messages: Map<String, Value>,
}

/// Records dispatched requests. Saves complete immediately, so the store is
/// never busy.
#[derive(Default)]
struct ReplayStore {
    requests: Vec<SaveRequest>,
}

impl AvailabilityStore for ReplayStore {
    fn create_on_call_availability(&mut self, request: SaveRequest) {
        self.requests.push(request);
    }

    fn is_saving(&self) -> bool {
        false
    }
}

#[derive(Default)]
struct ReplayHost {
    overlay_open: bool,
}

impl SessionHost for ReplayHost {
    fn toggle_overlay(&mut self, state: OverlayState, force: bool) {
        info!(open = state.is_overlay_open, force, "toggle overlay");
        self.overlay_open = state.is_overlay_open;
    }
}

/// Replay `script` and report the final state.
pub fn run(script: Script) -> oncall_core::error::Result<Report> {
    let mut session = FormSession::new(
        script.config,
        ReplayStore::default(),
        ReplayHost::default(),
    )?;
    let mut confirmations = Vec::new();

    for step in script.steps {
        match step {
            Step::Set { set, value } => {
                let field: Field = set.parse()?;
                let update = FieldUpdate::parse(field, &value_text(&value))?;
                session.apply(FieldEdit::Set(update));
            }
            Step::Reset { reset } => {
                let field: Field = reset.parse()?;
                session.apply(FieldEdit::Reset(field));
            }
            Step::Action { action } => match action {
                Action::Open => session.open(),
                Action::Confirm => {
                    let outcome = session.confirm();
                    confirmations.push(ConfirmResult::from(&outcome));
                }
                Action::Cancel => session.cancel(),
                Action::FinishSave => session.finish_save(),
            },
        }
    }

    let validation = *session.state().validation();
    Ok(Report {
        confirmations,
        requests: session.store().requests.clone(),
        record: session.state().record().clone(),
        messages: messages(&validation, &session.config().labels),
        validation,
        overlay_open: session.host().overlay_open,
    })
}

/// Batch-validate a standalone record.
pub fn check(record: &AvailabilityRecord, labels: &ErrorMessageLabels) -> CheckReport {
    let validation = validate_all(record);
    CheckReport {
        is_valid: validation.is_valid(),
        messages: messages(&validation, labels),
        validation,
    }
}

fn messages(validation: &ValidationState, labels: &ErrorMessageLabels) -> Map<String, Value> {
    validation
        .messages(labels)
        .into_iter()
        .map(|(field, text)| (field.to_string(), Value::String(text)))
        .collect()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
