//! WASM bindings for oncall-core.
//!
//! Exposes field validation, batch validation, and save request construction
//! to a JavaScript presentation layer via `wasm-bindgen`. All complex types are
//! passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p oncall-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/oncall-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/oncall_wasm.wasm
//! ```

use oncall_core::{
    rules, validate_all, AvailabilityRecord, ErrorMessageLabels, Field, FieldUpdate,
    SaveContext, SaveRequest, ValidationResult, ValidationState,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Returned when a save request cannot be built because the form is invalid.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InvalidFormDto {
    is_valid: bool,
    validation: ValidationState,
}

// ---------------------------------------------------------------------------
// JSON-level implementations (testable without a JS runtime)
// ---------------------------------------------------------------------------

fn parse_record(json: &str) -> Result<AvailabilityRecord, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid record JSON: {}", e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn validate_record_json(record_json: &str) -> Result<String, String> {
    let record = parse_record(record_json)?;
    to_json(&validate_all(&record))
}

fn validate_field_json(field: &str, value: &str, record_json: &str) -> Result<String, String> {
    let record = parse_record(record_json)?;
    let field = field.parse::<Field>().map_err(|e| e.to_string())?;
    let update = FieldUpdate::parse(field, value).map_err(|e| e.to_string())?;
    // The all-day flag has no validator; report it as valid.
    let result = rules::validate_update(update, &record).unwrap_or_else(ValidationResult::valid);
    to_json(&result)
}

fn build_save_request_json(record_json: &str, context_json: &str) -> Result<String, String> {
    let record = parse_record(record_json)?;
    let context: SaveContext = serde_json::from_str(context_json)
        .map_err(|e| format!("Invalid context JSON: {}", e))?;
    context.validate().map_err(|e| e.to_string())?;

    let validation = validate_all(&record);
    if !validation.is_valid() {
        return Err(to_json(&InvalidFormDto {
            is_valid: false,
            validation,
        })?);
    }
    to_json(&SaveRequest::new(&context, &record))
}

fn default_error_labels_json() -> Result<String, String> {
    to_json(&ErrorMessageLabels::default())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Batch-validate a record.
///
/// `record_json` is an `AvailabilityRecord` (`dateFrom`, `dateTo`, `timeFrom`,
/// `timeTo`, `isAllDay`). Returns the validation state as JSON, one
/// `{isValid, error}` entry per validated field.
#[wasm_bindgen(js_name = "validateRecord")]
pub fn validate_record(record_json: &str) -> Result<String, JsValue> {
    validate_record_json(record_json).map_err(|e| JsValue::from_str(&e))
}

/// Validate a single edit against the committed record.
///
/// # Arguments
/// - `field` -- Field name (`dateFrom`, `dateTo`, `timeFrom`, `timeTo`, `isAllDay`)
/// - `value` -- Candidate value as text (`2024-05-01`, `09:00`, `true`; empty clears)
/// - `record_json` -- The record as currently committed
#[wasm_bindgen(js_name = "validateField")]
pub fn validate_field(field: &str, value: &str, record_json: &str) -> Result<String, JsValue> {
    validate_field_json(field, value, record_json).map_err(|e| JsValue::from_str(&e))
}

/// Validate the whole record and build the save request payload.
///
/// On an invalid form the error value is a JSON object
/// `{isValid: false, validation}` so the caller can show every field error.
#[wasm_bindgen(js_name = "buildSaveRequest")]
pub fn build_save_request(record_json: &str, context_json: &str) -> Result<String, JsValue> {
    build_save_request_json(record_json, context_json).map_err(|e| JsValue::from_str(&e))
}

/// English fallback text for every validation error kind, keyed by kind.
#[wasm_bindgen(js_name = "defaultErrorLabels")]
pub fn default_error_labels() -> Result<String, JsValue> {
    default_error_labels_json().map_err(|e| JsValue::from_str(&e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use oncall_core::ValidationErrorKind;

    const SAME_DAY: &str = r#"{"dateFrom":"2024-05-01","dateTo":"2024-05-01",
        "timeFrom":"09:00:00","timeTo":"17:00:00","isAllDay":false}"#;

    const CONTEXT: &str = r#"{"tenant":"acme","timeZoneId":"UTC","onCallTagId":"oc"}"#;

    #[test]
    fn field_validation_uses_committed_record() {
        let json = validate_field_json("timeTo", "08:00", SAME_DAY).unwrap();
        assert_eq!(
            json,
            r#"{"isValid":false,"error":"mustFollowOrEqualTimeFrom"}"#
        );
    }

    #[test]
    fn all_day_field_reports_valid() {
        let json = validate_field_json("isAllDay", "true", SAME_DAY).unwrap();
        assert_eq!(json, r#"{"isValid":true,"error":null}"#);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = validate_field_json("start", "x", SAME_DAY).unwrap_err();
        assert_eq!(err, "Unknown field: start");
    }

    #[test]
    fn save_request_for_valid_record() {
        let json = build_save_request_json(SAME_DAY, CONTEXT).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tags"], serde_json::json!(["oc"]));
        assert_eq!(value["onCallAvailability"]["timeTo"], "17:00:00");
    }

    #[test]
    fn save_request_for_empty_record_carries_validation() {
        let err = build_save_request_json("{}", CONTEXT).unwrap_err();
        let value: serde_json::Value = serde_json::from_str(&err).unwrap();
        assert_eq!(value["isValid"], false);
        assert_eq!(value["validation"]["dateFrom"]["error"], "required");
        assert_eq!(value["validation"]["timeTo"]["error"], "required");
    }

    #[test]
    fn default_labels_cover_every_kind() {
        let json = default_error_labels_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_object().unwrap().len(), ValidationErrorKind::ALL.len());
        assert_eq!(value["required"], "This field is required");
    }
}
