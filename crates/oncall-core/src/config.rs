//! Session configuration: save context, locale settings, and error labels.
//!
//! Everything here is supplied by the host. The save context is what the
//! persistence collaborator needs besides the record itself; the locale
//! settings are only used for display and never by validation.

use chrono::Weekday;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{OnCallError, Result};
use crate::labels::ErrorMessageLabels;

/// Clock style for the time pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "TIME_FORMAT_12H")]
    H12,
    #[default]
    #[serde(rename = "TIME_FORMAT_24H")]
    H24,
}

/// Display preferences of the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleSettings {
    pub date_format: String,
    pub time_format: TimeFormat,
    pub first_day_of_week: Weekday,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            date_format: "yyyy-MM-dd".to_string(),
            time_format: TimeFormat::H24,
            first_day_of_week: Weekday::Mon,
        }
    }
}

/// Context handed to the persistence collaborator alongside the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveContext {
    pub tenant: String,
    /// IANA timezone of the resource's location (e.g. "Europe/Berlin").
    pub time_zone_id: String,
    /// Opaque display metadata forwarded untouched.
    #[serde(default)]
    pub display_info: serde_json::Value,
    /// Tag that classifies the availability as on-call.
    pub on_call_tag_id: String,
}

impl SaveContext {
    /// Check that the context can be used to build save requests.
    pub fn validate(&self) -> Result<()> {
        if self.tenant.trim().is_empty() {
            return Err(OnCallError::Config("tenant must not be empty".to_string()));
        }
        if self.on_call_tag_id.trim().is_empty() {
            return Err(OnCallError::Config(
                "onCallTagId must not be empty".to_string(),
            ));
        }
        self.time_zone()?;
        Ok(())
    }

    /// Resolve `time_zone_id` against the IANA database.
    pub fn time_zone(&self) -> Result<Tz> {
        self.time_zone_id
            .parse::<Tz>()
            .map_err(|_| OnCallError::InvalidTimezone(self.time_zone_id.clone()))
    }
}

/// Everything a form session needs from its host, loadable from one JSON
/// document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    pub context: SaveContext,
    #[serde(default)]
    pub locale: LocaleSettings,
    #[serde(default)]
    pub labels: ErrorMessageLabels,
}

impl FormConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FormConfig = serde_json::from_str(json)?;
        config.context.validate()?;
        Ok(config)
    }
}
