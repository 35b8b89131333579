//! Tests for the per-field validation rules and the batch validator.

use chrono::{NaiveDate, NaiveTime};
use oncall_core::rules::{
    validate_all, validate_date_from, validate_date_to, validate_time_from, validate_time_to,
    validate_update, TimeContext,
};
use oncall_core::{AvailabilityRecord, FieldUpdate, ValidatedField, ValidationErrorKind};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn d(s: &str) -> Option<NaiveDate> {
    Some(s.parse().unwrap())
}

fn t(s: &str) -> Option<NaiveTime> {
    Some(NaiveTime::parse_from_str(s, "%H:%M").unwrap())
}

const SAME_DAY: TimeContext = TimeContext {
    is_all_day: false,
    same_day: true,
};

const ALL_DAY: TimeContext = TimeContext {
    is_all_day: true,
    same_day: true,
};

// ── Dates ───────────────────────────────────────────────────────────────────

#[test]
fn missing_dates_are_required() {
    assert_eq!(
        validate_date_from(None, d("2024-05-01")).error(),
        Some(ValidationErrorKind::Required)
    );
    assert_eq!(
        validate_date_to(None, None).error(),
        Some(ValidationErrorKind::Required)
    );
}

#[test]
fn date_from_after_date_to_fails() {
    let result = validate_date_from(d("2024-05-02"), d("2024-05-01"));
    assert!(!result.is_valid());
    assert_eq!(
        result.error(),
        Some(ValidationErrorKind::MustPrecedeOrEqualDateTo)
    );
}

#[test]
fn date_to_before_date_from_fails() {
    let result = validate_date_to(d("2024-04-30"), d("2024-05-01"));
    assert_eq!(
        result.error(),
        Some(ValidationErrorKind::MustFollowOrEqualDateFrom)
    );
}

#[test]
fn equal_dates_are_valid() {
    assert!(validate_date_from(d("2024-05-01"), d("2024-05-01")).is_valid());
    assert!(validate_date_to(d("2024-05-01"), d("2024-05-01")).is_valid());
}

#[test]
fn date_without_counterpart_is_valid() {
    assert!(validate_date_from(d("2024-05-01"), None).is_valid());
    assert!(validate_date_to(d("2024-05-01"), None).is_valid());
}

// ── Times ───────────────────────────────────────────────────────────────────

#[test]
fn same_day_time_to_before_time_from_fails() {
    let result = validate_time_to(t("08:00"), t("09:00"), SAME_DAY);
    assert_eq!(
        result.error(),
        Some(ValidationErrorKind::MustFollowOrEqualTimeFrom)
    );
}

#[test]
fn same_day_time_from_after_time_to_fails() {
    let result = validate_time_from(t("17:00"), t("09:00"), SAME_DAY);
    assert_eq!(
        result.error(),
        Some(ValidationErrorKind::MustPrecedeOrEqualTimeTo)
    );
}

#[test]
fn equal_times_on_same_day_are_valid() {
    assert!(validate_time_from(t("09:00"), t("09:00"), SAME_DAY).is_valid());
    assert!(validate_time_to(t("09:00"), t("09:00"), SAME_DAY).is_valid());
}

#[test]
fn missing_time_is_required_unless_all_day() {
    assert_eq!(
        validate_time_from(None, t("09:00"), SAME_DAY).error(),
        Some(ValidationErrorKind::Required)
    );
    assert!(validate_time_from(None, t("09:00"), ALL_DAY).is_valid());
    assert!(validate_time_to(None, None, ALL_DAY).is_valid());
}

#[test]
fn all_day_accepts_inverted_times() {
    assert!(validate_time_from(t("17:00"), t("09:00"), ALL_DAY).is_valid());
    assert!(validate_time_to(t("09:00"), t("17:00"), ALL_DAY).is_valid());
}

// ── Single-field edits against the committed record ─────────────────────────

#[test]
fn update_reads_committed_counterpart_not_candidate() {
    let record = AvailabilityRecord {
        date_from: d("2024-05-10"),
        date_to: d("2024-05-01"),
        ..Default::default()
    };
    // The candidate dateTo is compared against the committed dateFrom.
    let result = validate_update(FieldUpdate::DateTo(d("2024-05-12")), &record).unwrap();
    assert!(result.is_valid());

    let result = validate_update(FieldUpdate::DateFrom(d("2024-05-02")), &record).unwrap();
    assert_eq!(
        result.error(),
        Some(ValidationErrorKind::MustPrecedeOrEqualDateTo)
    );
}

#[test]
fn all_day_update_has_no_validator() {
    let record = AvailabilityRecord::default();
    assert!(validate_update(FieldUpdate::IsAllDay(true), &record).is_none());
}

// ── Batch ───────────────────────────────────────────────────────────────────

#[test]
fn empty_record_fails_every_field_with_required() {
    let state = validate_all(&AvailabilityRecord::default());
    assert!(!state.is_valid());
    for field in ValidatedField::ALL {
        assert_eq!(
            state.get(field).error(),
            Some(ValidationErrorKind::Required),
            "{} should be required",
            field
        );
    }
}

#[test]
fn multi_day_window_does_not_order_times() {
    let record = AvailabilityRecord {
        date_from: d("2024-05-01"),
        date_to: d("2024-05-02"),
        time_from: t("22:00"),
        time_to: t("06:00"),
        is_all_day: false,
    };
    assert!(validate_all(&record).is_valid());
}

#[test]
fn batch_reports_every_failure_at_once() {
    let record = AvailabilityRecord {
        date_from: d("2024-05-03"),
        date_to: d("2024-05-01"),
        time_from: None,
        time_to: t("09:00"),
        is_all_day: false,
    };
    let state = validate_all(&record);
    assert_eq!(
        state.errors(),
        vec![
            (
                ValidatedField::DateFrom,
                ValidationErrorKind::MustPrecedeOrEqualDateTo
            ),
            (
                ValidatedField::DateTo,
                ValidationErrorKind::MustFollowOrEqualDateFrom
            ),
            (ValidatedField::TimeFrom, ValidationErrorKind::Required),
        ]
    );
}
