//! Attendance deviation detection.
//!
//! Compares the actual punches against the scheduled shift window and
//! reports lateness, early arrival and early departure in whole minutes.
//! Scheduled times are wall-clock strings and may carry extra text around
//! the `HH:MM` (e.g. `"09:00 hs"`).

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::AuditStep;

// Range checks are left to `NaiveTime::from_hms_opt`.
static CLOCK_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2}):(\d{2})").expect("valid clock time pattern"));

/// Extracts the first `H:MM` or `HH:MM` wall-clock time from a schedule string.
///
/// ```
/// use hours_engine::calculation::parse_clock_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock_time("09:30"), NaiveTime::from_hms_opt(9, 30, 0));
/// assert_eq!(parse_clock_time("ingreso 07:05 hs"), NaiveTime::from_hms_opt(7, 5, 0));
/// assert_eq!(parse_clock_time("8:00"), NaiveTime::from_hms_opt(8, 0, 0));
/// assert_eq!(parse_clock_time("9.30"), None);
/// ```
pub fn parse_clock_time(raw: &str) -> Option<NaiveTime> {
    let captures = CLOCK_TIME.captures(raw)?;
    let hour = captures.get(1)?.as_str().parse().ok()?;
    let minute = captures.get(2)?.as_str().parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Minutes since midnight, ignoring seconds.
pub fn minutes_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour() * 60 + time.minute())
}

/// Minutes the actual start is after the scheduled start; zero when on time or early.
pub fn lateness_minutes(scheduled_start: NaiveTime, actual_start: NaiveDateTime) -> i64 {
    (minutes_of_day(actual_start.time()) - minutes_of_day(scheduled_start)).max(0)
}

/// Minutes the actual start is before the scheduled start; zero when on time or late.
pub fn early_arrival_minutes(scheduled_start: NaiveTime, actual_start: NaiveDateTime) -> i64 {
    (minutes_of_day(scheduled_start) - minutes_of_day(actual_start.time())).max(0)
}

/// Minutes the actual end is before the scheduled end.
///
/// A shift whose end falls on a later calendar day than its start never
/// counts as leaving early.
pub fn early_departure_minutes(
    scheduled_end: NaiveTime,
    actual_start: NaiveDateTime,
    actual_end: NaiveDateTime,
) -> i64 {
    if actual_end.date() > actual_start.date() {
        return 0;
    }
    (minutes_of_day(scheduled_end) - minutes_of_day(actual_end.time())).max(0)
}

/// Deviation minutes for one day.
///
/// `None` means the value could not be computed (no schedule, no punches, or
/// a schedule string without a recognizable time). Reporting layers show it
/// as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceDeviations {
    /// Minutes late against the scheduled start.
    pub lateness_minutes: Option<i64>,
    /// Minutes early against the scheduled start.
    pub early_arrival_minutes: Option<i64>,
    /// Minutes early against the scheduled end.
    pub early_departure_minutes: Option<i64>,
}

/// The result of deviation detection, including the audit step.
#[derive(Debug, Clone)]
pub struct DeviationResult {
    /// The detected deviations.
    pub deviations: AttendanceDeviations,
    /// Schedule strings that were present but had no recognizable time.
    pub unparseable: Vec<String>,
    /// The audit step recording this detection.
    pub audit_step: AuditStep,
}

/// Detects lateness, early arrival and early departure for a day.
///
/// # Arguments
///
/// * `schedule` - Scheduled start and end strings of the first time slot
/// * `interval` - Resolved worked interval, if both punches are known
/// * `reference_date` - The day being processed
/// * `step_number` - The step number for the audit trail
///
/// # Examples
///
/// ```
/// use hours_engine::calculation::detect_deviations;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let start = NaiveDateTime::parse_from_str("2026-01-12 08:25:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-12 16:40:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let result = detect_deviations(Some(("08:00", "17:00")), Some((start, end)), day, 1);
/// assert_eq!(result.deviations.lateness_minutes, Some(25));
/// assert_eq!(result.deviations.early_arrival_minutes, Some(0));
/// assert_eq!(result.deviations.early_departure_minutes, Some(20));
/// ```
pub fn detect_deviations(
    schedule: Option<(&str, &str)>,
    interval: Option<(NaiveDateTime, NaiveDateTime)>,
    reference_date: NaiveDate,
    step_number: u32,
) -> DeviationResult {
    let mut unparseable = Vec::new();
    let mut parse = |raw: &str| {
        let parsed = parse_clock_time(raw);
        if parsed.is_none() {
            unparseable.push(raw.to_string());
        }
        parsed
    };

    let (scheduled_start, scheduled_end) = match schedule {
        Some((start, end)) => (parse(start), parse(end)),
        None => (None, None),
    };

    let deviations = match interval {
        Some((actual_start, actual_end)) => AttendanceDeviations {
            lateness_minutes: scheduled_start.map(|s| lateness_minutes(s, actual_start)),
            early_arrival_minutes: scheduled_start
                .map(|s| early_arrival_minutes(s, actual_start)),
            early_departure_minutes: scheduled_end
                .map(|e| early_departure_minutes(e, actual_start, actual_end)),
        },
        None => AttendanceDeviations::default(),
    };

    let as_json = |minutes: Option<i64>| match minutes {
        Some(m) => serde_json::json!(m),
        None => serde_json::Value::Null,
    };

    let reasoning = match (schedule, interval) {
        (None, _) => "No scheduled time slot: deviations not computed".to_string(),
        (_, None) => "No complete punch pair: deviations not computed".to_string(),
        (Some((s, e)), Some(_)) => format!(
            "Schedule {} - {}: {} min late, {} min early arrival, {} min early departure",
            s,
            e,
            deviations.lateness_minutes.unwrap_or(0),
            deviations.early_arrival_minutes.unwrap_or(0),
            deviations.early_departure_minutes.unwrap_or(0)
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "attendance_deviations".to_string(),
        rule_name: "Attendance Deviations".to_string(),
        legal_ref: "LCT art. 197".to_string(),
        date: reference_date,
        input: serde_json::json!({
            "scheduled_start": schedule.map(|s| s.0),
            "scheduled_end": schedule.map(|s| s.1),
            "actual_start": interval.map(|i| i.0.to_string()),
            "actual_end": interval.map(|i| i.1.to_string())
        }),
        output: serde_json::json!({
            "lateness_minutes": as_json(deviations.lateness_minutes),
            "early_arrival_minutes": as_json(deviations.early_arrival_minutes),
            "early_departure_minutes": as_json(deviations.early_departure_minutes)
        }),
        reasoning,
    };

    DeviationResult {
        deviations,
        unparseable,
        audit_step,
    }
}
