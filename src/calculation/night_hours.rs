//! Night window classification.
//!
//! Measures how much of the worked time falls inside the night window
//! (21:00 to 06:00 by default), anchored to the reference day.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::config::NightWindow;
use crate::models::AuditStep;

const SECONDS_PER_HOUR: i64 = 3600;

/// The result of night hour classification, including the audit step.
#[derive(Debug, Clone)]
pub struct NightHoursResult {
    /// Hours inside the night window, rounded to two decimals.
    pub night_hours: Decimal,
    /// The audit step recording this classification.
    pub audit_step: AuditStep,
}

/// Returns the night window for a reference day.
///
/// The window opens on `reference_date` at `start_hour` and closes at
/// `end_hour` on the following day. When `end_hour` is after `start_hour`
/// the window closes on the same day.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::night_window_bounds;
/// use hours_engine::config::NightWindow;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let (start, end) = night_window_bounds(day, NightWindow { start_hour: 21, end_hour: 6 });
/// assert_eq!(start.to_string(), "2026-01-12 21:00:00");
/// assert_eq!(end.to_string(), "2026-01-13 06:00:00");
/// ```
pub fn night_window_bounds(
    reference_date: NaiveDate,
    window: NightWindow,
) -> (NaiveDateTime, NaiveDateTime) {
    let at_hour = |day: NaiveDate, hour: u32| {
        day.and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default())
    };

    let start = at_hour(reference_date, window.start_hour);
    let end_day = if window.end_hour <= window.start_hour {
        reference_date + Duration::days(1)
    } else {
        reference_date
    };

    (start, at_hour(end_day, window.end_hour))
}

/// Hours of overlap between two intervals; zero when they do not intersect.
pub fn overlap_hours(
    a: (NaiveDateTime, NaiveDateTime),
    b: (NaiveDateTime, NaiveDateTime),
) -> Decimal {
    let start = a.0.max(b.0);
    let end = a.1.min(b.1);
    if end <= start {
        return Decimal::ZERO;
    }
    Decimal::from((end - start).num_seconds()) / Decimal::from(SECONDS_PER_HOUR)
}

/// Calculates the hours worked inside the night window.
///
/// Each interval contributes its intersection with the window of
/// `reference_date`; contributions are summed and rounded to two decimals.
/// Time before the window opens on the reference day (e.g. 00:00 to 06:00 of
/// the same day) is not night time for that day.
///
/// # Arguments
///
/// * `intervals` - Worked intervals as local naive instants
/// * `reference_date` - The day the window is anchored to
/// * `window` - Night window bounds
/// * `step_number` - The step number for the audit trail
///
/// # Legal Reference
///
/// LCT art. 200: night work runs from 21:00 to 06:00.
///
/// # Examples
///
/// ```
/// use hours_engine::calculation::calculate_night_hours;
/// use hours_engine::config::NightWindow;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let day = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let start = NaiveDateTime::parse_from_str("2026-01-12 20:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-13 02:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let window = NightWindow { start_hour: 21, end_hour: 6 };
/// let result = calculate_night_hours(&[(start, end)], day, window, 1);
/// assert_eq!(result.night_hours, Decimal::from(5));
/// ```
pub fn calculate_night_hours(
    intervals: &[(NaiveDateTime, NaiveDateTime)],
    reference_date: NaiveDate,
    window: NightWindow,
    step_number: u32,
) -> NightHoursResult {
    let bounds = night_window_bounds(reference_date, window);

    let night_hours = intervals
        .iter()
        .map(|interval| overlap_hours(*interval, bounds))
        .sum::<Decimal>()
        .round_dp(2);

    let interval_descriptions: Vec<serde_json::Value> = intervals
        .iter()
        .map(|(start, end)| {
            serde_json::json!({
                "start": start.to_string(),
                "end": end.to_string()
            })
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "night_window_overlap".to_string(),
        rule_name: "Night Window Overlap".to_string(),
        legal_ref: "LCT art. 200".to_string(),
        date: reference_date,
        input: serde_json::json!({
            "intervals": interval_descriptions,
            "window_start": bounds.0.to_string(),
            "window_end": bounds.1.to_string()
        }),
        output: serde_json::json!({
            "night_hours": night_hours.normalize().to_string()
        }),
        reasoning: format!(
            "{}h worked inside the night window {:02}:00-{:02}:00",
            night_hours.normalize(),
            window.start_hour,
            window.end_hour
        ),
    };

    NightHoursResult {
        night_hours,
        audit_step,
    }
}
