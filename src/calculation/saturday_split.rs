//! Saturday cutoff split.
//!
//! On Saturday, day extra hours worked before the cutoff hour (13:00 by
//! default) earn the 50% premium and those worked after it earn 100%. The
//! extra hours are assumed to be the last hours of the shift.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::AuditStep;

use super::deviations::minutes_of_day;
use super::rounding::{hours_to_minutes, minutes_to_hours};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Day extra hours on either side of the Saturday cutoff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaturdaySplit {
    /// Hours before the cutoff.
    pub before_cutoff: Decimal,
    /// Hours after the cutoff.
    pub after_cutoff: Decimal,
}

/// The result of a Saturday split, including the audit step.
#[derive(Debug, Clone)]
pub struct SaturdaySplitResult {
    /// The split.
    pub split: SaturdaySplit,
    /// The audit step recording this split.
    pub audit_step: AuditStep,
}

/// Splits day extra hours around the cutoff hour.
///
/// Works in minutes of the shift's start day: the extra window is the last
/// `extra_day_hours` of the shift, never starting before the shift does. An
/// end at or before the start is read as the next day. Extra hours that do
/// not fit inside the shift are not assigned to either side.
///
/// # Examples
///
/// ```
/// use hours_engine::calculation::split_at_cutoff;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDateTime::parse_from_str("2026-01-17 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-17 14:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// // Extra window 11:00-14:00: two hours before 13:00, one after
/// let split = split_at_cutoff(start, end, Decimal::from(3), 13);
/// assert_eq!(split.before_cutoff, Decimal::from(2));
/// assert_eq!(split.after_cutoff, Decimal::from(1));
/// ```
pub fn split_at_cutoff(
    shift_start: NaiveDateTime,
    shift_end: NaiveDateTime,
    extra_day_hours: Decimal,
    cutoff_hour: u32,
) -> SaturdaySplit {
    let start = minutes_of_day(shift_start.time());
    let mut end = minutes_of_day(shift_end.time());
    if end <= start {
        end += MINUTES_PER_DAY;
    }

    let cutoff = i64::from(cutoff_hour) * 60;
    let extra_start = (end - hours_to_minutes(extra_day_hours)).max(start);

    let before = if extra_start < cutoff {
        (end.min(cutoff) - extra_start).max(0)
    } else {
        0
    };
    let after = if end > cutoff {
        (end - extra_start.max(cutoff)).max(0)
    } else {
        0
    };

    SaturdaySplit {
        before_cutoff: minutes_to_hours(before),
        after_cutoff: minutes_to_hours(after),
    }
}

/// Splits Saturday day extra hours and records the audit step.
///
/// # Legal Reference
///
/// LCT art. 204: the weekly rest starts on Saturday at 13:00; work after
/// that hour is paid at 100%.
pub fn calculate_saturday_split(
    shift: (NaiveDateTime, NaiveDateTime),
    extra_day_hours: Decimal,
    cutoff_hour: u32,
    reference_date: NaiveDate,
    step_number: u32,
) -> SaturdaySplitResult {
    let split = split_at_cutoff(shift.0, shift.1, extra_day_hours, cutoff_hour);

    let audit_step = AuditStep {
        step_number,
        rule_id: "saturday_cutoff_split".to_string(),
        rule_name: "Saturday Cutoff Split".to_string(),
        legal_ref: "LCT art. 204".to_string(),
        date: reference_date,
        input: serde_json::json!({
            "shift_start": shift.0.to_string(),
            "shift_end": shift.1.to_string(),
            "extra_day_hours": extra_day_hours.normalize().to_string(),
            "cutoff_hour": cutoff_hour
        }),
        output: serde_json::json!({
            "before_cutoff": split.before_cutoff.normalize().to_string(),
            "after_cutoff": split.after_cutoff.normalize().to_string()
        }),
        reasoning: format!(
            "Last {}h of the shift split at {:02}:00: {}h before at 50%, {}h after at 100%",
            extra_day_hours.normalize(),
            cutoff_hour,
            split.before_cutoff.normalize(),
            split.after_cutoff.normalize()
        ),
    };

    SaturdaySplitResult { split, audit_step }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn split(start: &str, end: &str, extra: &str) -> SaturdaySplit {
        split_at_cutoff(
            make_datetime("2026-01-17", start),
            make_datetime("2026-01-17", end),
            dec(extra),
            13,
        )
    }

    #[test]
    fn test_extra_entirely_before_cutoff() {
        let result = split("04:00:00", "12:00:00", "2");
        assert_eq!(result.before_cutoff, dec("2"));
        assert_eq!(result.after_cutoff, Decimal::ZERO);
    }

    #[test]
    fn test_extra_entirely_after_cutoff() {
        let result = split("09:00:00", "17:00:00", "3");
        assert_eq!(result.before_cutoff, Decimal::ZERO);
        assert_eq!(result.after_cutoff, dec("3"));
    }

    #[test]
    fn test_extra_straddles_cutoff() {
        let result = split("06:00:00", "14:30:00", "2.5");
        assert_eq!(result.before_cutoff, dec("1"));
        assert_eq!(result.after_cutoff, dec("1.5"));
    }

    #[test]
    fn test_extra_window_clamped_to_shift_start() {
        // Only 2h worked but 3h extra reported
        let result = split("12:00:00", "14:00:00", "3");
        assert_eq!(result.before_cutoff, dec("1"));
        assert_eq!(result.after_cutoff, dec("1"));
    }

    #[test]
    fn test_end_at_or_before_start_is_next_day() {
        let result = split_at_cutoff(
            make_datetime("2026-01-17", "22:00:00"),
            make_datetime("2026-01-17", "02:00:00"),
            dec("2"),
            13,
        );
        assert_eq!(result.before_cutoff, Decimal::ZERO);
        assert_eq!(result.after_cutoff, dec("2"));
    }

    #[test]
    fn test_configured_cutoff_hour_is_used() {
        let result = split_at_cutoff(
            make_datetime("2026-01-17", "06:00:00"),
            make_datetime("2026-01-17", "14:00:00"),
            dec("3"),
            12,
        );
        assert_eq!(result.before_cutoff, dec("1"));
        assert_eq!(result.after_cutoff, dec("2"));
    }

    #[test]
    fn test_audit_step() {
        let result = calculate_saturday_split(
            (
                make_datetime("2026-01-17", "06:00:00"),
                make_datetime("2026-01-17", "14:00:00"),
            ),
            dec("3"),
            13,
            NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
            5,
        );
        assert_eq!(result.audit_step.step_number, 5);
        assert_eq!(result.audit_step.legal_ref, "LCT art. 204");
        assert_eq!(result.audit_step.output["before_cutoff"].as_str().unwrap(), "2");
        assert_eq!(result.audit_step.output["after_cutoff"].as_str().unwrap(), "1");
    }
}
