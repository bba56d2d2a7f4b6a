//! Day categorization.
//!
//! Runs every stage for one accepted day summary and assembles the
//! [`DayRecord`]. Stages are pure; the record, its audit steps and any
//! warnings are returned together.

use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::models::{AuditStep, AuditWarning, DayRecord, WarningSeverity, weekday_name_es};

use super::day_filter::AcceptedDay;
use super::day_kind::{get_day_kind, weekday_index};
use super::deviations::detect_deviations;
use super::night_hours::calculate_night_hours;
use super::premium_buckets::{PremiumInput, calculate_premium_buckets};
use super::rounding::minutes_to_hours;
use super::time_normalizer::{ShiftDisplay, resolve_punches};

/// Warning code for a punch timestamp that could not be parsed.
pub const UNPARSEABLE_PUNCH_WARNING: &str = "UNPARSEABLE_PUNCH";
/// Warning code for a schedule string without a recognizable time.
pub const UNPARSEABLE_SCHEDULE_WARNING: &str = "UNPARSEABLE_SCHEDULE";
/// Warning code for night hours above the reported worked hours.
pub const NIGHT_HOURS_CLAMPED_WARNING: &str = "NIGHT_HOURS_CLAMPED";

/// A categorized day with its audit steps and warnings.
#[derive(Debug, Clone)]
pub struct ProcessedDay {
    /// The categorized record, at full precision.
    pub record: DayRecord,
    /// The audit steps, numbered from the start step.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings raised while categorizing.
    pub warnings: Vec<AuditWarning>,
}

/// Hours short of a full workday.
///
/// Only days without leave or absence and with some regular hours can be
/// pending; the result is never negative.
///
/// ```
/// use hours_engine::calculation::pending_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(pending_hours(Decimal::from(6), Decimal::from(8), false, false), Decimal::from(2));
/// assert_eq!(pending_hours(Decimal::from(9), Decimal::from(8), false, false), Decimal::ZERO);
/// assert_eq!(pending_hours(Decimal::ZERO, Decimal::from(8), false, false), Decimal::ZERO);
/// assert_eq!(pending_hours(Decimal::from(4), Decimal::from(8), true, false), Decimal::ZERO);
/// ```
pub fn pending_hours(
    regular_hours: Decimal,
    full_workday_hours: Decimal,
    has_time_off: bool,
    has_absence: bool,
) -> Decimal {
    if has_time_off || has_absence || regular_hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (full_workday_hours - regular_hours).max(Decimal::ZERO)
}

/// Categorizes one accepted day.
///
/// # Arguments
///
/// * `day` - The accepted summary and its reference date
/// * `config` - The engine configuration
/// * `start_step_number` - The starting step number for the audit trail
///
/// # Examples
///
/// ```
/// use hours_engine::calculation::{filter_day_summaries, process_day};
/// use hours_engine::config::EngineConfig;
/// use hours_engine::models::DaySummary;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let summary: DaySummary = serde_json::from_str(r#"{
///     "referenceDate": "2026-01-12",
///     "entries": [
///         {"type": "START", "time": "2026-01-12T08:00:00"},
///         {"type": "END", "time": "2026-01-12T18:00:00"}
///     ],
///     "timeSlots": [{"startTime": "08:00", "endTime": "16:00"}],
///     "categorizedHours": [
///         {"category": {"name": "REGULAR"}, "hours": 8},
///         {"category": {"name": "EXTRA"}, "hours": 2}
///     ],
///     "hours": {"worked": 10}
/// }"#).unwrap();
///
/// let config = EngineConfig::default();
/// let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
/// let summaries = [summary];
/// let accepted = filter_day_summaries(&summaries, &config, today);
///
/// let processed = process_day(&accepted[0], &config, 1);
/// assert_eq!(processed.record.extra_hours_50, Decimal::from(2));
/// assert_eq!(processed.record.shift_start, "2026-01-12 08:00");
/// ```
pub fn process_day(
    day: &AcceptedDay<'_>,
    config: &EngineConfig,
    start_step_number: u32,
) -> ProcessedDay {
    let summary = day.summary;
    let date = day.reference_date;
    let mut audit_steps = Vec::new();
    let mut warnings = Vec::new();
    let mut current_step = start_step_number;

    let warn = |code: &str, message: String, severity: WarningSeverity| AuditWarning {
        code: code.to_string(),
        message,
        severity,
        date,
    };

    // Step 1: Punches
    let punches = resolve_punches(&summary.entries, date, config.timezone(), current_step);
    audit_steps.push(punches.audit_step);
    current_step += 1;
    for raw in &punches.unparseable {
        warnings.push(warn(
            UNPARSEABLE_PUNCH_WARNING,
            format!("Punch timestamp '{}' could not be parsed", raw),
            WarningSeverity::Medium,
        ));
    }
    let interval = punches.pair.interval();
    let display = ShiftDisplay::new(&punches.pair, date);

    // Step 2: Deviations against the schedule
    let schedule = summary.schedule();
    let deviations = detect_deviations(schedule, interval, date, current_step);
    audit_steps.push(deviations.audit_step);
    current_step += 1;
    for raw in &deviations.unparseable {
        warnings.push(warn(
            UNPARSEABLE_SCHEDULE_WARNING,
            format!("Scheduled time '{}' has no HH:MM time", raw),
            WarningSeverity::Medium,
        ));
    }
    let deviations = deviations.deviations;

    // Step 3: Night window
    let intervals: Vec<_> = interval.into_iter().collect();
    let night = calculate_night_hours(&intervals, date, config.night_window(), current_step);
    audit_steps.push(night.audit_step);
    current_step += 1;

    let hours_worked = summary.worked_hours();
    let mut night_hours = night.night_hours;
    // A missing worked figure reads as zero and is not a ceiling.
    if hours_worked > Decimal::ZERO && night_hours > hours_worked {
        warnings.push(warn(
            NIGHT_HOURS_CLAMPED_WARNING,
            format!(
                "Night hours {} exceed reported worked hours {}",
                night_hours.normalize(),
                hours_worked.normalize()
            ),
            WarningSeverity::Low,
        ));
        night_hours = hours_worked;
    }

    // Step 4: Premium buckets
    let is_holiday = summary.is_holiday();
    let day_kind = get_day_kind(date, is_holiday, summary.is_workday);
    let premium = calculate_premium_buckets(
        &PremiumInput {
            date,
            day_kind,
            is_holiday,
            hours_worked,
            extra_hours: summary.extra_hours(),
            night_hours,
            early_arrival_minutes: deviations.early_arrival_minutes.unwrap_or(0),
            shift: interval,
        },
        config,
        current_step,
    );
    audit_steps.extend(premium.audit_steps);
    warnings.extend(premium.warnings);
    let buckets = premium.buckets;

    let has_time_off = summary.has_time_off();
    let has_absence = summary.has_absence();
    let regular_hours = summary.regular_hours();
    let weekday = weekday_index(date);

    let holiday_name = if is_holiday {
        summary
            .holiday_name()
            .or_else(|| config.holiday_name(date))
            .map(str::to_string)
    } else {
        None
    };

    let record = DayRecord {
        date,
        weekday,
        weekday_name: weekday_name_es(weekday).to_string(),
        is_holiday,
        holiday_name,
        is_workday: summary.is_workday,
        is_rest_day: !summary.is_workday,
        has_time_off,
        has_absence,
        time_range: schedule
            .map(|(start, end)| format!("{} - {}", start, end))
            .unwrap_or_default(),
        shift_start: display.start_label(),
        shift_end: display.end_label(),
        hours_worked,
        regular_hours,
        extra_hours: buckets.extra_hours,
        extra_hours_50: buckets.extra_hours_50,
        extra_hours_100: buckets.extra_hours_100,
        night_hours: buckets.night_hours,
        extra_night_hours_50: buckets.extra_night_hours_50,
        extra_night_hours_100: buckets.extra_night_hours_100,
        holiday_hours: buckets.holiday_hours,
        holiday_night_hours: buckets.holiday_night_hours,
        pending_hours: pending_hours(
            regular_hours,
            config.rules().full_workday_hours,
            has_time_off,
            has_absence,
        ),
        lateness_hours: minutes_to_hours(deviations.lateness_minutes.unwrap_or(0)),
        early_departure_hours: minutes_to_hours(deviations.early_departure_minutes.unwrap_or(0)),
        early_arrival_hours: minutes_to_hours(deviations.early_arrival_minutes.unwrap_or(0)),
        extra_day_hours: buckets.extra_day_hours,
        extra_after_cutoff_hours: buckets.extra_after_cutoff_hours,
        extra_night_hours: buckets.extra_night_hours,
        extra_holiday_hours: buckets.extra_holiday_hours,
    };

    tracing::debug!(
        date = %date,
        day_kind = %day_kind,
        hours_worked = %record.hours_worked,
        extra_50 = %record.extra_hours_50,
        extra_100 = %record.extra_hours_100,
        night = %record.night_hours,
        "Categorized day"
    );

    ProcessedDay {
        record,
        audit_steps,
        warnings,
    }
}
