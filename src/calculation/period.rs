//! Employee period processing.
//!
//! Entry point of the engine: filters a period's day summaries, categorizes
//! every accepted day and aggregates the totals into an [`EmployeeReport`].

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::models::{AuditTrace, DaySummary, EmployeeInfo, EmployeeReport};

use super::aggregation::aggregate_totals;
use super::day_filter::filter_day_summaries;
use super::day_processor::process_day;
use super::rounding::format_hours_hhmm;

/// Version stamped on every report.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Categorizes one employee's period.
///
/// Days are processed in input order. `daily` holds two-decimal copies of the
/// day records while `totals` is aggregated from the full-precision records
/// and rounded once.
///
/// # Arguments
///
/// * `employee` - The employee the summaries belong to
/// * `summaries` - The period's day summaries
/// * `previous_pending_hours` - Pending hours carried from the previous period
/// * `config` - The engine configuration
/// * `today` - The current local date, used by test mode only
///
/// # Examples
///
/// ```
/// use hours_engine::calculation::process_employee_period;
/// use hours_engine::config::EngineConfig;
/// use hours_engine::models::{DaySummary, EmployeeInfo};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let summaries: Vec<DaySummary> = serde_json::from_str(r#"[
///     {
///         "referenceDate": "2026-01-12",
///         "entries": [
///             {"type": "START", "time": "2026-01-12T11:00:00Z"},
///             {"type": "END", "time": "2026-01-12T21:00:00Z"}
///         ],
///         "timeSlots": [{"startTime": "08:00", "endTime": "16:00"}],
///         "categorizedHours": [
///             {"category": {"name": "REGULAR"}, "hours": 8},
///             {"category": {"name": "EXTRA"}, "hours": 2}
///         ],
///         "hours": {"worked": 10}
///     },
///     {"referenceDate": "2026-01-18", "isWorkday": false}
/// ]"#).unwrap();
///
/// let employee = EmployeeInfo {
///     id: "emp_001".to_string(),
///     first_name: None,
///     last_name: None,
///     department: None,
/// };
/// let today = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
///
/// let report = process_employee_period(
///     employee,
///     &summaries,
///     Decimal::ZERO,
///     &EngineConfig::default(),
///     today,
/// );
/// assert_eq!(report.daily.len(), 1);
/// assert_eq!(report.totals.extra_hours_50, Decimal::from(2));
/// assert_eq!(report.totals.days_worked, 1);
/// ```
pub fn process_employee_period(
    employee: EmployeeInfo,
    summaries: &[DaySummary],
    previous_pending_hours: Decimal,
    config: &EngineConfig,
    today: NaiveDate,
) -> EmployeeReport {
    let start = Instant::now();
    let calculation_id = Uuid::new_v4();

    tracing::info!(
        %calculation_id,
        employee_id = %employee.id,
        employee = %employee.display_name(),
        days = summaries.len(),
        "Processing employee period"
    );

    let accepted = filter_day_summaries(summaries, config, today);

    let mut trace = AuditTrace::default();
    let mut records = Vec::with_capacity(accepted.len());
    let mut step_number = 1;

    for day in &accepted {
        let processed = process_day(day, config, step_number);
        step_number += processed.audit_steps.len() as u32;

        for warning in &processed.warnings {
            tracing::warn!(
                %calculation_id,
                date = %warning.date,
                code = %warning.code,
                "{}",
                warning.message
            );
        }

        trace.steps.extend(processed.audit_steps);
        trace.warnings.extend(processed.warnings);
        records.push(processed.record);
    }

    let totals = aggregate_totals(&records, previous_pending_hours);
    trace.duration_us = start.elapsed().as_micros() as u64;

    tracing::info!(
        %calculation_id,
        employee_id = %employee.id,
        days_processed = records.len(),
        days_skipped = summaries.len() - records.len(),
        hours_worked = %format_hours_hhmm(totals.hours_worked),
        extra_50 = %format_hours_hhmm(totals.extra_hours_50 + totals.extra_night_hours_50),
        extra_100 = %format_hours_hhmm(totals.extra_hours_100 + totals.extra_night_hours_100),
        night = %format_hours_hhmm(totals.night_hours),
        duration_us = trace.duration_us,
        "Employee period processed"
    );

    EmployeeReport {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        employee,
        daily: records.iter().map(|r| r.rounded()).collect(),
        totals,
        audit_trace: trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HolidaysConfig, RulesConfig};
    use crate::models::{CategorizedHours, Entry, EntryType, HourCategory, TimeSlot, WorkedHours};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn employee() -> EmployeeInfo {
        EmployeeInfo {
            id: "emp_001".to_string(),
            first_name: Some("Ana".to_string()),
            last_name: Some("Pérez".to_string()),
            department: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 20).unwrap()
    }

    fn day(date: &str, start: &str, end: &str, regular: &str, extra: &str) -> DaySummary {
        let category = |name: &str, hours: &str| CategorizedHours {
            category: HourCategory {
                name: name.to_string(),
            },
            hours: dec(hours),
        };
        DaySummary {
            reference_date: Some(date.to_string()),
            entries: vec![
                Entry {
                    entry_type: EntryType::Start,
                    time: Some(format!("{}T{}:00", date, start)),
                    date: None,
                },
                Entry {
                    entry_type: EntryType::End,
                    time: Some(format!("{}T{}:00", date, end)),
                    date: None,
                },
            ],
            time_slots: vec![TimeSlot {
                start_time: Some("08:00".to_string()),
                end_time: Some("16:00".to_string()),
            }],
            categorized_hours: vec![category("REGULAR", regular), category("EXTRA", extra)],
            hours: Some(WorkedHours {
                worked: Some(dec(regular) + dec(extra)),
            }),
            ..DaySummary::default()
        }
    }

    #[test]
    fn test_week_totals() {
        let summaries = vec![
            day("2026-01-12", "08:00", "18:00", "8", "2"),
            day("2026-01-13", "08:00", "16:00", "8", "0"),
            day("2026-01-14", "08:00", "14:00", "6", "0"),
            DaySummary {
                reference_date: Some("2026-01-18".to_string()),
                is_workday: false,
                ..DaySummary::default()
            },
        ];

        let report = process_employee_period(
            employee(),
            &summaries,
            dec("1"),
            &EngineConfig::default(),
            today(),
        );

        assert_eq!(report.daily.len(), 3);
        assert_eq!(report.totals.days_worked, 3);
        assert_eq!(report.totals.hours_worked, dec("24"));
        assert_eq!(report.totals.extra_hours_50, dec("2"));
        assert_eq!(report.totals.pending_hours, dec("3"));
        assert_eq!(report.totals.carried_pending_hours, dec("1"));
        assert_eq!(report.engine_version, ENGINE_VERSION);
        assert_eq!(report.employee.id, "emp_001");
    }

    #[test]
    fn test_audit_steps_numbered_across_days() {
        let summaries = vec![
            day("2026-01-12", "08:00", "18:00", "8", "2"),
            day("2026-01-13", "08:00", "16:00", "8", "0"),
        ];

        let report = process_employee_period(
            employee(),
            &summaries,
            Decimal::ZERO,
            &EngineConfig::default(),
            today(),
        );

        let numbers: Vec<u32> = report
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        let expected: Vec<u32> = (1..=numbers.len() as u32).collect();
        assert_eq!(numbers, expected);
        let tuesday = NaiveDate::from_ymd_opt(2026, 1, 13).unwrap();
        assert!(report.audit_trace.steps.iter().any(|s| s.date == tuesday));
    }

    #[test]
    fn test_daily_records_are_rounded_for_presentation() {
        let summaries = vec![day("2026-01-12", "08:20", "16:00", "7.6667", "0")];

        let report = process_employee_period(
            employee(),
            &summaries,
            Decimal::ZERO,
            &EngineConfig::default(),
            today(),
        );

        assert_eq!(report.daily[0].lateness_hours, dec("0.33"));
        assert_eq!(report.daily[0].pending_hours, dec("0.33"));
    }

    #[test]
    fn test_test_mode_skips_today() {
        let config = EngineConfig::new(
            RulesConfig {
                test: true,
                ..RulesConfig::default()
            },
            HolidaysConfig::default(),
        )
        .unwrap();
        let summaries = vec![
            day("2026-01-19", "08:00", "16:00", "8", "0"),
            day("2026-01-20", "08:00", "12:00", "4", "0"),
        ];

        let report =
            process_employee_period(employee(), &summaries, Decimal::ZERO, &config, today());
        assert_eq!(report.daily.len(), 1);
        assert_eq!(report.totals.pending_hours, Decimal::ZERO);
    }

    #[test]
    fn test_empty_period() {
        let report = process_employee_period(
            employee(),
            &[],
            dec("2"),
            &EngineConfig::default(),
            today(),
        );
        assert!(report.daily.is_empty());
        assert_eq!(report.totals.pending_hours, dec("2"));
        assert!(report.audit_trace.steps.is_empty());
    }
}
