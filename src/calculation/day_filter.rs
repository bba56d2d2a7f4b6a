//! Day pre-filter.
//!
//! Decides which day summaries reach the categorizer. Rest days with nothing
//! on them and summaries without a usable reference date are always dropped;
//! in test mode absences, leave and the current day are dropped as well.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::models::DaySummary;

/// Why a day summary was not categorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The reference date is missing or not `YYYY-MM-DD`.
    MissingReferenceDate,
    /// A non-working, non-holiday day with no punches, slots, leave or incidences.
    EmptyRestDay,
    /// Test mode: the day carries an absence incidence.
    TestModeAbsence,
    /// Test mode: the day is covered by leave.
    TestModeTimeOff,
    /// Test mode: the day is today and may still be incomplete.
    TestModeToday,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::MissingReferenceDate => write!(f, "missing reference date"),
            SkipReason::EmptyRestDay => write!(f, "empty rest day"),
            SkipReason::TestModeAbsence => write!(f, "absence (test mode)"),
            SkipReason::TestModeTimeOff => write!(f, "time off (test mode)"),
            SkipReason::TestModeToday => write!(f, "current day (test mode)"),
        }
    }
}

/// A day summary accepted for categorization, with its parsed reference date.
#[derive(Debug, Clone, Copy)]
pub struct AcceptedDay<'a> {
    /// The parsed reference date.
    pub reference_date: NaiveDate,
    /// The summary.
    pub summary: &'a DaySummary,
}

/// Returns today's date in the configured time zone.
pub fn local_today(config: &EngineConfig) -> NaiveDate {
    Utc::now().with_timezone(&config.timezone()).date_naive()
}

/// Returns why a summary should be skipped, or `None` to categorize it.
///
/// `today` is only consulted in test mode.
///
/// # Examples
///
/// ```
/// use hours_engine::calculation::{SkipReason, skip_reason};
/// use hours_engine::config::EngineConfig;
/// use hours_engine::models::DaySummary;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
/// let rest_day = DaySummary {
///     reference_date: Some("2026-01-18".to_string()),
///     is_workday: false,
///     ..DaySummary::default()
/// };
/// assert_eq!(
///     skip_reason(&rest_day, &EngineConfig::default(), today),
///     Some(SkipReason::EmptyRestDay)
/// );
/// ```
pub fn skip_reason(
    summary: &DaySummary,
    config: &EngineConfig,
    today: NaiveDate,
) -> Option<SkipReason> {
    let reference_date = summary.reference_date();

    if config.test_mode() {
        if summary.has_absence() {
            return Some(SkipReason::TestModeAbsence);
        }
        if summary.has_time_off() {
            return Some(SkipReason::TestModeTimeOff);
        }
        if reference_date == Some(today) {
            return Some(SkipReason::TestModeToday);
        }
    }

    if is_empty_rest_day(summary) {
        return Some(SkipReason::EmptyRestDay);
    }

    if reference_date.is_none() {
        return Some(SkipReason::MissingReferenceDate);
    }

    None
}

fn is_empty_rest_day(summary: &DaySummary) -> bool {
    !summary.is_workday
        && !summary.is_holiday()
        && !summary.has_time_off()
        && !summary.has_absence()
        && summary.time_slots.is_empty()
        && summary.entries.is_empty()
}

/// Filters a period's summaries, keeping input order.
///
/// Skipped days are logged at debug level with their reason.
pub fn filter_day_summaries<'a>(
    summaries: &'a [DaySummary],
    config: &EngineConfig,
    today: NaiveDate,
) -> Vec<AcceptedDay<'a>> {
    summaries
        .iter()
        .filter_map(|summary| match skip_reason(summary, config, today) {
            Some(reason) => {
                tracing::debug!(
                    reference_date = ?summary.reference_date.as_deref().or(summary.date.as_deref()),
                    %reason,
                    "Skipping day summary"
                );
                None
            }
            None => summary.reference_date().map(|reference_date| AcceptedDay {
                reference_date,
                summary,
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HolidaysConfig, RulesConfig};
    use crate::models::{Entry, EntryType, Holiday, TimeSlot};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 20).unwrap()
    }

    fn summary(date: &str) -> DaySummary {
        DaySummary {
            reference_date: Some(date.to_string()),
            ..DaySummary::default()
        }
    }

    fn test_mode_config() -> EngineConfig {
        EngineConfig::new(
            RulesConfig {
                test: true,
                ..RulesConfig::default()
            },
            HolidaysConfig::default(),
        )
        .unwrap()
    }

    // ==========================================================================
    // Always-on filtering
    // ==========================================================================
    #[test]
    fn test_workday_without_data_is_kept() {
        let config = EngineConfig::default();
        assert_eq!(skip_reason(&summary("2026-01-12"), &config, today()), None);
    }

    #[test]
    fn test_empty_rest_day_is_skipped() {
        let day = DaySummary {
            is_workday: false,
            ..summary("2026-01-18")
        };
        assert_eq!(
            skip_reason(&day, &EngineConfig::default(), today()),
            Some(SkipReason::EmptyRestDay)
        );
    }

    #[test]
    fn test_rest_day_with_punches_is_kept() {
        let day = DaySummary {
            is_workday: false,
            entries: vec![Entry {
                entry_type: EntryType::Start,
                time: Some("2026-01-18T09:00:00".to_string()),
                date: None,
            }],
            ..summary("2026-01-18")
        };
        assert_eq!(skip_reason(&day, &EngineConfig::default(), today()), None);
    }

    #[test]
    fn test_rest_day_with_schedule_or_holiday_is_kept() {
        let scheduled = DaySummary {
            is_workday: false,
            time_slots: vec![TimeSlot {
                start_time: Some("09:00".to_string()),
                end_time: Some("13:00".to_string()),
            }],
            ..summary("2026-01-18")
        };
        assert_eq!(skip_reason(&scheduled, &EngineConfig::default(), today()), None);

        let holiday = DaySummary {
            is_workday: false,
            holidays: vec![Holiday { name: None }],
            ..summary("2026-01-18")
        };
        assert_eq!(skip_reason(&holiday, &EngineConfig::default(), today()), None);
    }

    #[test]
    fn test_unparseable_reference_date_is_skipped() {
        let day = summary("not-a-date");
        assert_eq!(
            skip_reason(&day, &EngineConfig::default(), today()),
            Some(SkipReason::MissingReferenceDate)
        );
    }

    #[test]
    fn test_absence_kept_outside_test_mode() {
        let day = DaySummary {
            incidences: vec![serde_json::json!("ABSENT")],
            ..summary("2026-01-13")
        };
        assert_eq!(skip_reason(&day, &EngineConfig::default(), today()), None);

        let current = summary("2026-01-20");
        assert_eq!(skip_reason(&current, &EngineConfig::default(), today()), None);
    }

    // ==========================================================================
    // Test mode
    // ==========================================================================
    #[test]
    fn test_test_mode_skips_absence_time_off_and_today() {
        let config = test_mode_config();

        let absent = DaySummary {
            incidences: vec![serde_json::json!("ABSENT")],
            ..summary("2026-01-13")
        };
        assert_eq!(
            skip_reason(&absent, &config, today()),
            Some(SkipReason::TestModeAbsence)
        );

        let on_leave = DaySummary {
            time_off_requests: vec![serde_json::json!({"type": "VACATION"})],
            ..summary("2026-01-14")
        };
        assert_eq!(
            skip_reason(&on_leave, &config, today()),
            Some(SkipReason::TestModeTimeOff)
        );

        assert_eq!(
            skip_reason(&summary("2026-01-20"), &config, today()),
            Some(SkipReason::TestModeToday)
        );
        assert_eq!(skip_reason(&summary("2026-01-19"), &config, today()), None);
    }

    #[test]
    fn test_filter_keeps_order_and_parses_dates() {
        let summaries = vec![
            summary("2026-01-12"),
            DaySummary {
                is_workday: false,
                ..summary("2026-01-18")
            },
            summary("2026-01-13"),
            summary(""),
        ];

        let accepted = filter_day_summaries(&summaries, &EngineConfig::default(), today());
        let dates: Vec<NaiveDate> = accepted.iter().map(|d| d.reference_date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
                NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
            ]
        );
    }
}
