//! Day kind detection.
//!
//! Decides which premium routing applies to a day. The calendar weekday is
//! combined with the holiday and workday flags of the feed, in the priority
//! order the premium bucketer expects.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The kind of day for premium routing.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::DayKind;
///
/// let kind = DayKind::Saturday;
/// assert_eq!(kind.to_string(), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday through Friday workday: day extra at 50%, night extra at 50%.
    Weekday,
    /// Saturday, including Saturday holidays: split at the cutoff hour.
    Saturday,
    /// Sunday that is not a holiday: all extra at 100%.
    Sunday,
    /// Holiday on any day but Saturday: tracked in the holiday buckets only.
    Holiday,
    /// Weekday scheduled as a rest day: every worked hour at 100%.
    RestDay,
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Weekday => write!(f, "Weekday"),
            DayKind::Saturday => write!(f, "Saturday"),
            DayKind::Sunday => write!(f, "Sunday"),
            DayKind::Holiday => write!(f, "Holiday"),
            DayKind::RestDay => write!(f, "RestDay"),
        }
    }
}

/// Determines the day kind for a reference date.
///
/// Saturday wins over the holiday flag, and the holiday flag wins over the
/// workday flag.
///
/// # Example
///
/// ```
/// use hours_engine::calculation::{DayKind, get_day_kind};
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(get_day_kind(saturday, true, true), DayKind::Saturday);
///
/// // 2026-01-18 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
/// assert_eq!(get_day_kind(sunday, false, false), DayKind::Sunday);
/// assert_eq!(get_day_kind(sunday, true, false), DayKind::Holiday);
///
/// // 2026-01-12 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// assert_eq!(get_day_kind(monday, false, true), DayKind::Weekday);
/// assert_eq!(get_day_kind(monday, false, false), DayKind::RestDay);
/// ```
pub fn get_day_kind(date: NaiveDate, is_holiday: bool, is_workday: bool) -> DayKind {
    match date.weekday() {
        Weekday::Sat => DayKind::Saturday,
        Weekday::Sun if !is_holiday => DayKind::Sunday,
        _ if is_holiday => DayKind::Holiday,
        _ if !is_workday => DayKind::RestDay,
        _ => DayKind::Weekday,
    }
}

/// Weekday index with Monday as 0 and Sunday as 6.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}
