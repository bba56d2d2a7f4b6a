//! Day record model: the categorized hours of one processed day.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The categorized hours of one processed day.
///
/// Produced exactly once per accepted [`DaySummary`](super::DaySummary) and
/// never mutated afterwards. Hour values keep full precision; use
/// [`DayRecord::rounded`] for a two-decimal presentation copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The reference date.
    pub date: NaiveDate,
    /// Weekday index, 0 = Monday … 6 = Sunday.
    pub weekday: u32,
    /// Localized weekday name (`Lunes` … `Domingo`).
    pub weekday_name: String,
    /// Whether the day is a holiday.
    pub is_holiday: bool,
    /// Holiday name, from the feed or the configured calendar.
    pub holiday_name: Option<String>,
    /// Whether the day is a scheduled workday.
    pub is_workday: bool,
    /// Whether the day is a scheduled rest day.
    pub is_rest_day: bool,
    /// Whether leave covers the day.
    pub has_time_off: bool,
    /// Whether the day carries an absence incidence.
    pub has_absence: bool,
    /// Scheduled window as `"HH:MM - HH:MM"`, empty when unscheduled.
    pub time_range: String,
    /// Actual start as `"YYYY-MM-DD HH:MM"`, or just the date when unknown.
    pub shift_start: String,
    /// Actual end as `"YYYY-MM-DD HH:MM"`, or just the date when unknown.
    pub shift_end: String,

    /// Total hours worked as reported by the feed.
    pub hours_worked: Decimal,
    /// Regular hours as reported by the feed.
    pub regular_hours: Decimal,
    /// Extra hours after the early-arrival offset.
    pub extra_hours: Decimal,
    /// Extra hours at the 50% premium.
    pub extra_hours_50: Decimal,
    /// Extra hours at the 100% premium.
    pub extra_hours_100: Decimal,
    /// Hours worked inside the night window.
    pub night_hours: Decimal,
    /// Night extra hours at the 50% premium.
    pub extra_night_hours_50: Decimal,
    /// Night extra hours at the 100% premium.
    pub extra_night_hours_100: Decimal,
    /// Holiday hours outside the night window.
    pub holiday_hours: Decimal,
    /// Holiday hours inside the night window.
    pub holiday_night_hours: Decimal,
    /// Shortfall of regular hours against the full workday.
    pub pending_hours: Decimal,
    /// Lateness against the scheduled start.
    pub lateness_hours: Decimal,
    /// Early departure against the scheduled end.
    pub early_departure_hours: Decimal,
    /// Early arrival against the scheduled start.
    pub early_arrival_hours: Decimal,

    /// Day extra hours before the Saturday cutoff (all day extra on other days).
    pub extra_day_hours: Decimal,
    /// Saturday day extra hours after the cutoff.
    pub extra_after_cutoff_hours: Decimal,
    /// Extra hours inside the night window.
    pub extra_night_hours: Decimal,
    /// Holiday hours (day + night) on a holiday.
    pub extra_holiday_hours: Decimal,
}

impl DayRecord {
    /// Returns a copy with every hour value rounded to two decimals.
    pub fn rounded(&self) -> Self {
        let r = |d: Decimal| d.round_dp(2);
        Self {
            hours_worked: r(self.hours_worked),
            regular_hours: r(self.regular_hours),
            extra_hours: r(self.extra_hours),
            extra_hours_50: r(self.extra_hours_50),
            extra_hours_100: r(self.extra_hours_100),
            night_hours: r(self.night_hours),
            extra_night_hours_50: r(self.extra_night_hours_50),
            extra_night_hours_100: r(self.extra_night_hours_100),
            holiday_hours: r(self.holiday_hours),
            holiday_night_hours: r(self.holiday_night_hours),
            pending_hours: r(self.pending_hours),
            lateness_hours: r(self.lateness_hours),
            early_departure_hours: r(self.early_departure_hours),
            early_arrival_hours: r(self.early_arrival_hours),
            extra_day_hours: r(self.extra_day_hours),
            extra_after_cutoff_hours: r(self.extra_after_cutoff_hours),
            extra_night_hours: r(self.extra_night_hours),
            extra_holiday_hours: r(self.extra_holiday_hours),
            ..self.clone()
        }
    }
}

/// Spanish weekday name for a 0-based (Monday first) weekday index.
///
/// ```
/// use hours_engine::models::weekday_name_es;
///
/// assert_eq!(weekday_name_es(0), "Lunes");
/// assert_eq!(weekday_name_es(5), "Sábado");
/// ```
pub fn weekday_name_es(weekday: u32) -> &'static str {
    const NAMES: [&str; 7] = [
        "Lunes",
        "Martes",
        "Miércoles",
        "Jueves",
        "Viernes",
        "Sábado",
        "Domingo",
    ];
    NAMES[(weekday % 7) as usize]
}
