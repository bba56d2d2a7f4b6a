//! Day summary model: one employee's attendance facts for one calendar day.
//!
//! The field names follow the attendance feed (camelCase JSON). Every
//! collection tolerates `null` and every scalar is optional, because the feed
//! omits whatever a day does not have.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Incidence code marking an unjustified absence.
pub const ABSENCE_INCIDENCE: &str = "ABSENT";

/// Kind of punch recorded by the clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    /// Clock-in.
    Start,
    /// Clock-out.
    End,
    /// Any other punch kind (breaks, corrections); ignored by the engine.
    #[default]
    #[serde(other)]
    Other,
}

/// A single punch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The punch kind; missing or `null` reads as [`EntryType::Other`].
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub entry_type: EntryType,
    /// Moment-in-time string, usually RFC 3339 with a UTC designator.
    #[serde(default)]
    pub time: Option<String>,
    /// Older feeds carry the instant here instead of `time`.
    #[serde(default)]
    pub date: Option<String>,
}

impl Entry {
    /// Returns the raw instant string, preferring `time` over `date`.
    pub fn instant(&self) -> Option<&str> {
        self.time
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.date.as_deref().filter(|s| !s.is_empty()))
    }
}

/// A scheduled shift window as wall-clock strings (e.g. `"09:00"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Scheduled start.
    #[serde(default)]
    pub start_time: Option<String>,
    /// Scheduled end.
    #[serde(default)]
    pub end_time: Option<String>,
}

/// Category of an upstream hour figure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourCategory {
    /// Category name, `REGULAR` or `EXTRA` (case-insensitive).
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

/// Hours already categorized by the upstream source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizedHours {
    /// The category.
    #[serde(default, deserialize_with = "nullable")]
    pub category: HourCategory,
    /// Hours in the category.
    #[serde(default, deserialize_with = "nullable")]
    pub hours: Decimal,
}

/// A holiday marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    /// Holiday name, when the feed provides one.
    #[serde(default)]
    pub name: Option<String>,
}

/// Worked hours block of the feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkedHours {
    /// Total hours worked on the day.
    #[serde(default)]
    pub worked: Option<Decimal>,
}

/// One employee's attendance facts for one calendar day.
///
/// # Example
///
/// ```
/// use hours_engine::models::DaySummary;
///
/// let json = r#"{
///     "referenceDate": "2026-01-12",
///     "entries": [
///         {"type": "START", "time": "2026-01-12T11:00:00Z"},
///         {"type": "END", "time": "2026-01-12T21:00:00Z"}
///     ],
///     "timeSlots": [{"startTime": "08:00", "endTime": "16:00"}],
///     "categorizedHours": [
///         {"category": {"name": "REGULAR"}, "hours": 8},
///         {"category": {"name": "EXTRA"}, "hours": 2}
///     ],
///     "isWorkday": true,
///     "hours": {"worked": 10}
/// }"#;
///
/// let summary: DaySummary = serde_json::from_str(json).unwrap();
/// assert_eq!(summary.entries.len(), 2);
/// assert_eq!(summary.extra_hours(), rust_decimal::Decimal::from(2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    /// Reference date (`YYYY-MM-DD`, possibly with a time suffix).
    #[serde(default)]
    pub reference_date: Option<String>,
    /// Fallback for `reference_date`.
    #[serde(default)]
    pub date: Option<String>,
    /// Punches in feed order.
    #[serde(default, deserialize_with = "nullable")]
    pub entries: Vec<Entry>,
    /// Scheduled shift windows.
    #[serde(default, deserialize_with = "nullable")]
    pub time_slots: Vec<TimeSlot>,
    /// Upstream regular/extra split.
    #[serde(default, deserialize_with = "nullable")]
    pub categorized_hours: Vec<CategorizedHours>,
    /// Holiday markers; non-empty means the day is a holiday.
    #[serde(default, deserialize_with = "nullable")]
    pub holidays: Vec<Holiday>,
    /// Leave requests covering the day (opaque to the engine).
    #[serde(default, deserialize_with = "nullable")]
    pub time_off_requests: Vec<serde_json::Value>,
    /// Incidence codes such as `ABSENT`.
    #[serde(default, deserialize_with = "nullable")]
    pub incidences: Vec<serde_json::Value>,
    /// Whether the day is a scheduled workday. Absent means true, `null` means false.
    #[serde(default = "default_workday", deserialize_with = "nullable")]
    pub is_workday: bool,
    /// Worked hours block.
    #[serde(default)]
    pub hours: Option<WorkedHours>,
    /// Fallback total worked hours.
    #[serde(default)]
    pub total_hours: Option<Decimal>,
}

fn default_workday() -> bool {
    true
}

/// Reads `null` as the type's default.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for DaySummary {
    fn default() -> Self {
        Self {
            reference_date: None,
            date: None,
            entries: vec![],
            time_slots: vec![],
            categorized_hours: vec![],
            holidays: vec![],
            time_off_requests: vec![],
            incidences: vec![],
            is_workday: true,
            hours: None,
            total_hours: None,
        }
    }
}

impl DaySummary {
    /// Parses the reference date, falling back to `date`.
    ///
    /// Only the first ten characters are read, so `2026-01-12T00:00:00` works.
    pub fn reference_date(&self) -> Option<NaiveDate> {
        let raw = self
            .reference_date
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.date.as_deref())?;
        let day = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }

    /// Returns the reported worked hours: `hours.worked`, else `totalHours`, else zero.
    pub fn worked_hours(&self) -> Decimal {
        self.hours
            .as_ref()
            .and_then(|h| h.worked)
            .filter(|h| !h.is_zero())
            .or(self.total_hours)
            .unwrap_or(Decimal::ZERO)
    }

    /// Sum of upstream hours in the `REGULAR` category.
    pub fn regular_hours(&self) -> Decimal {
        self.category_total("REGULAR")
    }

    /// Sum of upstream hours in the `EXTRA` category.
    pub fn extra_hours(&self) -> Decimal {
        self.category_total("EXTRA")
    }

    fn category_total(&self, name: &str) -> Decimal {
        self.categorized_hours
            .iter()
            .filter(|c| c.category.name.eq_ignore_ascii_case(name))
            .map(|c| c.hours)
            .sum()
    }

    /// Returns true if the day carries any holiday marker.
    pub fn is_holiday(&self) -> bool {
        !self.holidays.is_empty()
    }

    /// Name of the first holiday marker, if it has one.
    pub fn holiday_name(&self) -> Option<&str> {
        self.holidays
            .first()
            .and_then(|h| h.name.as_deref())
            .filter(|n| !n.is_empty())
    }

    /// Returns true if any leave request covers the day.
    pub fn has_time_off(&self) -> bool {
        !self.time_off_requests.is_empty()
    }

    /// Returns true if the day carries an absence incidence.
    pub fn has_absence(&self) -> bool {
        self.incidences
            .iter()
            .any(|i| i.as_str() == Some(ABSENCE_INCIDENCE))
    }

    /// First time slot with both bounds present.
    pub fn schedule(&self) -> Option<(&str, &str)> {
        let slot = self.time_slots.first()?;
        let start = slot.start_time.as_deref().filter(|s| !s.is_empty())?;
        let end = slot.end_time.as_deref().filter(|s| !s.is_empty())?;
        Some((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_full_summary() {
        let json = r#"{
            "referenceDate": "2026-01-17",
            "entries": [
                {"type": "START", "time": "2026-01-17T09:00:00-03:00"},
                {"type": "BREAK_START", "time": "2026-01-17T12:00:00-03:00"},
                {"type": "END", "time": "2026-01-17T14:00:00-03:00"}
            ],
            "timeSlots": [{"startTime": "06:00", "endTime": "11:00"}],
            "categorizedHours": [
                {"category": {"name": "REGULAR"}, "hours": 5},
                {"category": {"name": "extra"}, "hours": 3}
            ],
            "holidays": [],
            "timeOffRequests": [],
            "incidences": [],
            "isWorkday": true,
            "hours": {"worked": 8}
        }"#;

        let summary: DaySummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.entries[1].entry_type, EntryType::Other);
        assert_eq!(summary.regular_hours(), dec("5"));
        assert_eq!(summary.extra_hours(), dec("3"));
        assert_eq!(summary.worked_hours(), dec("8"));
        assert_eq!(summary.schedule(), Some(("06:00", "11:00")));
        assert_eq!(
            summary.reference_date(),
            NaiveDate::from_ymd_opt(2026, 1, 17)
        );
    }

    #[test]
    fn test_null_collections_become_empty() {
        let json = r#"{
            "date": "2026-01-18T00:00:00",
            "entries": null,
            "timeSlots": null,
            "categorizedHours": null,
            "holidays": null,
            "incidences": null
        }"#;

        let summary: DaySummary = serde_json::from_str(json).unwrap();
        assert!(summary.entries.is_empty());
        assert!(summary.schedule().is_none());
        assert!(summary.is_workday);
        assert_eq!(
            summary.reference_date(),
            NaiveDate::from_ymd_opt(2026, 1, 18)
        );
    }

    #[test]
    fn test_null_scalars_take_lenient_defaults() {
        let json = r#"{
            "referenceDate": "2026-01-12",
            "entries": [
                {"type": null, "time": "2026-01-12T08:00:00-03:00"},
                {"type": "PAUSE", "time": "2026-01-12T12:00:00-03:00"},
                {"time": "2026-01-12T13:00:00-03:00"}
            ],
            "categorizedHours": [
                {"category": null, "hours": 4},
                {"category": {"name": null}, "hours": 1},
                {"category": {"name": "EXTRA"}, "hours": null},
                {"category": {"name": "REGULAR"}}
            ],
            "isWorkday": null,
            "hours": null,
            "totalHours": null
        }"#;

        let summary: DaySummary = serde_json::from_str(json).unwrap();
        assert!(
            summary
                .entries
                .iter()
                .all(|e| e.entry_type == EntryType::Other)
        );
        assert_eq!(summary.categorized_hours[0].category.name, "");
        assert_eq!(summary.regular_hours(), Decimal::ZERO);
        assert_eq!(summary.extra_hours(), Decimal::ZERO);
        assert_eq!(summary.worked_hours(), Decimal::ZERO);
        assert!(!summary.is_workday);
    }

    #[test]
    fn test_missing_workday_flag_defaults_to_true() {
        let summary: DaySummary =
            serde_json::from_str(r#"{"referenceDate": "2026-01-12"}"#).unwrap();
        assert!(summary.is_workday);

        let summary: DaySummary =
            serde_json::from_str(r#"{"referenceDate": "2026-01-12", "isWorkday": false}"#)
                .unwrap();
        assert!(!summary.is_workday);
    }

    #[test]
    fn test_worked_hours_falls_back_to_total_hours() {
        let summary = DaySummary {
            hours: Some(WorkedHours {
                worked: Some(Decimal::ZERO),
            }),
            total_hours: Some(dec("7.5")),
            ..DaySummary::default()
        };
        assert_eq!(summary.worked_hours(), dec("7.5"));

        assert_eq!(DaySummary::default().worked_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_absence_and_time_off_flags() {
        let summary = DaySummary {
            incidences: vec![serde_json::json!("ABSENT")],
            time_off_requests: vec![serde_json::json!({"id": 1})],
            ..DaySummary::default()
        };
        assert!(summary.has_absence());
        assert!(summary.has_time_off());

        let summary = DaySummary {
            incidences: vec![serde_json::json!("LATE")],
            ..DaySummary::default()
        };
        assert!(!summary.has_absence());
    }

    #[test]
    fn test_holiday_name_from_first_marker() {
        let summary = DaySummary {
            holidays: vec![Holiday {
                name: Some("Día de la Independencia".to_string()),
            }],
            ..DaySummary::default()
        };
        assert!(summary.is_holiday());
        assert_eq!(summary.holiday_name(), Some("Día de la Independencia"));

        let unnamed = DaySummary {
            holidays: vec![Holiday { name: None }],
            ..DaySummary::default()
        };
        assert!(unnamed.is_holiday());
        assert_eq!(unnamed.holiday_name(), None);
    }

    #[test]
    fn test_unparseable_reference_date() {
        let summary = DaySummary {
            reference_date: Some("12/01/2026".to_string()),
            ..DaySummary::default()
        };
        assert_eq!(summary.reference_date(), None);
    }

    #[test]
    fn test_entry_instant_prefers_time() {
        let entry = Entry {
            entry_type: EntryType::Start,
            time: Some("2026-01-12T08:00:00Z".to_string()),
            date: Some("2026-01-12T07:00:00Z".to_string()),
        };
        assert_eq!(entry.instant(), Some("2026-01-12T08:00:00Z"));

        let entry = Entry {
            entry_type: EntryType::End,
            time: None,
            date: Some("2026-01-12T17:00:00Z".to_string()),
        };
        assert_eq!(entry.instant(), Some("2026-01-12T17:00:00Z"));
    }
}
