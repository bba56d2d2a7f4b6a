//! Punch timestamp normalization.
//!
//! This module converts the feed's moment-in-time strings into naive local
//! instants in the configured time zone, resolves the day's clock-in/clock-out
//! pair and produces the display strings used by the day record.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

use crate::models::{AuditStep, Entry, EntryType};

/// Offset-bearing formats accepted besides RFC 3339.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

/// Formats for strings without a zone designator, read as local time.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a timestamp into a naive local instant.
///
/// Strings with a `Z` designator or an explicit offset are converted to `tz`;
/// strings without one are assumed to already be local. Returns `None` when
/// the string cannot be parsed.
///
/// # Examples
///
/// ```
/// use hours_engine::calculation::parse_local_instant;
/// use chrono::NaiveDateTime;
/// use chrono_tz::America::Argentina::Buenos_Aires;
///
/// let local = parse_local_instant("2026-01-12T11:00:00Z", Buenos_Aires).unwrap();
/// assert_eq!(local.to_string(), "2026-01-12 08:00:00");
///
/// let naive = parse_local_instant("2026-01-12T08:00:00", Buenos_Aires).unwrap();
/// assert_eq!(naive.to_string(), "2026-01-12 08:00:00");
///
/// assert!(parse_local_instant("not a date", Buenos_Aires).is_none());
/// ```
pub fn parse_local_instant(raw: &str, tz: Tz) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&tz).naive_local());
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.with_timezone(&tz).naive_local());
        }
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// The day's resolved clock-in/clock-out pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunchPair {
    /// Local clock-in instant.
    pub start: Option<NaiveDateTime>,
    /// Local clock-out instant, moved to the next day when the shift crosses midnight.
    pub end: Option<NaiveDateTime>,
    /// Whether a day was added to the clock-out.
    pub crossed_midnight: bool,
}

impl PunchPair {
    /// Returns the worked interval when both punches resolved.
    pub fn interval(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((self.start?, self.end?))
    }
}

/// The result of punch normalization, including the audit step.
#[derive(Debug, Clone)]
pub struct PunchResolution {
    /// The resolved pair.
    pub pair: PunchPair,
    /// Raw punch strings that were present but could not be parsed.
    pub unparseable: Vec<String>,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves the first START and first END punch of a day into local instants.
///
/// Later punches of the same kind are ignored. When the resolved END is not
/// after the START, one day is added to END (overnight shift).
///
/// # Examples
///
/// ```
/// use hours_engine::calculation::resolve_punches;
/// use hours_engine::models::{Entry, EntryType};
/// use chrono::NaiveDate;
/// use chrono_tz::America::Argentina::Buenos_Aires;
///
/// let entries = vec![
///     Entry { entry_type: EntryType::Start, time: Some("2026-01-12T22:00:00".into()), date: None },
///     Entry { entry_type: EntryType::End, time: Some("2026-01-12T06:00:00".into()), date: None },
/// ];
/// let date = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
///
/// let resolution = resolve_punches(&entries, date, Buenos_Aires, 1);
/// assert!(resolution.pair.crossed_midnight);
/// assert_eq!(resolution.pair.end.unwrap().to_string(), "2026-01-13 06:00:00");
/// ```
pub fn resolve_punches(
    entries: &[Entry],
    reference_date: NaiveDate,
    tz: Tz,
    step_number: u32,
) -> PunchResolution {
    let start_raw = first_instant(entries, EntryType::Start);
    let end_raw = first_instant(entries, EntryType::End);

    let mut unparseable = Vec::new();
    let mut parse = |raw: Option<&str>| {
        let raw = raw?;
        let parsed = parse_local_instant(raw, tz);
        if parsed.is_none() {
            unparseable.push(raw.to_string());
        }
        parsed
    };

    let start = parse(start_raw);
    let mut end = parse(end_raw);

    let crossed_midnight = match (start, end) {
        (Some(s), Some(e)) if e <= s => {
            end = Some(e + Duration::days(1));
            true
        }
        _ => false,
    };

    let pair = PunchPair {
        start,
        end,
        crossed_midnight,
    };

    let reasoning = match pair.interval() {
        Some((s, e)) if crossed_midnight => format!(
            "Clock-out not after clock-in: shift assumed to cross midnight, {} to {}",
            s, e
        ),
        Some((s, e)) => format!("Worked interval {} to {}", s, e),
        None => "No complete START/END pair: worked interval treated as empty".to_string(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "punch_normalization".to_string(),
        rule_name: "Punch Normalization".to_string(),
        legal_ref: "LCT art. 197".to_string(),
        date: reference_date,
        input: serde_json::json!({
            "start": start_raw,
            "end": end_raw,
            "timezone": tz.name(),
        }),
        output: serde_json::json!({
            "start": pair.start.map(|d| d.to_string()),
            "end": pair.end.map(|d| d.to_string()),
            "crossed_midnight": crossed_midnight,
        }),
        reasoning,
    };

    PunchResolution {
        pair,
        unparseable,
        audit_step,
    }
}

fn first_instant(entries: &[Entry], entry_type: EntryType) -> Option<&str> {
    entries
        .iter()
        .filter(|e| e.entry_type == entry_type)
        .find_map(Entry::instant)
}

/// Display strings for the actual shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftDisplay {
    /// Start date, `YYYY-MM-DD`.
    pub start_date: String,
    /// Start time, `HH:MM`, empty when unknown.
    pub start_time: String,
    /// End date, `YYYY-MM-DD`.
    pub end_date: String,
    /// End time, `HH:MM`, empty when unknown.
    pub end_time: String,
}

impl ShiftDisplay {
    /// Builds the display strings for a punch pair.
    ///
    /// Without a complete pair both sides show only the reference date.
    pub fn new(pair: &PunchPair, reference_date: NaiveDate) -> Self {
        match pair.interval() {
            Some((s, e)) => Self {
                start_date: s.format("%Y-%m-%d").to_string(),
                start_time: s.format("%H:%M").to_string(),
                end_date: e.format("%Y-%m-%d").to_string(),
                end_time: e.format("%H:%M").to_string(),
            },
            None => {
                let day = reference_date.format("%Y-%m-%d").to_string();
                Self {
                    start_date: day.clone(),
                    start_time: String::new(),
                    end_date: day,
                    end_time: String::new(),
                }
            }
        }
    }

    /// `"YYYY-MM-DD HH:MM"`, or only the date when the time is unknown.
    pub fn start_label(&self) -> String {
        join_label(&self.start_date, &self.start_time)
    }

    /// `"YYYY-MM-DD HH:MM"`, or only the date when the time is unknown.
    pub fn end_label(&self) -> String {
        join_label(&self.end_date, &self.end_time)
    }
}

fn join_label(date: &str, time: &str) -> String {
    if time.is_empty() {
        date.to_string()
    } else {
        format!("{} {}", date, time)
    }
}
