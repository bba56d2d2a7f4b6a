//! Period aggregation.
//!
//! Folds day records into [`EmployeeTotals`]. Each step returns new totals;
//! nothing is mutated in place, so the fold can be replayed or split freely.

use rust_decimal::Decimal;

use crate::models::{DayRecord, EmployeeTotals};

/// Adds one day record to running totals.
///
/// `days_worked` counts days with worked hours above zero.
pub fn add_day(totals: &EmployeeTotals, record: &DayRecord) -> EmployeeTotals {
    EmployeeTotals {
        days_worked: totals.days_worked + u32::from(record.hours_worked > Decimal::ZERO),
        carried_pending_hours: totals.carried_pending_hours,
        hours_worked: totals.hours_worked + record.hours_worked,
        regular_hours: totals.regular_hours + record.regular_hours,
        extra_hours: totals.extra_hours + record.extra_hours,
        extra_hours_50: totals.extra_hours_50 + record.extra_hours_50,
        extra_hours_100: totals.extra_hours_100 + record.extra_hours_100,
        night_hours: totals.night_hours + record.night_hours,
        extra_night_hours_50: totals.extra_night_hours_50 + record.extra_night_hours_50,
        extra_night_hours_100: totals.extra_night_hours_100 + record.extra_night_hours_100,
        holiday_hours: totals.holiday_hours + record.holiday_hours,
        holiday_night_hours: totals.holiday_night_hours + record.holiday_night_hours,
        pending_hours: totals.pending_hours + record.pending_hours,
        lateness_hours: totals.lateness_hours + record.lateness_hours,
        early_departure_hours: totals.early_departure_hours + record.early_departure_hours,
        early_arrival_hours: totals.early_arrival_hours + record.early_arrival_hours,
        extra_day_hours: totals.extra_day_hours + record.extra_day_hours,
        extra_after_cutoff_hours: totals.extra_after_cutoff_hours
            + record.extra_after_cutoff_hours,
        extra_night_hours: totals.extra_night_hours + record.extra_night_hours,
        extra_holiday_hours: totals.extra_holiday_hours + record.extra_holiday_hours,
    }
}

/// Returns a copy of the totals with every hour value rounded to two decimals.
pub fn round_totals(totals: &EmployeeTotals) -> EmployeeTotals {
    let r = |d: Decimal| d.round_dp(2);
    EmployeeTotals {
        days_worked: totals.days_worked,
        carried_pending_hours: r(totals.carried_pending_hours),
        hours_worked: r(totals.hours_worked),
        regular_hours: r(totals.regular_hours),
        extra_hours: r(totals.extra_hours),
        extra_hours_50: r(totals.extra_hours_50),
        extra_hours_100: r(totals.extra_hours_100),
        night_hours: r(totals.night_hours),
        extra_night_hours_50: r(totals.extra_night_hours_50),
        extra_night_hours_100: r(totals.extra_night_hours_100),
        holiday_hours: r(totals.holiday_hours),
        holiday_night_hours: r(totals.holiday_night_hours),
        pending_hours: r(totals.pending_hours),
        lateness_hours: r(totals.lateness_hours),
        early_departure_hours: r(totals.early_departure_hours),
        early_arrival_hours: r(totals.early_arrival_hours),
        extra_day_hours: r(totals.extra_day_hours),
        extra_after_cutoff_hours: r(totals.extra_after_cutoff_hours),
        extra_night_hours: r(totals.extra_night_hours),
        extra_holiday_hours: r(totals.extra_holiday_hours),
    }
}

/// Aggregates day records into period totals.
///
/// The fold starts from the hours still pending from the previous period and
/// rounds to two decimals once, after every day has been added. The result
/// does not depend on the order of `records`.
///
/// # Examples
///
/// ```
/// use hours_engine::calculation::aggregate_totals;
/// use hours_engine::models::DayRecord;
/// use rust_decimal::Decimal;
///
/// let records: Vec<DayRecord> = vec![];
/// let totals = aggregate_totals(&records, Decimal::from(2));
/// assert_eq!(totals.pending_hours, Decimal::from(2));
/// assert_eq!(totals.days_worked, 0);
/// ```
pub fn aggregate_totals<'a, I>(records: I, previous_pending_hours: Decimal) -> EmployeeTotals
where
    I: IntoIterator<Item = &'a DayRecord>,
{
    let totals = records
        .into_iter()
        .fold(EmployeeTotals::seeded(previous_pending_hours), |acc, record| {
            add_day(&acc, record)
        });
    round_totals(&totals)
}
