//! Employee totals model: per-period sums of every day record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sums of every [`DayRecord`](super::DayRecord) hour field across a period.
///
/// Built by folding day records (see
/// [`aggregate_totals`](crate::calculation::aggregate_totals)); the fold
/// starts from [`EmployeeTotals::seeded`] with the hours still pending from
/// the previous period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeTotals {
    /// Days with worked hours greater than zero.
    pub days_worked: u32,
    /// Pending hours carried over from the previous period.
    pub carried_pending_hours: Decimal,
    /// Total hours worked.
    pub hours_worked: Decimal,
    /// Total regular hours.
    pub regular_hours: Decimal,
    /// Total extra hours.
    pub extra_hours: Decimal,
    /// Total extra hours at 50%.
    pub extra_hours_50: Decimal,
    /// Total extra hours at 100%.
    pub extra_hours_100: Decimal,
    /// Total night hours.
    pub night_hours: Decimal,
    /// Total night extra hours at 50%.
    pub extra_night_hours_50: Decimal,
    /// Total night extra hours at 100%.
    pub extra_night_hours_100: Decimal,
    /// Total holiday day hours.
    pub holiday_hours: Decimal,
    /// Total holiday night hours.
    pub holiday_night_hours: Decimal,
    /// Pending hours, including the carried-over seed.
    pub pending_hours: Decimal,
    /// Total lateness.
    pub lateness_hours: Decimal,
    /// Total early departure.
    pub early_departure_hours: Decimal,
    /// Total early arrival.
    pub early_arrival_hours: Decimal,
    /// Total pre-cutoff day extra.
    pub extra_day_hours: Decimal,
    /// Total Saturday post-cutoff extra.
    pub extra_after_cutoff_hours: Decimal,
    /// Total night extra.
    pub extra_night_hours: Decimal,
    /// Total holiday extra.
    pub extra_holiday_hours: Decimal,
}

impl EmployeeTotals {
    /// Returns empty totals seeded with hours pending from a previous period.
    ///
    /// ```
    /// use hours_engine::models::EmployeeTotals;
    /// use rust_decimal::Decimal;
    ///
    /// let totals = EmployeeTotals::seeded(Decimal::from(3));
    /// assert_eq!(totals.pending_hours, Decimal::from(3));
    /// assert_eq!(totals.carried_pending_hours, Decimal::from(3));
    /// assert_eq!(totals.days_worked, 0);
    /// ```
    pub fn seeded(previous_pending_hours: Decimal) -> Self {
        Self {
            carried_pending_hours: previous_pending_hours,
            pending_hours: previous_pending_hours,
            ..Self::default()
        }
    }
}
