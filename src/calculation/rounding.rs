//! Half-hour rounding policy and hour/minute conversions.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::EngineConfig;

const MINUTES_PER_HOUR: i64 = 60;

/// Default leftover minutes that round up to the next half hour.
pub const DEFAULT_FRAGMENT_MINUTES: u32 = 30;

/// Converts hours to whole minutes, rounding half to even.
///
/// ```
/// use hours_engine::calculation::hours_to_minutes;
/// use rust_decimal::Decimal;
///
/// assert_eq!(hours_to_minutes(Decimal::new(25, 1)), 150);
/// ```
pub fn hours_to_minutes(hours: Decimal) -> i64 {
    (hours * Decimal::from(MINUTES_PER_HOUR))
        .round()
        .to_i64()
        .unwrap_or(0)
}

/// Converts minutes to hours.
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(MINUTES_PER_HOUR)
}

/// Rounds hours to whole or half hours.
///
/// The leftover minutes past the whole hour become a half hour when they
/// reach `fragment_minutes`, and are dropped otherwise. Values at or below
/// zero become zero.
///
/// # Examples
///
/// ```
/// use hours_engine::calculation::round_to_half_hour;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 2h35 -> 2.5
/// assert_eq!(round_to_half_hour(Decimal::from_str("2.5833").unwrap(), 30), Decimal::from_str("2.5").unwrap());
/// // 2h20 -> 2
/// assert_eq!(round_to_half_hour(Decimal::from_str("2.3333").unwrap(), 30), Decimal::from(2));
/// ```
pub fn round_to_half_hour(hours: Decimal, fragment_minutes: u32) -> Decimal {
    if hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let minutes = hours_to_minutes(hours);
    let whole = minutes / MINUTES_PER_HOUR;
    let leftover = minutes % MINUTES_PER_HOUR;

    let rounded = Decimal::from(whole);
    if leftover >= i64::from(fragment_minutes) {
        rounded + Decimal::new(5, 1)
    } else {
        rounded
    }
}

/// Rounding applied to every premium bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundingPolicy {
    /// Whether rounding is applied at all.
    pub enabled: bool,
    /// Leftover minutes that round up to the next half hour.
    pub fragment_minutes: u32,
}

impl RoundingPolicy {
    /// Builds the policy from the `redondear`/`redondear_extras` and
    /// `fragmento_minutos` settings.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            enabled: config.rounding_enabled(),
            fragment_minutes: config.rules().fragment_minutes,
        }
    }

    /// Rounds `hours` when the policy is enabled; returns it unchanged otherwise.
    pub fn apply(&self, hours: Decimal) -> Decimal {
        if self.enabled {
            round_to_half_hour(hours, self.fragment_minutes)
        } else {
            hours
        }
    }
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            fragment_minutes: DEFAULT_FRAGMENT_MINUTES,
        }
    }
}

/// Formats hours as zero-padded `HH:MM` for reports. Negative values keep their sign.
///
/// ```
/// use hours_engine::calculation::format_hours_hhmm;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_hours_hhmm(Decimal::new(275, 2)), "02:45");
/// assert_eq!(format_hours_hhmm(Decimal::ZERO), "00:00");
/// ```
pub fn format_hours_hhmm(hours: Decimal) -> String {
    let minutes = hours_to_minutes(hours);
    let sign = if minutes < 0 { "-" } else { "" };
    let minutes = minutes.abs();
    format!(
        "{}{:02}:{:02}",
        sign,
        minutes / MINUTES_PER_HOUR,
        minutes % MINUTES_PER_HOUR
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // ==========================================================================
    // Half-hour rounding
    // ==========================================================================
    #[test]
    fn test_leftover_at_fragment_rounds_up_to_half() {
        assert_eq!(round_to_half_hour(dec("1.5"), 30), dec("1.5"));
        assert_eq!(round_to_half_hour(minutes_to_hours(119), 30), dec("1.5"));
    }

    #[test]
    fn test_leftover_below_fragment_is_dropped() {
        assert_eq!(round_to_half_hour(minutes_to_hours(89), 30), dec("1"));
        assert_eq!(round_to_half_hour(minutes_to_hours(29), 30), dec("0"));
    }

    #[test]
    fn test_smaller_fragment() {
        assert_eq!(round_to_half_hour(minutes_to_hours(80), 20), dec("1.5"));
        assert_eq!(round_to_half_hour(minutes_to_hours(79), 20), dec("1"));
    }

    #[test]
    fn test_non_positive_becomes_zero() {
        assert_eq!(round_to_half_hour(Decimal::ZERO, 30), Decimal::ZERO);
        assert_eq!(round_to_half_hour(dec("-1.5"), 30), Decimal::ZERO);
    }

    #[test]
    fn test_whole_hours_unchanged() {
        assert_eq!(round_to_half_hour(dec("3"), 30), dec("3"));
    }

    // ==========================================================================
    // Policy
    // ==========================================================================
    #[test]
    fn test_disabled_policy_is_identity() {
        let policy = RoundingPolicy::default();
        assert_eq!(policy.apply(dec("1.2345")), dec("1.2345"));
        assert_eq!(policy.apply(dec("-1")), dec("-1"));
    }

    #[test]
    fn test_enabled_policy_rounds() {
        let policy = RoundingPolicy {
            enabled: true,
            fragment_minutes: 30,
        };
        assert_eq!(policy.apply(dec("2.6")), dec("2.5"));
    }

    #[test]
    fn test_policy_from_default_config_is_disabled() {
        let policy = RoundingPolicy::from_config(&EngineConfig::default());
        assert!(!policy.enabled);
        assert_eq!(policy.fragment_minutes, DEFAULT_FRAGMENT_MINUTES);
    }

    // ==========================================================================
    // Conversions and formatting
    // ==========================================================================
    #[test]
    fn test_hours_to_minutes() {
        assert_eq!(hours_to_minutes(dec("1.25")), 75);
        assert_eq!(hours_to_minutes(dec("0.999")), 60);
        assert_eq!(hours_to_minutes(dec("-0.5")), -30);
    }

    #[test]
    fn test_format_hours_hhmm() {
        assert_eq!(format_hours_hhmm(dec("8")), "08:00");
        assert_eq!(format_hours_hhmm(dec("0.5")), "00:30");
        assert_eq!(format_hours_hhmm(dec("12.75")), "12:45");
        assert_eq!(format_hours_hhmm(dec("-1.25")), "-01:15");
        assert_eq!(format_hours_hhmm(dec("100")), "100:00");
    }

    proptest! {
        /// Rounding an already rounded value changes nothing.
        #[test]
        fn prop_rounding_is_idempotent(minutes in 0i64..(48 * 60), fragment in 1u32..=30) {
            let once = round_to_half_hour(minutes_to_hours(minutes), fragment);
            let twice = round_to_half_hour(once, fragment);
            prop_assert_eq!(once, twice);
        }

        /// Rounded values are whole or half hours.
        #[test]
        fn prop_rounded_values_are_half_hours(minutes in 0i64..(48 * 60), fragment in 1u32..=30) {
            let rounded = round_to_half_hour(minutes_to_hours(minutes), fragment);
            prop_assert_eq!((rounded * Decimal::from(2)).fract(), Decimal::ZERO);
        }
    }
}
