//! Premium bucketing.
//!
//! Takes a day's extra hours and routes them into the 50% and 100% premium
//! buckets, day and night, according to the day kind. This is where the
//! early-arrival offset, the day/night split of extra hours, the holiday
//! buckets and the Saturday cutoff are applied.
//!
//! The order of operations is:
//!
//! 1. Round extra hours (when rounding is enabled) and clamp them at zero
//! 2. Subtract early-arrival minutes (when enabled)
//! 3. Split extra into night extra (up to the night hours) and day extra
//! 4. Fill the holiday buckets on holidays with punches
//! 5. Split Saturday day extra at the cutoff hour
//! 6. Route into the premium buckets by [`DayKind`]
//! 7. Round every bucket (when rounding is enabled)

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::models::{AuditStep, AuditWarning, WarningSeverity};

use super::day_kind::DayKind;
use super::rounding::{RoundingPolicy, hours_to_minutes, minutes_to_hours};
use super::saturday_split::calculate_saturday_split;

/// Warning code raised when weekday 50% extra exceeds `extras_al_50`.
pub const EXTRA_50_CEILING_WARNING: &str = "EXTRA_50_CEILING_EXCEEDED";

/// What the bucketer needs to know about a day.
#[derive(Debug, Clone, PartialEq)]
pub struct PremiumInput {
    /// The reference date.
    pub date: NaiveDate,
    /// The day kind used for routing.
    pub day_kind: DayKind,
    /// Whether the day is a holiday (also true for Saturday holidays).
    pub is_holiday: bool,
    /// Total hours worked.
    pub hours_worked: Decimal,
    /// Upstream extra hours.
    pub extra_hours: Decimal,
    /// Hours inside the night window, already clamped to `hours_worked`.
    pub night_hours: Decimal,
    /// Early arrival against the scheduled start.
    pub early_arrival_minutes: i64,
    /// Resolved worked interval.
    pub shift: Option<(NaiveDateTime, NaiveDateTime)>,
}

/// The premium buckets of one day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PremiumBuckets {
    /// Extra hours after the early-arrival offset.
    pub extra_hours: Decimal,
    /// Extra hours at 50%.
    pub extra_hours_50: Decimal,
    /// Extra hours at 100%.
    pub extra_hours_100: Decimal,
    /// Night extra hours at 50%.
    pub extra_night_hours_50: Decimal,
    /// Night extra hours at 100%.
    pub extra_night_hours_100: Decimal,
    /// Night hours, after rounding.
    pub night_hours: Decimal,
    /// Holiday day hours.
    pub holiday_hours: Decimal,
    /// Holiday night hours.
    pub holiday_night_hours: Decimal,
    /// Day extra hours before the Saturday cutoff (all day extra on other days).
    pub extra_day_hours: Decimal,
    /// Saturday day extra hours after the cutoff.
    pub extra_after_cutoff_hours: Decimal,
    /// Extra hours inside the night window.
    pub extra_night_hours: Decimal,
    /// Holiday day plus night hours.
    pub extra_holiday_hours: Decimal,
}

impl PremiumBuckets {
    fn rounded(self, policy: RoundingPolicy) -> Self {
        Self {
            extra_hours: policy.apply(self.extra_hours),
            extra_hours_50: policy.apply(self.extra_hours_50),
            extra_hours_100: policy.apply(self.extra_hours_100),
            extra_night_hours_50: policy.apply(self.extra_night_hours_50),
            extra_night_hours_100: policy.apply(self.extra_night_hours_100),
            night_hours: policy.apply(self.night_hours),
            holiday_hours: policy.apply(self.holiday_hours),
            holiday_night_hours: policy.apply(self.holiday_night_hours),
            extra_day_hours: policy.apply(self.extra_day_hours),
            extra_after_cutoff_hours: policy.apply(self.extra_after_cutoff_hours),
            extra_night_hours: policy.apply(self.extra_night_hours),
            extra_holiday_hours: policy.apply(self.extra_holiday_hours),
        }
    }
}

/// The result of premium bucketing, including audit steps and warnings.
#[derive(Debug, Clone)]
pub struct PremiumBucketResult {
    /// The buckets.
    pub buckets: PremiumBuckets,
    /// The audit steps recording this calculation.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings raised while bucketing.
    pub warnings: Vec<AuditWarning>,
}

/// Routes a day's extra hours into premium buckets.
///
/// # Arguments
///
/// * `input` - The day's hours, night hours, deviations and shift
/// * `config` - The engine configuration
/// * `start_step_number` - The starting step number for the audit trail
///
/// # Legal Reference
///
/// - LCT art. 201: extra hours at 50% on ordinary days, 100% on rest days
/// - LCT art. 204: Saturday after 13:00 is rest time
/// - Ley 27.399: holidays are tracked in their own buckets
///
/// # Examples
///
/// ```
/// use hours_engine::calculation::{DayKind, PremiumInput, calculate_premium_buckets};
/// use hours_engine::config::EngineConfig;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = PremiumInput {
///     date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
///     day_kind: DayKind::Weekday,
///     is_holiday: false,
///     hours_worked: Decimal::from(10),
///     extra_hours: Decimal::from(2),
///     night_hours: Decimal::ZERO,
///     early_arrival_minutes: 0,
///     shift: None,
/// };
///
/// let result = calculate_premium_buckets(&input, &EngineConfig::default(), 1);
/// assert_eq!(result.buckets.extra_hours_50, Decimal::from(2));
/// assert_eq!(result.buckets.extra_hours_100, Decimal::ZERO);
/// ```
pub fn calculate_premium_buckets(
    input: &PremiumInput,
    config: &EngineConfig,
    start_step_number: u32,
) -> PremiumBucketResult {
    let rules = config.rules();
    let policy = RoundingPolicy::from_config(config);
    let mut audit_steps = Vec::new();
    let mut warnings = Vec::new();
    let mut current_step = start_step_number;

    // Step 1: Round and clamp upstream extra
    let upstream_extra = policy.apply(input.extra_hours).max(Decimal::ZERO);

    // Step 2: Early-arrival offset
    let mut extra = upstream_extra;
    if rules.subtract_early_arrival && input.early_arrival_minutes > 0 {
        let remaining = (hours_to_minutes(extra) - input.early_arrival_minutes).max(0);
        extra = minutes_to_hours(remaining);

        audit_steps.push(AuditStep {
            step_number: current_step,
            rule_id: "early_arrival_offset".to_string(),
            rule_name: "Early Arrival Offset".to_string(),
            legal_ref: "LCT art. 201".to_string(),
            date: input.date,
            input: serde_json::json!({
                "extra_hours": upstream_extra.normalize().to_string(),
                "early_arrival_minutes": input.early_arrival_minutes
            }),
            output: serde_json::json!({
                "extra_hours": extra.normalize().to_string()
            }),
            reasoning: format!(
                "{} min arrived early are not extra time: {}h -> {}h",
                input.early_arrival_minutes,
                upstream_extra.normalize(),
                extra.normalize()
            ),
        });
        current_step += 1;
    }

    // Step 3: Day/night split of extra
    let (extra_night, mut extra_day) = if extra > Decimal::ZERO {
        let extra_night = extra.min(input.night_hours);
        (extra_night, extra - extra_night)
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    // Step 4: Holiday buckets
    let (holiday_hours, holiday_night_hours) = if input.is_holiday && input.shift.is_some() {
        let holiday_night = input.night_hours;
        (
            (input.hours_worked - holiday_night).max(Decimal::ZERO),
            holiday_night,
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    // Step 5: Saturday cutoff split
    let mut after_cutoff = Decimal::ZERO;
    if input.day_kind == DayKind::Saturday && extra_day > Decimal::ZERO {
        if let Some(shift) = input.shift {
            let result = calculate_saturday_split(
                shift,
                extra_day,
                rules.saturday_cutoff_hour,
                input.date,
                current_step,
            );
            extra_day = result.split.before_cutoff;
            after_cutoff = result.split.after_cutoff;
            audit_steps.push(result.audit_step);
            current_step += 1;
        }
    }

    // Step 6: Route by day kind
    let mut buckets = PremiumBuckets {
        extra_hours: extra,
        night_hours: input.night_hours,
        holiday_hours,
        holiday_night_hours,
        extra_day_hours: extra_day,
        extra_after_cutoff_hours: after_cutoff,
        extra_night_hours: extra_night,
        extra_holiday_hours: holiday_hours + holiday_night_hours,
        ..PremiumBuckets::default()
    };

    let reasoning = match input.day_kind {
        DayKind::Saturday => {
            buckets.extra_hours_50 = extra_day;
            buckets.extra_hours_100 = after_cutoff;
            buckets.extra_night_hours_100 = extra_night;
            "Saturday: extra before the cutoff at 50%, after the cutoff and at night at 100%"
        }
        DayKind::Sunday => {
            buckets.extra_hours_100 = extra_day;
            buckets.extra_night_hours_100 = extra_night;
            "Sunday: all extra at 100%"
        }
        DayKind::Holiday => "Holiday: hours tracked in the holiday buckets only",
        DayKind::RestDay => {
            buckets.extra_hours_100 = input.hours_worked;
            buckets.extra_night_hours_100 = extra_night;
            "Rest day: every worked hour at 100%"
        }
        DayKind::Weekday => {
            buckets.extra_hours_50 = extra_day;
            buckets.extra_night_hours_50 = extra_night;
            "Weekday: extra at 50%"
        }
    };

    // Step 7: Rounding
    let buckets = buckets.rounded(policy);

    audit_steps.push(AuditStep {
        step_number: current_step,
        rule_id: "premium_routing".to_string(),
        rule_name: "Premium Routing".to_string(),
        legal_ref: "LCT art. 201".to_string(),
        date: input.date,
        input: serde_json::json!({
            "day_kind": input.day_kind.to_string(),
            "is_holiday": input.is_holiday,
            "hours_worked": input.hours_worked.normalize().to_string(),
            "extra_hours": extra.normalize().to_string(),
            "night_hours": input.night_hours.normalize().to_string(),
            "rounding": policy.enabled
        }),
        output: serde_json::json!({
            "extra_hours_50": buckets.extra_hours_50.normalize().to_string(),
            "extra_hours_100": buckets.extra_hours_100.normalize().to_string(),
            "extra_night_hours_50": buckets.extra_night_hours_50.normalize().to_string(),
            "extra_night_hours_100": buckets.extra_night_hours_100.normalize().to_string(),
            "holiday_hours": buckets.holiday_hours.normalize().to_string(),
            "holiday_night_hours": buckets.holiday_night_hours.normalize().to_string()
        }),
        reasoning: reasoning.to_string(),
    });

    if input.day_kind == DayKind::Weekday {
        let extra_50 = buckets.extra_hours_50 + buckets.extra_night_hours_50;
        if extra_50 > rules.extra_50_ceiling_hours {
            warnings.push(AuditWarning {
                code: EXTRA_50_CEILING_WARNING.to_string(),
                message: format!(
                    "{}h of extra at 50% exceeds the expected {}h",
                    extra_50.normalize(),
                    rules.extra_50_ceiling_hours.normalize()
                ),
                severity: WarningSeverity::Low,
                date: input.date,
            });
        }
    }

    PremiumBucketResult {
        buckets,
        audit_steps,
        warnings,
    }
}
