//! Configuration types for hour categorization.
//!
//! [`RulesConfig`] mirrors `rules.yaml` key for key (the keys keep the
//! Spanish names used by the payroll team). [`EngineConfig`] is the validated,
//! immutable value handed to every calculation stage.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Default IANA zone used to localize punch timestamps.
pub const DEFAULT_TIMEZONE: &str = "America/Argentina/Buenos_Aires";

/// Labor rules as written in `rules.yaml`.
///
/// Every key is optional; missing keys take the values of
/// [`RulesConfig::default`]. Unknown keys are ignored so the same file can
/// carry settings for the retrieval and report layers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Length of a full regular workday, in hours.
    #[serde(rename = "jornada_completa_horas")]
    pub full_workday_hours: Decimal,
    /// Lateness tolerance in minutes. Reserved; not used by the premium math.
    #[serde(rename = "tolerancia_minutos")]
    pub tolerance_minutes: u32,
    /// Hour of day at which the night window opens.
    #[serde(rename = "hora_nocturna_inicio")]
    pub night_start_hour: u32,
    /// Hour of day at which the night window closes.
    #[serde(rename = "hora_nocturna_fin")]
    pub night_end_hour: u32,
    /// Saturday hour after which extra hours earn the 100% premium.
    #[serde(rename = "sabado_limite_hora")]
    pub saturday_cutoff_hour: u32,
    /// Minimum leftover minutes that round up to the next half hour.
    #[serde(rename = "fragmento_minutos")]
    pub fragment_minutes: u32,
    /// Weekday extra hours expected at 50% before the 100% premium applies.
    #[serde(rename = "extras_al_50")]
    pub extra_50_ceiling_hours: Decimal,
    /// Whether minutes arrived early are subtracted from extra hours.
    #[serde(rename = "restar_llegada_anticipada_de_horas_extras")]
    pub subtract_early_arrival: bool,
    /// General rounding switch.
    #[serde(rename = "redondear")]
    pub round: Option<bool>,
    /// Rounding switch for extra hours; overrides `redondear` when present.
    #[serde(rename = "redondear_extras")]
    pub round_extras: Option<bool>,
    /// IANA identifier of the local time zone.
    pub local_timezone: String,
    /// Skip absences, leave and the current date.
    pub test: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            full_workday_hours: Decimal::from(8),
            tolerance_minutes: 20,
            night_start_hour: 21,
            night_end_hour: 6,
            saturday_cutoff_hour: 13,
            fragment_minutes: 30,
            extra_50_ceiling_hours: Decimal::from(2),
            subtract_early_arrival: true,
            round: None,
            round_extras: None,
            local_timezone: DEFAULT_TIMEZONE.to_string(),
            test: false,
        }
    }
}

impl RulesConfig {
    /// Returns whether half-hour rounding is enabled.
    ///
    /// `redondear_extras` wins over `redondear`; both absent means disabled.
    pub fn rounding_enabled(&self) -> bool {
        self.round_extras.or(self.round).unwrap_or(false)
    }
}

/// Holiday names file structure (`holidays.yaml`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HolidaysConfig {
    /// Map of date to holiday name.
    #[serde(default)]
    pub holidays: BTreeMap<NaiveDate, String>,
}

/// The night differential window, as hours of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightWindow {
    /// Opening hour, anchored to the reference day.
    pub start_hour: u32,
    /// Closing hour; on the following day when it is not after `start_hour`.
    pub end_hour: u32,
}

/// The validated engine configuration.
///
/// Built once and passed by reference into every stage; nothing in the
/// engine reads configuration from anywhere else.
///
/// # Example
///
/// ```
/// use hours_engine::config::{EngineConfig, RulesConfig};
///
/// let config = EngineConfig::new(RulesConfig::default(), Default::default()).unwrap();
/// assert_eq!(config.night_window().start_hour, 21);
/// assert_eq!(config.timezone(), chrono_tz::America::Argentina::Buenos_Aires);
/// ```
#[derive(Debug, Clone)]
pub struct EngineConfig {
    rules: RulesConfig,
    timezone: Tz,
    holiday_names: BTreeMap<NaiveDate, String>,
}

impl EngineConfig {
    /// Validates the rules and builds the configuration.
    pub fn new(rules: RulesConfig, holidays: HolidaysConfig) -> EngineResult<Self> {
        check_range("hora_nocturna_inicio", rules.night_start_hour, 0, 23)?;
        check_range("hora_nocturna_fin", rules.night_end_hour, 0, 23)?;
        check_range("sabado_limite_hora", rules.saturday_cutoff_hour, 0, 24)?;
        // Above 30 a rounded x.5 value would round down on a second pass.
        check_range("fragmento_minutos", rules.fragment_minutes, 1, 30)?;

        if rules.full_workday_hours <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "jornada_completa_horas".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if rules.extra_50_ceiling_hours < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "extras_al_50".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        let timezone: Tz =
            rules
                .local_timezone
                .parse()
                .map_err(|_| EngineError::UnknownTimezone {
                    name: rules.local_timezone.clone(),
                })?;

        Ok(Self {
            rules,
            timezone,
            holiday_names: holidays.holidays,
        })
    }

    /// Returns the raw rules.
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Returns the local time zone.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Returns the night window bounds.
    pub fn night_window(&self) -> NightWindow {
        NightWindow {
            start_hour: self.rules.night_start_hour,
            end_hour: self.rules.night_end_hour,
        }
    }

    /// Returns the configured name of a holiday, if any.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.holiday_names.get(&date).map(String::as_str)
    }

    /// Returns whether rounding to half hours is enabled.
    pub fn rounding_enabled(&self) -> bool {
        self.rules.rounding_enabled()
    }

    /// Returns whether test mode filtering is enabled.
    pub fn test_mode(&self) -> bool {
        self.rules.test
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rules: RulesConfig::default(),
            timezone: chrono_tz::America::Argentina::Buenos_Aires,
            holiday_names: BTreeMap::new(),
        }
    }
}

fn check_range(field: &str, value: u32, min: u32, max: u32) -> EngineResult<()> {
    if value < min || value > max {
        return Err(EngineError::InvalidConfig {
            field: field.to_string(),
            message: format!("must be between {} and {}, got {}", min, max, value),
        });
    }
    Ok(())
}
