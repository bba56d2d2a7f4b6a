//! Calculation logic for the hours engine.
//!
//! This module contains every stage of hour categorization: punch
//! normalization to local time, night window classification, attendance
//! deviation detection, premium bucketing with the Saturday cutoff split,
//! half-hour rounding, the day pre-filter, per-day processing, and period
//! aggregation.

mod aggregation;
mod day_filter;
mod day_kind;
mod day_processor;
mod deviations;
mod night_hours;
mod period;
mod premium_buckets;
mod rounding;
mod saturday_split;
mod time_normalizer;

pub use aggregation::{add_day, aggregate_totals, round_totals};
pub use day_filter::{AcceptedDay, SkipReason, filter_day_summaries, local_today, skip_reason};
pub use day_kind::{DayKind, get_day_kind, weekday_index};
pub use day_processor::{
    NIGHT_HOURS_CLAMPED_WARNING, ProcessedDay, UNPARSEABLE_PUNCH_WARNING,
    UNPARSEABLE_SCHEDULE_WARNING, pending_hours, process_day,
};
pub use deviations::{
    AttendanceDeviations, DeviationResult, detect_deviations, early_arrival_minutes,
    early_departure_minutes, lateness_minutes, minutes_of_day, parse_clock_time,
};
pub use night_hours::{NightHoursResult, calculate_night_hours, night_window_bounds, overlap_hours};
pub use period::{ENGINE_VERSION, process_employee_period};
pub use premium_buckets::{
    EXTRA_50_CEILING_WARNING, PremiumBucketResult, PremiumBuckets, PremiumInput,
    calculate_premium_buckets,
};
pub use rounding::{
    DEFAULT_FRAGMENT_MINUTES, RoundingPolicy, format_hours_hhmm, hours_to_minutes,
    minutes_to_hours, round_to_half_hour,
};
pub use saturday_split::{
    SaturdaySplit, SaturdaySplitResult, calculate_saturday_split, split_at_cutoff,
};
pub use time_normalizer::{
    PunchPair, PunchResolution, ShiftDisplay, parse_local_instant, resolve_punches,
};
