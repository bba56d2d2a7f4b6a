//! Attendance hour categorization engine for Argentine labor rules.
//!
//! This crate turns per-day attendance summaries (punches, scheduled shift,
//! upstream regular/extra split, holiday and leave markers) into categorized
//! hours: night hours, lateness, early departure, pending hours, and the 50%
//! and 100% overtime premiums, with the Saturday 13:00 split. Per-day records
//! are aggregated into period totals for the reporting layer.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
