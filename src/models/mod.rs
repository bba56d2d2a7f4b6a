//! Core data models for the hours engine.
//!
//! [`DaySummary`] is the attendance input for one employee and day,
//! [`DayRecord`] the categorized output, and [`EmployeeTotals`] the period
//! sums the report layer renders.

mod day_record;
mod day_summary;
mod employee;
mod employee_totals;
mod report;

#[cfg(test)]
pub(crate) use day_record::fixtures;
pub use day_record::{DayRecord, weekday_name_es};
pub use day_summary::{
    ABSENCE_INCIDENCE, CategorizedHours, DaySummary, Entry, EntryType, Holiday, HourCategory,
    TimeSlot, WorkedHours,
};
pub use employee::EmployeeInfo;
pub use employee_totals::EmployeeTotals;
pub use report::{AuditStep, AuditTrace, AuditWarning, EmployeeReport, WarningSeverity};
