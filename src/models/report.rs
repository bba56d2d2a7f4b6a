//! Employee report models.
//!
//! This module contains the [`EmployeeReport`] type and the audit structures
//! that record how every day's buckets were derived.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DayRecord, EmployeeInfo, EmployeeTotals};

/// A single step in the audit trace recording a categorization decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the legal article behind the rule.
    pub legal_ref: String,
    /// The day the step applies to.
    pub date: NaiveDate,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// Severity of an [`AuditWarning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// Informational; the result is still exact.
    Low,
    /// A value could not be computed and was reported as zero.
    Medium,
}

/// A warning generated during categorization.
///
/// Warnings mark values that could not be computed and were reported as
/// zero, so a real zero can be told apart from missing data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level.
    pub severity: WarningSeverity,
    /// The day the warning applies to.
    pub date: NaiveDate,
}

/// The complete audit trace for an employee period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of categorization steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during categorization.
    pub warnings: Vec<AuditWarning>,
    /// The total processing duration in microseconds.
    pub duration_us: u64,
}

/// The categorized hours of one employee over a period.
///
/// # Example
///
/// ```
/// use hours_engine::models::{AuditTrace, EmployeeInfo, EmployeeReport, EmployeeTotals};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let report = EmployeeReport {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     employee: EmployeeInfo {
///         id: "emp_001".to_string(),
///         first_name: None,
///         last_name: None,
///         department: None,
///     },
///     daily: vec![],
///     totals: EmployeeTotals::default(),
///     audit_trace: AuditTrace::default(),
/// };
/// assert!(report.daily.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the report is for.
    pub employee: EmployeeInfo,
    /// One record per accepted day, in input order.
    pub daily: Vec<DayRecord>,
    /// Period totals, rounded to two decimals.
    pub totals: EmployeeTotals,
    /// Complete audit trace of categorization decisions.
    pub audit_trace: AuditTrace,
}
