//! Request types for the hours engine API.
//!
//! This module defines the JSON request structure for the `/process` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DaySummary, EmployeeInfo};

use super::response::ApiError;

/// Request body for the `/process` endpoint.
///
/// Carries one employee's day summaries for a period, as returned by the
/// attendance feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// The employee the summaries belong to.
    pub employee: EmployeeInfo,
    /// Pending hours carried over from the previous period.
    #[serde(default)]
    pub previous_pending_hours: Decimal,
    /// The period's day summaries, in feed order.
    pub day_summaries: Vec<DaySummary>,
    /// Current local date for test mode; defaults to today in the configured zone.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

impl ProcessRequest {
    /// Checks the fields serde cannot check.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.employee.id.trim().is_empty() {
            return Err(ApiError::validation_error("employee.id must not be empty"));
        }
        if self.previous_pending_hours < Decimal::ZERO {
            return Err(ApiError::validation_error(
                "previous_pending_hours must not be negative",
            ));
        }
        Ok(())
    }
}
