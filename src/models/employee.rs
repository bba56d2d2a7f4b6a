//! Employee identity carried through a report.

use serde::{Deserialize, Serialize};

/// Identifies the employee a set of day summaries belongs to.
///
/// The engine does not interpret these fields; they are echoed back in the
/// [`EmployeeReport`](super::EmployeeReport) for the report layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInfo {
    /// Unique identifier for the employee.
    pub id: String,
    /// Given name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Department, when known.
    #[serde(default)]
    pub department: Option<String>,
}

impl EmployeeInfo {
    /// Returns the display name, falling back to the id.
    ///
    /// # Examples
    ///
    /// ```
    /// use hours_engine::models::EmployeeInfo;
    ///
    /// let employee = EmployeeInfo {
    ///     id: "emp_001".to_string(),
    ///     first_name: Some("Ana".to_string()),
    ///     last_name: Some("Pérez".to_string()),
    ///     department: None,
    /// };
    /// assert_eq!(employee.display_name(), "Ana Pérez");
    /// ```
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            self.id.clone()
        } else {
            parts.join(" ")
        }
    }
}
