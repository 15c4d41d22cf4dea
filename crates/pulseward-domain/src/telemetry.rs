//! Synthetic physiological reading types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One synthetic reading across all monitored vitals.
///
/// Values are generated independently per vital; no physiological
/// correlation is enforced beyond the baseline shift applied for
/// hypertensive patients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalSign {
    pub timestamp: DateTime<Utc>,
    /// Beats per minute.
    pub heart_rate: u32,
    /// Systolic blood pressure, mmHg.
    pub systolic: u32,
    /// Diastolic blood pressure, mmHg.
    pub diastolic: u32,
    /// Oxygen saturation, percent.
    pub spo2: u32,
    /// Body temperature, degrees Celsius, one decimal place.
    pub temperature: f64,
    /// Breaths per minute.
    pub respiratory_rate: u32,
}

/// Escalation band derived from a reading.
///
/// The derive order makes `Normal < Warning < Critical`, so the worst band
/// in a window is simply `max()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VitalStatus {
    Normal,
    Warning,
    Critical,
}

impl VitalStatus {
    /// Display label, uppercased the way the monitoring board shows it.
    pub fn label(self) -> &'static str {
        match self {
            VitalStatus::Normal => "NORMAL",
            VitalStatus::Warning => "WARNING",
            VitalStatus::Critical => "CRITICAL",
        }
    }
}
