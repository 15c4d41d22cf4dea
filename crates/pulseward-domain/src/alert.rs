//! Emergency alert records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{AlertId, PatientId};

/// Alert severity, in escalation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

impl AlertSeverity {
    pub fn label(self) -> &'static str {
        match self {
            AlertSeverity::Info => "INFO",
            AlertSeverity::Warning => "WARNING",
            AlertSeverity::Critical => "CRITICAL",
        }
    }
}

/// A single published alert.
///
/// Lifecycle: created by the synthesizer, mutated only by acknowledgment
/// (false to true, never back), evicted when the board exceeds its capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    pub patient_id: PatientId,
    /// Denormalized for display; the board never re-reads the registry.
    pub patient_name: String,
    pub severity: AlertSeverity,
    pub message: String,
    /// Which vital tripped the alert, e.g. "Heart Rate".
    pub vital: String,
    /// Formatted reading, e.g. "142 bpm".
    pub value: String,
    pub timestamp: DateTime<Utc>,
    pub acknowledged: bool,
}
