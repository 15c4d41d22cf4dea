//! Doctor directory and staff roster records.

use serde::{Deserialize, Serialize};

use crate::ids::{DoctorId, StaffId};

/// A doctor's current working state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DoctorStatus {
    Active,
    OnLeave,
    Inactive,
}

/// Weekly consulting window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    /// Short day names in roster order, e.g. ["Mon", "Wed", "Fri"].
    pub days: Vec<String>,
    /// 24h "HH:MM" clock strings.
    pub start_time: String,
    pub end_time: String,
}

/// An entry in the doctor directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialization: String,
    pub department: String,
    pub qualification: String,
    pub experience_years: u32,
    pub availability: Availability,
    pub status: DoctorStatus,
}

/// Non-physician staff roles tracked by the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Nurse,
    Technician,
    Administrator,
    Pharmacist,
}

/// A member of the non-physician staff roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    pub role: StaffRole,
    pub department: String,
    /// Shift label, e.g. "Day", "Night".
    pub shift: String,
    pub phone: String,
}
