//! Appointment scheduling records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{AppointmentId, DoctorId, PatientId};

/// Lifecycle of a booked appointment.
///
/// Scheduled is the only non-terminal state; Completed and Cancelled are
/// final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// A booked consultation slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub date: NaiveDate,
    /// 24h "HH:MM" clock string.
    pub time: String,
    /// Service requested, e.g. "General Checkup", "Cardiology Consult".
    pub service: String,
    pub notes: String,
    pub status: AppointmentStatus,
}
