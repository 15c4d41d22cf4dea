//! Prescription records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{DoctorId, PatientId, PrescriptionId};

/// One medication line on a prescription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationOrder {
    pub name: String,
    /// e.g. "500 mg".
    pub dosage: String,
    /// e.g. "twice daily".
    pub frequency: String,
    /// e.g. "7 days".
    pub duration: String,
    pub instructions: String,
}

/// A scheduled follow-up visit attached to a prescription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUp {
    pub date: NaiveDate,
    pub notes: String,
}

/// Derived prescription state; never stored, always recomputed from dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrescriptionStatus {
    Active,
    Completed,
    FollowUpDue,
}

/// An issued prescription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: PrescriptionId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    /// Date the prescription was written.
    pub date: NaiveDate,
    pub diagnosis: String,
    pub medications: Vec<MedicationOrder>,
    /// General instructions covering the whole prescription.
    pub instructions: String,
    pub follow_up: Option<FollowUp>,
}

impl Prescription {
    /// Derive the prescription's state as of `today`.
    ///
    /// A follow-up dated strictly after `today` takes precedence; otherwise
    /// a prescription older than 30 days is Completed, anything newer is
    /// Active.
    pub fn status_on(&self, today: NaiveDate) -> PrescriptionStatus {
        if let Some(follow_up) = &self.follow_up {
            if follow_up.date > today {
                return PrescriptionStatus::FollowUpDue;
            }
        }
        let days_since = (today - self.date).num_days();
        if days_since > 30 {
            PrescriptionStatus::Completed
        } else {
            PrescriptionStatus::Active
        }
    }
}
