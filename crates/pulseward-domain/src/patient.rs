//! Patient registry records.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ids::PatientId;

/// Self-reported gender, as captured on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Whether the patient is currently under the hospital's care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    Active,
    Discharged,
}

/// Who to call when the patient cannot speak for themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

/// Static medical background captured at registration and updated over time.
///
/// The lists are free-text entries. Intake forms historically recorded the
/// literal string "None" for an empty allergy list; [`Patient::active_allergies`]
/// filters that placeholder out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicalHistory {
    pub allergies: Vec<String>,
    pub conditions: Vec<String>,
    pub medications: Vec<String>,
    pub surgeries: Vec<String>,
}

/// Insurance coverage, when the patient has any on file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceDetails {
    pub provider: String,
    pub policy_number: String,
    pub expiry_date: String,
}

/// A registered patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub gender: Gender,
    /// Date of birth; ages are derived, never stored.
    pub dob: NaiveDate,
    pub blood_type: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub emergency_contact: EmergencyContact,
    pub medical_history: MedicalHistory,
    pub insurance: Option<InsuranceDetails>,
    pub status: PatientStatus,
    pub registered: NaiveDate,
}

impl Patient {
    /// Age in whole calendar years on `date`.
    ///
    /// Computed as the difference of calendar years, ignoring month and day,
    /// which is how the intake records have always reported age.
    pub fn age_on(&self, date: NaiveDate) -> u32 {
        (date.year() - self.dob.year()).max(0) as u32
    }

    /// True if any recorded condition mentions hypertension.
    ///
    /// Matching is a case-insensitive substring test so entries such as
    /// "Hypertension (Stage 1)" qualify.
    pub fn is_hypertensive(&self) -> bool {
        self.medical_history
            .conditions
            .iter()
            .any(|c| c.to_lowercase().contains("hypertension"))
    }

    /// Recorded allergies with the "None" placeholder filtered out.
    pub fn active_allergies(&self) -> Vec<&str> {
        self.medical_history
            .allergies
            .iter()
            .filter(|a| !a.eq_ignore_ascii_case("none"))
            .map(String::as_str)
            .collect()
    }
}
