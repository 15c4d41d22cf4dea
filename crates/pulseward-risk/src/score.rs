//! The risk scoring function.
//!
//! Scoring is pure and deterministic: the same patient record and reference
//! date always produce the same prediction. Four weighted factors
//! contribute to an overall score clamped to 0..=100:
//!
//! - age bucket: 30 / 20 / 10 / 5 points (over 65 / 50 / 40 / otherwise)
//! - conditions: 15 points each, contribution capped at 40
//! - allergies:   8 points each, contribution capped at 20
//! - medications: 10 points each, contribution capped at 25
//!
//! Factor levels are judged on the uncapped product, so a patient with six
//! conditions still reads High even though the contribution stops at 40.
//! Banding is exclusive: above 70 Critical, above 50 High, above 25
//! Moderate, otherwise Low.

use chrono::NaiveDate;
use tracing::debug;

use pulseward_domain::{
    patient::Patient,
    risk::{FactorLevel, HealthPrediction, RiskFactor, RiskLevel},
};

/// Assess `patient` as of `today`.
pub fn assess(patient: &Patient, today: NaiveDate) -> HealthPrediction {
    let mut factors = Vec::with_capacity(4);
    let mut total: u32 = 0;

    // Age.
    let age = patient.age_on(today);
    let age_score = if age > 65 {
        30
    } else if age > 50 {
        20
    } else if age > 40 {
        10
    } else {
        5
    };
    factors.push(RiskFactor {
        name: "Age Factor".to_string(),
        score: age_score,
        level: level_for(age_score, 20, 10),
        description: format!("Patient is {} years old", age),
    });
    total += age_score;

    // Pre-existing conditions.
    let conditions = &patient.medical_history.conditions;
    let raw_conditions = conditions.len() as u32 * 15;
    let condition_score = raw_conditions.min(40);
    factors.push(RiskFactor {
        name: "Pre-existing Conditions".to_string(),
        score: condition_score,
        level: level_for(raw_conditions, 25, 10),
        description: if conditions.is_empty() {
            "None".to_string()
        } else {
            conditions.join(", ")
        },
    });
    total += condition_score;

    // Allergies, with the "None" placeholder filtered out.
    let allergies = patient.active_allergies();
    let raw_allergies = allergies.len() as u32 * 8;
    let allergy_score = raw_allergies.min(20);
    factors.push(RiskFactor {
        name: "Allergy Sensitivity".to_string(),
        score: allergy_score,
        level: level_for(raw_allergies, 15, 5),
        description: if allergies.is_empty() {
            "None".to_string()
        } else {
            allergies.join(", ")
        },
    });
    total += allergy_score;

    // Active medications.
    let medications = &patient.medical_history.medications;
    let raw_medications = medications.len() as u32 * 10;
    let medication_score = raw_medications.min(25);
    factors.push(RiskFactor {
        name: "Medication Interactions".to_string(),
        score: medication_score,
        level: level_for(raw_medications, 20, 8),
        description: format!("{} active medication(s)", medications.len()),
    });
    total += medication_score;

    let overall_risk = total.min(100);
    let risk_level = band(overall_risk);

    let recommendations = recommend(patient, age);

    debug!(
        patient_id = %patient.id,
        overall_risk,
        risk_level = %risk_level.label(),
        "risk assessment computed"
    );

    HealthPrediction { overall_risk, risk_level, factors, recommendations }
}

/// The default prediction for an unknown patient id.
pub fn assess_missing() -> HealthPrediction {
    HealthPrediction {
        overall_risk: 0,
        risk_level: RiskLevel::Low,
        factors: Vec::new(),
        recommendations: vec!["No patient data available.".to_string()],
    }
}

fn band(score: u32) -> RiskLevel {
    if score > 70 {
        RiskLevel::Critical
    } else if score > 50 {
        RiskLevel::High
    } else if score > 25 {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

fn level_for(raw_score: u32, high_above: u32, moderate_above: u32) -> FactorLevel {
    if raw_score > high_above {
        FactorLevel::High
    } else if raw_score > moderate_above {
        FactorLevel::Moderate
    } else {
        FactorLevel::Low
    }
}

/// Keyword-driven recommendation list.
///
/// Condition matching is a case-insensitive substring test. When nothing
/// fires, the list falls back to a single routine-checkup entry.
fn recommend(patient: &Patient, age: u32) -> Vec<String> {
    let mut recommendations = Vec::new();

    let has_condition = |needle: &str| {
        patient
            .medical_history
            .conditions
            .iter()
            .any(|c| c.to_lowercase().contains(needle))
    };

    if has_condition("diabetes") {
        recommendations.push("Schedule quarterly HbA1c monitoring".to_string());
    }
    if has_condition("hypertension") {
        recommendations.push("Daily blood pressure monitoring recommended".to_string());
    }
    if age > 50 {
        recommendations.push("Annual cardiovascular screening advised".to_string());
    }
    if patient.medical_history.medications.len() > 2 {
        recommendations.push("Review medication interactions with pharmacist".to_string());
    }
    if !patient.active_allergies().is_empty() {
        recommendations.push("Update allergy wristband before procedures".to_string());
    }

    if recommendations.is_empty() {
        recommendations.push("Continue routine health checkups".to_string());
    }
    recommendations
}
