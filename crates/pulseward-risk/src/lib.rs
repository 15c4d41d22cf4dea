//! # pulseward-risk
//!
//! The pure health-risk scorer: a deterministic mapping from a patient's
//! static record to a weighted score, a risk band, and a recommendation
//! list.
//!
//! ## Overview
//!
//! [`assess`] is a total function over any [`Patient`] record: four weighted
//! factors (age, conditions, allergies, medications) sum into an overall
//! score clamped to 0..=100, banded Low through Critical. Nothing is stored;
//! callers recompute on every selection change. [`assess_missing`] is the
//! default rendered for an unknown patient id.
//!
//! [`Patient`]: pulseward_domain::patient::Patient

pub mod score;

pub use score::{assess, assess_missing};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use pulseward_domain::{
        patient::{EmergencyContact, Gender, MedicalHistory, Patient, PatientStatus},
        risk::{FactorLevel, RiskLevel},
    };

    use super::{assess, assess_missing};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Reference date used by every assessment in this suite.
    fn today() -> NaiveDate {
        date(2026, 8, 4)
    }

    /// Build a patient whose age on [`today`] is `age`, with the given
    /// history lists.
    fn make_patient(
        age: i32,
        conditions: &[&str],
        allergies: &[&str],
        medications: &[&str],
    ) -> Patient {
        Patient {
            id: "P-0001".into(),
            name: "Test Patient".to_string(),
            gender: Gender::Other,
            dob: date(2026 - age, 6, 15),
            blood_type: "O+".to_string(),
            address: "1 Test Street".to_string(),
            phone: "555-0000".to_string(),
            email: "test@example.org".to_string(),
            emergency_contact: EmergencyContact {
                name: "Contact".to_string(),
                relationship: "friend".to_string(),
                phone: "555-0001".to_string(),
            },
            medical_history: MedicalHistory {
                allergies: allergies.iter().map(|s| s.to_string()).collect(),
                conditions: conditions.iter().map(|s| s.to_string()).collect(),
                medications: medications.iter().map(|s| s.to_string()).collect(),
                surgeries: Vec::new(),
            },
            insurance: None,
            status: PatientStatus::Active,
            registered: date(2026, 1, 1),
        }
    }

    fn factor_score(prediction: &pulseward_domain::risk::HealthPrediction, name: &str) -> u32 {
        prediction
            .factors
            .iter()
            .find(|f| f.name == name)
            .unwrap_or_else(|| panic!("missing factor '{}'", name))
            .score
    }

    // ── The worked example ────────────────────────────────────────────────────

    /// Age 55, two conditions, one allergy, three medications:
    /// 20 + 30 + 8 + 25 = 83, Critical.
    #[test]
    fn worked_example_scores_eighty_three() {
        let patient = make_patient(
            55,
            &["Hypertension", "Type 2 Diabetes"],
            &["Penicillin"],
            &["Metformin", "Lisinopril", "Atorvastatin"],
        );
        let prediction = assess(&patient, today());

        assert_eq!(factor_score(&prediction, "Age Factor"), 20);
        assert_eq!(factor_score(&prediction, "Pre-existing Conditions"), 30);
        assert_eq!(factor_score(&prediction, "Allergy Sensitivity"), 8);
        assert_eq!(factor_score(&prediction, "Medication Interactions"), 25);
        assert_eq!(prediction.overall_risk, 83);
        assert_eq!(prediction.risk_level, RiskLevel::Critical);
    }

    // ── Clamping and caps ─────────────────────────────────────────────────────

    #[test]
    fn overall_score_is_clamped_to_one_hundred() {
        // Every factor maxed out: 30 + 40 + 20 + 25 = 115 before the clamp.
        let patient = make_patient(
            70,
            &["A", "B", "C", "D"],
            &["W", "X", "Y"],
            &["M1", "M2", "M3", "M4"],
        );
        let prediction = assess(&patient, today());

        assert_eq!(prediction.overall_risk, 100);
        assert_eq!(prediction.risk_level, RiskLevel::Critical);
    }

    /// The contribution is capped but the factor level reflects the raw
    /// product, so a long condition list still reads High.
    #[test]
    fn factor_levels_follow_the_uncapped_product() {
        let patient = make_patient(
            30,
            &["A", "B", "C", "D", "E", "F"],
            &[],
            &["M1", "M2", "M3"],
        );
        let prediction = assess(&patient, today());

        let conditions = prediction
            .factors
            .iter()
            .find(|f| f.name == "Pre-existing Conditions")
            .unwrap();
        assert_eq!(conditions.score, 40, "contribution stops at the cap");
        assert_eq!(conditions.level, FactorLevel::High, "level sees the raw 90");

        let medications = prediction
            .factors
            .iter()
            .find(|f| f.name == "Medication Interactions")
            .unwrap();
        assert_eq!(medications.score, 25);
        assert_eq!(medications.level, FactorLevel::High, "raw 30 is above the High line");
    }

    #[test]
    fn allergy_none_placeholder_does_not_count() {
        let patient = make_patient(30, &[], &["None"], &[]);
        let prediction = assess(&patient, today());

        assert_eq!(factor_score(&prediction, "Allergy Sensitivity"), 0);
    }

    // ── Band boundaries ───────────────────────────────────────────────────────

    /// The band thresholds are exclusive: 25 is still Low, 50 still
    /// Moderate, 70 still High.
    #[test]
    fn band_thresholds_are_exclusive() {
        // 10 (age 45) + 15 (one condition) = 25.
        let at_25 = assess(&make_patient(45, &["Asthma"], &[], &[]), today());
        assert_eq!(at_25.overall_risk, 25);
        assert_eq!(at_25.risk_level, RiskLevel::Low);

        // 30 (age 70) alone.
        let at_30 = assess(&make_patient(70, &[], &[], &[]), today());
        assert_eq!(at_30.overall_risk, 30);
        assert_eq!(at_30.risk_level, RiskLevel::Moderate);

        // 20 (age 55) + 30 (two conditions) = 50.
        let at_50 = assess(
            &make_patient(55, &["Asthma", "Arthritis"], &[], &[]),
            today(),
        );
        assert_eq!(at_50.overall_risk, 50);
        assert_eq!(at_50.risk_level, RiskLevel::Moderate);

        // 30 (age 70) + 25 (three medications) = 55.
        let at_55 = assess(
            &make_patient(70, &[], &[], &["M1", "M2", "M3"]),
            today(),
        );
        assert_eq!(at_55.overall_risk, 55);
        assert_eq!(at_55.risk_level, RiskLevel::High);

        // 30 (age 70) + 40 (three conditions, capped) = 70.
        let at_70 = assess(
            &make_patient(70, &["A", "B", "C"], &[], &[]),
            today(),
        );
        assert_eq!(at_70.overall_risk, 70);
        assert_eq!(at_70.risk_level, RiskLevel::High);
    }

    #[test]
    fn young_healthy_patient_is_low_risk() {
        let prediction = assess(&make_patient(30, &[], &[], &[]), today());

        assert_eq!(prediction.overall_risk, 5);
        assert_eq!(prediction.risk_level, RiskLevel::Low);
        assert_eq!(
            prediction.recommendations,
            vec!["Continue routine health checkups".to_string()],
            "nothing fired, so only the fallback remains"
        );
    }

    // ── Recommendations ───────────────────────────────────────────────────────

    #[test]
    fn recommendations_fire_on_their_keywords() {
        let patient = make_patient(
            60,
            &["Type 2 Diabetes", "Essential Hypertension"],
            &["Penicillin"],
            &["M1", "M2", "M3"],
        );
        let prediction = assess(&patient, today());

        let recs = &prediction.recommendations;
        assert!(recs.iter().any(|r| r.contains("HbA1c")));
        assert!(recs.iter().any(|r| r.contains("blood pressure")));
        assert!(recs.iter().any(|r| r.contains("cardiovascular")));
        assert!(recs.iter().any(|r| r.contains("pharmacist")));
        assert!(recs.iter().any(|r| r.contains("wristband")));
        assert_eq!(recs.len(), 5, "every rule fired exactly once");
    }

    #[test]
    fn condition_keywords_match_case_insensitively() {
        let patient = make_patient(30, &["DIABETES MELLITUS"], &[], &[]);
        let prediction = assess(&patient, today());

        assert!(prediction.recommendations.iter().any(|r| r.contains("HbA1c")));
    }

    // ── Defaults and determinism ──────────────────────────────────────────────

    #[test]
    fn missing_patient_yields_the_default_prediction() {
        let prediction = assess_missing();

        assert_eq!(prediction.overall_risk, 0);
        assert_eq!(prediction.risk_level, RiskLevel::Low);
        assert!(prediction.factors.is_empty());
        assert_eq!(
            prediction.recommendations,
            vec!["No patient data available.".to_string()]
        );
    }

    #[test]
    fn assessment_is_deterministic() {
        let patient = make_patient(55, &["Hypertension"], &["Latex"], &["M1"]);
        assert_eq!(assess(&patient, today()), assess(&patient, today()));
    }
}
