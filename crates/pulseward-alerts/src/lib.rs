//! # pulseward-alerts
//!
//! The simulated emergency-alert pipeline: a six-template synthesizer that
//! fires against a random patient, and an acknowledgment board capped at
//! the 50 most recent alerts.
//!
//! ## Overview
//!
//! [`AlertGenerator`] is driven by a timer owned by the caller (the
//! dashboard fires it every eight seconds); each draw produces a fresh,
//! uniquely-keyed [`Alert`](pulseward_domain::alert::Alert).
//! [`AlertBoard`] holds the published alerts newest-first and enforces the
//! acknowledgment lifecycle: false to true exactly once, per alert, and
//! nothing else changes.

pub mod board;
pub mod generator;

pub use board::{AlertBoard, ALERT_CAPACITY};
pub use generator::AlertGenerator;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use pulseward_domain::{
        alert::{Alert, AlertSeverity},
        ids::AlertId,
        patient::{EmergencyContact, Gender, MedicalHistory, Patient, PatientStatus},
    };

    use super::{AlertBoard, AlertGenerator, ALERT_CAPACITY};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 4, 12, 0, 0).unwrap()
    }

    fn make_patient(id: &str, name: &str) -> Patient {
        Patient {
            id: id.into(),
            name: name.to_string(),
            gender: Gender::Other,
            dob: NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
            blood_type: "O+".to_string(),
            address: "1 Test Street".to_string(),
            phone: "555-0000".to_string(),
            email: "test@example.org".to_string(),
            emergency_contact: EmergencyContact {
                name: "Contact".to_string(),
                relationship: "friend".to_string(),
                phone: "555-0001".to_string(),
            },
            medical_history: MedicalHistory::default(),
            insurance: None,
            status: PatientStatus::Active,
            registered: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        }
    }

    fn roster() -> Vec<Patient> {
        vec![
            make_patient("P-0001", "First Patient"),
            make_patient("P-0002", "Second Patient"),
        ]
    }

    fn manual_alert(id: &str, severity: AlertSeverity) -> Alert {
        Alert {
            id: AlertId::from(id),
            patient_id: "P-0001".into(),
            patient_name: "First Patient".to_string(),
            severity,
            message: "test alert".to_string(),
            vital: "Heart Rate".to_string(),
            value: "142 bpm".to_string(),
            timestamp: now(),
            acknowledged: false,
        }
    }

    // ── Board capacity and ordering ───────────────────────────────────────────

    /// Publishing past the capacity evicts the oldest entries only.
    #[test]
    fn board_caps_at_fifty_newest_first() {
        let board = AlertBoard::new();
        for i in 0..60 {
            board
                .publish(manual_alert(&format!("ALT-{:04}", i), AlertSeverity::Info))
                .unwrap();
        }

        assert_eq!(board.len(), ALERT_CAPACITY);

        let snapshot = board.snapshot();
        assert_eq!(snapshot[0].id.as_str(), "ALT-0059", "newest alert must lead");
        assert_eq!(
            snapshot.last().unwrap().id.as_str(),
            "ALT-0010",
            "the ten oldest alerts must have been evicted"
        );
    }

    // ── Acknowledgment lifecycle ──────────────────────────────────────────────

    /// Acknowledging one alert transitions it exactly once and leaves every
    /// other alert untouched.
    #[test]
    fn acknowledgment_is_monotonic_and_isolated() {
        let board = AlertBoard::new();
        board.publish(manual_alert("ALT-0001", AlertSeverity::Critical)).unwrap();
        board.publish(manual_alert("ALT-0002", AlertSeverity::Warning)).unwrap();
        board.publish(manual_alert("ALT-0003", AlertSeverity::Info)).unwrap();

        assert!(board.acknowledge(&AlertId::from("ALT-0002")).unwrap());
        // Second acknowledgment of the same alert is a no-op.
        assert!(!board.acknowledge(&AlertId::from("ALT-0002")).unwrap());

        for alert in board.snapshot() {
            if alert.id.as_str() == "ALT-0002" {
                assert!(alert.acknowledged);
            } else {
                assert!(!alert.acknowledged, "{} must be untouched", alert.id);
            }
        }
    }

    #[test]
    fn acknowledging_an_unknown_id_is_a_no_op() {
        let board = AlertBoard::new();
        board.publish(manual_alert("ALT-0001", AlertSeverity::Info)).unwrap();
        assert!(!board.acknowledge(&AlertId::from("ALT-9999")).unwrap());
        assert_eq!(board.active_count(), 1);
    }

    #[test]
    fn bulk_acknowledge_then_clear() {
        let board = AlertBoard::new();
        for i in 0..5 {
            board
                .publish(manual_alert(&format!("ALT-{:04}", i), AlertSeverity::Warning))
                .unwrap();
        }
        board.acknowledge(&AlertId::from("ALT-0000")).unwrap();

        // Four remaining alerts transition; the already-acknowledged one
        // does not count twice.
        assert_eq!(board.acknowledge_all().unwrap(), 4);
        assert_eq!(board.active_count(), 0);
        assert_eq!(board.acknowledged_count(), 5);

        assert_eq!(board.clear_acknowledged().unwrap(), 5);
        assert!(board.is_empty());
    }

    #[test]
    fn critical_count_ignores_acknowledged_criticals() {
        let board = AlertBoard::new();
        board.publish(manual_alert("ALT-0001", AlertSeverity::Critical)).unwrap();
        board.publish(manual_alert("ALT-0002", AlertSeverity::Critical)).unwrap();
        board.publish(manual_alert("ALT-0003", AlertSeverity::Info)).unwrap();

        assert_eq!(board.critical_count(), 2);
        board.acknowledge(&AlertId::from("ALT-0001")).unwrap();
        assert_eq!(board.critical_count(), 1);
        assert_eq!(board.active_count(), 2);
    }

    // ── Generator ─────────────────────────────────────────────────────────────

    #[test]
    fn empty_roster_yields_no_alert() {
        let mut generator = AlertGenerator::with_rng(StdRng::seed_from_u64(1));
        assert!(generator.synthesize(&[], now()).is_none());
    }

    /// Every template keeps its randomized reading inside the documented
    /// span, targets a roster patient, and mints an ALT-prefixed id.
    #[test]
    fn synthesized_alerts_stay_within_template_bounds() {
        let patients = roster();
        let mut generator = AlertGenerator::with_rng(StdRng::seed_from_u64(9));
        let mut severities = HashSet::new();

        for _ in 0..300 {
            let alert = generator.synthesize(&patients, now()).unwrap();
            severities.insert(alert.severity);

            assert!(alert.id.as_str().starts_with("ALT-"));
            assert!(
                patients.iter().any(|p| p.id == alert.patient_id),
                "alert must reference a roster patient"
            );
            assert!(!alert.acknowledged);

            match (alert.severity, alert.vital.as_str()) {
                (AlertSeverity::Critical, "Heart Rate") => {
                    let bpm: u32 = alert.value.trim_end_matches(" bpm").parse().unwrap();
                    assert!((130..160).contains(&bpm), "tachycardia bpm {}", bpm);
                }
                (AlertSeverity::Warning, "Heart Rate") => {
                    let bpm: u32 = alert.value.trim_end_matches(" bpm").parse().unwrap();
                    assert!((50..58).contains(&bpm), "bradycardia bpm {}", bpm);
                }
                (AlertSeverity::Critical, "SpO2") => {
                    let pct: u32 = alert.value.trim_end_matches('%').parse().unwrap();
                    assert!((82..88).contains(&pct), "spo2 {}", pct);
                }
                (AlertSeverity::Critical, "Blood Pressure") => {
                    let (sys, dia) = parse_bp(&alert.value);
                    assert!((190..210).contains(&sys), "crisis systolic {}", sys);
                    assert!((100..115).contains(&dia), "crisis diastolic {}", dia);
                }
                (AlertSeverity::Info, "Blood Pressure") => {
                    let (sys, dia) = parse_bp(&alert.value);
                    assert!((135..145).contains(&sys), "mild systolic {}", sys);
                    assert!((88..93).contains(&dia), "mild diastolic {}", dia);
                }
                (AlertSeverity::Warning, "Temperature") => {
                    let celsius: f64 =
                        alert.value.trim_end_matches("°C").parse().unwrap();
                    assert!((38.2..=39.7).contains(&celsius), "temperature {}", celsius);
                }
                other => panic!("unexpected template {:?}", other),
            }
        }

        assert_eq!(severities.len(), 3, "all three severities should appear in 300 draws");
    }

    /// Ids stay unique even when every draw shares one timestamp.
    #[test]
    fn ids_are_unique_within_a_single_millisecond() {
        let patients = roster();
        let mut generator = AlertGenerator::with_rng(StdRng::seed_from_u64(5));

        let ids: HashSet<String> = (0..100)
            .map(|_| generator.synthesize(&patients, now()).unwrap().id.0)
            .collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn seeding_publishes_the_requested_count() {
        let board = AlertBoard::new();
        let mut generator = AlertGenerator::with_rng(StdRng::seed_from_u64(2));
        board.seed(&mut generator, &roster(), 3, now()).unwrap();
        assert_eq!(board.len(), 3);
    }

    fn parse_bp(value: &str) -> (u32, u32) {
        let trimmed = value.trim_end_matches(" mmHg");
        let (sys, dia) = trimmed.split_once('/').unwrap();
        (sys.parse().unwrap(), dia.parse().unwrap())
    }
}
