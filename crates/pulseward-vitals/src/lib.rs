//! # pulseward-vitals
//!
//! The synthetic telemetry layer: a per-patient vitals simulator with a
//! bounded rolling window, reading classification, and a small bedside
//! device fleet simulation.
//!
//! ## Overview
//!
//! [`VitalsSimulator`] applies bounded uniform jitter to a baseline profile
//! on every tick and keeps the newest readings in a drop-oldest window.
//! The profile shifts when the focused patient has hypertension on record.
//! [`classify`] maps a reading to its escalation band. [`DeviceFleet`]
//! simulates the ward hardware the readings nominally come from.
//!
//! All tuning lives in [`MonitorConfig`], loaded from TOML; the defaults
//! carry the standard ward profile.

pub mod config;
pub mod devices;
pub mod simulator;
pub mod status;

pub use config::{HypertensiveShift, MonitorConfig, VitalBaselines, VitalJitter};
pub use devices::{Device, DeviceFleet, DeviceKind, DeviceStatus};
pub use simulator::VitalsSimulator;
pub use status::{classify, flags, VitalFlags};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use pulseward_domain::{
        error::PulsewardError,
        patient::{EmergencyContact, Gender, MedicalHistory, Patient, PatientStatus},
        telemetry::{VitalSign, VitalStatus},
    };

    use super::{classify, flags, DeviceFleet, DeviceStatus, MonitorConfig, VitalsSimulator};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 4, 12, 0, 0).unwrap()
    }

    fn make_patient(id: &str, conditions: &[&str]) -> Patient {
        Patient {
            id: id.into(),
            name: "Test Patient".to_string(),
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
            medical_history: MedicalHistory {
                allergies: Vec::new(),
                conditions: conditions.iter().map(|s| s.to_string()).collect(),
                medications: Vec::new(),
                surgeries: Vec::new(),
            },
            insurance: None,
            status: PatientStatus::Active,
            registered: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        }
    }

    fn make_reading(heart_rate: u32, systolic: u32, spo2: u32) -> VitalSign {
        VitalSign {
            timestamp: now(),
            heart_rate,
            systolic,
            diastolic: 78,
            spo2,
            temperature: 36.6,
            respiratory_rate: 16,
        }
    }

    fn seeded_simulator(config: MonitorConfig, seed: u64) -> VitalsSimulator {
        VitalsSimulator::with_rng(config, StdRng::seed_from_u64(seed))
    }

    // ── Window invariants ─────────────────────────────────────────────────────

    /// The window never exceeds its capacity, no matter how many ticks run.
    #[test]
    fn window_never_exceeds_capacity() {
        let mut sim = seeded_simulator(MonitorConfig::default(), 7);
        sim.focus(&make_patient("P-0001", &[]), now());

        for i in 0..100 {
            sim.tick(now() + chrono::Duration::seconds(2 * (i + 1)));
            assert!(sim.window().len() <= 30, "window exceeded capacity at tick {}", i);
        }
        assert_eq!(sim.window().len(), 30);
    }

    #[test]
    fn custom_capacity_is_respected() {
        let config = MonitorConfig {
            window_capacity: 10,
            warmup_samples: 5,
            ..MonitorConfig::default()
        };
        let mut sim = seeded_simulator(config, 7);
        sim.focus(&make_patient("P-0001", &[]), now());
        assert_eq!(sim.window().len(), 5, "focus pre-fills exactly warmup_samples");

        for i in 0..20 {
            sim.tick(now() + chrono::Duration::seconds(2 * (i + 1)));
        }
        assert_eq!(sim.window().len(), 10);
    }

    /// Switching patients is a full reset: old readings never leak across.
    #[test]
    fn focus_switch_resets_the_window() {
        let mut sim = seeded_simulator(MonitorConfig::default(), 7);
        sim.focus(&make_patient("P-0001", &[]), now());
        for i in 0..8 {
            sim.tick(now() + chrono::Duration::seconds(2 * (i + 1)));
        }
        assert_eq!(sim.window().len(), 28);

        let second = make_patient("P-0002", &["Hypertension"]);
        sim.focus(&second, now());
        assert_eq!(sim.window().len(), 20, "fresh focus holds only the warmup readings");
        assert_eq!(sim.focused(), Some(&second.id));
    }

    #[test]
    fn warmup_timestamps_ascend_and_precede_now() {
        let mut sim = seeded_simulator(MonitorConfig::default(), 7);
        sim.focus(&make_patient("P-0001", &[]), now());

        let stamps: Vec<_> = sim.window().iter().map(|r| r.timestamp).collect();
        for pair in stamps.windows(2) {
            assert!(pair[0] < pair[1], "warmup readings must ascend in time");
        }
        assert!(*stamps.last().unwrap() < now());
    }

    // ── Jitter bounds ─────────────────────────────────────────────────────────

    /// Every generated value stays within `base ± jitter` of the active
    /// profile, and temperature carries one decimal place.
    #[test]
    fn readings_stay_within_jitter_bounds() {
        let mut sim = seeded_simulator(MonitorConfig::default(), 11);
        sim.focus(&make_patient("P-0001", &[]), now());

        for i in 0..200 {
            let r = sim.tick(now() + chrono::Duration::seconds(2 * (i + 1)));
            assert!((60..=90).contains(&r.heart_rate), "hr {} out of bounds", r.heart_rate);
            assert!((100..=140).contains(&r.systolic), "sys {} out of bounds", r.systolic);
            assert!((68..=88).contains(&r.diastolic), "dia {} out of bounds", r.diastolic);
            assert!((94..=100).contains(&r.spo2), "spo2 {} out of bounds", r.spo2);
            assert!((12..=20).contains(&r.respiratory_rate));
            assert!((36.0..=37.2).contains(&r.temperature));
            // One decimal place exactly.
            let scaled = r.temperature * 10.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn hypertensive_patients_get_the_shifted_profile() {
        let mut sim = seeded_simulator(MonitorConfig::default(), 11);
        sim.focus(&make_patient("P-0002", &["Hypertension (Stage 1)"]), now());

        for i in 0..200 {
            let r = sim.tick(now() + chrono::Duration::seconds(2 * (i + 1)));
            assert!((125..=165).contains(&r.systolic), "sys {} out of bounds", r.systolic);
            assert!((67..=97).contains(&r.heart_rate), "hr {} out of bounds", r.heart_rate);
            assert!((82..=102).contains(&r.diastolic), "dia {} out of bounds", r.diastolic);
        }
    }

    /// The same seed produces the same sequence end to end.
    #[test]
    fn seeded_runs_are_reproducible() {
        let patient = make_patient("P-0001", &["Hypertension"]);

        let mut a = seeded_simulator(MonitorConfig::default(), 42);
        let mut b = seeded_simulator(MonitorConfig::default(), 42);
        a.focus(&patient, now());
        b.focus(&patient, now());
        for i in 0..10 {
            let t = now() + chrono::Duration::seconds(2 * (i + 1));
            assert_eq!(a.tick(t), b.tick(t));
        }
    }

    // ── Classification ────────────────────────────────────────────────────────

    #[test]
    fn classification_thresholds() {
        // Normal through the middle of every band.
        assert_eq!(classify(&make_reading(75, 120, 97)), VitalStatus::Normal);

        // Heart rate boundaries.
        assert_eq!(classify(&make_reading(100, 120, 97)), VitalStatus::Normal);
        assert_eq!(classify(&make_reading(101, 120, 97)), VitalStatus::Warning);
        assert_eq!(classify(&make_reading(120, 120, 97)), VitalStatus::Warning);
        assert_eq!(classify(&make_reading(121, 120, 97)), VitalStatus::Critical);
        assert_eq!(classify(&make_reading(60, 120, 97)), VitalStatus::Normal);
        assert_eq!(classify(&make_reading(59, 120, 97)), VitalStatus::Warning);
        assert_eq!(classify(&make_reading(50, 120, 97)), VitalStatus::Warning);
        assert_eq!(classify(&make_reading(49, 120, 97)), VitalStatus::Critical);

        // Systolic boundaries.
        assert_eq!(classify(&make_reading(75, 141, 97)), VitalStatus::Warning);
        assert_eq!(classify(&make_reading(75, 181, 97)), VitalStatus::Critical);
        assert_eq!(classify(&make_reading(75, 89, 97)), VitalStatus::Warning);
        assert_eq!(classify(&make_reading(75, 79, 97)), VitalStatus::Critical);

        // SpO2 boundaries.
        assert_eq!(classify(&make_reading(75, 120, 95)), VitalStatus::Normal);
        assert_eq!(classify(&make_reading(75, 120, 94)), VitalStatus::Warning);
        assert_eq!(classify(&make_reading(75, 120, 90)), VitalStatus::Warning);
        assert_eq!(classify(&make_reading(75, 120, 89)), VitalStatus::Critical);
    }

    #[test]
    fn tile_flags_track_their_own_vitals() {
        let mut reading = make_reading(75, 120, 97);
        reading.temperature = 37.6;
        reading.respiratory_rate = 21;

        let f = flags(&reading);
        assert!(!f.heart_rate);
        assert!(!f.blood_pressure);
        assert!(!f.spo2);
        assert!(f.temperature);
        assert!(f.respiratory_rate);
    }

    // ── Config loading ────────────────────────────────────────────────────────

    #[test]
    fn default_config_is_valid() {
        MonitorConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = MonitorConfig::from_toml_str(
            r#"
            window_capacity = 60

            [hypertensive_shift]
            systolic = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.window_capacity, 60);
        assert_eq!(config.hypertensive_shift.systolic, 30);
        // Unnamed fields keep their defaults.
        assert_eq!(config.warmup_samples, 20);
        assert_eq!(config.hypertensive_shift.heart_rate, 7);
        assert_eq!(config.baseline.systolic, 120);

        // The shift composes with the baseline.
        let shifted = config.baseline.shifted(&config.hypertensive_shift);
        assert_eq!(shifted.systolic, 150);
        assert_eq!(shifted.heart_rate, 82);
        assert_eq!(shifted.spo2, config.baseline.spo2);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let result = MonitorConfig::from_toml_str("window_capacity = 0");
        match result {
            Err(PulsewardError::Config { reason }) => {
                assert!(reason.contains("window_capacity"), "unexpected reason: {reason}");
            }
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn warmup_larger_than_capacity_is_rejected() {
        let result = MonitorConfig::from_toml_str(
            r#"
            window_capacity = 10
            warmup_samples = 11
            "#,
        );
        match result {
            Err(PulsewardError::Config { reason }) => {
                assert!(reason.contains("exceeds window_capacity"));
            }
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let result = MonitorConfig::from_toml_str("this is not valid toml ][[[");
        match result {
            Err(PulsewardError::Config { reason }) => {
                assert!(reason.contains("failed to parse monitor config TOML"));
            }
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    // ── Device fleet ──────────────────────────────────────────────────────────

    #[test]
    fn pairing_devices_connect_on_the_next_tick() {
        let mut fleet = DeviceFleet::with_rng(StdRng::seed_from_u64(3));
        assert_eq!(fleet.connected_count(), 4);

        // dev-4 starts disconnected: toggling puts it into Pairing.
        assert_eq!(fleet.toggle("dev-4"), Some(DeviceStatus::Pairing));
        assert_eq!(fleet.connected_count(), 4);

        fleet.tick();
        let dev = fleet.devices().iter().find(|d| d.id == "dev-4").unwrap();
        assert_eq!(dev.status, DeviceStatus::Connected);
        assert_eq!(fleet.connected_count(), 5);
    }

    #[test]
    fn disconnecting_drops_signal_to_zero() {
        let mut fleet = DeviceFleet::with_rng(StdRng::seed_from_u64(3));
        assert_eq!(fleet.toggle("dev-1"), Some(DeviceStatus::Disconnected));
        let dev = fleet.devices().iter().find(|d| d.id == "dev-1").unwrap();
        assert_eq!(dev.signal, 0);
    }

    #[test]
    fn battery_floors_at_five_and_signal_stays_in_band() {
        let mut fleet = DeviceFleet::with_rng(StdRng::seed_from_u64(3));
        for _ in 0..500 {
            fleet.tick();
        }
        for dev in fleet.devices() {
            assert!(dev.battery >= 5, "{} battery drained past the floor", dev.id);
            if dev.status == DeviceStatus::Connected {
                assert!((60..=100).contains(&dev.signal), "{} signal out of band", dev.id);
            }
        }
    }

    #[test]
    fn toggling_an_unknown_device_is_none() {
        let mut fleet = DeviceFleet::with_rng(StdRng::seed_from_u64(3));
        assert_eq!(fleet.toggle("dev-99"), None);
    }
}
