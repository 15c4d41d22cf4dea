//! The alert synthesizer.
//!
//! Six fixed scenario templates across three severities. Each draw picks a
//! uniformly random patient and template and fills in a randomized reading.
//! The scenarios are simulation-only; nothing here inspects real vitals.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use pulseward_domain::{
    alert::{Alert, AlertSeverity},
    ids::AlertId,
    patient::Patient,
};

/// Timer-driven random alert factory.
pub struct AlertGenerator {
    rng: StdRng,
}

impl Default for AlertGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertGenerator {
    /// Generator seeded from entropy.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Generator with a caller-supplied RNG, for reproducible draws.
    pub fn with_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Synthesize one alert against a random patient from `patients`.
    ///
    /// Returns `None` only for an empty roster.
    pub fn synthesize(&mut self, patients: &[Patient], now: DateTime<Utc>) -> Option<Alert> {
        let patient = patients.choose(&mut self.rng)?;

        let (severity, vital, value, message) = match self.rng.gen_range(0..6u8) {
            0 => (
                AlertSeverity::Critical,
                "Heart Rate",
                format!("{} bpm", 130 + self.rng.gen_range(0..30)),
                "Tachycardia detected — heart rate critically elevated",
            ),
            1 => (
                AlertSeverity::Critical,
                "SpO2",
                format!("{}%", 82 + self.rng.gen_range(0..6)),
                "Hypoxemia alert — oxygen saturation critically low",
            ),
            2 => (
                AlertSeverity::Critical,
                "Blood Pressure",
                format!(
                    "{}/{} mmHg",
                    190 + self.rng.gen_range(0..20),
                    100 + self.rng.gen_range(0..15)
                ),
                "Hypertensive crisis — immediate intervention required",
            ),
            3 => (
                AlertSeverity::Warning,
                "Temperature",
                format!("{:.1}°C", round_tenth(38.2 + self.rng.gen_range(0.0..1.5))),
                "Elevated body temperature detected",
            ),
            4 => (
                AlertSeverity::Warning,
                "Heart Rate",
                format!("{} bpm", 50 + self.rng.gen_range(0..8)),
                "Bradycardia warning — heart rate below normal",
            ),
            _ => (
                AlertSeverity::Info,
                "Blood Pressure",
                format!(
                    "{}/{} mmHg",
                    135 + self.rng.gen_range(0..10),
                    88 + self.rng.gen_range(0..5)
                ),
                "Mild blood pressure elevation noted",
            ),
        };

        Some(Alert {
            id: unique_id(now),
            patient_id: patient.id.clone(),
            patient_name: patient.name.clone(),
            severity,
            message: message.to_string(),
            vital: vital.to_string(),
            value,
            timestamp: now,
            acknowledged: false,
        })
    }
}

/// Build an id unique even for alerts minted in the same millisecond.
fn unique_id(now: DateTime<Utc>) -> AlertId {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    AlertId(format!("ALT-{}-{}", now.timestamp_millis(), &suffix[..4]))
}

fn round_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
