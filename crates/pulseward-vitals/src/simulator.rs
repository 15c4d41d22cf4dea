//! The per-patient vitals simulator.
//!
//! One simulator tracks one patient at a time. Each tick applies bounded
//! uniform jitter to the active baseline profile and appends the reading to
//! a fixed-capacity window (drop-oldest). Switching patients is a full
//! reset: the window is cleared, the baseline profile re-derived, and the
//! window pre-filled so a chart renders immediately.
//!
//! Generation is total; there is no error path. With a seeded RNG the whole
//! sequence is reproducible.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use pulseward_domain::{
    ids::PatientId,
    patient::Patient,
    telemetry::VitalSign,
};

use crate::config::{MonitorConfig, VitalBaselines};

/// What the simulator remembers about the focused patient.
#[derive(Debug, Clone)]
struct Focus {
    id: PatientId,
    name: String,
    hypertensive: bool,
}

/// Synthetic reading generator with a bounded rolling window.
pub struct VitalsSimulator {
    config: MonitorConfig,
    rng: StdRng,
    focus: Option<Focus>,
    window: VecDeque<VitalSign>,
}

impl VitalsSimulator {
    /// Simulator seeded from entropy.
    pub fn new(config: MonitorConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Simulator with a caller-supplied RNG, for reproducible sequences.
    pub fn with_rng(config: MonitorConfig, rng: StdRng) -> Self {
        Self { config, rng, focus: None, window: VecDeque::new() }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Switch the simulator to `patient`, resetting all prior state.
    ///
    /// The window is cleared and pre-filled with `warmup_samples` readings
    /// backdated at the sample interval, ending just before `now`.
    pub fn focus(&mut self, patient: &Patient, now: DateTime<Utc>) {
        let hypertensive = patient.is_hypertensive();
        debug!(
            patient_id = %patient.id,
            hypertensive,
            "vitals simulator focused on patient"
        );

        self.focus = Some(Focus {
            id: patient.id.clone(),
            name: patient.name.clone(),
            hypertensive,
        });
        self.window.clear();

        let interval = self.config.sample_interval_secs as i64;
        let warmup = self.config.warmup_samples;
        for i in 0..warmup {
            let offset = Duration::seconds(interval * (warmup - i) as i64);
            let reading = self.generate(now - offset);
            self.push(reading);
        }
    }

    /// Generate one reading at `now` and append it to the window.
    pub fn tick(&mut self, now: DateTime<Utc>) -> VitalSign {
        let reading = self.generate(now);
        self.push(reading.clone());
        reading
    }

    /// Readings oldest to newest.
    pub fn window(&self) -> &VecDeque<VitalSign> {
        &self.window
    }

    /// The most recent reading, if any have been generated.
    pub fn latest(&self) -> Option<&VitalSign> {
        self.window.back()
    }

    /// Id of the focused patient, if one has been set.
    pub fn focused(&self) -> Option<&PatientId> {
        self.focus.as_ref().map(|f| &f.id)
    }

    /// Name of the focused patient, for display.
    pub fn focused_name(&self) -> Option<&str> {
        self.focus.as_ref().map(|f| f.name.as_str())
    }

    fn push(&mut self, reading: VitalSign) {
        self.window.push_back(reading);
        while self.window.len() > self.config.window_capacity {
            self.window.pop_front();
        }
    }

    fn generate(&mut self, timestamp: DateTime<Utc>) -> VitalSign {
        let hypertensive = self.focus.as_ref().map(|f| f.hypertensive).unwrap_or(false);
        // Copy the active profile out so `jittered` can borrow the RNG mutably.
        let base: VitalBaselines = if hypertensive {
            self.config.baseline.shifted(&self.config.hypertensive_shift)
        } else {
            self.config.baseline.clone()
        };
        let jitter = self.config.jitter.clone();

        VitalSign {
            timestamp,
            heart_rate: self.jittered(base.heart_rate, jitter.heart_rate),
            systolic: self.jittered(base.systolic, jitter.systolic),
            diastolic: self.jittered(base.diastolic, jitter.diastolic),
            spo2: self.jittered(base.spo2, jitter.spo2),
            temperature: round_tenth(
                base.temperature + self.rng.gen_range(-jitter.temperature..=jitter.temperature),
            ),
            respiratory_rate: self.jittered(base.respiratory_rate, jitter.respiratory_rate),
        }
    }

    /// Uniform integer jitter in `base - span ..= base + span`, floored at 0.
    fn jittered(&mut self, base: u32, span: u32) -> u32 {
        if span == 0 {
            return base;
        }
        let offset = self.rng.gen_range(-(span as f64)..=span as f64);
        (base as f64 + offset).round().max(0.0) as u32
    }
}

/// Round to one decimal place, the precision the monitoring board displays.
fn round_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
