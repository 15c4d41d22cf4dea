//! TOML-driven monitoring configuration.
//!
//! `MonitorConfig` carries the simulator's tuning: the baseline profile, the
//! hypertensive shift, jitter spans, window sizing, and tick intervals.
//! Every field has a default, so a config file only needs to name what it
//! overrides:
//!
//! ```toml
//! window_capacity = 60
//!
//! [hypertensive_shift]
//! systolic = 30
//! ```
//!
//! Loading validates the result before anything consumes it; a zero-sized
//! window or interval is rejected up front rather than surfacing later as a
//! stalled chart.

use std::path::Path;

use serde::{Deserialize, Serialize};

use pulseward_domain::error::{PulsewardError, PulsewardResult};

/// Baseline values one reading jitters around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalBaselines {
    pub heart_rate: u32,
    pub systolic: u32,
    pub diastolic: u32,
    pub spo2: u32,
    pub respiratory_rate: u32,
    pub temperature: f64,
}

impl Default for VitalBaselines {
    fn default() -> Self {
        Self {
            heart_rate: 75,
            systolic: 120,
            diastolic: 78,
            spo2: 97,
            respiratory_rate: 16,
            temperature: 36.6,
        }
    }
}

impl VitalBaselines {
    /// Apply the hypertensive shift, flooring each vital at zero.
    pub fn shifted(&self, shift: &HypertensiveShift) -> Self {
        let apply = |base: u32, delta: i32| (base as i64 + delta as i64).max(0) as u32;
        Self {
            heart_rate: apply(self.heart_rate, shift.heart_rate),
            systolic: apply(self.systolic, shift.systolic),
            diastolic: apply(self.diastolic, shift.diastolic),
            ..self.clone()
        }
    }
}

/// Fixed offset applied to the baseline when the focused patient has a
/// hypertension condition on record.
///
/// Only heart rate and blood pressure shift; SpO2, temperature, and
/// respiratory rate stay on the normal profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HypertensiveShift {
    pub heart_rate: i32,
    pub systolic: i32,
    pub diastolic: i32,
}

impl Default for HypertensiveShift {
    fn default() -> Self {
        Self { heart_rate: 7, systolic: 25, diastolic: 14 }
    }
}

/// Half-width of the uniform jitter applied around each baseline.
///
/// A reading lands in `base - span ..= base + span`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalJitter {
    pub heart_rate: u32,
    pub systolic: u32,
    pub diastolic: u32,
    pub spo2: u32,
    pub respiratory_rate: u32,
    pub temperature: f64,
}

impl Default for VitalJitter {
    fn default() -> Self {
        Self {
            heart_rate: 15,
            systolic: 20,
            diastolic: 10,
            spo2: 3,
            respiratory_rate: 4,
            temperature: 0.6,
        }
    }
}

/// The full monitoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Maximum readings retained per patient window.
    pub window_capacity: usize,
    /// Readings pre-filled when the simulator switches patients, so a chart
    /// is populated immediately.
    pub warmup_samples: usize,
    /// Seconds between readings.
    pub sample_interval_secs: u64,
    /// Seconds between synthesized alerts.
    pub alert_interval_secs: u64,
    pub baseline: VitalBaselines,
    pub hypertensive_shift: HypertensiveShift,
    pub jitter: VitalJitter,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            window_capacity: 30,
            warmup_samples: 20,
            sample_interval_secs: 2,
            alert_interval_secs: 8,
            baseline: VitalBaselines::default(),
            hypertensive_shift: HypertensiveShift::default(),
            jitter: VitalJitter::default(),
        }
    }
}

impl MonitorConfig {
    /// Parse `s` as TOML and validate the result.
    ///
    /// Returns `PulsewardError::Config` if the TOML is malformed or the
    /// values fail validation.
    pub fn from_toml_str(s: &str) -> PulsewardResult<Self> {
        let config: MonitorConfig = toml::from_str(s).map_err(|e| PulsewardError::Config {
            reason: format!("failed to parse monitor config TOML: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read the file at `path` and parse it as monitoring configuration.
    pub fn from_file(path: &Path) -> PulsewardResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| PulsewardError::Config {
            reason: format!("failed to read monitor config '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Reject configurations that cannot drive the simulator.
    pub fn validate(&self) -> PulsewardResult<()> {
        if self.window_capacity == 0 {
            return Err(PulsewardError::Config {
                reason: "window_capacity must be at least 1".to_string(),
            });
        }
        if self.warmup_samples > self.window_capacity {
            return Err(PulsewardError::Config {
                reason: format!(
                    "warmup_samples ({}) exceeds window_capacity ({})",
                    self.warmup_samples, self.window_capacity
                ),
            });
        }
        if self.sample_interval_secs == 0 {
            return Err(PulsewardError::Config {
                reason: "sample_interval_secs must be at least 1".to_string(),
            });
        }
        if self.alert_interval_secs == 0 {
            return Err(PulsewardError::Config {
                reason: "alert_interval_secs must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
