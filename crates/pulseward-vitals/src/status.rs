//! Reading classification thresholds.

use pulseward_domain::telemetry::{VitalSign, VitalStatus};

/// Classify one reading into its escalation band.
///
/// Critical: heart rate above 120 or below 50, systolic above 180 or below
/// 80, or SpO2 below 90. Warning: heart rate above 100 or below 60,
/// systolic above 140 or below 90, or SpO2 below 95. Everything else is
/// Normal. Temperature and respiratory rate flag individual tiles (see
/// [`flags`]) but do not escalate the overall band.
pub fn classify(reading: &VitalSign) -> VitalStatus {
    let hr = reading.heart_rate;
    let sys = reading.systolic;
    let spo2 = reading.spo2;

    if hr > 120 || hr < 50 || sys > 180 || sys < 80 || spo2 < 90 {
        VitalStatus::Critical
    } else if hr > 100 || hr < 60 || sys > 140 || sys < 90 || spo2 < 95 {
        VitalStatus::Warning
    } else {
        VitalStatus::Normal
    }
}

/// Per-tile warning flags for the vitals display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VitalFlags {
    pub heart_rate: bool,
    pub blood_pressure: bool,
    pub spo2: bool,
    pub temperature: bool,
    pub respiratory_rate: bool,
}

/// Which display tiles should warn for this reading.
pub fn flags(reading: &VitalSign) -> VitalFlags {
    VitalFlags {
        heart_rate: reading.heart_rate > 100 || reading.heart_rate < 60,
        blood_pressure: reading.systolic > 140,
        spo2: reading.spo2 < 95,
        temperature: reading.temperature > 37.5,
        respiratory_rate: reading.respiratory_rate > 20,
    }
}
