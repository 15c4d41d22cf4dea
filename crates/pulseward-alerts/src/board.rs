//! The acknowledgment board.
//!
//! `AlertBoard` keeps the most recent alerts newest-first behind an
//! `Arc<Mutex<_>>`, capped at [`ALERT_CAPACITY`]. Acknowledgment is
//! monotonic: an alert goes from unacknowledged to acknowledged exactly
//! once, and acknowledging one alert never touches another. Eviction drops
//! the oldest entries; nothing is ever persisted.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::info;

use pulseward_domain::{
    alert::{Alert, AlertSeverity},
    error::{PulsewardError, PulsewardResult},
    ids::AlertId,
    patient::Patient,
};

use crate::generator::AlertGenerator;

/// Most-recent alerts retained on the board.
pub const ALERT_CAPACITY: usize = 50;

struct BoardState {
    /// Newest first.
    alerts: Vec<Alert>,
}

/// Clone-cheap handle to the shared alert board.
#[derive(Clone)]
pub struct AlertBoard {
    state: Arc<Mutex<BoardState>>,
}

impl Default for AlertBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertBoard {
    pub fn new() -> Self {
        Self { state: Arc::new(Mutex::new(BoardState { alerts: Vec::new() })) }
    }

    fn read(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().expect("alert board lock poisoned")
    }

    fn write(&self) -> PulsewardResult<MutexGuard<'_, BoardState>> {
        self.state.lock().map_err(|e| PulsewardError::Store {
            reason: format!("alert board lock poisoned: {}", e),
        })
    }

    /// Prepend one alert, evicting past the capacity.
    pub fn publish(&self, alert: Alert) -> PulsewardResult<()> {
        let mut state = self.write()?;
        info!(
            alert_id = %alert.id,
            patient_id = %alert.patient_id,
            severity = %alert.severity.label(),
            vital = %alert.vital,
            "alert published"
        );
        state.alerts.insert(0, alert);
        state.alerts.truncate(ALERT_CAPACITY);
        Ok(())
    }

    /// Synthesize and publish `count` alerts, as the board does on startup.
    pub fn seed(
        &self,
        generator: &mut AlertGenerator,
        patients: &[Patient],
        count: usize,
        now: DateTime<Utc>,
    ) -> PulsewardResult<()> {
        for _ in 0..count {
            if let Some(alert) = generator.synthesize(patients, now) {
                self.publish(alert)?;
            }
        }
        Ok(())
    }

    /// Mark one alert acknowledged.
    ///
    /// Returns true when the alert transitioned; false when the id is
    /// unknown or the alert was already acknowledged.
    pub fn acknowledge(&self, id: &AlertId) -> PulsewardResult<bool> {
        let mut state = self.write()?;
        match state.alerts.iter_mut().find(|a| &a.id == id) {
            Some(alert) if !alert.acknowledged => {
                alert.acknowledged = true;
                info!(alert_id = %id, "alert acknowledged");
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Acknowledge everything; returns how many alerts transitioned.
    pub fn acknowledge_all(&self) -> PulsewardResult<usize> {
        let mut state = self.write()?;
        let mut transitioned = 0;
        for alert in state.alerts.iter_mut().filter(|a| !a.acknowledged) {
            alert.acknowledged = true;
            transitioned += 1;
        }
        if transitioned > 0 {
            info!(count = transitioned, "all alerts acknowledged");
        }
        Ok(transitioned)
    }

    /// Drop every acknowledged alert; returns how many were removed.
    pub fn clear_acknowledged(&self) -> PulsewardResult<usize> {
        let mut state = self.write()?;
        let before = state.alerts.len();
        state.alerts.retain(|a| !a.acknowledged);
        let removed = before - state.alerts.len();
        if removed > 0 {
            info!(count = removed, "acknowledged alerts cleared");
        }
        Ok(removed)
    }

    /// All alerts, newest first.
    pub fn snapshot(&self) -> Vec<Alert> {
        self.read().alerts.clone()
    }

    pub fn len(&self) -> usize {
        self.read().alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().alerts.is_empty()
    }

    /// Unacknowledged alerts.
    pub fn active_count(&self) -> usize {
        self.read().alerts.iter().filter(|a| !a.acknowledged).count()
    }

    /// Unacknowledged critical alerts.
    pub fn critical_count(&self) -> usize {
        self.read()
            .alerts
            .iter()
            .filter(|a| a.severity == AlertSeverity::Critical && !a.acknowledged)
            .count()
    }

    pub fn acknowledged_count(&self) -> usize {
        self.read().alerts.iter().filter(|a| a.acknowledged).count()
    }
}
