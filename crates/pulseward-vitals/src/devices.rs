//! Bedside device fleet simulation.
//!
//! Five fictional monitoring devices with battery, signal, and a small
//! connect/disconnect/pairing state machine. The fleet advances on the same
//! tick as the vitals simulator; a device left in Pairing connects on the
//! next tick.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// What kind of hardware a device is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceKind {
    HeartMonitor,
    BpCuff,
    PulseOximeter,
    Thermometer,
    Wearable,
}

/// Connection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Connected,
    Disconnected,
    Pairing,
}

/// One simulated bedside device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub kind: DeviceKind,
    pub status: DeviceStatus,
    /// Battery percentage; drains slowly, floored at 5.
    pub battery: u32,
    /// Signal strength percentage; 0 while disconnected, otherwise kept in
    /// the 60..=100 band.
    pub signal: u32,
    pub firmware: String,
    /// Fleet tick of the last successful sync.
    pub synced_at_tick: u64,
}

/// The simulated fleet.
pub struct DeviceFleet {
    devices: Vec<Device>,
    rng: StdRng,
    tick: u64,
}

impl DeviceFleet {
    /// The standard five-device ward setup. All data is fictional.
    pub fn standard() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        let devices = vec![
            Device {
                id: "dev-1".to_string(),
                name: "CardioSense Pro".to_string(),
                kind: DeviceKind::HeartMonitor,
                status: DeviceStatus::Connected,
                battery: 87,
                signal: 95,
                firmware: "v3.2.1".to_string(),
                synced_at_tick: 0,
            },
            Device {
                id: "dev-2".to_string(),
                name: "PressureGuard X1".to_string(),
                kind: DeviceKind::BpCuff,
                status: DeviceStatus::Connected,
                battery: 62,
                signal: 88,
                firmware: "v2.8.0".to_string(),
                synced_at_tick: 0,
            },
            Device {
                id: "dev-3".to_string(),
                name: "OxiPulse Mini".to_string(),
                kind: DeviceKind::PulseOximeter,
                status: DeviceStatus::Connected,
                battery: 45,
                signal: 72,
                firmware: "v1.5.3".to_string(),
                synced_at_tick: 0,
            },
            Device {
                id: "dev-4".to_string(),
                name: "ThermoSync IR".to_string(),
                kind: DeviceKind::Thermometer,
                status: DeviceStatus::Disconnected,
                battery: 12,
                signal: 0,
                firmware: "v1.2.0".to_string(),
                synced_at_tick: 0,
            },
            Device {
                id: "dev-5".to_string(),
                name: "HealthBand Ultra".to_string(),
                kind: DeviceKind::Wearable,
                status: DeviceStatus::Connected,
                battery: 93,
                signal: 98,
                firmware: "v4.0.2".to_string(),
                synced_at_tick: 0,
            },
        ];
        Self { devices, rng, tick: 0 }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn connected_count(&self) -> usize {
        self.devices
            .iter()
            .filter(|d| d.status == DeviceStatus::Connected)
            .count()
    }

    /// Advance the fleet one tick.
    ///
    /// Pairing devices finish connecting. Every device has a 1-in-5 chance
    /// of losing one battery point (floor 5); connected devices get a small
    /// signal fluctuation clamped to 60..=100 and a fresh sync mark.
    pub fn tick(&mut self) {
        self.tick += 1;
        for device in &mut self.devices {
            if device.status == DeviceStatus::Pairing {
                device.status = DeviceStatus::Connected;
                device.signal = 85;
            }

            if self.rng.gen_bool(0.2) && device.battery > 5 {
                device.battery -= 1;
            }

            if device.status == DeviceStatus::Connected {
                let drift: i64 = self.rng.gen_range(-3..=3);
                device.signal = (device.signal as i64 + drift).clamp(60, 100) as u32;
                device.synced_at_tick = self.tick;
            }
        }
    }

    /// Flip a device's connection state.
    ///
    /// Connected devices disconnect immediately (signal drops to 0);
    /// disconnected devices enter Pairing and connect on the next tick.
    /// Toggling a device that is already pairing does nothing. Returns the
    /// new status, or `None` for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Option<DeviceStatus> {
        let device = self.devices.iter_mut().find(|d| d.id == id)?;
        match device.status {
            DeviceStatus::Connected => {
                device.status = DeviceStatus::Disconnected;
                device.signal = 0;
            }
            DeviceStatus::Disconnected => {
                device.status = DeviceStatus::Pairing;
            }
            DeviceStatus::Pairing => {}
        }
        Some(device.status)
    }
}
