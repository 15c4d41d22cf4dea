//! The in-memory hospital record store.
//!
//! `HospitalRegistry` keeps every record collection in a single
//! `RegistryState` behind an `Arc<Mutex<_>>`, so the demo CLI, the
//! dashboard, and the simulators can share one handle. There are no
//! transactional guarantees: mutations are applied in place and the last
//! writer wins.
//!
//! Read paths are total. An unknown id yields `None` or an empty list;
//! callers render a default instead of failing. Write paths return
//! `PulsewardResult` because a poisoned lock means a writer panicked
//! mid-mutation and the contents can no longer be trusted.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use pulseward_domain::{
    billing::{Invoice, InvoiceStatus},
    error::{PulsewardError, PulsewardResult},
    ids::{AppointmentId, DoctorId, InvoiceId, PatientId},
    patient::{Patient, PatientStatus},
    records::Prescription,
    scheduling::{Appointment, AppointmentStatus},
    staff::{Doctor, StaffMember},
};

// ── Internal mutable state ────────────────────────────────────────────────────

/// The mutable interior of a `HospitalRegistry`.
///
/// Patient inserts go to the front so the registry lists newest
/// registrations first; every other collection appends.
pub(crate) struct RegistryState {
    pub(crate) patients: Vec<Patient>,
    pub(crate) doctors: Vec<Doctor>,
    pub(crate) staff: Vec<StaffMember>,
    pub(crate) appointments: Vec<Appointment>,
    pub(crate) prescriptions: Vec<Prescription>,
    pub(crate) invoices: Vec<Invoice>,
}

impl RegistryState {
    fn empty() -> Self {
        Self {
            patients: Vec::new(),
            doctors: Vec::new(),
            staff: Vec::new(),
            appointments: Vec::new(),
            prescriptions: Vec::new(),
            invoices: Vec::new(),
        }
    }
}

// ── Aggregates ────────────────────────────────────────────────────────────────

/// Headline counts for the whole registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusSummary {
    pub patients: usize,
    pub doctors: usize,
    pub staff: usize,
    pub appointments: usize,
    pub prescriptions: usize,
    pub invoices: usize,
}

/// Per-doctor workload summary for the doctor dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorWorkload {
    pub doctor_id: DoctorId,
    /// Distinct patients seen across all of the doctor's appointments.
    pub patient_count: usize,
    pub scheduled: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub prescriptions: usize,
    /// Completed appointments as a rounded percentage of all appointments;
    /// zero when the doctor has no appointments at all.
    pub completion_rate: u32,
    /// Appointment count per service, alphabetical by service name.
    pub service_mix: Vec<(String, usize)>,
}

// ── Public handle ─────────────────────────────────────────────────────────────

/// Clone-cheap handle to the shared record store.
#[derive(Clone)]
pub struct HospitalRegistry {
    state: Arc<Mutex<RegistryState>>,
}

impl HospitalRegistry {
    /// An empty registry.
    pub fn empty() -> Self {
        Self { state: Arc::new(Mutex::new(RegistryState::empty())) }
    }

    /// A registry preloaded with the fictional seed census.
    pub fn with_seed_data() -> Self {
        let registry = Self::empty();
        {
            let mut state = registry.state.lock().expect("registry lock poisoned");
            state.patients = crate::seed::patients();
            state.doctors = crate::seed::doctors();
            state.staff = crate::seed::staff();
            state.appointments = crate::seed::appointments();
            state.prescriptions = crate::seed::prescriptions();
            state.invoices = crate::seed::invoices();
        }
        registry
    }

    fn read(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().expect("registry lock poisoned")
    }

    fn write(&self) -> PulsewardResult<MutexGuard<'_, RegistryState>> {
        self.state.lock().map_err(|e| PulsewardError::Store {
            reason: format!("registry lock poisoned: {}", e),
        })
    }

    // ── Reads ─────────────────────────────────────────────────────────────────

    pub fn patients(&self) -> Vec<Patient> {
        self.read().patients.clone()
    }

    pub fn patient(&self, id: &PatientId) -> Option<Patient> {
        self.read().patients.iter().find(|p| &p.id == id).cloned()
    }

    pub fn doctors(&self) -> Vec<Doctor> {
        self.read().doctors.clone()
    }

    pub fn doctor(&self, id: &DoctorId) -> Option<Doctor> {
        self.read().doctors.iter().find(|d| &d.id == id).cloned()
    }

    pub fn staff(&self) -> Vec<StaffMember> {
        self.read().staff.clone()
    }

    pub fn appointments(&self) -> Vec<Appointment> {
        self.read().appointments.clone()
    }

    pub fn appointments_for_doctor(&self, id: &DoctorId) -> Vec<Appointment> {
        self.read()
            .appointments
            .iter()
            .filter(|a| &a.doctor_id == id)
            .cloned()
            .collect()
    }

    pub fn prescriptions(&self) -> Vec<Prescription> {
        self.read().prescriptions.clone()
    }

    pub fn prescriptions_for_patient(&self, id: &PatientId) -> Vec<Prescription> {
        self.read()
            .prescriptions
            .iter()
            .filter(|rx| &rx.patient_id == id)
            .cloned()
            .collect()
    }

    pub fn invoices(&self) -> Vec<Invoice> {
        self.read().invoices.clone()
    }

    pub fn invoices_for_patient(&self, id: &PatientId) -> Vec<Invoice> {
        self.read()
            .invoices
            .iter()
            .filter(|inv| &inv.patient_id == id)
            .cloned()
            .collect()
    }

    pub fn census(&self) -> CensusSummary {
        let state = self.read();
        CensusSummary {
            patients: state.patients.len(),
            doctors: state.doctors.len(),
            staff: state.staff.len(),
            appointments: state.appointments.len(),
            prescriptions: state.prescriptions.len(),
            invoices: state.invoices.len(),
        }
    }

    // ── Writes ────────────────────────────────────────────────────────────────

    /// Add a newly registered patient at the front of the list.
    pub fn register_patient(&self, patient: Patient) -> PulsewardResult<()> {
        let mut state = self.write()?;
        info!(patient_id = %patient.id, name = %patient.name, "patient registered");
        state.patients.insert(0, patient);
        Ok(())
    }

    /// Mark a patient as discharged. Returns false for an unknown id.
    pub fn discharge_patient(&self, id: &PatientId) -> PulsewardResult<bool> {
        let mut state = self.write()?;
        match state.patients.iter_mut().find(|p| &p.id == id) {
            Some(patient) => {
                patient.status = PatientStatus::Discharged;
                info!(patient_id = %id, "patient discharged");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn schedule_appointment(&self, appointment: Appointment) -> PulsewardResult<()> {
        let mut state = self.write()?;
        info!(
            appointment_id = %appointment.id,
            patient_id = %appointment.patient_id,
            doctor_id = %appointment.doctor_id,
            date = %appointment.date,
            "appointment scheduled"
        );
        state.appointments.push(appointment);
        Ok(())
    }

    /// Move a scheduled appointment to Completed.
    ///
    /// Returns false when the id is unknown or the appointment is already in
    /// a terminal state.
    pub fn complete_appointment(&self, id: &AppointmentId) -> PulsewardResult<bool> {
        self.transition_appointment(id, AppointmentStatus::Completed)
    }

    /// Move a scheduled appointment to Cancelled.
    pub fn cancel_appointment(&self, id: &AppointmentId) -> PulsewardResult<bool> {
        self.transition_appointment(id, AppointmentStatus::Cancelled)
    }

    fn transition_appointment(
        &self,
        id: &AppointmentId,
        to: AppointmentStatus,
    ) -> PulsewardResult<bool> {
        let mut state = self.write()?;
        match state.appointments.iter_mut().find(|a| &a.id == id) {
            Some(appt) if appt.status == AppointmentStatus::Scheduled => {
                appt.status = to;
                info!(appointment_id = %id, status = ?to, "appointment transitioned");
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn add_prescription(&self, prescription: Prescription) -> PulsewardResult<()> {
        let mut state = self.write()?;
        info!(
            prescription_id = %prescription.id,
            patient_id = %prescription.patient_id,
            "prescription recorded"
        );
        state.prescriptions.push(prescription);
        Ok(())
    }

    pub fn add_invoice(&self, invoice: Invoice) -> PulsewardResult<()> {
        let mut state = self.write()?;
        info!(
            invoice_id = %invoice.id,
            patient_id = %invoice.patient_id,
            total_cents = invoice.total_cents(),
            "invoice raised"
        );
        state.invoices.push(invoice);
        Ok(())
    }

    /// Settle a pending or overdue invoice.
    ///
    /// Returns true when the invoice transitioned to Paid; false for an
    /// unknown id or an invoice that is already Paid (settling twice is a
    /// no-op, not an error).
    pub fn record_payment(&self, id: &InvoiceId, method: &str) -> PulsewardResult<bool> {
        let mut state = self.write()?;
        match state.invoices.iter_mut().find(|inv| &inv.id == id) {
            Some(invoice) if invoice.status != InvoiceStatus::Paid => {
                invoice.status = InvoiceStatus::Paid;
                invoice.payment_method = Some(method.to_string());
                info!(invoice_id = %id, method = %method, "invoice settled");
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    // ── Aggregation ───────────────────────────────────────────────────────────

    /// Workload summary for one doctor, as shown on the doctor dashboard.
    ///
    /// Total function: an unknown doctor id yields an all-zero summary.
    pub fn doctor_workload(&self, id: &DoctorId) -> DoctorWorkload {
        let state = self.read();

        let appointments: Vec<&Appointment> =
            state.appointments.iter().filter(|a| &a.doctor_id == id).collect();

        let mut unique_patients: Vec<&PatientId> =
            appointments.iter().map(|a| &a.patient_id).collect();
        unique_patients.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        unique_patients.dedup();

        let scheduled = appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Scheduled)
            .count();
        let completed = appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Completed)
            .count();
        let cancelled = appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Cancelled)
            .count();

        let prescriptions = state
            .prescriptions
            .iter()
            .filter(|rx| &rx.doctor_id == id)
            .count();

        let completion_rate = if appointments.is_empty() {
            0
        } else {
            ((completed as f64 / appointments.len() as f64) * 100.0).round() as u32
        };

        let mut mix: BTreeMap<String, usize> = BTreeMap::new();
        for appt in &appointments {
            *mix.entry(appt.service.clone()).or_insert(0) += 1;
        }

        DoctorWorkload {
            doctor_id: id.clone(),
            patient_count: unique_patients.len(),
            scheduled,
            completed,
            cancelled,
            prescriptions,
            completion_rate,
            service_mix: mix.into_iter().collect(),
        }
    }

    /// Prescription statuses for a patient as of `today`, newest first.
    pub fn prescription_statuses(
        &self,
        id: &PatientId,
        today: NaiveDate,
    ) -> Vec<(Prescription, pulseward_domain::records::PrescriptionStatus)> {
        let mut list: Vec<_> = self
            .prescriptions_for_patient(id)
            .into_iter()
            .map(|rx| {
                let status = rx.status_on(today);
                (rx, status)
            })
            .collect();
        list.sort_by(|a, b| b.0.date.cmp(&a.0.date));
        list
    }
}
