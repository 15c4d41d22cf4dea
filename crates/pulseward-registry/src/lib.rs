//! # pulseward-registry
//!
//! The in-memory hospital record store: patients, doctors, staff,
//! appointments, prescriptions, and invoices, plus the fictional seed
//! census the demos run against.
//!
//! ## Overview
//!
//! [`HospitalRegistry`] is a clone-cheap handle over a single locked state
//! block. Reads are total (unknown ids yield `None`/empty); writes return
//! `PulsewardResult` and fail only if the lock is poisoned. There is no
//! persistence and no transactional isolation: every collection is a plain
//! in-memory list mutated in place.

mod seed;
pub mod store;

pub use store::{CensusSummary, DoctorWorkload, HospitalRegistry};

// ── Tests ─────────────────────────────────────────────────────────────────────
