//! # pulseward-domain
//!
//! Shared record types and the error taxonomy for the pulseward workspace.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate beyond small derivation helpers on the records themselves
//! (ages, prescription status, invoice totals).

pub mod alert;
pub mod billing;
pub mod error;
pub mod ids;
pub mod patient;
pub mod records;
pub mod risk;
pub mod scheduling;
pub mod staff;
pub mod telemetry;
