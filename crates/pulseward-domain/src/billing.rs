//! Billing records.
//!
//! Monetary amounts are integer cents throughout. Nothing in this module
//! talks to a payment provider; invoices are plain in-memory records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{InvoiceId, PatientId};

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
}

/// One billable item on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub amount_cents: i64,
}

/// A billing invoice raised against a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub patient_id: PatientId,
    pub date: NaiveDate,
    pub items: Vec<LineItem>,
    pub status: InvoiceStatus,
    /// How the invoice was settled, once it has been.
    pub payment_method: Option<String>,
}

impl Invoice {
    /// Sum of all line items, in cents.
    pub fn total_cents(&self) -> i64 {
        self.items.iter().map(|item| item.amount_cents).sum()
    }
}
