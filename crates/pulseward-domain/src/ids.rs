//! Newtype identifiers for every record kind.
//!
//! Ids are opaque strings. Seeded records use human-readable tokens such as
//! "P-1001"; records created at runtime use [`generate`], which takes the
//! first eight hex characters of a UUID v4 and uppercases them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Produce a short, unique, uppercase record token (e.g. "3FA29B1C").
fn generate() -> String {
    let simple = uuid::Uuid::new_v4().simple().to_string();
    simple[..8].to_uppercase()
}

macro_rules! record_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            /// Create a fresh, unique id.
            pub fn generate() -> Self {
                Self(generate())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

record_id! {
    /// Identifier of a registered patient.
    PatientId
}

record_id! {
    /// Identifier of a doctor in the directory.
    DoctorId
}

record_id! {
    /// Identifier of a non-physician staff member.
    StaffId
}

record_id! {
    /// Identifier of a scheduled appointment.
    AppointmentId
}

record_id! {
    /// Identifier of an issued prescription.
    PrescriptionId
}

record_id! {
    /// Identifier of a billing invoice.
    InvoiceId
}

/// Identifier of a published alert.
///
/// Alert ids are not produced by [`generate`]; the alert synthesizer builds
/// them from the publication timestamp plus a random suffix so that two
/// alerts created in the same millisecond still differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlertId(pub String);

impl AlertId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AlertId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
