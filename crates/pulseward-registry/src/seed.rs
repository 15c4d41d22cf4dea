//! The fictional seed census.
//!
//! All data in this module is hardcoded and fictional. No record describes a
//! real person. The census is sized so that every part of the system has
//! something to chew on: patients span every risk band, one doctor is on
//! leave, prescriptions sit on both sides of the 30-day boundary, and
//! invoices exist in each payment state.

use chrono::NaiveDate;

use pulseward_domain::{
    billing::{Invoice, InvoiceStatus, LineItem},
    patient::{
        EmergencyContact, Gender, InsuranceDetails, MedicalHistory, Patient, PatientStatus,
    },
    records::{FollowUp, MedicationOrder, Prescription},
    scheduling::{Appointment, AppointmentStatus},
    staff::{Availability, Doctor, DoctorStatus, StaffMember, StaffRole},
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid seed date")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ── Patients ──────────────────────────────────────────────────────────────────

pub(crate) fn patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "P-1001".into(),
            name: "Margaret Okafor".to_string(),
            gender: Gender::Female,
            dob: d(1958, 3, 11),
            blood_type: "A+".to_string(),
            address: "14 Birchwood Lane, Riverton".to_string(),
            phone: "555-0142".to_string(),
            email: "m.okafor@example.org".to_string(),
            emergency_contact: EmergencyContact {
                name: "Chidi Okafor".to_string(),
                relationship: "son".to_string(),
                phone: "555-0143".to_string(),
            },
            medical_history: MedicalHistory {
                allergies: strings(&["Penicillin"]),
                conditions: strings(&["Hypertension", "Type 2 Diabetes"]),
                medications: strings(&["Lisinopril", "Metformin", "Atorvastatin"]),
                surgeries: strings(&["Cholecystectomy (2014)"]),
            },
            insurance: Some(InsuranceDetails {
                provider: "Meridian Health".to_string(),
                policy_number: "MH-88213".to_string(),
                expiry_date: "2027-04-30".to_string(),
            }),
            status: PatientStatus::Active,
            registered: d(2023, 9, 4),
        },
        Patient {
            id: "P-1002".into(),
            name: "Daniel Reyes".to_string(),
            gender: Gender::Male,
            dob: d(1971, 6, 20),
            blood_type: "O-".to_string(),
            address: "203 Halden Court, Riverton".to_string(),
            phone: "555-0177".to_string(),
            email: "d.reyes@example.org".to_string(),
            emergency_contact: EmergencyContact {
                name: "Lucia Reyes".to_string(),
                relationship: "spouse".to_string(),
                phone: "555-0178".to_string(),
            },
            medical_history: MedicalHistory {
                allergies: strings(&["Sulfa drugs"]),
                conditions: strings(&["Hypertension", "Asthma"]),
                medications: strings(&["Amlodipine", "Salbutamol", "Montelukast"]),
                surgeries: Vec::new(),
            },
            insurance: Some(InsuranceDetails {
                provider: "Cornerstone Mutual".to_string(),
                policy_number: "CM-44107".to_string(),
                expiry_date: "2026-11-15".to_string(),
            }),
            status: PatientStatus::Active,
            registered: d(2024, 1, 22),
        },
        Patient {
            id: "P-1003".into(),
            name: "Sofia Lindqvist".to_string(),
            gender: Gender::Female,
            dob: d(1989, 12, 2),
            blood_type: "B+".to_string(),
            address: "7 Aspen Row, Milldale".to_string(),
            phone: "555-0119".to_string(),
            email: "s.lindqvist@example.org".to_string(),
            emergency_contact: EmergencyContact {
                name: "Erik Lindqvist".to_string(),
                relationship: "brother".to_string(),
                phone: "555-0120".to_string(),
            },
            medical_history: MedicalHistory {
                allergies: strings(&["None"]),
                conditions: Vec::new(),
                medications: Vec::new(),
                surgeries: Vec::new(),
            },
            insurance: None,
            status: PatientStatus::Active,
            registered: d(2025, 5, 30),
        },
        Patient {
            id: "P-1004".into(),
            name: "Amara Haddad".to_string(),
            gender: Gender::Female,
            dob: d(1979, 8, 27),
            blood_type: "AB+".to_string(),
            address: "91 Ferris Road, Milldale".to_string(),
            phone: "555-0163".to_string(),
            email: "a.haddad@example.org".to_string(),
            emergency_contact: EmergencyContact {
                name: "Nadim Haddad".to_string(),
                relationship: "spouse".to_string(),
                phone: "555-0164".to_string(),
            },
            medical_history: MedicalHistory {
                allergies: strings(&["Latex", "Ibuprofen"]),
                conditions: strings(&["Chronic Migraine"]),
                medications: strings(&["Sumatriptan"]),
                surgeries: Vec::new(),
            },
            insurance: Some(InsuranceDetails {
                provider: "Meridian Health".to_string(),
                policy_number: "MH-91544".to_string(),
                expiry_date: "2026-12-31".to_string(),
            }),
            status: PatientStatus::Active,
            registered: d(2024, 7, 9),
        },
        Patient {
            id: "P-1005".into(),
            name: "Viktor Petrov".to_string(),
            gender: Gender::Male,
            dob: d(1966, 1, 15),
            blood_type: "O+".to_string(),
            address: "48 Quarry Street, Riverton".to_string(),
            phone: "555-0188".to_string(),
            email: "v.petrov@example.org".to_string(),
            emergency_contact: EmergencyContact {
                name: "Irina Petrova".to_string(),
                relationship: "daughter".to_string(),
                phone: "555-0189".to_string(),
            },
            medical_history: MedicalHistory {
                allergies: strings(&["None"]),
                conditions: strings(&["Iron-deficiency Anemia"]),
                medications: strings(&["Ferrous sulfate"]),
                surgeries: strings(&["Appendectomy (1998)"]),
            },
            insurance: None,
            status: PatientStatus::Discharged,
            registered: d(2022, 11, 17),
        },
        Patient {
            id: "P-1006".into(),
            name: "Elias Moreau".to_string(),
            gender: Gender::Male,
            dob: d(2001, 4, 6),
            blood_type: "A-".to_string(),
            address: "12 Copper Beech Close, Milldale".to_string(),
            phone: "555-0131".to_string(),
            email: "e.moreau@example.org".to_string(),
            emergency_contact: EmergencyContact {
                name: "Claire Moreau".to_string(),
                relationship: "mother".to_string(),
                phone: "555-0132".to_string(),
            },
            medical_history: MedicalHistory {
                allergies: strings(&["Peanuts"]),
                conditions: Vec::new(),
                medications: Vec::new(),
                surgeries: Vec::new(),
            },
            insurance: Some(InsuranceDetails {
                provider: "Cornerstone Mutual".to_string(),
                policy_number: "CM-50291".to_string(),
                expiry_date: "2027-02-28".to_string(),
            }),
            status: PatientStatus::Active,
            registered: d(2025, 10, 12),
        },
    ]
}

// ── Doctors ───────────────────────────────────────────────────────────────────

pub(crate) fn doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: "D-2001".into(),
            name: "Dr. Priya Raman".to_string(),
            specialization: "Cardiology".to_string(),
            department: "Cardiology".to_string(),
            qualification: "MD, FACC".to_string(),
            experience_years: 18,
            availability: Availability {
                days: strings(&["Mon", "Tue", "Thu"]),
                start_time: "08:30".to_string(),
                end_time: "16:00".to_string(),
            },
            status: DoctorStatus::Active,
        },
        Doctor {
            id: "D-2002".into(),
            name: "Dr. Samuel Adeyemi".to_string(),
            specialization: "Internal Medicine".to_string(),
            department: "General Medicine".to_string(),
            qualification: "MD".to_string(),
            experience_years: 11,
            availability: Availability {
                days: strings(&["Mon", "Wed", "Fri"]),
                start_time: "09:00".to_string(),
                end_time: "17:30".to_string(),
            },
            status: DoctorStatus::Active,
        },
        Doctor {
            id: "D-2003".into(),
            name: "Dr. Hanna Weiss".to_string(),
            specialization: "Pulmonology".to_string(),
            department: "Respiratory Medicine".to_string(),
            qualification: "MD, PhD".to_string(),
            experience_years: 14,
            availability: Availability {
                days: strings(&["Tue", "Wed", "Thu"]),
                start_time: "10:00".to_string(),
                end_time: "18:00".to_string(),
            },
            status: DoctorStatus::OnLeave,
        },
        Doctor {
            id: "D-2004".into(),
            name: "Dr. Tomas Ferreira".to_string(),
            specialization: "Endocrinology".to_string(),
            department: "General Medicine".to_string(),
            qualification: "MD".to_string(),
            experience_years: 7,
            availability: Availability {
                days: strings(&["Mon", "Tue", "Wed", "Fri"]),
                start_time: "08:00".to_string(),
                end_time: "15:30".to_string(),
            },
            status: DoctorStatus::Active,
        },
    ]
}

// ── Staff ─────────────────────────────────────────────────────────────────────

pub(crate) fn staff() -> Vec<StaffMember> {
    vec![
        StaffMember {
            id: "S-3001".into(),
            name: "Renata Kowalczyk".to_string(),
            role: StaffRole::Nurse,
            department: "Cardiology".to_string(),
            shift: "Day".to_string(),
            phone: "555-0201".to_string(),
        },
        StaffMember {
            id: "S-3002".into(),
            name: "Ibrahim Diallo".to_string(),
            role: StaffRole::Technician,
            department: "Diagnostics".to_string(),
            shift: "Day".to_string(),
            phone: "555-0202".to_string(),
        },
        StaffMember {
            id: "S-3003".into(),
            name: "June Park".to_string(),
            role: StaffRole::Administrator,
            department: "Front Desk".to_string(),
            shift: "Day".to_string(),
            phone: "555-0203".to_string(),
        },
        StaffMember {
            id: "S-3004".into(),
            name: "Mateo Crespo".to_string(),
            role: StaffRole::Pharmacist,
            department: "Pharmacy".to_string(),
            shift: "Night".to_string(),
            phone: "555-0204".to_string(),
        },
    ]
}

// ── Appointments ──────────────────────────────────────────────────────────────

pub(crate) fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "A-4001".into(),
            patient_id: "P-1001".into(),
            doctor_id: "D-2001".into(),
            date: d(2026, 7, 21),
            time: "09:15".to_string(),
            service: "Cardiology Consult".to_string(),
            notes: "Quarterly review of blood pressure control".to_string(),
            status: AppointmentStatus::Completed,
        },
        Appointment {
            id: "A-4002".into(),
            patient_id: "P-1001".into(),
            doctor_id: "D-2004".into(),
            date: d(2026, 8, 18),
            time: "11:00".to_string(),
            service: "Diabetes Review".to_string(),
            notes: "Bring latest HbA1c results".to_string(),
            status: AppointmentStatus::Scheduled,
        },
        Appointment {
            id: "A-4003".into(),
            patient_id: "P-1002".into(),
            doctor_id: "D-2001".into(),
            date: d(2026, 8, 11),
            time: "10:30".to_string(),
            service: "Cardiology Consult".to_string(),
            notes: String::new(),
            status: AppointmentStatus::Scheduled,
        },
        Appointment {
            id: "A-4004".into(),
            patient_id: "P-1002".into(),
            doctor_id: "D-2003".into(),
            date: d(2026, 6, 30),
            time: "14:00".to_string(),
            service: "Pulmonary Function Test".to_string(),
            notes: "Annual asthma assessment".to_string(),
            status: AppointmentStatus::Completed,
        },
        Appointment {
            id: "A-4005".into(),
            patient_id: "P-1003".into(),
            doctor_id: "D-2002".into(),
            date: d(2026, 8, 5),
            time: "09:00".to_string(),
            service: "General Checkup".to_string(),
            notes: String::new(),
            status: AppointmentStatus::Scheduled,
        },
        Appointment {
            id: "A-4006".into(),
            patient_id: "P-1004".into(),
            doctor_id: "D-2002".into(),
            date: d(2026, 7, 8),
            time: "15:45".to_string(),
            service: "General Checkup".to_string(),
            notes: "Migraine frequency follow-up".to_string(),
            status: AppointmentStatus::Cancelled,
        },
        Appointment {
            id: "A-4007".into(),
            patient_id: "P-1005".into(),
            doctor_id: "D-2002".into(),
            date: d(2026, 5, 19),
            time: "10:15".to_string(),
            service: "General Checkup".to_string(),
            notes: "Pre-discharge review".to_string(),
            status: AppointmentStatus::Completed,
        },
        Appointment {
            id: "A-4008".into(),
            patient_id: "P-1006".into(),
            doctor_id: "D-2002".into(),
            date: d(2026, 8, 25),
            time: "13:30".to_string(),
            service: "General Checkup".to_string(),
            notes: String::new(),
            status: AppointmentStatus::Scheduled,
        },
    ]
}

// ── Prescriptions ─────────────────────────────────────────────────────────────

pub(crate) fn prescriptions() -> Vec<Prescription> {
    vec![
        // Recent, with a follow-up still ahead.
        Prescription {
            id: "RX-5001".into(),
            patient_id: "P-1001".into(),
            doctor_id: "D-2001".into(),
            date: d(2026, 7, 21),
            diagnosis: "Hypertension, suboptimal control".to_string(),
            medications: vec![MedicationOrder {
                name: "Lisinopril".to_string(),
                dosage: "20 mg".to_string(),
                frequency: "once daily".to_string(),
                duration: "90 days".to_string(),
                instructions: "Take in the morning".to_string(),
            }],
            instructions: "Log home blood pressure readings twice daily".to_string(),
            follow_up: Some(FollowUp {
                date: d(2026, 10, 20),
                notes: "Reassess dose against home readings".to_string(),
            }),
        },
        // Recent, no follow-up: Active.
        Prescription {
            id: "RX-5002".into(),
            patient_id: "P-1002".into(),
            doctor_id: "D-2003".into(),
            date: d(2026, 7, 28),
            diagnosis: "Asthma, mild persistent".to_string(),
            medications: vec![
                MedicationOrder {
                    name: "Salbutamol".to_string(),
                    dosage: "100 mcg".to_string(),
                    frequency: "as needed".to_string(),
                    duration: "30 days".to_string(),
                    instructions: "Two puffs at onset of symptoms".to_string(),
                },
                MedicationOrder {
                    name: "Montelukast".to_string(),
                    dosage: "10 mg".to_string(),
                    frequency: "once daily".to_string(),
                    duration: "30 days".to_string(),
                    instructions: "Take in the evening".to_string(),
                },
            ],
            instructions: String::new(),
            follow_up: None,
        },
        // Stale (>30 days): Completed.
        Prescription {
            id: "RX-5003".into(),
            patient_id: "P-1005".into(),
            doctor_id: "D-2002".into(),
            date: d(2026, 5, 19),
            diagnosis: "Iron-deficiency anemia".to_string(),
            medications: vec![MedicationOrder {
                name: "Ferrous sulfate".to_string(),
                dosage: "325 mg".to_string(),
                frequency: "once daily".to_string(),
                duration: "60 days".to_string(),
                instructions: "Avoid taking with dairy".to_string(),
            }],
            instructions: "Recheck CBC in four weeks".to_string(),
            follow_up: None,
        },
    ]
}

// ── Invoices ──────────────────────────────────────────────────────────────────

pub(crate) fn invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: "INV-6001".into(),
            patient_id: "P-1001".into(),
            date: d(2026, 7, 21),
            items: vec![
                LineItem {
                    description: "Cardiology consultation".to_string(),
                    amount_cents: 22_000,
                },
                LineItem { description: "ECG".to_string(), amount_cents: 9_500 },
            ],
            status: InvoiceStatus::Paid,
            payment_method: Some("insurance".to_string()),
        },
        Invoice {
            id: "INV-6002".into(),
            patient_id: "P-1002".into(),
            date: d(2026, 7, 28),
            items: vec![LineItem {
                description: "Pulmonary function test".to_string(),
                amount_cents: 18_000,
            }],
            status: InvoiceStatus::Pending,
            payment_method: None,
        },
        Invoice {
            id: "INV-6003".into(),
            patient_id: "P-1005".into(),
            date: d(2026, 5, 19),
            items: vec![
                LineItem {
                    description: "General consultation".to_string(),
                    amount_cents: 12_000,
                },
                LineItem { description: "Blood panel".to_string(), amount_cents: 8_250 },
            ],
            status: InvoiceStatus::Overdue,
            payment_method: None,
        },
    ]
}
