//! pulseward — demo CLI
//!
//! Drives the hospital-operations core end to end against the fictional
//! seed census: the record registry, the vitals simulator, the risk scorer,
//! and the alert board.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- census
//!   cargo run -p demo -- monitor --patient P-1001 --ticks 10
//!   cargo run -p demo -- risk
//!   cargo run -p demo -- alerts --count 5

use std::path::{Path, PathBuf};

use chrono::{Duration, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pulseward_alerts::{AlertBoard, AlertGenerator};
use pulseward_domain::{
    alert::AlertSeverity,
    error::PulsewardResult,
    ids::PatientId,
    patient::PatientStatus,
    staff::DoctorStatus,
};
use pulseward_registry::HospitalRegistry;
use pulseward_vitals::{classify, DeviceFleet, DeviceStatus, MonitorConfig, VitalsSimulator};

// ── CLI definition ────────────────────────────────────────────────────────────

/// pulseward — hospital operations core demo.
///
/// Every subcommand runs against the same fictional in-memory census; no
/// network, no persistence, no real clinical data.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "pulseward hospital-operations demo",
    long_about = "Drives the pulseward core against a fictional census: record registry,\n\
                  per-patient vitals simulation, health-risk scoring, and the alert board."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run census, monitoring, risk, and alerts in sequence.
    RunAll,
    /// Print the registry counts and rosters.
    Census,
    /// Drive the vitals simulator for one patient.
    Monitor {
        /// Patient id to monitor; defaults to the first patient on record.
        #[arg(long)]
        patient: Option<String>,
        /// How many readings to generate.
        #[arg(long, default_value_t = 10)]
        ticks: usize,
        /// Optional TOML monitoring config overriding the defaults.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print health-risk predictions.
    Risk {
        /// Patient id to assess; every patient when omitted.
        #[arg(long)]
        patient: Option<String>,
    },
    /// Synthesize alerts onto a board and acknowledge the critical ones.
    Alerts {
        /// How many alerts to synthesize.
        #[arg(long, default_value_t = 5)]
        count: usize,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let registry = HospitalRegistry::with_seed_data();

    let result = match cli.command {
        Command::RunAll => run_all(&registry),
        Command::Census => run_census(&registry),
        Command::Monitor { patient, ticks, config } => {
            run_monitor(&registry, patient.as_deref(), ticks, config.as_deref())
        }
        Command::Risk { patient } => run_risk(&registry, patient.as_deref()),
        Command::Alerts { count } => run_alerts(&registry, count),
    };

    if let Err(e) = result {
        eprintln!("demo error: {}", e);
        std::process::exit(1);
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn run_all(registry: &HospitalRegistry) -> PulsewardResult<()> {
    run_census(registry)?;
    run_monitor(registry, None, 10, None)?;
    run_risk(registry, None)?;
    run_alerts(registry, 5)?;
    Ok(())
}

fn run_census(registry: &HospitalRegistry) -> PulsewardResult<()> {
    println!("=== Census ===");
    println!();

    let census = registry.census();
    println!(
        "  {} patients, {} doctors, {} staff",
        census.patients, census.doctors, census.staff
    );
    println!(
        "  {} appointments, {} prescriptions, {} invoices",
        census.appointments, census.prescriptions, census.invoices
    );
    println!();

    let today = Utc::now().date_naive();

    println!("  Patients:");
    for patient in registry.patients() {
        println!(
            "    {}  {:<18} {:>3}  {}",
            patient.id,
            patient.name,
            patient.age_on(today),
            patient_status_label(patient.status),
        );
    }
    println!();

    println!("  Doctors:");
    for doctor in registry.doctors() {
        println!(
            "    {}  {:<20} {:<16} {}",
            doctor.id,
            doctor.name,
            doctor.specialization,
            doctor_status_label(doctor.status),
        );
    }
    println!();

    println!("  Staff:");
    for member in registry.staff() {
        println!(
            "    {}  {:<18} {:?}, {} shift",
            member.id, member.name, member.role, member.shift
        );
    }
    println!();

    println!("  Invoices:");
    for invoice in registry.invoices() {
        println!(
            "    {}  {}  {:>10}  {:?}",
            invoice.id,
            invoice.patient_id,
            format_cents(invoice.total_cents()),
            invoice.status,
        );
    }
    println!();

    Ok(())
}

fn run_monitor(
    registry: &HospitalRegistry,
    patient_id: Option<&str>,
    ticks: usize,
    config_path: Option<&Path>,
) -> PulsewardResult<()> {
    println!("=== Monitoring ===");
    println!();

    let config = match config_path {
        Some(path) => MonitorConfig::from_file(path)?,
        None => MonitorConfig::default(),
    };

    // An unknown id degrades to an empty rendering, same as the board.
    let patient = match patient_id {
        Some(id) => registry.patient(&PatientId::from(id)),
        None => registry.patients().into_iter().next(),
    };
    let Some(patient) = patient else {
        println!("  No patient on record — nothing to monitor.");
        println!();
        return Ok(());
    };

    println!(
        "  Patient: {} ({}){}",
        patient.name,
        patient.id,
        if patient.is_hypertensive() { " — hypertensive profile" } else { "" },
    );
    println!();

    let interval = Duration::seconds(config.sample_interval_secs as i64);
    let mut sim = VitalsSimulator::new(config);
    let mut fleet = DeviceFleet::standard();

    let start = Utc::now();
    sim.focus(&patient, start);

    for i in 0..ticks {
        let at = start + interval * (i as i32 + 1);
        let reading = sim.tick(at);
        fleet.tick();
        println!(
            "  [{}]  {:>3} bpm  {:>3}/{:<3} mmHg  SpO2 {:>3}%  {:>4.1} °C  RR {:>2}  {}",
            at.format("%H:%M:%S"),
            reading.heart_rate,
            reading.systolic,
            reading.diastolic,
            reading.spo2,
            reading.temperature,
            reading.respiratory_rate,
            classify(&reading).label(),
        );
    }
    println!();

    println!(
        "  Window: {} of {} readings retained",
        sim.window().len(),
        sim.config().window_capacity
    );
    println!();

    println!("  Devices ({} connected):", fleet.connected_count());
    for device in fleet.devices() {
        println!(
            "    {:<18} {:<12} battery {:>3}%  signal {:>3}%  fw {}",
            device.name,
            device_status_label(device.status),
            device.battery,
            device.signal,
            device.firmware,
        );
    }
    println!();

    Ok(())
}

fn run_risk(registry: &HospitalRegistry, patient_id: Option<&str>) -> PulsewardResult<()> {
    println!("=== Health Risk ===");
    println!();

    let today = Utc::now().date_naive();

    let patients = match patient_id {
        Some(id) => match registry.patient(&PatientId::from(id)) {
            Some(patient) => vec![patient],
            None => {
                // Unknown id renders the default prediction, not an error.
                print_prediction(id, &pulseward_risk::assess_missing());
                return Ok(());
            }
        },
        None => registry.patients(),
    };

    for patient in &patients {
        let prediction = pulseward_risk::assess(patient, today);
        print_prediction(&format!("{} ({})", patient.name, patient.id), &prediction);
    }

    Ok(())
}

fn print_prediction(subject: &str, prediction: &pulseward_domain::risk::HealthPrediction) {
    println!(
        "  {} — {}/100 {}",
        subject,
        prediction.overall_risk,
        prediction.risk_level.label()
    );
    for factor in &prediction.factors {
        println!(
            "      {:<26} {:>3}  {:<10} {}",
            factor.name,
            factor.score,
            factor.level.label(),
            factor.description,
        );
    }
    println!("    Recommendations:");
    for recommendation in &prediction.recommendations {
        println!("      - {}", recommendation);
    }
    println!();
}

fn run_alerts(registry: &HospitalRegistry, count: usize) -> PulsewardResult<()> {
    println!("=== Alerts ===");
    println!();

    let patients = registry.patients();
    let mut generator = AlertGenerator::new();
    let board = AlertBoard::new();

    let now = Utc::now();
    for _ in 0..count {
        if let Some(alert) = generator.synthesize(&patients, now) {
            board.publish(alert)?;
        }
    }

    for alert in board.snapshot() {
        println!(
            "  [{:<8}] {:<18} {:<14} {:>12}  {}",
            alert.severity.label(),
            alert.patient_name,
            alert.vital,
            alert.value,
            alert.message,
        );
    }
    println!();

    let mut acknowledged = 0;
    for alert in board.snapshot() {
        if alert.severity == AlertSeverity::Critical && board.acknowledge(&alert.id)? {
            acknowledged += 1;
        }
    }
    println!("  Acknowledged {} critical alert(s).", acknowledged);
    println!(
        "  Board: {} total, {} active, {} critical unacknowledged, {} acknowledged",
        board.len(),
        board.active_count(),
        board.critical_count(),
        board.acknowledged_count(),
    );
    println!();

    Ok(())
}

// ── Display helpers ───────────────────────────────────────────────────────────

fn patient_status_label(status: PatientStatus) -> &'static str {
    match status {
        PatientStatus::Active => "active",
        PatientStatus::Discharged => "discharged",
    }
}

fn doctor_status_label(status: DoctorStatus) -> &'static str {
    match status {
        DoctorStatus::Active => "active",
        DoctorStatus::OnLeave => "on leave",
        DoctorStatus::Inactive => "inactive",
    }
}

fn device_status_label(status: DeviceStatus) -> &'static str {
    match status {
        DeviceStatus::Connected => "connected",
        DeviceStatus::Disconnected => "disconnected",
        DeviceStatus::Pairing => "pairing",
    }
}

fn format_cents(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, (cents % 100).abs())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("pulseward — hospital operations core");
    println!("Synthetic telemetry demo");
    println!("====================================");
    println!();
    println!("All clinical data is fictional and lives in process memory:");
    println!("  [registry]  patients, doctors, staff, scheduling, billing");
    println!("  [vitals]    per-patient simulator with a bounded rolling window");
    println!("  [risk]      pure weighted scoring over the static record");
    println!("  [alerts]    scenario synthesizer and acknowledgment board");
    println!();
}
