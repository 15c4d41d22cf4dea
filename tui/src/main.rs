//! pulseward — interactive ward dashboard
//!
//! Layout:
//!   ┌─── header ──────────────────────────────────────────────────────────┐
//!   │  [1] Monitoring  [2] Health Risk  [3] Alerts        Patient: …      │
//!   ├─── view ────────────────────────────────────────────────────────────┤
//!   │  per-tab content (vitals tiles + trend, risk gauges, alert board)   │
//!   ├─────────────────────────────────────────────────────────────────────┤
//!   │  footer (key bindings)                                              │
//!   └─────────────────────────────────────────────────────────────────────┘
//!
//! Single-threaded cooperative loop: vitals tick every sample interval
//! (2 s by default), alerts every alert interval (8 s), both driven off
//! `Instant` timers inside the crossterm poll loop.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Sparkline, Wrap},
    Frame, Terminal,
};

use pulseward_alerts::{AlertBoard, AlertGenerator};
use pulseward_domain::{
    alert::{Alert, AlertSeverity},
    error::PulsewardResult,
    patient::Patient,
    risk::{FactorLevel, HealthPrediction, RiskLevel},
    telemetry::VitalStatus,
};
use pulseward_registry::HospitalRegistry;
use pulseward_vitals::{classify, flags, DeviceFleet, DeviceStatus, MonitorConfig, VitalsSimulator};

// ── Tabs ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Monitoring,
    HealthRisk,
    Alerts,
}

impl Tab {
    fn name(self) -> &'static str {
        match self {
            Tab::Monitoring => "Monitoring",
            Tab::HealthRisk => "Health Risk",
            Tab::Alerts => "Alerts",
        }
    }
}

// ── App state ─────────────────────────────────────────────────────────────────

struct App {
    patients: Vec<Patient>,
    patient_idx: usize,
    tab: Tab,

    sim: VitalsSimulator,
    fleet: DeviceFleet,
    generator: AlertGenerator,
    board: AlertBoard,
    prediction: HealthPrediction,

    /// Whether the alert timer keeps synthesizing new alerts.
    auto_alerts: bool,
    /// Index into the board snapshot (newest first).
    selected_alert: usize,

    sample_interval: Duration,
    alert_interval: Duration,
    last_sample: Instant,
    last_alert: Instant,
}

impl App {
    fn new(config: MonitorConfig) -> PulsewardResult<Self> {
        let registry = HospitalRegistry::with_seed_data();
        let patients = registry.patients();

        let sample_interval = Duration::from_secs(config.sample_interval_secs);
        let alert_interval = Duration::from_secs(config.alert_interval_secs);

        let mut sim = VitalsSimulator::new(config);
        let now = Utc::now();
        let prediction = match patients.first() {
            Some(patient) => {
                sim.focus(patient, now);
                pulseward_risk::assess(patient, now.date_naive())
            }
            None => pulseward_risk::assess_missing(),
        };

        let mut generator = AlertGenerator::new();
        let board = AlertBoard::new();
        // The board opens with a few alerts already on it, like the ward
        // display does.
        board.seed(&mut generator, &patients, 3, now)?;

        Ok(Self {
            patients,
            patient_idx: 0,
            tab: Tab::Monitoring,
            sim,
            fleet: DeviceFleet::standard(),
            generator,
            board,
            prediction,
            auto_alerts: true,
            selected_alert: 0,
            sample_interval,
            alert_interval,
            last_sample: Instant::now(),
            last_alert: Instant::now(),
        })
    }

    fn current_patient(&self) -> Option<&Patient> {
        self.patients.get(self.patient_idx)
    }

    /// Switch focus to the patient at `idx`: the simulator resets and the
    /// prediction is recomputed from the new record.
    fn select_patient(&mut self, idx: usize) {
        if self.patients.is_empty() {
            return;
        }
        self.patient_idx = idx % self.patients.len();
        let now = Utc::now();
        let patient = &self.patients[self.patient_idx];
        self.sim.focus(patient, now);
        self.prediction = pulseward_risk::assess(patient, now.date_naive());
        self.last_sample = Instant::now();
    }

    fn next_patient(&mut self) {
        self.select_patient(self.patient_idx + 1);
    }

    fn prev_patient(&mut self) {
        if self.patients.is_empty() {
            return;
        }
        self.select_patient(self.patient_idx + self.patients.len() - 1);
    }

    /// Advance the timers: one vitals reading per sample interval, one
    /// synthesized alert per alert interval while auto-generation is on.
    fn tick(&mut self) -> PulsewardResult<()> {
        if self.current_patient().is_some() && self.last_sample.elapsed() >= self.sample_interval {
            self.sim.tick(Utc::now());
            self.fleet.tick();
            self.last_sample = Instant::now();
        }

        if self.auto_alerts && self.last_alert.elapsed() >= self.alert_interval {
            if let Some(alert) = self.generator.synthesize(&self.patients, Utc::now()) {
                self.board.publish(alert)?;
            }
            self.last_alert = Instant::now();
        }

        self.clamp_selection();
        Ok(())
    }

    fn select_next_alert(&mut self) {
        let len = self.board.len();
        if len > 0 && self.selected_alert + 1 < len {
            self.selected_alert += 1;
        }
    }

    fn select_prev_alert(&mut self) {
        self.selected_alert = self.selected_alert.saturating_sub(1);
    }

    fn acknowledge_selected(&mut self) -> PulsewardResult<()> {
        if let Some(alert) = self.board.snapshot().get(self.selected_alert) {
            self.board.acknowledge(&alert.id)?;
        }
        Ok(())
    }

    fn clear_acknowledged(&mut self) -> PulsewardResult<()> {
        self.board.clear_acknowledged()?;
        self.clamp_selection();
        Ok(())
    }

    fn clamp_selection(&mut self) {
        let len = self.board.len();
        if len == 0 {
            self.selected_alert = 0;
        } else if self.selected_alert >= len {
            self.selected_alert = len - 1;
        }
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn ui(f: &mut Frame, app: &App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(12),   // active view
            Constraint::Length(3), // footer
        ])
        .split(f.area());

    render_header(f, outer[0], app);
    match app.tab {
        Tab::Monitoring => render_monitoring(f, outer[1], app),
        Tab::HealthRisk => render_risk(f, outer[1], app),
        Tab::Alerts => render_alerts(f, outer[1], app),
    }
    render_footer(f, outer[2], app);
}

fn render_header(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut spans: Vec<Span> = vec![Span::styled("pulseward    ", title_style)];

    let tabs = [
        ("[1]", Tab::Monitoring),
        ("[2]", Tab::HealthRisk),
        ("[3]", Tab::Alerts),
    ];
    for (key, tab) in &tabs {
        let style = if app.tab == *tab {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("{} {}  ", key, tab.name()), style));
    }

    match app.current_patient() {
        Some(patient) => {
            spans.push(Span::styled(
                format!("    Patient: {} ({})", patient.name, patient.id),
                Style::default().fg(Color::Gray),
            ));
        }
        None => {
            spans.push(Span::styled(
                "    No patients on record",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(header, area);
}

// ── Monitoring view ───────────────────────────────────────────────────────────

fn render_monitoring(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(6)])
        .split(columns[0]);

    render_vitals_tiles(f, left[0], app);
    render_heart_rate_trend(f, left[1], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8)])
        .split(columns[1]);

    render_status_badge(f, right[0], app);
    render_device_fleet(f, right[1], app);
}

fn render_vitals_tiles(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let block = Block::default()
        .title(" Current Vitals ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(reading) = app.sim.latest() else {
        let p = Paragraph::new(Span::styled(
            "  No readings yet.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(p, area);
        return;
    };

    let warn = flags(reading);
    let tile = |warning: bool| {
        if warning {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("  Heart Rate        ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{:>3} bpm", reading.heart_rate), tile(warn.heart_rate)),
        ]),
        Line::from(vec![
            Span::styled("  Blood Pressure    ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}/{} mmHg", reading.systolic, reading.diastolic),
                tile(warn.blood_pressure),
            ),
        ]),
        Line::from(vec![
            Span::styled("  SpO2              ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{:>3} %", reading.spo2), tile(warn.spo2)),
        ]),
        Line::from(vec![
            Span::styled("  Temperature       ", Style::default().fg(Color::Gray)),
            Span::styled(format!("{:>4.1} °C", reading.temperature), tile(warn.temperature)),
        ]),
        Line::from(vec![
            Span::styled("  Respiratory Rate  ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:>2} /min", reading.respiratory_rate),
                tile(warn.respiratory_rate),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("  Sampled {}", reading.timestamp.format("%H:%M:%S UTC")),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_heart_rate_trend(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let window = app.sim.window();
    let data: Vec<u64> = window.iter().map(|r| r.heart_rate as u64).collect();

    let block = Block::default()
        .title(format!(
            " Heart Rate Trend ({}/{} samples) ",
            window.len(),
            app.sim.config().window_capacity
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let sparkline = Sparkline::default()
        .block(block)
        .data(&data)
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(sparkline, area);
}

fn render_status_badge(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let block = Block::default()
        .title(" Status ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines: Vec<Line> = Vec::new();
    match app.sim.latest() {
        Some(reading) => {
            let status = classify(reading);
            lines.push(Line::from(vec![
                Span::raw("  Overall: "),
                Span::styled(
                    status.label(),
                    Style::default()
                        .fg(status_color(status))
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "  Overall: —",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    let profile = if app.current_patient().map(|p| p.is_hypertensive()).unwrap_or(false) {
        "hypertensive baseline"
    } else {
        "normal baseline"
    };
    lines.push(Line::from(Span::styled(
        format!("  Profile: {}", profile),
        Style::default().fg(Color::Gray),
    )));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_device_fleet(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let mut items: Vec<ListItem> = Vec::new();
    for device in app.fleet.devices() {
        let (icon, icon_color) = match device.status {
            DeviceStatus::Connected => ("●", Color::Green),
            DeviceStatus::Disconnected => ("○", Color::Red),
            DeviceStatus::Pairing => ("◌", Color::Yellow),
        };
        let battery_color = if device.battery <= 15 { Color::Red } else { Color::Gray };

        items.push(ListItem::new(Line::from(vec![
            Span::styled(format!("  {} ", icon), Style::default().fg(icon_color)),
            Span::raw(format!("{:<18}", device.name)),
            Span::styled(
                format!("battery {:>3}%  ", device.battery),
                Style::default().fg(battery_color),
            ),
            Span::styled(
                format!("signal {:>3}%", device.signal),
                Style::default().fg(Color::Gray),
            ),
        ])));
    }

    let block = Block::default()
        .title(format!(
            " Devices ({}/{} connected) ",
            app.fleet.connected_count(),
            app.fleet.devices().len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    f.render_widget(List::new(items).block(block), area);
}

// ── Health Risk view ──────────────────────────────────────────────────────────

fn render_risk(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(4),
        ])
        .split(area);

    let prediction = &app.prediction;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Overall Risk ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(risk_color(prediction.risk_level)))
        .percent(prediction.overall_risk.min(100) as u16)
        .label(format!(
            "{}/100 — {}",
            prediction.overall_risk,
            prediction.risk_level.label()
        ));
    f.render_widget(gauge, rows[0]);

    let mut factor_items: Vec<ListItem> = Vec::new();
    for factor in &prediction.factors {
        factor_items.push(ListItem::new(Line::from(vec![
            Span::raw(format!("  {:<26}", factor.name)),
            Span::styled(
                format!("{:>3}  ", factor.score),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:<10}", factor.level.label()),
                Style::default().fg(factor_color(factor.level)),
            ),
            Span::styled(factor.description.clone(), Style::default().fg(Color::Gray)),
        ])));
    }
    let factors = List::new(factor_items).block(
        Block::default()
            .title(" Risk Factors ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(factors, rows[1]);

    let rec_lines: Vec<Line> = prediction
        .recommendations
        .iter()
        .map(|r| Line::from(format!("  - {}", r)))
        .collect();
    let recommendations = Paragraph::new(rec_lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Recommendations ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(recommendations, rows[2]);
}

// ── Alerts view ───────────────────────────────────────────────────────────────

fn render_alerts(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(area);

    let auto_label = if app.auto_alerts { "ON" } else { "OFF" };
    let auto_color = if app.auto_alerts { Color::Green } else { Color::Red };
    let counters = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("  {} critical", app.board.critical_count()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "   {} active   {} acknowledged   ",
            app.board.active_count(),
            app.board.acknowledged_count()
        )),
        Span::raw("auto-generate: "),
        Span::styled(auto_label, Style::default().fg(auto_color)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(counters, rows[0]);

    let alerts = app.board.snapshot();
    let mut items: Vec<ListItem> = Vec::new();
    if alerts.is_empty() {
        items.push(ListItem::new(Span::styled(
            "  No alerts on the board.",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (i, alert) in alerts.iter().enumerate() {
        items.push(ListItem::new(alert_line(alert, i == app.selected_alert)));
    }

    let block = Block::default()
        .title(format!(" Alert Board ({} of 50) ", alerts.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    f.render_widget(List::new(items).block(block), rows[1]);
}

fn alert_line(alert: &Alert, selected: bool) -> Line<'static> {
    let marker = if selected { "▸ " } else { "  " };

    // Acknowledged alerts stay listed but fade out.
    if alert.acknowledged {
        return Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!(
                    "[{:<8}] {}  {:<18} {} {} — {} ✓",
                    alert.severity.label(),
                    alert.timestamp.format("%H:%M:%S"),
                    alert.patient_name,
                    alert.vital,
                    alert.value,
                    alert.message,
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
    }

    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("[{:<8}]", alert.severity.label()),
            Style::default()
                .fg(severity_color(alert.severity))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}  ", alert.timestamp.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(format!("{:<18} ", alert.patient_name)),
        Span::styled(
            format!("{} {} ", alert.vital, alert.value),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("— {}", alert.message),
            Style::default().fg(Color::Gray),
        ),
    ])
}

// ── Footer ────────────────────────────────────────────────────────────────────

fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let key = Style::default().fg(Color::Cyan);

    let mut spans: Vec<Span> = vec![
        Span::styled(" [1-3] ", key),
        Span::raw("View  "),
        Span::styled("[←/→] ", key),
        Span::raw("Patient  "),
    ];

    if app.tab == Tab::Alerts {
        spans.push(Span::styled("[↑/↓] ", key));
        spans.push(Span::raw("Select  "));
        spans.push(Span::styled("[a] ", key));
        spans.push(Span::raw("Ack  "));
        spans.push(Span::styled("[A] ", key));
        spans.push(Span::raw("Ack all  "));
        spans.push(Span::styled("[c] ", key));
        spans.push(Span::raw("Clear acked  "));
        spans.push(Span::styled("[g] ", key));
        spans.push(Span::raw("Auto-gen  "));
    }

    spans.push(Span::styled("[q] ", key));
    spans.push(Span::raw("Quit"));

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}

// ── Palette helpers ───────────────────────────────────────────────────────────

fn status_color(status: VitalStatus) -> Color {
    match status {
        VitalStatus::Normal => Color::Green,
        VitalStatus::Warning => Color::Yellow,
        VitalStatus::Critical => Color::Red,
    }
}

fn severity_color(severity: AlertSeverity) -> Color {
    match severity {
        AlertSeverity::Info => Color::Cyan,
        AlertSeverity::Warning => Color::Yellow,
        AlertSeverity::Critical => Color::Red,
    }
}

fn risk_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Low => Color::Green,
        RiskLevel::Moderate => Color::Yellow,
        RiskLevel::High => Color::LightRed,
        RiskLevel::Critical => Color::Red,
    }
}

fn factor_color(level: FactorLevel) -> Color {
    match level {
        FactorLevel::Low => Color::Green,
        FactorLevel::Moderate => Color::Yellow,
        FactorLevel::High => Color::Red,
    }
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn Error>> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Best-effort terminal restore on panic.
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut app = App::new(MonitorConfig::default())?;
    let mut terminal = setup_terminal()?;

    loop {
        terminal.draw(|f| ui(f, &app))?;

        // Short poll timeout so the Instant timers stay responsive without
        // burning CPU.
        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    // Quit.
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                    // Ctrl-C also quits.
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,

                    // Tab selection.
                    KeyCode::Char('1') => app.tab = Tab::Monitoring,
                    KeyCode::Char('2') => app.tab = Tab::HealthRisk,
                    KeyCode::Char('3') => app.tab = Tab::Alerts,

                    // Patient cycling resets the simulator.
                    KeyCode::Left => app.prev_patient(),
                    KeyCode::Right => app.next_patient(),

                    // Alert board controls.
                    KeyCode::Up => app.select_prev_alert(),
                    KeyCode::Down => app.select_next_alert(),
                    KeyCode::Char('a') => app.acknowledge_selected()?,
                    KeyCode::Char('A') => {
                        app.board.acknowledge_all()?;
                    }
                    KeyCode::Char('c') => app.clear_acknowledged()?,
                    KeyCode::Char('g') => app.auto_alerts = !app.auto_alerts,

                    _ => {}
                }
            }
        }

        app.tick()?;
    }

    restore_terminal(&mut terminal)?;
    Ok(())
}
