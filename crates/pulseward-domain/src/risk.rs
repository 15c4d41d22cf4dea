//! Health-risk assessment types.
//!
//! These are derived values: recomputed from a patient's static record on
//! every request, never stored.

use serde::{Deserialize, Serialize};

/// Contribution band of a single factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorLevel {
    Low,
    Moderate,
    High,
}

impl FactorLevel {
    pub fn label(self) -> &'static str {
        match self {
            FactorLevel::Low => "low",
            FactorLevel::Moderate => "moderate",
            FactorLevel::High => "high",
        }
    }
}

/// One weighted contributor to the overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    /// Points contributed to the overall score (already capped).
    pub score: u32,
    pub level: FactorLevel,
    /// Human-readable basis, e.g. the list of conditions counted.
    pub description: String,
}

/// Overall banding of the clamped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

/// The full result of one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthPrediction {
    /// Sum of factor scores, clamped to 0..=100.
    pub overall_risk: u32,
    pub risk_level: RiskLevel,
    pub factors: Vec<RiskFactor>,
    pub recommendations: Vec<String>,
}
