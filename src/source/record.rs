//! Shared types for risk record batches.
//!
//! These types define the JSON shape every provider must produce. They are
//! the common contract between the risk assessment backend (or any stub
//! standing in for it) and this dashboard consumer.

use serde::{Deserialize, Serialize};

/// An ordered batch of risk records, as returned by one retrieval.
///
/// Order is the provider's insertion order; no sort is applied or guaranteed.
/// `device_id` is assumed unique within one batch (not checked).
pub type RiskBatch = Vec<RiskRecord>;

/// Risk category for a device, ordered from lowest to highest severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskCategory {
    /// Wire name as it appears in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "low",
            RiskCategory::Medium => "medium",
            RiskCategory::High => "high",
            RiskCategory::Critical => "critical",
        }
    }

    /// Upper-case label for display.
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::Low => "LOW",
            RiskCategory::Medium => "MEDIUM",
            RiskCategory::High => "HIGH",
            RiskCategory::Critical => "CRITICAL",
        }
    }
}

/// A single device's risk assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRecord {
    /// Unique device identifier within one batch. Used as the stable
    /// identity key when rendering the card grid.
    pub device_id: String,

    /// Model risk score, expected in [0.0, 1.0] (not enforced).
    pub risk_score: f64,

    /// Severity category assigned by the policy engine.
    pub category: RiskCategory,

    /// Projected downtime in hours, expected non-negative (not enforced).
    pub downtime_hours: f64,
}
