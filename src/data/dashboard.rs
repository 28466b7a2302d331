//! Dashboard data and derived aggregates.
//!
//! This module transforms a raw risk batch into processed data with
//! per-category counts computed for the page header.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use crate::source::{RiskBatch, RiskCategory, RiskRecord};

/// Per-category record counts for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl CategoryCounts {
    /// Total number of records across all categories.
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.critical
    }
}

/// Processed batch data ready for display.
///
/// Records keep the provider's insertion order; the grid renders them
/// as-is, identity keyed by `device_id`.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub records: Vec<RiskRecord>,
    pub counts: CategoryCounts,
    pub last_updated: Instant,
}

impl DashboardData {
    /// Load and parse a batch from a JSON file.
    ///
    /// Used by the non-interactive export path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a batch from a JSON string.
    pub fn parse(content: &str) -> Result<Self> {
        let batch: RiskBatch = serde_json::from_str(content)?;
        Ok(Self::from_batch(batch))
    }

    /// Convert a raw batch into processed dashboard data.
    ///
    /// This is the primary conversion method used by all data sources.
    pub fn from_batch(batch: RiskBatch) -> Self {
        let mut counts = CategoryCounts::default();
        for record in &batch {
            match record.category {
                RiskCategory::Low => counts.low += 1,
                RiskCategory::Medium => counts.medium += 1,
                RiskCategory::High => counts.high += 1,
                RiskCategory::Critical => counts.critical += 1,
            }
        }

        Self {
            records: batch,
            counts,
            last_updated: Instant::now(),
        }
    }

    /// Number of records whose category is critical.
    pub fn critical_count(&self) -> usize {
        self.counts.critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, score: f64, category: RiskCategory, downtime: f64) -> RiskRecord {
        RiskRecord {
            device_id: id.to_string(),
            risk_score: score,
            category,
            downtime_hours: downtime,
        }
    }

    #[test]
    fn test_critical_count_matches_filter() {
        let batch = vec![
            record("dev-1001", 0.91, RiskCategory::Critical, 12.0),
            record("dev-1828", 0.73, RiskCategory::High, 8.0),
            record("dev-9910", 0.44, RiskCategory::Medium, 4.0),
            record("dev-0007", 0.99, RiskCategory::Critical, 36.0),
        ];
        let expected = batch
            .iter()
            .filter(|r| r.category == RiskCategory::Critical)
            .count();

        let data = DashboardData::from_batch(batch);
        assert_eq!(data.critical_count(), expected);
        assert_eq!(data.critical_count(), 2);
    }

    #[test]
    fn test_empty_batch() {
        let data = DashboardData::from_batch(Vec::new());
        assert_eq!(data.critical_count(), 0);
        assert_eq!(data.counts.total(), 0);
        assert!(data.records.is_empty());
    }

    #[test]
    fn test_counts_per_category() {
        let batch = vec![
            record("a", 0.1, RiskCategory::Low, 0.0),
            record("b", 0.2, RiskCategory::Low, 0.0),
            record("c", 0.5, RiskCategory::Medium, 1.0),
            record("d", 0.7, RiskCategory::High, 2.0),
            record("e", 0.9, RiskCategory::Critical, 9.0),
        ];

        let data = DashboardData::from_batch(batch);
        assert_eq!(data.counts.low, 2);
        assert_eq!(data.counts.medium, 1);
        assert_eq!(data.counts.high, 1);
        assert_eq!(data.counts.critical, 1);
        assert_eq!(data.counts.total(), 5);
    }

    #[test]
    fn test_record_order_is_preserved() {
        let batch = vec![
            record("dev-1001", 0.91, RiskCategory::Critical, 12.0),
            record("dev-1828", 0.73, RiskCategory::High, 8.0),
            record("dev-9910", 0.44, RiskCategory::Medium, 4.0),
        ];

        let data = DashboardData::from_batch(batch);
        let ids: Vec<&str> = data.records.iter().map(|r| r.device_id.as_str()).collect();
        assert_eq!(ids, vec!["dev-1001", "dev-1828", "dev-9910"]);
    }

    #[test]
    fn test_identity_is_stable_across_rebuilds() {
        let batch = vec![
            record("dev-1001", 0.91, RiskCategory::Critical, 12.0),
            record("dev-1828", 0.73, RiskCategory::High, 8.0),
        ];

        let first = DashboardData::from_batch(batch.clone());
        let second = DashboardData::from_batch(batch);

        let first_ids: Vec<&str> = first.records.iter().map(|r| r.device_id.as_str()).collect();
        let second_ids: Vec<&str> = second.records.iter().map(|r| r.device_id.as_str()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn test_parse_batch_json() {
        let json = r#"[
            {"deviceId": "dev-1001", "riskScore": 0.91, "category": "critical", "downtimeHours": 12},
            {"deviceId": "dev-1828", "riskScore": 0.73, "category": "high", "downtimeHours": 8}
        ]"#;

        let data = DashboardData::parse(json).unwrap();
        assert_eq!(data.records.len(), 2);
        assert_eq!(data.critical_count(), 1);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(DashboardData::parse("not json").is_err());
    }
}
