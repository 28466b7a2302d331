//! In-memory fixture data source.
//!
//! Delivers a fixed batch exactly once on first poll. This is the
//! stand-in for a real backend: the retrieval contract is identical,
//! only the transport is missing.

use super::{RiskBatch, RiskCategory, RiskRecord, RiskSource};

/// A data source that resolves a fixed in-memory batch once.
///
/// The batch is handed out on the first poll and never again, matching
/// the fetch-once-per-mount behavior of the dashboard binding.
#[derive(Debug)]
pub struct FixtureSource {
    batch: Option<RiskBatch>,
    description: String,
}

impl FixtureSource {
    /// Create a fixture source that will deliver the given batch once.
    pub fn new(batch: RiskBatch) -> Self {
        Self {
            batch: Some(batch),
            description: "fixture: in-memory".to_string(),
        }
    }

    /// Create a fixture source with the demo seed records.
    pub fn demo() -> Self {
        let batch = vec![
            RiskRecord {
                device_id: "dev-1001".to_string(),
                risk_score: 0.91,
                category: RiskCategory::Critical,
                downtime_hours: 12.0,
            },
            RiskRecord {
                device_id: "dev-1828".to_string(),
                risk_score: 0.73,
                category: RiskCategory::High,
                downtime_hours: 8.0,
            },
            RiskRecord {
                device_id: "dev-9910".to_string(),
                risk_score: 0.44,
                category: RiskCategory::Medium,
                downtime_hours: 4.0,
            },
        ];
        Self {
            batch: Some(batch),
            description: "fixture: demo".to_string(),
        }
    }
}

impl RiskSource for FixtureSource {
    fn poll(&mut self) -> Option<RiskBatch> {
        self.batch.take()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_delivers_once() {
        let mut source = FixtureSource::demo();

        let batch = source.poll();
        assert!(batch.is_some());
        assert_eq!(batch.unwrap().len(), 3);

        // Exactly once: subsequent polls yield nothing
        assert!(source.poll().is_none());
        assert!(source.poll().is_none());
        assert!(source.error().is_none());
    }

    #[test]
    fn test_demo_batch_order() {
        let mut source = FixtureSource::demo();
        let batch = source.poll().unwrap();

        let ids: Vec<&str> = batch.iter().map(|r| r.device_id.as_str()).collect();
        assert_eq!(ids, vec!["dev-1001", "dev-1828", "dev-9910"]);
    }

    #[test]
    fn test_empty_fixture() {
        let mut source = FixtureSource::new(Vec::new());
        let batch = source.poll();
        assert!(batch.is_some());
        assert!(batch.unwrap().is_empty());
    }
}
