//! Application state and the load state machine.

use anyhow::Result;

use crate::data::DashboardData;
use crate::source::RiskSource;
use crate::ui::Theme;

/// Retrieval state owned by the dashboard.
///
/// Failure is a first-class variant: the renderer matches on this enum
/// exhaustively, so a failed retrieval can never be displayed as if the
/// dashboard were still loading.
#[derive(Debug)]
pub enum LoadState {
    /// Initial state, no retrieval issued yet.
    Empty,
    /// Retrieval issued, nothing resolved yet.
    Loading,
    /// A batch resolved successfully.
    Loaded(DashboardData),
    /// Retrieval failed before any batch resolved.
    Failed(String),
}

impl LoadState {
    /// Returns the loaded data, if any.
    pub fn data(&self) -> Option<&DashboardData> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    // Data source
    source: Box<dyn RiskSource>,
    pub state: LoadState,

    // Grid scroll position (in card rows)
    pub scroll_row: usize,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, std::time::Instant)>,
}

impl App {
    /// Create a new App with the given data source.
    pub fn new(source: Box<dyn RiskSource>) -> Self {
        Self {
            running: true,
            show_help: false,
            source,
            state: LoadState::Empty,
            scroll_row: 0,
            theme: Theme::auto_detect(),
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, std::time::Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < std::time::Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Poll the data source and advance the load state machine.
    ///
    /// Returns Ok(true) if a new batch was applied, Ok(false) otherwise.
    /// The source is always polled first so a retry can clear a pending
    /// failure once the upstream recovers. A source failure becomes
    /// `LoadState::Failed` unless a batch has already loaded; stale data
    /// is kept and the failure is shown as a status message instead.
    pub fn refresh(&mut self) -> Result<bool> {
        if let Some(batch) = self.source.poll() {
            let data = DashboardData::from_batch(batch);

            // Clamp scroll against the new record count
            self.scroll_row = self.scroll_row.min(data.records.len().saturating_sub(1));
            self.state = LoadState::Loaded(data);
            return Ok(true);
        }

        if let Some(err) = self.source.error() {
            let err = err.to_string();
            match self.state {
                LoadState::Loaded(_) => {
                    self.set_status_message(format!("Refresh failed: {}", err));
                }
                _ => self.state = LoadState::Failed(err),
            }
        } else if matches!(self.state, LoadState::Empty) {
            // A pending retrieval is indistinguishable from "nothing new";
            // only promote the initial state.
            self.state = LoadState::Loading;
        }
        Ok(false)
    }

    /// Scroll the card grid up by n rows.
    pub fn scroll_up(&mut self, n: usize) {
        self.scroll_row = self.scroll_row.saturating_sub(n);
    }

    /// Scroll the card grid down by n rows.
    ///
    /// Clamped against the record count at render time; this only bounds
    /// the raw position so it cannot grow without limit.
    pub fn scroll_down(&mut self, n: usize) {
        let max = self
            .state
            .data()
            .map(|d| d.records.len().saturating_sub(1))
            .unwrap_or(0);
        self.scroll_row = (self.scroll_row + n).min(max);
    }

    /// Jump to the top of the grid.
    pub fn scroll_top(&mut self) {
        self.scroll_row = 0;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export current state to a JSON file.
    pub fn export_state(&self, path: &std::path::Path) -> Result<()> {
        use std::io::Write;

        let Some(data) = self.state.data() else {
            anyhow::bail!("No data to export");
        };

        let export = serde_json::json!({
            "summary": {
                "total_devices": data.counts.total(),
                "low": data.counts.low,
                "medium": data.counts.medium,
                "high": data.counts.high,
                "critical": data.counts.critical,
            },
            "records": data.records,
        });

        let json = serde_json::to_string_pretty(&export)?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FixtureSource, RiskBatch, RiskSource};

    /// A source that always reports a retrieval failure.
    #[derive(Debug)]
    struct FailingSource;

    impl RiskSource for FailingSource {
        fn poll(&mut self) -> Option<RiskBatch> {
            None
        }
        fn description(&self) -> &str {
            "failing"
        }
        fn error(&self) -> Option<&str> {
            Some("connection refused")
        }
    }

    /// A source that never resolves and never fails.
    #[derive(Debug)]
    struct HangingSource;

    impl RiskSource for HangingSource {
        fn poll(&mut self) -> Option<RiskBatch> {
            None
        }
        fn description(&self) -> &str {
            "hanging"
        }
        fn error(&self) -> Option<&str> {
            None
        }
    }

    #[test]
    fn test_initial_state_is_empty() {
        let app = App::new(Box::new(FixtureSource::demo()));
        assert!(matches!(app.state, LoadState::Empty));
    }

    #[test]
    fn test_refresh_loads_batch() {
        let mut app = App::new(Box::new(FixtureSource::demo()));

        let updated = app.refresh().unwrap();
        assert!(updated);

        let data = app.state.data().expect("state should be loaded");
        assert_eq!(data.records.len(), 3);
        assert_eq!(data.critical_count(), 1);
    }

    #[test]
    fn test_fixture_fires_exactly_once() {
        let mut app = App::new(Box::new(FixtureSource::demo()));

        assert!(app.refresh().unwrap());
        // Later polls yield nothing, and loaded data stays put
        assert!(!app.refresh().unwrap());
        assert!(app.state.is_loaded());
    }

    #[test]
    fn test_pending_retrieval_promotes_to_loading() {
        let mut app = App::new(Box::new(HangingSource));

        assert!(!app.refresh().unwrap());
        assert!(matches!(app.state, LoadState::Loading));
    }

    #[test]
    fn test_failure_is_distinct_from_loading() {
        let mut app = App::new(Box::new(FailingSource));

        assert!(!app.refresh().unwrap());
        match &app.state {
            LoadState::Failed(msg) => assert!(msg.contains("connection refused")),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_retry_recovers_after_transient_failure() {
        use crate::source::FileSource;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("risk.json");
        std::fs::write(&path, "not valid json").unwrap();

        let mut app = App::new(Box::new(FileSource::new(&path)));
        assert!(!app.refresh().unwrap());
        assert!(matches!(app.state, LoadState::Failed(_)));

        // Fix the file on disk; the next refresh must poll again and load
        std::fs::write(
            &path,
            r#"[{"deviceId": "dev-1001", "riskScore": 0.91, "category": "critical", "downtimeHours": 12}]"#,
        )
        .unwrap();

        assert!(app.refresh().unwrap());
        let data = app.state.data().expect("retry should recover");
        assert_eq!(data.records.len(), 1);
        assert_eq!(data.critical_count(), 1);
    }

    #[test]
    fn test_failure_after_load_keeps_data() {
        let mut app = App::new(Box::new(FixtureSource::demo()));
        assert!(app.refresh().unwrap());

        // Swap in a failing source to simulate a later refresh failure
        app.source = Box::new(FailingSource);
        assert!(!app.refresh().unwrap());
        assert!(app.state.is_loaded());
        assert!(app.get_status_message().unwrap().contains("Refresh failed"));
    }

    #[test]
    fn test_scroll_clamps() {
        let mut app = App::new(Box::new(FixtureSource::demo()));
        app.refresh().unwrap();

        app.scroll_down(100);
        assert_eq!(app.scroll_row, 2); // 3 records, worst case one per row

        app.scroll_up(1);
        assert_eq!(app.scroll_row, 1);

        app.scroll_top();
        assert_eq!(app.scroll_row, 0);

        app.scroll_up(5);
        assert_eq!(app.scroll_row, 0);
    }

    #[test]
    fn test_export_without_data_fails() {
        let app = App::new(Box::new(HangingSource));
        let dir = tempfile::tempdir().unwrap();
        assert!(app.export_state(&dir.path().join("out.json")).is_err());
    }

    #[test]
    fn test_export_writes_summary_and_records() {
        let mut app = App::new(Box::new(FixtureSource::demo()));
        app.refresh().unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        app.export_state(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["summary"]["total_devices"], 3);
        assert_eq!(json["summary"]["critical"], 1);
        assert_eq!(json["records"][0]["deviceId"], "dev-1001");
    }
}
