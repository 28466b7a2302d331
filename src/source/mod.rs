//! Data source abstraction for retrieving risk record batches.
//!
//! This module provides a trait-based abstraction for receiving risk data
//! from various providers (in-memory fixtures, file polling, channels fed
//! by a live backend, etc.).

mod channel;
mod file;
mod fixture;
mod record;

pub use channel::ChannelSource;
pub use file::FileSource;
pub use fixture::FixtureSource;
pub use record::{RiskBatch, RiskCategory, RiskRecord};

use std::fmt::Debug;

/// Trait for retrieving risk record batches from various providers.
///
/// Retrieval is all-or-nothing: a poll either yields a complete batch or
/// nothing. A provider failure is reported through [`error`](Self::error)
/// rather than as a partial batch.
///
/// # Example
///
/// ```
/// use riskwatch::{FixtureSource, RiskSource};
///
/// let mut source = FixtureSource::demo();
/// if let Some(batch) = source.poll() {
///     println!("Got {} records", batch.len());
/// }
/// ```
pub trait RiskSource: Send + Debug {
    /// Poll for the latest batch.
    ///
    /// Returns `Some(batch)` if new data is available, `None` otherwise.
    /// This method should be non-blocking.
    fn poll(&mut self) -> Option<RiskBatch>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;

    /// Check if the source has encountered a retrieval failure.
    ///
    /// Returns the error message if the last poll failed.
    fn error(&self) -> Option<&str>;
}
