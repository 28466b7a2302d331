//! Channel-based data source.
//!
//! Receives risk batches via a tokio watch channel. This is useful for
//! integration with a live backend where batches are pushed rather than
//! polled from a file.

use tokio::sync::watch;

use super::{RiskBatch, RiskSource};

/// A data source that receives risk batches via a channel.
///
/// The producer (e.g., a client of the risk assessment API) sends batches
/// through the channel, and this source provides them to the TUI.
///
/// The channel is seeded with `None`, so polling yields nothing until the
/// producer has sent a real batch: an empty fleet is only ever reported
/// because a provider resolved an empty batch, never as a placeholder.
///
/// # Example
///
/// ```
/// use riskwatch::ChannelSource;
///
/// // Create a channel pair
/// let (tx, source) = ChannelSource::create("risk-api");
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<Option<RiskBatch>>,
    description: String,
}

impl ChannelSource {
    /// Create a new channel source.
    ///
    /// # Arguments
    ///
    /// * `receiver` - The receiving end of a watch channel; `None` means
    ///   no batch has resolved yet
    /// * `source_description` - A description of where batches come from
    ///   (e.g., "risk-api", "https://risk.internal/api/v1/risk")
    pub fn new(receiver: watch::Receiver<Option<RiskBatch>>, source_description: &str) -> Self {
        let description = format!("channel: {}", source_description);
        Self {
            receiver,
            description,
        }
    }

    /// Create a channel pair for sending batches to a ChannelSource.
    ///
    /// Returns (sender, source) where the sender can be used to push
    /// batches and the source can be used with the dashboard.
    pub fn create(source_description: &str) -> (watch::Sender<Option<RiskBatch>>, Self) {
        let (tx, rx) = watch::channel(None);
        let source = Self::new(rx, source_description);
        (tx, source)
    }
}

impl RiskSource for ChannelSource {
    fn poll(&mut self) -> Option<RiskBatch> {
        // Check if there's a new value without blocking
        if self.receiver.has_changed().unwrap_or(false) {
            self.receiver.borrow_and_update().clone()
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        // Transport errors would be handled by the producer side;
        // a dropped sender simply stops producing new batches.
        None
    }
}
