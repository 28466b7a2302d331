//! Example: Feeding the dashboard via a channel
//!
//! This example demonstrates how to integrate riskwatch into your own
//! application by sending risk batches through a channel.
//!
//! This is useful when you want to:
//! - Push batches fetched from the risk assessment API
//! - Generate synthetic data for testing
//! - Bridge from any async producer
//!
//! # Usage
//!
//! ```bash
//! cargo run --example channel_feed
//! ```

use std::thread;
use std::time::Duration;

use riskwatch::{ChannelSource, RiskCategory, RiskRecord, RiskSource};

fn main() {
    println!("Channel feed example");
    println!("Generating synthetic risk batches...\n");

    // Create a channel source - this returns both a sender and the source
    let (tx, mut source) = ChannelSource::create("synthetic-data");

    // Spawn a thread to generate synthetic batches
    thread::spawn(move || {
        let mut tick = 0u64;

        loop {
            tick += 1;

            // Drift the scores a little each tick
            let wobble = (tick % 10) as f64 / 100.0;

            let batch = vec![
                RiskRecord {
                    device_id: "dev-1001".to_string(),
                    risk_score: (0.85 + wobble).min(1.0),
                    category: RiskCategory::Critical,
                    downtime_hours: 12.0,
                },
                RiskRecord {
                    device_id: "dev-1828".to_string(),
                    risk_score: (0.65 + wobble).min(1.0),
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

            // Send the batch
            if tx.send(Some(batch)).is_err() {
                break; // Receiver dropped
            }

            thread::sleep(Duration::from_secs(1));
        }
    });

    // Poll the source in the main thread
    println!("Receiving batches (press Ctrl+C to stop):\n");

    loop {
        if let Some(batch) = source.poll() {
            let critical = batch
                .iter()
                .filter(|r| r.category == RiskCategory::Critical)
                .count();
            println!("Received batch: {} devices, {} critical", batch.len(), critical);
            for record in &batch {
                println!(
                    "  {}: score {:.2}, {}, {}h downtime",
                    record.device_id,
                    record.risk_score,
                    record.category.as_str(),
                    record.downtime_hours
                );
            }
            println!();
        }

        thread::sleep(Duration::from_millis(100));
    }
}
