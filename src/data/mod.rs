//! Data models and processing for risk batches.
//!
//! This module handles the transformation of raw risk batches into
//! structured data suitable for display.
//!
//! ## Data Flow
//!
//! ```text
//! RiskBatch (raw JSON)
//!        │
//!        ▼
//! DashboardData::from_batch()
//!        │
//!        └──▶ records (provider order) + CategoryCounts (derived)
//! ```

pub mod dashboard;

pub use dashboard::{CategoryCounts, DashboardData};
