// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # riskwatch
//!
//! A terminal dashboard and library for viewing device risk assessments.
//!
//! This crate renders the batches produced by a risk assessment backend:
//! one card per device, a header with the derived critical-device count,
//! and a status bar. Batches can come from an in-memory fixture, a polled
//! JSON file, or a channel fed by a live producer.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐   ┌─────────┐  │
//! │  │  app    │───▶│   data   │───▶│   ui    │──▶│ Terminal│  │
//! │  │ (state) │    │(derived  │    │(cards + │   │         │  │
//! │  └────┬────┘    │  counts) │    │ header) │   └─────────┘  │
//! │       │         └──────────┘    └─────────┘                │
//! │       ▼                                                    │
//! │  ┌─────────┐                                               │
//! │  │ source  │◀── FixtureSource | FileSource | ChannelSource │
//! │  │ (input) │                                               │
//! │  └─────────┘                                               │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state and the Empty → Loading → Loaded/Failed
//!   load state machine
//! - **[`source`]**: Data source abstraction ([`RiskSource`] trait) with
//!   fixture, file-polling, and channel implementations
//! - **[`data`]**: Data models - converts raw batches into [`DashboardData`]
//!   with per-category counts
//! - **[`ui`]**: Terminal rendering using ratatui - risk cards, page header,
//!   and theme support
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # View a JSON batch file (written by the backend's batch scorer)
//! riskwatch --file risk.json
//!
//! # View the built-in demo batch
//! riskwatch --demo
//! ```
//!
//! ### As a library with the demo fixture
//!
//! ```
//! use riskwatch::{App, FixtureSource};
//!
//! let source = Box::new(FixtureSource::demo());
//! let mut app = App::new(source);
//! app.refresh().unwrap();
//! assert_eq!(app.state.data().unwrap().critical_count(), 1);
//! ```
//!
//! ### As a library with a channel source (for live integration)
//!
//! ```
//! use riskwatch::{App, ChannelSource};
//!
//! // Create a channel for receiving batches
//! let (tx, source) = ChannelSource::create("risk-api");
//!
//! // Create the app; push batches through `tx` from your producer
//! let app = App::new(Box::new(source));
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, LoadState};
pub use data::{CategoryCounts, DashboardData};
pub use source::{
    ChannelSource, FileSource, FixtureSource, RiskBatch, RiskCategory, RiskRecord, RiskSource,
};
pub use ui::Theme;
