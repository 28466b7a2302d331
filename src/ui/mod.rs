//! Terminal rendering using ratatui.
//!
//! - [`card`]: pure projection of one risk record into a bordered card
//! - [`dashboard`]: the page view - header with derived counts plus the card grid
//! - [`common`]: header bar, status bar, and help overlay shared chrome
//! - [`theme`]: dark/light color themes with terminal auto-detection

pub mod card;
pub mod common;
pub mod dashboard;
pub mod theme;

pub use theme::Theme;
