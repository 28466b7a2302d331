//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::source::RiskCategory;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for low-severity records.
    pub low: Color,
    /// Color for medium-severity records.
    pub medium: Color,
    /// Color for high-severity records.
    pub high: Color,
    /// Color for critical-severity records.
    pub critical: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for header rows and titles.
    pub header: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            low: Color::Green,
            medium: Color::Cyan,
            high: Color::Yellow,
            critical: Color::Red,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            low: Color::Green,
            medium: Color::Blue,
            high: Color::Yellow,
            critical: Color::Red,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get the color for a risk category
    pub fn category_color(&self, category: RiskCategory) -> Color {
        match category {
            RiskCategory::Low => self.low,
            RiskCategory::Medium => self.medium,
            RiskCategory::High => self.high,
            RiskCategory::Critical => self.critical,
        }
    }

    /// Get the text style for a risk category
    pub fn category_style(&self, category: RiskCategory) -> Style {
        let style = Style::default().fg(self.category_color(category));
        match category {
            RiskCategory::Critical => style.add_modifier(Modifier::BOLD),
            _ => style,
        }
    }
}
