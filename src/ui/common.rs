//! Common UI components shared across the dashboard.
//!
//! This module contains the top header bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, LoadState};
use crate::source::RiskCategory;

/// Render the one-line header bar with a fleet risk overview.
///
/// Displays: status indicator, record counts by category, total devices.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let data = match &app.state {
        LoadState::Loaded(data) => data,
        LoadState::Empty | LoadState::Loading => {
            let line = Line::from(vec![
                Span::styled(" RISKWATCH ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("| Loading..."),
            ]);
            frame.render_widget(Paragraph::new(line), area);
            return;
        }
        LoadState::Failed(_) => {
            let line = Line::from(vec![
                Span::styled(" RISKWATCH ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(
                    "| retrieval failed",
                    Style::default().fg(app.theme.critical),
                ),
            ]);
            frame.render_widget(Paragraph::new(line), area);
            return;
        }
    };

    let counts = &data.counts;

    // Overall status indicator takes the worst present severity
    let status_style = if counts.critical > 0 {
        app.theme.category_style(RiskCategory::Critical)
    } else if counts.high > 0 {
        app.theme.category_style(RiskCategory::High)
    } else {
        app.theme.category_style(RiskCategory::Low)
    };

    let dim_zero = |n: usize, color: ratatui::style::Color| {
        if n > 0 {
            Span::styled(n.to_string(), Style::default().fg(color))
        } else {
            Span::styled("0", Style::default().add_modifier(Modifier::DIM))
        }
    };

    let line = Line::from(vec![
        Span::styled(" ● ", status_style),
        Span::styled("RISKWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        dim_zero(counts.low, app.theme.low),
        Span::raw(" low "),
        dim_zero(counts.medium, app.theme.medium),
        Span::raw(" med "),
        dim_zero(counts.high, app.theme.high),
        Span::raw(" high "),
        if counts.critical > 0 {
            Span::styled(
                counts.critical.to_string(),
                Style::default().fg(app.theme.critical).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("0", Style::default().add_modifier(Modifier::DIM))
        },
        Span::raw(" crit │ "),
        Span::styled(
            counts.total().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" devices"),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom.
///
/// Shows: data source, time since last update, available controls.
/// Also displays temporary status messages and retrieval errors.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph = Paragraph::new(format!(" {} ", msg))
            .style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = match &app.state {
        LoadState::Loaded(data) => {
            let elapsed = data.last_updated.elapsed();
            format!(
                " {} | Updated {:.1}s ago | ↑↓:scroll r:reload e:export ?:help q:quit",
                app.source_description(),
                elapsed.as_secs_f64(),
            )
        }
        LoadState::Failed(err) => format!(" Error: {} | q:quit r:retry", err),
        LoadState::Empty | LoadState::Loading => {
            format!(" {} | Loading... | q:quit", app.source_description())
        }
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the dashboard.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ↑/↓ j/k     Scroll cards"),
        Line::from("  PgUp/PgDn   Scroll 5 rows"),
        Line::from("  Home        Jump to top"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  r         Reload data"),
        Line::from("  e         Export to JSON"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 36u16.min(area.width.saturating_sub(4));
    let help_height = 17u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
