//! Risk card rendering.
//!
//! A card is a pure projection of one record: no state, no side effects.
//! The text projections live in standalone functions so the formatting
//! contract can be tested without a terminal.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::source::RiskRecord;
use crate::ui::Theme;

/// Width of one card in terminal cells, including its border.
pub const CARD_WIDTH: u16 = 32;
/// Height of one card in terminal cells, including its border.
pub const CARD_HEIGHT: u16 = 5;

/// Risk score formatted to exactly two decimal places (0.9 -> "0.90").
pub fn score_text(record: &RiskRecord) -> String {
    format!("{:.2}", record.risk_score)
}

/// Category label in upper case ("high" -> "HIGH").
pub fn category_text(record: &RiskRecord) -> &'static str {
    record.category.label()
}

/// Projected downtime with an hour suffix (12 -> "12h").
pub fn downtime_text(record: &RiskRecord) -> String {
    format!("{}h", record.downtime_hours)
}

/// Render one record as a bordered card.
///
/// Shows the device identifier as the title, then score, category, and
/// projected downtime. The border takes the category's severity color.
pub fn render(frame: &mut Frame, theme: &Theme, record: &RiskRecord, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", record.device_id))
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.category_color(record.category)));

    let lines = vec![
        Line::from(vec![
            Span::raw("Risk Score: "),
            Span::styled(
                score_text(record),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Category: "),
            Span::styled(category_text(record), theme.category_style(record.category)),
        ]),
        Line::from(vec![
            Span::raw("Projected Downtime: "),
            Span::raw(downtime_text(record)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
