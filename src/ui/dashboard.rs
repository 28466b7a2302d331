//! Dashboard page rendering.
//!
//! Renders the page header with the derived critical count, then a grid
//! of risk cards, one per record, in provider order.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, LoadState};
use crate::data::DashboardData;
use crate::ui::card::{self, CARD_HEIGHT, CARD_WIDTH};
use crate::ui::Theme;

/// Dashboard title shown in the page header.
const TITLE: &str = "Legal Risk AI Engine";

/// Render the dashboard page for the current load state.
///
/// The match is exhaustive on purpose: a failed retrieval must render its
/// own panel and can never fall through to the loading placeholder.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    match &app.state {
        LoadState::Empty | LoadState::Loading => render_loading(frame, &app.theme, area),
        LoadState::Failed(err) => render_failed(frame, &app.theme, err, area),
        LoadState::Loaded(data) => render_loaded(frame, &app.theme, data, app.scroll_row, area),
    }
}

/// Number of card columns that fit in the given width.
pub fn grid_columns(width: u16) -> usize {
    (width / CARD_WIDTH).max(1) as usize
}

/// Number of card rows needed for the given record count.
pub fn grid_rows(record_count: usize, columns: usize) -> usize {
    record_count.div_ceil(columns.max(1))
}

/// Highest useful scroll position for the grid.
pub fn max_scroll_row(record_count: usize, columns: usize, visible_rows: usize) -> usize {
    grid_rows(record_count, columns).saturating_sub(visible_rows.max(1))
}

fn render_loading(frame: &mut Frame, theme: &Theme, area: Rect) {
    let block = page_block(theme, " Loading ");
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Loading risk data...",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ])
    .block(block);
    frame.render_widget(text, area);
}

fn render_failed(frame: &mut Frame, theme: &Theme, err: &str, area: Rect) {
    let block = Block::default()
        .title(" Retrieval Failed ")
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.critical));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "  Could not retrieve risk data: ",
                Style::default().fg(theme.critical),
            ),
            Span::raw(err.to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Press r to retry",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ])
    .block(block);
    frame.render_widget(text, area);
}

fn render_loaded(
    frame: &mut Frame,
    theme: &Theme,
    data: &DashboardData,
    scroll_row: usize,
    area: Rect,
) {
    let chunks = Layout::vertical([
        Constraint::Length(4), // Page header
        Constraint::Min(CARD_HEIGHT), // Card grid
    ])
    .split(area);

    render_page_header(frame, theme, data, chunks[0]);
    render_grid(frame, theme, data, scroll_row, chunks[1]);
}

fn render_page_header(frame: &mut Frame, theme: &Theme, data: &DashboardData, area: Rect) {
    let critical = data.critical_count();
    let critical_style = if critical > 0 {
        Style::default().fg(theme.critical).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        Line::from(Span::styled(TITLE, theme.header)),
        Line::from(vec![
            Span::raw("Critical Devices: "),
            Span::styled(critical.to_string(), critical_style),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Lay the cards out in a grid, scrolled by whole card rows.
///
/// Every record gets a card; the viewport just windows over the rows.
fn render_grid(
    frame: &mut Frame,
    theme: &Theme,
    data: &DashboardData,
    scroll_row: usize,
    area: Rect,
) {
    if data.records.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "  No devices reported",
            Style::default().add_modifier(Modifier::DIM),
        )));
        frame.render_widget(empty, area);
        return;
    }

    let columns = grid_columns(area.width);
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let scroll = scroll_row.min(max_scroll_row(data.records.len(), columns, visible_rows));

    for (i, record) in data.records.iter().enumerate() {
        let row = i / columns;
        let col = i % columns;

        if row < scroll || row >= scroll + visible_rows {
            continue;
        }

        let x = area.x + (col as u16) * CARD_WIDTH;
        let y = area.y + ((row - scroll) as u16) * CARD_HEIGHT;
        let width = CARD_WIDTH.min(area.width.saturating_sub((col as u16) * CARD_WIDTH));
        let height = CARD_HEIGHT
            .min(area.height.saturating_sub(((row - scroll) as u16) * CARD_HEIGHT));
        if width < 4 || height < 3 {
            continue;
        }

        card::render(frame, theme, record, Rect::new(x, y, width, height));
    }
}

fn page_block(theme: &Theme, title: &str) -> Block<'static> {
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns_minimum_one() {
        assert_eq!(grid_columns(10), 1);
        assert_eq!(grid_columns(CARD_WIDTH), 1);
        assert_eq!(grid_columns(CARD_WIDTH * 3), 3);
        assert_eq!(grid_columns(CARD_WIDTH * 3 + 5), 3);
    }

    #[test]
    fn test_grid_rows() {
        assert_eq!(grid_rows(0, 3), 0);
        assert_eq!(grid_rows(3, 3), 1);
        assert_eq!(grid_rows(4, 3), 2);
        assert_eq!(grid_rows(7, 1), 7);
    }

    #[test]
    fn test_max_scroll_row() {
        // Everything fits: no scrolling
        assert_eq!(max_scroll_row(3, 3, 4), 0);
        // 7 rows, 4 visible: can scroll down 3
        assert_eq!(max_scroll_row(7, 1, 4), 3);
        assert_eq!(max_scroll_row(0, 1, 4), 0);
    }
}
