// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};

mod app;
mod data;
mod events;
mod source;
mod ui;

use app::App;
use source::{FileSource, FixtureSource, RiskSource};

#[derive(Parser, Debug)]
#[command(name = "riskwatch")]
#[command(about = "Terminal dashboard for device risk assessments")]
struct Args {
    /// Path to a JSON batch file of risk records
    #[arg(short, long, default_value = "risk.json", conflicts_with = "demo")]
    file: PathBuf,

    /// Use the built-in demo batch instead of a file
    #[arg(long, conflicts_with_all = ["export"])]
    demo: bool,

    /// Refresh interval in seconds (only used with --file)
    #[arg(short, long, default_value = "1")]
    refresh: u64,

    /// Export a summary of the batch file to JSON and exit
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Handle export mode (non-interactive)
    if let Some(export_path) = args.export {
        return export_to_file(&args.file, &export_path);
    }

    let source: Box<dyn RiskSource> = if args.demo {
        Box::new(FixtureSource::demo())
    } else {
        Box::new(FileSource::new(&args.file))
    };

    run_tui(source, Duration::from_secs(args.refresh))
}

/// Run the TUI with the given data source
fn run_tui(source: Box<dyn RiskSource>, refresh_interval: Duration) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Create app and issue the initial retrieval
    let mut app = App::new(source);
    let _ = app.refresh();

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, refresh_interval);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    refresh_interval: Duration,
) -> Result<()> {
    let mut last_refresh = Instant::now();

    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 40;
    const MIN_HEIGHT: u16 = 10;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered =
                    ratatui::layout::Rect::new(0, (area.height / 2).saturating_sub(2), area.width, 5);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Min(6),    // Dashboard page
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            // Render header with fleet risk overview
            ui::common::render_header(frame, app, chunks[0]);

            // Render the dashboard page
            ui::dashboard::render(frame, app, chunks[1]);

            // Render status bar
            ui::common::render_status_bar(frame, app, chunks[2]);

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => events::handle_mouse_event(app, mouse),
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Auto-refresh data periodically
        if last_refresh.elapsed() >= refresh_interval {
            let _ = app.refresh();
            last_refresh = Instant::now();
        }
    }

    Ok(())
}

/// Export a batch summary to a JSON file
fn export_to_file(batch_path: &std::path::Path, export_path: &std::path::Path) -> Result<()> {
    use std::io::Write;

    let data = data::DashboardData::load(batch_path)?;

    let export = serde_json::json!({
        "summary": {
            "total_devices": data.counts.total(),
            "low": data.counts.low,
            "medium": data.counts.medium,
            "high": data.counts.high,
            "critical": data.counts.critical,
        },
        "records": data.records,
    });

    let json = serde_json::to_string_pretty(&export)?;
    let mut file = std::fs::File::create(export_path)?;
    file.write_all(json.as_bytes())?;

    println!("Exported risk summary to: {}", export_path.display());
    Ok(())
}
