// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, ValueEnum};
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
mod config;
mod core;
mod events;
mod ui;

use app::{App, View};
use crate::config::FarmConfig;
use crate::core::{Fleet, MonitorSession, ReadingGenerator};
use ui::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeChoice {
    Dark,
    Light,
}

#[derive(Parser, Debug)]
#[command(name = "tankwatch")]
#[command(about = "Live TUI dashboard for monitoring aquaculture tank sensors")]
struct Args {
    /// Optional TOML config file (fleet shape, intervals, ideal ranges)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of grower tanks [default: 4]
    #[arg(long)]
    grower: Option<usize>,

    /// Number of nursery tanks [default: 4]
    #[arg(long)]
    nursery: Option<usize>,

    /// Seconds between automatic sampling passes [default: 60]
    #[arg(short = 'i', long)]
    sample_interval: Option<u64>,

    /// Seconds between evaluations of the periodic trigger [default: 60]
    #[arg(short, long)]
    refresh: Option<u64>,

    /// Number of points the charts show initially [default: 5]
    #[arg(short, long)]
    window: Option<usize>,

    /// Seed for the reading generator (reproducible runs)
    #[arg(long)]
    seed: Option<u64>,

    /// Take one sampling pass immediately on startup
    #[arg(long)]
    sample_on_start: bool,

    /// Force a theme instead of auto-detecting
    #[arg(long, value_enum)]
    theme: Option<ThemeChoice>,

    /// Sample once, write a JSON snapshot to this path, and exit
    #[arg(short, long)]
    export: Option<PathBuf>,
}

/// Settings after merging CLI flags over the optional config file.
///
/// CLI flags win; the config file fills gaps; hard defaults cover the rest.
struct Settings {
    grower: usize,
    nursery: usize,
    sample_interval: Duration,
    refresh: Duration,
    window: usize,
}

impl Settings {
    fn resolve(args: &Args, file: &FarmConfig) -> Self {
        Self {
            grower: args.grower.or(file.grower_tanks).unwrap_or(4),
            nursery: args.nursery.or(file.nursery_tanks).unwrap_or(4),
            sample_interval: Duration::from_secs(
                args.sample_interval.or(file.sample_interval_secs).unwrap_or(60),
            ),
            refresh: Duration::from_secs(args.refresh.or(file.refresh_secs).unwrap_or(60)),
            window: args
                .window
                .or(file.window)
                .unwrap_or(app::DEFAULT_WINDOW)
                .clamp(app::MIN_WINDOW, app::MAX_WINDOW),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = match &args.config {
        Some(path) => FarmConfig::load(path)?,
        None => FarmConfig::default(),
    };
    let settings = Settings::resolve(&args, &file_config);

    let fleet = Fleet::new(settings.grower, settings.nursery);
    let generator = match args.seed {
        Some(seed) => ReadingGenerator::seeded(seed),
        None => ReadingGenerator::new(),
    };
    let mut session = MonitorSession::new(
        &fleet,
        generator,
        file_config.ideal_ranges(),
        settings.sample_interval,
    );

    // Handle export mode (non-interactive)
    if let Some(export_path) = args.export {
        return export_to_file(session, &export_path);
    }

    if args.sample_on_start {
        session.sample_now();
    }

    let theme = match args.theme {
        Some(ThemeChoice::Dark) => Theme::dark(),
        Some(ThemeChoice::Light) => Theme::light(),
        None => Theme::auto_detect(),
    };

    run_tui(session, theme, settings)
}

/// Run the TUI over the given session
fn run_tui(session: MonitorSession, theme: Theme, settings: Settings) -> Result<()> {
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

    let mut app = App::new(session, theme);
    app.window = settings.window;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, settings.refresh);

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
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 12;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                render_too_small(frame, area, MIN_WIDTH, MIN_HEIGHT);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Length(1), // Tabs
                Constraint::Min(8),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            // Render header with farm status
            ui::common::render_header(frame, app, chunks[0]);

            // Render tabs
            ui::common::render_tabs(frame, app, chunks[1]);

            // Render current view
            match app.current_view {
                View::Overview => ui::overview::render(frame, app, chunks[2]),
                View::Charts => ui::charts::render(frame, app, chunks[2]),
                View::Alerts => ui::alerts::render(frame, app, chunks[2]),
            }

            // Render status bar
            ui::common::render_status_bar(frame, app, chunks[3]);

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(app, key),
                Event::Mouse(mouse) => {
                    // Content starts after header (1) + tabs (1) + table header (1)
                    events::handle_mouse_event(app, mouse, 3);
                }
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // Evaluate the periodic sampling trigger on the refresh cadence
        if last_refresh.elapsed() >= refresh_interval {
            if app.on_tick(Instant::now()) {
                app.set_status_message("Auto-sampled all tanks".to_string());
            }
            last_refresh = Instant::now();
        }
    }

    Ok(())
}

/// Ask the user to resize; must survive arbitrarily small areas
fn render_too_small(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, min_w: u16, min_h: u16) {
    let msg = format!(
        "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
        area.width, area.height, min_w, min_h
    );
    let paragraph = ratatui::widgets::Paragraph::new(msg)
        .alignment(ratatui::layout::Alignment::Center)
        .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
    let y = (area.height / 2).saturating_sub(2);
    let height = (area.height - y).min(5);
    let centered = ratatui::layout::Rect::new(0, y, area.width, height);
    frame.render_widget(paragraph, centered);
}

/// Sample once and export the snapshot to a JSON file
fn export_to_file(mut session: MonitorSession, export_path: &std::path::Path) -> Result<()> {
    // One sampling pass so the export carries readings
    session.sample_now();

    let app = App::new(session, Theme::dark());
    app.export_state(export_path)?;

    println!("Exported tank snapshot to: {}", export_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_resolve_clamps_window() {
        let args = Args::parse_from(["tankwatch", "--window", "0"]);
        let settings = Settings::resolve(&args, &FarmConfig::default());
        assert_eq!(settings.window, app::MIN_WINDOW);

        let args = Args::parse_from(["tankwatch", "--window", "100000"]);
        let settings = Settings::resolve(&args, &FarmConfig::default());
        assert_eq!(settings.window, app::MAX_WINDOW);
    }

    #[test]
    fn test_too_small_message_survives_tiny_terminal() {
        for (w, h) in [(10u16, 1u16), (10, 2), (10, 3), (59, 11)] {
            let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
            terminal
                .draw(|frame| {
                    let area = frame.area();
                    render_too_small(frame, area, 60, 12);
                })
                .unwrap();
        }
    }
}
