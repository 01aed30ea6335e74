//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, View};

/// Render the header bar with the farm-wide status overview.
///
/// Displays: status indicator, tank count, alert count, sample totals.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let tanks = app.session.tanks();
    let total_samples: usize =
        tanks.iter().map(|t| app.session.sample_count(&t.name)).sum();

    if total_samples == 0 {
        let line = Line::from(vec![
            Span::styled(
                " TANKWATCH ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("│ {} tanks │ No data yet — press u to sample", tanks.len())),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let alerts = app.session.evaluate_alerts();

    // Overall status indicator: red if any tank is out of range
    let status_style = if alerts.is_empty() {
        Style::default().fg(app.theme.ok)
    } else {
        Style::default().fg(app.theme.alert).add_modifier(Modifier::BOLD)
    };

    let line = Line::from(vec![
        Span::styled(" ● ", status_style),
        Span::styled("TANKWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(
            format!("{}", tanks.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" tanks │ "),
        if alerts.is_empty() {
            Span::styled("0 alerts", Style::default().fg(app.theme.ok))
        } else {
            Span::styled(
                format!("{} alerts", alerts.len()),
                Style::default().fg(app.theme.alert).add_modifier(Modifier::BOLD),
            )
        },
        Span::raw(" │ "),
        Span::raw(format!("{} samples", total_samples)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the tab bar showing available views.
///
/// Highlights the currently active view.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = vec![
        Line::from(" 1:Overview "),
        Line::from(" 2:Charts "),
        Line::from(" 3:Alerts "),
    ];

    let selected = match app.current_view {
        View::Overview => 0,
        View::Charts => 1,
        View::Alerts => 2,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows time since the last sampling pass and context-sensitive controls.
/// Also displays temporary status messages.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let elapsed = app.session.since_last_sample();
    let interval = app.session.sample_interval();
    let next_auto = interval.saturating_sub(elapsed);

    let controls = match app.current_view {
        View::Overview => "u:update s:sort Tab:switch Enter:charts ?:help q:quit",
        View::Charts => "u:update +/-:window ↑↓:tank Tab:switch ?:help q:quit",
        View::Alerts => "u:update Tab:switch ?:help q:quit",
    };

    let status = format!(
        " {} | Sampled {:.0}s ago, next auto in {:.0}s | {}",
        app.current_view.label(),
        elapsed.as_secs_f64(),
        next_auto.as_secs_f64(),
        controls,
    );

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ←/→ h/l     Switch views"),
        Line::from("  ↑/↓ j/k     Select tank"),
        Line::from("  Home/End    First/last tank"),
        Line::from("  Enter       Charts for tank"),
        Line::from("  Esc         Back to overview"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Monitoring",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  u         Update sensor data now"),
        Line::from("  +/-       Chart window ±1 point"),
        Line::from("  */_       Chart window ±10 points"),
        Line::from("  s         Cycle sort column"),
        Line::from("  S         Toggle sort direction"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
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
    let help_width = 42u16.min(area.width.saturating_sub(4));
    let help_height = 24u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
