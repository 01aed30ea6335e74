//! Alerts view rendering.
//!
//! Displays the current ideal-range violations as a table, or a healthy
//! message when every latest reading is in range.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;

/// Render the Alerts view.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let alerts = app.session.evaluate_alerts();

    if alerts.is_empty() {
        render_healthy_message(frame, app, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Tank"),
        Cell::from("Metric"),
        Cell::from("Value"),
        Cell::from("Ideal"),
    ])
    .height(1)
    .style(app.theme.header);

    let rows: Vec<Row> = alerts
        .iter()
        .map(|alert| {
            Row::new(vec![
                Cell::from(alert.tank.clone()),
                Cell::from(alert.metric.label()),
                Cell::from(format!("{:.2}", alert.value)).style(app.theme.reading_style(false)),
                Cell::from(format!("{}-{}", alert.low, alert.high)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Fill(3),    // Tank
        Constraint::Fill(2),    // Metric
        Constraint::Length(10), // Value
        Constraint::Length(12), // Ideal
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(format!(" Alerts ({}) ", alerts.len()))
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.alert)),
    );

    frame.render_widget(table, area);
}

/// Shown when no latest reading violates its ideal range.
fn render_healthy_message(frame: &mut Frame, app: &App, area: Rect) {
    let has_data = app
        .session
        .tanks()
        .iter()
        .any(|t| app.session.sample_count(&t.name) > 0);

    let line = if has_data {
        Line::from(Span::styled(
            "  All readings are within safe limits.",
            Style::default().fg(app.theme.ok),
        ))
    } else {
        Line::from(Span::styled(
            "  No data yet. Press u to update sensor data.",
            Style::default().add_modifier(Modifier::DIM),
        ))
    };

    let block = Block::default()
        .title(" Alerts (0) ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let message = Paragraph::new(vec![Line::from(""), line]).block(block);
    frame.render_widget(message, area);
}
