//! Charts view rendering.
//!
//! Displays one time-series chart per metric for the selected tank,
//! showing the last N recorded points with the ideal band marked.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::core::{Metric, Point};

/// Render the Charts view for the currently selected tank.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(tank) = app.selected_tank().cloned() else {
        return;
    };

    if app.session.sample_count(&tank.name) == 0 {
        render_no_data_message(frame, app, &tank.name, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    for (metric, chunk) in Metric::ALL.into_iter().zip(chunks.iter()) {
        render_metric_chart(frame, app, &tank.name, metric, *chunk);
    }
}

/// Render one metric's chart: the windowed series plus the ideal band.
fn render_metric_chart(frame: &mut Frame, app: &App, tank: &str, metric: Metric, area: Rect) {
    let session = &app.session;
    let points = session.tail(tank, metric, app.window);
    let total = session.sample_count(tank);

    // A zero window yields an empty tail even when samples exist
    let Some(&(origin, _)) = points.first() else {
        return;
    };
    let data: Vec<(f64, f64)> = points
        .iter()
        .map(|(t, v)| {
            let secs = (*t - origin).num_milliseconds() as f64 / 1000.0;
            (secs, *v)
        })
        .collect();

    let x_max = data.last().map(|(x, _)| *x).unwrap_or(0.0).max(1.0);

    let (low, high) = session.ideal_ranges().get(metric);
    let band_low = [(0.0, low), (x_max, low)];
    let band_high = [(0.0, high), (x_max, high)];

    // Y bounds cover the generation range so scale stays stable across
    // samples, widened if an override pushes the ideal band outside it
    let (gen_low, gen_high) = metric.generation_range();
    let y_min = gen_low.min(low) - 0.5;
    let y_max = gen_high.max(high) + 0.5;

    let datasets = vec![
        Dataset::default()
            .graph_type(GraphType::Line)
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(app.theme.ok).add_modifier(Modifier::DIM))
            .data(&band_low),
        Dataset::default()
            .graph_type(GraphType::Line)
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(app.theme.ok).add_modifier(Modifier::DIM))
            .data(&band_high),
        Dataset::default()
            .name(metric.short_label())
            .graph_type(GraphType::Line)
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(app.theme.highlight))
            .data(&data),
    ];

    let x_labels = vec![
        Span::raw(points[0].0.format("%H:%M:%S").to_string()),
        Span::raw(points[points.len() - 1].0.format("%H:%M:%S").to_string()),
    ];
    let y_labels = vec![
        Span::raw(format!("{:.1}", y_min)),
        Span::raw(format!("{:.1}", low)),
        Span::raw(format!("{:.1}", high)),
        Span::raw(format!("{:.1}", y_max)),
    ];

    let title = format!(
        " {} — {} (last {}/{}) {} ",
        metric.label(),
        tank,
        points.len(),
        total,
        latest_summary(&points),
    );

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(app.theme.border))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(app.theme.border))
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// "Latest 29.50 at 14:03:22" fragment for the chart title.
fn latest_summary(points: &[Point]) -> String {
    match points.last() {
        Some((at, value)) => format!("│ Latest {:.2} at {}", value, at.format("%H:%M:%S")),
        None => String::new(),
    }
}

/// Shown when the selected tank has no readings yet.
fn render_no_data_message(frame: &mut Frame, app: &App, tank: &str, area: Rect) {
    let block = Block::default()
        .title(format!(" Charts — {} ", tank))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let message = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "  No data yet. Press u to update sensor data.",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ])
    .block(block);

    frame.render_widget(message, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::core::{
        Fleet, IdealRanges, MonitorSession, ReadingGenerator, DEFAULT_SAMPLE_INTERVAL,
    };
    use crate::ui::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    fn app_with_one_sample() -> App {
        let mut session = MonitorSession::new(
            &Fleet::default(),
            ReadingGenerator::seeded(7),
            IdealRanges::default(),
            DEFAULT_SAMPLE_INTERVAL,
        );
        session.sample_now();
        App::new(session, Theme::dark())
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, app, area);
            })
            .unwrap();
    }

    #[test]
    fn test_render_survives_zero_window() {
        let mut app = app_with_one_sample();
        app.window = 0;
        draw(&mut app);
    }

    #[test]
    fn test_render_single_point_window() {
        let mut app = app_with_one_sample();
        app.window = 1;
        draw(&mut app);
    }
}
