//! Overview view rendering.
//!
//! Displays a table of all tanks with their latest reading per metric,
//! colored by ideal-range status.

use std::cmp::Ordering;

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::core::{Metric, MonitorSession, Tank};

/// Column to sort by in the Overview view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    /// Sort by tank name (initialization order equivalent).
    #[default]
    Name,
    /// Sort by latest temperature.
    Temperature,
    /// Sort by latest pH.
    Ph,
    /// Sort by latest dissolved oxygen.
    DissolvedOxygen,
    /// Sort by alert status.
    Status,
}

impl SortColumn {
    /// Cycle to the next sort column.
    pub fn next(self) -> Self {
        match self {
            SortColumn::Name => SortColumn::Temperature,
            SortColumn::Temperature => SortColumn::Ph,
            SortColumn::Ph => SortColumn::DissolvedOxygen,
            SortColumn::DissolvedOxygen => SortColumn::Status,
            SortColumn::Status => SortColumn::Name,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Temperature => "temp",
            SortColumn::Ph => "pH",
            SortColumn::DissolvedOxygen => "DO",
            SortColumn::Status => "status",
        }
    }
}

/// Whether any of the tank's latest readings violates its ideal range.
fn has_alert(session: &MonitorSession, tank: &Tank) -> bool {
    Metric::ALL.iter().any(|&m| {
        session
            .latest(&tank.name, m)
            .is_some_and(|v| session.ideal_ranges().is_violation(m, v))
    })
}

/// Sort tanks by the given column and direction (public for use by App's
/// visual-to-raw index mapping).
pub fn sort_tanks_by(
    tanks: &mut [(usize, &Tank)],
    column: SortColumn,
    ascending: bool,
    session: &MonitorSession,
) {
    let latest = |tank: &Tank, metric: Metric| session.latest(&tank.name, metric);

    tanks.sort_by(|a, b| {
        let primary = match column {
            SortColumn::Name => a.1.name.cmp(&b.1.name),
            SortColumn::Temperature => compare_values(
                latest(a.1, Metric::Temperature),
                latest(b.1, Metric::Temperature),
            ),
            SortColumn::Ph => compare_values(latest(a.1, Metric::Ph), latest(b.1, Metric::Ph)),
            SortColumn::DissolvedOxygen => compare_values(
                latest(a.1, Metric::DissolvedOxygen),
                latest(b.1, Metric::DissolvedOxygen),
            ),
            SortColumn::Status => has_alert(session, a.1).cmp(&has_alert(session, b.1)),
        };

        let primary = if ascending { primary } else { primary.reverse() };

        // Secondary sort by name for stability when primary values are equal
        if primary == Ordering::Equal {
            a.1.name.cmp(&b.1.name)
        } else {
            primary
        }
    });
}

/// Tanks with no data sort before any reading.
fn compare_values(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Render the Overview view showing all tanks in a sortable table.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let session = &app.session;

    let mut tanks: Vec<(usize, &Tank)> = session.tanks().iter().enumerate().collect();
    sort_tanks_by(&mut tanks, app.sort_column, app.sort_ascending, session);

    let header = Row::new(vec![
        Cell::from(format_header("Tank", SortColumn::Name, app)),
        Cell::from("Category"),
        Cell::from(format_header("Temp (°C)", SortColumn::Temperature, app)),
        Cell::from(format_header("pH", SortColumn::Ph, app)),
        Cell::from(format_header("DO (mg/L)", SortColumn::DissolvedOxygen, app)),
        Cell::from("Samples"),
        Cell::from(format_header("Status", SortColumn::Status, app)),
    ])
    .height(1)
    .style(app.theme.header);

    let rows: Vec<Row> = tanks
        .iter()
        .map(|(_, tank)| {
            let mut cells = vec![
                Cell::from(tank.name.clone()),
                Cell::from(tank.category.label()),
            ];

            for metric in Metric::ALL {
                cells.push(match session.latest(&tank.name, metric) {
                    Some(value) => {
                        let in_range = !session.ideal_ranges().is_violation(metric, value);
                        Cell::from(format!("{:.2}", value))
                            .style(app.theme.reading_style(in_range))
                    }
                    None => Cell::from("-").style(Style::default().add_modifier(Modifier::DIM)),
                });
            }

            cells.push(Cell::from(format!("{}", session.sample_count(&tank.name))));

            cells.push(if session.sample_count(&tank.name) == 0 {
                Cell::from("-").style(Style::default().add_modifier(Modifier::DIM))
            } else if has_alert(session, tank) {
                Cell::from("ALERT").style(app.theme.reading_style(false))
            } else {
                Cell::from("OK").style(app.theme.reading_style(true))
            });

            Row::new(cells)
        })
        .collect();

    let widths = [
        Constraint::Fill(3), // Tank - gets 3x share (largest)
        Constraint::Fill(1), // Category
        Constraint::Fill(1), // Temp
        Constraint::Fill(1), // pH
        Constraint::Fill(1), // DO
        Constraint::Fill(1), // Samples
        Constraint::Min(6),  // Status - fixed minimum
    ];

    let selected_visual_index = app.selected_tank_index.min(tanks.len().saturating_sub(1));

    let sort_dir = if app.sort_ascending { "↑" } else { "↓" };
    let position_info = if !tanks.is_empty() {
        format!(" [{}/{}]", selected_visual_index + 1, tanks.len())
    } else {
        String::new()
    };

    let title = format!(
        " Tanks ({}) [s:sort {}{}]{} ",
        tanks.len(),
        app.sort_column.label(),
        sort_dir,
        position_info
    );

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(selected_visual_index));

    frame.render_stateful_widget(table, area, &mut state);
}

fn format_header(name: &str, col: SortColumn, app: &App) -> Span<'static> {
    if app.sort_column == col {
        let arrow = if app.sort_ascending { "↑" } else { "↓" };
        Span::raw(format!("{}{}", name, arrow))
    } else {
        Span::raw(name.to_string())
    }
}
