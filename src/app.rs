//! Application state and navigation logic.

use std::time::Instant;

use anyhow::Result;

use crate::core::{Metric, MonitorSession, Tank};
use crate::ui::overview::SortColumn;
use crate::ui::Theme;

/// Smallest chart window the keys can select.
pub const MIN_WINDOW: usize = 2;
/// Largest chart window the keys can select.
pub const MAX_WINDOW: usize = 240;
/// Default number of points the charts show.
pub const DEFAULT_WINDOW: usize = 5;

/// The current view/tab in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// One row per tank with its latest readings.
    Overview,
    /// Time-series charts for the selected tank.
    Charts,
    /// Current ideal-range violations.
    Alerts,
}

impl View {
    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::Overview => View::Charts,
            View::Charts => View::Alerts,
            View::Alerts => View::Overview,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        match self {
            View::Overview => View::Alerts,
            View::Charts => View::Overview,
            View::Alerts => View::Charts,
        }
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Charts => "Charts",
            View::Alerts => "Alerts",
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub show_help: bool,

    /// The monitoring session this UI presents.
    pub session: MonitorSession,

    // Navigation state
    pub selected_tank_index: usize,
    /// How many points the charts show (the "last n" window).
    pub window: usize,

    // Sorting (Overview view)
    pub sort_column: SortColumn,
    pub sort_ascending: bool,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App over the given session.
    pub fn new(session: MonitorSession, theme: Theme) -> Self {
        Self {
            running: true,
            current_view: View::Overview,
            show_help: false,
            session,
            selected_tank_index: 0,
            window: DEFAULT_WINDOW,
            sort_column: SortColumn::default(),
            sort_ascending: true,
            theme,
            status_message: None,
        }
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < std::time::Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// One evaluation opportunity for the periodic trigger.
    ///
    /// Called by the host's refresh clock; returns whether a sampling pass
    /// fired.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        self.session.maybe_sample_periodic(now)
    }

    /// Run a manual sampling pass across all tanks.
    pub fn sample_now(&mut self) {
        self.session.sample_now();
        let tanks = self.session.tanks().len();
        self.set_status_message(format!("Sampled {} tanks", tanks));
    }

    /// Switch to the next view.
    pub fn next_view(&mut self) {
        self.current_view = self.current_view.next();
    }

    /// Switch to the previous view.
    pub fn prev_view(&mut self) {
        self.current_view = self.current_view.prev();
    }

    /// Switch to a specific view.
    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// Get the actual tank index from the visual index (after sorting).
    ///
    /// The Overview view sorts its rows, so the visual row index differs
    /// from the underlying fleet index.
    pub fn selected_tank_raw_index(&self) -> Option<usize> {
        let tanks = self.session.tanks();
        if tanks.is_empty() {
            return None;
        }

        let mut ordered: Vec<(usize, &Tank)> = tanks.iter().enumerate().collect();
        crate::ui::overview::sort_tanks_by(
            &mut ordered,
            self.sort_column,
            self.sort_ascending,
            &self.session,
        );

        let visual = self.selected_tank_index.min(ordered.len() - 1);
        ordered.get(visual).map(|(idx, _)| *idx)
    }

    /// The currently selected tank, if the fleet is non-empty.
    pub fn selected_tank(&self) -> Option<&Tank> {
        self.selected_tank_raw_index().and_then(|i| self.session.tanks().get(i))
    }

    /// Move tank selection down by one.
    pub fn select_next(&mut self) {
        self.select_next_n(1);
    }

    /// Move tank selection up by one.
    pub fn select_prev(&mut self) {
        self.select_prev_n(1);
    }

    /// Move tank selection down by n.
    pub fn select_next_n(&mut self, n: usize) {
        let max = self.session.tanks().len().saturating_sub(1);
        self.selected_tank_index = (self.selected_tank_index + n).min(max);
    }

    /// Move tank selection up by n.
    pub fn select_prev_n(&mut self, n: usize) {
        self.selected_tank_index = self.selected_tank_index.saturating_sub(n);
    }

    /// Jump to the first tank.
    pub fn select_first(&mut self) {
        self.selected_tank_index = 0;
    }

    /// Jump to the last tank.
    pub fn select_last(&mut self) {
        self.selected_tank_index = self.session.tanks().len().saturating_sub(1);
    }

    /// Widen the chart window by `n` points.
    pub fn widen_window(&mut self, n: usize) {
        self.window = (self.window + n).min(MAX_WINDOW);
    }

    /// Narrow the chart window by `n` points.
    pub fn narrow_window(&mut self, n: usize) {
        self.window = self.window.saturating_sub(n).max(MIN_WINDOW);
    }

    /// Cycle the Overview sort column.
    pub fn cycle_sort(&mut self) {
        self.sort_column = self.sort_column.next();
    }

    /// Toggle sort direction between ascending and descending.
    pub fn toggle_sort_direction(&mut self) {
        self.sort_ascending = !self.sort_ascending;
    }

    /// Go back: close the help overlay first, otherwise return to Overview.
    pub fn go_back(&mut self) {
        if self.show_help {
            self.show_help = false;
            return;
        }
        if self.current_view != View::Overview {
            self.current_view = View::Overview;
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export current readings and alerts to a JSON file.
    pub fn export_state(&self, path: &std::path::Path) -> Result<()> {
        use std::io::Write;

        let alerts = self.session.evaluate_alerts();

        let mut export = serde_json::Map::new();

        // Summary
        let mut summary = serde_json::Map::new();
        summary.insert(
            "total_tanks".to_string(),
            serde_json::json!(self.session.tanks().len()),
        );
        summary.insert("alerts".to_string(), serde_json::json!(alerts.len()));

        let total_samples: usize = self
            .session
            .tanks()
            .iter()
            .map(|t| self.session.sample_count(&t.name))
            .sum();
        summary.insert("total_samples".to_string(), serde_json::json!(total_samples));

        export.insert("summary".to_string(), serde_json::Value::Object(summary));

        // Tanks with their latest readings
        let tanks: Vec<serde_json::Value> = self
            .session
            .tanks()
            .iter()
            .map(|t| {
                let latest: serde_json::Map<String, serde_json::Value> = Metric::ALL
                    .iter()
                    .map(|&m| {
                        (
                            m.label().to_string(),
                            serde_json::json!(self.session.latest(&t.name, m)),
                        )
                    })
                    .collect();
                serde_json::json!({
                    "name": t.name,
                    "category": t.category.label(),
                    "samples": self.session.sample_count(&t.name),
                    "latest": latest,
                })
            })
            .collect();
        export.insert("tanks".to_string(), serde_json::Value::Array(tanks));

        // Active alerts
        let alerts_json: Vec<serde_json::Value> = alerts
            .iter()
            .map(|a| {
                serde_json::json!({
                    "tank": a.tank,
                    "metric": a.metric.label(),
                    "value": a.value,
                    "ideal": [a.low, a.high],
                    "message": a.to_string(),
                })
            })
            .collect();
        export.insert("alerts".to_string(), serde_json::Value::Array(alerts_json));

        let json = serde_json::to_string_pretty(&serde_json::Value::Object(export))?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Fleet, IdealRanges, ReadingGenerator, DEFAULT_SAMPLE_INTERVAL};

    fn app() -> App {
        let session = MonitorSession::new(
            &Fleet::default(),
            ReadingGenerator::seeded(9),
            IdealRanges::default(),
            DEFAULT_SAMPLE_INTERVAL,
        );
        App::new(session, Theme::dark())
    }

    #[test]
    fn test_view_cycle_round_trips() {
        let mut a = app();
        assert_eq!(a.current_view, View::Overview);
        a.next_view();
        a.next_view();
        a.next_view();
        assert_eq!(a.current_view, View::Overview);
        a.prev_view();
        assert_eq!(a.current_view, View::Alerts);
    }

    #[test]
    fn test_tank_selection_clamps() {
        let mut a = app();
        a.select_prev();
        assert_eq!(a.selected_tank_index, 0);
        a.select_next_n(100);
        assert_eq!(a.selected_tank_index, 7);
        assert_eq!(a.selected_tank().unwrap().name, "Nursery Tank 4");
    }

    #[test]
    fn test_window_adjustment_clamps() {
        let mut a = app();
        assert_eq!(a.window, DEFAULT_WINDOW);
        a.narrow_window(100);
        assert_eq!(a.window, MIN_WINDOW);
        a.widen_window(10_000);
        assert_eq!(a.window, MAX_WINDOW);
    }

    #[test]
    fn test_manual_sample_sets_status() {
        let mut a = app();
        a.sample_now();
        assert_eq!(a.session.sample_count("Grower Tank 1"), 1);
        assert_eq!(a.get_status_message(), Some("Sampled 8 tanks"));
    }

    #[test]
    fn test_export_state_writes_snapshot() {
        let mut a = app();
        a.sample_now();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        a.export_state(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["summary"]["total_tanks"], 8);
        assert_eq!(value["summary"]["total_samples"], 8);
        assert_eq!(value["tanks"].as_array().unwrap().len(), 8);
        assert!(value["tanks"][0]["latest"]["pH"].is_number());
    }
}
