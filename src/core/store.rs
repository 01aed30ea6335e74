//! Append-only time-series storage for tank readings.
//!
//! Holds, per tank, one value series per metric plus a shared timestamp
//! series. Series only grow: readings are never mutated or deleted, and
//! there is no retention limit within a session.

use std::collections::HashMap;

use chrono::{DateTime, Local};

use super::metric::Metric;
use super::tank::Tank;

/// One recorded chart point: timestamp plus value.
pub type Point = (DateTime<Local>, f64);

/// The values produced by one sampling pass over a single tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricReadings {
    pub temperature: f64,
    pub ph: f64,
    pub dissolved_oxygen: f64,
}

impl MetricReadings {
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Ph => self.ph,
            Metric::DissolvedOxygen => self.dissolved_oxygen,
        }
    }
}

/// Parallel series for one tank.
///
/// Invariant: all four vectors always have the same length, because a
/// sampling event appends to all of them as one unit.
#[derive(Debug, Clone, Default)]
struct TankSeries {
    temperature: Vec<f64>,
    ph: Vec<f64>,
    dissolved_oxygen: Vec<f64>,
    timestamps: Vec<DateTime<Local>>,
}

impl TankSeries {
    fn values(&self, metric: Metric) -> &[f64] {
        match metric {
            Metric::Temperature => &self.temperature,
            Metric::Ph => &self.ph,
            Metric::DissolvedOxygen => &self.dissolved_oxygen,
        }
    }

    /// Append one reading set and its timestamp as a single unit.
    fn push(&mut self, readings: MetricReadings, at: DateTime<Local>) {
        self.temperature.push(readings.temperature);
        self.ph.push(readings.ph);
        self.dissolved_oxygen.push(readings.dissolved_oxygen);
        self.timestamps.push(at);
    }

    fn len(&self) -> usize {
        self.timestamps.len()
    }
}

/// In-memory store of every tank's series for one monitoring session.
///
/// Tanks outside the registered set are a contract violation, not a runtime
/// condition: lookups for an unknown tank panic. Empty series are normal
/// ("no data yet") and surface as `None`/empty results.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    /// Tanks in initialization order; drives evaluation and display order.
    tanks: Vec<Tank>,
    series: HashMap<String, TankSeries>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the tank set, creating an empty series group per tank.
    ///
    /// Idempotent within a session: tanks that are already registered keep
    /// their data, so calling this again never resets or duplicates series.
    pub fn initialize(&mut self, tanks: &[Tank]) {
        for tank in tanks {
            if !self.series.contains_key(&tank.name) {
                self.series.insert(tank.name.clone(), TankSeries::default());
                self.tanks.push(tank.clone());
            }
        }
    }

    /// Registered tanks in initialization order.
    pub fn tanks(&self) -> &[Tank] {
        &self.tanks
    }

    fn tank_series(&self, tank: &str) -> &TankSeries {
        self.series.get(tank).unwrap_or_else(|| panic!("unknown tank: {}", tank))
    }

    /// Append one reading set for a tank, stamped `at`.
    ///
    /// All four underlying series grow together; no partial update is ever
    /// observable between calls.
    pub fn append(&mut self, tank: &str, readings: MetricReadings, at: DateTime<Local>) {
        self.series
            .get_mut(tank)
            .unwrap_or_else(|| panic!("unknown tank: {}", tank))
            .push(readings, at);
    }

    /// Run one sampling event: append one reading set per registered tank,
    /// every tank sharing the same timestamp.
    pub fn record_event(
        &mut self,
        at: DateTime<Local>,
        mut sample: impl FnMut(&Tank) -> MetricReadings,
    ) {
        for tank in &self.tanks {
            let readings = sample(tank);
            if let Some(series) = self.series.get_mut(&tank.name) {
                series.push(readings, at);
            }
        }
    }

    /// The most recent value for a tank/metric, or `None` if no data yet.
    pub fn latest(&self, tank: &str, metric: Metric) -> Option<f64> {
        self.tank_series(tank).values(metric).last().copied()
    }

    /// The most recent reading with its timestamp.
    pub fn latest_point(&self, tank: &str, metric: Metric) -> Option<Point> {
        let series = self.tank_series(tank);
        let value = series.values(metric).last().copied()?;
        let at = series.timestamps.last().copied()?;
        Some((at, value))
    }

    /// The last `n` points in chronological order.
    ///
    /// `n` is clamped to the series length: never fails, and returns the
    /// whole series when `n` exceeds it.
    pub fn tail(&self, tank: &str, metric: Metric, n: usize) -> Vec<Point> {
        let series = self.tank_series(tank);
        let values = series.values(metric);
        let start = values.len().saturating_sub(n);
        series.timestamps[start..]
            .iter()
            .zip(&values[start..])
            .map(|(t, v)| (*t, *v))
            .collect()
    }

    /// Number of sampling events recorded for a tank.
    pub fn sample_count(&self, tank: &str) -> usize {
        self.tank_series(tank).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tank::Fleet;

    fn readings(t: f64, ph: f64, o: f64) -> MetricReadings {
        MetricReadings {
            temperature: t,
            ph,
            dissolved_oxygen: o,
        }
    }

    fn store_with_fleet() -> SeriesStore {
        let mut store = SeriesStore::new();
        store.initialize(Fleet::new(2, 1).tanks());
        store
    }

    #[test]
    fn test_initialized_store_is_empty() {
        let store = store_with_fleet();
        for tank in store.tanks().to_vec() {
            for metric in Metric::ALL {
                assert!(store.latest(&tank.name, metric).is_none());
                assert!(store.tail(&tank.name, metric, 5).is_empty());
            }
            assert_eq!(store.sample_count(&tank.name), 0);
        }
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let fleet = Fleet::new(2, 1);
        let mut store = SeriesStore::new();
        store.initialize(fleet.tanks());
        store.append("Grower Tank 1", readings(29.0, 7.5, 7.5), Local::now());

        store.initialize(fleet.tanks());
        assert_eq!(store.tanks().len(), 3);
        assert_eq!(store.sample_count("Grower Tank 1"), 1);
        assert_eq!(store.latest("Grower Tank 1", Metric::Temperature), Some(29.0));
    }

    #[test]
    fn test_append_keeps_series_aligned() {
        let mut store = store_with_fleet();
        let at = Local::now();
        store.append("Grower Tank 1", readings(29.0, 7.5, 7.5), at);
        store.append("Grower Tank 1", readings(30.0, 7.6, 7.4), at);

        assert_eq!(store.sample_count("Grower Tank 1"), 2);
        for metric in Metric::ALL {
            assert_eq!(store.tail("Grower Tank 1", metric, 10).len(), 2);
        }
        assert_eq!(store.latest("Grower Tank 1", Metric::Ph), Some(7.6));
    }

    #[test]
    fn test_record_event_shares_one_timestamp() {
        let mut store = store_with_fleet();
        let at = Local::now();
        store.record_event(at, |_| readings(29.0, 7.5, 7.5));

        for tank in store.tanks().to_vec() {
            assert_eq!(store.sample_count(&tank.name), 1);
            let (stamp, _) = store.latest_point(&tank.name, Metric::Temperature).unwrap();
            assert_eq!(stamp, at);
        }
    }

    #[test]
    fn test_tail_clamps_and_preserves_order() {
        let mut store = store_with_fleet();
        let at = Local::now();
        for i in 0..5 {
            store.append("Nursery Tank 1", readings(26.0 + i as f64, 7.0, 7.0), at);
        }

        // n > length returns the whole series
        let all = store.tail("Nursery Tank 1", Metric::Temperature, 99);
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].1, 26.0);
        assert_eq!(all[4].1, 30.0);

        // n < length returns exactly the last n, order preserved
        let tail = store.tail("Nursery Tank 1", Metric::Temperature, 2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].1, 29.0);
        assert_eq!(tail[1].1, 30.0);
    }

    #[test]
    #[should_panic(expected = "unknown tank")]
    fn test_unknown_tank_panics() {
        let store = store_with_fleet();
        let _ = store.latest("Broodstock Tank 1", Metric::Ph);
    }
}
