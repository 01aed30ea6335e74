//! Monitoring session: store, generator, and trigger state in one place.
//!
//! The session is the explicit context object the presentation host owns
//! for its lifetime. All core operations run synchronously inside one host
//! turn, so there is no locking and no partially-appended sample is ever
//! observable.

use std::time::{Duration, Instant};

use chrono::Local;

use super::alert::{self, Alert};
use super::metric::{IdealRanges, Metric};
use super::sampler::ReadingGenerator;
use super::store::{Point, SeriesStore};
use super::tank::{Fleet, Tank};

/// Default gap between automatic sampling passes.
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(60);

/// One monitoring session over a fixed tank fleet.
pub struct MonitorSession {
    store: SeriesStore,
    generator: ReadingGenerator,
    ranges: IdealRanges,
    sample_interval: Duration,
    /// When the store was last populated; gates the periodic trigger.
    last_sample: Instant,
}

impl MonitorSession {
    pub fn new(
        fleet: &Fleet,
        generator: ReadingGenerator,
        ranges: IdealRanges,
        sample_interval: Duration,
    ) -> Self {
        let mut store = SeriesStore::new();
        store.initialize(fleet.tanks());
        Self {
            store,
            generator,
            ranges,
            sample_interval,
            last_sample: Instant::now(),
        }
    }

    /// Re-register the tank set.
    ///
    /// Idempotent across repeated calls within a session: existing series
    /// are never reset or duplicated.
    pub fn initialize(&mut self, tanks: &[Tank]) {
        self.store.initialize(tanks);
    }

    /// Periodic trigger: runs a sampling pass iff more than the sample
    /// interval has elapsed since the last pass. Returns whether it fired.
    ///
    /// `now` is supplied by the host's refresh clock; the session only owns
    /// the comparison and the effect.
    pub fn maybe_sample_periodic(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_sample) > self.sample_interval {
            self.sample_all(now);
            true
        } else {
            false
        }
    }

    /// Manual trigger: runs a sampling pass unconditionally.
    ///
    /// Also resets the periodic gate, so a periodic evaluation in the same
    /// host turn collapses into this pass instead of appending twice.
    pub fn sample_now(&mut self) {
        self.sample_all(Instant::now());
    }

    /// Sample every tank with one shared wall-clock timestamp, then reset
    /// the periodic gate.
    fn sample_all(&mut self, now: Instant) {
        let at = Local::now();
        let generator = &mut self.generator;
        self.store.record_event(at, |_tank| generator.sample());
        self.last_sample = now;
    }

    pub fn tanks(&self) -> &[Tank] {
        self.store.tanks()
    }

    pub fn ideal_ranges(&self) -> &IdealRanges {
        &self.ranges
    }

    pub fn sample_interval(&self) -> Duration {
        self.sample_interval
    }

    /// Time since the store was last populated (or since session start).
    pub fn since_last_sample(&self) -> Duration {
        self.last_sample.elapsed()
    }

    pub fn latest(&self, tank: &str, metric: Metric) -> Option<f64> {
        self.store.latest(tank, metric)
    }

    pub fn latest_point(&self, tank: &str, metric: Metric) -> Option<Point> {
        self.store.latest_point(tank, metric)
    }

    pub fn tail(&self, tank: &str, metric: Metric, n: usize) -> Vec<Point> {
        self.store.tail(tank, metric, n)
    }

    pub fn sample_count(&self, tank: &str) -> usize {
        self.store.sample_count(tank)
    }

    /// Evaluate every tank's latest readings against the ideal ranges.
    pub fn evaluate_alerts(&self) -> Vec<Alert> {
        alert::evaluate(&self.store, &self.ranges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> MonitorSession {
        MonitorSession::new(
            &Fleet::default(),
            ReadingGenerator::seeded(1),
            IdealRanges::default(),
            DEFAULT_SAMPLE_INTERVAL,
        )
    }

    #[test]
    fn test_sample_now_grows_every_series_by_one() {
        let mut s = session();
        s.sample_now();

        for tank in s.tanks().to_vec() {
            assert_eq!(s.sample_count(&tank.name), 1);
            for metric in Metric::ALL {
                assert_eq!(s.tail(&tank.name, metric, 10).len(), 1);
            }
        }
    }

    #[test]
    fn test_sampling_pass_shares_one_timestamp() {
        let mut s = session();
        s.sample_now();

        let (first, _) = s.latest_point("Grower Tank 1", Metric::Temperature).unwrap();
        for tank in s.tanks().to_vec() {
            for metric in Metric::ALL {
                let (at, _) = s.latest_point(&tank.name, metric).unwrap();
                assert_eq!(at, first);
            }
        }
    }

    #[test]
    fn test_periodic_trigger_fires_only_after_interval() {
        let mut s = session();
        let start = Instant::now();

        assert!(!s.maybe_sample_periodic(start));
        assert_eq!(s.sample_count("Grower Tank 1"), 0);

        let later = start + Duration::from_secs(61);
        assert!(s.maybe_sample_periodic(later));
        assert_eq!(s.sample_count("Grower Tank 1"), 1);

        // Same clock reading again must not fire twice
        assert!(!s.maybe_sample_periodic(later));
        assert_eq!(s.sample_count("Grower Tank 1"), 1);
    }

    #[test]
    fn test_manual_sample_resets_periodic_gate() {
        let mut s = session();
        s.sample_now();
        // A periodic evaluation in the same turn collapses into the manual pass
        assert!(!s.maybe_sample_periodic(Instant::now()));
        assert_eq!(s.sample_count("Nursery Tank 1"), 1);
    }

    #[test]
    fn test_initialize_again_keeps_data() {
        let mut s = session();
        s.sample_now();
        let fleet = Fleet::default();
        s.initialize(fleet.tanks());

        assert_eq!(s.tanks().len(), 8);
        assert_eq!(s.sample_count("Grower Tank 1"), 1);
    }
}
