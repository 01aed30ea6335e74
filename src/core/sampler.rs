//! Simulated sensor readings.
//!
//! There is no real sensor ingestion: each sampling pass draws one value
//! per metric, uniformly at random from the metric's generation range.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::metric::Metric;
use super::store::MetricReadings;

/// Produces synthetic readings, one set per tank per sampling event.
///
/// A pure function of its random source: seed it for reproducible runs.
#[derive(Debug)]
pub struct ReadingGenerator {
    rng: StdRng,
}

impl ReadingGenerator {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generator with a fixed seed, for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw one reading per metric for a single tank.
    pub fn sample(&mut self) -> MetricReadings {
        MetricReadings {
            temperature: self.draw(Metric::Temperature),
            ph: self.draw(Metric::Ph),
            dissolved_oxygen: self.draw(Metric::DissolvedOxygen),
        }
    }

    fn draw(&mut self, metric: Metric) -> f64 {
        let (low, high) = metric.generation_range();
        round2(self.rng.gen_range(low..=high))
    }
}

impl Default for ReadingGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to two decimal digits, matching the sensor display precision.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_stay_in_generation_range() {
        let mut generator = ReadingGenerator::seeded(7);
        for _ in 0..200 {
            let readings = generator.sample();
            for metric in Metric::ALL {
                let (low, high) = metric.generation_range();
                let value = readings.get(metric);
                assert!(value >= low && value <= high, "{:?} = {}", metric, value);
            }
        }
    }

    #[test]
    fn test_values_have_two_decimal_digits() {
        let mut generator = ReadingGenerator::seeded(42);
        for _ in 0..200 {
            let readings = generator.sample();
            for metric in Metric::ALL {
                let scaled = readings.get(metric) * 100.0;
                assert!((scaled - scaled.round()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_seeded_generators_agree() {
        let mut a = ReadingGenerator::seeded(123);
        let mut b = ReadingGenerator::seeded(123);
        for _ in 0..10 {
            assert_eq!(a.sample(), b.sample());
        }
    }
}
