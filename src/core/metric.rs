//! Metric definitions: what is measured and what counts as safe.

use serde::Serialize;

/// A sensor metric recorded for every tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    Temperature,
    Ph,
    DissolvedOxygen,
}

impl Metric {
    /// All metrics in their fixed display and evaluation order.
    pub const ALL: [Metric; 3] = [Metric::Temperature, Metric::Ph, Metric::DissolvedOxygen];

    /// Full display label including the unit.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature (°C)",
            Metric::Ph => "pH",
            Metric::DissolvedOxygen => "DO (mg/L)",
        }
    }

    /// Short label for table headers.
    pub fn short_label(&self) -> &'static str {
        match self {
            Metric::Temperature => "Temp",
            Metric::Ph => "pH",
            Metric::DissolvedOxygen => "DO",
        }
    }

    /// Range the simulator draws from.
    ///
    /// Deliberately wider than the ideal range so out-of-range readings
    /// occur and the alert path gets exercised.
    pub fn generation_range(&self) -> (f64, f64) {
        match self {
            Metric::Temperature => (26.0, 33.0),
            Metric::Ph => (6.5, 8.5),
            Metric::DissolvedOxygen => (6.5, 8.5),
        }
    }
}

/// Per-metric ideal ranges (closed intervals considered safe).
///
/// A reading strictly below the low bound or strictly above the high bound
/// is a violation. Defaults match the farm's standard operating bands; a
/// config file may override them per metric.
#[derive(Debug, Clone, PartialEq)]
pub struct IdealRanges {
    pub temperature: (f64, f64),
    pub ph: (f64, f64),
    pub dissolved_oxygen: (f64, f64),
}

impl Default for IdealRanges {
    fn default() -> Self {
        Self {
            temperature: (28.0, 31.0),
            ph: (7.0, 8.0),
            dissolved_oxygen: (7.0, 8.0),
        }
    }
}

impl IdealRanges {
    /// The (low, high) bounds for a metric.
    pub fn get(&self, metric: Metric) -> (f64, f64) {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Ph => self.ph,
            Metric::DissolvedOxygen => self.dissolved_oxygen,
        }
    }

    /// Whether a value falls outside the ideal range for a metric.
    pub fn is_violation(&self, metric: Metric, value: f64) -> bool {
        let (low, high) = self.get(metric);
        value < low || value > high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_order_is_fixed() {
        assert_eq!(
            Metric::ALL,
            [Metric::Temperature, Metric::Ph, Metric::DissolvedOxygen]
        );
    }

    #[test]
    fn test_generation_range_is_wider_than_ideal() {
        let ranges = IdealRanges::default();
        for metric in Metric::ALL {
            let (gen_low, gen_high) = metric.generation_range();
            let (low, high) = ranges.get(metric);
            assert!(gen_low < low, "{:?} low", metric);
            assert!(gen_high > high, "{:?} high", metric);
        }
    }

    #[test]
    fn test_violation_bounds_are_inclusive() {
        let ranges = IdealRanges::default();
        assert!(!ranges.is_violation(Metric::Temperature, 28.0));
        assert!(!ranges.is_violation(Metric::Temperature, 31.0));
        assert!(ranges.is_violation(Metric::Temperature, 27.99));
        assert!(ranges.is_violation(Metric::Temperature, 31.01));
        assert!(!ranges.is_violation(Metric::Ph, 7.5));
        assert!(ranges.is_violation(Metric::DissolvedOxygen, 6.5));
    }
}
