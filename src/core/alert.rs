//! Threshold alert evaluation.
//!
//! Scans the latest reading of every tank/metric pair against the ideal
//! ranges and produces an ordered list of violations.

use std::fmt;

use serde::Serialize;

use super::metric::{IdealRanges, Metric};
use super::store::SeriesStore;

/// One ideal-range violation for a tank's most recent reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub tank: String,
    pub metric: Metric,
    pub value: f64,
    pub low: f64,
    pub high: f64,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} is {:.2} (Ideal: {}-{})",
            self.tank,
            self.metric.label(),
            self.value,
            self.low,
            self.high
        )
    }
}

/// Evaluate the store against the ideal ranges.
///
/// Checks only the single latest value of each non-empty series. Iterates
/// tanks in initialization order and metrics in their fixed order, so the
/// result is deterministic. Always returns a list (empty when every latest
/// reading is in range); evaluation itself cannot fail. Read-only.
pub fn evaluate(store: &SeriesStore, ranges: &IdealRanges) -> Vec<Alert> {
    let mut alerts = Vec::new();
    for tank in store.tanks() {
        for metric in Metric::ALL {
            let Some(value) = store.latest(&tank.name, metric) else {
                continue;
            };
            if ranges.is_violation(metric, value) {
                let (low, high) = ranges.get(metric);
                alerts.push(Alert {
                    tank: tank.name.clone(),
                    metric,
                    value,
                    low,
                    high,
                });
            }
        }
    }
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MetricReadings;
    use crate::core::tank::Fleet;
    use chrono::Local;

    fn store_with(readings_per_tank: &[MetricReadings]) -> SeriesStore {
        let fleet = Fleet::new(readings_per_tank.len(), 0);
        let mut store = SeriesStore::new();
        store.initialize(fleet.tanks());
        let at = Local::now();
        for (tank, readings) in fleet.tanks().iter().zip(readings_per_tank) {
            store.append(&tank.name, *readings, at);
        }
        store
    }

    fn in_range() -> MetricReadings {
        MetricReadings {
            temperature: 29.5,
            ph: 7.5,
            dissolved_oxygen: 7.5,
        }
    }

    #[test]
    fn test_all_in_range_yields_no_alerts() {
        let store = store_with(&[in_range(), in_range()]);
        assert!(evaluate(&store, &IdealRanges::default()).is_empty());
    }

    #[test]
    fn test_empty_store_yields_no_alerts() {
        let mut store = SeriesStore::new();
        store.initialize(Fleet::default().tanks());
        assert!(evaluate(&store, &IdealRanges::default()).is_empty());
    }

    #[test]
    fn test_single_violation_reports_tank_and_bounds() {
        let mut hot = in_range();
        hot.temperature = 32.0;
        let store = store_with(&[in_range(), hot]);

        let alerts = evaluate(&store, &IdealRanges::default());
        assert_eq!(alerts.len(), 1);
        let alert = &alerts[0];
        assert_eq!(alert.tank, "Grower Tank 2");
        assert_eq!(alert.metric, Metric::Temperature);
        assert_eq!(alert.value, 32.0);
        assert_eq!((alert.low, alert.high), (28.0, 31.0));
    }

    #[test]
    fn test_alerts_follow_tank_then_metric_order() {
        let mut first = in_range();
        first.dissolved_oxygen = 6.6;
        let mut second = in_range();
        second.temperature = 26.5;
        second.ph = 8.3;
        let store = store_with(&[first, second]);

        let alerts = evaluate(&store, &IdealRanges::default());
        let keys: Vec<(&str, Metric)> =
            alerts.iter().map(|a| (a.tank.as_str(), a.metric)).collect();
        assert_eq!(
            keys,
            [
                ("Grower Tank 1", Metric::DissolvedOxygen),
                ("Grower Tank 2", Metric::Temperature),
                ("Grower Tank 2", Metric::Ph),
            ]
        );
    }

    #[test]
    fn test_only_latest_value_is_checked() {
        let fleet = Fleet::new(1, 0);
        let mut store = SeriesStore::new();
        store.initialize(fleet.tanks());
        let at = Local::now();
        let mut hot = in_range();
        hot.temperature = 32.5;
        store.append("Grower Tank 1", hot, at);
        store.append("Grower Tank 1", in_range(), at);

        assert!(evaluate(&store, &IdealRanges::default()).is_empty());
    }

    #[test]
    fn test_alert_message_format() {
        let alert = Alert {
            tank: "Grower Tank 1".to_string(),
            metric: Metric::Temperature,
            value: 32.0,
            low: 28.0,
            high: 31.0,
        };
        assert_eq!(
            alert.to_string(),
            "Grower Tank 1: Temperature (°C) is 32.00 (Ideal: 28-31)"
        );
    }

    #[test]
    fn test_alert_message_keeps_reading_precision() {
        let alert = Alert {
            tank: "Nursery Tank 3".to_string(),
            metric: Metric::Ph,
            value: 8.37,
            low: 7.0,
            high: 8.0,
        };
        assert_eq!(alert.to_string(), "Nursery Tank 3: pH is 8.37 (Ideal: 7-8)");
    }
}
