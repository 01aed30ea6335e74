// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # tankwatch
//!
//! A live terminal dashboard and library for monitoring aquaculture tanks.
//!
//! This crate simulates sensor readings (temperature, pH, dissolved oxygen)
//! for a fixed fleet of tanks, accumulates them in in-memory time series,
//! raises alerts when the latest reading of any tank leaves its ideal range,
//! and renders tables and charts in an interactive terminal UI.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   core   │    │   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │ (model)  │    │(render) │    │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ events  │◀── key presses | mouse | refresh tick          │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, view navigation, and user interaction logic
//! - **[`core`]**: The monitoring model - tank fleet, append-only series store,
//!   synthetic reading generator, sampling triggers, and alert evaluation
//! - **[`config`]**: Optional TOML/environment configuration for the farm
//! - **[`events`]**: Keyboard and mouse handling
//! - **[`ui`]**: Terminal rendering using ratatui - overview table, per-metric
//!   charts with an adjustable window, alert list, and theme support
//!
//! ## Features
//!
//! - **Overview**: All tanks with their latest readings, colored by status
//! - **Charts**: Time-series per metric with the ideal band marked and a
//!   keyboard-adjustable "last N points" window
//! - **Alerts**: Every tank/metric whose latest reading left its ideal range
//! - **Triggers**: Automatic sampling on an interval, or on demand
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Monitor the default fleet (4 grower + 4 nursery tanks)
//! tankwatch
//!
//! # Smaller farm, faster sampling, reproducible readings
//! tankwatch --grower 2 --nursery 1 --sample-interval 10 --seed 42
//!
//! # Headless: sample once and dump a JSON snapshot
//! tankwatch --export snapshot.json
//! ```
//!
//! ### As a library
//!
//! ```
//! use std::time::Duration;
//! use tankwatch::{Fleet, IdealRanges, MonitorSession, ReadingGenerator};
//!
//! let mut session = MonitorSession::new(
//!     &Fleet::default(),
//!     ReadingGenerator::seeded(42),
//!     IdealRanges::default(),
//!     Duration::from_secs(60),
//! );
//!
//! session.sample_now();
//! for alert in session.evaluate_alerts() {
//!     println!("{}", alert);
//! }
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod events;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, View};
pub use crate::config::FarmConfig;
pub use crate::core::{
    Alert, Fleet, IdealRanges, Metric, MetricReadings, MonitorSession, Point, ReadingGenerator,
    SeriesStore, Tank, TankCategory, DEFAULT_SAMPLE_INTERVAL,
};
pub use ui::Theme;
