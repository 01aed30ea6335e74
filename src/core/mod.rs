//! Core monitoring model, independent of any UI.
//!
//! ## Submodules
//!
//! - [`metric`]: the fixed metric set with ideal and generation ranges
//! - [`tank`]: tank identity and the session's fixed fleet
//! - [`store`]: append-only per-tank time series
//! - [`sampler`]: the synthetic reading generator
//! - [`alert`]: threshold evaluation over the store
//! - [`session`]: the context object tying the above together
//!
//! ## Data flow
//!
//! ```text
//! trigger (periodic tick | manual key)
//!        │
//!        ▼
//! MonitorSession::sample_all ──▶ ReadingGenerator ──▶ SeriesStore::record_event
//!                                                            │
//!                              alert::evaluate (latest) ◀────┤
//!                              SeriesStore::tail (charts) ◀──┘
//! ```

pub mod alert;
pub mod metric;
pub mod sampler;
pub mod session;
pub mod store;
pub mod tank;

pub use alert::Alert;
pub use metric::{IdealRanges, Metric};
pub use sampler::ReadingGenerator;
pub use session::{MonitorSession, DEFAULT_SAMPLE_INTERVAL};
pub use store::{MetricReadings, Point, SeriesStore};
pub use tank::{Fleet, Tank, TankCategory};
