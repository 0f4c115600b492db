//! # costwatch-core
//!
//! Z-score anomaly detection over a series of daily cloud-spend totals.
//!
//! The crate is the pure computational core of costwatch: given an ordered
//! batch of [`DailyCostRecord`]s it computes global mean and population
//! standard deviation over the window, scores every day, and returns one
//! [`AnomalyRecord`] per day whose absolute z-score exceeds the caller's
//! threshold. Each flagged day is attributed to its dominant cost driver and
//! classified [`Severity::Medium`] or [`Severity::High`].
//!
//! There is no internal state, no I/O, and no shared data; `detect_anomalies`
//! may be called concurrently from any number of tasks on independent input.
//!
//! ## Quick Start
//!
//! ```rust
//! use costwatch_core::{detect_anomalies, DailyCostRecord, DEFAULT_THRESHOLD};
//! use chrono::NaiveDate;
//! use std::collections::BTreeMap;
//!
//! let series: Vec<DailyCostRecord> = (1..=7)
//!     .map(|day| DailyCostRecord {
//!         date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
//!         total_cost: if day == 4 { 2500.0 } else { 1000.0 },
//!         services: BTreeMap::from([("compute".to_string(), 600.0)]),
//!     })
//!     .collect();
//!
//! let anomalies = detect_anomalies(&series, DEFAULT_THRESHOLD).unwrap();
//! assert_eq!(anomalies.len(), 1);
//! assert!(anomalies[0].z_score > 0.0);
//! ```

#![deny(unsafe_code)]

pub mod detector;
pub mod error;
pub mod record;
pub mod stats;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use detector::{detect_anomalies, DEFAULT_THRESHOLD, HIGH_SEVERITY_CUTOFF};
pub use error::{DetectorError, DetectorResult};
pub use record::{AnomalyRecord, DailyCostRecord, Severity};
