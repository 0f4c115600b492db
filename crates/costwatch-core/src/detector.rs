//! Z-score anomaly detection over a daily cost series.
//!
//! Statistics are global over the whole window, not rolling: the mean and
//! population standard deviation are computed once over every `total_cost`
//! in the batch, and each day is scored against them. Swapping in a rolling
//! window would change detection semantics and is deliberately not done.

use tracing::debug;

use crate::error::{DetectorError, DetectorResult};
use crate::record::{AnomalyRecord, DailyCostRecord, Severity};
use crate::stats::{mean, std_dev_with_mean, z_score};

/// Default flagging threshold, in standard deviations.
pub const DEFAULT_THRESHOLD: f64 = 2.0;

/// Fixed |z| cutoff separating `Severity::High` from `Severity::Medium`.
///
/// Independent of the caller's flagging threshold: a threshold above 3.0
/// yields only high-severity results, a low one yields both.
pub const HIGH_SEVERITY_CUTOFF: f64 = 3.0;

/// Presentation rounding for output fields (2 decimals).
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn severity_for(z_abs: f64) -> Severity {
    if z_abs > HIGH_SEVERITY_CUTOFF {
        Severity::High
    } else {
        Severity::Medium
    }
}

/// Detect anomalous days in `series`.
///
/// Flags every record whose absolute z-score against the window's global
/// mean and population standard deviation exceeds `threshold`, and
/// attributes it to the service with the largest cost share that day
/// (`"unknown"` when the record carries no breakdown). Results keep the
/// relative order of the input.
///
/// An empty series yields an empty result; so does a constant one, since
/// zero spread means zero z-scores. A non-finite or non-positive
/// `threshold`, or a record with a negative or non-finite `total_cost`,
/// fails before any output is produced.
pub fn detect_anomalies(
    series: &[DailyCostRecord],
    threshold: f64,
) -> DetectorResult<Vec<AnomalyRecord>> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(DetectorError::InvalidThreshold { threshold });
    }
    for (index, record) in series.iter().enumerate() {
        if !record.total_cost.is_finite() || record.total_cost < 0.0 {
            return Err(DetectorError::MalformedRecord {
                index,
                date: record.date,
                detail: format!(
                    "total_cost {} is not a non-negative finite number",
                    record.total_cost
                ),
            });
        }
    }
    if series.is_empty() {
        return Ok(Vec::new());
    }

    let costs: Vec<f64> = series.iter().map(|r| r.total_cost).collect();
    let window_mean = mean(&costs);
    let window_std = std_dev_with_mean(&costs, window_mean);

    let mut anomalies = Vec::new();
    for record in series {
        // Classification uses the unrounded score; rounding is presentation only.
        let z = z_score(record.total_cost, window_mean, window_std);
        if z.abs() > threshold {
            let contributor = record.top_contributor().unwrap_or("unknown");
            anomalies.push(AnomalyRecord {
                date: record.date,
                total_cost: record.total_cost,
                z_score: round2(z),
                expected_cost: round2(window_mean),
                deviation: round2(record.total_cost - window_mean),
                severity: severity_for(z.abs()),
                reason: format!("Unusual spike in {} costs", contributor),
            });
        }
    }

    debug!(
        days = series.len(),
        flagged = anomalies.len(),
        threshold,
        "anomaly detection pass complete"
    );
    Ok(anomalies)
}
