//! Data model: daily cost records in, anomaly records out.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of spend, with a per-service cost breakdown.
///
/// `total_cost` should equal the sum of the `services` values. Callers
/// maintain that invariant; the detector reads the two fields independently
/// and tolerates a mismatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyCostRecord {
    pub date: NaiveDate,
    pub total_cost: f64,
    #[serde(default)]
    pub services: BTreeMap<String, f64>,
}

impl DailyCostRecord {
    /// Service with the largest cost share, if any breakdown is present.
    ///
    /// Ties resolve to the first maximal entry in map order.
    pub fn top_contributor(&self) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for (name, &cost) in &self.services {
            match best {
                Some((_, max)) if cost <= max => {}
                _ => best = Some((name, cost)),
            }
        }
        best.map(|(name, _)| name)
    }
}

/// Coarse anomaly magnitude classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Medium,
    High,
}

/// A flagged day, produced fresh on every detection call.
///
/// Immutable once built. `z_score`, `expected_cost` and `deviation` carry
/// presentation rounding (2 decimals); classification happens on the
/// unrounded values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    pub date: NaiveDate,
    pub total_cost: f64,
    pub z_score: f64,
    pub expected_cost: f64,
    pub deviation: f64,
    pub severity: Severity,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(services: &[(&str, f64)]) -> DailyCostRecord {
        DailyCostRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            total_cost: services.iter().map(|(_, c)| c).sum(),
            services: services
                .iter()
                .map(|(n, c)| (n.to_string(), *c))
                .collect(),
        }
    }

    #[test]
    fn top_contributor_unique_maximum() {
        let r = record(&[("compute", 600.0), ("storage", 300.0), ("network", 200.0)]);
        assert_eq!(r.top_contributor(), Some("compute"));
    }

    #[test]
    fn top_contributor_tie_is_first_in_map_order() {
        let r = record(&[("storage", 500.0), ("compute", 500.0)]);
        // BTreeMap iterates alphabetically; "compute" comes first
        assert_eq!(r.top_contributor(), Some("compute"));
    }

    #[test]
    fn top_contributor_empty_breakdown() {
        let r = record(&[]);
        assert_eq!(r.top_contributor(), None);
    }

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
    }

    #[test]
    fn daily_record_wire_format() {
        let json = r#"{"date":"2024-03-01","total_cost":1350.0,"services":{"compute":900.0,"storage":450.0}}"#;
        let r: DailyCostRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(r.total_cost, 1350.0);
        assert_eq!(r.services["compute"], 900.0);

        // services is optional on the wire
        let bare: DailyCostRecord =
            serde_json::from_str(r#"{"date":"2024-03-01","total_cost":10.0}"#).unwrap();
        assert!(bare.services.is_empty());
    }

    #[test]
    fn daily_record_missing_fields_rejected() {
        let missing_cost = r#"{"date":"2024-03-01"}"#;
        assert!(serde_json::from_str::<DailyCostRecord>(missing_cost).is_err());

        let missing_date = r#"{"total_cost":10.0}"#;
        assert!(serde_json::from_str::<DailyCostRecord>(missing_date).is_err());
    }

    #[test]
    fn anomaly_record_field_names() {
        let a = AnomalyRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            total_cost: 2500.0,
            z_score: 2.21,
            expected_cost: 1214.29,
            deviation: 1285.71,
            severity: Severity::Medium,
            reason: "Unusual spike in compute costs".into(),
        };
        let v: serde_json::Value = serde_json::to_value(&a).unwrap();
        for key in [
            "date",
            "total_cost",
            "z_score",
            "expected_cost",
            "deviation",
            "severity",
            "reason",
        ] {
            assert!(v.get(key).is_some(), "missing field {}", key);
        }
    }
}
