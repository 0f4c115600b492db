//! Synthetic daily cost data.
//!
//! Stands in for a real billing export: four services with stable base
//! costs, uniform daily noise, and an occasional injected spike so the
//! detector has something to find. The last generated batch is cached, so
//! every endpoint in a session sees the same series.

use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{Duration, Utc};
use costwatch_core::DailyCostRecord;
use rand::Rng;

/// Base daily cost per service, before variation.
const BASE_COSTS: [(&str, f64); 4] = [
    ("compute", 600.0),
    ("storage", 300.0),
    ("network", 200.0),
    ("database", 250.0),
];

/// Daily noise band (+/- 15%).
const VARIATION: f64 = 0.15;

/// Fraction of days that get an injected spike.
const SPIKE_PROBABILITY: f64 = 0.1;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate `days` consecutive daily cost records ending today.
pub fn generate_mock_costs(days: u32) -> Vec<DailyCostRecord> {
    let mut rng = rand::thread_rng();
    let base_date = Utc::now().date_naive() - Duration::days(days as i64);

    (0..days)
        .map(|i| {
            let date = base_date + Duration::days(i as i64);

            let mut services: BTreeMap<String, f64> = BASE_COSTS
                .iter()
                .map(|(name, base)| {
                    let variation = rng.gen_range(-VARIATION..VARIATION);
                    (name.to_string(), round2(base * (1.0 + variation)))
                })
                .collect();

            // Spike one service by 50-100% on roughly a tenth of days.
            if rng.gen_bool(SPIKE_PROBABILITY) {
                let (name, _) = BASE_COSTS[rng.gen_range(0..BASE_COSTS.len())];
                let factor = rng.gen_range(1.5..2.0);
                if let Some(cost) = services.get_mut(name) {
                    *cost = round2(*cost * factor);
                }
            }

            let total_cost = round2(services.values().sum::<f64>());
            DailyCostRecord {
                date,
                total_cost,
                services,
            }
        })
        .collect()
}

/// Cached mock data source.
///
/// Regenerates only when the requested day count differs from the cached
/// batch, matching session behavior: repeated calls see consistent data.
#[derive(Debug, Default)]
pub struct MockCostSource {
    cache: Mutex<Option<Vec<DailyCostRecord>>>,
}

impl MockCostSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a `days`-long series, generating on first use or window change.
    pub fn get(&self, days: u32) -> Vec<DailyCostRecord> {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        match cache.as_ref() {
            Some(data) if data.len() == days as usize => data.clone(),
            _ => {
                let data = generate_mock_costs(days);
                *cache = Some(data.clone());
                data
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_number_of_days() {
        assert_eq!(generate_mock_costs(30).len(), 30);
        assert_eq!(generate_mock_costs(1).len(), 1);
        assert!(generate_mock_costs(0).is_empty());
    }

    #[test]
    fn dates_are_consecutive() {
        let data = generate_mock_costs(14);
        for pair in data.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn total_matches_service_sum() {
        for record in generate_mock_costs(60) {
            let sum: f64 = record.services.values().sum();
            assert!(
                (record.total_cost - sum).abs() < 0.01,
                "total {} vs sum {}",
                record.total_cost,
                sum
            );
        }
    }

    #[test]
    fn every_day_has_all_services_with_positive_costs() {
        for record in generate_mock_costs(30) {
            assert_eq!(record.services.len(), BASE_COSTS.len());
            for (name, _) in BASE_COSTS {
                assert!(record.services[name] > 0.0);
            }
        }
    }

    #[test]
    fn source_caches_until_window_changes() {
        let source = MockCostSource::new();
        let first = source.get(30);
        let second = source.get(30);
        assert_eq!(first, second);

        let shorter = source.get(7);
        assert_eq!(shorter.len(), 7);
    }
}
