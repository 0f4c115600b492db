//! Application state for API handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::rest::handlers::IngestedEvent;
use crate::config::ServerConfig;
use crate::mock::MockCostSource;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Mock cost data source
    pub mock: Arc<MockCostSource>,

    /// In-memory store of ingested cost events
    pub events: Arc<RwLock<Vec<IngestedEvent>>>,

    /// Service version
    pub version: String,

    /// Service start time
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            mock: Arc::new(MockCostSource::new()),
            events: Arc::new(RwLock::new(Vec::new())),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: chrono::Utc::now(),
        }
    }

    /// Get uptime as a human-readable string.
    pub fn uptime(&self) -> String {
        let duration = chrono::Utc::now() - self.started_at;
        let secs = duration.num_seconds();

        if secs < 60 {
            format!("{}s", secs)
        } else if secs < 3600 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else if secs < 86400 {
            format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
        } else {
            format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_has_no_events() {
        let state = AppState::new(ServerConfig::default());
        assert!(state.events.try_read().unwrap().is_empty());
        assert!(!state.version.is_empty());
    }

    #[test]
    fn uptime_formats_seconds() {
        let state = AppState::new(ServerConfig::default());
        assert!(state.uptime().ends_with('s'));
    }
}
