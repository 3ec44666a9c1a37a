//! Application Configuration
//!
//! Every field has a default, so a partial JSON object (or none at all)
//! is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};
use crate::store::StatusPolicy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// How long the pointer must be held before a drag can start
    pub delay_ms: u32,
    /// How far the pointer must travel (either axis) to start a drag
    pub tolerance_px: i32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self { delay_ms: 100, tolerance_px: 5 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `log` level name: error, warn, info, debug, trace, off
    pub level: String,
    /// Records kept in the in-memory ring buffer
    pub capacity: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), capacity: 500 }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> DomainResult<log::LevelFilter> {
        self.level
            .parse()
            .map_err(|_| DomainError::InvalidInput(format!("unknown log level '{}'", self.level)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub drag: DragConfig,
    pub status_policy: StatusPolicy,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: AppConfig =
            serde_json::from_str(json).map_err(|e| DomainError::InvalidInput(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.drag.tolerance_px < 0 {
            return Err(DomainError::InvalidInput("drag.tolerance_px must not be negative".to_string()));
        }
        if self.logging.capacity == 0 {
            return Err(DomainError::InvalidInput("logging.capacity must be at least 1".to_string()));
        }
        self.logging.level_filter()?;
        Ok(())
    }
}
