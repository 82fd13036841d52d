use crate::assessment::service::ServiceError;
use crate::config::ConfigError;
use crate::knowledge::ConfigurationError;
use crate::telemetry::TelemetryError;

/// Top-level error for embedders that drive the whole engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("reference data error: {0}")]
    ReferenceData(#[from] ConfigurationError),
    #[error("assessment error: {0}")]
    Assessment(#[from] ServiceError),
}
