use std::env;

/// Distinguishes runtime behavior for different deployment stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub equipment: EquipmentTunables,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let equipment = EquipmentTunables {
            dehumidifier_capacity_pints: positive_var(
                "APP_DEHU_CAPACITY_PINTS",
                EquipmentTunables::DEFAULT_DEHU_CAPACITY_PINTS,
            )?,
            air_mover_coverage_sf: positive_var(
                "APP_AIR_MOVER_COVERAGE_SF",
                EquipmentTunables::DEFAULT_AIR_MOVER_COVERAGE_SF,
            )?,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            equipment,
        })
    }
}

fn positive_var(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value > 0.0)
            .ok_or(ConfigError::InvalidEquipmentTunable { name, raw }),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Sizing tunables reflecting the contractor's actual equipment fleet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquipmentTunables {
    /// Reference dehumidifier capacity in AHAM pints per day.
    pub dehumidifier_capacity_pints: f64,
    /// Wet floor square footage one air mover covers.
    pub air_mover_coverage_sf: f64,
}

impl EquipmentTunables {
    pub const DEFAULT_DEHU_CAPACITY_PINTS: f64 = 110.0;
    pub const DEFAULT_AIR_MOVER_COVERAGE_SF: f64 = 60.0;
}

impl Default for EquipmentTunables {
    fn default() -> Self {
        Self {
            dehumidifier_capacity_pints: Self::DEFAULT_DEHU_CAPACITY_PINTS,
            air_mover_coverage_sf: Self::DEFAULT_AIR_MOVER_COVERAGE_SF,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a positive number, got '{raw}'")]
    InvalidEquipmentTunable { name: &'static str, raw: String },
}
