use crate::error::{config::ConfigError, AppError};

const DEFAULT_POINTS_FILE: &str = "points.json";
const DEFAULT_CONFIG_FILE: &str = "config.json";
const DEFAULT_RETENTION_DAYS: i64 = 30;
const DEFAULT_SWEEP_SCHEDULE: &str = "0 0 */12 * * *";

pub struct Config {
    pub points_file: String,
    pub config_file: String,

    pub retention_days: i64,
    pub sweep_schedule: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let retention_days = match std::env::var("RETENTION_DAYS") {
            Ok(value) => value
                .parse::<i64>()
                .ok()
                .filter(|days| *days >= 0)
                .ok_or(ConfigError::InvalidEnvVar {
                    name: "RETENTION_DAYS",
                    value,
                })?,
            Err(_) => DEFAULT_RETENTION_DAYS,
        };

        Ok(Self {
            points_file: std::env::var("POINTS_FILE")
                .unwrap_or_else(|_| DEFAULT_POINTS_FILE.to_string()),
            config_file: std::env::var("CONFIG_FILE")
                .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string()),
            retention_days,
            sweep_schedule: std::env::var("SWEEP_SCHEDULE")
                .unwrap_or_else(|_| DEFAULT_SWEEP_SCHEDULE.to_string()),
        })
    }
}
