use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but holds an unusable value.
    ///
    /// Startup fails rather than running with a misconfigured retention
    /// window or sweep schedule.
    #[error("Invalid value for environment variable {name}: '{value}'")]
    InvalidEnvVar {
        /// Name of the offending environment variable
        name: &'static str,
        /// The value that failed to parse or validate
        value: String,
    },
}
