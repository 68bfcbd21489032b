use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unrecognized configuration key: {0}")]
    UnknownKey(String),

    #[error("value out of range for {key}: {value} (expected {min}..={max})")]
    OutOfRange {
        key: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid configuration data: {0}")]
    InvalidData(String),
}
