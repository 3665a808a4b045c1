use crate::error::ConfigError;

pub mod config;

type Result<T> = std::result::Result<T, ConfigError>;
