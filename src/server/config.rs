use crate::server::error::config::ConfigError;

const DEFAULT_WORKERS: usize = 4;
const DEFAULT_EXTRACTION_TIMEOUT_SECONDS: u64 = 120;

pub struct Config {
    pub database_url: String,
    pub extractor_url: String,
    pub notifier_url: String,
    pub workers: usize,
    pub extraction_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            extractor_url: required("EXTRACTOR_URL")?,
            notifier_url: required("NOTIFIER_URL")?,
            workers: parsed("WORKERS", DEFAULT_WORKERS)?,
            extraction_timeout_seconds: parsed(
                "EXTRACTION_TIMEOUT_SECONDS",
                DEFAULT_EXTRACTION_TIMEOUT_SECONDS,
            )?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn parsed<T: std::str::FromStr>(var: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("could not parse {:?}", value),
        }),
        Err(_) => Ok(default),
    }
}
