use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::info;

use crate::error::{CareError, CareResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// JSON fixture file to seed from instead of the built-in demo account.
    pub fixtures_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> CareResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. `load` uses the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CareResult<Self> {
        Ok(Self {
            host: try_load(&lookup, "CARE_HOST", "0.0.0.0")?,
            port: try_load(&lookup, "CARE_PORT", "4000")?,
            fixtures_path: lookup("CARE_FIXTURES")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> CareResult<T>
where
    T::Err: Display,
{
    lookup(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| CareError::Config {
            key: key.to_string(),
            reason: e.to_string(),
        })
}
