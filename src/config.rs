use std::{env, fmt::Display, io, str::FromStr};

use log::{info, warn};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DB_PATH: &str = "./reviews.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            db_path: DEFAULT_DB_PATH.to_string(),
        }
    }
}

impl Config {
    /// Defaults, overridden by `REVIEWS_HOST`, `REVIEWS_PORT` and `REVIEWS_DB_PATH` when set.
    pub fn load() -> io::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> io::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        Ok(Config {
            host: try_load(&lookup, "REVIEWS_HOST", defaults.host)?,
            port: try_load(&lookup, "REVIEWS_PORT", defaults.port)?,
            db_path: try_load(&lookup, "REVIEWS_DB_PATH", defaults.db_path)?,
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: T) -> io::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
        Some(raw) => raw.parse().map_err(|e| {
            warn!("Invalid {key} value: {e}");
            io::Error::new(io::ErrorKind::InvalidInput, format!("invalid {key}: {e}"))
        }),
    }
}
