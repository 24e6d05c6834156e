//! Runtime configuration, read from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://blog.db?mode=rwc";
pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// sea-orm connection URL (`postgres://...` or `sqlite://...`).
    pub database_url: String,
    pub bind_addr: String,
    /// How many times startup tries to reach the database. Never below 1.
    pub connect_attempts: u32,
    pub connect_backoff: Duration,
    pub max_connections: u32,
    pub log_json: bool,
    /// Directory whose `*.html` files replace the embedded templates of the
    /// same name.
    pub template_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_addr: DEFAULT_BIND.to_string(),
            connect_attempts: 10,
            connect_backoff: Duration::from_secs(3),
            max_connections: 10,
            log_json: false,
            template_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any variable source. Values that fail to parse
    /// keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            database_url: lookup("DATABASE_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.database_url),
            bind_addr: lookup("BLOG_BIND")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.bind_addr),
            connect_attempts: parsed(&lookup, "BLOG_DB_CONNECT_ATTEMPTS")
                .unwrap_or(defaults.connect_attempts)
                .max(1),
            connect_backoff: parsed(&lookup, "BLOG_DB_CONNECT_BACKOFF_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.connect_backoff),
            max_connections: parsed(&lookup, "BLOG_DB_MAX_CONNECTIONS")
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_connections),
            log_json: lookup("BLOG_LOG_JSON")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.log_json),
            template_dir: lookup("BLOG_TEMPLATE_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

fn parsed<F, T>(lookup: &F, name: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(name).and_then(|v| v.trim().parse::<T>().ok())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}
