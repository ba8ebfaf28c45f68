use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;

pub const DEFAULT_ENDPOINT: &str = "https://uitspraken.rechtspraak.nl/api/zoek";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_CORRELATION_ID: &str = "cc7a7c98d8bb4c6cb9de8babea65b402";

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config::from_lookup(|key| env::var(key).ok())
});

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub page_size: u32,
    pub log_dir: String,
    pub correlation_id: String,
    /// Per-request timeout; `None` leaves reqwest's default (no timeout).
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            log_dir: DEFAULT_LOG_DIR.to_string(),
            correlation_id: DEFAULT_CORRELATION_ID.to_string(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Defaults overridden by whatever `lookup` returns for the `ZOEK_*` keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Config {
        let mut cfg = Config::default();
        if let Some(endpoint) = lookup("ZOEK_ENDPOINT") {
            cfg.endpoint = endpoint;
        }
        if let Some(page_size) =
            lookup("ZOEK_PAGE_SIZE").and_then(|v| parse_or_warn("ZOEK_PAGE_SIZE", &v))
        {
            cfg.page_size = page_size;
        }
        if let Some(log_dir) = lookup("ZOEK_LOG_DIR") {
            cfg.log_dir = log_dir;
        }
        if let Some(id) = lookup("ZOEK_CORRELATION_ID") {
            cfg.correlation_id = id;
        }
        cfg.timeout_secs =
            lookup("ZOEK_TIMEOUT_SECS").and_then(|v| parse_or_warn("ZOEK_TIMEOUT_SECS", &v));
        cfg
    }
}

fn parse_or_warn<T: FromStr>(key: &str, value: &str) -> Option<T> {
    match value.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("ignoring unparsable {key}={value:?}, using default");
            None
        }
    }
}
