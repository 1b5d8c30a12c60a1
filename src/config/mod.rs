use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::seed::DEFAULT_ORGANIZER_NAME;

pub mod cors;
pub mod headers;

pub use cors::create_cors_layer;
pub use headers::security_headers;

const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub organizer_name: String,
    /// Hold assistant answers back for the simulated generation time.
    pub assistant_latency: bool,
    pub production: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            organizer_name: DEFAULT_ORGANIZER_NAME.to_string(),
            assistant_latency: true,
            production: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: parse_var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT").unwrap_or(defaults.port),
            organizer_name: env::var("ORGANIZER_NAME")
                .ok()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(defaults.organizer_name),
            assistant_latency: parse_var("ASSISTANT_SIMULATED_LATENCY")
                .unwrap_or(defaults.assistant_latency),
            production: env::var("RUST_ENV")
                .map(|v| v.to_lowercase() == "production")
                .unwrap_or(false),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Config: Ignoring invalid {} value '{}'", key, raw);
            None
        }
    }
}
