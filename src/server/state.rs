//! Server state and configuration.

use chrono::{DateTime, Utc};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:3000")
    pub listen_addr: String,
    /// `max-age` advertised on wallpaper responses, in seconds
    pub cache_max_age_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            cache_max_age_secs: 3600,
        }
    }
}

/// Source of the current instant.
pub type Clock = fn() -> DateTime<Utc>;

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Resolves "now" for day-of-year calculations
    pub clock: Clock,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_clock(config, Utc::now)
    }

    /// State with a fixed clock, for reproducible responses.
    pub fn with_clock(config: ServerConfig, clock: Clock) -> Self {
        Self { config, clock }
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }
}
