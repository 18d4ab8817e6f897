use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    /// Fallback time limit applied to exams missing from the per-exam table.
    pub default_time_limit_seconds: u32,
    /// Countdown cadence in milliseconds. Only tests shrink this.
    pub tick_interval_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            default_time_limit_seconds: env::var("DEFAULT_TIME_LIMIT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1800),
            tick_interval_ms: 1000,
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            default_time_limit_seconds: 1800,
            tick_interval_ms: 10,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_server_host: "localhost".to_string(),
            web_server_port: 8080,
            default_time_limit_seconds: 1800,
            tick_interval_ms: 1000,
        }
    }
}
