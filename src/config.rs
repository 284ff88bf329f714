use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    /// JSON catalog file; when unset the built-in quiz set is used.
    pub catalog_path: Option<String>,
    /// Threshold below which the front-end highlights the countdown.
    pub low_time_warning_seconds: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            catalog_path: env::var("CATALOG_PATH").ok(),
            low_time_warning_seconds: env::var("LOW_TIME_WARNING_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            catalog_path: None,
            low_time_warning_seconds: 60,
        }
    }
}
