use serde::{Deserialize, Serialize};

/// Main configuration structure loaded from mirror_dash.toml and environment variables
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub system: SystemConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// System-level configuration for the data endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SystemConfig {
    /// Full URL of the snapshot endpoint
    pub data_url: String,
    /// Per-request deadline; one request per load, no retries
    pub request_timeout_ms: u64,
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            system: SystemConfig::default(),
            runtime: RuntimeConfig::default(),
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            data_url: "http://127.0.0.1:5000/data".to_string(),
            request_timeout_ms: 2000,
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "mirror_dash=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables
    /// Uses MIRROR_DASH_CONFIG environment variable or defaults to "mirror_dash.toml"
    pub fn load() -> anyhow::Result<Self> {
        // Load environment variables: MIRROR_ENV_FILE if set, otherwise ./.env
        if let Ok(env_path) = std::env::var("MIRROR_ENV_FILE") {
            let _ = dotenvy::from_path(env_path);
        } else {
            let _ = dotenvy::from_path(".env");
        }

        let config_path =
            std::env::var("MIRROR_DASH_CONFIG").unwrap_or_else(|_| "mirror_dash.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            toml::from_str(&content)?
        } else {
            tracing::debug!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        // Apply env overrides for the endpoint (env-first)
        if let Ok(url) = std::env::var("MIRROR_DATA_URL") {
            config.system.data_url = url;
        }
        if let Some(timeout) = std::env::var("MIRROR_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.system.request_timeout_ms = timeout;
        }

        config.runtime = RuntimeConfig::load_from_env();

        // Validate endpoint URL format (basic checks)
        if !config.system.data_url.starts_with("http://")
            && !config.system.data_url.starts_with("https://")
        {
            tracing::warn!(
                "Data URL '{}' doesn't start with http:// or https://",
                config.system.data_url
            );
        }

        // Clamp a zero timeout back to the default; reqwest would treat it as
        // an instant deadline and every load would fail
        if config.system.request_timeout_ms == 0 {
            tracing::warn!("request_timeout_ms of 0 is unusable, using default");
            config.system.request_timeout_ms = SystemConfig::default().request_timeout_ms;
        }

        Ok(config)
    }
}

impl RuntimeConfig {
    /// Load runtime configuration from environment variables
    pub fn load_from_env() -> Self {
        let mut config = Self::default();
        if let Ok(level) = std::env::var("MIRROR_LOG") {
            config.log_level = level;
        }
        config
    }
}
