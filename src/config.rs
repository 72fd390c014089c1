use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub session: SessionConfig,
    pub view: ViewConfig,
    pub reports: ReportsConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub secure: bool,   // send the cookie over HTTPS only
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViewConfig {
    pub templates_dir: String,
    pub static_dir: String,
    pub currency_symbol: String,
    pub banner_dismiss_ms: u64,    // success banner lifetime
    pub recent_expense_limit: usize,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ReportsConfig {
    // "YYYY-MM"; the current month when unset
    pub default_month: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    pub enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { secure: false }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            templates_dir: "templates".to_string(),
            static_dir: "static".to_string(),
            currency_symbol: "₹".to_string(),
            banner_dismiss_ms: 2000,
            recent_expense_limit: 5,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}
