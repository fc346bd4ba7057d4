use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub stripe: StripeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

/// Order in which `GET /api/attempts` returns the attempt list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AttemptOrder {
    #[default]
    NewestFirst,
    AsInserted,
}

impl std::str::FromStr for AttemptOrder {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest_first" => Ok(AttemptOrder::NewestFirst),
            "as_inserted" => Ok(AttemptOrder::AsInserted),
            other => Err(AppError::ConfigError(format!(
                "unknown attempt order '{other}', expected newest_first or as_inserted"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_initial_prize_amount")]
    pub initial_prize_amount: f64,
    #[serde(default = "default_prize_increment")]
    pub prize_increment: f64,
    #[serde(default)]
    pub attempt_order: AttemptOrder,
    #[serde(default = "default_true")]
    pub seed_mock_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_prize_amount: default_initial_prize_amount(),
            prize_increment: default_prize_increment(),
            attempt_order: AttemptOrder::default(),
            seed_mock_data: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripeConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

/// Upper bound for configured prize amounts, far below the cent counter's range.
pub const MAX_PRIZE_AMOUNT: f64 = 1_000_000_000_000.0;

fn default_initial_prize_amount() -> f64 {
    1000.0
}

fn default_prize_increment() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

fn default_currency() -> String {
    "usd".to_string()
}

impl Config {
    pub fn from_toml() -> AppResult<Self> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // A missing file is fine: defaults plus environment variables.
        let mut config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => Self::parse(&config_str)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("{config_path} not found, using defaults and environment");
                Config {
                    server: ServerConfig::default(),
                    store: StoreConfig::default(),
                    stripe: StripeConfig::default(),
                }
            }
            Err(e) => {
                return Err(AppError::ConfigError(format!(
                    "cannot read config file {config_path}: {e}"
                )));
            }
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub fn parse(config_str: &str) -> AppResult<Self> {
        toml::from_str(config_str)
            .map_err(|e| AppError::ConfigError(format!("failed to parse config file: {e}")))
    }

    /// Environment variables win over file values, even when the file exists.
    fn apply_env_overrides(&mut self) -> AppResult<()> {
        if let Ok(v) = env::var("SERVER_HOST") {
            self.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            self.server.port = p;
        }
        if let Ok(v) = env::var("INITIAL_PRIZE_AMOUNT")
            && let Ok(n) = v.parse()
        {
            self.store.initial_prize_amount = n;
        }
        if let Ok(v) = env::var("PRIZE_INCREMENT")
            && let Ok(n) = v.parse()
        {
            self.store.prize_increment = n;
        }
        if let Ok(v) = env::var("ATTEMPT_ORDER") {
            self.store.attempt_order = v.parse()?;
        }
        if let Ok(v) = env::var("SEED_MOCK_DATA")
            && let Ok(b) = v.parse()
        {
            self.store.seed_mock_data = b;
        }
        if let Ok(v) = env::var("STRIPE_CURRENCY") {
            self.stripe.currency = v;
        }
        Ok(())
    }

    pub fn validate(&self) -> AppResult<()> {
        let in_range = |v: f64| v.is_finite() && (0.0..=MAX_PRIZE_AMOUNT).contains(&v);
        if !in_range(self.store.initial_prize_amount) {
            return Err(AppError::ConfigError(format!(
                "store.initial_prize_amount must be between 0 and {MAX_PRIZE_AMOUNT}"
            )));
        }
        if !in_range(self.store.prize_increment) {
            return Err(AppError::ConfigError(format!(
                "store.prize_increment must be between 0 and {MAX_PRIZE_AMOUNT}"
            )));
        }
        if self.stripe.currency.trim().is_empty() {
            return Err(AppError::ConfigError(
                "stripe.currency must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
