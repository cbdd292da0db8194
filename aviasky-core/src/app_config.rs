use serde::Deserialize;
use std::env;

use crate::{CoreError, CoreResult};

/// Environment variable that overrides the bot link served by the `telegram` action.
pub const TELEGRAM_URL_ENV: &str = "TELEGRAM_BOT_URL";

pub const DEFAULT_TELEGRAM_URL: &str = "https://t.me/aviasky_bot";

/// Everything the handler needs, resolved once at startup.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub telegram: TelegramConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TelegramConfig {
    pub bot_url: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_url: DEFAULT_TELEGRAM_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PricingConfig {
    /// Share by which flight prices undercut the simulated market price
    pub flight_discount: f64,
    /// Same for hotels
    pub hotel_discount: f64,
    /// Nightly rate for cities missing from the hotel price table
    pub default_night_price: i64,
    pub tiers: TierPrices,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            flight_discount: 0.20,
            hotel_discount: 0.25,
            default_night_price: 5000,
            tiers: TierPrices::default(),
        }
    }
}

/// Base ("our") flight price per geographic tier, in roubles.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TierPrices {
    pub domestic: i64,
    pub europe: i64,
    pub asia: i64,
    pub america: i64,
    pub africa: i64,
    pub oceania: i64,
}

impl Default for TierPrices {
    fn default() -> Self {
        Self {
            domestic: 5500,
            europe: 15000,
            asia: 25000,
            america: 45000,
            africa: 30000,
            oceania: 65000,
        }
    }
}

impl ServiceConfig {
    /// Load from `config/default`, `config/{RUN_MODE}` (both optional),
    /// `AVIASKY__*` variables and finally `TELEGRAM_BOT_URL`.
    pub fn load() -> CoreResult<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Eg. `AVIASKY__SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("AVIASKY").separator("__"))
            .set_override_option("telegram.bot_url", env::var(TELEGRAM_URL_ENV).ok())?;

        Self::from_builder(builder)
    }

    pub fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> CoreResult<Self> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        tracing::debug!(
            port = config.server.port,
            telegram = %config.telegram.bot_url,
            "Service configuration loaded"
        );
        Ok(config)
    }

    pub fn validate(&self) -> CoreResult<()> {
        for (name, fraction) in [
            ("pricing.flight_discount", self.pricing.flight_discount),
            ("pricing.hotel_discount", self.pricing.hotel_discount),
        ] {
            if !(0.0..1.0).contains(&fraction) {
                return Err(CoreError::InvalidConfig(format!(
                    "{} must be in [0, 1), got {}",
                    name, fraction
                )));
            }
        }

        if self.pricing.default_night_price <= 0 {
            return Err(CoreError::InvalidConfig(
                "pricing.default_night_price must be positive".to_string(),
            ));
        }

        if self.telegram.bot_url.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "telegram.bot_url must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
