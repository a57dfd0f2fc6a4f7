use std::net::SocketAddr;

use common::config::Validate;
use common::games::gomoku::Symbol;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "gomoku_server_config.yaml";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub http: HttpConfig,
    pub bot: BotConfig,
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        self.http.validate()?;
        self.bot.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub listen_address: String,
    pub allow_any_origin: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            listen_address: "0.0.0.0:8080".to_string(),
            allow_any_origin: true,
        }
    }
}

impl HttpConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.listen_address
            .parse()
            .map_err(|e| format!("invalid listen_address '{}': {}", self.listen_address, e))
    }
}

impl Validate for HttpConfig {
    fn validate(&self) -> Result<(), String> {
        self.socket_addr().map(|_| ())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub name: String,
    pub default_symbol: String,
    /// Fixed seed for openings and tie-breaks. Random when absent.
    pub rng_seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "WifiBot".to_string(),
            default_symbol: Symbol::X.to_string(),
            rng_seed: None,
        }
    }
}

impl BotConfig {
    pub fn symbol(&self) -> Result<Symbol, String> {
        Symbol::parse(&self.default_symbol).map_err(|e| format!("bot.default_symbol: {}", e))
    }
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("bot.name must not be empty".to_string());
        }
        self.symbol().map(|_| ())
    }
}
