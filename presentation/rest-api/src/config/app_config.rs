use super::{
    cors_config, serpapi_config::SerpApiConfig, server_config::ServerConfig,
    veryfi_config::VeryfiConfig,
};
use poem::middleware::Cors;

/// Everything the process reads from its environment, loaded once at startup.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub serpapi: SerpApiConfig,
    pub veryfi: VeryfiConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            serpapi: SerpApiConfig::from_env(),
            veryfi: VeryfiConfig::from_env(),
        }
    }
}
