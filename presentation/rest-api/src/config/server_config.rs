use std::env;

use super::non_blank;

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "0.0.0.0")
    /// - SERVICE_PORT: Port to bind (default: "8000")
    pub fn from_env() -> Self {
        Self::from_lookup(&|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Self {
        let ip = non_blank(lookup, "SERVICE_IP").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = non_blank(lookup, "SERVICE_PORT").unwrap_or_else(|| "8000".to_string());

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
