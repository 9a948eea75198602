use crate::gateway::error::GatewayError;

const DEFAULT_GATEWAY_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    /// Base URL of the ShareIt server, e.g. `http://localhost:9090`.
    pub server_url: String,
    pub gateway_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, GatewayError> {
        Ok(Self {
            server_url: std::env::var("SHAREIT_SERVER_URL")
                .map_err(|_| GatewayError::MissingEnvVar("SHAREIT_SERVER_URL".to_string()))?,
            gateway_addr: std::env::var("GATEWAY_ADDR")
                .unwrap_or_else(|_| DEFAULT_GATEWAY_ADDR.to_string()),
        })
    }
}
