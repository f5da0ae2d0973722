use serde::{Deserialize, Serialize};

/// Settings of the HTTP control API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Address the API binds to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port the API listens on, `0` picks an ephemeral port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ApiConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";

    pub const DEFAULT_PORT: u16 = 8000;

    /// Returns the `host:port` pair to bind to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    ApiConfig::DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    ApiConfig::DEFAULT_PORT
}
