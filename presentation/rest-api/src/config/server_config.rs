use std::env;

use anyhow::Context;

const DEFAULT_PORT: u16 = 5000;

/// Address the catalog API listens on.
///
/// The API and, in production, the UI bundle share this one port.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - SERVICE_IP: address to bind (default: "127.0.0.1")
    /// - SERVICE_PORT, then PORT: listening port (default: 5000)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            env::var("SERVICE_IP").ok(),
            env::var("SERVICE_PORT").ok().or_else(|| env::var("PORT").ok()),
        )
    }

    fn from_values(ip: Option<String>, port: Option<String>) -> anyhow::Result<Self> {
        let port = match port.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid listening port: {}", raw))?,
        };

        Ok(Self {
            ip: ip.unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_listen_on_local_port_5000_by_default() {
        let config = ServerConfig::from_values(None, None).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:5000");
    }

    #[test]
    fn should_use_configured_address() {
        let config =
            ServerConfig::from_values(Some("0.0.0.0".to_string()), Some(" 8080 ".to_string()))
                .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn should_reject_port_out_of_range() {
        let result = ServerConfig::from_values(None, Some("70000".to_string()));

        assert!(result.is_err());
    }
}
