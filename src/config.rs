use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PROTOCOL, DEFAULT_TRANSPORT, ENV_HOST, ENV_PORT,
    ENV_PROTOCOL, ENV_TRANSPORT,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port '{0}': expected an integer between 1 and 65535")]
    InvalidPort(String),
    #[error("unknown protocol '{0}': expected 'http' or 'https'")]
    UnknownProtocol(String),
    #[error("unknown transport '{0}': expected 'http' or 'stdio'")]
    UnknownTransport(String),
    #[error("protocol '{protocol}' does not match port {port}")]
    SchemeMismatch { protocol: Protocol, port: u16 },
}

/// Scheme used in the advertised public URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    /// The port conventionally owned by the *other* scheme
    fn conflicting_port(self) -> u16 {
        match self {
            Protocol::Http => 443,
            Protocol::Https => 80,
        }
    }
}

impl FromStr for Protocol {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            _ => Err(ConfigError::UnknownProtocol(s.to_string())),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Http => f.write_str("http"),
            Protocol::Https => f.write_str("https"),
        }
    }
}

/// How the tool handler is exposed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Http,
    Stdio,
}

impl FromStr for Transport {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Transport::Http),
            "stdio" => Ok(Transport::Stdio),
            _ => Err(ConfigError::UnknownTransport(s.to_string())),
        }
    }
}

/// Server settings, built once at startup and passed down explicitly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub protocol: Protocol,
    pub transport: Transport,
}

impl Config {
    /// Reads settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup, applying defaults for
    /// missing keys and validating the result
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup(ENV_PORT) {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };

        let protocol = lookup(ENV_PROTOCOL)
            .as_deref()
            .unwrap_or(DEFAULT_PROTOCOL)
            .parse::<Protocol>()?;

        let transport = lookup(ENV_TRANSPORT)
            .as_deref()
            .unwrap_or(DEFAULT_TRANSPORT)
            .parse::<Transport>()?;

        let config = Self {
            host,
            port,
            protocol,
            transport,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects a scheme paired with the well-known port of the other scheme
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == self.protocol.conflicting_port() {
            return Err(ConfigError::SchemeMismatch {
                protocol: self.protocol,
                port: self.port,
            });
        }
        Ok(())
    }

    /// URL remote callers use to reach the agent
    pub fn public_url(&self) -> String {
        format!("{}://{}:{}/", self.protocol, self.host, self.port)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            protocol: Protocol::Https,
            transport: Transport::Http,
        }
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigError::InvalidPort(raw.to_string())),
        Ok(port) => Ok(port),
    }
}
