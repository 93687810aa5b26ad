//! Server configuration, read once from the environment at startup.

use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use matmaster_core::MaterialCodeFormat;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Sleep before answering AI endpoints so the UI can show progress.
    pub simulate_latency: bool,
    pub code_format: MaterialCodeFormat,
    /// Add `X-AI-Call-Count` to every response.
    pub track_ai_calls: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// - `MATMASTER_BIND_ADDR` (default: "0.0.0.0:3000")
    /// - `MATMASTER_SIMULATE_LATENCY` (default: true)
    /// - `MATMASTER_MATERIAL_CODE_FORMAT`: "sap8" (default) or "legacy"
    /// - `MATMASTER_TRACK_AI_CALLS`: set to "1" to enable the header
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup("MATMASTER_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("Invalid MATMASTER_BIND_ADDR '{}'", bind_addr))?;

        let code_format = match lookup("MATMASTER_MATERIAL_CODE_FORMAT") {
            Some(value) => value.parse().map_err(anyhow::Error::msg)?,
            None => MaterialCodeFormat::default(),
        };

        Ok(Self {
            bind_addr,
            simulate_latency: flag(lookup("MATMASTER_SIMULATE_LATENCY"), true),
            code_format,
            track_ai_calls: flag(lookup("MATMASTER_TRACK_AI_CALLS"), false),
        })
    }
}

fn flag(value: Option<String>, default: bool) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("1" | "true" | "yes") => true,
        Some("0" | "false" | "no") => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert!(config.simulate_latency);
        assert!(!config.track_ai_calls);
        assert_eq!(config.code_format, MaterialCodeFormat::Sap8);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("MATMASTER_BIND_ADDR", "127.0.0.1:8080"),
            ("MATMASTER_SIMULATE_LATENCY", "false"),
            ("MATMASTER_MATERIAL_CODE_FORMAT", "legacy"),
            ("MATMASTER_TRACK_AI_CALLS", "1"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(!config.simulate_latency);
        assert!(config.track_ai_calls);
        assert_eq!(config.code_format, MaterialCodeFormat::Legacy);
    }

    #[test]
    fn test_invalid_values_fail() {
        assert!(config(&[("MATMASTER_BIND_ADDR", "nowhere")]).is_err());
        assert!(config(&[("MATMASTER_MATERIAL_CODE_FORMAT", "iso")]).is_err());
    }
}
