//! Relay connection settings from the environment.

use std::env;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 7878;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub host: String,
    pub port: u16,
    /// Play locally with no relay connection at all.
    pub disabled: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            disabled: false,
        }
    }
}

impl SyncConfig {
    /// `DUEL_TETRIS_HOST`, `DUEL_TETRIS_PORT`, `DUEL_TETRIS_SYNC_DISABLED`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("DUEL_TETRIS_HOST")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("DUEL_TETRIS_PORT")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let disabled = lookup("DUEL_TETRIS_SYNC_DISABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            host,
            port,
            disabled,
        }
    }

    /// `host:port`, as accepted by tokio's connect and bind.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = SyncConfig::from_lookup(lookup(&[]));
        assert_eq!(config, SyncConfig::default());
        assert_eq!(config.address(), "127.0.0.1:7878");
    }

    #[test]
    fn reads_overrides() {
        let config = SyncConfig::from_lookup(lookup(&[
            ("DUEL_TETRIS_HOST", "0.0.0.0"),
            ("DUEL_TETRIS_PORT", "9000"),
            ("DUEL_TETRIS_SYNC_DISABLED", "TRUE"),
        ]));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert!(config.disabled);
    }

    #[test]
    fn bad_port_falls_back() {
        let config = SyncConfig::from_lookup(lookup(&[("DUEL_TETRIS_PORT", "http")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
