use super::errors::ConfigError;
use crate::root_hints::ROOT_SERVERS;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Backend used to turn referral hostnames (and recursive-mode names) into
/// records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NameLookupMode {
    /// Recursion-desired query to a recursive server, normally the first
    /// `nameserver` of `/etc/resolv.conf`.
    #[default]
    Stub,
    /// The operating system resolver (`getaddrinfo`). Address records only.
    System,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_root_servers")]
    pub root_servers: Vec<String>,

    /// Per-query UDP timeout.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Fall through to the next candidate of a stage when a query fails,
    /// instead of ending the walk on the first failure.
    #[serde(default)]
    pub try_all_candidates: bool,

    /// Resolve each NS hostname of a referral only once.
    #[serde(default)]
    pub dedupe_ns_hostnames: bool,

    #[serde(default)]
    pub name_lookup: NameLookupMode,

    /// Recursive server used by the stub lookup, `ip` or `ip:port`.
    #[serde(default)]
    pub stub_server: Option<String>,

    #[serde(default = "default_lookup_timeout_ms")]
    pub lookup_timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_servers: default_root_servers(),
            query_timeout_ms: default_query_timeout_ms(),
            port: default_port(),
            try_all_candidates: false,
            dedupe_ns_hostnames: false,
            name_lookup: NameLookupMode::default(),
            stub_server: None,
            lookup_timeout_ms: default_lookup_timeout_ms(),
        }
    }
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    pub fn root_addrs(&self) -> Result<Vec<IpAddr>, ConfigError> {
        self.root_servers
            .iter()
            .map(|s| {
                s.trim().parse::<IpAddr>().map_err(|e| {
                    ConfigError::Validation(format!("Invalid root server '{}': {}", s, e))
                })
            })
            .collect()
    }

    /// Configured stub server; a bare address gets port 53.
    pub fn stub_server_addr(&self) -> Result<Option<SocketAddr>, ConfigError> {
        let Some(raw) = self.stub_server.as_deref().map(str::trim) else {
            return Ok(None);
        };
        if let Ok(addr) = raw.parse::<SocketAddr>() {
            return Ok(Some(addr));
        }
        raw.parse::<IpAddr>()
            .map(|ip| Some(SocketAddr::new(ip, 53)))
            .map_err(|e| ConfigError::Validation(format!("Invalid stub server '{}': {}", raw, e)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_servers.is_empty() {
            return Err(ConfigError::Validation(
                "No root servers configured".to_string(),
            ));
        }
        self.root_addrs()?;

        if self.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "query_timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.lookup_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "lookup_timeout_ms must be greater than 0".to_string(),
            ));
        }
        if self.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }
        self.stub_server_addr()?;
        Ok(())
    }
}

fn default_root_servers() -> Vec<String> {
    ROOT_SERVERS.iter().map(|r| r.ip.to_string()).collect()
}

fn default_query_timeout_ms() -> u64 {
    3000
}

fn default_port() -> u16 {
    53
}

fn default_lookup_timeout_ms() -> u64 {
    5000
}
