use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use super::errors::ConfigError;

/// Port every hop of the walk talks to.
pub const DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Root name-server addresses used to bootstrap a resolution.
    /// The first reachable entry wins; plain IPs, port 53 implied.
    #[serde(default = "default_root_hints")]
    pub root_hints: Vec<String>,

    /// Per-attempt exchange timeout in seconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Additional attempts after a transport failure or timeout.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial backoff between attempts, doubled each retry.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    /// Referral hops allowed before the walk is declared looping.
    #[serde(default = "default_max_referrals")]
    pub max_referrals: u8,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_hints: default_root_hints(),
            query_timeout: default_query_timeout(),
            max_retries: default_max_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
            max_referrals: default_max_referrals(),
        }
    }
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    /// The first configured root hint as a socket address.
    pub fn first_root_server(&self) -> Result<SocketAddr, ConfigError> {
        let hint = self
            .root_hints
            .first()
            .ok_or_else(|| ConfigError::Validation("No root hints configured".to_string()))?;
        let ip: IpAddr = hint
            .parse()
            .map_err(|_| ConfigError::Validation(format!("Invalid root hint address: {}", hint)))?;
        Ok(SocketAddr::new(ip, DNS_PORT))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_hints.is_empty() {
            return Err(ConfigError::Validation(
                "No root hints configured".to_string(),
            ));
        }
        for hint in &self.root_hints {
            if hint.parse::<IpAddr>().is_err() {
                return Err(ConfigError::Validation(format!(
                    "Invalid root hint address: {}",
                    hint
                )));
            }
        }
        if self.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "query_timeout cannot be 0".to_string(),
            ));
        }
        if self.max_referrals == 0 {
            return Err(ConfigError::Validation(
                "max_referrals cannot be 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_root_hints() -> Vec<String> {
    // a, b, c and d.root-servers.net.
    vec![
        "198.41.0.4".to_string(),
        "199.9.14.201".to_string(),
        "192.33.4.12".to_string(),
        "199.7.91.13".to_string(),
    ]
}

fn default_query_timeout() -> u64 {
    5
}

fn default_max_retries() -> u32 {
    2
}

fn default_retry_backoff_ms() -> u64 {
    250
}

fn default_max_referrals() -> u8 {
    16
}
