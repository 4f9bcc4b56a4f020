use crate::modules::activities::core::policy::CapacityPolicy;
use anyhow::Context;
use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub capacity_policy: CapacityPolicy,
}

impl Config {
    /// HOST (default 0.0.0.0), PORT (default 8080) and CAPACITY_POLICY
    /// (enforce | ignore, default enforce).
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok(),
            std::env::var("CAPACITY_POLICY").ok(),
        )
    }

    fn from_vars(
        host: Option<String>,
        port: Option<String>,
        capacity_policy: Option<String>,
    ) -> anyhow::Result<Self> {
        let host = host.unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match port {
            Some(raw) => raw.parse::<u16>().context("PORT is not a valid port")?,
            None => 8080,
        };
        let bind_addr = format!("{host}:{port}")
            .parse()
            .context("HOST is not a valid bind address")?;

        let capacity_policy = match capacity_policy {
            Some(raw) => raw
                .parse::<CapacityPolicy>()
                .context("CAPACITY_POLICY must be 'enforce' or 'ignore'")?,
            None => CapacityPolicy::default(),
        };

        Ok(Self {
            bind_addr,
            capacity_policy,
        })
    }
}
