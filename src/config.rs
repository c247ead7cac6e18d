use std::time::Duration;

use anyhow::Context;

use crate::models::Chain;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_DEMO_DELAY_MS: u64 = 1000;

/// Runtime settings, read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub chains: Vec<Chain>,
    pub http_timeout: Duration,
    pub demo_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            chains: Chain::ALL.to_vec(),
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            demo_delay: Duration::from_millis(DEFAULT_DEMO_DELAY_MS),
        }
    }
}

impl Config {
    /// Load from process environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup; unset variables keep defaults
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("OMNIWALLET_API_URL").filter(|s| !s.trim().is_empty()) {
            config.api_url = url.trim().to_string();
        }

        if let Some(chains) = lookup("OMNIWALLET_CHAINS") {
            config.chains = parse_chains(&chains)?;
        }

        if let Some(secs) = lookup("OMNIWALLET_HTTP_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("Invalid OMNIWALLET_HTTP_TIMEOUT_SECS: {}", secs))?;
            config.http_timeout = Duration::from_secs(secs);
        }

        if let Some(ms) = lookup("OMNIWALLET_DEMO_DELAY_MS") {
            let ms: u64 = ms
                .trim()
                .parse()
                .with_context(|| format!("Invalid OMNIWALLET_DEMO_DELAY_MS: {}", ms))?;
            config.demo_delay = Duration::from_millis(ms);
        }

        Ok(config)
    }
}

/// Parse a comma separated chain list, dropping duplicates
pub fn parse_chains(list: &str) -> anyhow::Result<Vec<Chain>> {
    let mut chains = Vec::new();
    for part in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let chain: Chain = part.parse()?;
        if !chains.contains(&chain) {
            chains.push(chain);
        }
    }
    if chains.is_empty() {
        anyhow::bail!("No chains configured");
    }
    Ok(chains)
}
