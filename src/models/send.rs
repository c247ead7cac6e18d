use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::utils::truthy_text;

/// Chains the dashboard knows how to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Chain {
    Eth,
    Base,
}

impl Chain {
    pub const ALL: [Chain; 2] = [Chain::Eth, Chain::Base];

    /// Identifier used by the backend API
    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::Eth => "eth",
            Chain::Base => "base",
        }
    }

    /// Block explorer prefix for transaction links
    pub fn explorer_tx_url(&self) -> &'static str {
        match self {
            Chain::Eth => "https://etherscan.io/tx/",
            Chain::Base => "https://basescan.org/tx/",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chain {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eth" | "ethereum" => Ok(Chain::Eth),
            "base" => Ok(Chain::Base),
            other => Err(anyhow::anyhow!("Unsupported chain: {}", other)),
        }
    }
}

/// Body of `POST /api/send`.
///
/// `chain` is passed through as typed by the user; the backend validates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendRequest {
    pub chain: String,
    pub to: String,
    pub amount_eth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price_gwei: Option<f64>,
}

impl SendRequest {
    /// Build a request from raw input values, trimming recipient and amount
    pub fn from_inputs(chain: &str, to: &str, amount: &str) -> Self {
        Self {
            chain: chain.to_string(),
            to: to.trim().to_string(),
            amount_eth: amount.trim().to_string(),
            gas_price_gwei: None,
        }
    }

    pub fn with_gas_price(mut self, gwei: Option<f64>) -> Self {
        self.gas_price_gwei = gwei;
        self
    }
}

/// What the backend answered to a send request
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    Sent { tx_hash: String },
    Failed(String),
}

impl SendOutcome {
    pub fn from_json(value: &Value) -> Self {
        match truthy_text(value.get("tx_hash")) {
            Some(tx_hash) => SendOutcome::Sent { tx_hash },
            None => SendOutcome::Failed(
                truthy_text(value.get("error")).unwrap_or_else(|| "Error".to_string()),
            ),
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, SendOutcome::Sent { .. })
    }

    /// Transaction hash, or the failure as an error
    pub fn into_result(self) -> anyhow::Result<String> {
        match self {
            SendOutcome::Sent { tx_hash } => Ok(tx_hash),
            SendOutcome::Failed(reason) => Err(anyhow::anyhow!("Transaction was not sent: {}", reason)),
        }
    }
}
