use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::utils::{format_usd, raw_to_quantity};

pub const DEFAULT_DECIMALS: u32 = 18;

/// One token holding as reported by the portfolio endpoint.
///
/// Every field is read on its own: a badly typed value drops that field
/// only, never the whole row.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AssetBalance {
    #[serde(default, rename = "contract_ticker_symbol", deserialize_with = "lenient_text")]
    pub symbol: Option<String>,
    #[serde(default, rename = "contract_name", deserialize_with = "lenient_text")]
    pub name: Option<String>,
    /// Raw integer balance, kept as text since it routinely exceeds u64
    #[serde(default, deserialize_with = "raw_balance")]
    pub balance: String,
    #[serde(default, rename = "contract_decimals", deserialize_with = "lenient_decimals")]
    pub decimals: Option<u32>,
    #[serde(default, rename = "quote_rate", deserialize_with = "lenient_number")]
    pub price: Option<f64>,
}

fn raw_balance<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Number or numeric string
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite()))
}

/// Accepts `6`, `6.0` and `"6"`; anything else is treated as missing
fn lenient_decimals<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_number(deserializer)?
        .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= i32::MAX as f64)
        .map(|n| n as u32))
}

impl AssetBalance {
    /// Lenient conversion; anything that is not a recognizable item
    /// becomes an empty holding.
    pub fn from_json(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// Symbol, then name, then `N/A`
    pub fn ticker(&self) -> &str {
        [self.symbol.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or("N/A")
    }

    pub fn decimals(&self) -> u32 {
        self.decimals.unwrap_or(DEFAULT_DECIMALS)
    }

    /// Human-readable quantity: `balance / 10^decimals`
    pub fn quantity(&self) -> f64 {
        raw_to_quantity(&self.balance, self.decimals())
    }

    /// Value in the quote currency, only when a positive price is known
    pub fn value(&self) -> Option<f64> {
        match self.price {
            Some(price) if price > 0.0 => Some(self.quantity() * price),
            _ => None,
        }
    }

    pub fn to_row(&self) -> AssetRow {
        AssetRow {
            ticker: self.ticker().to_string(),
            quantity: self.quantity(),
            value: self.value(),
        }
    }
}

/// A rendered line of a balances table
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRow {
    pub ticker: String,
    pub quantity: f64,
    pub value: Option<f64>,
}

impl AssetRow {
    pub fn quantity_text(&self) -> String {
        format!("{:.6}", self.quantity)
    }

    pub fn value_text(&self) -> String {
        format_usd(self.value)
    }
}

impl fmt::Display for AssetRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.ticker, self.quantity_text(), self.value_text())
    }
}
