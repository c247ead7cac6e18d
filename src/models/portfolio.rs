use serde_json::Value;

use super::asset::{AssetBalance, AssetRow};
use crate::utils::{format_usd, truthy_text};

/// Parsed answer of `GET /api/portfolio`
#[derive(Debug, Clone, PartialEq)]
pub enum PortfolioResponse {
    /// Error reported by the backend; any items alongside it are ignored
    Error(String),
    Assets(Vec<AssetBalance>),
}

impl PortfolioResponse {
    /// Items are read from `data.items`, then `items`; the first non-empty
    /// list wins.
    pub fn from_json(value: &Value) -> Self {
        if let Some(error) = truthy_text(value.get("error")) {
            return PortfolioResponse::Error(error);
        }

        fn non_empty(v: Option<&Value>) -> Option<&Vec<Value>> {
            v.and_then(Value::as_array).filter(|items| !items.is_empty())
        }

        let items = non_empty(value.get("data").and_then(|d| d.get("items")))
            .or_else(|| non_empty(value.get("items")))
            .map(|items| items.iter().map(AssetBalance::from_json).collect())
            .unwrap_or_default();

        PortfolioResponse::Assets(items)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PortfolioResponse::Assets(items) if items.is_empty())
    }
}

/// Balances of one chain as displayed
#[derive(Debug, Clone, PartialEq)]
pub struct AssetTable {
    pub rows: Vec<AssetRow>,
}

impl AssetTable {
    pub fn new(assets: &[AssetBalance]) -> Self {
        Self {
            rows: assets.iter().map(AssetBalance::to_row).collect(),
        }
    }

    /// Sum of priced rows, `None` when no row carries a price
    pub fn total_value(&self) -> Option<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.value)
            .fold(None, |acc, v| Some(acc.unwrap_or(0.0) + v))
    }

    pub fn footer(&self) -> Option<String> {
        self.total_value()
            .map(|total| format!("Total: {}", format_usd(Some(total))))
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.rows.iter().map(|row| row.to_string()).collect();
        lines.extend(self.footer());
        lines
    }
}
