use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchError;
use crate::models::{PortfolioResponse, SendOutcome, SendRequest};
use crate::utils::truthy_text;

pub const ADDRESS_PATH: &str = "/api/address";
pub const PORTFOLIO_PATH: &str = "/api/portfolio";
pub const SEND_PATH: &str = "/api/send";

/// Core trait for talking to the wallet backend.
///
/// Implementors only provide the two JSON primitives; the typed calls are
/// built on top of them.
#[async_trait]
pub trait WalletBackend: Send + Sync {
    /// GET `path` and return the body as JSON, whatever the status code
    async fn fetch_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, FetchError>;

    /// POST a JSON body to `path` and return the JSON answer
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, FetchError>;

    /// Resolve the active wallet address
    async fn fetch_address(&self) -> Result<String, FetchError> {
        let body = self.fetch_json(ADDRESS_PATH, &[]).await?;
        if let Some(address) = truthy_text(body.get("address")) {
            return Ok(address);
        }
        match truthy_text(body.get("error")) {
            Some(error) => Err(FetchError::Backend(error)),
            None => Err(FetchError::MissingField("address")),
        }
    }

    /// Fetch token balances of `address` on `chain`
    async fn fetch_portfolio(&self, chain: &str, address: &str) -> Result<PortfolioResponse, FetchError> {
        let body = self
            .fetch_json(PORTFOLIO_PATH, &[("chain", chain), ("address", address)])
            .await?;
        Ok(PortfolioResponse::from_json(&body))
    }

    /// Submit a send request
    async fn send_transaction(&self, request: &SendRequest) -> Result<SendOutcome, FetchError> {
        let body = serde_json::to_value(request).map_err(|e| FetchError::Decode(e.to_string()))?;
        let answer = self.post_json(SEND_PATH, &body).await?;
        Ok(SendOutcome::from_json(&answer))
    }
}
