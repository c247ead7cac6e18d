use std::sync::Arc;

use tracing::{info, warn};

use crate::models::{Chain, ElementId, RegionContent, SendOutcome, SendRequest};
use crate::page::Page;
use crate::traits::backend::WalletBackend;
use crate::utils::format_address;

pub const SENDING: &str = "Sending...";
pub const SENT_PREFIX: &str = "✅ Sent! Tx: ";

/// Status line for a finished submission
pub fn render_outcome(chain: &str, outcome: &SendOutcome) -> RegionContent {
    match outcome {
        SendOutcome::Sent { tx_hash } => {
            let href = match chain.parse::<Chain>() {
                Ok(chain) => format!("{}{}", chain.explorer_tx_url(), tx_hash),
                Err(_) => "#".to_string(),
            };
            RegionContent::Link {
                prefix: SENT_PREFIX.to_string(),
                text: tx_hash.clone(),
                href,
            }
        }
        SendOutcome::Failed(error) => RegionContent::text(format!("❌ {}", error)),
    }
}

/// Submits the send form.
///
/// Inputs are not validated here; the backend decides. Repeated submissions
/// are independent requests, and only the newest one's outcome is shown.
pub struct TransactionSubmitter {
    backend: Arc<dyn WalletBackend>,
    page: Arc<Page>,
}

impl TransactionSubmitter {
    pub fn new(backend: Arc<dyn WalletBackend>, page: Arc<Page>) -> Self {
        Self { backend, page }
    }

    /// Build the request from the current input values
    pub fn read_inputs(&self) -> SendRequest {
        let gas_price = self.page.input(ElementId::SendGasPrice);
        let gas_price_gwei = match gas_price.trim() {
            "" => None,
            text => match text.parse::<f64>() {
                Ok(gwei) => Some(gwei),
                Err(_) => {
                    warn!("Ignoring unparseable gas price: {}", text);
                    None
                }
            },
        };

        SendRequest::from_inputs(
            &self.page.input(ElementId::SendChain),
            &self.page.input(ElementId::SendTo),
            &self.page.input(ElementId::SendAmount),
        )
        .with_gas_price(gas_price_gwei)
    }

    /// Submit whatever the form holds right now
    pub async fn submit(&self) -> SendOutcome {
        self.submit_request(self.read_inputs()).await
    }

    /// Submit a request captured earlier, e.g. at click time
    pub async fn submit_request(&self, request: SendRequest) -> SendOutcome {
        let ticket = self.page.begin(ElementId::SendStatus);
        self.page.commit(&ticket, RegionContent::text(SENDING)).await;

        info!(
            "Sending {} on {} to {}",
            request.amount_eth,
            request.chain,
            format_address(&request.to)
        );

        let outcome = match self.backend.send_transaction(&request).await {
            Ok(outcome) => outcome,
            Err(e) => SendOutcome::Failed(e.to_string()),
        };

        match &outcome {
            SendOutcome::Sent { tx_hash } => info!("Transaction submitted: {}", tx_hash),
            SendOutcome::Failed(error) => warn!("Send failed: {}", error),
        }

        self.page
            .commit(&ticket, render_outcome(&request.chain, &outcome))
            .await;
        outcome
    }
}
