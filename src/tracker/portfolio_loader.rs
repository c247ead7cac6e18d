use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use tracing::{info, warn};

use crate::models::{AssetTable, Chain, ElementId, PortfolioResponse, RegionContent};
use crate::page::{Page, Ticket};
use crate::traits::backend::WalletBackend;
use crate::utils::format_address;

pub const NO_ASSETS: &str = "No assets found.";

/// Turn a portfolio response into what its region shows
pub fn render_portfolio(response: &PortfolioResponse) -> RegionContent {
    match response {
        PortfolioResponse::Error(error) => RegionContent::text(error.clone()),
        PortfolioResponse::Assets(items) if items.is_empty() => RegionContent::text(NO_ASSETS),
        PortfolioResponse::Assets(items) => RegionContent::Table(AssetTable::new(items)),
    }
}

/// Loads the active address and per-chain balances into the page
pub struct PortfolioLoader {
    backend: Arc<dyn WalletBackend>,
    page: Arc<Page>,
    chains: Vec<Chain>,
}

impl PortfolioLoader {
    pub fn new(backend: Arc<dyn WalletBackend>, page: Arc<Page>, chains: Vec<Chain>) -> Self {
        Self { backend, page, chains }
    }

    /// Replace `region` with the rendering of `response`
    pub async fn render(&self, region: ElementId, response: &PortfolioResponse) {
        self.page.set(region, render_portfolio(response)).await;
    }

    /// Resolve the address, then load every chain concurrently.
    ///
    /// Tickets for all regions are taken up front, so a later refresh
    /// supersedes this one everywhere even before its own responses arrive.
    pub async fn refresh(&self) {
        let address_ticket = self.page.begin(ElementId::Address);
        let chain_tickets: Vec<(Chain, Ticket)> = self
            .chains
            .iter()
            .map(|&chain| (chain, self.page.begin(ElementId::balances_for(chain))))
            .collect();

        let address = match self.backend.fetch_address().await {
            Ok(address) => address,
            Err(e) => {
                warn!("Failed to resolve wallet address: {}", e);
                let content = RegionContent::text(e.to_string());
                self.page.commit(&address_ticket, content.clone()).await;
                for (_, ticket) in &chain_tickets {
                    self.page.commit(ticket, content.clone()).await;
                }
                return;
            }
        };

        info!("Refreshing portfolio for {}", format_address(&address));
        self.page
            .commit(&address_ticket, RegionContent::text(address.clone()))
            .await;

        let loads = chain_tickets
            .iter()
            .map(|(chain, ticket)| self.load_chain(*chain, ticket, &address));
        join_all(loads).await;
    }

    async fn load_chain(&self, chain: Chain, ticket: &Ticket, address: &str) {
        let content = match self.backend.fetch_portfolio(chain.as_str(), address).await {
            Ok(response) => {
                if let PortfolioResponse::Error(error) = &response {
                    warn!("Backend error for {} portfolio: {}", chain, error);
                }
                render_portfolio(&response)
            }
            Err(e) => {
                warn!("Failed to load {} portfolio: {}", chain, e);
                RegionContent::text(e.to_string())
            }
        };
        self.page.commit(ticket, content).await;
    }

    /// Refresh every `tick`, the first time one tick from now
    pub async fn start_polling(&self, tick: Duration) {
        info!("Starting polling refresh with interval: {}ms", tick.as_millis());
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + tick, tick);
        loop {
            interval.tick().await;
            self.refresh().await;
        }
    }
}
