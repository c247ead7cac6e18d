use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::warn;

use crate::models::{Chain, ElementId};
use crate::page::Page;
use crate::traits::backend::WalletBackend;

use super::portfolio_loader::PortfolioLoader;
use super::receive::ReceiveFlow;
use super::transaction_submitter::TransactionSubmitter;

/// The live dashboard: wires page triggers to their handlers
pub struct Dashboard {
    page: Arc<Page>,
    loader: PortfolioLoader,
    submitter: TransactionSubmitter,
    receive: ReceiveFlow,
}

impl Dashboard {
    pub fn new(backend: Arc<dyn WalletBackend>, page: Arc<Page>, chains: Vec<Chain>) -> Self {
        Self {
            loader: PortfolioLoader::new(backend.clone(), page.clone(), chains),
            submitter: TransactionSubmitter::new(backend.clone(), page.clone()),
            receive: ReceiveFlow::new(backend, page.clone()),
            page,
        }
    }

    pub fn page(&self) -> &Arc<Page> {
        &self.page
    }

    pub fn loader(&self) -> &PortfolioLoader {
        &self.loader
    }

    /// Page load: one refresh
    pub async fn on_load(&self) {
        self.loader.refresh().await;
    }

    /// Dispatch a click on a trigger element
    pub async fn click(&self, element: ElementId) -> anyhow::Result<()> {
        match element {
            ElementId::Refresh => self.loader.refresh().await,
            ElementId::SendBtn => {
                self.submitter.submit().await;
            }
            ElementId::ReceiveBtn => self.receive.show().await,
            other => anyhow::bail!("#{} is not a trigger", other),
        }
        Ok(())
    }

    /// Run a click in the background.
    ///
    /// The send form is read before the task is spawned, so editing the
    /// inputs right after a click never changes what that click submits.
    pub fn spawn_click(self: &Arc<Self>, element: ElementId) -> anyhow::Result<JoinHandle<()>> {
        let dashboard = self.clone();
        let handle = match element {
            ElementId::SendBtn => {
                let request = self.submitter.read_inputs();
                tokio::spawn(async move {
                    dashboard.submitter.submit_request(request).await;
                })
            }
            ElementId::Refresh | ElementId::ReceiveBtn => tokio::spawn(async move {
                if let Err(e) = dashboard.click(element).await {
                    warn!("Click on #{} failed: {}", element, e);
                }
            }),
            other => anyhow::bail!("#{} is not a trigger", other),
        };
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeBackend, Reply};
    use serde_json::json;

    fn dashboard() -> (Arc<FakeBackend>, Dashboard) {
        let backend = Arc::new(FakeBackend::new());
        backend.reply("address", Reply::json(json!({"address": "0xABC"})));
        backend.reply("portfolio:eth", Reply::json(json!({"items": []})));
        backend.reply("portfolio:base", Reply::json(json!({"items": []})));
        backend.reply("send", Reply::json(json!({"tx_hash": "0xdeadbeef"})));
        let dashboard = Dashboard::new(backend.clone(), Arc::new(Page::detached()), Chain::ALL.to_vec());
        (backend, dashboard)
    }

    #[tokio::test]
    async fn test_triggers() {
        let (backend, dashboard) = dashboard();

        dashboard.on_load().await;
        dashboard.click(ElementId::Refresh).await.unwrap();
        let address_calls = backend
            .requests()
            .iter()
            .filter(|r| r.as_str() == "GET /api/address")
            .count();
        assert_eq!(address_calls, 2);

        dashboard.page().set_input(ElementId::SendChain, "eth");
        dashboard.click(ElementId::SendBtn).await.unwrap();
        assert!(dashboard
            .page()
            .text(ElementId::SendStatus)
            .unwrap()
            .contains("0xdeadbeef"));

        dashboard.click(ElementId::ReceiveBtn).await.unwrap();
        assert_eq!(
            dashboard.page().text(ElementId::SendStatus).as_deref(),
            Some("Receive to: 0xABC")
        );
    }

    #[tokio::test]
    async fn test_non_trigger_rejected() {
        let (_, dashboard) = dashboard();
        assert!(dashboard.click(ElementId::Balance).await.is_err());
        assert!(Arc::new(dashboard).spawn_click(ElementId::Assets).is_err());
    }

    #[tokio::test]
    async fn test_spawned_sends_keep_their_own_inputs() {
        let (backend, dashboard) = dashboard();
        let dashboard = Arc::new(dashboard);
        let page = dashboard.page().clone();

        page.set_input(ElementId::SendChain, "eth");
        page.set_input(ElementId::SendTo, "0xAAA");
        page.set_input(ElementId::SendAmount, "1");
        let first = dashboard.spawn_click(ElementId::SendBtn).unwrap();

        page.set_input(ElementId::SendChain, "base");
        page.set_input(ElementId::SendTo, "0xBBB");
        page.set_input(ElementId::SendAmount, "2");
        let second = dashboard.spawn_click(ElementId::SendBtn).unwrap();

        first.await.unwrap();
        second.await.unwrap();

        let mut bodies = backend.sent_bodies();
        bodies.sort_by_key(|b| b["to"].to_string());
        assert_eq!(
            bodies,
            vec![
                json!({"chain": "eth", "to": "0xAAA", "amount_eth": "1"}),
                json!({"chain": "base", "to": "0xBBB", "amount_eth": "2"}),
            ]
        );
    }

    #[tokio::test]
    async fn test_spawned_refresh_runs() {
        let (backend, dashboard) = dashboard();
        Arc::new(dashboard)
            .spawn_click(ElementId::Refresh)
            .unwrap()
            .await
            .unwrap();
        assert!(backend.requests().iter().any(|r| r == "GET /api/address"));
    }
}
