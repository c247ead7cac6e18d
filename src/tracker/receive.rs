use std::sync::Arc;

use tracing::warn;

use crate::models::{ElementId, RegionContent};
use crate::page::Page;
use crate::traits::backend::WalletBackend;

/// Shows where to send funds to this wallet
pub struct ReceiveFlow {
    backend: Arc<dyn WalletBackend>,
    page: Arc<Page>,
}

impl ReceiveFlow {
    pub fn new(backend: Arc<dyn WalletBackend>, page: Arc<Page>) -> Self {
        Self { backend, page }
    }

    pub async fn show(&self) {
        let ticket = self.page.begin(ElementId::SendStatus);
        let content = match self.backend.fetch_address().await {
            Ok(address) => RegionContent::text(format!("Receive to: {}", address)),
            Err(e) => {
                warn!("Failed to resolve receive address: {}", e);
                RegionContent::text(format!("❌ {}", e))
            }
        };
        self.page.commit(&ticket, content).await;
    }
}
