use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::models::{ElementId, RegionContent};
use crate::page::Page;

pub const LOADING: &str = "Balance: Loading...";
pub const DEMO_BALANCE: &str = "Balance: 1.234 ETH";
pub const DEMO_ASSETS: &str = "Assets: ETH, USDC, DAI";
pub const DEMO_SEND: &str = "Send transaction flow...";
pub const DEMO_RECEIVE: &str = "Receive funds address flow...";

/// Demo mode: fills the page with canned values, no backend involved
pub struct PlaceholderLoader {
    page: Arc<Page>,
    delay: Duration,
}

impl PlaceholderLoader {
    pub fn new(page: Arc<Page>, delay: Duration) -> Self {
        Self { page, delay }
    }

    pub async fn load(&self) {
        info!("Loading demo wallet");
        let ticket = self.page.begin(ElementId::Balance);
        self.page.commit(&ticket, RegionContent::text(LOADING)).await;

        tokio::time::sleep(self.delay).await;

        if self.page.commit(&ticket, RegionContent::text(DEMO_BALANCE)).await {
            self.page.set(ElementId::Assets, RegionContent::text(DEMO_ASSETS)).await;
        }
    }

    pub async fn send(&self) {
        self.page.set(ElementId::SendStatus, RegionContent::text(DEMO_SEND)).await;
    }

    pub async fn receive(&self) {
        self.page.set(ElementId::SendStatus, RegionContent::text(DEMO_RECEIVE)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingObserver;

    #[tokio::test(start_paused = true)]
    async fn test_load_shows_loading_then_balance() {
        let observer = Arc::new(RecordingObserver::default());
        let page = Arc::new(Page::new(observer.clone()));
        let loader = PlaceholderLoader::new(page.clone(), Duration::from_millis(1000));

        let started = tokio::time::Instant::now();
        loader.load().await;

        assert!(started.elapsed() >= Duration::from_millis(1000));
        assert_eq!(
            observer.updates_for(ElementId::Balance),
            vec![LOADING.to_string(), DEMO_BALANCE.to_string()]
        );
        assert_eq!(page.text(ElementId::Assets).as_deref(), Some(DEMO_ASSETS));
    }

    #[tokio::test]
    async fn test_demo_actions() {
        let page = Arc::new(Page::detached());
        let loader = PlaceholderLoader::new(page.clone(), Duration::ZERO);

        loader.send().await;
        assert_eq!(page.text(ElementId::SendStatus).as_deref(), Some(DEMO_SEND));

        loader.receive().await;
        assert_eq!(page.text(ElementId::SendStatus).as_deref(), Some(DEMO_RECEIVE));
    }
}
