use async_trait::async_trait;

use crate::models::{ElementId, RegionContent};

/// Handler for page region updates
#[async_trait]
pub trait RegionObserver: Send + Sync {
    /// Called after `region` has been replaced with `content`
    async fn on_region_updated(&self, region: ElementId, content: &RegionContent);
}
