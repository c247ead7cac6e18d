use std::sync::Arc;
use async_trait::async_trait;

use crate::models::{ElementId, RegionContent};
use crate::traits::region_observer::RegionObserver;

/// Composite observer that fans updates out to multiple observers
pub struct CompositeRegionObserver {
    observers: Vec<Arc<dyn RegionObserver>>,
}

impl CompositeRegionObserver {
    /// Create a new composite observer
    pub fn new() -> Self {
        Self { observers: Vec::new() }
    }

    /// Add an observer to the composite
    pub fn add_observer(&mut self, observer: Arc<dyn RegionObserver>) {
        self.observers.push(observer);
    }

    /// Check if there are any observers
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Number of observers
    pub fn len(&self) -> usize {
        self.observers.len()
    }
}

impl Default for CompositeRegionObserver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegionObserver for CompositeRegionObserver {
    async fn on_region_updated(&self, region: ElementId, content: &RegionContent) {
        for observer in &self.observers {
            observer.on_region_updated(region, content).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingObserver;

    #[tokio::test]
    async fn test_fans_out_to_every_observer() {
        let first = Arc::new(RecordingObserver::default());
        let second = Arc::new(RecordingObserver::default());

        let mut composite = CompositeRegionObserver::new();
        assert!(composite.is_empty());
        composite.add_observer(first.clone());
        composite.add_observer(second.clone());
        assert_eq!(composite.len(), 2);

        composite
            .on_region_updated(ElementId::Balance, &RegionContent::text("Balance: 1.234 ETH"))
            .await;

        assert_eq!(first.updates_for(ElementId::Balance), vec!["Balance: 1.234 ETH".to_string()]);
        assert_eq!(second.updates().len(), 1);
    }
}
