use async_trait::async_trait;
use tracing::info;

use crate::models::{ElementId, RegionContent};
use crate::traits::region_observer::RegionObserver;
use crate::utils::helper::truncate_string;

const MAX_LINE_LEN: usize = 160;

/// Console logging observer
pub struct ConsoleRegionObserver;

impl ConsoleRegionObserver {
    /// Create a new console observer
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleRegionObserver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegionObserver for ConsoleRegionObserver {
    async fn on_region_updated(&self, region: ElementId, content: &RegionContent) {
        match content {
            RegionContent::Table(table) => {
                info!("#{} ({} assets)", region, table.rows.len());
                info!("{}", "-".repeat(60));
                for line in table.lines() {
                    info!("  {}", truncate_string(&line, MAX_LINE_LEN));
                }
            }
            other => {
                for line in other.lines() {
                    info!("#{}: {}", region, truncate_string(&line, MAX_LINE_LEN));
                }
            }
        }
    }
}
