//! The page model: display regions, user inputs and their write discipline.
//!
//! Regions hold [`RegionContent`] values only. Writes replace a region
//! wholesale and go through generation tickets, so a response belonging to
//! a superseded request never overwrites a newer one.

pub mod generation;

use std::collections::BTreeMap;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::handlers::CompositeRegionObserver;
use crate::models::{ElementId, RegionContent};
use crate::traits::RegionObserver;

pub use generation::{Generations, Ticket};

pub struct Page {
    regions: DashMap<ElementId, RegionContent>,
    inputs: DashMap<ElementId, String>,
    generations: Generations,
    observer: Arc<dyn RegionObserver>,
}

impl Page {
    /// Create a page that reports every region update to `observer`
    pub fn new(observer: Arc<dyn RegionObserver>) -> Self {
        Self {
            regions: DashMap::new(),
            inputs: DashMap::new(),
            generations: Generations::new(),
            observer,
        }
    }

    /// A page nobody watches
    pub fn detached() -> Self {
        Self::new(Arc::new(CompositeRegionObserver::new()))
    }

    /// Take a ticket for a pending write to `region`
    pub fn begin(&self, region: ElementId) -> Ticket {
        self.generations.begin(region)
    }

    /// Replace the ticket's region with `content` unless a newer ticket
    /// exists. Returns whether the write happened.
    pub async fn commit(&self, ticket: &Ticket, content: RegionContent) -> bool {
        let region = ticket.region();
        let written = self.generations.run_if_current(ticket, || {
            self.regions.insert(region, content);
        });

        if !written {
            debug!("Dropped stale update for #{} (generation {})", region, ticket.generation());
            return false;
        }

        // Report what the region holds now; a racing newer write may already
        // have replaced ours.
        let current = self.regions.get(&region).map(|c| c.clone());
        if let Some(current) = current {
            self.observer.on_region_updated(region, &current).await;
        }
        true
    }

    /// Unconditional replacement; supersedes any pending request
    pub async fn set(&self, region: ElementId, content: RegionContent) {
        let ticket = self.begin(region);
        self.commit(&ticket, content).await;
    }

    pub fn get(&self, region: ElementId) -> Option<RegionContent> {
        self.regions.get(&region).map(|c| c.clone())
    }

    /// Region content as plain text
    pub fn text(&self, region: ElementId) -> Option<String> {
        self.get(region).map(|c| c.to_string())
    }

    pub fn set_input(&self, input: ElementId, value: impl Into<String>) {
        self.inputs.insert(input, value.into());
    }

    /// Current value of an input field, empty when never set
    pub fn input(&self, input: ElementId) -> String {
        self.inputs.get(&input).map(|v| v.clone()).unwrap_or_default()
    }

    /// Ordered copy of all populated regions
    pub fn snapshot(&self) -> BTreeMap<ElementId, RegionContent> {
        self.regions
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::detached()
    }
}
