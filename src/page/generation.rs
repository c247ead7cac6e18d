use dashmap::DashMap;

use crate::models::ElementId;

/// Proof that a request was the newest for its region when it started
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    region: ElementId,
    generation: u64,
}

impl Ticket {
    pub fn region(&self) -> ElementId {
        self.region
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Per-region generation counters.
///
/// Every request that will write a region takes a ticket first; a write is
/// applied only if no newer ticket was handed out for the same region.
#[derive(Debug, Default)]
pub struct Generations {
    counters: DashMap<ElementId, u64>,
}

impl Generations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, region: ElementId) -> Ticket {
        let mut counter = self.counters.entry(region).or_insert(0);
        *counter += 1;
        Ticket { region, generation: *counter }
    }

    /// Run `write` only while `ticket` is current. The counter stays locked
    /// for the duration so no newer ticket can be issued in between.
    pub fn run_if_current<F: FnOnce()>(&self, ticket: &Ticket, write: F) -> bool {
        match self.counters.get(&ticket.region) {
            Some(g) if *g == ticket.generation => {
                write();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes() {
        let generations = Generations::new();
        let first = generations.begin(ElementId::SendStatus);
        let second = generations.begin(ElementId::SendStatus);

        assert!(!generations.run_if_current(&first, || {}));
        assert!(generations.run_if_current(&second, || {}));
        assert_eq!(second.generation(), first.generation() + 1);
    }

    #[test]
    fn test_regions_are_independent() {
        let generations = Generations::new();
        let eth = generations.begin(ElementId::EthBalances);
        let _base = generations.begin(ElementId::BaseBalances);
        assert!(generations.run_if_current(&eth, || {}));
    }

    #[test]
    fn test_run_if_current() {
        let generations = Generations::new();
        let stale = generations.begin(ElementId::Address);
        let fresh = generations.begin(ElementId::Address);

        let mut writes = Vec::new();
        assert!(!generations.run_if_current(&stale, || writes.push("stale")));
        assert!(generations.run_if_current(&fresh, || writes.push("fresh")));
        assert_eq!(writes, vec!["fresh"]);
    }
}
