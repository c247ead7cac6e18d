//! In-memory backend and observer used by the unit tests

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchError;
use crate::models::{ElementId, RegionContent};
use crate::traits::{RegionObserver, WalletBackend};

#[derive(Debug, Clone)]
pub(crate) struct Reply {
    delay: Duration,
    result: Result<Value, FetchError>,
}

impl Reply {
    pub(crate) fn json(value: Value) -> Self {
        Self { delay: Duration::ZERO, result: Ok(value) }
    }

    pub(crate) fn fail(message: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(FetchError::Transport(message.to_string())),
        }
    }

    pub(crate) fn after_ms(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }
}

/// Scripted backend. Replies are keyed by `address`, `portfolio:<chain>`
/// and `send`; queued replies are consumed in order and the last one sticks.
#[derive(Default)]
pub(crate) struct FakeBackend {
    scripts: Mutex<HashMap<String, VecDeque<Reply>>>,
    requests: Mutex<Vec<String>>,
    bodies: Mutex<Vec<Value>>,
}

impl FakeBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(&self, key: &str, reply: Reply) {
        self.scripts
            .lock()
            .unwrap()
            .entry(key.to_string())
            .or_default()
            .push_back(reply);
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn sent_bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }

    fn next(&self, key: &str) -> Reply {
        let mut scripts = self.scripts.lock().unwrap();
        match scripts.get_mut(key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) if !queue.is_empty() => queue[0].clone(),
            _ => Reply::fail(&format!("no reply scripted for {}", key)),
        }
    }

    async fn answer(&self, key: &str) -> Result<Value, FetchError> {
        let reply = self.next(key);
        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        reply.result
    }
}

#[async_trait]
impl WalletBackend for FakeBackend {
    async fn fetch_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, FetchError> {
        let line = if query.is_empty() {
            format!("GET {}", path)
        } else {
            let pairs: Vec<String> = query.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            format!("GET {}?{}", path, pairs.join("&"))
        };
        self.requests.lock().unwrap().push(line);

        let key = match path {
            "/api/portfolio" => {
                let chain = query
                    .iter()
                    .find(|(k, _)| *k == "chain")
                    .map(|(_, v)| *v)
                    .unwrap_or_default();
                format!("portfolio:{}", chain)
            }
            _ => "address".to_string(),
        };
        self.answer(&key).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, FetchError> {
        self.requests.lock().unwrap().push(format!("POST {}", path));
        self.bodies.lock().unwrap().push(body.clone());
        self.answer("send").await
    }
}

/// Records every region update in order
#[derive(Default)]
pub(crate) struct RecordingObserver {
    updates: Mutex<Vec<(ElementId, String)>>,
}

impl RecordingObserver {
    pub(crate) fn updates(&self) -> Vec<(ElementId, String)> {
        self.updates.lock().unwrap().clone()
    }

    pub(crate) fn updates_for(&self, region: ElementId) -> Vec<String> {
        self.updates()
            .into_iter()
            .filter(|(id, _)| *id == region)
            .map(|(_, text)| text)
            .collect()
    }
}

#[async_trait]
impl RegionObserver for RecordingObserver {
    async fn on_region_updated(&self, region: ElementId, content: &RegionContent) {
        self.updates.lock().unwrap().push((region, content.to_string()));
    }
}
