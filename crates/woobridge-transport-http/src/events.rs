//! In-memory change feed for store mutations.
//!
//! Every successful write dispatched over HTTP lands here twice: once on a
//! per-resource broadcast channel (consumed by the SSE endpoint) and once in
//! a bounded ring buffer (consumed by the polling endpoint).

use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::broadcast;
use uuid::Uuid;

use woobridge_core::MutationSink;

/// Broadcast channel capacity per resource. Slow SSE clients past this
/// lag and drop events rather than blocking publishers.
const CHANNEL_CAPACITY: usize = 256;

/// Default number of events the polling ring buffer retains.
const DEFAULT_RETAIN: usize = 1024;

/// One mutation, as seen by SSE subscribers and pollers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelEvent {
    /// Unique event ID, also used as the SSE event id.
    pub id: String,
    /// Resource the mutation touched (`products`, `orders`, ...).
    pub resource: String,
    /// The gateway method that produced the mutation.
    pub method: String,
    /// When the mutation completed.
    pub timestamp: DateTime<Utc>,
    /// The upstream response body.
    pub payload: Value,
}

impl ChannelEvent {
    fn new(resource: &str, method: &str, payload: Value) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            resource: resource.to_string(),
            method: method.to_string(),
            timestamp: Utc::now(),
            payload,
        }
    }
}

/// Fan-out point for mutation events.
///
/// Channels are created lazily per resource; the ring buffer is shared
/// across all resources and trimmed to a fixed size on every insert.
pub struct EventHub {
    channels: DashMap<String, broadcast::Sender<ChannelEvent>>,
    recent: RwLock<VecDeque<ChannelEvent>>,
    retain: usize,
}

impl EventHub {
    /// Creates a hub whose ring buffer keeps at most `retain` events.
    pub fn new(retain: usize) -> Self {
        Self {
            channels: DashMap::new(),
            recent: RwLock::new(VecDeque::new()),
            retain,
        }
    }

    /// Subscribes to live events for one resource.
    pub fn subscribe(&self, resource: &str) -> broadcast::Receiver<ChannelEvent> {
        self.channels
            .entry(resource.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Records a mutation: appends it to the ring buffer and broadcasts it
    /// to any live subscribers of the resource channel.
    pub fn record(&self, resource: &str, method: &str, payload: Value) -> ChannelEvent {
        let event = ChannelEvent::new(resource, method, payload);

        {
            let mut recent = self
                .recent
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            recent.push_back(event.clone());
            while recent.len() > self.retain {
                recent.pop_front();
            }
        }

        // Send fails when the channel has no receivers; that only means
        // nobody is listening right now.
        if let Some(tx) = self.channels.get(resource) {
            let _ = tx.send(event.clone());
        }

        tracing::debug!(resource, method, "mutation event recorded");
        event
    }

    /// Returns buffered events for `resource` newer than `since`, oldest first.
    pub fn events_since(&self, resource: &str, since: Option<DateTime<Utc>>) -> Vec<ChannelEvent> {
        let recent = self.recent.read().unwrap_or_else(PoisonError::into_inner);
        recent
            .iter()
            .filter(|e| e.resource == resource)
            .filter(|e| since.is_none_or(|cutoff| e.timestamp > cutoff))
            .cloned()
            .collect()
    }

    /// Number of live SSE subscribers across all resources.
    pub fn subscriber_count(&self) -> usize {
        self.channels.iter().map(|e| e.value().receiver_count()).sum()
    }
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new(DEFAULT_RETAIN)
    }
}

impl MutationSink for EventHub {
    fn publish(&self, resource: &str, method: &str, payload: &Value) {
        self.record(resource, method, payload.clone());
    }
}

/// Parses the `since` query parameter: RFC 3339 first, then epoch milliseconds.
pub fn parse_since(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    raw.parse::<i64>().ok().and_then(DateTime::from_timestamp_millis)
}
