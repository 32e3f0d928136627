//! User-facing notifications
//!
//! A short, bounded list of transient messages. The newest message sits at
//! the front; once the queue is full the oldest entry is dropped. Entries
//! expire after a fixed time-to-live, checked lazily against the clock the
//! caller passes in.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default number of notifications visible at once
pub const DEFAULT_CAPACITY: usize = 5;

/// Default lifetime of a notification, in seconds
pub const DEFAULT_TTL_SECS: u64 = 6;

// one year
const MAX_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Identifier issued by a [`NotificationQueue`]
pub type NotificationId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    #[serde(rename = "type")]
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

/// Sink for non-fatal messages raised by the store, transforms and importer
pub trait Notify {
    fn notify(&mut self, severity: Severity, message: String);
}

/// Bounded, self-expiring notification list
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: NotificationId,
    capacity: usize,
    ttl: Duration,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TTL_SECS)
    }
}

impl NotificationQueue {
    /// Create a queue holding at most `capacity` entries, each living `ttl_secs` seconds
    pub fn new(capacity: usize, ttl_secs: u64) -> Self {
        Self {
            items: Vec::with_capacity(capacity + 1),
            next_id: 1,
            capacity,
            ttl: Duration::seconds(ttl_secs.min(MAX_TTL_SECS) as i64),
        }
    }

    /// Add a message stamped with the current time
    pub fn add(&mut self, message: impl Into<String>, severity: Severity) -> NotificationId {
        self.add_at(message, severity, Utc::now())
    }

    /// Add a message stamped with `now`
    pub fn add_at(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now: DateTime<Utc>,
    ) -> NotificationId {
        let id = self.next_id;
        self.next_id += 1;

        self.items.insert(
            0,
            Notification {
                id,
                message: message.into(),
                severity,
                created_at: now,
            },
        );
        if self.items.len() > self.capacity {
            self.items.truncate(self.capacity);
        }
        id
    }

    /// Remove a notification; unknown ids are ignored
    pub fn remove(&mut self, id: NotificationId) {
        self.items.retain(|n| n.id != id);
    }

    /// Drop every notification whose lifetime has elapsed at `now`
    pub fn prune_expired(&mut self, now: DateTime<Utc>) {
        let ttl = self.ttl;
        let before = self.items.len();
        self.items.retain(|n| now - n.created_at < ttl);
        let dropped = before - self.items.len();
        if dropped > 0 {
            debug!("Expired {} notification(s)", dropped);
        }
    }

    /// Prune expired entries and return what is still visible at `now`
    pub fn active(&mut self, now: DateTime<Utc>) -> &[Notification] {
        self.prune_expired(now);
        &self.items
    }

    /// All entries currently held, newest first, without pruning
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Notify for NotificationQueue {
    fn notify(&mut self, severity: Severity, message: String) {
        self.add(message, severity);
    }
}

/// Collects messages without any bound or expiry (used by batch callers)
impl Notify for Vec<(Severity, String)> {
    fn notify(&mut self, severity: Severity, message: String) {
        self.push((severity, message));
    }
}
