//! # Notification Queue
//!
//! Bookkeeping for transient, auto-expiring toasts.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Toast Lifecycle                                      │
//! │                                                                         │
//! │  push(msg) ──► [id assigned] ──► displayed ──┬──► TTL elapsed ──► gone │
//! │                      │                        ├──► dismiss(id) ──► gone │
//! │                      │                        └──► evicted (if bounded) │
//! │                      ▼                                                  │
//! │              timer scheduled by the caller                              │
//! │                                                                         │
//! │  Removing an id that is already gone is a no-op.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This module never sleeps. The storefront schedules the expiry timer for
//! the id returned by [`ToastQueue::push`] and calls [`ToastQueue::dismiss`]
//! when it fires.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Severity;

/// Notification identifier. Time-derived and strictly increasing.
pub type ToastId = i64;

/// A user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// Result of [`ToastQueue::push`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pushed {
    pub id: ToastId,
    /// Toasts dropped to keep the queue within its bound, oldest first.
    pub evicted: Vec<ToastId>,
}

/// Insertion-ordered toast queue, unbounded unless a cap is set.
///
/// Without a cap every toast stays until its timer fires or it is
/// dismissed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    capacity: Option<usize>,
    last_id: ToastId,
}

impl ToastQueue {
    /// Creates an unbounded queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a queue holding at most `capacity` toasts (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        ToastQueue {
            capacity: Some(capacity.max(1)),
            ..Self::default()
        }
    }

    /// `None` means unbounded.
    pub fn with_limit(limit: Option<usize>) -> Self {
        match limit {
            Some(capacity) => Self::with_capacity(capacity),
            None => Self::new(),
        }
    }

    /// Appends a toast created at `now`.
    ///
    /// The id is `now` in milliseconds, bumped past the previous id when two
    /// toasts land in the same millisecond (or the clock steps backwards).
    pub fn push(&mut self, message: impl Into<String>, severity: Severity, now: DateTime<Utc>) -> Pushed {
        let id = now.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;

        self.toasts.push(Toast {
            id,
            message: message.into(),
            severity,
            created_at: now,
        });

        let evicted = match self.capacity {
            Some(capacity) => {
                let overflow = self.toasts.len().saturating_sub(capacity);
                self.toasts.drain(..overflow).map(|t| t.id).collect()
            }
            None => Vec::new(),
        };

        Pushed { id, evicted }
    }

    /// Removes a toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn test_push_uses_timestamp_as_id() {
        let mut queue = ToastQueue::default();
        let pushed = queue.push("Đã đăng xuất", Severity::Info, at(1_700_000_000_000));

        assert_eq!(pushed.id, 1_700_000_000_000);
        assert!(pushed.evicted.is_empty());
        assert_eq!(queue.get(pushed.id).unwrap().message, "Đã đăng xuất");
    }

    #[test]
    fn test_ids_strictly_increase_within_same_millisecond() {
        let mut queue = ToastQueue::default();
        let now = at(1_000);

        let a = queue.push("a", Severity::Info, now).id;
        let b = queue.push("b", Severity::Info, now).id;
        let c = queue.push("c", Severity::Info, at(500)).id;

        assert!(a < b && b < c);
    }

    #[test]
    fn test_insertion_order_and_no_dedup() {
        let mut queue = ToastQueue::with_capacity(10);
        queue.push("same", Severity::Success, at(1));
        queue.push("same", Severity::Success, at(2));
        queue.push("other", Severity::Error, at(3));

        let messages: Vec<&str> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["same", "same", "other"]);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut queue = ToastQueue::default();
        let id = queue.push("x", Severity::Info, at(1)).id;

        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(!queue.dismiss(12345));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_bound_evicts_oldest() {
        let mut queue = ToastQueue::with_capacity(2);
        let first = queue.push("1", Severity::Info, at(1)).id;
        let second = queue.push("2", Severity::Info, at(2)).id;
        let third = queue.push("3", Severity::Info, at(3));

        assert_eq!(third.evicted, vec![first]);
        assert_eq!(queue.len(), 2);
        assert!(queue.get(first).is_none());
        assert!(queue.get(second).is_some());
    }

    #[test]
    fn test_capacity_never_exceeded() {
        let mut queue = ToastQueue::with_capacity(3);
        for i in 0..20 {
            queue.push(format!("toast {}", i), Severity::Info, at(i));
            assert!(queue.len() <= 3);
        }
        assert_eq!(queue.toasts()[0].message, "toast 17");
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let queue = ToastQueue::with_capacity(0);
        assert_eq!(queue.capacity(), Some(1));
    }

    #[test]
    fn test_default_queue_never_evicts() {
        let mut queue = ToastQueue::new();
        assert_eq!(queue.capacity(), None);

        for i in 0..50 {
            let pushed = queue.push(format!("toast {}", i), Severity::Success, at(i));
            assert!(pushed.evicted.is_empty());
        }
        assert_eq!(queue.len(), 50);
        assert_eq!(queue.toasts()[0].message, "toast 0");
    }

    #[test]
    fn test_with_limit() {
        assert_eq!(ToastQueue::with_limit(None).capacity(), None);
        assert_eq!(ToastQueue::with_limit(Some(4)).capacity(), Some(4));
    }
}
