//! # Task Registry
//!
//! Owns the `JoinHandle` of every simulated flow and toast timer.
//!
//! ## Scoping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   view scopes                           toast timers                    │
//! │   ───────────                           ────────────                    │
//! │   Auth      ─► [login]                  id 1712.. ─► [sleep ttl]        │
//! │   Checkout  ─► [place_order]            id 1713.. ─► [sleep ttl]        │
//! │   Landing   ─► [suggestion]                                             │
//! │                                                                         │
//! │   abort_view(v)     aborts every task spawned under v                   │
//! │   cancel_toast(id)  aborts one timer (dismissal or eviction)            │
//! │   shutdown()        aborts everything                                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Spawning needs a running tokio runtime.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;
use tracing::debug;

use monngon_core::{ToastId, View};

#[derive(Default)]
struct Registry {
    scoped: HashMap<View, Vec<JoinHandle<()>>>,
    toasts: HashMap<ToastId, JoinHandle<()>>,
}

/// Shared, cloneable handle to the registry.
#[derive(Clone, Default)]
pub struct TaskRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Spawns a flow owned by `view`.
    pub fn spawn_scoped<F>(&self, view: View, name: &'static str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(future);
        let mut registry = self.lock();
        let handles = registry.scoped.entry(view).or_default();
        handles.retain(|h| !h.is_finished());
        handles.push(handle);
        debug!(task = name, view = %view, "Spawned view-scoped task");
    }

    /// Aborts every task owned by `view`.
    ///
    /// ## Returns
    /// How many unfinished tasks were aborted.
    pub fn abort_view(&self, view: View) -> usize {
        let handles = self.lock().scoped.remove(&view).unwrap_or_default();
        let mut aborted = 0;
        for handle in handles {
            if !handle.is_finished() {
                handle.abort();
                aborted += 1;
            }
        }
        if aborted > 0 {
            debug!(view = %view, aborted, "Aborted view-scoped tasks");
        }
        aborted
    }

    /// Unfinished tasks owned by `view`.
    pub fn active_in(&self, view: View) -> usize {
        self.lock()
            .scoped
            .get(&view)
            .map_or(0, |handles| handles.iter().filter(|h| !h.is_finished()).count())
    }

    /// Spawns the expiry timer of a toast.
    ///
    /// The registry lock is held across spawn and insert, so a timer that
    /// finishes at once cannot call `forget_toast` before its handle is
    /// recorded.
    pub fn schedule_toast<F>(&self, id: ToastId, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut registry = self.lock();
        let handle = tokio::spawn(future);
        if let Some(previous) = registry.toasts.insert(id, handle) {
            previous.abort();
        }
    }

    /// Aborts a toast timer. Returns false if none was pending.
    pub fn cancel_toast(&self, id: ToastId) -> bool {
        match self.lock().toasts.remove(&id) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Drops the bookkeeping of a timer that has fired.
    pub fn forget_toast(&self, id: ToastId) {
        self.lock().toasts.remove(&id);
    }

    pub fn pending_toast_timers(&self) -> usize {
        self.lock().toasts.values().filter(|h| !h.is_finished()).count()
    }

    /// Aborts every registered task.
    pub fn shutdown(&self) {
        let mut registry = self.lock();
        let scoped: usize = registry.scoped.values().map(Vec::len).sum();
        let timers = registry.toasts.len();

        for (_, handles) in registry.scoped.drain() {
            handles.iter().for_each(JoinHandle::abort);
        }
        for (_, handle) in registry.toasts.drain() {
            handle.abort();
        }
        debug!(scoped, timers, "Task registry shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    fn flag_after(delay_ms: u64, flag: Arc<AtomicBool>) -> impl Future<Output = ()> + Send + 'static {
        async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            flag.store(true, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_abort_view_cancels_only_that_view() {
        let tasks = TaskRegistry::new();
        let checkout = Arc::new(AtomicBool::new(false));
        let landing = Arc::new(AtomicBool::new(false));

        tasks.spawn_scoped(View::Checkout, "order", flag_after(100, checkout.clone()));
        tasks.spawn_scoped(View::Landing, "suggest", flag_after(100, landing.clone()));
        assert_eq!(tasks.active_in(View::Checkout), 1);

        assert_eq!(tasks.abort_view(View::Checkout), 1);
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(!checkout.load(Ordering::SeqCst));
        assert!(landing.load(Ordering::SeqCst));
        assert_eq!(tasks.active_in(View::Checkout), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_toast_timer() {
        let tasks = TaskRegistry::new();
        let fired = Arc::new(AtomicBool::new(false));

        tasks.schedule_toast(42, flag_after(3_000, fired.clone()));
        assert_eq!(tasks.pending_toast_timers(), 1);
        assert!(tasks.cancel_toast(42));
        assert!(!tasks.cancel_toast(42));

        tokio::time::sleep(Duration::from_millis(5_000)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_aborts_everything() {
        let tasks = TaskRegistry::new();
        let a = Arc::new(AtomicBool::new(false));
        let b = Arc::new(AtomicBool::new(false));

        tasks.spawn_scoped(View::Auth, "login", flag_after(10, a.clone()));
        tasks.schedule_toast(1, flag_after(10, b.clone()));
        tasks.shutdown();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!a.load(Ordering::SeqCst));
        assert!(!b.load(Ordering::SeqCst));
        assert_eq!(tasks.pending_toast_timers(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_instant_timer_leaves_no_entry_behind() {
        let tasks = TaskRegistry::new();
        for id in 0..200 {
            let this = tasks.clone();
            tasks.schedule_toast(id, async move { this.forget_toast(id) });
        }

        let drained = tokio::time::timeout(Duration::from_secs(5), async {
            while !tasks.lock().toasts.is_empty() {
                tokio::task::yield_now().await;
            }
        })
        .await;
        assert!(drained.is_ok(), "timer handles leaked past forget_toast");
    }
}
