//! # Storefront Handle
//!
//! Cloneable handle every command works through.
//!
//! ## Mutation Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  command ──► update(|state| ..) ──► lock, mutate, collect effects       │
//! │                                            │                            │
//! │                                            ▼ (lock released)            │
//! │                     ToastShown(id)   ──► schedule expiry timer          │
//! │                     ToastRemoved(id) ──► cancel its timer               │
//! │                     ViewLeft(view)   ──► abort the view's flows         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any method that can produce a toast or a view change needs a running
//! tokio runtime, since effects spawn or abort tasks.

use std::sync::Arc;
use tracing::{debug, info};

use monngon_core::{Catalog, CoreResult, Severity, ToastId, View};

use crate::error::{ApiError, ApiResult};
use crate::services::{provider_for, SuggestionProvider};
use crate::state::{AppState, Effect, StateSnapshot, StoreState, StorefrontConfig, Transition};
use crate::tasks::TaskRegistry;

#[derive(Clone)]
pub struct Storefront {
    store: StoreState,
    config: Arc<StorefrontConfig>,
    tasks: TaskRegistry,
    assistant: Arc<dyn SuggestionProvider>,
}

impl Storefront {
    /// Builds a storefront over the seeded catalog, with the assistant
    /// chosen by `config.assistant.provider`.
    ///
    /// Fails only if the seeded catalog breaks a catalog invariant.
    pub fn new(config: StorefrontConfig) -> CoreResult<Self> {
        let assistant = provider_for(config.assistant.provider);
        let catalog = Catalog::seeded()?;
        Ok(Storefront::with_parts(config, Arc::new(catalog), assistant))
    }

    pub fn with_parts(
        config: StorefrontConfig,
        catalog: Arc<Catalog>,
        assistant: Arc<dyn SuggestionProvider>,
    ) -> Self {
        let state = AppState::new(catalog, config.notifications.max_toasts);
        info!(
            assistant = assistant.name(),
            max_toasts = ?config.notifications.max_toasts,
            "Storefront initialized"
        );
        Storefront {
            store: StoreState::new(state),
            config: Arc::new(config),
            tasks: TaskRegistry::new(),
            assistant,
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn tasks(&self) -> &TaskRegistry {
        &self.tasks
    }

    pub fn assistant(&self) -> Arc<dyn SuggestionProvider> {
        Arc::clone(&self.assistant)
    }

    /// Read access to the root state.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AppState) -> R,
    {
        self.store.with_state(f)
    }

    /// Write access to the root state; effects are applied after unlock.
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut AppState) -> R,
    {
        let (result, effects) = self.store.with_state_mut(f);
        self.apply(effects);
        result
    }

    fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ToastShown(id) => self.arm_toast(id),
                Effect::ToastRemoved(id) => {
                    self.tasks.cancel_toast(id);
                }
                Effect::ViewLeft(view) => {
                    self.tasks.abort_view(view);
                }
            }
        }
    }

    fn arm_toast(&self, id: ToastId) {
        let ttl = self.config.timing.toast_ttl();
        let this = self.clone();
        self.tasks.schedule_toast(id, async move {
            tokio::time::sleep(ttl).await;
            let expired = this.store.with_state_mut(|s| s.expire_toast(id)).0;
            this.tasks.forget_toast(id);
            if expired {
                debug!(toast_id = id, "Toast expired");
            }
        });
    }

    /// Pushes a toast and starts its expiry timer.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> ToastId {
        self.update(|s| s.notify(message, severity))
    }

    /// Shows an error as a toast and hands it back.
    pub fn report(&self, err: ApiError) -> ApiError {
        debug!(code = ?err.code, message = %err.message, "Command rejected");
        self.notify(err.message.clone(), err.severity());
        err
    }

    /// Passes a command result through, showing any error as a toast.
    pub fn surface<T>(&self, result: ApiResult<T>) -> ApiResult<T> {
        result.map_err(|e| self.report(e))
    }

    pub fn navigate(&self, view: View) -> Transition {
        self.update(|s| s.navigate(view))
    }

    pub fn current_view(&self) -> View {
        self.read(AppState::current_view)
    }

    /// Spawns a flow owned by `view`; leaving `view` aborts it.
    ///
    /// The flow must still check its view epoch before committing, since
    /// the view can change between starting the flow and this call.
    pub(crate) fn spawn_flow<Fut>(&self, name: &'static str, view: View, flow: Fut)
    where
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        self.tasks.spawn_scoped(view, name, flow);
    }

    pub fn snapshot(&self) -> StateSnapshot {
        self.read(|s| StateSnapshot::from(s))
    }

    /// Aborts every flow and toast timer.
    pub fn shutdown(&self) {
        self.tasks.shutdown();
        info!("Storefront shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn storefront() -> Storefront {
        let mut config = StorefrontConfig::default();
        config.notifications.max_toasts = Some(2);
        Storefront::new(config).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_expires_after_ttl() {
        let app = storefront();
        let id = app.notify("Đã đăng xuất", Severity::Info);

        tokio::time::sleep(Duration::from_millis(2_900)).await;
        assert!(app.read(|s| s.toasts().iter().any(|t| t.id == id)));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(app.read(|s| s.toasts().is_empty()));
        assert_eq!(app.tasks().pending_toast_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_cancels_timer() {
        let app = storefront();
        let id = app.notify("x", Severity::Info);
        assert_eq!(app.tasks().pending_toast_timers(), 1);

        assert!(app.update(|s| s.dismiss_toast(id)));
        assert_eq!(app.tasks().pending_toast_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_eviction_cancels_oldest_timer() {
        let app = storefront();
        let first = app.notify("1", Severity::Info);
        app.notify("2", Severity::Info);
        app.notify("3", Severity::Info);

        assert_eq!(app.tasks().pending_toast_timers(), 2);
        assert!(app.read(|s| s.toasts().iter().all(|t| t.id != first)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_surface_turns_errors_into_toasts() {
        let app = storefront();
        let result: ApiResult<()> = app.surface(Err(ApiError::unavailable("Sắp có")));
        assert!(result.is_err());

        let toasts = app.read(|s| s.toasts().to_vec());
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "Sắp có");
        assert_eq!(toasts[0].severity, Severity::Info);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_timers() {
        let app = storefront();
        app.notify("x", Severity::Info);
        app.shutdown();

        tokio::time::sleep(Duration::from_millis(5_000)).await;
        assert_eq!(app.read(|s| s.toasts().len()), 1);
    }
}
