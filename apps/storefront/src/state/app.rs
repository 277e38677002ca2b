//! # Root Application State
//!
//! Single owner of everything mutable in the storefront.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  StoreState = Arc<Mutex<AppState>>                                      │
//! │                                                                         │
//! │  AppState                                                               │
//! │  ├── navigator        current View                                      │
//! │  ├── session          display name (empty = guest)                      │
//! │  ├── cart             Cart aggregate                                    │
//! │  ├── toasts           ToastQueue (optionally capped)                    │
//! │  ├── favorites        restaurant ids                                    │
//! │  ├── flows            login / checkout / suggestion in-progress flags   │
//! │  ├── suggestion       last assistant reply (view-scoped)               │
//! │  ├── last_order       most recent OrderConfirmation                     │
//! │  ├── merchant         Some(..) only while on MerchantDashboard          │
//! │  └── effects          side effects for the shell to apply after unlock  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## View Teardown
//! Every flow is scoped to the view current when it started, and leaving a
//! view aborts its flows. So whenever the view changes, every in-progress
//! flag belongs to the view being left and is reset along with the
//! suggestion text. `view_epoch` changes with every transition; a flow
//! that wakes up after its view was left sees a different epoch and does
//! nothing.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

use monngon_core::{
    Cart, CartItem, CartTotals, Catalog, MerchantState, Navigator, OrderConfirmation, Session,
    Severity, Toast, ToastId, ToastQueue, View,
};

/// Side effect produced under the state lock, applied by the shell after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// A toast was shown and needs its expiry timer.
    ToastShown(ToastId),
    /// A toast left the queue early (dismissed or evicted).
    ToastRemoved(ToastId),
    /// The view changed; tasks scoped to it must be aborted.
    ViewLeft(View),
}

/// In-progress markers of the simulated flows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowFlags {
    pub login_pending: bool,
    pub checkout_processing: bool,
    pub suggestion_loading: bool,
}

/// Result of a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transition {
    pub previous: View,
    pub current: View,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

#[derive(Debug)]
pub struct AppState {
    catalog: Arc<Catalog>,
    navigator: Navigator,
    view_epoch: u64,
    pub session: Session,
    pub cart: Cart,
    toasts: ToastQueue,
    pub favorites: BTreeSet<String>,
    pub selected_restaurant: Option<String>,
    pub menu_category: Option<String>,
    pub flows: FlowFlags,
    pub suggestion: Option<String>,
    pub last_order: Option<OrderConfirmation>,
    merchant: Option<MerchantState>,
    effects: Vec<Effect>,
}

impl AppState {
    /// `max_toasts` caps the toast queue; `None` leaves it unbounded.
    pub fn new(catalog: Arc<Catalog>, max_toasts: Option<usize>) -> Self {
        let favorites = catalog.seeded_favorites().map(str::to_string).collect();
        AppState {
            catalog,
            navigator: Navigator::new(),
            view_epoch: 0,
            session: Session::guest(),
            cart: Cart::new(),
            toasts: ToastQueue::with_limit(max_toasts),
            favorites,
            selected_restaurant: None,
            menu_category: None,
            flows: FlowFlags::default(),
            suggestion: None,
            last_order: None,
            merchant: None,
            effects: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_view(&self) -> View {
        self.navigator.current()
    }

    pub fn view_epoch(&self) -> u64 {
        self.view_epoch
    }

    /// True while still on the view entered at `epoch`.
    pub fn is_current_epoch(&self, epoch: u64) -> bool {
        self.view_epoch == epoch
    }

    /// Switches the current view and tears down the one being left.
    ///
    /// Navigating to the view already shown changes nothing.
    pub fn navigate(&mut self, view: View) -> Transition {
        let previous = self.navigator.navigate(view);
        let transition = Transition {
            previous,
            current: view,
        };
        if !transition.changed() {
            return transition;
        }

        self.view_epoch += 1;
        self.flows = FlowFlags::default();
        self.suggestion = None;

        if previous == View::MerchantDashboard {
            self.merchant = None;
        }
        if view == View::MerchantDashboard {
            self.merchant = Some(MerchantState::seeded(&self.catalog));
        }

        self.effects.push(Effect::ViewLeft(previous));
        debug!(from = %previous, to = %view, epoch = self.view_epoch, "View changed");
        transition
    }

    // -------------------------------------------------------------------------
    // Toasts
    // -------------------------------------------------------------------------

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> ToastId {
        self.notify_at(message, severity, Utc::now())
    }

    pub fn notify_at(&mut self, message: impl Into<String>, severity: Severity, now: DateTime<Utc>) -> ToastId {
        let pushed = self.toasts.push(message, severity, now);
        for evicted in &pushed.evicted {
            self.effects.push(Effect::ToastRemoved(*evicted));
        }
        self.effects.push(Effect::ToastShown(pushed.id));
        pushed.id
    }

    /// Removes a toast before its timer fires.
    pub fn dismiss_toast(&mut self, id: ToastId) -> bool {
        let removed = self.toasts.dismiss(id);
        if removed {
            self.effects.push(Effect::ToastRemoved(id));
        }
        removed
    }

    /// Removes a toast whose timer has fired.
    pub fn expire_toast(&mut self, id: ToastId) -> bool {
        self.toasts.dismiss(id)
    }

    pub fn toasts(&self) -> &[Toast] {
        self.toasts.toasts()
    }

    // -------------------------------------------------------------------------
    // Merchant
    // -------------------------------------------------------------------------

    pub fn merchant(&self) -> Option<&MerchantState> {
        self.merchant.as_ref()
    }

    pub fn merchant_mut(&mut self) -> Option<&mut MerchantState> {
        self.merchant.as_mut()
    }

    /// Drains the effects recorded since the last call.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}

// =============================================================================
// Shared Handle
// =============================================================================

/// Thread-safe handle to the root state.
///
/// The lock is held only for the closure; never across an await.
#[derive(Debug, Clone)]
pub struct StoreState {
    inner: Arc<Mutex<AppState>>,
}

impl StoreState {
    pub fn new(state: AppState) -> Self {
        StoreState {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Executes a function with read access to the state.
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&AppState) -> R,
    {
        let state = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Executes a function with write access to the state.
    ///
    /// ## Returns
    /// The closure's result and the effects it recorded.
    pub fn with_state_mut<F, R>(&self, f: F) -> (R, Vec<Effect>)
    where
        F: FnOnce(&mut AppState) -> R,
    {
        let mut state = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let result = f(&mut state);
        (result, state.take_effects())
    }
}

// =============================================================================
// Snapshot
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Everything the presentation layer renders from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    pub view: View,
    pub title: &'static str,
    pub shows_navbar: bool,
    pub display_name: Option<String>,
    pub cart: CartSnapshot,
    pub toasts: Vec<Toast>,
    pub favorites: Vec<String>,
    pub selected_restaurant: Option<String>,
    pub menu_category: Option<String>,
    pub flows: FlowFlags,
    pub suggestion: Option<String>,
    pub last_order: Option<OrderConfirmation>,
    pub merchant: Option<MerchantState>,
}

impl From<&AppState> for StateSnapshot {
    fn from(state: &AppState) -> Self {
        let view = state.current_view();
        StateSnapshot {
            view,
            title: view.title(),
            shows_navbar: view.shows_navbar(),
            display_name: state.session.display_name().map(str::to_string),
            cart: CartSnapshot::from(&state.cart),
            toasts: state.toasts().to_vec(),
            favorites: state.favorites.iter().cloned().collect(),
            selected_restaurant: state.selected_restaurant.clone(),
            menu_category: state.menu_category.clone(),
            flows: state.flows,
            suggestion: state.suggestion.clone(),
            last_order: state.last_order.clone(),
            merchant: state.merchant.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Arc::new(Catalog::seeded().unwrap()), Some(3))
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        assert_eq!(state.current_view(), View::Landing);
        assert!(state.session.is_guest());
        assert!(state.cart.is_empty());
        assert!(state.toasts().is_empty());
        assert!(state.favorites.contains("1"));
        assert!(state.merchant().is_none());
    }

    #[test]
    fn test_navigate_resets_transient_state() {
        let mut state = state();
        state.flows.suggestion_loading = true;
        state.suggestion = Some("Phở".to_string());
        let epoch = state.view_epoch();

        let t = state.navigate(View::Checkout);
        assert_eq!(t.previous, View::Landing);
        assert!(t.changed());
        assert_eq!(state.flows, FlowFlags::default());
        assert!(state.suggestion.is_none());
        assert!(!state.is_current_epoch(epoch));
        assert_eq!(state.take_effects(), vec![Effect::ViewLeft(View::Landing)]);
    }

    #[test]
    fn test_navigate_to_same_view_keeps_state() {
        let mut state = state();
        state.flows.suggestion_loading = true;
        let epoch = state.view_epoch();

        assert!(!state.navigate(View::Landing).changed());
        assert!(state.flows.suggestion_loading);
        assert!(state.is_current_epoch(epoch));
        assert!(state.take_effects().is_empty());
    }

    #[test]
    fn test_merchant_state_lives_with_dashboard() {
        let mut state = state();
        state.navigate(View::MerchantDashboard);
        state.merchant_mut().unwrap().confirm(1).unwrap();
        state.merchant_mut().unwrap().delete_menu_item("m1").unwrap();

        state.navigate(View::Landing);
        assert!(state.merchant().is_none());

        state.navigate(View::MerchantDashboard);
        let merchant = state.merchant().unwrap();
        assert_eq!(merchant.pending_count(), 1);
        assert_eq!(merchant.menu_items().len(), 3);

        // The catalog never sees dashboard edits
        assert!(state.catalog().menu_item("m1").is_ok());
    }

    #[test]
    fn test_notify_records_eviction() {
        let mut state = state();
        let first = state.notify("1", Severity::Info);
        state.notify("2", Severity::Info);
        state.notify("3", Severity::Info);
        state.take_effects();

        let fourth = state.notify("4", Severity::Success);
        assert_eq!(
            state.take_effects(),
            vec![Effect::ToastRemoved(first), Effect::ToastShown(fourth)]
        );
        assert_eq!(state.toasts().len(), 3);
    }

    #[test]
    fn test_dismiss_and_expire() {
        let mut state = state();
        let id = state.notify("x", Severity::Info);
        let other = state.notify("y", Severity::Info);
        state.take_effects();

        assert!(state.dismiss_toast(id));
        assert_eq!(state.take_effects(), vec![Effect::ToastRemoved(id)]);
        assert!(!state.dismiss_toast(id));
        assert!(state.take_effects().is_empty());

        assert!(state.expire_toast(other));
        assert!(state.take_effects().is_empty());
        assert!(state.toasts().is_empty());
    }

    #[test]
    fn test_store_state_returns_effects() {
        let store = StoreState::new(state());
        let (id, effects) = store.with_state_mut(|s| s.notify("Đã đăng xuất", Severity::Info));
        assert_eq!(effects, vec![Effect::ToastShown(id)]);
        assert_eq!(store.with_state(|s| s.toasts().len()), 1);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let mut state = state();
        let pho = state.catalog().menu_item("m1").unwrap().clone();
        state.cart.add_item(&pho);
        let json = serde_json::to_value(StateSnapshot::from(&state)).unwrap();

        assert_eq!(json["view"], "landing");
        assert_eq!(json["showsNavbar"], true);
        assert_eq!(json["cart"]["totals"]["totalQuantity"], 1);
        assert_eq!(json["flows"]["checkoutProcessing"], false);
        assert!(json["displayName"].is_null());
    }
}
