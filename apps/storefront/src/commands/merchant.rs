//! # Merchant Dashboard Commands
//!
//! Only valid while the dashboard is the current view; the dashboard state
//! is created on entry and thrown away on exit.

use tracing::{debug, info};

use monngon_core::{
    BookingAction, BookingStatus, BookingTransition, MenuItem, MerchantState, MerchantTab, Severity,
};

use crate::error::{ApiError, ApiResult};
use crate::messages;
use crate::state::AppState;
use crate::storefront::Storefront;

fn dashboard(state: &mut AppState) -> ApiResult<&mut MerchantState> {
    state
        .merchant_mut()
        .ok_or_else(|| ApiError::invalid_state(messages::MERCHANT_NOT_OPEN))
}

/// Current dashboard contents.
pub fn merchant_dashboard(app: &Storefront) -> ApiResult<MerchantState> {
    let result = app.read(|s| {
        s.merchant()
            .cloned()
            .ok_or_else(|| ApiError::invalid_state(messages::MERCHANT_NOT_OPEN))
    });
    app.surface(result)
}

pub fn select_tab(app: &Storefront, tab: MerchantTab) -> ApiResult<MerchantTab> {
    debug!(tab = %tab, "select_tab command");
    let result = app.update(|s| {
        let merchant = dashboard(s)?;
        merchant.select_tab(tab);
        Ok::<_, ApiError>(merchant.tab)
    });
    app.surface(result)
}

/// Accepts a pending table booking.
pub fn confirm_booking(app: &Storefront, booking_id: u32) -> ApiResult<BookingTransition> {
    decide_booking(app, booking_id, BookingAction::Confirm)
}

/// Declines a pending table booking.
pub fn reject_booking(app: &Storefront, booking_id: u32) -> ApiResult<BookingTransition> {
    decide_booking(app, booking_id, BookingAction::Reject)
}

/// Settled bookings are left alone without a toast.
fn decide_booking(app: &Storefront, booking_id: u32, action: BookingAction) -> ApiResult<BookingTransition> {
    debug!(booking_id, ?action, "booking decision command");

    let result = app.update(|s| {
        let transition = dashboard(s)?.apply(booking_id, action)?;
        match transition {
            BookingTransition::Applied(BookingStatus::Confirmed) => {
                s.notify(messages::BOOKING_CONFIRMED, Severity::Success);
            }
            BookingTransition::Applied(_) => {
                s.notify(messages::BOOKING_REJECTED, Severity::Info);
            }
            BookingTransition::AlreadySettled(status) => {
                debug!(booking_id, status = status.label(), "Booking already settled");
            }
        }
        Ok::<_, ApiError>(transition)
    });

    if let Ok(BookingTransition::Applied(status)) = &result {
        info!(booking_id, status = status.label(), "Booking updated");
    }
    app.surface(result)
}

/// Removes a dish from the dashboard's menu copy.
pub fn delete_menu_item(app: &Storefront, item_id: &str) -> ApiResult<MenuItem> {
    debug!(item_id = %item_id, "delete_menu_item command");
    let result = app.update(|s| {
        let removed = dashboard(s)?.delete_menu_item(item_id)?;
        s.notify(messages::MENU_ITEM_DELETED, Severity::Success);
        Ok::<_, ApiError>(removed)
    });
    app.surface(result)
}

/// "Thêm món mới" is not built yet.
pub fn add_menu_item(app: &Storefront) -> ApiResult<()> {
    app.surface(Err(ApiError::unavailable(messages::ADD_MENU_ITEM_UNAVAILABLE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::nav;
    use crate::commands::test_support::{last_message, storefront, toasts};
    use crate::error::ErrorCode;
    use monngon_core::View;

    fn open_dashboard() -> Storefront {
        let app = storefront();
        nav::navigate(&app, View::MerchantDashboard);
        app
    }

    #[tokio::test]
    async fn test_dashboard_requires_view() {
        let app = storefront();
        assert_eq!(merchant_dashboard(&app).unwrap_err().code, ErrorCode::InvalidState);
        assert_eq!(confirm_booking(&app, 1).unwrap_err().code, ErrorCode::InvalidState);
    }

    #[tokio::test]
    async fn test_confirm_then_reject_is_noop() {
        let app = open_dashboard();

        assert_eq!(
            confirm_booking(&app, 1).unwrap(),
            BookingTransition::Applied(BookingStatus::Confirmed)
        );
        assert_eq!(last_message(&app).unwrap(), messages::BOOKING_CONFIRMED);
        let count = toasts(&app).len();

        assert_eq!(
            reject_booking(&app, 1).unwrap(),
            BookingTransition::AlreadySettled(BookingStatus::Confirmed)
        );
        assert_eq!(toasts(&app).len(), count);
        let status = merchant_dashboard(&app).unwrap().booking(1).unwrap().status;
        assert_eq!(status, BookingStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_reject_pending_booking() {
        let app = open_dashboard();
        reject_booking(&app, 1).unwrap();

        assert_eq!(last_message(&app).unwrap(), messages::BOOKING_REJECTED);
        assert_eq!(toasts(&app)[0].severity, Severity::Info);
    }

    #[tokio::test]
    async fn test_unknown_booking_is_error_toast() {
        let app = open_dashboard();
        let err = confirm_booking(&app, 42).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(toasts(&app)[0].severity, Severity::Error);
    }

    #[tokio::test]
    async fn test_delete_menu_item() {
        let app = open_dashboard();
        let removed = delete_menu_item(&app, "m1").unwrap();

        assert_eq!(removed.id, "m1");
        assert_eq!(merchant_dashboard(&app).unwrap().menu_items().len(), 2);
        assert_eq!(last_message(&app).unwrap(), messages::MENU_ITEM_DELETED);
        assert!(app.read(|s| s.catalog().menu_item("m1").is_ok()));
    }

    #[tokio::test]
    async fn test_dashboard_is_fresh_on_reentry() {
        let app = open_dashboard();
        select_tab(&app, MerchantTab::Bookings).unwrap();
        confirm_booking(&app, 1).unwrap();
        delete_menu_item(&app, "m2").unwrap();

        nav::navigate(&app, View::Landing);
        nav::navigate(&app, View::MerchantDashboard);

        let merchant = merchant_dashboard(&app).unwrap();
        assert_eq!(merchant.tab, MerchantTab::Overview);
        assert_eq!(merchant.pending_count(), 1);
        assert_eq!(merchant.menu_items().len(), 3);
    }

    #[tokio::test]
    async fn test_add_menu_item_unavailable() {
        let app = open_dashboard();
        assert_eq!(add_menu_item(&app).unwrap_err().code, ErrorCode::UnavailableFeature);
        assert_eq!(last_message(&app).unwrap(), messages::ADD_MENU_ITEM_UNAVAILABLE);
    }
}
