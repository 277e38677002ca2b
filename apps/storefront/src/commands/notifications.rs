//! # Notification Commands

use tracing::debug;

use monngon_core::{Toast, ToastId};

use crate::storefront::Storefront;

/// Toasts currently on screen, oldest first.
pub fn list_toasts(app: &Storefront) -> Vec<Toast> {
    app.read(|s| s.toasts().to_vec())
}

/// Closes a toast early. Unknown ids are ignored.
pub fn dismiss_toast(app: &Storefront, id: ToastId) -> bool {
    debug!(toast_id = id, "dismiss_toast command");
    app.update(|s| s.dismiss_toast(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::commands::test_support::storefront;
    use crate::state::StorefrontConfig;
    use monngon_core::Severity;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_before_expiry() {
        let app = storefront();
        let id = app.notify("Đã đăng xuất", Severity::Info);

        assert!(dismiss_toast(&app, id));
        assert!(!dismiss_toast(&app, id));
        assert!(list_toasts(&app).is_empty());

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert!(list_toasts(&app).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toasts_expire_independently() {
        let app = storefront();
        app.notify("first", Severity::Info);
        tokio::time::sleep(Duration::from_millis(1_000)).await;
        app.notify("second", Severity::Success);

        tokio::time::sleep(Duration::from_millis(2_500)).await;
        let remaining: Vec<String> = list_toasts(&app).into_iter().map(|t| t.message).collect();
        assert_eq!(remaining, vec!["second"]);

        tokio::time::sleep(Duration::from_millis(1_000)).await;
        assert!(list_toasts(&app).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_configured_cap_bounds_queue() {
        let mut config = StorefrontConfig::default();
        config.notifications.max_toasts = Some(3);
        let app = Storefront::new(config).unwrap();

        for i in 0..9 {
            app.notify(format!("toast {}", i), Severity::Info);
            assert!(list_toasts(&app).len() <= 3);
        }
        assert_eq!(app.tasks().pending_toast_timers(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_of_cart_toasts_all_visible_for_full_ttl() {
        let app = storefront();
        add_to_cart(&app, "m1").unwrap();
        for _ in 0..5 {
            add_to_cart(&app, "m3").unwrap();
        }
        assert_eq!(list_toasts(&app).len(), 6);

        tokio::time::sleep(Duration::from_millis(2_999)).await;
        assert_eq!(list_toasts(&app).len(), 6);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(list_toasts(&app).is_empty());
        assert_eq!(app.tasks().pending_toast_timers(), 0);
    }
}
