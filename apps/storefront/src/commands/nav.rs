//! # Navigation Commands

use serde::Serialize;
use tracing::debug;

use monngon_core::View;

use crate::storefront::Storefront;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub view: View,
    pub title: &'static str,
    pub shows_navbar: bool,
    pub previous: Option<View>,
}

impl ViewResponse {
    fn new(view: View, previous: Option<View>) -> Self {
        ViewResponse {
            view,
            title: view.title(),
            shows_navbar: view.shows_navbar(),
            previous,
        }
    }
}

/// Switches to `view`. Always succeeds.
///
/// Leaving a view aborts its pending flows (an order not yet placed, a
/// login not yet completed) and resets its transient state.
pub fn navigate(app: &Storefront, view: View) -> ViewResponse {
    debug!(view = %view, "navigate command");
    let transition = app.navigate(view);
    ViewResponse::new(transition.current, Some(transition.previous))
}

pub fn current_view(app: &Storefront) -> ViewResponse {
    ViewResponse::new(app.current_view(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::storefront;

    #[tokio::test]
    async fn test_navigate_reports_previous() {
        let app = storefront();
        let response = navigate(&app, View::Auth);

        assert_eq!(response.previous, Some(View::Landing));
        assert_eq!(response.view, View::Auth);
        assert!(!response.shows_navbar);
        assert_eq!(current_view(&app).view, View::Auth);
    }

    #[tokio::test]
    async fn test_navigate_everywhere() {
        let app = storefront();
        for view in View::ALL {
            assert_eq!(navigate(&app, view).view, view);
        }
        assert_eq!(navigate(&app, View::Landing).previous, Some(View::NotFound));
    }
}
