//! # Auth Commands
//!
//! ## Login Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  login(email, password)                                                 │
//! │     │                                                                   │
//! │     ├── blank field ──────► error toast, nothing else                   │
//! │     ├── already pending ──► BUSY                                        │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  login_pending = true ── sleep(login_delay) ──┐                         │
//! │                                                │ view left? ─► dropped  │
//! │                                                ▼                        │
//! │        sign in as demo name, welcome toast, navigate(Landing)           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use monngon_core::validation::validate_credentials;
use monngon_core::{Severity, View};

use crate::error::{ApiError, ApiResult};
use crate::messages;
use crate::state::AppState;
use crate::storefront::Storefront;

/// Starts the simulated login.
///
/// No credential check happens: any non-blank pair signs in as the
/// configured demo name.
pub fn login(app: &Storefront, email: &str, password: &str) -> ApiResult<()> {
    debug!(email = %email, "login command");
    app.surface(start_login(app, email, password))
}

fn start_login(app: &Storefront, email: &str, password: &str) -> ApiResult<()> {
    validate_credentials(email, password)
        .map_err(|_| ApiError::validation(messages::LOGIN_MISSING_FIELDS))?;

    let (view, epoch) = app.update(|s| {
        if s.flows.login_pending {
            return Err(ApiError::busy(messages::LOGIN_IN_PROGRESS));
        }
        s.flows.login_pending = true;
        Ok((s.current_view(), s.view_epoch()))
    })?;

    let delay = app.config().timing.login_delay();
    let display_name = app.config().session.demo_display_name.clone();
    let this = app.clone();
    app.spawn_flow("login", view, async move {
        tokio::time::sleep(delay).await;
        this.update(|s| complete_login(s, epoch, &display_name));
    });

    Ok(())
}

fn complete_login(state: &mut AppState, epoch: u64, display_name: &str) -> bool {
    if !state.is_current_epoch(epoch) || !state.flows.login_pending {
        debug!("Login finished after its view was left, dropping");
        return false;
    }

    state.flows.login_pending = false;
    state.session.sign_in(display_name);
    state.notify(messages::welcome(display_name), Severity::Success);
    state.navigate(View::Landing);
    info!(display_name = %display_name, "Login completed");
    true
}

/// Provider buttons (Google, Facebook) are not wired up.
pub fn social_login(app: &Storefront, provider: &str) -> ApiResult<()> {
    debug!(provider = %provider, "social_login command");
    app.surface(Err(ApiError::unavailable(messages::social_login_unavailable(provider))))
}

/// Signs out, empties the cart and returns to the landing page.
pub fn logout(app: &Storefront) {
    debug!("logout command");
    app.update(|s| {
        s.session.sign_out();
        s.cart.clear();
        s.navigate(View::Landing);
        s.notify(messages::LOGGED_OUT, Severity::Info);
    });
    info!("Logged out");
}

/// Saves a new display name from the profile page.
///
/// ## Returns
/// The stored (trimmed) name.
pub fn save_profile(app: &Storefront, display_name: &str) -> ApiResult<String> {
    debug!(display_name = %display_name, "save_profile command");

    let result = app.update(|s| {
        if s.session.is_guest() {
            return Err(ApiError::invalid_state(messages::PROFILE_REQUIRES_LOGIN));
        }
        let stored = s.session.rename(display_name)?.to_string();
        s.notify(messages::PROFILE_SAVED, Severity::Success);
        Ok(stored)
    });

    app.surface(result)
}
