//! # Session
//!
//! Who is using the storefront. An empty display name means guest.
//!
//! There is no token, no expiry and no server round-trip: signing in just
//! records the name handed back by the simulated login flow.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::validation::{validate_display_name, ValidationResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    display_name: String,
}

impl Session {
    /// A guest session.
    pub fn guest() -> Self {
        Self::default()
    }

    pub fn is_guest(&self) -> bool {
        self.display_name.is_empty()
    }

    /// The display name, `None` for guests.
    pub fn display_name(&self) -> Option<&str> {
        if self.is_guest() {
            None
        } else {
            Some(&self.display_name)
        }
    }

    pub fn sign_in(&mut self, display_name: impl Into<String>) {
        self.display_name = display_name.into();
    }

    pub fn sign_out(&mut self) {
        self.display_name.clear();
    }

    /// Changes the display name from the profile page.
    ///
    /// ## Returns
    /// The name actually stored (trimmed).
    pub fn rename(&mut self, name: &str) -> ValidationResult<&str> {
        self.display_name = validate_display_name(name)?;
        Ok(&self.display_name)
    }
}
