//! # Navigation
//!
//! The closed set of screens and the controller holding the current one.
//!
//! ## Transition Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  One state variable, total transition function:                         │
//! │                                                                         │
//! │      navigate(v) : View × View → View      (always succeeds)           │
//! │                                                                         │
//! │  No guard, no history stack, no deep links. "Back" is the caller        │
//! │  navigating to a view it already knows (e.g. Exit Merchant → Landing). │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// An application screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Landing,
    Auth,
    MapDiscovery,
    SearchResults,
    RestaurantDetail,
    Checkout,
    OrderSuccess,
    Profile,
    MerchantDashboard,
    NotFound,
}

impl View {
    pub const ALL: [View; 10] = [
        View::Landing,
        View::Auth,
        View::MapDiscovery,
        View::SearchResults,
        View::RestaurantDetail,
        View::Checkout,
        View::OrderSuccess,
        View::Profile,
        View::MerchantDashboard,
        View::NotFound,
    ];

    /// Machine name used on the wire and in the console.
    pub const fn as_str(&self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Auth => "auth",
            View::MapDiscovery => "map_discovery",
            View::SearchResults => "search_results",
            View::RestaurantDetail => "restaurant_detail",
            View::Checkout => "checkout",
            View::OrderSuccess => "order_success",
            View::Profile => "profile",
            View::MerchantDashboard => "merchant_dashboard",
            View::NotFound => "not_found",
        }
    }

    /// Screen heading.
    pub const fn title(&self) -> &'static str {
        match self {
            View::Landing => "Trang chủ",
            View::Auth => "Đăng nhập",
            View::MapDiscovery => "Bản đồ",
            View::SearchResults => "Nhà hàng",
            View::RestaurantDetail => "Thực đơn",
            View::Checkout => "Giỏ hàng",
            View::OrderSuccess => "Đặt hàng thành công",
            View::Profile => "Hồ sơ",
            View::MerchantDashboard => "Quản lý cửa hàng",
            View::NotFound => "Không tìm thấy trang",
        }
    }

    /// The auth screen is full-page; every other screen has the navbar.
    pub const fn shows_navbar(&self) -> bool {
        !matches!(self, View::Auth)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = String;

    /// Accepts the machine name, with `-` or `_` separators, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "home" => Ok(View::Landing),
            "login" => Ok(View::Auth),
            "map" => Ok(View::MapDiscovery),
            "search" | "restaurants" => Ok(View::SearchResults),
            "cart" => Ok(View::Checkout),
            "merchant" => Ok(View::MerchantDashboard),
            other => View::ALL
                .into_iter()
                .find(|v| v.as_str() == other)
                .ok_or_else(|| format!("Unknown view: {}", s)),
        }
    }
}

/// Holds the current view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigator {
    current: View,
}

impl Navigator {
    /// Starts on the landing screen.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Sets the current view unconditionally.
    ///
    /// ## Returns
    /// The view that was current before the call.
    pub fn navigate(&mut self, view: View) -> View {
        std::mem::replace(&mut self.current, view)
    }
}
