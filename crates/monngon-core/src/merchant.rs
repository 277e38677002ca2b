//! # Merchant Dashboard State
//!
//! Menu and table-booking management for the restaurant owner.
//!
//! ## Booking State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                    confirm           ┌────────────┐                     │
//! │               ┌────────────────────► │ Confirmed  │ (terminal)          │
//! │   ┌─────────┐ │                      └────────────┘                     │
//! │   │ Pending │─┤                                                         │
//! │   └─────────┘ │      reject          ┌────────────┐                     │
//! │               └────────────────────► │ Cancelled  │ (terminal)          │
//! │                                      └────────────┘                     │
//! │                                                                         │
//! │  confirm/reject on a terminal booking changes nothing.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The dashboard state is scoped to the dashboard view: it is seeded on
//! entry and dropped on exit. Its menu is a separate copy of the catalog
//! menu and is never written back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::types::MenuItem;

// =============================================================================
// Booking
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, BookingStatus::Pending)
    }

    /// Badge label on the dashboard.
    pub const fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Chờ duyệt",
            BookingStatus::Confirmed => "Đã nhận",
            BookingStatus::Cancelled => "Đã hủy",
        }
    }
}

/// Merchant decision on a pending booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingAction {
    Confirm,
    Reject,
}

impl BookingAction {
    const fn target(&self) -> BookingStatus {
        match self {
            BookingAction::Confirm => BookingStatus::Confirmed,
            BookingAction::Reject => BookingStatus::Cancelled,
        }
    }
}

/// A table reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: u32,
    pub guest_name: String,
    /// Arrival time label, e.g. "19:00".
    pub arrival_time: String,
    pub guests: u32,
    /// Phone number with the middle digits masked.
    pub phone: String,
    pub status: BookingStatus,
}

/// Outcome of a booking action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingTransition {
    /// Pending booking moved to the new status.
    Applied(BookingStatus),
    /// Booking was already terminal; nothing changed.
    AlreadySettled(BookingStatus),
}

// =============================================================================
// Dashboard Tabs
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MerchantTab {
    #[default]
    Overview,
    Menu,
    Bookings,
    Reviews,
}

impl fmt::Display for MerchantTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MerchantTab::Overview => "overview",
            MerchantTab::Menu => "menu",
            MerchantTab::Bookings => "bookings",
            MerchantTab::Reviews => "reviews",
        };
        f.write_str(name)
    }
}

impl FromStr for MerchantTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overview" => Ok(MerchantTab::Overview),
            "menu" => Ok(MerchantTab::Menu),
            "bookings" => Ok(MerchantTab::Bookings),
            "reviews" => Ok(MerchantTab::Reviews),
            _ => Err(format!("Unknown tab: {}", s)),
        }
    }
}

// =============================================================================
// Merchant State
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantState {
    pub tab: MerchantTab,
    menu_items: Vec<MenuItem>,
    bookings: Vec<Booking>,
}

impl MerchantState {
    pub fn new(menu_items: Vec<MenuItem>, bookings: Vec<Booking>) -> Self {
        MerchantState {
            tab: MerchantTab::default(),
            menu_items,
            bookings,
        }
    }

    /// Fresh dashboard state: a copy of the catalog menu plus demo bookings.
    pub fn seeded(catalog: &Catalog) -> Self {
        MerchantState::new(catalog.menu().to_vec(), seed_bookings())
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn booking(&self, id: u32) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Pending)
            .count()
    }

    pub fn select_tab(&mut self, tab: MerchantTab) {
        self.tab = tab;
    }

    /// Removes a dish from the merchant's menu copy.
    pub fn delete_menu_item(&mut self, id: &str) -> CoreResult<MenuItem> {
        let index = self
            .menu_items
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| CoreError::MenuItemNotFound(id.to_string()))?;
        Ok(self.menu_items.remove(index))
    }

    /// Applies a merchant decision to a booking.
    pub fn apply(&mut self, id: u32, action: BookingAction) -> CoreResult<BookingTransition> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(CoreError::BookingNotFound(id))?;

        if booking.status.is_terminal() {
            return Ok(BookingTransition::AlreadySettled(booking.status));
        }

        booking.status = action.target();
        Ok(BookingTransition::Applied(booking.status))
    }

    pub fn confirm(&mut self, id: u32) -> CoreResult<BookingTransition> {
        self.apply(id, BookingAction::Confirm)
    }

    pub fn reject(&mut self, id: u32) -> CoreResult<BookingTransition> {
        self.apply(id, BookingAction::Reject)
    }
}

fn seed_bookings() -> Vec<Booking> {
    vec![
        Booking {
            id: 1,
            guest_name: "Nguyễn Văn A".to_string(),
            arrival_time: "19:00".to_string(),
            guests: 4,
            phone: "0912***789".to_string(),
            status: BookingStatus::Pending,
        },
        Booking {
            id: 2,
            guest_name: "Trần Thị B".to_string(),
            arrival_time: "19:30".to_string(),
            guests: 2,
            phone: "0988***123".to_string(),
            status: BookingStatus::Confirmed,
        },
    ]
}
